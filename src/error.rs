use thiserror::Error;

#[derive(Debug, Error)]
pub enum BaseError {
    #[error("Cannot convert {field} value '{value}' to a number")]
    InputConversion { field: String, value: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Solver did not converge after {iterations} iterations (residual {residual:.3e})")]
    DidNotConverge { iterations: usize, residual: f64 },

    #[error("Singular system: milk and cream compositions do not determine a unique split")]
    SingularSystem,

    #[error("Infeasible target: {ingredient} would need {mass:.2} g")]
    Infeasible { ingredient: &'static str, mass: f64 },

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BaseError>;
