/// Default target fat percentage of the finished base.
pub const DEFAULT_FAT_PCT: f64 = 12.0;

/// Default target sugar percentage of the finished base.
pub const DEFAULT_SUGAR_PCT: f64 = 20.0;

/// Default milk composition (whole milk).
pub const DEFAULT_MILK_FAT_PCT: f64 = 3.5;
pub const DEFAULT_MILK_SUGAR_PCT: f64 = 5.0;

/// Default cream composition (whipping cream).
pub const DEFAULT_CREAM_FAT_PCT: f64 = 30.0;
pub const DEFAULT_CREAM_SUGAR_PCT: f64 = 4.0;

/// Default mass of non-dairy liquid (coffee, liqueur, fruit juice).
pub const DEFAULT_EXTRA_LIQUID_G: f64 = 0.0;

/// Default number of egg yolks.
pub const DEFAULT_YOLK_COUNT: u32 = 0;

/// Typical mass of one large egg yolk in grams.
pub const DEFAULT_YOLK_MASS_G: f64 = 18.0;

/// Typical fat percentage of egg yolk.
pub const YOLK_FAT_PERCENTAGE: f64 = 27.0;

// ─────────────────────────────────────────────────────────────────────────────
// Numeric solver settings
// ─────────────────────────────────────────────────────────────────────────────

/// Maximum Newton iterations before giving up.
pub const MAX_ITERATIONS: usize = 100;

/// Relative residual tolerance, scaled by the total mass.
pub const RESIDUAL_TOLERANCE: f64 = 1e-9;

/// Relative step used for the forward-difference Jacobian.
pub const JACOBIAN_STEP: f64 = 1e-7;

/// Determinant magnitude below which the coefficient matrix is treated as singular.
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// Grams below zero tolerated before strict mode rejects a mass.
pub const FEASIBILITY_EPSILON: f64 = 1e-6;

// ─────────────────────────────────────────────────────────────────────────────
// Presentation
// ─────────────────────────────────────────────────────────────────────────────

/// Decimal places kept in a solution record.
pub const ROUND_DECIMALS: i32 = 2;

/// Tolerance used when reporting whether a closure holds.
pub const CLOSURE_TOLERANCE: f64 = 0.1;

/// Round a mass to `ROUND_DECIMALS` places.
pub fn round_mass(value: f64) -> f64 {
    let scale = 10_f64.powi(ROUND_DECIMALS);
    (value * scale).round() / scale
}
