//! Centralized constants for the TN load reduction estimators.
//!
//! The point-source conversion chain is published with the program guidance;
//! keeping the factors together means the formula can only change through a
//! reviewed code change rather than through the JSON reference tables.

// Point-source conversion chain --------------------------------------------
/// Liters per thousand gallons of average discharge.
pub const PS_DISCHARGE_VOLUME_FACTOR: f64 = 3785.0;
/// Days of discharge per year.
pub const PS_DAYS_PER_YEAR: f64 = 365.0;
/// Divisor applied to the TN concentration (mg/L).
pub const PS_CONCENTRATION_DIVISOR: f64 = 1000.0;
/// Mass conversion factor applied before expressing the load in pounds.
pub const PS_MASS_FACTOR: f64 = 0.0011;
/// Pounds per short ton.
pub const PS_POUNDS_PER_TON: f64 = 2000.0;

// Percentages ---------------------------------------------------------------
pub const PERCENT_MIN: f64 = 0.0;
pub const PERCENT_MAX: f64 = 100.0;

// Presentation --------------------------------------------------------------
/// Decimal places used when rendering and copying results.
pub const RESULT_DECIMALS: u8 = 2;
pub const LOAD_UNIT_LABEL: &str = "lbs/year";
pub const NPS_RESULT_LABEL: &str = "NPS TN Load Reduction";
pub const PS_RESULT_LABEL: &str = "PS TN Load Reduction";

// Validation messages --------------------------------------------------------
pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_PERCENT_RANGE: &str = "Please enter a value between 0 and 100";
pub const MSG_NON_NEGATIVE: &str = "Please enter a non-negative number";

// Reference data --------------------------------------------------------------
pub const LAND_USE_DATA_PATH: &str = "calculator/tn_calculator_land_use.json";
pub const TREATMENT_METHOD_DATA_PATH: &str = "calculator/tn_calculator_treatment_methods.json";
pub const LAND_USE_FILE_NAME: &str = "tn_calculator_land_use.json";
pub const TREATMENT_METHOD_FILE_NAME: &str = "tn_calculator_treatment_methods.json";
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load options. Please try again later.";
