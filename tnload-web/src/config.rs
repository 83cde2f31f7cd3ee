//! Compile-time site configuration.
//!
//! Values come from environment variables read by the compiler so a static
//! deployment can be configured without a runtime settings file:
//!
//! - `PUBLIC_URL`: base path the site is served under.
//! - `TNLOAD_FORM_URL`: source of the embedded project submission form.
//! - `TNLOAD_TABLE_URL`: source of the embedded project table view.

use tnload_core::constants::{LAND_USE_DATA_PATH, TREATMENT_METHOD_DATA_PATH};

const DEFAULT_FORM_URL: &str = "https://app.smartsheet.com/sheets/YourFormSheetId";
const DEFAULT_TABLE_URL: &str = "https://app.smartsheet.com/sheets/YourTableSheetId";

#[must_use]
pub fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

#[must_use]
pub fn form_embed_url() -> &'static str {
    option_env!("TNLOAD_FORM_URL").unwrap_or(DEFAULT_FORM_URL)
}

#[must_use]
pub fn table_embed_url() -> &'static str {
    option_env!("TNLOAD_TABLE_URL").unwrap_or(DEFAULT_TABLE_URL)
}

#[must_use]
pub fn land_use_data_url() -> String {
    crate::paths::asset_path(LAND_USE_DATA_PATH)
}

#[must_use]
pub fn treatment_method_data_url() -> String {
    crate::paths::asset_path(TREATMENT_METHOD_DATA_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_urls_point_at_calculator_tables() {
        assert!(land_use_data_url().ends_with("/calculator/tn_calculator_land_use.json"));
        assert!(
            treatment_method_data_url().ends_with("/calculator/tn_calculator_treatment_methods.json")
        );
    }

    #[test]
    fn embed_urls_are_absolute() {
        assert!(form_embed_url().starts_with("https://"));
        assert!(table_embed_url().starts_with("https://"));
    }
}
