//! Deployment base path handling.
//!
//! The site may be published under a sub-path (for example `/tn-load`), set at
//! build time through `PUBLIC_URL`. Asset URLs and the router basename are both
//! derived from it.

/// Normalised base path: no trailing slash, empty for root deployments.
fn base(raw: &str) -> &str {
    raw.trim().trim_end_matches('/')
}

fn join(raw_base: &str, relative: &str) -> String {
    format!("{}/{}", base(raw_base), relative.trim_start_matches('/'))
}

/// Absolute URL of a static asset such as a reference table.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join(crate::config::public_url(), relative)
}

/// Basename handed to the browser router, `None` at the domain root.
#[must_use]
pub fn router_base() -> Option<String> {
    let base = base(crate::config::public_url());
    (!base.is_empty()).then(|| base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_deployments_anchor_at_slash() {
        assert_eq!(
            asset_path("calculator/tn_calculator_land_use.json"),
            "/calculator/tn_calculator_land_use.json"
        );
        assert_eq!(router_base(), None);
    }

    #[test]
    fn sub_path_deployments_prefix_assets() {
        assert_eq!(join("/tn-load", "calculator/x.json"), "/tn-load/calculator/x.json");
        assert_eq!(join("/tn-load/", "/calculator/x.json"), "/tn-load/calculator/x.json");
        assert_eq!(base(" /tn-load/ "), "/tn-load");
    }
}
