use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/calculator")]
    Calculator,
    #[at("/submit")]
    Submit,
    #[at("/reports")]
    Reports,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Routes listed in the header, in display order.
    pub const NAV: [Self; 4] = [Self::Home, Self::Calculator, Self::Submit, Self::Reports];

    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Calculator => "Calculator",
            Self::Submit => "Submit a Project",
            Self::Reports => "Reports",
            Self::NotFound => "Not Found",
        }
    }

    /// Link target including the deployment base path.
    #[must_use]
    pub fn href(self) -> String {
        let base = crate::paths::router_base().unwrap_or_default();
        format!("{base}{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn paths_resolve_to_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/calculator"), Some(Route::Calculator));
        assert_eq!(Route::recognize("/submit"), Some(Route::Submit));
        assert_eq!(Route::recognize("/reports"), Some(Route::Reports));
    }

    #[test]
    fn nav_routes_link_to_their_paths() {
        for route in Route::NAV {
            assert!(route.href().ends_with(&route.to_path()));
        }
    }
}
