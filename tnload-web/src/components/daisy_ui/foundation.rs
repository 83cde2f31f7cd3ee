pub use web_sys::{Event, HtmlInputElement, HtmlSelectElement, InputEvent, KeyboardEvent, MouseEvent};
pub use yew::classes;
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, NodeRef, Properties, html};

/// Class applied to controls that failed validation.
pub const INVALID_CLASS: &str = "is-invalid";

/// Status colours used by alerts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisyColor {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl DaisyColor {
    /// `alert-error`, `alert-info`, and so on for the given component prefix.
    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        let tone = match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        };
        format!("{prefix}-{tone}")
    }
}

/// Component base classes followed by caller-supplied extras.
#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::from(base.to_vec());
    classes.extend(extra.clone());
    classes
}

#[must_use]
pub fn attr_value(opt: &Option<AttrValue>) -> Option<AttrValue> {
    opt.clone()
}

/// `aria-invalid` value for a control, omitted entirely while valid.
#[must_use]
pub fn aria_invalid(invalid: bool) -> Option<AttrValue> {
    invalid.then(|| AttrValue::from("true"))
}

/// Id of the inline feedback node rendered for `field_id`.
#[must_use]
pub fn feedback_id(field_id: &str) -> String {
    format!("{field_id}-feedback")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_prefix_component_class() {
        assert_eq!(DaisyColor::Error.class("alert"), "alert-error");
        assert_eq!(DaisyColor::default().class("alert"), "alert-info");
    }

    #[test]
    fn class_list_keeps_base_first() {
        let rendered = class_list(&["form-control"], &Classes::from("mb-3")).to_string();
        assert_eq!(rendered, "form-control mb-3");
    }

    #[test]
    fn invalid_helpers_render_expected_values() {
        assert_eq!(aria_invalid(true).as_deref(), Some("true"));
        assert_eq!(aria_invalid(false), None);
        assert_eq!(feedback_id("psAvgDischarge"), "psAvgDischarge-feedback");
    }
}
