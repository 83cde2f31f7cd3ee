use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct AlertProps {
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    pub message: f::AttrValue,
    #[prop_or_default]
    pub variant: f::DaisyColor,
    #[prop_or_default]
    pub class: f::Classes,
}

/// One-line banner. Errors use `role="alert"` so they are announced at once.
#[f::function_component(Alert)]
pub fn alert(props: &AlertProps) -> f::Html {
    let mut classes = f::class_list(&["alert"], &props.class);
    classes.push(props.variant.class("alert"));
    let role = match props.variant {
        f::DaisyColor::Error => "alert",
        f::DaisyColor::Info | f::DaisyColor::Success | f::DaisyColor::Warning => "status",
    };
    f::html! {
        <div id={f::attr_value(&props.id)} class={classes} role={role}>
            <span class="alert-message">{ props.message.clone() }</span>
        </div>
    }
}
