use crate::components::daisy_ui::foundation as f;

/// Wraps one form control and renders its inline feedback node.
///
/// The feedback node is always present so `aria-describedby` on the control
/// resolves; it is empty while the field is valid.
#[derive(f::Properties, PartialEq, Clone)]
pub struct ValidatorProps {
    pub field_id: f::AttrValue,
    #[prop_or_default]
    pub message: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Validator)]
pub fn validator(props: &ValidatorProps) -> f::Html {
    let mut class = f::class_list(&["validator"], &props.class);
    if props.message.is_some() {
        class.push("was-validated");
    }
    let mut feedback_class = f::classes!("invalid-feedback");
    if props.message.is_some() {
        feedback_class.push("d-block");
    }
    f::html! {
        <div class={class}>
            { for props.children.iter() }
            <div id={f::feedback_id(&props.field_id)} class={feedback_class} aria-live="polite">
                { props.message.clone().unwrap_or_default() }
            </div>
        </div>
    }
}
