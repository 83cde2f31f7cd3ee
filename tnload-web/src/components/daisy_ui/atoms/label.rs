use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct LabelProps {
    pub for_input: f::AttrValue,
    pub text: f::AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Label)]
pub fn label(props: &LabelProps) -> f::Html {
    let class = f::class_list(&["form-label"], &props.class);
    f::html! {
        <label class={class} for={props.for_input.clone()}>
            { props.text.clone() }
            { if props.required {
                f::html! { <span class="required-marker" aria-hidden="true">{ " *" }</span> }
            } else {
                f::html! {}
            }}
        </label>
    }
}
