use crate::components::daisy_ui::foundation as f;
use f::TargetCast;

#[derive(f::Properties, PartialEq, Clone)]
pub struct InputProps {
    pub id: f::AttrValue,
    #[prop_or_default]
    pub value: f::AttrValue,
    #[prop_or_default]
    pub placeholder: Option<f::AttrValue>,
    #[prop_or_default]
    pub input_type: Option<f::AttrValue>,
    #[prop_or_default]
    pub min: Option<f::AttrValue>,
    #[prop_or_default]
    pub max: Option<f::AttrValue>,
    #[prop_or_default]
    pub step: Option<f::AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub node_ref: f::NodeRef,
    #[prop_or_default]
    pub oninput: f::Callback<String>,
}

#[f::function_component(Input)]
pub fn input(props: &InputProps) -> f::Html {
    let oninput = {
        let cb = props.oninput.clone();
        f::Callback::from(move |e: f::InputEvent| {
            if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let mut class = f::class_list(&["form-control"], &props.class);
    if props.invalid {
        class.push(f::INVALID_CLASS);
    }
    let input_type = props.input_type.clone().unwrap_or_else(|| "text".into());
    let describedby = props.invalid.then(|| f::feedback_id(&props.id));
    f::html! {
        <input
            ref={props.node_ref.clone()}
            id={props.id.clone()}
            name={props.id.clone()}
            class={class}
            type={input_type}
            value={props.value.clone()}
            placeholder={f::attr_value(&props.placeholder)}
            min={f::attr_value(&props.min)}
            max={f::attr_value(&props.max)}
            step={f::attr_value(&props.step)}
            required={props.required}
            disabled={props.disabled}
            aria-invalid={f::aria_invalid(props.invalid)}
            aria-describedby={describedby}
            oninput={oninput}
        />
    }
}
