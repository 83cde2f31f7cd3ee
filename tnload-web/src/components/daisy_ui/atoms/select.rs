use crate::components::daisy_ui::foundation as f;
#[cfg(target_arch = "wasm32")]
use f::TargetCast;

#[derive(Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: f::AttrValue,
    pub value: f::AttrValue,
}

impl SelectOption {
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            label: f::AttrValue::from(name.to_string()),
            value: f::AttrValue::from(name.to_string()),
        }
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct SelectProps {
    pub id: f::AttrValue,
    /// Leading empty-valued option that survives every repopulation.
    pub placeholder: f::AttrValue,
    pub options: Vec<SelectOption>,
    #[prop_or_default]
    pub value: Option<f::AttrValue>,
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
    pub on_change: f::Callback<f::AttrValue>,
}

#[f::function_component(Select)]
pub fn select(props: &SelectProps) -> f::Html {
    let mut class = f::class_list(&["form-select"], &props.class);
    if props.invalid {
        class.push(f::INVALID_CLASS);
    }
    let on_change = {
        let cb = props.on_change.clone();
        f::Callback::from(move |e: f::Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(sel) = e.target_dyn_into::<f::HtmlSelectElement>() {
                    cb.emit(sel.value().into());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &cb);
            }
        })
    };
    let selected = props.value.clone().unwrap_or_default();
    let describedby = props.invalid.then(|| f::feedback_id(&props.id));
    f::html! {
        <select
            ref={props.node_ref.clone()}
            id={props.id.clone()}
            name={props.id.clone()}
            class={class}
            required={props.required}
            disabled={props.disabled}
            aria-invalid={f::aria_invalid(props.invalid)}
            aria-describedby={describedby}
            onchange={on_change}
        >
            <option value="" selected={selected.is_empty()}>{ props.placeholder.clone() }</option>
            { for props.options.iter().map(|opt| {
                let is_selected = opt.value == selected;
                f::html! { <option value={opt.value.clone()} selected={is_selected}>{ opt.label.clone() }</option> }
            })}
        </select>
    }
}
