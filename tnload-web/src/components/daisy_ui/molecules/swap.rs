use crate::components::daisy_ui::foundation as f;

/// Two-state icon button. The parent owns the state; clicking only reports it.
#[derive(f::Properties, PartialEq, Clone)]
pub struct SwapProps {
    pub on: f::Html,
    pub off: f::Html,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub controls: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub node_ref: f::NodeRef,
    #[prop_or_default]
    pub on_toggle: f::Callback<bool>,
}

#[f::function_component(Swap)]
pub fn swap(props: &SwapProps) -> f::Html {
    let toggle = {
        let active = props.active;
        let on_toggle = props.on_toggle.clone();
        f::Callback::from(move |_: f::MouseEvent| on_toggle.emit(!active))
    };
    let mut class = f::class_list(&["swap"], &props.class);
    if props.active {
        class.push("swap-active");
    }
    f::html! {
        <button
            ref={props.node_ref.clone()}
            id={f::attr_value(&props.id)}
            type="button"
            class={class}
            onclick={toggle}
            aria-expanded={props.active.to_string()}
            aria-controls={f::attr_value(&props.controls)}
            aria-label={f::attr_value(&props.label)}
        >
            <span class="swap-on" aria-hidden={(!props.active).to_string()}>{ props.on.clone() }</span>
            <span class="swap-off" aria-hidden={props.active.to_string()}>{ props.off.clone() }</span>
        </button>
    }
}
