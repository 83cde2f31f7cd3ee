use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct SkeletonProps {
    #[prop_or_default]
    pub height: Option<f::AttrValue>,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    /// Hidden from assistive technology once the real content is in place.
    #[prop_or_default]
    pub hidden: bool,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> f::Html {
    let class = f::class_list(&["skeleton-loader"], &props.class);
    let style = props
        .height
        .as_ref()
        .map(|h| format!("min-height:{h};"))
        .unwrap_or_default();
    f::html! {
        <div class={class} style={style} aria-hidden={props.hidden.to_string()} aria-busy={(!props.hidden).to_string()}>
            <div class="skeleton-bar"></div>
            <div class="skeleton-bar skeleton-bar--short"></div>
            <div class="skeleton-block"></div>
            { props.label.as_ref().map(|l| f::html! { <span class="sr-only">{ l.clone() }</span> }).unwrap_or_default() }
        </div>
    }
}
