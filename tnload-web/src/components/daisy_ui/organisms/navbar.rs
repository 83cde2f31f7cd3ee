use crate::components::daisy_ui::foundation as f;

/// Site bar: brand on the left, a collapsible link region, trailing controls.
#[derive(f::Properties, PartialEq, Clone)]
pub struct NavbarProps {
    pub brand: f::Html,
    /// Link region; shown inline on wide screens, toggled on narrow ones.
    pub links: f::Html,
    #[prop_or_default]
    pub controls: Option<f::Html>,
    #[prop_or(f::AttrValue::from("Primary"))]
    pub label: f::AttrValue,
}

#[f::function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> f::Html {
    f::html! {
        <nav class="navbar site-nav" aria-label={props.label.clone()}>
            <div class="site-nav-brand">{ props.brand.clone() }</div>
            { props.links.clone() }
            if let Some(controls) = props.controls.clone() {
                <div class="site-nav-controls">{ controls }</div>
            }
        </nav>
    }
}
