use crate::components::daisy_ui::foundation as f;
use crate::theme::{self, Theme};

#[derive(f::Properties, PartialEq, Clone)]
pub struct ThemeControllerProps {
    pub theme: Theme,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<Theme>,
}

/// Light/dark toggle. Applies and stores the new theme before reporting it.
#[f::function_component(ThemeController)]
pub fn theme_controller(props: &ThemeControllerProps) -> f::Html {
    let class = f::class_list(&["btn", "btn-ghost", "theme-toggle"], &props.class);
    let on_click = {
        let current = props.theme;
        let cb = props.on_change.clone();
        f::Callback::from(move |_: f::MouseEvent| {
            let next = current.toggled();
            theme::persist(next);
            cb.emit(next);
        })
    };
    let icon = if props.theme.is_dark() { "☀" } else { "☾" };
    f::html! {
        <button
            id="theme-toggle"
            type="button"
            class={class}
            aria-label={props.theme.toggle_label()}
            aria-pressed={props.theme.is_dark().to_string()}
            title={props.theme.toggle_label()}
            onclick={on_click}
        >
            <span aria-hidden="true">{ icon }</span>
        </button>
    }
}
