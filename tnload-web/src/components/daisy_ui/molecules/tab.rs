use crate::components::daisy_ui::foundation as f;

#[derive(Clone, PartialEq)]
pub struct TabItem {
    pub id: f::AttrValue,
    pub label: f::AttrValue,
    pub content: f::Html,
}

/// Index of the tab a key press moves focus to, if the key navigates at all.
///
/// Arrow keys wrap around; `Home` and `End` jump to the first and last tab.
#[must_use]
pub fn key_target(current: usize, len: usize, key: &str) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match key {
        "ArrowRight" => Some((current + 1) % len),
        "ArrowLeft" => Some((current + len - 1) % len),
        "Home" => Some(0),
        "End" => Some(len - 1),
        _ => None,
    }
}

#[must_use]
pub fn tab_button_id(tab_id: &str) -> String {
    format!("{tab_id}-tab")
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct TabProps {
    pub tabs: Vec<TabItem>,
    pub active_id: f::AttrValue,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub on_change: f::Callback<f::AttrValue>,
}

#[f::function_component(Tab)]
pub fn tab(props: &TabProps) -> f::Html {
    let class = f::class_list(&["tabs", "tabs-box"], &props.class);
    let active_index = props
        .tabs
        .iter()
        .position(|tab| tab.id == props.active_id)
        .unwrap_or(0);

    let on_keydown = {
        let ids: Vec<f::AttrValue> = props.tabs.iter().map(|t| t.id.clone()).collect();
        let on_change = props.on_change.clone();
        f::Callback::from(move |e: f::KeyboardEvent| {
            if let Some(next) = key_target(active_index, ids.len(), &e.key()) {
                e.prevent_default();
                let id = ids[next].clone();
                crate::dom::focus_by_id(&tab_button_id(&id));
                on_change.emit(id);
            }
        })
    };

    f::html! {
        <div class="tab-container">
            <div class={class} role="tablist" aria-label={f::attr_value(&props.label)} onkeydown={on_keydown}>
                { for props.tabs.iter().enumerate().map(|(index, tab)| {
                    let selected = index == active_index;
                    let mut tab_class = f::classes!("tab");
                    if selected {
                        tab_class.push("tab-active");
                    }
                    let change = {
                        let on_change = props.on_change.clone();
                        let id = tab.id.clone();
                        f::Callback::from(move |_: f::MouseEvent| on_change.emit(id.clone()))
                    };
                    f::html! {
                        <button
                            id={tab_button_id(&tab.id)}
                            type="button"
                            class={tab_class}
                            role="tab"
                            aria-selected={selected.to_string()}
                            aria-controls={tab.id.clone()}
                            tabindex={if selected { "0" } else { "-1" }}
                            onclick={change}
                        >
                            { tab.label.clone() }
                        </button>
                    }
                })}
            </div>
            { for props.tabs.iter().enumerate().map(|(index, tab)| {
                let selected = index == active_index;
                let mut panel_class = f::classes!("tab-content");
                if selected {
                    panel_class.push("active");
                }
                f::html! {
                    <div
                        id={tab.id.clone()}
                        class={panel_class}
                        role="tabpanel"
                        aria-labelledby={tab_button_id(&tab.id)}
                        hidden={!selected}
                    >
                        { tab.content.clone() }
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{key_target, tab_button_id};

    #[test]
    fn arrows_wrap_around() {
        assert_eq!(key_target(0, 2, "ArrowRight"), Some(1));
        assert_eq!(key_target(1, 2, "ArrowRight"), Some(0));
        assert_eq!(key_target(0, 2, "ArrowLeft"), Some(1));
        assert_eq!(key_target(1, 3, "ArrowLeft"), Some(0));
    }

    #[test]
    fn home_and_end_jump_to_edges() {
        assert_eq!(key_target(2, 4, "Home"), Some(0));
        assert_eq!(key_target(0, 4, "End"), Some(3));
    }

    #[test]
    fn other_keys_and_empty_lists_do_nothing() {
        assert_eq!(key_target(0, 2, "Enter"), None);
        assert_eq!(key_target(0, 0, "ArrowRight"), None);
    }

    #[test]
    fn tab_button_ids_derive_from_panel_ids() {
        assert_eq!(tab_button_id("nps"), "nps-tab");
    }
}
