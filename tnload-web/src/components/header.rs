use crate::components::daisy_ui::{Navbar, Swap, ThemeController};
use crate::nav::MenuEvent;
use crate::router::Route;
use crate::theme::Theme;
use yew::prelude::*;

pub const MENU_ID: &str = "site-nav-links";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current: Route,
    pub menu_open: bool,
    pub theme: Theme,
    #[prop_or_default]
    pub on_menu: Callback<MenuEvent>,
    #[prop_or_default]
    pub on_navigate: Callback<Route>,
    #[prop_or_default]
    pub on_theme: Callback<Theme>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();

    #[cfg(target_arch = "wasm32")]
    {
        let on_menu = p.on_menu.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with(p.menu_open, move |open| {
            let listeners = if *open {
                document_listeners(&on_menu, &menu_ref, &toggle_ref)
            } else {
                Vec::new()
            };
            move || drop(listeners)
        });
    }

    let on_toggle = {
        let cb = p.on_menu.clone();
        Callback::from(move |_open: bool| cb.emit(MenuEvent::Toggle))
    };
    let on_close = {
        let cb = p.on_menu.clone();
        Callback::from(move |_: MouseEvent| cb.emit(MenuEvent::Toggle))
    };

    let mut links_class = classes!("nav-links");
    if p.menu_open {
        links_class.push("active");
    }

    let link_items = Route::NAV.into_iter().map(|route| {
        let onclick = {
            let on_navigate = p.on_navigate.clone();
            let on_menu = p.on_menu.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_menu.emit(MenuEvent::LinkClicked);
                on_navigate.emit(route);
            })
        };
        let current = route == p.current;
        html! {
            <li>
                <a
                    href={route.href()}
                    class={classes!("nav-link", current.then_some("current"))}
                    aria-current={current.then_some("page")}
                    onclick={onclick}
                >
                    { route.nav_label() }
                </a>
            </li>
        }
    });

    let brand = html! {
        <a class="brand" href={Route::Home.href()}>
            <span class="brand-mark" aria-hidden="true">{ "TN" }</span>
            <span class="brand-name">{ "TN Load Reduction Program" }</span>
        </a>
    };
    let links = html! {
        <div ref={menu_ref} id={MENU_ID} class={links_class}>
            <button type="button" class="nav-close btn btn-ghost" aria-label="Close menu" onclick={on_close}>
                <span aria-hidden="true">{ "×" }</span>
            </button>
            <ul>{ for link_items }</ul>
        </div>
    };
    let controls = html! {
        <>
            <ThemeController theme={p.theme} on_change={p.on_theme.clone()} />
            <Swap
                id="hamburger"
                class={classes!("hamburger", p.menu_open.then_some("active"))}
                active={p.menu_open}
                label="Toggle navigation menu"
                controls={MENU_ID}
                node_ref={toggle_ref}
                on={html! { <span class="icon-close">{ "×" }</span> }}
                off={html! { <span class="icon-bars"><span></span><span></span><span></span></span> }}
                on_toggle={on_toggle}
            />
        </>
    };

    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="skip-link sr-only">{ "Skip to main content" }</a>
            <Navbar brand={brand} links={links} controls={controls} />
        </header>
    }
}

/// Document-level listeners that dismiss the open menu.
#[cfg(target_arch = "wasm32")]
fn document_listeners(
    on_menu: &Callback<MenuEvent>,
    menu_ref: &NodeRef,
    toggle_ref: &NodeRef,
) -> Vec<crate::dom::Listener> {
    use wasm_bindgen::JsCast;

    let Some(document) = crate::dom::document() else {
        return Vec::new();
    };
    let mut listeners = Vec::new();

    let click = {
        let on_menu = on_menu.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        move |e: web_sys::Event| {
            let target = e.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = |node_ref: &NodeRef| {
                node_ref
                    .cast::<web_sys::Node>()
                    .is_some_and(|el| el.contains(target.as_ref()))
            };
            if !inside(&menu_ref) && !inside(&toggle_ref) {
                on_menu.emit(MenuEvent::OutsideClick);
            }
        }
    };
    listeners.extend(crate::dom::Listener::new(&document, "click", click));

    let keydown = {
        let on_menu = on_menu.clone();
        move |e: web_sys::Event| {
            if let Some(event) = e
                .dyn_ref::<web_sys::KeyboardEvent>()
                .and_then(|ke| crate::nav::event_for_key(&ke.key()))
            {
                on_menu.emit(event);
            }
        }
    };
    listeners.extend(crate::dom::Listener::new(&document, "keydown", keydown));
    listeners
}
