#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod handlers;
pub mod state;
pub mod view;

pub use state::{AppState, CalculatorTab, ReferenceStatus, use_app_state};

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    use_effect_with(*app_state.theme, |theme| {
        crate::theme::apply(*theme);
        || {}
    });

    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let on_navigate = Callback::from(move |target: Route| {
        if let Some(nav) = navigator.as_ref() {
            nav.push(&target);
        }
        crate::dom::scroll_to_top();
    });

    view::render_app(&app_state, route, &on_navigate)
}
