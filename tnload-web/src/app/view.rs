use crate::app::handlers;
use crate::app::state::AppState;
use crate::components::{Footer, Header};
use crate::pages::{
    calculator::CalculatorPage, home::HomePage, not_found::NotFound, reports::ReportsPage,
    submit::SubmitPage,
};
use crate::router::Route;
use tnload_core::CalculationResult;
use yew::prelude::*;

fn render_page(state: &AppState, route: Route, on_navigate: &Callback<Route>) -> Html {
    match route {
        Route::Home => html! { <HomePage on_navigate={on_navigate.clone()} /> },
        Route::Calculator => {
            let on_select = {
                let state = state.clone();
                Callback::from(move |tab| handlers::select_tab(&state, tab))
            };
            let on_result = {
                let nps = state.nps_result.clone();
                let ps = state.ps_result.clone();
                Callback::from(move |result: CalculationResult| {
                    match crate::components::ui::calculator_tabs::tab_for(&result) {
                        crate::app::state::CalculatorTab::Nps => nps.set(Some(result)),
                        crate::app::state::CalculatorTab::Ps => ps.set(Some(result)),
                    }
                })
            };
            html! {
                <CalculatorPage
                    reference={(*state.reference).clone()}
                    active={*state.active_tab}
                    nps_result={(*state.nps_result).clone()}
                    ps_result={(*state.ps_result).clone()}
                    on_select={on_select}
                    on_result={on_result}
                />
            }
        }
        Route::Submit => html! { <SubmitPage form_url={crate::config::form_embed_url()} /> },
        Route::Reports => html! { <ReportsPage table_url={crate::config::table_embed_url()} /> },
        Route::NotFound => html! { <NotFound on_navigate={on_navigate.clone()} /> },
    }
}

/// Header, the page for `route`, and footer.
pub fn render_app(state: &AppState, route: Route, on_navigate: &Callback<Route>) -> Html {
    let on_menu = {
        let state = state.clone();
        Callback::from(move |event| handlers::menu_event(&state, event))
    };
    let on_theme = {
        let state = state.clone();
        Callback::from(move |theme| handlers::set_theme(&state, theme))
    };

    html! {
        <>
            <Header
                current={route}
                menu_open={*state.menu_open}
                theme={*state.theme}
                on_menu={on_menu}
                on_navigate={on_navigate.clone()}
                on_theme={on_theme}
            />
            <main id="main" role="main" tabindex="-1">
                { render_page(state, route, on_navigate) }
            </main>
            <Footer />
        </>
    }
}
