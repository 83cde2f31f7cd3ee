use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    #[prop_or_default]
    pub on_navigate: Callback<Route>,
}

/// Shown for any path outside the four site routes.
#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    let link = |route: Route, label: &'static str| {
        let onclick = {
            let cb = props.on_navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                cb.emit(route);
            })
        };
        html! { <a class="btn btn-primary" href={route.href()} onclick={onclick}>{ label }</a> }
    };

    html! {
        <section class="page not-found" aria-labelledby="not-found-title">
            <h1 id="not-found-title">{ "Page not found" }</h1>
            <p>{ "That address is not part of the TN Load Reduction Program site." }</p>
            <div class="not-found-actions">
                { link(Route::Home, "Back to home") }
                { link(Route::Calculator, "Open the calculator") }
            </div>
        </section>
    }
}
