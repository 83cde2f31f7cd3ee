use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    #[prop_or_default]
    pub on_navigate: Callback<Route>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let card = |route: Route, title: &'static str, body: &'static str| {
        let onclick = {
            let cb = props.on_navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                cb.emit(route);
            })
        };
        html! {
            <article class="card home-card">
                <h2>{ title }</h2>
                <p>{ body }</p>
                <a class="btn btn-primary" href={route.href()} onclick={onclick}>{ route.nav_label() }</a>
            </article>
        }
    };

    html! {
        <section class="page home" aria-labelledby="home-title">
            <h1 id="home-title">{ "Total Nitrogen Load Reduction Program" }</h1>
            <p class="lead">
                { "Estimate nitrogen load reductions for stormwater and wastewater projects, submit projects for credit, and review reported reductions." }
            </p>
            <div class="home-cards">
                { card(Route::Calculator, "Estimate a reduction", "Use the non-point source or point source calculator to estimate annual TN load reduction.") }
                { card(Route::Submit, "Submit a project", "Send project details and calculated reductions through the submission form.") }
                { card(Route::Reports, "View reports", "Browse reductions reported by participating projects.") }
            </div>
        </section>
    }
}
