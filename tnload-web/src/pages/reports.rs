use crate::components::{EmbedFrame, FrameKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReportsPageProps {
    pub table_url: AttrValue,
}

#[function_component(ReportsPage)]
pub fn reports_page(p: &ReportsPageProps) -> Html {
    html! {
        <section class="page reports" aria-labelledby="reports-title">
            <h1 id="reports-title" tabindex="-1">{ "Reports" }</h1>
            <p>{ "Reported projects and their TN load reductions." }</p>
            <EmbedFrame
                kind={FrameKind::Reports}
                src={p.table_url.clone()}
                title="Reported projects table"
                heading_id="reports-title"
            />
        </section>
    }
}
