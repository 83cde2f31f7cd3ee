use crate::components::{EmbedFrame, FrameKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SubmitPageProps {
    pub form_url: AttrValue,
}

#[function_component(SubmitPage)]
pub fn submit_page(p: &SubmitPageProps) -> Html {
    html! {
        <section class="page submit" aria-labelledby="submit-title">
            <h1 id="submit-title" tabindex="-1">{ "Submit a Project" }</h1>
            <p>{ "Complete the form below to submit a project and its estimated TN load reduction." }</p>
            <EmbedFrame
                kind={FrameKind::Form}
                src={p.form_url.clone()}
                title="Project submission form"
                heading_id="submit-title"
            />
        </section>
    }
}
