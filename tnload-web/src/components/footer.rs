use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer role="contentinfo" class="site-footer">
            <p>{ "TN Load Reduction Program" }</p>
            <p class="footer-note">
                { "Estimates are for planning purposes and do not replace a permit review." }
            </p>
        </footer>
    }
}
