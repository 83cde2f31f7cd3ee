use crate::clipboard::{COPIED_LABEL, COPY_LABEL};
use tnload_core::CalculationResult;
use yew::prelude::*;

#[must_use]
pub fn copy_button_id(prefix: &str) -> String {
    format!("{prefix}-copy-btn")
}

/// Numbers copy clicks so only the latest one reverts the label.
#[derive(Debug, Default)]
struct CopyTicket(u32);

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl CopyTicket {
    fn issue(&mut self) -> u32 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    const fn is_current(&self, ticket: u32) -> bool {
        self.0 == ticket
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Id prefix shared by the card and its copy button (`nps` / `ps`).
    pub prefix: AttrValue,
    pub result: Option<CalculationResult>,
}

/// Result value with a "Copy Value" action; renders nothing until a result exists.
#[function_component(ResultCard)]
pub fn result_card(p: &Props) -> Html {
    let copied = use_state(|| false);
    let tickets = use_mut_ref(CopyTicket::default);

    let Some(result) = p.result.as_ref() else {
        return html! { <div id={format!("{}-result", p.prefix)} class="result-card" hidden=true aria-live="polite"></div> };
    };
    let value = result.display_value();

    let on_copy = {
        let copied = copied.clone();
        let tickets = tickets.clone();
        let payload = value.clone();
        Callback::from(move |_: MouseEvent| {
            #[cfg(target_arch = "wasm32")]
            {
                let copied = copied.clone();
                let tickets = tickets.clone();
                let payload = payload.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match crate::clipboard::copy_text(&payload).await {
                        Ok(outcome) => {
                            log::debug!("copied result via {outcome:?}");
                            let ticket = tickets.borrow_mut().issue();
                            copied.set(true);
                            let _ = crate::dom::sleep_ms(crate::clipboard::COPIED_RESET_MS).await;
                            if tickets.borrow().is_current(ticket) {
                                copied.set(false);
                            }
                        }
                        Err(err) => {
                            log::error!("Fallback copy failed: {err}");
                            crate::clipboard::alert_manual_copy();
                        }
                    }
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&copied, &tickets, &payload);
            }
        })
    };

    let label = if *copied { COPIED_LABEL } else { COPY_LABEL };
    html! {
        <div id={format!("{}-result", p.prefix)} class="result-card card" aria-live="polite">
            <h3 class="result-label">{ result.label() }</h3>
            <p class="result-value">
                <span class="result-number">{ value.clone() }</span>
                { " " }
                <span class="result-unit">{ result.unit.to_string() }</span>
            </p>
            <button
                id={copy_button_id(&p.prefix)}
                type="button"
                class={classes!("btn", "btn-outline", "copy-btn", (*copied).then_some("copied"))}
                data-value={value}
                onclick={on_copy}
            >
                { label }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::CopyTicket;

    #[test]
    fn only_the_latest_copy_resets_the_label() {
        let mut tickets = CopyTicket::default();
        let first = tickets.issue();
        let second = tickets.issue();
        assert!(!tickets.is_current(first));
        assert!(tickets.is_current(second));
    }
}
