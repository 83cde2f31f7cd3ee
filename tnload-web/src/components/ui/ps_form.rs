use crate::app::state::ReferenceStatus;
use crate::components::daisy_ui::{Alert, DaisyColor};
use crate::components::ui::calculator_form::{
    NumberField, error_for, finish_submission, plan_submission, update_field, visible_snapshot,
};
use crate::components::ui::result_card::{ResultCard, copy_button_id};
use tnload_core::validate::field;
use tnload_core::{CalculationResult, FormValues, LoadReductionCalculator, PS_FORM, ValidationReport};
use yew::prelude::*;

const PREFIX: &str = "ps";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub reference: ReferenceStatus,
    #[prop_or_default]
    pub result: Option<CalculationResult>,
    #[prop_or_default]
    pub on_result: Callback<CalculationResult>,
}

/// Point-source form. Inert, like the NPS form, until the reference tables are ready.
#[function_component(PsForm)]
pub fn ps_form(p: &Props) -> Html {
    let values = use_state(FormValues::new);
    let report = use_state(|| None::<ValidationReport>);
    let notice = use_state(|| None::<AttrValue>);

    let on_field = |id: &'static str| {
        let values = values.clone();
        let report = report.clone();
        Callback::from(move |value: String| update_field(&values, &report, id, value))
    };

    let onsubmit = {
        let values = values.clone();
        let report = report.clone();
        let notice = notice.clone();
        let reference = p.reference.clone();
        let on_result = p.on_result.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let snapshot = visible_snapshot(&values, &PS_FORM);
            let step = plan_submission(&reference, &PS_FORM, &snapshot, LoadReductionCalculator::submit_ps);
            finish_submission(step, &PS_FORM, &report, &notice, &on_result, &copy_button_id(PREFIX));
        })
    };

    let current = (*report).as_ref();
    let fields = PS_FORM.fields.iter().map(|spec| {
        let (placeholder, max) = match spec.id {
            field::PS_AVG_DISCHARGE => ("Average discharge (MGD)", None),
            field::PS_TN_CONCENTRATION => ("TN concentration (mg/L)", None),
            _ => ("0 - 100", Some(AttrValue::from("100"))),
        };
        html! {
            <NumberField
                spec={spec}
                value={AttrValue::from(values.get(spec.id).to_string())}
                placeholder={placeholder}
                max={max}
                error={error_for(current, spec.id)}
                on_input={on_field(spec.id)}
            />
        }
    });

    html! {
        <>
            { (*notice).clone().map(|message| html! {
                <Alert id="ps-notice" variant={DaisyColor::Warning} message={message} />
            }).unwrap_or_default() }
            <form id={PS_FORM.id} class="calculator-form" novalidate=true onsubmit={onsubmit}>
                { for fields }
                <button type="submit" class="btn btn-primary">{ "Calculate" }</button>
            </form>
            <ResultCard prefix={PREFIX} result={p.result.clone()} />
        </>
    }
}
