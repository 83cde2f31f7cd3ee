use crate::app::state::ReferenceStatus;
use crate::components::daisy_ui::{Alert, DaisyColor, SelectOption};
use crate::components::ui::calculator_form::{
    ChoiceField, NumberField, error_for, finish_submission, plan_submission, update_field,
    visible_snapshot,
};
use crate::components::ui::result_card::{ResultCard, copy_button_id};
use tnload_core::validate::field;
use tnload_core::{CalculationResult, FormValues, LoadReductionCalculator, NPS_FORM, ValidationReport};
use yew::prelude::*;

const PREFIX: &str = "nps";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub reference: ReferenceStatus,
    #[prop_or_default]
    pub result: Option<CalculationResult>,
    #[prop_or_default]
    pub on_result: Callback<CalculationResult>,
}

fn options(names: Option<Vec<&str>>) -> Vec<SelectOption> {
    names
        .unwrap_or_default()
        .into_iter()
        .map(SelectOption::named)
        .collect()
}

#[function_component(NpsForm)]
pub fn nps_form(p: &Props) -> Html {
    let values = use_state(FormValues::new);
    let report = use_state(|| None::<ValidationReport>);
    let notice = use_state(|| None::<AttrValue>);

    let tables = p.reference.calculator().map(tnload_core::LoadReductionCalculator::tables);
    let land_uses = options(tables.map(|t| t.land_use_names().collect()));
    let treatments = options(tables.map(|t| t.treatment_method_names().collect()));

    let on_field = |id: &'static str| {
        let values = values.clone();
        let report = report.clone();
        Callback::from(move |value: String| update_field(&values, &report, id, value))
    };
    let on_choice = |id: &'static str| {
        let cb = on_field(id);
        Callback::from(move |value: AttrValue| cb.emit(value.to_string()))
    };

    let onsubmit = {
        let values = values.clone();
        let report = report.clone();
        let notice = notice.clone();
        let reference = p.reference.clone();
        let on_result = p.on_result.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let snapshot = visible_snapshot(&values, &NPS_FORM);
            let step = plan_submission(&reference, &NPS_FORM, &snapshot, LoadReductionCalculator::submit_nps);
            finish_submission(step, &NPS_FORM, &report, &notice, &on_result, &copy_button_id(PREFIX));
        })
    };

    let current = (*report).as_ref();
    let spec = |id: &str| NPS_FORM.field(id);
    let fields = match (
        spec(field::NPS_LAND_USE),
        spec(field::NPS_TREATMENT_METHOD),
        spec(field::NPS_TREATMENT_AREA),
    ) {
        (Some(land_use), Some(treatment), Some(area)) => html! {
            <>
                <ChoiceField
                    spec={land_use}
                    options={land_uses}
                    value={AttrValue::from(values.get(field::NPS_LAND_USE).to_string())}
                    error={error_for(current, field::NPS_LAND_USE)}
                    on_change={on_choice(field::NPS_LAND_USE)}
                />
                <ChoiceField
                    spec={treatment}
                    options={treatments}
                    value={AttrValue::from(values.get(field::NPS_TREATMENT_METHOD).to_string())}
                    error={error_for(current, field::NPS_TREATMENT_METHOD)}
                    on_change={on_choice(field::NPS_TREATMENT_METHOD)}
                />
                <NumberField
                    spec={area}
                    value={AttrValue::from(values.get(field::NPS_TREATMENT_AREA).to_string())}
                    placeholder="Enter area in acres"
                    error={error_for(current, field::NPS_TREATMENT_AREA)}
                    on_input={on_field(field::NPS_TREATMENT_AREA)}
                />
            </>
        },
        _ => Html::default(),
    };

    html! {
        <>
            { p.reference.failure().map(|message| html! {
                <Alert id="nps-load-error" variant={DaisyColor::Error} message={message.clone()} class="load-error" />
            }).unwrap_or_default() }
            { (*notice).clone().map(|message| html! {
                <Alert id="nps-notice" variant={DaisyColor::Warning} message={message} />
            }).unwrap_or_default() }
            <form id={NPS_FORM.id} class="calculator-form" novalidate=true onsubmit={onsubmit}>
                { fields }
                <button type="submit" class="btn btn-primary">{ "Calculate" }</button>
            </form>
            <ResultCard prefix={PREFIX} result={p.result.clone()} />
        </>
    }
}
