//! Pieces shared by the two calculator forms.

use crate::app::state::ReferenceStatus;
use crate::components::daisy_ui::{Input, Label, Select, SelectOption, Validator};
use tnload_core::validate::{FieldSpec, FormSpec};
use tnload_core::{
    CalculationResult, FormValues, LoadReductionCalculator, SubmitError, ValidationReport,
    validate_form,
};
use yew::prelude::*;

/// Record `value` for `field` and drop any violation it was showing.
pub fn update_field(
    values: &UseStateHandle<FormValues>,
    report: &UseStateHandle<Option<ValidationReport>>,
    field: &'static str,
    value: String,
) {
    let mut next = (**values).clone();
    next.set(field, value);
    values.set(next);

    if let Some(current) = (**report).as_ref() {
        let mut cleared = current.clone();
        if cleared.clear_field(field) {
            report.set(Some(cleared));
        }
    }
    set_native_message(field, "");
}

/// What a submit changes on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStep {
    /// Show a new result and move focus to its copy button.
    Publish(CalculationResult),
    /// Mark the violating fields; the shown result stays as it was.
    Reject(ValidationReport),
    /// Form-level notice; the shown result stays as it was.
    Notice(AttrValue),
    /// Nothing changes.
    Ignore,
}

/// A calculator's validate-then-compute entry point.
pub type Submit = fn(&LoadReductionCalculator, &FormValues) -> Result<CalculationResult, SubmitError>;

/// Decide the outcome of submitting `values`.
///
/// Validation always runs. A result is only computed once the reference
/// tables are ready; until then a valid form is left alone.
pub fn plan_submission(
    reference: &ReferenceStatus,
    spec: &FormSpec,
    values: &FormValues,
    submit: Submit,
) -> SubmitStep {
    let outcome = match reference.calculator() {
        Some(calc) => submit(calc, values),
        None => {
            let found = validate_form(spec, values);
            if found.is_valid() {
                log::warn!("{} submission ignored: reference tables unavailable", spec.id);
                return SubmitStep::Ignore;
            }
            Err(SubmitError::Invalid(found))
        }
    };
    match outcome {
        Ok(result) => SubmitStep::Publish(result),
        Err(SubmitError::Invalid(found)) => SubmitStep::Reject(found),
        Err(err @ SubmitError::OutOfRange(_)) => SubmitStep::Notice(AttrValue::from(err.to_string())),
        Err(SubmitError::Input(err)) => {
            log::error!("validated form did not bind: {err}");
            SubmitStep::Ignore
        }
    }
}

/// Current values with every field inside a hidden container marked as such.
#[must_use]
pub fn visible_snapshot(values: &FormValues, spec: &FormSpec) -> FormValues {
    let mut snapshot = values.clone();
    for field in spec.fields {
        if crate::dom::in_hidden_container(field.id) {
            snapshot.hide(field.id);
        }
    }
    snapshot
}

/// Apply a planned submit. Only [`SubmitStep::Publish`] reaches `on_result`.
pub fn finish_submission(
    step: SubmitStep,
    spec: &FormSpec,
    report: &UseStateHandle<Option<ValidationReport>>,
    notice: &UseStateHandle<Option<AttrValue>>,
    on_result: &Callback<CalculationResult>,
    copy_button: &str,
) {
    match step {
        SubmitStep::Publish(result) => {
            report.set(None);
            notice.set(None);
            on_result.emit(result);
            crate::dom::focus_after_render(copy_button.to_string());
        }
        SubmitStep::Reject(found) => {
            for field in spec.fields {
                set_native_message(field.id, found.message_for(field.id).unwrap_or(""));
            }
            report_native_validity(spec.id);
            notice.set(None);
            report.set(Some(found));
        }
        SubmitStep::Notice(message) => {
            report.set(None);
            notice.set(Some(message));
        }
        SubmitStep::Ignore => {}
    }
}

fn set_native_message(field: &str, message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let Some(el) = crate::dom::document().and_then(|doc| doc.get_element_by_id(field)) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
            input.set_custom_validity(message);
        } else if let Some(select) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
            select.set_custom_validity(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (field, message);
    }
}

/// Trigger the browser's own validation prompt once for the whole form.
fn report_native_validity(form_id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        if let Some(form) = crate::dom::document()
            .and_then(|doc| doc.get_element_by_id(form_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
        {
            let _ = form.report_validity();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = form_id;
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ChoiceFieldProps {
    pub spec: &'static FieldSpec,
    pub options: Vec<SelectOption>,
    pub value: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub on_change: Callback<AttrValue>,
}

#[function_component(ChoiceField)]
pub fn choice_field(p: &ChoiceFieldProps) -> Html {
    html! {
        <Validator field_id={p.spec.id} message={p.error.clone()} class="mb-3">
            <Label for_input={p.spec.id} text={p.spec.label} required={p.spec.required} />
            <Select
                id={p.spec.id}
                placeholder="Choose one"
                options={p.options.clone()}
                value={p.value.clone()}
                required={p.spec.required}
                invalid={p.error.is_some()}
                on_change={p.on_change.clone()}
            />
        </Validator>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct NumberFieldProps {
    pub spec: &'static FieldSpec,
    pub value: AttrValue,
    #[prop_or_default]
    pub max: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub on_input: Callback<String>,
}

#[function_component(NumberField)]
pub fn number_field(p: &NumberFieldProps) -> Html {
    html! {
        <Validator field_id={p.spec.id} message={p.error.clone()} class="mb-3">
            <Label for_input={p.spec.id} text={p.spec.label} required={p.spec.required} />
            <Input
                id={p.spec.id}
                input_type="number"
                value={p.value.clone()}
                min="0"
                max={p.max.clone()}
                step="any"
                placeholder={p.placeholder.clone()}
                required={p.spec.required}
                invalid={p.error.is_some()}
                oninput={p.on_input.clone()}
            />
        </Validator>
    }
}

/// Inline message for `field`, if the latest report flagged it.
#[must_use]
pub fn error_for(report: Option<&ValidationReport>, field: &str) -> Option<AttrValue> {
    report
        .and_then(|r| r.message_for(field))
        .map(AttrValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use tnload_core::constants::MSG_REQUIRED;
    use tnload_core::validate::{NPS_FORM, PS_FORM, field};
    use tnload_core::{CalculationKind, JsonSource, Violation};

    fn ready() -> ReferenceStatus {
        let calc = LoadReductionCalculator::from_source(&JsonSource {
            land_use_json: r#"[{"name": "Residential", "base_load": 2.5}]"#,
            treatment_json: r#"[{"name": "Bioswale", "removal_rate": 0.4}]"#,
        })
        .unwrap();
        ReferenceStatus::Ready(Rc::new(calc))
    }

    fn ps_values(discharge: &str) -> FormValues {
        FormValues::new()
            .with(field::PS_AVG_DISCHARGE, discharge)
            .with(field::PS_TN_CONCENTRATION, "10")
            .with(field::PS_ATTENUATION, "50")
    }

    fn nps_values(area: &str) -> FormValues {
        FormValues::new()
            .with(field::NPS_LAND_USE, "Residential")
            .with(field::NPS_TREATMENT_METHOD, "Bioswale")
            .with(field::NPS_TREATMENT_AREA, area)
    }

    #[test]
    fn failed_tables_leave_a_valid_ps_form_inert() {
        let failed = ReferenceStatus::Failed("Failed to load calculator data".into());
        for status in [failed, ReferenceStatus::Loading] {
            let step = plan_submission(&status, &PS_FORM, &ps_values("5"), LoadReductionCalculator::submit_ps);
            assert_eq!(step, SubmitStep::Ignore);
        }
    }

    #[test]
    fn failed_tables_still_report_violations() {
        let failed = ReferenceStatus::Failed("Failed to load calculator data".into());
        let step = plan_submission(&failed, &PS_FORM, &ps_values(""), LoadReductionCalculator::submit_ps);
        let SubmitStep::Reject(report) = step else {
            panic!("expected violations, got {step:?}");
        };
        assert_eq!(
            report.error_for(field::PS_AVG_DISCHARGE).map(|e| e.violation),
            Some(Violation::Required)
        );
    }

    #[test]
    fn ready_tables_publish_results() {
        let step = plan_submission(&ready(), &PS_FORM, &ps_values("5"), LoadReductionCalculator::submit_ps);
        let SubmitStep::Publish(result) = step else {
            panic!("expected a result, got {step:?}");
        };
        assert_eq!(result.kind, CalculationKind::Ps);
        assert!((result.value - 75_983.875).abs() < 1e-6);
    }

    #[test]
    fn blanked_field_after_a_result_only_rejects() {
        let status = ready();
        let first = plan_submission(&status, &NPS_FORM, &nps_values("10"), LoadReductionCalculator::submit_nps);
        assert!(matches!(first, SubmitStep::Publish(_)));

        let second = plan_submission(&status, &NPS_FORM, &nps_values(""), LoadReductionCalculator::submit_nps);
        let SubmitStep::Reject(report) = second else {
            panic!("blank area must not produce a result, got {second:?}");
        };
        assert_eq!(report.errors().len(), 1);
        assert_eq!(
            report.message_for(field::NPS_TREATMENT_AREA),
            Some(MSG_REQUIRED)
        );
    }

    #[test]
    fn overflowing_result_becomes_a_notice() {
        let step = plan_submission(&ready(), &PS_FORM, &ps_values("1e306"), LoadReductionCalculator::submit_ps);
        let SubmitStep::Notice(message) = step else {
            panic!("expected a notice, got {step:?}");
        };
        assert!(message.contains("too large"));
    }

    #[test]
    fn snapshot_off_browser_hides_nothing() {
        let snapshot = visible_snapshot(&ps_values("5"), &PS_FORM);
        assert!(PS_FORM.fields.iter().all(|f| !snapshot.is_hidden(f.id)));
        assert_eq!(snapshot.get(field::PS_AVG_DISCHARGE), "5");
    }

    #[test]
    fn error_lookup_reads_report_messages() {
        let report = validate_form(&NPS_FORM, &FormValues::new());
        assert_eq!(
            error_for(Some(&report), field::NPS_LAND_USE).as_deref(),
            Some(MSG_REQUIRED)
        );
        assert_eq!(error_for(None, field::NPS_LAND_USE), None);
    }
}
