use anyhow::Result;
use thirtyfour::prelude::*;
use tnload_core::validate::field;
use tnload_core::{
    CalculationResult, FormValues, LoadReductionCalculator, NPS_FORM, SubmitError, Violation,
};

use super::{
    BrowserScenario, CombinedScenario, LogicScenario, ScenarioCtx, blank, fill, open_calculator,
    result_text, select_index, submit,
};

pub struct ValidationScenario;

fn ps_values(discharge: &str, concentration: &str, attenuation: &str) -> FormValues {
    FormValues::new()
        .with(field::PS_AVG_DISCHARGE, discharge)
        .with(field::PS_TN_CONCENTRATION, concentration)
        .with(field::PS_ATTENUATION, attenuation)
}

fn violation(
    outcome: std::result::Result<CalculationResult, SubmitError>,
    id: &str,
) -> Option<Violation> {
    let err = outcome.err()?;
    err.report()?.error_for(id).map(|e| e.violation)
}

fn validation_check(calc: &LoadReductionCalculator, _iteration: usize) -> Result<()> {
    let empty = calc.submit_nps(&FormValues::new());
    let Err(SubmitError::Invalid(report)) = empty else {
        anyhow::bail!("empty NPS form was accepted");
    };
    anyhow::ensure!(
        report.errors().len() == NPS_FORM.fields.len()
            && report.errors().iter().all(|e| e.violation == Violation::Required),
        "empty NPS form should report every field as required: {report}"
    );

    anyhow::ensure!(
        violation(calc.submit_ps(&ps_values("5", "10", "150")), field::PS_ATTENUATION)
            == Some(Violation::PercentRange),
        "150% attenuation was not rejected"
    );
    for edge in ["0", "100"] {
        anyhow::ensure!(
            calc.submit_ps(&ps_values("5", "10", edge)).is_ok(),
            "{edge}% attenuation should be accepted"
        );
    }
    anyhow::ensure!(
        violation(calc.submit_ps(&ps_values("-1", "10", "50")), field::PS_AVG_DISCHARGE)
            == Some(Violation::NonNegative),
        "negative discharge was not rejected"
    );
    anyhow::ensure!(
        matches!(
            calc.submit_ps(&ps_values("1e306", "10", "50")),
            Err(SubmitError::OutOfRange(_))
        ),
        "overflowing PS result was not rejected"
    );
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for ValidationScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        open_calculator(driver, ctx).await?;
        submit(driver, NPS_FORM.id).await?;

        let land_use = driver.find(By::Id(field::NPS_LAND_USE)).await?;
        let classes = land_use.class_name().await?.unwrap_or_default();
        anyhow::ensure!(
            classes.split_whitespace().any(|c| c == "is-invalid"),
            "land use select not marked invalid (class=\"{classes}\")"
        );
        let feedback = driver
            .find(By::Id(format!("{}-feedback", field::NPS_LAND_USE)))
            .await?
            .text()
            .await?;
        anyhow::ensure!(
            feedback.contains(Violation::Required.message()),
            "missing inline message, found '{feedback}'"
        );
        let results = driver.find_all(By::Css("#nps-result .result-number")).await?;
        anyhow::ensure!(results.is_empty(), "invalid submission produced a result");

        // A rejected resubmission keeps the last good result on screen.
        select_index(driver, field::NPS_LAND_USE, 1).await?;
        select_index(driver, field::NPS_TREATMENT_METHOD, 1).await?;
        fill(driver, field::NPS_TREATMENT_AREA, "10").await?;
        submit(driver, NPS_FORM.id).await?;
        let before = result_text(driver, "nps").await?;

        blank(driver, field::NPS_TREATMENT_AREA).await?;
        submit(driver, NPS_FORM.id).await?;
        let area_feedback = driver
            .find(By::Id(format!("{}-feedback", field::NPS_TREATMENT_AREA)))
            .await?
            .text()
            .await?;
        anyhow::ensure!(
            area_feedback.contains(Violation::Required.message()),
            "blanked area was not flagged, found '{area_feedback}'"
        );
        let after = result_text(driver, "nps").await?;
        anyhow::ensure!(
            after == before,
            "rejected submission changed the result from {before} to {after}"
        );
        Ok(())
    }
}

impl CombinedScenario for ValidationScenario {
    fn as_logic_scenario(&self) -> Option<LogicScenario> {
        Some(LogicScenario::new("Form Validation", validation_check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rules_hold() {
        validation_check(&LoadReductionCalculator::default(), 0).expect("validation check");
    }
}
