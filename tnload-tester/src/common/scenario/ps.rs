use anyhow::{Context, Result};
use thirtyfour::prelude::*;
use tnload_core::validate::field;
use tnload_core::{FormValues, LoadReductionCalculator, PS_FORM, PsInput};

use super::{
    BrowserScenario, CombinedScenario, LogicScenario, ScenarioCtx, ensure_close, fill,
    open_calculator, result_text, submit,
};

pub struct PsScenario;

/// Independent evaluation of the point-source formula.
fn expected_ps(discharge: f64, concentration: f64, attenuation_percent: f64) -> f64 {
    discharge * 3785.0 * 365.0 * (concentration / 1000.0) * 0.0011 * (attenuation_percent / 100.0)
        * 2000.0
}

#[allow(clippy::cast_precision_loss)]
fn ps_check(calc: &LoadReductionCalculator, iteration: usize) -> Result<()> {
    let discharge = (iteration + 1) as f64 * 0.5;
    let concentration = 10.0 + iteration as f64;
    let attenuation = ((iteration * 7) % 101) as f64;

    let values = FormValues::new()
        .with(field::PS_AVG_DISCHARGE, discharge.to_string())
        .with(field::PS_TN_CONCENTRATION, concentration.to_string())
        .with(field::PS_ATTENUATION, attenuation.to_string());
    let result = calc
        .submit_ps(&values)
        .with_context(|| format!("PS {discharge} / {concentration} / {attenuation}%"))?;
    ensure_close(
        result.value,
        expected_ps(discharge, concentration, attenuation),
        "PS reduction",
    )?;

    let reference = calc.calculate_ps(&PsInput {
        avg_discharge: 5.0,
        tn_concentration: 10.0,
        attenuation_percent: 50.0,
    });
    ensure_close(reference.value, 75_983.875, "PS reference case")
}

#[async_trait::async_trait]
impl BrowserScenario for PsScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        open_calculator(driver, ctx).await?;
        driver
            .find(By::Id("ps-calculator-tab"))
            .await?
            .click()
            .await?;
        fill(driver, field::PS_AVG_DISCHARGE, "5").await?;
        fill(driver, field::PS_TN_CONCENTRATION, "10").await?;
        fill(driver, field::PS_ATTENUATION, "50").await?;
        submit(driver, PS_FORM.id).await?;

        let shown = result_text(driver, "ps").await?;
        let expected = ctx.calculator.calculate_ps(&PsInput {
            avg_discharge: 5.0,
            tn_concentration: 10.0,
            attenuation_percent: 50.0,
        });
        anyhow::ensure!(
            shown == expected.display_value(),
            "PS result shows {shown}, expected {}",
            expected.display_value()
        );
        if ctx.verbose {
            println!("  🧮 PS result {shown} lbs/year");
        }
        Ok(())
    }
}

impl CombinedScenario for PsScenario {
    fn as_logic_scenario(&self) -> Option<LogicScenario> {
        Some(LogicScenario::new("PS Formula", ps_check))
    }
}
