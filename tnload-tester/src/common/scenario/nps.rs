use anyhow::{Context, Result};
use thirtyfour::prelude::*;
use tnload_core::validate::field;
use tnload_core::{FormValues, LoadReductionCalculator, LookupMiss, NPS_FORM, NpsInput};

use super::{
    BrowserScenario, CombinedScenario, LogicScenario, ScenarioCtx, ensure_close, fill,
    open_calculator, result_text, select_index, submit,
};

pub struct NpsScenario;

#[allow(clippy::cast_precision_loss)]
fn area_for(iteration: usize) -> f64 {
    (iteration + 1) as f64 * 2.5
}

fn nps_check(calc: &LoadReductionCalculator, iteration: usize) -> Result<()> {
    let tables = calc.tables();
    anyhow::ensure!(!tables.is_empty(), "reference tables are empty");
    let land = &tables.land_uses[iteration % tables.land_uses.len()];
    let method = &tables.treatment_methods[iteration % tables.treatment_methods.len()];
    let area = area_for(iteration);

    let values = FormValues::new()
        .with(field::NPS_LAND_USE, land.name.clone())
        .with(field::NPS_TREATMENT_METHOD, method.name.clone())
        .with(field::NPS_TREATMENT_AREA, area.to_string());
    let result = calc
        .submit_nps(&values)
        .with_context(|| format!("{} / {} / {area} acres", land.name, method.name))?;
    ensure_close(
        result.value,
        land.base_load * area * method.removal_rate,
        "NPS reduction",
    )?;
    anyhow::ensure!(!result.has_lookup_misses(), "unexpected lookup miss");

    // Unknown names contribute zero instead of failing.
    let unknown = calc.calculate_nps(&NpsInput {
        land_use: format!("{} (retired)", land.name),
        treatment_method: method.name.clone(),
        treatment_area_acres: area,
    });
    ensure_close(unknown.value, 0.0, "NPS reduction for unknown land use")?;
    anyhow::ensure!(
        unknown.misses == vec![LookupMiss::LandUse(format!("{} (retired)", land.name))],
        "unknown land use was not recorded as a lookup miss"
    );
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for NpsScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        open_calculator(driver, ctx).await?;
        select_index(driver, field::NPS_LAND_USE, 1).await?;
        select_index(driver, field::NPS_TREATMENT_METHOD, 1).await?;
        fill(driver, field::NPS_TREATMENT_AREA, "10").await?;
        submit(driver, NPS_FORM.id).await?;

        let shown = result_text(driver, "nps").await?;
        let tables = ctx.calculator.tables();
        let (Some(land), Some(method)) = (tables.land_uses.first(), tables.treatment_methods.first())
        else {
            anyhow::bail!("reference tables are empty");
        };
        let expected = ctx.calculator.calculate_nps(&NpsInput {
            land_use: land.name.clone(),
            treatment_method: method.name.clone(),
            treatment_area_acres: 10.0,
        });
        anyhow::ensure!(
            shown == expected.display_value(),
            "NPS result shows {shown}, expected {}",
            expected.display_value()
        );

        let focused = driver.active_element().await?;
        let focused_id = focused.id().await?.unwrap_or_default();
        anyhow::ensure!(
            focused_id == "nps-copy-btn",
            "focus is on '{focused_id}', not the copy button"
        );
        if ctx.verbose {
            println!("  🧮 NPS result {shown} lbs/year");
        }
        Ok(())
    }
}

impl CombinedScenario for NpsScenario {
    fn as_logic_scenario(&self) -> Option<LogicScenario> {
        Some(LogicScenario::new("NPS Formula", nps_check))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tnload_core::{LandUseEntry, ReferenceTables, TreatmentMethodEntry};

    #[test]
    fn check_passes_on_consistent_tables() {
        let calc = LoadReductionCalculator::new(ReferenceTables::new(
            vec![LandUseEntry::new("Residential", 2.5), LandUseEntry::new("Forest", 0.8)],
            vec![TreatmentMethodEntry::new("Bioswale", 0.4)],
        ));
        for iteration in 0..4 {
            nps_check(&calc, iteration).expect("nps check");
        }
    }

    #[test]
    fn check_fails_on_empty_tables() {
        assert!(nps_check(&LoadReductionCalculator::default(), 0).is_err());
    }
}
