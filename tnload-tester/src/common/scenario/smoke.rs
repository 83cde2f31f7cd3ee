use anyhow::{Context, Result};
use thirtyfour::prelude::*;
use tnload_core::LoadReductionCalculator;
use tnload_core::validate::field;

use super::{BrowserScenario, CombinedScenario, LogicScenario, ScenarioCtx, open_calculator};

pub struct SmokeScenario;

fn smoke_check(calc: &LoadReductionCalculator, _iteration: usize) -> Result<()> {
    let tables = calc.tables();
    anyhow::ensure!(!tables.land_uses.is_empty(), "land use table is empty");
    anyhow::ensure!(
        !tables.treatment_methods.is_empty(),
        "treatment method table is empty"
    );
    for entry in &tables.land_uses {
        anyhow::ensure!(
            tables.base_load(&entry.name).is_some(),
            "land use '{}' is not reachable by name",
            entry.name
        );
    }
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        open_calculator(driver, ctx).await?;

        let expected_land = ctx.calculator.tables().land_uses.len();
        let expected_treatment = ctx.calculator.tables().treatment_methods.len();
        for (id, expected) in [
            (field::NPS_LAND_USE, expected_land),
            (field::NPS_TREATMENT_METHOD, expected_treatment),
        ] {
            driver
                .find(By::Css(format!("#{id} option:nth-child(2)")))
                .await
                .with_context(|| format!("#{id} was never populated"))?;
            let options = driver
                .find_all(By::Css(format!("#{id} option")))
                .await?;
            // One placeholder plus one option per table row.
            anyhow::ensure!(
                options.len() == expected + 1,
                "#{id}: expected {} options, found {}",
                expected + 1,
                options.len()
            );
        }

        let banners = driver.find_all(By::Css(".load-error")).await?;
        anyhow::ensure!(banners.is_empty(), "load error banner is showing");

        if ctx.verbose {
            println!("  🌐 Calculator loaded with {expected_land} land uses");
        }
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<LogicScenario> {
        Some(LogicScenario::new("Smoke", smoke_check))
    }
}
