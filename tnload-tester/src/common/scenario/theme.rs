use anyhow::{Context, Result};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, LogicScenario, ScenarioCtx};

pub struct ThemeScenario;

async fn current_theme(driver: &WebDriver) -> Result<String> {
    let ret = driver
        .execute(
            "return document.documentElement.getAttribute('data-theme') || ''",
            vec![],
        )
        .await?;
    Ok(ret.json().as_str().unwrap_or_default().to_string())
}

#[async_trait::async_trait]
impl BrowserScenario for ThemeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        driver.goto(&ctx.page("")).await?;
        let before = current_theme(driver).await?;
        driver
            .find(By::Id("theme-toggle"))
            .await
            .context("theme toggle missing")?
            .click()
            .await?;
        let after = current_theme(driver).await?;
        anyhow::ensure!(after != before, "theme stayed '{before}' after toggle");

        driver.refresh().await?;
        driver.find(By::Id("theme-toggle")).await?;
        let reloaded = current_theme(driver).await?;
        anyhow::ensure!(
            reloaded == after,
            "theme '{after}' did not survive reload (got '{reloaded}')"
        );

        // Leave the browser profile as we found it.
        driver.find(By::Id("theme-toggle")).await?.click().await?;
        if ctx.verbose {
            println!("  🎨 Theme toggled {before} -> {after}");
        }
        Ok(())
    }
}

impl CombinedScenario for ThemeScenario {
    fn as_logic_scenario(&self) -> Option<LogicScenario> {
        None
    }
}
