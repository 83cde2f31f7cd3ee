use anyhow::{Context, Result};
use std::sync::Arc;
use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;
use tnload_core::LoadReductionCalculator;

pub mod nps;
pub mod ps;
pub mod smoke;
pub mod theme;
pub mod validation;

#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub base_url: String,
    /// Calculator over the same tables the site serves, for expected values.
    pub calculator: Arc<LoadReductionCalculator>,
    pub verbose: bool,
}

impl ScenarioCtx {
    pub fn page(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

pub type LogicCheck = fn(&LoadReductionCalculator, usize) -> Result<()>;

// Logic test scenario: one check run once per iteration.
#[derive(Debug, Clone)]
pub struct LogicScenario {
    pub name: String,
    pub check: LogicCheck,
}

impl LogicScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: LogicCheck) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario: Send + Sync {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<LogicScenario>;
}

const CATALOG: [(&str, &str); 5] = [
    ("smoke", "Tables load; calculator page populates both selects"),
    ("nps", "NPS reduction matches base load x area x removal rate"),
    ("ps", "PS reduction matches the unit-conversion formula"),
    ("validation", "Invalid submissions are rejected without a result"),
    ("theme", "Theme toggle applies and survives a reload (browser only)"),
];

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.to_vec()
}

/// Every scenario key, in catalog order.
pub fn scenario_keys() -> Vec<String> {
    CATALOG.iter().map(|(key, _)| (*key).to_string()).collect()
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "nps" => Some(Box::new(nps::NpsScenario)),
        "ps" => Some(Box::new(ps::PsScenario)),
        "validation" => Some(Box::new(validation::ValidationScenario)),
        "theme" => Some(Box::new(theme::ThemeScenario)),
        _ => None,
    }
}

/// Compare two reductions with a relative tolerance.
pub fn ensure_close(actual: f64, expected: f64, what: &str) -> Result<()> {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    anyhow::ensure!(
        (actual - expected).abs() <= tolerance,
        "{what}: expected {expected}, got {actual}"
    );
    Ok(())
}

pub async fn open_calculator(driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
    driver
        .goto(&ctx.page("calculator"))
        .await
        .context("opening calculator page")?;
    driver
        .find(By::Id("nps-calculator-form"))
        .await
        .context("calculator form did not render")?;
    Ok(())
}

pub async fn select_index(driver: &WebDriver, id: &str, index: u32) -> Result<()> {
    // The placeholder is option 0; wait for the first loaded option before selecting.
    driver
        .find(By::Css(format!("#{id} option:nth-child(2)")))
        .await
        .with_context(|| format!("#{id} has no loaded options"))?;
    let elem = driver.find(By::Id(id)).await?;
    let select = SelectElement::new(&elem).await?;
    select.select_by_index(index).await?;
    Ok(())
}

pub async fn fill(driver: &WebDriver, id: &str, value: &str) -> Result<()> {
    let elem = driver.find(By::Id(id)).await?;
    elem.clear().await?;
    elem.send_keys(value).await?;
    Ok(())
}

/// Empty a field through keystrokes so the page sees the edit.
pub async fn blank(driver: &WebDriver, id: &str) -> Result<()> {
    let elem = driver.find(By::Id(id)).await?;
    elem.click().await?;
    elem.send_keys(Key::Control + "a").await?;
    elem.send_keys(Key::Backspace).await?;
    Ok(())
}

pub async fn submit(driver: &WebDriver, form_id: &str) -> Result<()> {
    driver
        .find(By::Css(format!("#{form_id} button[type='submit']")))
        .await?
        .click()
        .await?;
    Ok(())
}

pub async fn result_text(driver: &WebDriver, prefix: &str) -> Result<String> {
    let elem = driver
        .find(By::Css(format!("#{prefix}-result .result-number")))
        .await
        .with_context(|| format!("no {prefix} result rendered"))?;
    Ok(elem.text().await?.trim().to_string())
}
