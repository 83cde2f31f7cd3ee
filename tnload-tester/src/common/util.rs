use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;
use thirtyfour::prelude::*;

/// `<base>/<browser>/<scenario>/<UTC timestamp>`
pub fn artifacts_dir(base: &str, browser: &str, scenario: &str) -> String {
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    format!("{}/{browser}/{scenario}/{stamp}", base.trim_end_matches('/'))
}

/// Page details worth keeping when a browser scenario fails.
#[derive(Debug, Default, Serialize)]
struct PageState {
    url: Option<String>,
    title: Option<String>,
    theme: Option<String>,
    result_values: Vec<String>,
}

#[derive(Debug, Default)]
struct FailureArtifacts {
    screenshot: Option<Vec<u8>>,
    dom: Option<String>,
    state: PageState,
    error_chain: String,
}

impl FailureArtifacts {
    fn write_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating artifacts dir {}", dir.display()))?;
        if let Some(png) = &self.screenshot {
            fs::write(dir.join("screenshot.png"), png)?;
        }
        if let Some(dom) = &self.dom {
            fs::write(dir.join("dom.html"), dom)?;
        }
        fs::write(
            dir.join("page-state.json"),
            serde_json::to_vec_pretty(&self.state)?,
        )?;
        fs::write(dir.join("error.txt"), &self.error_chain)?;
        Ok(())
    }
}

async fn page_state(driver: &WebDriver) -> PageState {
    let theme = driver
        .execute(
            "return document.documentElement.getAttribute('data-theme')",
            vec![],
        )
        .await
        .ok()
        .and_then(|ret| ret.json().as_str().map(str::to_string));
    let mut result_values = Vec::new();
    if let Ok(numbers) = driver.find_all(By::Css(".result-number")).await {
        for number in numbers {
            if let Ok(text) = number.text().await {
                result_values.push(text);
            }
        }
    }
    PageState {
        url: driver.current_url().await.ok().map(|u| u.to_string()),
        title: driver.title().await.ok(),
        theme,
        result_values,
    }
}

/// Save a screenshot, the DOM, a page summary and the error chain into `dir`.
pub async fn capture_artifacts(driver: &WebDriver, dir: &str, err: &anyhow::Error) -> Result<()> {
    let artifacts = FailureArtifacts {
        screenshot: driver.screenshot_as_png().await.ok(),
        dom: driver.source().await.ok(),
        state: page_state(driver).await,
        error_chain: format!("{err:#}"),
    };
    artifacts.write_to(Path::new(dir))
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        assert_eq!(
            split_csv(" nps, ,ps,  validation "),
            vec!["nps", "ps", "validation"]
        );
        assert!(split_csv("").is_empty());
    }

    #[test]
    fn artifacts_dir_nests_browser_and_scenario() {
        let dir = artifacts_dir("target/out/", "chrome", "smoke");
        assert!(dir.starts_with("target/out/chrome/smoke/"));
        assert!(dir.ends_with('Z'));
    }

    #[test]
    fn failure_artifacts_write_every_file() {
        let dir = std::env::temp_dir().join(format!("tnload-artifacts-{}", std::process::id()));
        let artifacts = FailureArtifacts {
            screenshot: Some(vec![1, 2, 3]),
            dom: Some("<html />".into()),
            state: PageState {
                theme: Some("dark".into()),
                result_values: vec!["10.00".into()],
                ..PageState::default()
            },
            error_chain: "boom".into(),
        };
        artifacts.write_to(&dir).expect("write artifacts");

        for name in ["screenshot.png", "dom.html", "page-state.json", "error.txt"] {
            assert!(dir.join(name).exists(), "{name} missing");
        }
        let state: serde_json::Value =
            serde_json::from_slice(&fs::read(dir.join("page-state.json")).unwrap()).unwrap();
        assert_eq!(state["theme"], "dark");
        assert_eq!(state["result_values"][0], "10.00");
    }
}
