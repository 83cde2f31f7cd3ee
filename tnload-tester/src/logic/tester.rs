use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use tnload_core::LoadReductionCalculator;

use crate::common::scenario::LogicScenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

impl ScenarioResult {
    /// Result for a browser scenario, which runs exactly once.
    pub fn single(name: impl Into<String>, outcome: Result<(), String>, took: Duration) -> Self {
        let passed = outcome.is_ok();
        Self {
            scenario_name: name.into(),
            passed,
            iterations_run: 1,
            successful_iterations: usize::from(passed),
            failures: outcome.err().into_iter().collect(),
            average_duration: took,
            performance_data: vec![took],
        }
    }
}

pub struct LogicTester<'a> {
    calculator: &'a LoadReductionCalculator,
    verbose: bool,
}

impl<'a> LogicTester<'a> {
    pub const fn new(calculator: &'a LoadReductionCalculator, verbose: bool) -> Self {
        Self {
            calculator,
            verbose,
        }
    }

    pub fn run_scenario(&self, scenario: &LogicScenario, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!("🧪 Testing scenario: {}", scenario.name.bright_white());
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            match (scenario.check)(self.calculator, i) {
                Ok(()) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);
                    if self.verbose {
                        println!("  ✅ Iteration {}/{iterations} passed ({duration:?})", i + 1);
                    }
                }
                Err(err) => {
                    let message = format!("Iteration {}: {err:#}", i + 1);
                    if self.verbose {
                        println!(
                            "  ❌ Iteration {}/{iterations} failed: {}",
                            i + 1,
                            format!("{err:#}").red()
                        );
                    }
                    failures.push(message);
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(1)
        };

        ScenarioResult {
            scenario_name: scenario.name.clone(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis_vec = Vec::<u128>::deserialize(deserializer)?;
        Ok(millis_vec
            .into_iter()
            .map(|m| Duration::from_millis(u64::try_from(m).unwrap_or(0)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always_ok(_: &LoadReductionCalculator, _: usize) -> anyhow::Result<()> {
        Ok(())
    }

    fn odd_fails(_: &LoadReductionCalculator, i: usize) -> anyhow::Result<()> {
        anyhow::ensure!(i % 2 == 0, "odd iteration {i}");
        Ok(())
    }

    #[test]
    fn counts_successes_and_failures() {
        let calc = LoadReductionCalculator::default();
        let tester = LogicTester::new(&calc, false);

        let ok = tester.run_scenario(&LogicScenario::new("ok", always_ok), 3);
        assert!(ok.passed);
        assert_eq!(ok.successful_iterations, 3);
        assert_eq!(ok.performance_data.len(), 3);

        let mixed = tester.run_scenario(&LogicScenario::new("mixed", odd_fails), 4);
        assert!(!mixed.passed);
        assert_eq!(mixed.successful_iterations, 2);
        assert_eq!(mixed.failures.len(), 2);
        assert!(mixed.failures[0].starts_with("Iteration 2:"));
    }

    #[test]
    fn durations_serialize_as_millis() {
        let result = ScenarioResult::single("theme", Ok(()), Duration::from_millis(1500));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 1500);
        assert_eq!(json["performance_data"][0], 1500);

        let back: ScenarioResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.average_duration, Duration::from_millis(1500));
    }

    #[test]
    fn single_failure_keeps_message() {
        let result = ScenarioResult::single("nps", Err("boom".into()), Duration::ZERO);
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures, vec!["boom".to_string()]);
    }
}
