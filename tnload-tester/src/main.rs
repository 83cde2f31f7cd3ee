mod browser;
mod common;
mod logic;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::{self, File};
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use browser::{BrowserConfig, BrowserKind, new_session};
use common::scenario::{ScenarioCtx, get_scenario, list_scenarios, scenario_keys};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::{DirSource, LogicTester, ScenarioResult};
use tnload_core::{LoadReductionCalculator, SheetExport, audit_tables};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TestMode {
    /// Calculator logic against the shipped tables (fast, no browser)
    Logic,
    /// Browser automation against a running site
    Browser,
    /// Run both logic and browser tests
    Both,
    /// Check the reference tables for problems
    Audit,
    /// Convert spreadsheet exports into reference tables
    Import,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeadlessMode {
    /// Run browsers in headless mode
    Headless,
    /// Run browsers with visible windows
    Windowed,
}

impl HeadlessMode {
    const fn is_headless(self) -> bool {
        matches!(self, Self::Headless)
    }
}

#[derive(Debug, Parser)]
#[command(name = "tnload-tester", version)]
#[command(
    about = "QA tooling for the TN load reduction site - calculator logic, browser automation, table audit and import"
)]
struct Args {
    /// What to run
    #[arg(long, value_enum, default_value_t = TestMode::Logic)]
    mode: TestMode,

    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "smoke")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Number of iterations per scenario (logic mode only)
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console", "csv"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Directory holding the reference table JSON files
    #[arg(long, default_value = "tnload-web/static/calculator")]
    data_dir: PathBuf,

    /// Land use sheet export to import (import mode)
    #[arg(long)]
    land_use_sheet: Option<PathBuf>,

    /// Treatment method sheet export to import (import mode)
    #[arg(long)]
    treatment_sheet: Option<PathBuf>,

    // Browser-specific options
    /// Browsers to run (chrome,edge,firefox,safari) - browser mode only
    #[arg(long, default_value = "chrome")]
    browsers: String,

    /// Base URL the site is served from
    #[arg(long, default_value = "http://localhost:8080/")]
    base_url: String,

    /// Artifacts directory for screenshots and logs
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Connect to a Selenium Grid hub instead of local drivers
    #[arg(long)]
    hub: Option<String>,

    /// Run headless where supported
    #[arg(long, value_enum, default_value_t = HeadlessMode::Headless)]
    headless: HeadlessMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    match args.mode {
        TestMode::Audit => {
            if !run_audit(&args)? {
                std::process::exit(1);
            }
            return Ok(());
        }
        TestMode::Import => return run_import(&args),
        TestMode::Logic | TestMode::Browser | TestMode::Both => {}
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let browsers = parse_browsers(&args.browsers)?;
    let calculator = Arc::new(load_calculator(&args.data_dir)?);

    let mut all_results = run_logic_scenarios(&args, &scenarios, &calculator);
    all_results.extend(run_browser_scenarios(&args, &scenarios, &browsers, &calculator).await);

    write_reports(&args, &all_results, start_time)?;

    if all_results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:12} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "💧 TN Load Reduction Tester".bright_cyan().bold());
    println!("{}", "===========================".cyan());
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for key in scenario_keys() {
            if !scenarios.contains(&key) {
                scenarios.push(key);
            }
        }
    }
    scenarios
}

fn parse_browsers(list: &str) -> Result<Vec<BrowserKind>> {
    split_csv(list)
        .iter()
        .map(|name| {
            BrowserKind::parse(name).with_context(|| format!("unknown browser '{name}'"))
        })
        .collect()
}

fn load_calculator(dir: &Path) -> Result<LoadReductionCalculator> {
    let source = DirSource::new(dir);
    let calculator = LoadReductionCalculator::from_source(&source)
        .with_context(|| format!("loading reference tables from {}", dir.display()))?;
    log::info!(
        "Loaded {} land uses and {} treatment methods from {}",
        calculator.tables().land_uses.len(),
        calculator.tables().treatment_methods.len(),
        dir.display()
    );
    Ok(calculator)
}

fn build_browser_config(args: &Args) -> BrowserConfig {
    BrowserConfig {
        headless: args.headless.is_headless(),
        remote_hub: args.hub.clone(),
        ..BrowserConfig::default()
    }
}

fn run_logic_scenarios(
    args: &Args,
    scenarios: &[String],
    calculator: &LoadReductionCalculator,
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Logic | TestMode::Both) {
        return results;
    }

    println!("{}", "🧠 Running Logic Tests".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let logic_tester = LogicTester::new(calculator, args.verbose);

    for scenario_name in scenarios {
        if let Some(combined_scenario) = get_scenario(scenario_name) {
            if let Some(logic_scenario) = combined_scenario.as_logic_scenario() {
                results.push(logic_tester.run_scenario(&logic_scenario, args.iterations));
            } else {
                eprintln!(
                    "⚠️  Scenario {} has no logic test implementation",
                    scenario_name.yellow()
                );
            }
        } else {
            eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
        }
    }

    results
}

async fn run_browser_scenarios(
    args: &Args,
    scenarios: &[String],
    browsers: &[BrowserKind],
    calculator: &Arc<LoadReductionCalculator>,
) -> Vec<ScenarioResult> {
    let mut results = Vec::new();
    if !matches!(args.mode, TestMode::Browser | TestMode::Both) {
        return results;
    }

    println!("{}", "🌐 Running Browser Tests".bright_blue().bold());
    println!("{}", "-".repeat(30).blue());

    let cfg = build_browser_config(args);
    let ctx = ScenarioCtx {
        base_url: args.base_url.clone(),
        calculator: Arc::clone(calculator),
        verbose: args.verbose,
    };

    for &kind in browsers {
        let driver = match new_session(kind, &cfg).await {
            Ok(d) => d,
            Err(e) => {
                eprintln!("❌ Could not start {}: {e}", kind.label());
                results.push(ScenarioResult::single(
                    format!("{} session", kind.label()),
                    Err(e.to_string()),
                    std::time::Duration::ZERO,
                ));
                continue;
            }
        };

        for scenario_name in scenarios {
            let Some(scenario) = get_scenario(scenario_name) else {
                eprintln!("⚠️  Unknown scenario: {}", scenario_name.yellow());
                continue;
            };
            let label = kind.label();
            let scenario_start = Instant::now();
            let outcome = scenario.run_browser(&driver, &ctx).await;
            let duration = scenario_start.elapsed();
            match &outcome {
                Ok(()) => println!("✅ [{}] {scenario_name} - {duration:?}", label.green()),
                Err(e) => {
                    eprintln!("❌ [{}] {scenario_name} - {duration:?}: {e:#}", label.red());
                    let dir = artifacts_dir(&args.artifacts_dir, &label, scenario_name);
                    if let Err(capture_err) = capture_artifacts(&driver, &dir, e).await {
                        log::warn!("Could not capture artifacts in {dir}: {capture_err:#}");
                    }
                }
            }
            results.push(ScenarioResult::single(
                format!("{scenario_name} ({label})"),
                outcome.map_err(|e| format!("{e:#}")),
                duration,
            ));
        }
        let _ = driver.quit().await;
    }

    results
}

/// Returns `true` when the tables are clean.
fn run_audit(args: &Args) -> Result<bool> {
    let calculator = load_calculator(&args.data_dir)?;
    let findings = audit_tables(calculator.tables());
    let mut output_target = OutputTarget::new(args.output.clone())?;
    if args.report == "json" {
        serde_json::to_writer_pretty(output_target.writer(), &findings)?;
        writeln!(output_target.writer())?;
    } else if findings.is_empty() {
        writeln!(
            output_target.writer(),
            "✅ Reference tables in {} passed the audit",
            args.data_dir.display()
        )?;
    } else {
        writeln!(
            output_target.writer(),
            "❌ {} audit finding(s) in {}:",
            findings.len(),
            args.data_dir.display()
        )?;
        for finding in &findings {
            writeln!(output_target.writer(), "  • {finding}")?;
        }
    }
    output_target.flush_inner()?;
    Ok(findings.is_empty())
}

fn read_sheet(path: &Path) -> Result<SheetExport> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    SheetExport::from_json(&text).with_context(|| format!("parsing {}", path.display()))
}

fn write_table<T: serde::Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json + "\n").with_context(|| format!("failed to write {}", path.display()))?;
    println!("📝 Wrote {} entries to {}", rows.len(), path.display());
    Ok(())
}

fn run_import(args: &Args) -> Result<()> {
    anyhow::ensure!(
        args.land_use_sheet.is_some() || args.treatment_sheet.is_some(),
        "import needs --land-use-sheet and/or --treatment-sheet"
    );
    let source = DirSource::new(&args.data_dir);
    fs::create_dir_all(source.dir())
        .with_context(|| format!("failed to create {}", source.dir().display()))?;

    if let Some(path) = &args.land_use_sheet {
        let entries = read_sheet(path)?.land_uses()?;
        write_table(&source.land_use_path(), &entries)?;
    }
    if let Some(path) = &args.treatment_sheet {
        let entries = read_sheet(path)?.treatment_methods()?;
        write_table(&source.treatment_method_path(), &entries)?;
    }
    Ok(())
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, results)?,
        "markdown" => logic::reports::generate_markdown_report(&mut output_target, results)?,
        "csv" => logic::reports::generate_csv_report(&mut output_target, results)?,
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                logic::reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
