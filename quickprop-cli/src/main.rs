use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use quickprop::config::{
    DEFAULT_MAX_LEN, DEFAULT_MAX_SHRINK_STEPS, DEFAULT_MAX_STRING_LEN, DEFAULT_TRIALS,
};
use quickprop::{CheckConfig, GenConfig, Report, Runner, Verdict};

mod demos;

use demos::Demo;

#[derive(Parser)]
#[command(name = "quickprop")]
#[command(about = "Run quickprop's demonstration properties", long_about = None)]
#[command(version)]
struct Cli {
    /// Print per-trial and shrinking diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the demonstration properties
    List,
    /// Run demonstration properties (all of them when no names are given)
    ///
    /// Every selected property runs even after an earlier one fails, and the
    /// exit status is 0 unless --strict is given.
    Run {
        /// Names of the properties to run
        names: Vec<String>,

        /// Trials per property
        #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
        trials: usize,

        /// Seed for the run (a fresh one is drawn and printed otherwise)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Exclusive upper bound on generated sequence lengths
        #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
        max_len: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Exit with an error if any property fails
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => list_demos(),
        Commands::Run {
            names,
            trials,
            seed,
            max_len,
            format,
            strict,
        } => {
            let gen_config = GenConfig::new(max_len, DEFAULT_MAX_STRING_LEN)
                .context("Invalid generation settings")?;
            let mut config = CheckConfig::new(trials, DEFAULT_MAX_SHRINK_STEPS, seed, gen_config)
                .context("Invalid run settings")?;
            if cli.verbose {
                config = config.verbose();
            }
            run_demos(&names, config, format, strict)
        }
    }
}

fn list_demos() -> Result<()> {
    println!(
        "{}",
        format!("{} demonstration properties:", demos::catalog().len()).bold()
    );
    println!();

    for demo in demos::catalog() {
        print!("  {:<16} ", demo.name.cyan().bold());
        print!("{}", demo.description);
        if !demo.holds {
            print!(" {}", "(fails on purpose)".bright_black());
        }
        println!();
    }

    Ok(())
}

fn select(names: &[String]) -> Result<Vec<&'static Demo>> {
    if names.is_empty() {
        return Ok(demos::catalog().iter().collect());
    }

    names
        .iter()
        .map(|name| {
            demos::find(name).with_context(|| {
                format!(
                    "Unknown property '{}' (run `quickprop list` to see the catalog)",
                    name
                )
            })
        })
        .collect()
}

fn run_demos(
    names: &[String],
    config: CheckConfig,
    format: OutputFormat,
    strict: bool,
) -> Result<()> {
    let selected = select(names)?;
    let runner = Runner::new(config);

    let results: Vec<(&Demo, Report)> = selected
        .into_iter()
        .map(|demo| (demo, demo.run(&runner)))
        .collect();

    match format {
        OutputFormat::Text => print_text(&results, runner.seed()),
        OutputFormat::Json => print_json(&results, runner.seed())?,
    }

    let not_passed = results.iter().filter(|(_, report)| !report.passed()).count();
    if strict && not_passed > 0 {
        bail!(
            "{} of {} properties did not pass (seed {})",
            not_passed,
            results.len(),
            runner.seed()
        );
    }

    Ok(())
}

fn print_text(results: &[(&Demo, Report)], seed: u64) {
    for (demo, report) in results {
        let tag = match report.verdict {
            Verdict::Passed => "PASS".green().bold(),
            Verdict::Failed => "FAIL".red().bold(),
            Verdict::Errored => "ERROR".yellow().bold(),
        };
        println!("{} {}", tag, demo.name.cyan());
        for line in report.to_string().lines() {
            println!("    {}", line);
        }
    }

    let count = |verdict: Verdict| {
        results
            .iter()
            .filter(|(_, report)| report.verdict == verdict)
            .count()
    };
    println!();
    println!(
        "{}",
        format!(
            "{} passed, {} failed, {} errored (seed {})",
            count(Verdict::Passed),
            count(Verdict::Failed),
            count(Verdict::Errored),
            seed
        )
        .bold()
    );
}

fn print_json(results: &[(&Demo, Report)], seed: u64) -> Result<()> {
    let entries = results
        .iter()
        .map(|(demo, report)| -> Result<serde_json::Value> {
            Ok(serde_json::json!({
                "name": demo.name,
                "report": serde_json::to_value(report)?,
            }))
        })
        .collect::<Result<Vec<_>>>()?;

    let output = serde_json::json!({
        "seed": seed,
        "results": entries,
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to render JSON report")?
    );
    Ok(())
}
