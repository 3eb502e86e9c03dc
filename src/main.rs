//! seshat CLI: paired-rule confidence metrics over association rule sets.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use seshat::export::{export_rules, export_scored};
use seshat::metric::{PairedMetric, ScoredRuleSet, annotate};
use seshat::rule::{Rule, RuleSet};
use seshat::sample;

#[derive(Parser)]
#[command(name = "seshat", version, about = "Association-rule pairing metrics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Path to a JSON file with rule records
    /// (`[{"antecedent": [...], "consequent": [...], "support": ..., "confidence": ..., "lift": ...}, ...]`).
    #[arg(long, conflicts_with = "sample")]
    file: Option<PathBuf>,

    /// Use the built-in five-transaction market-basket sample.
    #[arg(long)]
    sample: bool,

    /// Emit JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rule set with its standard statistics.
    Rules {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Annotate each rule with |conf(A => B) - conf(B => A)|.
    Diff {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Annotate each rule with conf(A => B) / conf(B => A).
    Quotient {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rules { input } => {
            let rules = load_rules(&input)?;
            if input.json {
                let json = serde_json::to_string_pretty(&export_rules(&rules)).into_diagnostic()?;
                println!("{json}");
            } else {
                print_rules(&rules);
            }
        }

        Commands::Diff { input } => {
            run_metric(&input, PairedMetric::ConfidenceDifference)?;
        }

        Commands::Quotient { input } => {
            run_metric(&input, PairedMetric::ConfidenceQuotient)?;
        }
    }

    Ok(())
}

fn run_metric(input: &InputArgs, metric: PairedMetric) -> Result<()> {
    let rules = load_rules(input)?;
    let scored = annotate(&rules, metric);
    if input.json {
        let json = serde_json::to_string_pretty(&export_scored(&scored)).into_diagnostic()?;
        println!("{json}");
    } else {
        print_scored(&scored);
    }
    Ok(())
}

fn load_rules(input: &InputArgs) -> Result<RuleSet> {
    if let Some(path) = &input.file {
        let content = std::fs::read_to_string(path).into_diagnostic()?;
        let records: Vec<Rule> = serde_json::from_str(&content).into_diagnostic()?;
        let rules = RuleSet::new(records)?;
        Ok(rules)
    } else if input.sample {
        Ok(sample::rules())
    } else {
        miette::bail!("provide a rule source: --file <PATH> or --sample");
    }
}

fn print_rules(rules: &RuleSet) {
    if rules.is_empty() {
        println!("No rules.");
        return;
    }
    println!("Rules ({}):", rules.len());
    for rule in rules {
        println!(
            "  {} => {}  support={:.3} confidence={:.3} lift={:.3}",
            rule.antecedent, rule.consequent, rule.support, rule.confidence, rule.lift
        );
    }
}

fn print_scored(scored: &ScoredRuleSet) {
    if scored.is_empty() {
        println!("No rules.");
        return;
    }
    println!("Rules ({}), metric {}:", scored.len(), scored.metric());
    for s in scored {
        let score = if s.score.is_infinite() {
            "inf".to_string()
        } else {
            format!("{:.4}", s.score)
        };
        println!(
            "  {} => {}  confidence={:.3} {}={}",
            s.rule.antecedent,
            s.rule.consequent,
            s.rule.confidence,
            scored.metric(),
            score
        );
    }
}
