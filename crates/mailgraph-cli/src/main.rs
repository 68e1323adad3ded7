//! mailgraph CLI: find the people holding an email network together.

use std::io::{self, BufWriter};
use std::time::Instant;

use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use mailgraph_core::config::{AnalysisConfig, RootRule};
use mailgraph_core::output::{write_connector_lines, write_connectors, write_output};
use mailgraph_core::pipeline::{self, Session};
use mailgraph_core::query::run_query_loop;

#[derive(Parser)]
#[command(
    name = "mailgraph",
    about = "mailgraph - Find the connectors of an email acquaintance network"
)]
struct Cli {
    /// Mail log, one `sender,recipient,...` record per line
    #[arg(default_value = "dataset.txt")]
    dataset: String,

    /// File to write the connectors to, one per line
    connectors_out: Option<String>,

    /// Extra friendship edges, one `a,b` pair per line
    #[arg(long)]
    edges: Option<String>,

    /// Write a JSON report to this path
    #[arg(long)]
    json: Option<String>,

    /// How DFS roots are treated: omit or textbook
    #[arg(long, default_value = "omit", value_parser = parse_root_rule)]
    root_rule: RootRule,

    /// Report each connector only once
    #[arg(long)]
    unique: bool,

    /// Do not link senders to their recipients in the friendship graph
    #[arg(long)]
    no_link: bool,

    /// Word that ends the interactive lookup (any case)
    #[arg(long, default_value = "EXIT")]
    exit_word: String,

    /// Skip the interactive lookup
    #[arg(long)]
    no_interactive: bool,

    /// Show per-phase timing breakdown
    #[arg(long)]
    verbose: bool,

    /// Suppress all output except errors and connectors
    #[arg(long)]
    quiet: bool,
}

fn parse_root_rule(s: &str) -> Result<RootRule, String> {
    RootRule::from_str_value(s).ok_or_else(|| format!("unknown root rule '{s}' (omit, textbook)"))
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = AnalysisConfig {
        dataset_path: cli.dataset,
        connectors_path: cli.connectors_out,
        edges_path: cli.edges,
        json_path: cli.json,
        root_rule: cli.root_rule,
        link_correspondents: !cli.no_link,
        unique_connectors: cli.unique,
        exit_sentinel: cli.exit_word,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    log::debug!("Running with {config:?}");

    let session = if config.quiet {
        pipeline::run_pipeline(&config, None)
    } else {
        run_with_progress(&config)
    };

    for warning in &session.warnings {
        eprintln!("{} {warning}", style("warning:").yellow().bold());
    }

    report_connectors(&config, &session);

    if let Some(json_path) = &config.json_path {
        match write_output(&session.result, json_path) {
            Ok(()) if !config.quiet => {
                println!("\n  {} {}", style("Report written to:").green(), json_path)
            }
            Ok(()) => {}
            Err(e) => eprintln!("Error writing report: {e}"),
        }
    }

    if !cli.no_interactive {
        let stdin = io::stdin();
        let stdout = io::stdout();
        if let Err(e) = run_query_loop(
            &session.analyzer,
            stdin.lock(),
            BufWriter::new(stdout.lock()),
            &config.exit_sentinel,
        ) {
            eprintln!("Error reading input: {e}");
            std::process::exit(1);
        }
    }
}

/// Connectors go to the optional file and always to the console.
fn report_connectors(config: &AnalysisConfig, session: &Session) {
    let connectors = session.analyzer.connectors();

    if let Some(path) = &config.connectors_path {
        if let Err(e) = write_connectors(connectors, path) {
            eprintln!("Error writing connectors to file: {e}");
        }
    }

    if !config.quiet {
        println!("\n  {}", style("Connectors:").bold());
    }
    let stdout = io::stdout();
    if let Err(e) = write_connector_lines(connectors, stdout.lock()) {
        eprintln!("Error writing connectors: {e}");
    }
}

fn run_with_progress(config: &AnalysisConfig) -> Session {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message("Initialising...");
    pb.enable_steady_tick(std::time::Duration::from_millis(80));

    let progress: pipeline::ProgressCallback = {
        let pb = pb.clone();
        Box::new(move |_name, label| {
            pb.set_message(label.to_string());
        })
    };

    let start = Instant::now();
    let session = pipeline::run_pipeline(config, Some(progress));
    pb.finish_and_clear();

    let result = &session.result;

    // Summary
    println!(
        "\n{}  mailgraph analysis: {}",
        style("✓").green().bold(),
        style(&config.dataset_path).bold()
    );
    for (label, key) in [
        ("Mails:", "mails"),
        ("People:", "people"),
        ("Friendships:", "edges"),
        ("Components:", "components"),
        ("Connectors:", "connectors"),
    ] {
        println!(
            "  {:<14} {}",
            label,
            result.stats.get(key).unwrap_or(&serde_json::json!(0))
        );
    }

    let duration = start.elapsed();
    println!(
        "  {:<14} {:.1}ms",
        "Duration:",
        duration.as_secs_f64() * 1000.0
    );

    if config.verbose {
        if let Some(serde_json::Value::Object(timings)) = result.metadata.get("phase_timings") {
            println!("\n  Phase Timings:");
            for (phase, secs) in timings {
                if let Some(val) = secs.as_f64() {
                    println!("    {:<14} {:.1}ms", phase, val * 1000.0);
                }
            }
        }
    }

    session
}
