// Thu Feb 5 2026 - Alex

use clap::Parser;
use colored::Colorize;
use paper_relevance_scorer::{
    aggregate::{AggregateRecord, Aggregator},
    config::Config,
    dispatch::{Dispatcher, EndpointPool},
    output::{save_json_report, save_markdown_report},
    scorer::Scorer,
    sink::FileSink,
    source::CsvSource,
    ui::banner::Banner,
    utils::logging,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Distributed relevance scoring for paper abstracts", long_about = None)]
struct Args {
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long)]
    input: Option<PathBuf>,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    endpoint: Vec<String>,

    #[arg(short, long)]
    model: Option<String>,

    #[arg(long)]
    topic: Vec<String>,

    #[arg(long)]
    min_year: Option<i32>,

    #[arg(long)]
    max_year: Option<i32>,

    #[arg(long)]
    timeout_secs: Option<u64>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,

    #[arg(long)]
    json_report: Option<PathBuf>,

    #[arg(long)]
    markdown_report: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if !args.no_banner && atty::is(atty::Stream::Stdout) {
        Banner::print_default();
    }

    println!("{}", "Paper Relevance Scorer".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let start_time = Instant::now();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    if std::env::var_os("RUST_LOG").is_some() {
        logging::init_from_env();
    } else {
        logging::init_logger(config.enable_verbose_output);
    }

    let topic = config.topic();
    println!("{} Analyzing topic: {}", "[*]".blue(), topic);
    println!(
        "{} Endpoints configured: {}",
        "[*]".blue(),
        config.endpoints.len()
    );
    println!(
        "{} Loading papers from: {}",
        "[*]".blue(),
        config.input_file.display()
    );

    let items = match CsvSource::load(&config.input_file) {
        Ok(items) => items,
        Err(e) => {
            eprintln!("{} Failed to load input: {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    if items.is_empty() {
        eprintln!(
            "{} No scoreable rows in {}",
            "[!]".red(),
            config.input_file.display()
        );
        std::process::exit(1);
    }

    println!("{} Loaded {} papers", "[+]".green(), items.len());
    println!();

    let scorer = match Scorer::new(
        config.model.clone(),
        topic,
        Duration::from_secs(config.request_timeout_secs),
    ) {
        Ok(scorer) => Arc::new(scorer),
        Err(e) => {
            eprintln!("{} Failed to build HTTP client: {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    let sink = Arc::new(FileSink::new(config.output_file.clone()));
    let pool = EndpointPool::from_addresses(&config.endpoints);

    println!(
        "{} Dispatching {} papers across {} endpoints...",
        "[*]".blue(),
        items.len(),
        pool.len()
    );
    println!();

    let total = items.len();
    let dispatcher =
        Dispatcher::new(pool, scorer, sink).with_progress(config.enable_progress_bars);
    let results = dispatcher.run(items);

    let failed = results.iter().filter(|r| !r.is_valid()).count();

    println!();
    println!(
        "{} Scored {} of {} papers ({} failed)",
        "[+]".green(),
        results.len() - failed,
        total,
        failed
    );
    println!(
        "{} Results appended to: {}",
        "[+]".green(),
        config.output_file.display()
    );

    let aggregator = Aggregator::new(config.min_year, config.max_year);
    let records = aggregator.aggregate(&results);

    print_summary(&records);

    if let Some(path) = &args.json_report {
        if let Err(e) = save_json_report(&records, path) {
            eprintln!("{} Failed to save JSON report: {}", "[!]".red(), e);
        } else {
            println!("{} JSON report saved to: {}", "[+]".green(), path.display());
        }
    }

    if let Some(path) = &args.markdown_report {
        if let Err(e) = save_markdown_report(&records, path) {
            eprintln!("{} Failed to save markdown report: {}", "[!]".red(), e);
        } else {
            println!(
                "{} Markdown report saved to: {}",
                "[+]".green(),
                path.display()
            );
        }
    }

    let elapsed = start_time.elapsed();

    println!();
    println!("{}", "=".repeat(50).cyan());
    println!(
        "{} Run complete in {:.2}s",
        "[+]".green(),
        elapsed.as_secs_f64()
    );
}

fn build_config(args: &Args) -> Result<Config, String> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path).map_err(|e| format!("{:#}", e))?,
        None => Config::default(),
    };

    if !args.endpoint.is_empty() {
        config.endpoints = args.endpoint.clone();
    }
    if let Some(input) = &args.input {
        config.input_file = input.clone();
    }
    if let Some(output) = &args.output {
        config.output_file = output.clone();
    }
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if !args.topic.is_empty() {
        config.topics = args.topic.clone();
    }
    if let Some(min_year) = args.min_year {
        config.min_year = min_year;
    }
    if let Some(max_year) = args.max_year {
        config.max_year = max_year;
    }
    if let Some(secs) = args.timeout_secs {
        config.request_timeout_secs = secs;
    }
    if args.no_progress || !atty::is(atty::Stream::Stdout) {
        config.enable_progress_bars = false;
    }
    if args.verbose {
        config.enable_verbose_output = true;
    }

    config
        .validate()
        .map_err(|e| format!("Invalid configuration: {}", e))?;

    Ok(config)
}

fn print_summary(records: &[AggregateRecord]) {
    println!();
    println!("{}", "Average Relevance by Year".cyan().bold());
    println!("{}", "-".repeat(40).cyan());

    if records.is_empty() {
        println!(
            "  {}",
            "No valid scores inside the configured year range".yellow()
        );
        return;
    }

    for record in records {
        let mean = format!("{:.4}", record.mean_score);
        let colored_mean = if record.mean_score >= 0.66 {
            mean.green()
        } else if record.mean_score >= 0.33 {
            mean.yellow()
        } else {
            mean.red()
        };

        println!(
            "  {}: {} (n={})",
            record.year.to_string().cyan(),
            colored_mean,
            record.sample_count
        );
    }
}
