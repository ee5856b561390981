use std::env;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const APP_NAME: &str = "pagelens";
const VERSION: &str = env!("CARGO_PKG_VERSION");

struct CliOptions {
    url: String,
    json: bool,
}

enum CliCommand {
    Run(CliOptions),
    Help,
    Version,
}

fn parse_arguments(args: &[String]) -> Result<CliCommand> {
    if args.is_empty() {
        return Ok(CliCommand::Help);
    }

    let mut url: Option<String> = None;
    let mut json = false;

    for arg in args {
        if matches!(arg.as_str(), "-h" | "--help") {
            return Ok(CliCommand::Help);
        }

        if matches!(arg.as_str(), "-v" | "--version") {
            return Ok(CliCommand::Version);
        }

        if matches!(arg.as_str(), "-j" | "--json") {
            json = true;
            continue;
        }

        if arg.starts_with('-') {
            return Err(anyhow!("unknown flag: {arg}"));
        }

        if url.is_none() {
            url = Some(arg.clone());
        } else {
            return Err(anyhow!("unexpected additional argument: {arg}"));
        }
    }

    let url = url.ok_or_else(|| anyhow!("missing <url> argument"))?;

    Ok(CliCommand::Run(CliOptions { url, json }))
}

fn print_help() {
    println!("{APP_NAME} — single-page performance, SEO, and accessibility reports");
    println!("Usage: {APP_NAME} [OPTIONS] <URL>\n");
    println!("Options:");
    println!("  -j, --json       Emit the report as JSON instead of plain lines");
    println!("  -v, --version    Show version information");
    println!("  -h, --help       Show this help message");
}

fn print_version() {
    println!("{APP_NAME} {VERSION}");
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let raw_args = env::args().skip(1).collect::<Vec<_>>();
    match parse_arguments(&raw_args)? {
        CliCommand::Help => print_help(),
        CliCommand::Version => print_version(),
        CliCommand::Run(options) => {
            // Empty input never reaches the pipeline.
            if options.url.trim().is_empty() {
                println!("Please provide a valid URL.");
                return Ok(ExitCode::FAILURE);
            }

            let report = pagelens_core::analyze_url(&options.url).await;
            if options.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for line in &report.lines {
                    println!("{line}");
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
