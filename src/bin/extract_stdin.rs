//! Simple CLI that reads rendered HTML from stdin and prints the extraction
//! result as JSON on stdout.
//!
//! ```text
//! extract_stdin (--profile NAME | --url URL) [--profiles FILE] [--bypass] < page.html
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` to change the level.

use std::io::{self, Read};
use std::process::ExitCode;

use rs_news_extract::{extract_bytes, BypassAttempt, Options, ProfileRegistry, SiteProfile};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: extract_stdin (--profile NAME | --url URL) [--profiles FILE] [--bypass] < page.html";

#[derive(Debug, Default)]
struct Args {
    profile: Option<String>,
    url: Option<String>,
    profiles: Option<String>,
    bypass: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--profile" => args.profile = Some(iter.next().ok_or("--profile needs a value")?),
            "--url" => args.url = Some(iter.next().ok_or("--url needs a value")?),
            "--profiles" => args.profiles = Some(iter.next().ok_or("--profiles needs a value")?),
            "--bypass" => args.bypass = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            other => return Err(format!("unknown argument {other:?}\n{USAGE}")),
        }
    }

    if args.profile.is_none() && args.url.is_none() {
        return Err(USAGE.to_string());
    }
    Ok(args)
}

fn select_profile(registry: &ProfileRegistry, args: &Args) -> Result<SiteProfile, String> {
    match (&args.profile, &args.url) {
        (Some(name), _) => registry.get(name).cloned().map_err(|e| e.to_string()),
        (None, Some(url)) => Ok(registry.lookup(url).clone()),
        (None, None) => Err(USAGE.to_string()),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rs_news_extract=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    let registry = match &args.profiles {
        Some(path) => ProfileRegistry::from_json_path(path),
        None => ProfileRegistry::builtin(),
    };
    let registry = match registry {
        Ok(r) => r,
        Err(err) => {
            eprintln!("Failed to load profiles: {err}");
            return ExitCode::FAILURE;
        }
    };

    let profile = match select_profile(&registry, &args) {
        Ok(p) => p,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    // Read HTML from stdin
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        return ExitCode::FAILURE;
    }

    let bypass = if args.bypass {
        BypassAttempt::Succeeded
    } else {
        BypassAttempt::NotAttempted
    };
    let result = extract_bytes(&html, &profile, bypass, &Options::default());

    match serde_json::to_string(&result) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to serialize result: {err}");
            ExitCode::FAILURE
        }
    }
}
