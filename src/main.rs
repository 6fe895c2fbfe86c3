use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;
mod config;
mod error;
mod locate;
mod logging;
mod manifest;
mod order;
mod output;
mod paths;

use cli::{Command, LocationArgs, OrderArgs, RootArgs};
use config::{resolve_location, Settings};
use error::ManifestError;
use manifest::PthFile;
use output::{print_json, report_failure, CheckReport, ReorderReport};

fn main() -> ExitCode {
    let args = RootArgs::parse();
    logging::init(args.verbose);

    match run(args.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Cat(args) => cmd_cat(&args.location),
        Command::Locate(args) => cmd_locate(&args.location),
        Command::Check(args) => cmd_check(&args),
        Command::Reorder(args) => cmd_reorder(&args),
    }
}

fn cmd_cat(args: &LocationArgs) -> Result<ExitCode> {
    let location = resolve_manifest(args)?;
    let text = manifest::read_text(&location)?;
    print!("{text}");
    Ok(ExitCode::SUCCESS)
}

fn cmd_locate(args: &LocationArgs) -> Result<ExitCode> {
    let location = resolve_manifest(args)?;
    if !location.is_file() {
        return Err(ManifestError::ManifestMissing { path: location }.into());
    }
    println!("{}", location.display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_check(args: &OrderArgs) -> Result<ExitCode> {
    let expected = expected_dirs(&args.directories)?;
    let pth = PthFile::open(resolve_manifest(&args.location)?)?;

    if args.json {
        let report = CheckReport::new(&pth, &expected);
        print_json(&report)?;
        return Ok(exit_code(report.unmatched.is_empty()));
    }
    match pth.assert_ordered(&expected) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            report_failure(&err, pth.location())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn cmd_reorder(args: &OrderArgs) -> Result<ExitCode> {
    let expected = expected_dirs(&args.directories)?;
    let mut pth = PthFile::open(resolve_manifest(&args.location)?)?;

    let outcome = match pth.reorder(&expected) {
        Ok(rewritten) => Ok(rewritten),
        Err(ManifestError::Order(err)) => Err(err),
        Err(err) => return Err(err.into()),
    };
    if args.json {
        let report = ReorderReport::new(&pth, &expected, &outcome);
        print_json(&report)?;
        return Ok(exit_code(report.succeeded()));
    }
    match outcome {
        Ok(rewritten) => {
            tracing::debug!(rewritten, "reorder finished");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            report_failure(&err, pth.location())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn resolve_manifest(args: &LocationArgs) -> Result<PathBuf> {
    let settings = Settings::from_env(args.easy_install_location.as_deref());
    let locator = settings.locator();
    Ok(resolve_location(&settings, &locator)?)
}

fn expected_dirs(raw: &[String]) -> Result<Vec<String>> {
    let cwd = std::env::current_dir().context("determine current directory")?;
    let home = dirs::home_dir();
    Ok(paths::absolute_dirs(raw, &cwd, home.as_deref())?)
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
