// dataguard/src/main.rs
//! DataGuard entry point.
//!
//! Parses arguments, initialises logging and dispatches to the command modules.

use anyhow::Result;
use clap::Parser;
use log::debug;
use std::process::ExitCode;

use dataguard::cli::{Cli, Commands};
use dataguard::commands::clean_file::{clean_with_default, CleanFileOptions};
use dataguard::commands::scan::{run_scan, ScanOptions};
use dataguard::commands::scrub::{run_scrub, ScrubOptions};
use dataguard::commands::serve::{run_serve, ServeOptions};
use dataguard::commands::{build_engine, error_msg, info_msg, read_input, warn_msg};
use dataguard::logger;

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Scrub(cmd) => {
            let engine = build_engine(cmd.rules.as_deref())?;
            let opts = ScrubOptions {
                input: read_input(cmd.input_file.as_deref())?,
                output_path: cmd.output,
                json: cmd.json,
                diff: cmd.diff,
                no_redaction_summary: cmd.no_summary,
                quiet: cli.quiet,
            };
            run_scrub(&engine, &opts)?;
        }
        Commands::Scan(cmd) => {
            let engine = build_engine(cmd.rules.as_deref())?;
            let opts = ScanOptions {
                input: read_input(cmd.input_file.as_deref())?,
                json_file: cmd.json_file,
                json_stdout: cmd.json_stdout,
                fail_over_threshold: cmd.fail_over_threshold,
                quiet: cli.quiet,
            };
            let report = run_scan(&engine, &opts)?;
            if report.exceeds(opts.fail_over_threshold) {
                if !cli.quiet {
                    warn_msg(format!(
                        "Detected {} item(s), over the threshold of {}.",
                        report.total,
                        opts.fail_over_threshold.unwrap_or_default()
                    ));
                }
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::CleanFile(cmd) => {
            let opts = CleanFileOptions {
                input_path: cmd.input_file,
                output_path: cmd.output,
                kind: cmd.kind,
            };
            let written = clean_with_default(&opts)?;
            if !cli.quiet {
                info_msg(format!("Metadata removed. Cleaned file written to {}", written.display()));
            }
        }
        Commands::Serve(cmd) => {
            run_serve(&ServeOptions {
                host: cmd.host,
                port: cmd.port,
                max_upload_bytes: cmd.max_upload_bytes,
                config_path: cmd.config,
            })?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    // Loaded before parsing so `DATAGUARD_*` values in .env reach clap. A missing file is normal.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    logger::init_logger(logger::level_from_flags(cli.quiet, cli.debug));
    debug!("Parsed CLI: {:?}", cli);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
