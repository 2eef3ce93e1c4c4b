//! CLI entry: verify that a static web bundle is ready to launch.
//!
//! Usage: `launchcheck [BASE_DIR] [--json]`
//!
//! BASE_DIR defaults to the current directory. `--json` prints the raw report
//! instead of the colored summary. The process exit code encodes the first
//! failure category (see `api::errors::exit_code`).

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use launchcheck::ansi_colors::Colorize;
use launchcheck::api::errors;
use launchcheck::logging::JsonlSink;
use launchcheck::types::pathguard::PathGuard;
use launchcheck::types::report::VerifyReport;
use launchcheck::Verifier;

fn main() -> ExitCode {
    let mut json_output = false;
    let mut base_arg: Option<PathBuf> = None;
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json_output = true;
        } else {
            base_arg = Some(PathBuf::from(arg));
        }
    }

    let cwd = match env::current_dir() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{}", format!("cannot determine working directory: {e}").red());
            return ExitCode::FAILURE;
        }
    };
    let base = match base_arg {
        Some(p) if p.is_absolute() => p,
        Some(p) => cwd.join(p),
        None => cwd,
    };

    let guard = match PathGuard::new(&base) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            return ExitCode::FAILURE;
        }
    };

    let report = Verifier::new(JsonlSink, JsonlSink, guard).verify();

    if json_output {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("{}", format!("cannot serialize report: {e}").red());
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_summary(&report, &base);
    }

    let code = errors::exit_code(&report);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn print_summary(report: &VerifyReport, base: &std::path::Path) {
    println!(
        "{}",
        format!("Verifying application bundle at {}", base.display())
            .blue()
            .bold()
    );

    for file in &report.files {
        println!(
            "\n{}",
            format!("Checking {} file: {}", file.kind, file.path).yellow()
        );
        if file.denied {
            println!("  {}", "x access denied".red());
            continue;
        }
        if !file.exists {
            println!("  {}", "x file does not exist".red());
            continue;
        }
        println!("  {}", "+ file exists".green());
        if !file.non_empty {
            println!("  {}", "x file is empty".red());
            continue;
        }
        println!("  {}", "+ file is not empty".green());
        if let Some(content) = &file.content {
            if content.valid {
                println!(
                    "  {}",
                    format!("+ {} validation passed", file.kind).green()
                );
            } else {
                println!("  {}", format!("x {} validation failed", file.kind).red());
                if let Some(err) = &content.error {
                    println!("    {}", format!("error: {err}").red());
                }
                for probe in &content.probes {
                    if probe.ok {
                        println!("    {}", format!("+ {}", probe.name).green());
                    } else {
                        println!("    {}", format!("x {}", probe.name).red());
                    }
                }
            }
        }
    }

    if !report.references.is_empty() {
        println!("\n{}", "Reference checks:".yellow());
        for r in &report.references {
            if r.referenced {
                println!("  {}", format!("+ {} is referenced", r.asset).green());
            } else {
                println!("  {}", format!("x {} is NOT referenced", r.asset).red());
            }
        }
    }
    for w in &report.warnings {
        println!("  {}", format!("! {w}").yellow());
    }

    println!();
    if report.ok {
        println!(
            "{}",
            "All checks passed. Application is ready to launch."
                .green()
                .bold()
        );
    } else {
        println!("{}", "Some checks failed:".red().bold());
        for stop in &report.stops {
            println!("  {}", format!("- {stop}").red());
        }
    }
}
