//! Narrata CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use narrata_engine::UuidGenerator;
use narrata_runtime::{Project, ProjectOptions, logging};

/// Argument errors.
#[derive(Debug, thiserror::Error)]
enum ArgError {
    #[error("{0} requires a value")]
    MissingValue(String),
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
    sources: Option<PathBuf>,
    resources: Option<PathBuf>,
    output: Option<PathBuf>,
    engine_import: Option<String>,
    check: bool,
    dump_records: bool,
    verbosity: u8,
}

impl CliConfig {
    fn options(&self) -> ProjectOptions {
        let mut options = ProjectOptions::default().with_check_only(self.check);
        if let Some(dir) = &self.sources {
            options = options.with_sources_dir(dir);
        }
        if let Some(dir) = &self.resources {
            options = options.with_resources_dir(dir);
        }
        if let Some(dir) = &self.output {
            options = options.with_output_dir(dir);
        }
        if let Some(module) = &self.engine_import {
            options = options.with_engine_import(module);
        }
        options
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, ArgError> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| ArgError::MissingValue(flag.to_string()));
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--sources" => config.sources = Some(PathBuf::from(value("--sources")?)),
            "--resources" => config.resources = Some(PathBuf::from(value("--resources")?)),
            "--output" => config.output = Some(PathBuf::from(value("--output")?)),
            "--engine-import" => config.engine_import = Some(value("--engine-import")?),
            "--check" => config.check = true,
            "--dump-records" => config.dump_records = true,
            "-v" => config.verbosity = config.verbosity.saturating_add(1),
            "-vv" => config.verbosity = config.verbosity.saturating_add(2),
            other if other.starts_with('-') => return Err(ArgError::UnknownOption(other.to_string())),
            other => return Err(ArgError::UnexpectedArgument(other.to_string())),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("narrata {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    logging::init(config.verbosity)?;

    let project = Project::new(config.options())?;
    let outcomes = project.run(&mut UuidGenerator)?;

    if config.dump_records {
        for outcome in &outcomes {
            println!("{}", outcome.records_json()?);
        }
    }

    let changed: Vec<_> = outcomes.iter().flat_map(|o| o.changed.iter()).collect();
    if config.check {
        if changed.is_empty() {
            return Ok(ExitCode::SUCCESS);
        }
        eprintln!("\x1b[33m{} file(s) out of date:\x1b[0m", changed.len());
        for path in changed {
            eprintln!("  - {}", path.display());
        }
        return Ok(ExitCode::from(1));
    }

    for outcome in &outcomes {
        println!(
            "{}: {} record(s), {} new character(s), {} new resource(s), {} file(s) saved",
            outcome.name,
            outcome.aggregate.len(),
            outcome.report.added_characters.len(),
            outcome.report.added_resources.len(),
            outcome.changed.len()
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn print_help() {
    println!(
        "\x1b[1mNarrata\x1b[0m - Script parser and lookup-table generator

\x1b[1mUSAGE:\x1b[0m
    narrata [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help               Print help information
    -V, --version            Print version information
    --sources DIR            Script packages (default: sources)
    --resources DIR          Asset packages (default: resources)
    --output DIR             Generated files (default: output)
    --engine-import MODULE   Module generated files import from
                             (default: @narrata/engine)
    --check                  Report out-of-date files without writing;
                             exits with 1 if any would change
    --dump-records           Print parsed records of each package as JSON
    -v, -vv                  Log progress (-v) or per-file detail (-vv)

\x1b[1mLAYOUT:\x1b[0m
    sources/<package>/**     .chapter, .marker and .place scripts
    resources/<package>/**   Asset files
    output/<package>/        char.map.ts, res.map.ts, res.enum.ts,
                             list.res.ts, <package>.pack.ts

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG                 Log filter; overrides -v

\x1b[1mEXAMPLES:\x1b[0m
    narrata                          Update every package
    narrata --check                  Fail if generated files are stale
    narrata --output gen -v          Write to gen/ and log progress"
    );
}
