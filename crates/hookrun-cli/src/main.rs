// Rust guideline compliant 2026-02-09

//! Hookrun CLI Application
//!
//! Command-line interface for the hookrun manifest runner.

use clap::Parser;
use hookrun_cli::commands;
use hookrun_cli::commands::run::RunArgs;
use hookrun_cli::logging::init_tracing;
use hookrun_cli::signals::install_interrupt_handler;
use hookrun_cli::terminal::stderr_is_terminal;
use hookrun_cli::workspace::relative_to;
use hookrun_cli::{create_formatter, should_use_color, FileSelection, Workspace};
use hookrun_core::{CancelToken, Config};
use std::path::{Path, PathBuf};

/// Exit code for fatal errors.
const EXIT_INTERNAL_ERROR: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "hookrun",
    version,
    about = "hookrun: run pre-commit style hook manifests",
    long_about = "hookrun loads a YAML hook manifest, validates it, plans hooks in declaration order and runs each one as an external process against the selected files.",
    after_help = "Examples:\n  hookrun run\n  hookrun run --all-files\n  hookrun run src/main.py pyproject.toml\n  hookrun run --hook trailing-whitespace --all-files\n  hookrun plan --all-files --format plain\n  hookrun validate --config ci/hooks.yaml\n  hookrun init --format plain\n\nExit codes: 0 pass, 1 hook failure, 2 tool or internal error, 130 interrupted"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Manifest path (default .pre-commit-config.yaml)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run hooks against staged, tracked or given files
    Run {
        /// Run against every file tracked by Git
        #[arg(long, conflicts_with = "files")]
        all_files: bool,

        /// Only run the hook with this id
        #[arg(long)]
        hook: Option<String>,

        /// Stop after the first failing hook
        #[arg(long)]
        fail_fast: bool,

        /// Per-hook timeout in seconds (0 disables)
        #[arg(long)]
        timeout: Option<u64>,

        /// Write a JSON report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Files to check
        files: Vec<PathBuf>,
    },

    /// Validate the manifest
    Validate,

    /// Write the effective settings to .hookrun.toml
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },

    /// Show the execution plan without running it
    Plan {
        /// Plan against every file tracked by Git
        #[arg(long, conflicts_with = "files")]
        all_files: bool,

        /// Only include the hook with this id
        #[arg(long)]
        hook: Option<String>,

        /// Files to check
        files: Vec<PathBuf>,
    },
}

fn main() {
    let code = match real_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            EXIT_INTERNAL_ERROR
        }
    };
    std::process::exit(code);
}

fn real_main() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let cwd = cwd.canonicalize().unwrap_or(cwd);
    let root = Workspace::discover_root(&cwd);
    let mut config = Config::load(&root)?;
    if let Some(path) = cli.config.clone() {
        let manifest = relative_to(&root, &cwd.join(path));
        config.manifest_path = manifest.to_string_lossy().into_owned();
    }
    if let Some(level) = cli.log_level.clone() {
        config.log_level = level.to_lowercase();
    }
    if let Some(format) = &cli.format {
        config.output_format = match format {
            OutputFormat::Json => hookrun_core::OutputFormat::Json,
            OutputFormat::Table => hookrun_core::OutputFormat::Table,
            OutputFormat::Plain => hookrun_core::OutputFormat::Plain,
        };
    } else if cli.json {
        config.output_format = hookrun_core::OutputFormat::Json;
    }
    if let Some(Commands::Run {
        fail_fast, timeout, ..
    }) = &cli.command
    {
        config.fail_fast |= *fail_fast;
        if let Some(secs) = timeout {
            config.timeout_secs = *secs;
        }
    }
    config.validate()?;

    let _guard = init_tracing(&config.log_level, cli.log_file.as_deref())?;

    let use_color = !cli.no_color && should_use_color();
    let formatter = create_formatter(config.output_format, use_color);
    let is_json = config.output_format == hookrun_core::OutputFormat::Json;
    let workspace = Workspace::new(root, config);

    let result = match cli.command {
        Some(Commands::Run {
            all_files,
            hook,
            report,
            files,
            ..
        }) => {
            let cancel = CancelToken::new();
            install_interrupt_handler(cancel.clone())?;
            commands::run::execute(
                &workspace,
                RunArgs {
                    selection: Some(FileSelection::from_args(all_files, from_cwd(&cwd, files))),
                    hook,
                    report,
                    progress: !is_json && stderr_is_terminal(),
                },
                formatter.as_ref(),
                &cancel,
            )
        }
        Some(Commands::Validate) => commands::validate::execute(&workspace, formatter.as_ref()),
        Some(Commands::Init { force }) => commands::init::execute(&workspace, force),
        Some(Commands::Plan {
            all_files,
            hook,
            files,
        }) => commands::plan::execute(
            &workspace,
            FileSelection::from_args(all_files, from_cwd(&cwd, files)),
            hook,
            formatter.as_ref(),
        ),
        None => {
            println!("Use --help for usage information");
            Ok(0)
        }
    };

    match result {
        Ok(code) => Ok(code),
        Err(err) => {
            tracing::debug!(error = %err, "fatal error");
            let message = format!("{:#}", err);
            if is_json {
                println!("{}", formatter.format_error(&message));
            } else {
                eprintln!("{}", formatter.format_error(&message));
            }
            Ok(EXIT_INTERNAL_ERROR)
        }
    }
}

/// Anchors command-line paths at the invocation directory.
fn from_cwd(cwd: &Path, files: Vec<PathBuf>) -> Vec<PathBuf> {
    files.into_iter().map(|file| cwd.join(file)).collect()
}
