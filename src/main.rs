//! hue-config: browse a Hue server's configuration from the terminal
//!
//! Loads the configuration tree once, narrows it with a free-text filter and
//! prints the subtree of one application.

#![allow(clippy::struct_excessive_bools)]

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use hue_config_browser::{
    cli::{self, exit_codes, ShowOptions},
    config::{self, AppConfig, ConfigPreset},
    error::HueConfigError,
    render::OutputFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hue-config")]
#[command(version)]
#[command(about = "Browse and filter a Hue server's configuration", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Configuration shown
    1  Nothing to show for the selected application and filter
    3  Error occurred

EXAMPLES:
    # Show the desktop configuration of a local server
    hue-config show --url http://localhost:8888

    # Everything mentioning ldap in the desktop app, with help text
    hue-config show --url http://hue:8888 -f ldap --show-help

    # Browse a saved response offline
    hue-config show --file hue-config.json --app beeswax -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Where to load the configuration snapshot from
#[derive(Parser)]
struct SourceArgs {
    /// Base URL of the server
    #[arg(long)]
    url: Option<String>,

    /// Saved JSON response to read instead of contacting a server
    #[arg(long, conflicts_with = "url")]
    file: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Retries on connection errors and 5xx responses
    #[arg(long)]
    retries: Option<u8>,
}

/// Output selection shared by commands that print data
#[derive(Parser)]
struct OutputArgs {
    /// Output format
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `show` subcommand
#[derive(Parser)]
struct ShowArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Application to show (defaults to desktop when the server has it)
    #[arg(short, long)]
    app: Option<String>,

    /// Only show entries whose key or help text contains TEXT
    #[arg(short, long, value_name = "TEXT")]
    filter: Option<String>,

    /// Application selected when the server has no desktop app
    #[arg(long)]
    default_app: Option<String>,

    /// Print help text under each entry
    #[arg(long)]
    show_help: bool,

    /// Do not print default values
    #[arg(long)]
    hide_defaults: bool,
}

/// Arguments for the `apps` subcommand
#[derive(Parser)]
struct AppsArgs {
    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the configuration of one application
    Show(ShowArgs),

    /// List the applications known to the server
    Apps(AppsArgs),

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Output file path (stdout if not specified)
        #[arg(short = 'O', long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .hue-config.yaml in the current directory
    Init {
        /// Start from a preset (default, verbose, scripting)
        #[arg(long)]
        preset: Option<String>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}

/// CLI values layered over the config file.
fn overrides(no_color: bool, source: &SourceArgs, output: &OutputArgs) -> AppConfig {
    let mut config = AppConfig::builder()
        .url(source.url.clone())
        .file(source.file.clone())
        .output_file(output.output_file.clone())
        .no_color(no_color);
    if let Some(timeout) = source.timeout {
        config = config.timeout_secs(timeout);
    }
    if let Some(retries) = source.retries {
        config = config.max_retries(retries);
    }
    if let Some(format) = output.output {
        config = config.output_format(format);
    }
    config.build()
}

fn effective_config(cli_config: Option<&std::path::Path>, overrides: &AppConfig) -> AppConfig {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(cli_config, overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    config
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Show(args) => {
            let mut cli_overrides = overrides(cli.no_color, &args.source, &args.output);
            cli_overrides.output.show_help = args.show_help;
            cli_overrides.output.show_defaults = !args.hide_defaults;
            if let Some(default_app) = args.default_app {
                cli_overrides.selection.default_app = default_app;
            }
            let config = effective_config(cli.config.as_deref(), &cli_overrides);

            let options = ShowOptions {
                app: args.app,
                filter: args.filter,
            };
            cli::run_show(&config, &options).await
        }

        Commands::Apps(args) => {
            let cli_overrides = overrides(cli.no_color, &args.source, &args.output);
            let config = effective_config(cli.config.as_deref(), &cli_overrides);
            cli::run_apps(&config).await
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                match &loaded_from {
                    Some(path) => eprintln!("# Loaded from: {}", path.display()),
                    None => eprintln!("# No config file found; showing defaults"),
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths = [
                    std::env::current_dir().ok(),
                    dirs::config_dir().map(|p| p.join("hue-config")),
                    dirs::home_dir(),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init { preset, stdout } => {
                let content = match preset {
                    Some(name) => {
                        let Some(preset) = ConfigPreset::from_name(&name) else {
                            let known: Vec<&str> =
                                ConfigPreset::all().iter().map(ConfigPreset::name).collect();
                            return Err(HueConfigError::config(format!(
                                "unknown preset '{name}', valid options: {}",
                                known.join(", ")
                            ))
                            .into());
                        };
                        config::generate_example_config(&AppConfig::from_preset(preset))
                    }
                    None => config::generate_full_example_config(),
                };
                if stdout {
                    print!("{content}");
                    return Ok(exit_codes::SUCCESS);
                }

                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".hue-config.yaml");
                if target.exists() {
                    bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "hue-config", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}
