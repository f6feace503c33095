//! optdoc CLI
//!
//! Command-line interface for completing options documentation trees

mod commands;
mod output;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use optdoc_core::{Result, init_tracing};
use std::io;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(name = "optdoc")]
#[command(about = "optdoc: resolve option inheritance and emit interface declarations")]
#[command(version = optdoc_core::VERSION)]
#[command(
    long_about = "optdoc completes an options documentation tree.\n\
Every option may extend other options; their documentation and child options are merged in,\n\
and the result is emitted as interface declarations into a namespace tree.\n\
\n\
Examples:\n  \
optdoc complete                          # Complete tree.json into tree-complete.json\n  \
optdoc complete --strict                 # Fail when warnings were reported\n  \
optdoc resolve plotOptions.line.marker   # Print one resolved option\n  \
optdoc name plotOptions.series           # Print the interface name of an option\n  \
optdoc config init                       # Initialize configuration file"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        help = "Path to configuration file (.optdocrc.json/.optdocrc.toml/optdoc.yaml)"
    )]
    config: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Generate shell completion script
    #[arg(
        long,
        value_enum,
        help = "Generate completion script for specified shell"
    )]
    generate_completion: Option<Shell>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve every option and write the completed namespace tree
    Complete {
        /// Namespace tree to complete
        #[arg(long, help = "Namespace tree JSON (default: tree-namespace.json)")]
        namespace: Option<PathBuf>,

        /// Options tree to resolve
        #[arg(long, help = "Options tree JSON (default: tree.json)")]
        options: Option<PathBuf>,

        /// Output file
        #[arg(short, long, help = "Output file (default: tree-complete.json)")]
        output: Option<PathBuf>,

        /// Treat warnings as errors
        #[arg(long, help = "Exit with an error when warnings were reported")]
        strict: bool,

        /// Summary format
        #[arg(long, default_value = "human", help = "Summary format")]
        format: OutputFormat,
    },

    /// Resolve a single option and print it
    Resolve {
        /// Dotted option path
        #[arg(help = "Dotted option path, e.g. plotOptions.line.marker")]
        path: String,

        /// Options tree to resolve
        #[arg(long, help = "Options tree JSON (default: tree.json)")]
        options: Option<PathBuf>,
    },

    /// Print the interface name of an option
    Name {
        /// Dotted option path
        #[arg(help = "Dotted option path, e.g. plotOptions.series")]
        fullname: String,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version information
    Version {
        /// Show detailed version information
        #[arg(long, help = "Show detailed build information")]
        detailed: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Initialize a new configuration file
    Init {
        /// Configuration file format
        #[arg(long, default_value = "json", help = "Configuration file format")]
        format: ConfigFormat,

        /// Overwrite existing configuration file
        #[arg(long, help = "Overwrite existing configuration file")]
        force: bool,
    },

    /// Show current configuration
    Show,

    /// Print the JSON Schema of the configuration file
    Schema,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Human-readable output with colors
    Human,
    /// JSON format for programmatic consumption
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ConfigFormat {
    /// JSON configuration format
    Json,
    /// TOML configuration format
    Toml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.generate_completion {
        generate_completion_script(shell);
        return Ok(());
    }

    if !cli.no_color && std::env::var("NO_COLOR").is_err() {
        colored::control::set_override(true);
    } else {
        colored::control::set_override(false);
    }

    let log_level = match cli.verbose {
        0 => "optdoc=error",
        1 => "optdoc=warn",
        2 => "optdoc=info",
        3 => "optdoc=debug",
        _ => "optdoc=trace",
    };
    unsafe {
        std::env::set_var("RUST_LOG", log_level);
    }
    init_tracing();

    match run_command(cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("optdoc failed: {}", e);
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

fn generate_completion_script(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Complete {
            namespace,
            options,
            output,
            strict,
            format,
        }) => commands::complete_command(
            commands::CompleteArgs {
                namespace,
                options,
                output,
                strict,
                format,
            },
            cli.config,
        ),

        Some(Commands::Resolve { path, options }) => {
            commands::resolve_command(path, options, cli.config)
        }

        Some(Commands::Name { fullname }) => commands::name_command(&fullname),

        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { format, force } => commands::config_init_command(format, force),
            ConfigAction::Show => commands::config_show_command(cli.config),
            ConfigAction::Schema => commands::config_schema_command(),
        },

        Some(Commands::Version { detailed }) => {
            if detailed {
                println!("optdoc {}", optdoc_core::VERSION);
                println!("Build information:");
                println!("  Target: {}", std::env::consts::ARCH);
                println!("  OS: {}", std::env::consts::OS);
            } else {
                println!("{}", optdoc_core::VERSION);
            }
            Ok(())
        }

        None => {
            // No subcommand provided, show help
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
