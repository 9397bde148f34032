use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hrdesk::ConfigLoader;
use hrdesk::cli::CommandContext;
use hrdesk::cli::commands;

#[derive(Parser)]
#[command(name = "hrdesk")]
#[command(version, about = "Ask questions about company HR policies")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, help = "Additional config file (highest file precedence)")]
    config: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat,

    /// Ask a single question
    Ask {
        #[arg(help = "Question to ask", required = true, num_args = 1..)]
        question: Vec<String>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Show the policy documents answers are drawn from
    Knowledge {
        #[arg(long, help = "Print the full text sent with every question")]
        full: bool,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(short = 'g', long, help = "Show global config file only")]
        global: bool,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mhrdesk encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Chat output shares the terminal with logs; keep it quiet unless asked
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else if matches!(cli.command, Commands::Chat | Commands::Ask { .. }) {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Chat => {
            let ctx = CommandContext::load(config_path)?;
            let rt = Runtime::new()?;
            rt.block_on(commands::chat::run(ctx))?;
        }
        Commands::Ask { question, format } => {
            let ctx = CommandContext::load(config_path)?;
            let rt = Runtime::new()?;
            rt.block_on(commands::ask::run(ctx, &question.join(" "), &format))?;
        }
        Commands::Knowledge { full, format } => {
            let config = ConfigLoader::load_with(config_path)?;
            commands::knowledge::run(&config, full, &format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { global, format } => {
                let config = ConfigLoader::load_with(config_path)?;
                commands::config::show(&config, global, &format)?;
            }
            ConfigAction::Path => {
                commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    commands::config::init_global(force)?;
                } else {
                    commands::config::init_project(force)?;
                }
            }
        },
    }

    Ok(())
}
