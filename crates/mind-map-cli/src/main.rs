//! Mind Map CLI - turn free text into a graph of its key phrases.
//!
//! Multi-word noun phrases are extracted from the input, consecutive words
//! inside each phrase are linked, and the resulting graph is laid out and
//! shown in a window or exported to SVG/JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::keywords::KeywordsOptions;
use commands::render::{OutputFormat, RenderOptions};
use commands::{config as config_cmd, keywords, render};
use config::Config;

/// Mind Map CLI - Visualise the key phrases of a text.
///
/// Run `mindmap` with no arguments in a terminal to render the built-in
/// demonstration text.
#[derive(Parser, Debug)]
#[command(
    name = "mindmap",
    author,
    version,
    about = "Mind Map: extract noun phrases and draw them as a word graph",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract, build, lay out and draw a mind map (default command).
    ///
    /// Input is read from TEXT, then --file, then piped stdin (even when
    /// empty). Run from a terminal with none of these, or with --demo, the
    /// demonstration paragraph is used.
    Render {
        /// Text to analyse.
        text: Option<String>,

        /// Read the text from a file.
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Use the demonstration paragraph as input.
        #[arg(long, conflicts_with_all = ["text", "file"])]
        demo: bool,

        /// Title drawn above the graph.
        #[arg(short, long)]
        title: Option<String>,

        /// Write the mind map to a file (relative paths use the configured output dir).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format: svg or json (default: from the file extension).
        #[arg(long)]
        format: Option<String>,

        /// Never open a window.
        #[arg(long)]
        no_display: bool,

        /// Open a window even when writing --output.
        #[arg(long, conflicts_with = "no_display")]
        display: bool,

        /// Layout seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Maximum layout iterations.
        #[arg(long)]
        iterations: Option<u32>,

        /// Language model name.
        #[arg(long)]
        model: Option<String>,

        /// Extra lexicon file of `word TAG` lines.
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },

    /// Print the extracted phrases without drawing anything.
    Keywords {
        /// Text to analyse.
        text: Option<String>,

        /// Read the text from a file.
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Use the demonstration paragraph as input.
        #[arg(long, conflicts_with_all = ["text", "file"])]
        demo: bool,

        /// Print a JSON array instead of one phrase per line.
        #[arg(long)]
        json: bool,

        /// Language model name.
        #[arg(long)]
        model: Option<String>,

        /// Extra lexicon file of `word TAG` lines.
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key.
        key: String,
        /// Configuration value.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show path to config file.
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity; RUST_LOG wins when set
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    let subscriber = tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);
    match EnvFilter::try_from_default_env() {
        Ok(filter) => subscriber.with_env_filter(filter).init(),
        Err(_) => subscriber.with_max_level(level).init(),
    }

    // Load configuration
    let config = Config::load()?;

    // Default to render if no command given
    let command = cli.command.unwrap_or(Commands::Render {
        text: None,
        file: None,
        demo: false,
        title: None,
        output: None,
        format: None,
        no_display: false,
        display: false,
        seed: None,
        iterations: None,
        model: None,
        lexicon: None,
    });

    match command {
        Commands::Render {
            text,
            file,
            demo,
            title,
            output,
            format,
            no_display,
            display,
            seed,
            iterations,
            model,
            lexicon,
        } => {
            let format: Option<OutputFormat> = format.map(|f| f.parse()).transpose()?;
            render::execute(
                &config,
                RenderOptions {
                    text,
                    file,
                    demo,
                    title,
                    output,
                    format,
                    no_display,
                    display,
                    seed,
                    iterations,
                    model,
                    lexicon,
                },
            )?;
        }

        Commands::Keywords {
            text,
            file,
            demo,
            json,
            model,
            lexicon,
        } => {
            keywords::execute(
                &config,
                KeywordsOptions {
                    text,
                    file,
                    demo,
                    json,
                    model,
                    lexicon,
                },
            )?;
        }

        Commands::Config(config_cmd_inner) => {
            let mut config = config;
            match config_cmd_inner {
                ConfigCommands::Show => {
                    config_cmd::show(&config)?;
                }
                ConfigCommands::Set { key, value } => {
                    config_cmd::set(&mut config, &key, &value)?;
                }
                ConfigCommands::Get { key } => {
                    config_cmd::get(&config, &key)?;
                }
                ConfigCommands::Reset => {
                    config_cmd::reset()?;
                }
                ConfigCommands::Path => {
                    if let Some(path) = Config::config_file_path() {
                        println!("{}", path.display());
                    } else {
                        println!("(no config file path available)");
                    }
                }
            }
        }
    }

    Ok(())
}
