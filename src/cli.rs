//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use spindlewrit::config::Config;
use spindlewrit::models::ProjectType;
use spindlewrit::output::OutputMode;

/// spindlewrit - Scaffold projects from templates and todo items
#[derive(Parser, Debug)]
#[command(
    name = "spindlewrit",
    version,
    about = "Scaffold projects from templates and todo items",
    long_about = "Create project directories from built-in template sets.\n\n\
                  Projects can be described by hand (create) or derived from a\n\
                  task in your todo tracker with AI-suggested structure (from-todo)."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new project from a template set
    Create {
        /// Name of the project (also the directory name)
        #[arg(short, long)]
        name: String,

        /// Short description of the project
        #[arg(short, long)]
        description: String,

        /// Type of project to create
        #[arg(short = 't', long = "type", default_value = "python")]
        project_type: ProjectType,

        /// Directory to create the project in (defaults to the current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Replace files that already exist at the target
        #[arg(long)]
        overwrite: bool,
    },

    /// Create a project from a todo item, with AI-suggested structure
    FromTodo {
        /// ID of the todo item to scaffold from
        #[arg(long)]
        todo_id: String,

        /// Directory to create the project in (defaults to the current directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Fallback project type when the AI endpoint is unavailable
        #[arg(short = 't', long = "type", default_value = "python")]
        project_type: ProjectType,

        /// Replace files that already exist at the target
        #[arg(long)]
        overwrite: bool,

        /// Use the built-in keyword suggester instead of the AI endpoint
        #[arg(long)]
        offline: bool,
    },

    /// List registered project types
    Types,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    // Read once at startup; commands never consult the environment themselves
    let config = Config::load();

    match cli.command {
        Some(Command::Create {
            name,
            description,
            project_type,
            path,
            overwrite,
        }) => commands::create(&name, &description, project_type, path, overwrite, output_mode),
        Some(Command::FromTodo {
            todo_id,
            output_dir,
            project_type,
            overwrite,
            offline,
        }) => commands::from_todo(
            &todo_id,
            output_dir,
            project_type,
            overwrite,
            offline,
            &config,
            output_mode,
        ),
        Some(Command::Types) => commands::types(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("spindlewrit v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("spindlewrit v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'spindlewrit --help' for usage");
                println!("Run 'spindlewrit create --help' to scaffold a project");
            }
            Ok(())
        },
    }
}
