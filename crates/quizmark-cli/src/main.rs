//! quizmark CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

use commands::TableArgs;

#[derive(Parser)]
#[command(name = "quizmark", version, about = "MCQ quiz scoring and report toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the per-student score report
    Score {
        #[command(flatten)]
        tables: TableArgs,

        /// Scoring rule: negative-marking, no-penalty
        #[arg(long, default_value = "negative-marking")]
        rule: String,

        /// Output file
        #[arg(long, default_value = "report.csv")]
        output: PathBuf,
    },

    /// Export the per-question difficulty analysis
    Difficulty {
        #[command(flatten)]
        tables: TableArgs,

        /// Output file
        #[arg(long, default_value = "difficulty.csv")]
        output: PathBuf,
    },

    /// Export the detailed per-(student, question) report
    Detailed {
        #[command(flatten)]
        tables: TableArgs,

        /// Scoring rule: negative-marking, no-penalty
        #[arg(long, default_value = "negative-marking")]
        rule: String,

        /// Output file
        #[arg(long, default_value = "detailed_report.csv")]
        output: PathBuf,
    },

    /// Show the question catalog
    Questions {
        #[command(flatten)]
        tables: TableArgs,
    },

    /// Show the answer key
    Answers {
        #[command(flatten)]
        tables: TableArgs,
    },

    /// Export every report in one pass
    Export {
        #[command(flatten)]
        tables: TableArgs,

        /// Scoring rule: negative-marking, no-penalty
        #[arg(long, default_value = "negative-marking")]
        rule: String,

        /// Output directory
        #[arg(long, default_value = "./quizmark-results")]
        output: PathBuf,

        /// Output format: csv, json, all
        #[arg(long, default_value = "csv")]
        format: String,
    },

    /// Check the loaded tables for cross-table inconsistencies
    Validate {
        #[command(flatten)]
        tables: TableArgs,
    },

    /// Interactive menu session
    Shell {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and sample data files
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizmark=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            tables,
            rule,
            output,
        } => commands::score::execute(tables, rule, output),
        Commands::Difficulty { tables, output } => commands::difficulty::execute(tables, output),
        Commands::Detailed {
            tables,
            rule,
            output,
        } => commands::detailed::execute(tables, rule, output),
        Commands::Questions { tables } => commands::questions::execute(tables),
        Commands::Answers { tables } => commands::answers::execute(tables),
        Commands::Export {
            tables,
            rule,
            output,
            format,
        } => commands::export::execute(tables, rule, output, format),
        Commands::Validate { tables } => commands::validate::execute(tables),
        Commands::Shell { config } => commands::shell::execute(config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
