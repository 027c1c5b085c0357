//! fluentgen binary entry point

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use fluentgen::cli::commands::check::handle_check;
use fluentgen::cli::commands::generate::handle_generate;
use fluentgen::cli::output::format_generate_summary;

#[derive(Parser)]
#[command(
    name = "fluentgen",
    version,
    about = "Generate FluentValidation (C#) and fluentvalidation-ts (TypeScript) validators from rule definitions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate validator sources for every definition in a directory
    Generate {
        /// Directory containing definition files (.json, .yaml, .yml)
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to write generated validator sources to
        #[arg(short, long)]
        output: PathBuf,

        /// Override the namespace declared in every definition
        #[arg(short, long)]
        namespace: Option<String>,
    },

    /// Check definitions without writing any output
    Check {
        /// Definition file or directory to check
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            namespace,
        } => {
            let summary = handle_generate(&input, &output, namespace.as_deref())?;
            print!("{}", format_generate_summary(&summary));
        }
        Commands::Check { input } => {
            let checked = handle_check(&input)?;
            println!("\n✅ {} definition(s) valid", checked);
        }
    }

    Ok(())
}
