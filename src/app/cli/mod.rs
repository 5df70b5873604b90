//! Command-line surface.

pub mod collect;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::app::commands::generate::GenerateOutcome;
use crate::domain::{AppError, Variant};
use crate::services::exporter;
use crate::{GenerateOptions, generate};

#[derive(Parser)]
#[command(name = "pitchkit")]
#[command(version)]
#[command(about = "Generate an LLM-backed sales toolkit from a business profile", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sales toolkit and print or export the document
    #[clap(visible_alias = "g")]
    Generate {
        /// Business profile TOML file (collected interactively when omitted)
        #[arg(short, long)]
        profile: Option<PathBuf>,
        /// Buyer persona YAML file
        #[arg(long)]
        personas: Option<PathBuf>,
        /// Pipeline variant
        #[arg(long, value_enum, default_value = "discrete")]
        variant: VariantArg,
        /// Write the exported document to this path
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Print assembled prompts without calling the backend
        #[arg(long)]
        dry_run: bool,
        /// Use the offline mock backend instead of the hosted one
        #[arg(long)]
        mock: bool,
    },
    /// Collect a business profile interactively and save it for reuse
    #[clap(visible_alias = "p")]
    Profile {
        /// Destination file
        #[arg(short, long, default_value = "profile.toml")]
        out: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    /// Discrete elevator-pitch, call-script, and cold-email prompts
    Discrete,
    /// One combined walkthrough document
    Walkthrough,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Discrete => Variant::Discrete,
            VariantArg::Walkthrough => Variant::Walkthrough,
        }
    }
}

/// Parse arguments and dispatch.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { profile, personas, variant, out, dry_run, mock } => {
            let options = GenerateOptions {
                profile,
                personas,
                variant: variant.into(),
                dry_run,
                mock,
            };
            run_generate(options, out)
        }
        Commands::Profile { out } => run_profile(out),
    }
}

fn run_generate(options: GenerateOptions, out: Option<PathBuf>) -> Result<(), AppError> {
    match generate(options)? {
        None => {
            println!("Cancelled.");
            Ok(())
        }
        Some(GenerateOutcome::DryRun { prompts, warnings }) => {
            for warning in &warnings {
                eprintln!("⚠️  {}", warning);
            }
            for (index, prompt) in prompts.iter().enumerate() {
                println!("=== Prompt {} ({}) ===", index + 1, prompt.kind);
                if let Some(system) = &prompt.system {
                    println!("--- system ---");
                    println!("{}", system);
                }
                println!("--- user ---");
                println!("{}", prompt.user);
                println!();
            }
            Ok(())
        }
        Some(GenerateOutcome::Generated { toolkit, document }) => {
            // Print before exporting so the text survives an export failure.
            println!("{}", document);
            for warning in &toolkit.warnings {
                eprintln!("⚠️  {}", warning);
            }
            if let Some(path) = out {
                exporter::export_to_file(&document, &path)?;
                println!("✅ Exported sales toolkit to {}", path.display());
            }
            Ok(())
        }
    }
}

fn run_profile(out: PathBuf) -> Result<(), AppError> {
    match collect::collect()? {
        None => {
            println!("Cancelled.");
            Ok(())
        }
        Some(profile) => {
            profile.validate()?;
            fs::write(&out, profile.to_toml_string()?)?;
            println!("✅ Saved business profile to {}", out.display());
            Ok(())
        }
    }
}
