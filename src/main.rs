//! edinet-manifest CLI - parse and inspect EDINET filing manifests

use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use colored::*;
use std::path::PathBuf;

use edinet_manifest::Manifest;

/// Parser for EDINET disclosure filing manifest files
#[derive(ClapParser)]
#[command(name = "edinet-manifest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a manifest file and show its contents
    Parse {
        /// Input file
        input: PathBuf,

        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Check that manifest files parse cleanly
    Check {
        /// Input files
        inputs: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { input, json } => {
            let manifest = load(&input)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            } else {
                println!("{} {}", "✓".green().bold(), input.display());
                for title in &manifest.toc_composition.titles {
                    println!("  Title [{}]: {}", title.lang, title.value);
                }
                println!("  Root item: {}", manifest.toc_composition.item.r#ref);
                println!("  Instances: {}", manifest.list.len());
                for instance in &manifest.list {
                    println!(
                        "    {} ({}, {} inline XBRL files)",
                        instance.id,
                        instance.r#type,
                        instance.inline_xbrl_files.len()
                    );
                }
            }
        }

        Commands::Check { inputs } => {
            let mut failed = 0;
            for input in &inputs {
                match load(input) {
                    Ok(_) => println!("{} {}", "✓".green().bold(), input.display()),
                    Err(e) => {
                        failed += 1;
                        println!("{} {}: {:#}", "✗".red().bold(), input.display(), e);
                    }
                }
            }
            if failed > 0 {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn load(input: &PathBuf) -> Result<Manifest> {
    let xml = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    Manifest::parse_str(&xml).with_context(|| format!("Failed to parse {}", input.display()))
}
