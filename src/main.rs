//! CLI entry point for keyboard-manager
//!
//! Provides a command-line interface for normalising key combos,
//! inspecting event records, and checking keymap files.

use clap::{Parser, Subcommand};
use colored::*;
use keyboard_manager::core::{combo_from_event, is_input_event, validated_combo, KeyEvent};
use keyboard_manager::keymap::{load_keymap, DEFAULT_KEYMAP_PATH};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "keyboard-manager")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the canonical combo for a list of key names
    Combo {
        /// Key names (e.g., cmd shift p)
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Print the combo for a JSON event record
    Event {
        /// Event record, e.g. '{"key":"a","metaKey":true}'
        json: String,
    },

    /// Check a keymap for conflicting bindings
    Check {
        /// Path to keymap file
        #[arg(short, long, default_value = DEFAULT_KEYMAP_PATH)]
        keymap: PathBuf,
    },

    /// List all bindings in a keymap
    List {
        /// Path to keymap file
        #[arg(short, long, default_value = DEFAULT_KEYMAP_PATH)]
        keymap: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Combo { keys } => print_combo(&keys)?,
        Commands::Event { json } => print_event(&json)?,
        Commands::Check { keymap } => check_conflicts(&keymap)?,
        Commands::List { keymap } => list_bindings(&keymap)?,
    }

    Ok(())
}

/// Validate key names and print their combo
fn print_combo(keys: &[String]) -> anyhow::Result<()> {
    let combo = validated_combo(keys)?;
    println!("{}", combo);
    Ok(())
}

/// Deserialize an event record and print its combo
fn print_event(json: &str) -> anyhow::Result<()> {
    let event: KeyEvent = serde_json::from_str(json)
        .map_err(|e| anyhow::anyhow!("Invalid event record: {}", e))?;

    let combo = combo_from_event(&event);
    println!("{} {}", "combo:".bold(), format!("{:?}", combo).cyan());

    if is_input_event(&event) {
        println!("{}", "⚠ Originates from an input control; guarded shortcuts will skip it".yellow());
    }

    Ok(())
}

/// Check a keymap for keybinding conflicts
fn check_conflicts(path: &Path) -> anyhow::Result<()> {
    println!("{} Loading keymap: {}", "→".cyan(), path.display());

    let keymap = load_keymap(path)?;

    println!("{} Found {} bindings\n", "✓".green(), keymap.len());

    let conflicts = keymap.conflicts();

    if conflicts.is_empty() {
        println!("{} {}", "✓".green().bold(), "No conflicts detected!".bold());
    } else {
        println!(
            "{} Found {} conflict{}:\n",
            "✗".red().bold(),
            conflicts.len(),
            if conflicts.len() == 1 { "" } else { "s" }
        );

        for (i, conflict) in conflicts.iter().enumerate() {
            println!(
                "{} {}",
                format!("Conflict {}", i + 1).yellow().bold(),
                format!("{:?}", conflict.combo).cyan()
            );

            for binding in &conflict.conflicting_bindings {
                println!(
                    "  {} {}",
                    format!("line {}:", binding.line).dimmed(),
                    binding
                );
            }
            println!();
        }

        println!("{}", "⚠ Only one of each conflicting binding can fire!".yellow());
        std::process::exit(1);
    }

    Ok(())
}

/// List every binding with its canonical combo
fn list_bindings(path: &Path) -> anyhow::Result<()> {
    let keymap = load_keymap(path)?;

    let source = keymap.path().unwrap_or(path);
    println!("{}", format!("Bindings from: {}\n", source.display()).bold());

    for (combo, binding) in keymap.entries() {
        println!(
            "{} → {}",
            format!("{:?}", combo).cyan().bold(),
            binding.action.green()
        );
    }

    println!("\n{} Total: {} bindings", "✓".green(), keymap.len());

    Ok(())
}
