//! CLI entry point for key-combo-matcher
//!
//! Provides a command-line interface for trying combos against simulated
//! key presses, inspecting key aliases, and checking keymap files.

use clap::{Args, Parser, Subcommand};
use colored::*;
use key_combo_matcher::config::load_config;
use key_combo_matcher::core::normalizer::{aliases_of, canonical_of, canonicalize};
use key_combo_matcher::core::validator::validate_request;
use key_combo_matcher::{ComboMatcher, InputEvent, KeyCombo};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "key-combo-matcher")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// A simulated key press
#[derive(Args)]
struct EventArgs {
    /// Key value as a platform reports it (e.g. "k", "Escape", "ArrowUp")
    #[arg(short, long)]
    key: String,

    /// Control held
    #[arg(long)]
    ctrl: bool,

    /// Shift held
    #[arg(long)]
    shift: bool,

    /// Alt held
    #[arg(long)]
    alt: bool,

    /// Meta/Command/Super held
    #[arg(long)]
    meta: bool,
}

impl EventArgs {
    fn to_event(&self) -> InputEvent {
        InputEvent {
            key: self.key.clone(),
            ctrl_key: self.ctrl,
            shift_key: self.shift,
            alt_key: self.alt,
            meta_key: self.meta,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a key press satisfies a combo
    Check {
        /// Combo string (e.g. "ctrl+shift+k")
        combo: String,

        #[command(flatten)]
        event: EventArgs,

        /// Token delimiter
        #[arg(short, long, default_value_t = '+')]
        delimiter: char,

        /// Reject combos that name several keys or can never fire
        #[arg(long)]
        strict: bool,
    },

    /// Show the canonical form and aliases of a key
    Aliases {
        /// Key name (e.g. "ArrowUp", "esc", " ")
        key: String,
    },

    /// List the bindings of a keymap fired by a key press
    Dispatch {
        /// Path to keymap JSON file
        #[arg(short, long, default_value = "~/.config/key-combo-matcher/keymap.json")]
        config: PathBuf,

        #[command(flatten)]
        event: EventArgs,
    },

    /// Check a keymap for conflicting bindings
    Conflicts {
        /// Path to keymap JSON file
        #[arg(short, long, default_value = "~/.config/key-combo-matcher/keymap.json")]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check {
            combo,
            event,
            delimiter,
            strict,
        } => check_combo(&combo, &event.to_event(), delimiter, strict)?,
        Commands::Aliases { key } => show_aliases(&key),
        Commands::Dispatch { config, event } => dispatch_event(&config, &event.to_event())?,
        Commands::Conflicts { config } => check_conflicts(&config)?,
    }

    Ok(())
}

/// Log to stderr; RUST_LOG overrides the verbosity flag
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Expand tilde and turn the path back into a PathBuf
fn expand_path(config_path: &PathBuf) -> anyhow::Result<PathBuf> {
    let expanded = shellexpand::tilde(
        config_path
            .to_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid path encoding"))?,
    );
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Check one combo against one key press
fn check_combo(
    combo: &str,
    event: &InputEvent,
    delimiter: char,
    strict: bool,
) -> anyhow::Result<()> {
    let matcher = ComboMatcher::new().with_delimiter(delimiter).strict(strict);
    let request = matcher.parse(combo);

    let signature = KeyCombo::from_request(&request)
        .map_or_else(|| "never fires".to_string(), |combo| combo.to_string());
    println!("{} Combo: {} ({})", "→".cyan(), request, signature);
    println!("{} Key: {:?} → {:?}", "→".cyan(), event.key, canonicalize(&event.key));

    if strict {
        if let Err(e) = validate_request(&request) {
            println!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }

    if matcher.matches_request(&request, event) {
        println!("{} {}", "✓".green().bold(), "Match".bold());
    } else {
        println!("{} {}", "✗".red().bold(), "No match".bold());
        std::process::exit(1);
    }

    Ok(())
}

/// Print the canonical form of a key and every name it answers to
fn show_aliases(key: &str) {
    let normalized = canonicalize(key);
    let canonical = canonical_of(&normalized);

    println!("{} {:?}", "Canonical:".bold(), canonical);
    for alias in aliases_of(canonical) {
        println!("  {}", format!("{:?}", alias).cyan());
    }
}

/// List the actions a key press fires in a keymap
fn dispatch_event(config_path: &PathBuf, event: &InputEvent) -> anyhow::Result<()> {
    let path = expand_path(config_path)?;
    let keymap = load_config(&path)?;

    println!(
        "{} Loaded {} bindings from {}",
        "→".cyan(),
        keymap.len(),
        path.display()
    );

    let fired = keymap.dispatch(event);
    if fired.is_empty() {
        println!("{} {}", "✗".red().bold(), "No binding fired".bold());
        std::process::exit(1);
    }

    for binding in fired {
        println!(
            "{} {} → {}",
            "✓".green(),
            binding.request.to_string().cyan().bold(),
            binding.action.green()
        );
    }

    Ok(())
}

/// Check a keymap for keybinding conflicts
fn check_conflicts(config_path: &PathBuf) -> anyhow::Result<()> {
    let path = expand_path(config_path)?;

    println!("{} Parsing keymap: {}", "→".cyan(), path.display());

    let keymap = load_config(&path)?;

    println!("{} Found {} bindings\n", "✓".green(), keymap.len());

    for binding in keymap.never_firing() {
        println!(
            "{} {} → {} {}",
            "⚠".yellow(),
            binding.request.to_string().magenta(),
            binding.action,
            "(never fires)".dimmed()
        );
    }

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
                conflict.key_combo.to_string().cyan()
            );

            for (idx, binding) in conflict.conflicting_bindings.iter().enumerate() {
                println!(
                    "  {} {} → {}",
                    format!("{}.", idx + 1).dimmed(),
                    binding.request.to_string().magenta(),
                    binding.action,
                );
            }
            println!();
        }

        println!("{}", "⚠ These bindings fire on the same key presses!".yellow());
        std::process::exit(1);
    }

    Ok(())
}
