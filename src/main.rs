use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use version_scout::config;
use version_scout::domain::SemanticVersion;
use version_scout::fs::LocalFileSystem;
use version_scout::sources::VersionFileFinder;
use version_scout::ui;

#[derive(Parser)]
#[command(
    name = "version-scout",
    about = "Locate and inspect a package's semantic version declaration"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Locate the version declaration under a package root
    Find {
        #[arg(default_value = ".", help = "Package root to search")]
        path: PathBuf,
    },
    /// Validate a version string against the SemVer 2.0.0 grammar
    Validate {
        #[arg(help = "Version string to validate")]
        version: String,
    },
    /// Compare two versions by SemVer precedence
    Compare {
        left: String,
        right: String,
    },
    /// Print the next version for the given bump level
    Next {
        #[arg(value_enum)]
        level: BumpLevel,

        #[arg(default_value = ".", help = "Package root to search")]
        path: PathBuf,

        #[arg(long, help = "Bump this version instead of resolving one from PATH")]
        version: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BumpLevel {
    Major,
    Minor,
    Patch,
    Pre,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };
    ui::apply_color_choice(&config.output);

    match args.command {
        Command::Find { path } => {
            let resolved = resolve_version(&path);
            ui::display_resolved(&resolved, config.output.show_source);
        }
        Command::Validate { version } => match SemanticVersion::parse(&version) {
            Ok(parsed) => ui::display_success(&format!("{} is a valid semantic version", parsed)),
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        },
        Command::Compare { left, right } => {
            let left = SemanticVersion::parse(&left)?;
            let right = SemanticVersion::parse(&right)?;
            ui::display_comparison(&left, left.cmp(&right), &right);
        }
        Command::Next {
            level,
            path,
            version,
        } => {
            let current = match version {
                Some(v) => SemanticVersion::parse(&v)?,
                None => resolve_version(&path).version,
            };
            let next = match level {
                BumpLevel::Major => current.next_major(),
                BumpLevel::Minor => current.next_minor(),
                BumpLevel::Patch => current.next_patch(),
                BumpLevel::Pre => current.next_pre_release()?,
            };
            println!("{}", next);
        }
    }

    Ok(())
}

/// Resolve the version under `path`, exiting with an error when no source
/// matches. Absence is a normal outcome of the core; the CLI is the layer
/// that turns it into a non-zero exit.
fn resolve_version(path: &Path) -> version_scout::sources::ResolvedVersion {
    let fs = LocalFileSystem;
    let finder = VersionFileFinder::new();
    match finder.find(&fs, path) {
        Some(resolved) => resolved,
        None => {
            ui::display_error(&format!(
                "No version declaration found under '{}'",
                path.display()
            ));
            std::process::exit(1);
        }
    }
}
