use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for menugen
#[derive(Parser, Debug)]
#[command(version, about = "menugen: static navigation menu generator")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Option<Commands>,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to configuration file (TOML or JSON)
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,
}

/// All supported subcommands for the menugen CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new menugen configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "menugen.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Read the manifest and generate the navigation page.
  Html {
    /// Path to the JSON manifest listing document records.
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Output file for the generated page.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Title of the generated page.
    #[arg(short = 'T', long)]
    title: Option<String>,

    /// Footer text for the generated page.
    #[arg(short = 'f', long)]
    footer: Option<String>,

    /// Emit only the container fragment instead of a full page.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    fragment: bool,

    /// Keep manifest order instead of natural-sorting records.
    #[arg(long = "no-sort", action = clap::ArgAction::SetTrue)]
    no_sort: bool,
  },

  /// Build a manifest by scanning a directory tree of documents.
  Scan {
    /// Directory to walk for documents.
    #[arg(short, long, default_value = "html")]
    root: PathBuf,

    /// Manifest file to write.
    #[arg(short, long, default_value = "list.json")]
    output: PathBuf,

    /// File suffix identifying documents.
    #[arg(short, long, default_value = ".html")]
    suffix: String,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
