use std::{
  fs,
  path::{Path, PathBuf},
};

use color_eyre::eyre::{self, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Commands};

// Serde default helpers. Functions allow defaults that can't be expressed
// as literals (PathBuf construction needs execution).
fn default_manifest() -> PathBuf {
  PathBuf::from("list.json")
}

fn default_output() -> PathBuf {
  PathBuf::from("index.html")
}

fn default_root_prefix() -> String {
  "html/".to_string()
}

fn default_suffix() -> String {
  ".html".to_string()
}

fn default_title() -> String {
  "Documentos".to_string()
}

fn default_footer_text() -> String {
  "Generated with menugen".to_string()
}

fn default_container_class() -> String {
  "html-container".to_string()
}

fn default_link_class() -> String {
  "nav-btn".to_string()
}

const fn default_true() -> bool {
  true
}

/// Default configuration file templates written by `menugen init`.
const DEFAULT_TOML_CONFIG: &str = r##"# menugen configuration

# Path to the JSON manifest listing document records.
manifest = "list.json"

# Output file for the generated page.
output = "index.html"

# Every manifest path must start with this prefix and end with this
# suffix; both are stripped before the hierarchy is inferred.
root_prefix = "html/"
suffix = ".html"

# Page chrome.
title = "Documentos"
footer_text = "Generated with menugen"

# CSS classes used in the generated markup.
container_class = "html-container"
link_class = "nav-btn"

# Natural-sort records before grouping. Turn off to keep manifest order.
sort = true

# Emit only the container fragment instead of a full page.
fragment = false
"##;

const DEFAULT_JSON_CONFIG: &str = r#"{
  "manifest": "list.json",
  "output": "index.html",
  "root_prefix": "html/",
  "suffix": ".html",
  "title": "Documentos",
  "footer_text": "Generated with menugen",
  "container_class": "html-container",
  "link_class": "nav-btn",
  "sort": true,
  "fragment": false
}
"#;

/// Configuration options for menugen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Path to the JSON manifest listing document records
  pub manifest: PathBuf,

  /// Output file for the generated page
  pub output: PathBuf,

  /// Root prefix every manifest path must carry
  pub root_prefix: String,

  /// Suffix every manifest path must carry
  pub suffix: String,

  /// Title for the generated page
  pub title: String,

  /// Text to be inserted in the footer
  pub footer_text: String,

  /// CSS class of the container element wrapping the menu
  pub container_class: String,

  /// CSS class applied to every link
  pub link_class: String,

  /// Whether to natural-sort records before grouping
  pub sort: bool,

  /// Whether to emit only the container fragment instead of a full page
  pub fragment: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      manifest:        default_manifest(),
      output:          default_output(),
      root_prefix:     default_root_prefix(),
      suffix:          default_suffix(),
      title:           default_title(),
      footer_text:     default_footer_text(),
      container_class: default_container_class(),
      link_class:      default_link_class(),
      sort:            default_true(),
      fragment:        false,
    }
  }
}

impl Config {
  /// Create a new configuration from a file.
  /// Only TOML and JSON are supported for the time being.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).wrap_err_with(|| {
      format!("Failed to read config file: {}", path.display())
    })?;

    path.extension().map_or_else(
      || {
        Err(eyre::eyre!(
          "Config file has no extension: {}",
          path.display()
        ))
      },
      |ext| {
        match ext.to_str().unwrap_or("").to_lowercase().as_str() {
          "json" => {
            serde_json::from_str(&content).wrap_err_with(|| {
              format!("Failed to parse JSON config from {}", path.display())
            })
          },
          "toml" => {
            toml::from_str(&content).wrap_err_with(|| {
              format!("Failed to parse TOML config from {}", path.display())
            })
          },
          _ => {
            Err(eyre::eyre!(
              "Unsupported config file format: {}",
              path.display()
            ))
          },
        }
      },
    )
  }

  /// Load config from file and CLI arguments
  pub fn load(cli: &Cli) -> Result<Self> {
    let mut config = if let Some(config_path) = &cli.config_file {
      // Config file explicitly specified via CLI
      Self::from_file(config_path).wrap_err_with(|| {
        format!("Failed to load config from {}", config_path.display())
      })?
    } else if let Some(discovered_config) = Self::find_config_file() {
      // Found a config file in a standard location
      log::info!(
        "Using discovered config file: {}",
        discovered_config.display()
      );
      Self::from_file(&discovered_config).wrap_err_with(|| {
        format!(
          "Failed to load discovered config from {}",
          discovered_config.display()
        )
      })?
    } else {
      Self::default()
    };

    // Merge CLI arguments
    config.merge_with_cli(cli);

    Ok(config)
  }

  /// Merge CLI arguments into this config, prioritizing CLI values when
  /// present
  pub fn merge_with_cli(&mut self, cli: &Cli) {
    if let Some(Commands::Html {
      manifest,
      output,
      title,
      footer,
      fragment,
      no_sort,
    }) = &cli.command
    {
      if let Some(manifest) = manifest {
        self.manifest.clone_from(manifest);
      }

      if let Some(output) = output {
        self.output.clone_from(output);
      }

      if let Some(title) = title {
        self.title.clone_from(title);
      }

      if let Some(footer) = footer {
        self.footer_text.clone_from(footer);
      }

      if *fragment {
        self.fragment = true;
      }

      if *no_sort {
        self.sort = false;
      }
    }
  }

  /// Search for config files in common locations
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let config_filenames = [
      "menugen.toml",
      "menugen.json",
      ".menugen.toml",
      ".menugen.json",
      ".config/menugen.toml",
      ".config/menugen.json",
    ];

    let current_dir = std::env::current_dir().ok()?;

    for filename in &config_filenames {
      let config_path = current_dir.join(filename);
      if config_path.exists() {
        return Some(config_path);
      }
    }

    None
  }

  /// Generate a default configuration file with commented explanations
  pub fn generate_default_config(format: &str, path: &Path) -> Result<()> {
    let config_content = match format {
      "toml" => DEFAULT_TOML_CONFIG,
      "json" => DEFAULT_JSON_CONFIG,
      _ => {
        return Err(eyre::eyre!("Unsupported config format: {format}"));
      },
    };

    fs::write(path, config_content).wrap_err_with(|| {
      format!("Failed to write default config to {}", path.display())
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}
