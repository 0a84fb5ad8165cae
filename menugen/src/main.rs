use std::{fs, path::Path};

use color_eyre::eyre::{Context, Result, bail};
use log::{LevelFilter, error, info};
use menugen_nav::{MenuOptions, build_menu, manifest};

mod cli;
mod config;
mod render;

use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  // Handle subcommands
  if let Some(command) = &cli.command {
    match command {
      Commands::Init {
        output,
        format,
        force,
      } => {
        // Check if file already exists and that we're not forcing overwrite
        if output.exists() && !force {
          bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output.display()
          );
        }

        // Create parent directories if needed
        if let Some(parent) = output.parent() {
          if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).wrap_err_with(|| {
              format!("Failed to create directory: {}", parent.display())
            })?;
            info!("Created directory: {}", parent.display());
          }
        }

        // Generate the config file
        Config::generate_default_config(format, output).wrap_err_with(
          || {
            format!(
              "Failed to generate configuration file: {}",
              output.display()
            )
          },
        )?;

        info!(
          "Configuration file created successfully. Edit it to customize \
           menu generation."
        );
        return Ok(());
      },

      Commands::Scan {
        root,
        output,
        suffix,
      } => {
        return scan_documents(root, output, suffix);
      },

      // The Html command is handled in Config::load and merge_with_cli
      Commands::Html { .. } => {},
    }
  }

  // Create configuration from CLI and/or config file
  let config = Config::load(&cli)?;

  // Run the main menu generation process
  generate_menu(&config)
}

/// Main menu generation process
fn generate_menu(config: &Config) -> Result<()> {
  info!(
    "Generating navigation menu from {}",
    config.manifest.display()
  );

  // A fetch or parse failure aborts the whole render: the page is still
  // written, with an empty container, and the reason is logged. Nothing
  // partial is ever shown.
  let records = match manifest::load_manifest(&config.manifest) {
    Ok(records) => records,
    Err(e) => {
      error!("{e}");
      Vec::new()
    },
  };

  let options = MenuOptions {
    root_prefix: config.root_prefix.clone(),
    suffix:      config.suffix.clone(),
    sort:        config.sort,
  };
  let instructions = build_menu(&records, &options);
  info!("Emitting {} render instructions", instructions.len());

  let fragment = render::render_fragment(&instructions, config);
  let html = if config.fragment {
    fragment
  } else {
    render::render_page(&fragment, config)?
  };

  if let Some(parent) = config.output.parent() {
    if !parent.as_os_str().is_empty() {
      fs::create_dir_all(parent).wrap_err_with(|| {
        format!("Failed to create directory: {}", parent.display())
      })?;
    }
  }
  fs::write(&config.output, html).wrap_err_with(|| {
    format!("Failed to write output to {}", config.output.display())
  })?;

  info!("Navigation menu written to {}", config.output.display());
  Ok(())
}

/// Walk a document tree and write the resulting manifest
fn scan_documents(root: &Path, output: &Path, suffix: &str) -> Result<()> {
  // Records carry the tree's own name (not the full `--root` argument) as
  // their prefix so the generated manifest round-trips through
  // `menugen html` regardless of where the tree was scanned from.
  let prefix = manifest::derive_prefix(root);

  let records = manifest::scan_directory(root, &prefix, suffix)
    .wrap_err_with(|| format!("Failed to scan {}", root.display()))?;
  info!("Found {} documents under {}", records.len(), root.display());

  let json = serde_json::to_string_pretty(&records)
    .wrap_err("Failed to serialize manifest")?;
  fs::write(output, json).wrap_err_with(|| {
    format!("Failed to write manifest to {}", output.display())
  })?;

  info!("Manifest written to {}", output.display());
  Ok(())
}
