//! Command-line interface implementation for embedsmith.
//! Provides argument parsing and help text formatting using clap.

use crate::config::{load_config, ConfigOverrides, ProjectConfig};
use crate::constants::{DEFAULT_PROJECT_PATH, LICENSES, MCU_PRESETS};
use crate::error::Result;
use clap::builder::PossibleValuesParser;
use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Examples:
  embedsmith my-project                      Create a default project
  embedsmith --mcu cortex-m7 --flash 1M      Custom MCU configuration
  embedsmith --config my_config.json         Load configuration from a file
  embedsmith . --overwrite                   Generate into the current directory

Quick start:
  1. embedsmith my-embedded-firmware
  2. cd my-embedded-firmware/firmware
  3. make                                    Build the project
  4. make flash                              Flash to device (configure first)";

/// Command-line arguments structure for embedsmith.
///
/// Field options are optional so that only the ones given on the command line
/// override the defaults or the `--config` document.
#[derive(Parser, Debug)]
#[command(
    name = "embedsmith",
    author,
    about = "embedsmith: craft standardized embedded project layouts",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Path where the project is created
    #[arg(value_name = "PROJECT_PATH", default_value = DEFAULT_PROJECT_PATH)]
    pub project_path: PathBuf,

    /// Project name [default: firmware]
    #[arg(long = "name", visible_alias = "project-name", value_name = "NAME")]
    pub project_name: Option<String>,

    /// MCU architecture [default: cortex-m4]
    #[arg(long, visible_alias = "architecture")]
    pub mcu: Option<String>,

    /// Compiler toolchain [default: arm-none-eabi-gcc]
    #[arg(long, visible_alias = "toolchain")]
    pub compiler: Option<String>,

    /// Flash memory size [default: 512K]
    #[arg(long = "flash", visible_alias = "flash-size", value_name = "SIZE")]
    pub flash_size: Option<String>,

    /// RAM size [default: 128K]
    #[arg(long = "ram", visible_alias = "ram-size", value_name = "SIZE")]
    pub ram_size: Option<String>,

    /// Flash start address [default: 0x08000000]
    #[arg(long, value_name = "ADDRESS")]
    pub flash_start: Option<String>,

    /// RAM start address [default: 0x20000000]
    #[arg(long, value_name = "ADDRESS")]
    pub ram_start: Option<String>,

    /// Project author [default: Embedded Developer]
    #[arg(long)]
    pub author: Option<String>,

    /// Project version [default: 1.0.0]
    #[arg(long)]
    pub version: Option<String>,

    /// Project license [default: MIT]
    #[arg(long, value_parser = PossibleValuesParser::new(LICENSES))]
    pub license: Option<String>,

    /// Project description [default: Embedded firmware project]
    #[arg(long)]
    pub description: Option<String>,

    /// Load the configuration from a JSON (or YAML) file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Use the templates in this directory instead of the built-in ones
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Overwrite an existing directory without prompting
    #[arg(short = 'f', long)]
    pub overwrite: bool,

    /// Suppress output (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// List available MCU presets and exit
    #[arg(long)]
    pub list_presets: bool,

    /// List available templates and exit
    #[arg(long)]
    pub list_templates: bool,
}

impl Args {
    /// Configuration fields given explicitly on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            project_name: self.project_name.clone(),
            mcu: self.mcu.clone(),
            compiler: self.compiler.clone(),
            flash_size: self.flash_size.clone(),
            ram_size: self.ram_size.clone(),
            flash_start: self.flash_start.clone(),
            ram_start: self.ram_start.clone(),
            author: self.author.clone(),
            version: self.version.clone(),
            license: self.license.clone(),
            description: self.description.clone(),
        }
    }

    /// Resolves the configuration: defaults, then `--config`, then explicit flags.
    ///
    /// # Errors
    /// * `Error::ConfigLoadError` if the `--config` document cannot be loaded
    pub fn resolve_config(&self) -> Result<ProjectConfig> {
        let base = match &self.config {
            Some(path) => {
                let config = load_config(path)?;
                log::info!("Loaded configuration from: {}", path.display());
                config
            }
            None => ProjectConfig::default(),
        };
        Ok(base.with_overrides(self.overrides()))
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    Args::parse()
}

/// Text printed by `--list-presets`.
pub fn presets_listing() -> String {
    let mut out = String::from("Available MCU Presets:\n");
    for (name, description) in MCU_PRESETS {
        out.push_str(&format!("  {name:<14} - {description}\n"));
    }
    out
}
