//! Configuration management for mxn-vis.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::colormaps::get_colormap;
use crate::error::{Result, VisError};

/// Command-line arguments for mxn-vis
#[derive(Parser, Debug)]
#[command(name = "mxn-vis")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to JSON configuration file
    #[arg(short, long, env = "MXN_VIS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "MXN_VIS_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed on the command line
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Save a JSON 2-D array as a color-mapped image
    Image {
        /// JSON file holding an array of rows
        input: PathBuf,
        /// Destination image; the format follows the extension
        output: PathBuf,
        /// JSON file holding a boolean mask of the same shape
        #[arg(short, long)]
        mask: Option<PathBuf>,
        /// Colormap name
        #[arg(long)]
        colormap: Option<String>,
        /// Keep row 0 at the top of the image
        #[arg(long)]
        no_flip: bool,
    },
    /// Save a standalone colorbar PNG
    Colorbar {
        /// JSON array whose min/max become the default range
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(long, allow_negative_numbers = true)]
        vmin: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        vmax: Option<f64>,
        /// Colormap name
        #[arg(long)]
        colormap: Option<String>,
        /// Destination PNG (default: colorbar_<lab>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Label drawn along the bar
        #[arg(long)]
        title: Option<String>,
        /// Suffix for the default file name
        #[arg(long, default_value = "")]
        lab: String,
    },
    /// Print a colormap as a flat 768-entry RGB palette (JSON)
    Palette {
        /// Colormap name
        #[arg(long)]
        colormap: Option<String>,
    },
    /// List the available colormap names
    Colormaps,
}

/// Image rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Default colormap name
    #[serde(default = "default_colormap")]
    pub colormap: String,

    /// Flip images so row 0 ends up at the bottom
    #[serde(default = "default_true")]
    pub flip_vertical: bool,
}

/// Colorbar figure configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorbarConfig {
    /// Figure width in inches
    #[serde(default = "default_colorbar_width")]
    pub width_in: f64,

    /// Figure height in inches
    #[serde(default = "default_colorbar_height")]
    pub height_in: f64,

    /// Pixels per inch
    #[serde(default = "default_dpi")]
    pub dpi: u32,

    /// Bar position as figure fractions: left, bottom, width, height
    #[serde(default = "default_axes_rect")]
    pub axes_rect: [f64; 4],

    /// Maximum number of tick labels (0 disables ticks)
    #[serde(default = "default_ticks")]
    pub ticks: usize,

    /// Tick label size in points
    #[serde(default = "default_tick_font_size")]
    pub tick_font_size: f64,

    /// Title size in points
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f64,

    /// Gap between tick labels and title in points
    #[serde(default = "default_label_pad")]
    pub label_pad: f64,

    /// Default title
    #[serde(default = "default_title")]
    pub title: String,
}

/// Text annotation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    #[serde(default = "default_legend_font_size")]
    pub font_size: f64,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub colorbar: ColorbarConfig,

    #[serde(default)]
    pub legend: LegendConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, Command)> {
        let args = Args::parse();
        let config = Self::from_args(&args)?;
        Ok((config, args.command))
    }

    /// Build the configuration for already parsed arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(level) = &args.log_level {
            config.log_level = level.clone();
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.render = other.render;
        self.colorbar = other.colorbar;
        self.legend = other.legend;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // Validate log level
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(VisError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        if get_colormap(&self.render.colormap).is_err() {
            return Err(VisError::Config {
                message: format!("Unknown colormap: {}", self.render.colormap),
            });
        }

        let colorbar = &self.colorbar;
        if !(colorbar.width_in > 0.0 && colorbar.height_in > 0.0) {
            return Err(VisError::Config {
                message: "Colorbar figure size must be positive".to_string(),
            });
        }
        if colorbar.dpi == 0 {
            return Err(VisError::Config {
                message: "Colorbar dpi cannot be 0".to_string(),
            });
        }
        let [left, bottom, width, height] = colorbar.axes_rect;
        let inside = |v: f64| (0.0..=1.0).contains(&v);
        if !(inside(left)
            && inside(bottom)
            && width > 0.0
            && height > 0.0
            && inside(left + width)
            && inside(bottom + height))
        {
            return Err(VisError::Config {
                message: format!(
                    "Colorbar axes rectangle {:?} must lie within the figure",
                    colorbar.axes_rect
                ),
            });
        }

        if self.legend.font_size <= 0.0 {
            return Err(VisError::Config {
                message: "Legend font size must be positive".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            colorbar: ColorbarConfig::default(),
            legend: LegendConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            colormap: default_colormap(),
            flip_vertical: true,
        }
    }
}

impl Default for ColorbarConfig {
    fn default() -> Self {
        Self {
            width_in: default_colorbar_width(),
            height_in: default_colorbar_height(),
            dpi: default_dpi(),
            axes_rect: default_axes_rect(),
            ticks: default_ticks(),
            tick_font_size: default_tick_font_size(),
            title_font_size: default_title_font_size(),
            label_pad: default_label_pad(),
            title: default_title(),
        }
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            font_size: default_legend_font_size(),
        }
    }
}

// Default value functions for serde
fn default_colormap() -> String {
    "jet".to_string()
}

fn default_true() -> bool {
    true
}

fn default_colorbar_width() -> f64 {
    1.0
}

fn default_colorbar_height() -> f64 {
    4.0
}

fn default_dpi() -> u32 {
    100
}

fn default_axes_rect() -> [f64; 4] {
    [0.0, 0.05, 0.2, 0.9]
}

fn default_ticks() -> usize {
    5
}

fn default_tick_font_size() -> f64 {
    10.0
}

fn default_title_font_size() -> f64 {
    12.0
}

fn default_label_pad() -> f64 {
    20.0
}

fn default_title() -> String {
    "Colorbar".to_string()
}

fn default_legend_font_size() -> f64 {
    9.0
}

fn default_log_level() -> String {
    "info".to_string()
}
