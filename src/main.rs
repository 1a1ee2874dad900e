//! mxn-vis - color-mapped images, colorbars and palettes from the command line
//!
//! This is the main entry point for the mxn-vis binary.

use anyhow::Context;
use std::time::Instant;
use tracing::{error, info};

use mxn_vis::colorbar::{save_colorbar, ColorbarOptions};
use mxn_vis::colormaps::{available_colormaps, cmap_to_palette, get_colormap};
use mxn_vis::config::Command;
use mxn_vis::data_loader::{load_array, load_mask};
use mxn_vis::raster::{save_image, ImageOptions};
use mxn_vis::{init_tracing, log_operation_end, log_operation_start, Config};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let (config, command) = Config::load().context("failed to load configuration")?;

    init_tracing(&config.log_level);
    info!("Starting mxn-vis v{}", env!("CARGO_PKG_VERSION"));

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    run(&config, command)
}

fn run(config: &Config, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Image {
            input,
            output,
            mask,
            colormap,
            no_flip,
        } => {
            let start = Instant::now();
            log_operation_start("image", Some(&input.display().to_string()));

            let data = load_array(&input)
                .with_context(|| format!("failed to load {}", input.display()))?;
            let mask = match mask {
                Some(path) => Some(
                    load_mask(&path)
                        .with_context(|| format!("failed to load mask {}", path.display()))?,
                ),
                None => None,
            };
            let colormap = get_colormap(colormap.as_deref().unwrap_or(&config.render.colormap))?;

            let mut options = ImageOptions::default()
                .colormap(colormap.as_ref())
                .flip_vertical(config.render.flip_vertical && !no_flip);
            if let Some(mask) = &mask {
                options = options.mask(mask.view());
            }

            let result = save_image(data.view(), &output, &options);
            log_operation_end("image", start, result.is_ok());
            let (path, _) = result.with_context(|| format!("failed to save {}", output.display()))?;
            println!("{}", path.display());
        }
        Command::Colorbar {
            input,
            vmin,
            vmax,
            colormap,
            output,
            title,
            lab,
        } => {
            let start = Instant::now();
            log_operation_start("colorbar", None);

            let data = input
                .as_deref()
                .map(load_array)
                .transpose()
                .context("failed to load colorbar input")?;
            let colormap = get_colormap(colormap.as_deref().unwrap_or(&config.render.colormap))?;

            let mut options = ColorbarOptions::from_config(&config.colorbar)
                .colormap(colormap.as_ref())
                .lab(lab);
            options.vmin = vmin;
            options.vmax = vmax;
            if let Some(data) = &data {
                options = options.data(data.view());
            }
            if let Some(output) = output {
                options = options.filename(output);
            }
            if let Some(title) = title {
                options = options.title(title);
            }

            let result = save_colorbar(&options);
            log_operation_end("colorbar", start, result.is_ok());
            let (path, _) = result.context("failed to save colorbar")?;
            println!("{}", path.display());
        }
        Command::Palette { colormap } => {
            let colormap = get_colormap(colormap.as_deref().unwrap_or(&config.render.colormap))?;
            let palette = cmap_to_palette(colormap.as_ref());
            println!("{}", serde_json::to_string(&palette)?);
        }
        Command::Colormaps => {
            for name in available_colormaps() {
                println!("{}", name);
            }
        }
    }
    Ok(())
}
