//! CLI logic for the regrid tool.
//!
//! Reads a scene file, transposes the grid its shapes form, and writes the
//! scene back out, optionally with an SVG preview.

pub mod config;
pub mod error;
pub mod error_adapter;
pub mod preview;

mod args;

pub use args::Args;
pub use error::CliError;

use std::{fs, path::Path};

use log::{debug, info, trace};

use regrid::Transposer;
use regrid_core::scene::Scene;

/// Run the regrid CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scene decoding or encoding errors
/// - Selections that do not form a transposable grid
/// - Preview rendering errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output,
        dry_run = args.dry_run;
        "Processing scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    debug!(config:? = app_config; "Configuration loaded");

    let mut scene = read_scene(&args.input)?;
    trace!(scene:?; "Scene loaded");

    let transposer = Transposer::new(app_config.transpose().clone());

    if args.dry_run {
        let plan = transposer.plan(scene.items())?;
        for placement in plan.placements() {
            let shape = &scene.items()[placement.index()];
            info!(
                id = shape.id(),
                from_cell:% = placement.cell(),
                to_cell:% = placement.transposed_cell(),
                x = placement.target().x(),
                y = placement.target().y();
                "Planned move"
            );
        }

        // Preview what the scene would look like without touching the output.
        if args.preview.is_some() {
            transposer.apply(scene.items_mut())?;
        }
    } else {
        let summary = transposer.apply(scene.items_mut())?;
        info!(
            moved = summary.moved(),
            from:% = summary.original_shape(),
            to:% = summary.transposed_shape();
            "Grid transposed"
        );

        write_scene(&args.output, &scene)?;
        info!(output_file = args.output; "Scene written successfully");
    }

    if let Some(preview_path) = &args.preview {
        let doc = preview::render(&scene, app_config.preview())?;
        fs::write(preview_path, doc.to_string())?;
        info!(preview_file = preview_path; "Preview written successfully");
    }

    Ok(())
}

/// Read and decode a scene file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a valid scene.
pub fn read_scene(path: impl AsRef<Path>) -> Result<Scene, CliError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    toml::from_str(&content).map_err(|source| CliError::SceneParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode and write a scene file
///
/// # Errors
///
/// Returns error if the scene cannot be encoded or the file cannot be written.
pub fn write_scene(path: impl AsRef<Path>, scene: &Scene) -> Result<(), CliError> {
    let content = toml::to_string(scene)?;
    fs::write(path, content)?;
    Ok(())
}
