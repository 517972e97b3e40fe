//! SVG preview of a scene.
//!
//! Scenes use y-up document coordinates while SVG's y-axis points down, so
//! every shape is flipped against the top edge of the scene's extent.

use log::debug;
use svg::{
    Document,
    node::{Text as SvgText, element as svg_element},
};

use regrid_core::{geometry::Bounds, item::Movable, scene::Scene};

use crate::{config::PreviewConfig, error::CliError};

/// Renders every shape of `scene` as an outlined rectangle.
///
/// # Errors
///
/// Returns [`CliError::Preview`] if the scene is empty or a shape cannot be
/// measured.
pub fn render(scene: &Scene, config: &PreviewConfig) -> Result<Document, CliError> {
    let extent = scene
        .extent()
        .ok_or_else(|| CliError::Preview("scene has no shapes to render".to_string()))?;
    let padding = config.padding();

    let size = extent.to_size();
    let width = size.width() + 2.0 * padding;
    let height = size.height() + 2.0 * padding;

    let mut doc = Document::new()
        .set("viewBox", format!("0 0 {width} {height}"))
        .set("width", width)
        .set("height", height);

    for shape in scene.items() {
        let bounds = shape
            .bounds()
            .map_err(|err| CliError::Preview(err.to_string()))?;
        let (x, y) = to_svg(extent, bounds, padding);

        let rect = svg_element::Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", config.fill_color())
            .set("stroke", config.stroke_color())
            .set("stroke-width", 1);
        doc = doc.add(rect);

        if config.labels() {
            let label = svg_element::Text::new("")
                .set("x", x + bounds.width() / 2.0)
                .set("y", y + bounds.height() / 2.0)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("font-family", "sans-serif")
                .set("font-size", 10)
                .add(SvgText::new(shape.id()));
            doc = doc.add(label);
        }
    }

    debug!(shapes = scene.len(), width, height; "Preview rendered");
    Ok(doc)
}

/// Maps a shape's top-left corner into SVG space.
fn to_svg(extent: Bounds, bounds: Bounds, padding: f32) -> (f32, f32) {
    (
        bounds.left() - extent.left() + padding,
        extent.top() - bounds.top() + padding,
    )
}
