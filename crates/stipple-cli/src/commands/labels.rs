//! Labels command

use std::sync::Arc;

use stipple_core::{from_label_image, LabelImage};
use stipple_shapes::ShapeRegistry;
use tracing::info;

pub fn run(color_by_label: bool) -> Result<(), Box<dyn std::error::Error>> {
    // Synthetic connected-component output: four labeled regions on an
    // 8x5 grid.
    let rows: [[u32; 8]; 5] = [
        [1, 1, 0, 0, 0, 2, 2, 0],
        [1, 1, 0, 0, 0, 2, 2, 0],
        [0, 0, 0, 0, 0, 2, 2, 0],
        [0, 0, 3, 3, 0, 0, 0, 0],
        [0, 0, 3, 3, 0, 0, 0, 4],
    ];
    let labels: Vec<u32> = rows.iter().flatten().copied().collect();
    let image = LabelImage::new(8, 5, labels)?;

    info!(
        "Ingesting a {}x{} label grid",
        image.width(),
        image.height()
    );
    let set = from_label_image(
        Arc::new(ShapeRegistry::builtin()),
        &image,
        "grain",
        color_by_label,
    );

    println!("Label Grid Ingestion");
    println!("====================\n");
    println!("{set}\n");

    for entry in &set {
        let particle = entry.particle();
        let label = particle
            .attribute("label")
            .and_then(|value| value.as_int())
            .unwrap_or(0);
        let area = particle
            .attribute("area")
            .and_then(|value| value.as_int())
            .unwrap_or(0);
        let [x, y] = entry.center();
        let [r, g, b] = entry.color();
        println!(
            "  {:<10} label={:<3} area={:<3} center=({:.2}, {:.2}) color=#{:02X}{:02X}{:02X}",
            entry.name(),
            label,
            area,
            x,
            y,
            r,
            g,
            b
        );
    }

    Ok(())
}
