//! Demo command

use std::sync::Arc;

use stipple_core::{MergeOptions, Params, ParticleFactory, ParticleSet};
use stipple_shapes::ShapeRegistry;
use tracing::info;

pub fn run(circles: usize) -> Result<(), Box<dyn std::error::Error>> {
    info!("Running collection demo ({} circles)", circles);

    let factory: Arc<dyn ParticleFactory> = Arc::new(ShapeRegistry::builtin());
    let mut set = ParticleSet::new(Arc::clone(&factory));

    for i in 0..circles {
        let params = Params::new()
            .with("radius", 4.0 + 2.0 * i as f64)
            .with("center", [12.0 * i as f64, 5.0]);
        set.add_kind("circle", &params)?;
    }
    set.add_kind("dimer", &Params::new().with("center", [8.0, 20.0]))?;
    set.add_kind(
        "trimer",
        &Params::new().with("center", [30.0, 20.0]).with("overlap", 0.4),
    )?;

    println!("Stipple Collection Demo");
    println!("=======================\n");
    println!("{set}\n");

    // select the circles with a boolean mask, then project over them
    let circle_mask: Vec<bool> = set.iter().map(|entry| entry.kind() == "circle").collect();
    let circle_set = set.select(circle_mask)?;
    println!("Circle radii:  {:?}", circle_set.project_numbers("radius")?);
    println!("Circle areas:  {:?}\n", circle_set.project_numbers("area")?);

    let radii = circle_set.project_numbers("radius")?;
    let big_mask: Vec<bool> = radii.iter().map(|radius| *radius >= 8.0).collect();
    let big = circle_set.select(big_mask)?;
    println!("Circles with radius >= 8:");
    println!("{big}\n");

    // everything answers cx, so the whole set sorts by it
    let by_x = set.sorted_by("cx")?;
    println!("Sorted by center x:");
    println!("{by_x}\n");

    // merge a second collection on top
    let mut overlay = ParticleSet::new(Arc::clone(&factory));
    overlay.add_kind("rectangle", &Params::new().with("center", [40.0, 12.0]))?;
    overlay.add_kind("ellipse", &Params::new())?;
    let combined = set.merged(&overlay, MergeOptions::new())?;
    println!("Merged with overlay:");
    println!("{combined}\n");

    println!(
        "Kinds present: {:?} across {} particles",
        combined.kinds(),
        combined.len()
    );

    Ok(())
}
