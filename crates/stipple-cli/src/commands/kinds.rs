//! Kinds command

use stipple_core::{Params, ParticleFactory};
use stipple_shapes::ShapeRegistry;

pub fn run() {
    let registry = ShapeRegistry::builtin();

    println!("Registered Particle Kinds");
    println!("=========================\n");

    for (group, kinds) in registry.catalog() {
        println!("{}:", group);
        for kind in kinds {
            match registry.create(&kind, &Params::new()) {
                Ok(particle) => {
                    let [r, g, b] = particle.default_color();
                    println!("  - {:<10} color=#{:02X}{:02X}{:02X}", kind, r, g, b);
                }
                Err(_) => println!("  - {kind}"),
            }
        }
        println!();
    }
}
