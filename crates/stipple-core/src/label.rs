//! Bulk ingestion from labeled grids.
//!
//! A label image is the usual output of a connected-component pass: a
//! width x height grid of `u32` labels where 0 is background. Ingestion
//! lifts each distinct nonzero label into one [`RegionParticle`] entry.
//! The engine never interprets geometry beyond enumerating labels and
//! collecting their coordinates.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attr::AttrValue;
use crate::config::NAME_SEPARATOR;
use crate::entry::NamedParticle;
use crate::error::{ManagerError, Result};
use crate::factory::ParticleFactory;
use crate::manager::{NamingMode, ParticleSet};
use crate::particle::{center_attribute, Particle};

/// Row-major grid of `u32` region labels; 0 is background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelImage {
    width: usize,
    height: usize,
    labels: Vec<u32>,
}

impl LabelImage {
    /// Shape-checked constructor: the buffer must hold exactly
    /// `width * height` labels.
    pub fn new(width: usize, height: usize, labels: Vec<u32>) -> Result<Self> {
        let expected = width * height;
        if labels.len() != expected {
            return Err(ManagerError::LabelGrid {
                width,
                height,
                expected,
                got: labels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            labels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn label_at(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.labels[y * self.width + x])
        } else {
            None
        }
    }

    fn cells(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, &label)| (i % self.width, i / self.width, label))
    }
}

/// Connected region lifted out of a label image.
///
/// Stores the source label, the region's pixel coordinates, and their
/// centroid as the particle center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionParticle {
    label: u32,
    pixels: Vec<[usize; 2]>,
    center: [f64; 2],
}

impl RegionParticle {
    fn from_pixels(label: u32, pixels: Vec<[usize; 2]>) -> Self {
        // a label only exists because at least one cell carried it
        let count = pixels.len().max(1) as f64;
        let (sum_x, sum_y) = pixels.iter().fold((0.0, 0.0), |(sx, sy), pixel| {
            (sx + pixel[0] as f64, sy + pixel[1] as f64)
        });
        Self {
            label,
            pixels,
            center: [sum_x / count, sum_y / count],
        }
    }

    pub fn label(&self) -> u32 {
        self.label
    }

    /// Pixel count of the region.
    pub fn area(&self) -> usize {
        self.pixels.len()
    }

    pub fn pixels(&self) -> &[[usize; 2]] {
        &self.pixels
    }
}

impl Particle for RegionParticle {
    fn kind(&self) -> &str {
        "region"
    }

    fn center(&self) -> [f64; 2] {
        self.center
    }

    fn attribute(&self, name: &str) -> Option<AttrValue> {
        match name {
            "label" => Some(AttrValue::Int(i64::from(self.label))),
            "area" => Some(AttrValue::Int(self.pixels.len() as i64)),
            other => center_attribute(self.center, other),
        }
    }

    fn clone_box(&self) -> Box<dyn Particle> {
        Box::new(self.clone())
    }
}

/// Lift every distinct nonzero label into a region entry.
///
/// Labels are visited in ascending order and names enumerate that order
/// as `prefix_0, prefix_1, ...` regardless of the label values, so a grid
/// labeled {3, 7} still yields `..._0` and `..._1`. With
/// `color_by_label` each entry's blue channel ramps with its label over
/// the largest label present; otherwise entries keep the default region
/// color.
pub fn from_label_image(
    factory: Arc<dyn ParticleFactory>,
    image: &LabelImage,
    prefix: &str,
    color_by_label: bool,
) -> ParticleSet {
    let mut regions: BTreeMap<u32, Vec<[usize; 2]>> = BTreeMap::new();
    for (x, y, label) in image.cells() {
        if label != 0 {
            regions.entry(label).or_default().push([x, y]);
        }
    }
    let max_label = f64::from(regions.keys().next_back().copied().unwrap_or(1));

    let entries: Vec<NamedParticle> = regions
        .into_iter()
        .enumerate()
        .map(|(index, (label, pixels))| {
            let name = format!("{prefix}{NAME_SEPARATOR}{index}");
            let particle = RegionParticle::from_pixels(label, pixels);
            let entry = NamedParticle::new(name, Box::new(particle));
            if color_by_label {
                let blue = (255.0 * f64::from(label) / max_label).round() as u8;
                entry.with_color([0, 0, blue])
            } else {
                entry
            }
        })
        .collect();
    debug!(regions = entries.len(), "lifted regions from label image");
    ParticleSet::from_parts(factory, NamingMode::default(), entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_COLOR;
    use crate::testutil;

    #[test]
    fn test_label_image_shape_checked() {
        assert!(LabelImage::new(3, 2, vec![0; 6]).is_ok());
        let err = LabelImage::new(3, 2, vec![0; 5]).unwrap_err();
        assert_eq!(
            err,
            ManagerError::LabelGrid {
                width: 3,
                height: 2,
                expected: 6,
                got: 5
            }
        );
    }

    #[test]
    fn test_label_at() {
        let image = LabelImage::new(2, 2, vec![1, 0, 0, 2]).unwrap();
        assert_eq!(image.label_at(0, 0), Some(1));
        assert_eq!(image.label_at(1, 1), Some(2));
        assert_eq!(image.label_at(2, 0), None);
    }

    #[test]
    fn test_regions_enumerate_in_ascending_label_order() {
        // labels 7 and 3: ascending order decides the name counters
        let image = LabelImage::new(3, 2, vec![3, 0, 7, 3, 7, 0]).unwrap();
        let set = from_label_image(testutil::factory(), &image, "blob", false);

        assert_eq!(set.names(), vec!["blob_0", "blob_1"]);
        assert_eq!(
            set.project("label").unwrap(),
            vec![AttrValue::Int(3), AttrValue::Int(7)]
        );
        assert_eq!(set.project_numbers("area").unwrap(), vec![2.0, 2.0]);
        assert_eq!(set.centers(), vec![[0.0, 0.5], [1.5, 0.5]]);
        assert_eq!(set.kinds(), vec!["region"]);
    }

    #[test]
    fn test_color_ramp_scales_blue_by_label() {
        let image = LabelImage::new(2, 1, vec![1, 2]).unwrap();
        let set = from_label_image(testutil::factory(), &image, "label", true);
        assert_eq!(
            set.project("color").unwrap(),
            vec![
                AttrValue::Color([0, 0, 128]),
                AttrValue::Color([0, 0, 255])
            ]
        );
    }

    #[test]
    fn test_default_color_without_ramp() {
        let image = LabelImage::new(1, 1, vec![4]).unwrap();
        let set = from_label_image(testutil::factory(), &image, "label", false);
        assert_eq!(
            set.project("color").unwrap(),
            vec![AttrValue::Color(DEFAULT_COLOR)]
        );
    }

    #[test]
    fn test_background_only_grid_is_empty() {
        let image = LabelImage::new(2, 2, vec![0; 4]).unwrap();
        let set = from_label_image(testutil::factory(), &image, "label", false);
        assert!(set.is_empty());
    }

    #[test]
    fn test_label_image_serde_round_trip() {
        let image = LabelImage::new(2, 1, vec![5, 0]).unwrap();
        let json = serde_json::to_string(&image).unwrap();
        let back: LabelImage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, image);
    }
}
