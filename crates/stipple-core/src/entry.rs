//! Named collection entries
//!
//! A [`NamedParticle`] pairs one particle with the unique name and display
//! color the collection tracks for it. The name is the entry's identity for
//! its whole life; renaming is deletion plus re-add.

use crate::attr::AttrValue;
use crate::particle::Particle;

/// One named, colored particle, the atomic unit of a collection
#[derive(Debug, Clone)]
pub struct NamedParticle {
    name: String,
    color: [u8; 3],
    particle: Box<dyn Particle>,
}

impl NamedParticle {
    /// Wrap a particle under a name, using its kind's default color
    pub fn new(name: impl Into<String>, particle: Box<dyn Particle>) -> Self {
        let color = particle.default_color();
        Self {
            name: name.into(),
            color,
            particle,
        }
    }

    /// Override the display color
    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = color;
        self
    }

    /// Unique name within the owning collection
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display color
    pub fn color(&self) -> [u8; 3] {
        self.color
    }

    /// The wrapped particle
    pub fn particle(&self) -> &dyn Particle {
        self.particle.as_ref()
    }

    /// Kind tag of the wrapped particle
    pub fn kind(&self) -> &str {
        self.particle.kind()
    }

    /// Center of the wrapped particle
    pub fn center(&self) -> [f64; 2] {
        self.particle.center()
    }

    /// Unwrap into the owned particle
    pub fn into_particle(self) -> Box<dyn Particle> {
        self.particle
    }

    /// Attribute lookup spanning the entry and its particle
    ///
    /// `"name"` and `"color"` resolve at the entry level; anything else is
    /// asked of the particle. Projection and sorting both go through here,
    /// so a collection can be ordered by name as easily as by radius.
    pub fn lookup(&self, attribute: &str) -> Option<AttrValue> {
        match attribute {
            "name" => Some(AttrValue::Text(self.name.clone())),
            "color" => Some(AttrValue::Color(self.color)),
            _ => self.particle.attribute(attribute),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::center_attribute;

    #[derive(Debug, Clone)]
    struct Dot {
        center: [f64; 2],
    }

    impl Particle for Dot {
        fn kind(&self) -> &str {
            "dot"
        }

        fn center(&self) -> [f64; 2] {
            self.center
        }

        fn attribute(&self, name: &str) -> Option<AttrValue> {
            center_attribute(self.center, name)
        }

        fn default_color(&self) -> [u8; 3] {
            [0x10, 0x20, 0x30]
        }

        fn clone_box(&self) -> Box<dyn Particle> {
            Box::new(self.clone())
        }
    }

    #[test]
    fn test_default_color_comes_from_particle() {
        let entry = NamedParticle::new("dot_0", Box::new(Dot { center: [0.0, 0.0] }));
        assert_eq!(entry.color(), [0x10, 0x20, 0x30]);

        let entry = entry.with_color([1, 2, 3]);
        assert_eq!(entry.color(), [1, 2, 3]);
    }

    #[test]
    fn test_lookup_spans_entry_and_particle() {
        let entry = NamedParticle::new("dot_0", Box::new(Dot { center: [5.0, 6.0] }));

        assert_eq!(entry.lookup("name"), Some(AttrValue::Text("dot_0".into())));
        assert_eq!(
            entry.lookup("color"),
            Some(AttrValue::Color([0x10, 0x20, 0x30]))
        );
        assert_eq!(entry.lookup("cx"), Some(AttrValue::Number(5.0)));
        assert_eq!(entry.lookup("missing"), None);
    }

    #[test]
    fn test_clone_is_deep() {
        let entry = NamedParticle::new("dot_0", Box::new(Dot { center: [1.0, 1.0] }));
        let copy = entry.clone();
        assert_eq!(copy.name(), "dot_0");
        assert_eq!(copy.center(), [1.0, 1.0]);
    }
}
