//! Composite colliders.
//!
//! A body's collision surface is the union of simpler primitives: a ship
//! silhouette might be two lines and a small circle around the cockpit.
//! Two hitboxes collide when any element of one collides with any element
//! of the other.

use crate::collision::collides;
use crate::geometry::Shape;

/// An ordered collection of shapes treated as one collision surface.
///
/// An empty hitbox is inert: it collides with nothing, including itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hitbox {
    elements: Vec<Shape>,
}

impl Hitbox {
    pub fn new(elements: Vec<Shape>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Shape] {
        &self.elements
    }

    pub fn push(&mut self, shape: Shape) {
        self.elements.push(shape);
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Existential union semantics: true iff any element of `self` collides
    /// with any element of `other`.
    pub fn collides_with(&self, other: &Hitbox) -> bool {
        self.elements
            .iter()
            .any(|a| other.elements.iter().any(|b| collides(a, b)))
    }
}

impl FromIterator<Shape> for Hitbox {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
