//! Collision detection for the five geometry primitives.
//!
//! This module handles:
//! - **Narrow phase**: exact pairwise intersection tests between concrete
//!   shapes, including the separating-axis test for polygons
//! - **Dispatch**: routing any `(Shape, Shape)` pair to the right test,
//!   order-independent
//! - **Hitboxes**: composite colliders built as unions of primitives
//!
//! ## Separating Axis Theorem
//!
//! Two convex polygons are disjoint iff some edge normal of either admits
//! non-overlapping projections of their vertex sets:
//!
//! ```text
//!        axis
//!   ──────────────►
//!   ├─── A ───┤          ├─── B ───┤
//!             gap ⇒ no collision on this axis ⇒ disjoint
//! ```
//!
//! Rectangles, lines, and points ride the SAT path as 4-, 2-, and 1-vertex
//! lists; circles cannot (no finite edge set) and use a clamped
//! closest-point test instead.
//!
//! Detection only: there is no contact manifold and no response here.

pub mod dispatch;
pub mod hitbox;
pub mod narrow;

pub use dispatch::collides;
pub use hitbox::Hitbox;
