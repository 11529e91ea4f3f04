//! Collision detection
//!
//! Everything reduces to one primitive: point-in-polygon. Polygon bodies
//! test their world vertices against the other outline; point-like bodies
//! test their position. There are no bounding circles or boxes.

use glam::Vec2;

use super::body::{Body, Craft};
use super::polygon::Polygon;

/// True if any world vertex of `shape` lies inside `target`
pub fn vertices_inside(shape: &Polygon, target: &Polygon) -> bool {
    shape.world_points().any(|p| target.has_point(p))
}

/// True if a body's position lies inside `target`
#[inline]
pub fn point_inside(body: &Body, target: &Body) -> bool {
    target.has_point(body.pos())
}

/// Craft hull against another body. A destroyed craft touches nothing.
pub fn craft_touches(craft: &Craft, target: &Body) -> bool {
    craft.visible && vertices_inside(&craft.body.shape, &target.shape)
}

/// Tow beam endpoint against a body (beam must be on)
pub fn tow_beam_hits(craft: &Craft, target: &Body, length: f32) -> bool {
    craft.visible && craft.tow_active && target.has_point(craft.tow_beam_end(length))
}

/// Index of the first body in `targets` containing `point`
pub fn first_containing(point: Vec2, targets: &[Body]) -> Option<usize> {
    targets.iter().position(|t| t.has_point(point))
}
