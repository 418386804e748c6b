//! Shared geometric value types and containment predicates used by the
//! coordinate-mapping layer and by input hit-testing built on top of it.

use serde::{Deserialize, Serialize};

/// Integer pixel coordinate, as delivered by pointer and touch devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Float coordinate used for geometric tests where sub-pixel precision matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub x: f32,
    pub y: f32,
}

impl SurfacePoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Physical pixel rectangle of a rendering surface.
///
/// The origin is assumed to be (0,0), so `right` and `bottom` double as the
/// viewport extents when deriving scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ViewportBounds {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// True when the bounds enclose no area. Scale derivation over degenerate
    /// bounds produces zero or non-finite factors; callers filter these first.
    pub const fn is_degenerate(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: SurfacePoint,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: SurfacePoint, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Containment test with all four edges inclusive: a point sitting exactly on
/// the right or bottom edge is inside, unlike half-open rectangle semantics.
pub fn point_in_bounds(point: PixelPoint, bounds: ViewportBounds) -> bool {
    point.x >= bounds.left
        && point.x <= bounds.right
        && point.y >= bounds.top
        && point.y <= bounds.bottom
}

/// Containment test against the squared radius. Skipping the square root keeps
/// the exact-boundary case (distance equal to radius) inside.
pub fn point_in_circle(point: SurfacePoint, circle: Circle) -> bool {
    let dx = circle.center.x - point.x;
    let dy = circle.center.y - point.y;
    let distance_squared = dx * dx + dy * dy;
    distance_squared <= circle.radius * circle.radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_in_bounds_accepts_all_four_corners() {
        let bounds = ViewportBounds::new(10, 20, 110, 220);
        for corner in [
            PixelPoint::new(10, 20),
            PixelPoint::new(110, 20),
            PixelPoint::new(10, 220),
            PixelPoint::new(110, 220),
        ] {
            assert!(point_in_bounds(corner, bounds), "corner {corner:?}");
        }
    }

    #[test]
    fn point_in_bounds_rejects_one_unit_past_each_edge() {
        let bounds = ViewportBounds::new(10, 20, 110, 220);
        for outside in [
            PixelPoint::new(9, 100),
            PixelPoint::new(111, 100),
            PixelPoint::new(50, 19),
            PixelPoint::new(50, 221),
        ] {
            assert!(!point_in_bounds(outside, bounds), "outside {outside:?}");
        }
    }

    #[test]
    fn point_in_circle_includes_center_and_exact_boundary() {
        let circle = Circle::new(SurfacePoint::new(0.0, 0.0), 5.0);
        assert!(point_in_circle(SurfacePoint::new(0.0, 0.0), circle));
        // 3-4-5 triangle: distance is exactly the radius.
        assert!(point_in_circle(SurfacePoint::new(3.0, 4.0), circle));
    }

    #[test]
    fn point_in_circle_rejects_just_past_the_boundary() {
        let circle = Circle::new(SurfacePoint::new(0.0, 0.0), 5.0);
        assert!(!point_in_circle(SurfacePoint::new(0.0, 5.001), circle));
    }

    #[test]
    fn viewport_bounds_reports_extents_and_degeneracy() {
        let bounds = ViewportBounds::new(0, 0, 1280, 720);
        assert_eq!(bounds.width(), 1280);
        assert_eq!(bounds.height(), 720);
        assert!(!bounds.is_degenerate());
        assert!(ViewportBounds::new(0, 0, 1280, 0).is_degenerate());
        assert!(ViewportBounds::new(0, 0, 0, 720).is_degenerate());
    }

    #[test]
    fn viewport_bounds_roundtrips_through_json() {
        let bounds = ViewportBounds::new(0, 0, 2560, 1440);
        let encoded = serde_json::to_string(&bounds).expect("bounds should encode");
        let decoded: ViewportBounds =
            serde_json::from_str(&encoded).expect("bounds should decode");
        assert_eq!(decoded, bounds);
    }
}
