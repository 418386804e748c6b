//! Conversions between device-independent pixels, physical window pixels, and
//! the fixed design-time reference resolution all UI layout is authored
//! against.
//!
//! Every function here is pure and stateless; concurrent callers need no
//! synchronization. Degenerate viewports (zero extent) flow through IEEE-754
//! arithmetic rather than erroring, so callers reject those up front via
//! [`ViewportBounds::is_degenerate`].

use nalgebra::{Matrix4, Vector3};

use crate::geometry::{PixelPoint, ViewportBounds};

/// Design-time baseline every layout coordinate is expressed in.
pub const REFERENCE_WIDTH: f32 = 1920.0;
pub const REFERENCE_HEIGHT: f32 = 1080.0;
pub const REFERENCE_ASPECT_RATIO: f32 = REFERENCE_WIDTH / REFERENCE_HEIGHT;

/// DIPs are normalized to 96 units per inch.
pub const DIPS_PER_INCH: f32 = 96.0;

/// Converts a length in device-independent pixels to physical pixels.
///
/// Ties round half up (toward positive infinity), so `-2.5` becomes `-2`.
/// This deliberately differs from the ties-away-from-zero rounding used by
/// [`window_pixel_to_local`]; both behaviors are load-bearing for downstream
/// layout code and are kept distinct.
pub fn dips_to_pixels(dips: f32, dpi: f32) -> f32 {
    (dips * dpi / DIPS_PER_INCH + 0.5).floor()
}

/// Derives the uniform scale between the reference resolution and the given
/// viewport, binding to whichever dimension is more constrained: width for
/// viewports at or narrower than 16:9, height for wider ones. This is the
/// letterbox/pillarbox fit policy.
///
/// Precondition: non-degenerate bounds. A zero-height viewport yields a zero
/// or non-finite factor instead of an error.
pub fn scale_factor_for_viewport(bounds: ViewportBounds) -> f32 {
    let viewport_width = bounds.right as f32;
    let viewport_height = bounds.bottom as f32;
    let aspect_ratio = viewport_width / viewport_height;

    if aspect_ratio <= REFERENCE_ASPECT_RATIO {
        viewport_width / REFERENCE_WIDTH
    } else {
        viewport_height / REFERENCE_HEIGHT
    }
}

/// Uniform scaling transform (scale, scale, 1) for the given viewport.
pub fn scale_matrix_for_viewport(bounds: ViewportBounds) -> Matrix4<f32> {
    let scale = scale_factor_for_viewport(bounds);
    Matrix4::new_nonuniform_scaling(&Vector3::new(scale, scale, 1.0))
}

/// Maps a physical window pixel into reference-space coordinates, undoing the
/// viewport scale. Each axis rounds to nearest with ties away from zero.
///
/// Same precondition as [`scale_factor_for_viewport`]: callers filter
/// degenerate bounds first.
pub fn window_pixel_to_local(bounds: ViewportBounds, pixel: PixelPoint) -> PixelPoint {
    let inverse_scale = 1.0 / scale_factor_for_viewport(bounds);
    PixelPoint::new(
        (pixel.x as f32 * inverse_scale).round() as i32,
        (pixel.y as f32 * inverse_scale).round() as i32,
    )
}
