pub mod error;
pub mod geometry;
pub mod logging;
pub mod scaling;

pub use error::{check_status, NativeCallError, NativeResult, NativeStatus};
pub use geometry::{Circle, PixelPoint, SurfacePoint, ViewportBounds};
