use thiserror::Error;

pub type NativeResult<T> = std::result::Result<T, NativeCallError>;

/// Opaque status code returned by native graphics/platform calls. Negative
/// values signal failure, matching HRESULT conventions.
pub type NativeStatus = i32;

/// A native call reported failure; the status code is the sole diagnostic
/// payload and is passed through without interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("native call failed with status {}", hex_status(.status))]
pub struct NativeCallError {
    pub status: NativeStatus,
}

fn hex_status(status: &NativeStatus) -> String {
    format!("0x{:08X}", *status as u32)
}

/// Translates a native status code into a `Result`, the single definition all
/// call sites share. Success codes pass through untouched.
pub fn check_status(status: NativeStatus) -> NativeResult<()> {
    if status >= 0 {
        return Ok(());
    }
    tracing::debug!(status, "native call reported failure");
    Err(NativeCallError { status })
}
