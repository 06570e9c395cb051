//! Board bring-up errors.
//!
//! The game core cannot fail; only the hardware layer reports errors, and
//! it logs them rather than stopping the game.  We avoid `alloc` - all
//! variants carry only fixed-size data.

/// Top-level error type used by the board support code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// I²C transaction to the OLED failed.
    Display(DisplayError),

    /// The hardware RNG produced no usable entropy.
    EntropyUnavailable,
}

/// Display failures, by the step that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Controller did not accept the init sequence.
    Init,
    /// Frame buffer could not be written out.
    Flush,
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Display(e)
    }
}

/// Reject entropy that looks like a stuck or absent generator.
pub fn check_entropy(bytes: [u8; 8]) -> Result<[u8; 8], Error> {
    if bytes.iter().all(|&b| b == 0x00) || bytes.iter().all(|&b| b == 0xFF) {
        return Err(Error::EntropyUnavailable);
    }
    Ok(bytes)
}
