use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

/// Errors raised by the dice and playback core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DiceError {
    #[error("a die needs at least one side, got {0}")]
    InvalidDieSize(u32),

    /// The display region has not been realized yet (zero width or height).
    #[error("display region {width}x{height} has no area")]
    DegenerateRegion { width: u32, height: u32 },

    #[error("aspect ratio must be finite and positive, got {0}")]
    InvalidAspectRatio(f64),

    #[error("animation '{0}' has no frames")]
    EmptyAnimation(String),
}

// ---------------------------------------------------------------------------
// Asset decoding errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("cannot open {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Dice(#[from] DiceError),
}
