/// Media layer: decoded assets, aspect fitting and timed playback.
///
/// Architecture:
/// ```text
///   gifs/*.gif, *.png
///        │
///        ▼
///   ┌──────────┐
///   │ library   │  catalog → AnimationAsset / StillAsset (loaded once)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   fit     │  region + aspect ratio → target size
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ sequencer │  resized copy → Surface, one frame per tick
///   └──────────┘
/// ```

pub mod asset;
pub mod fit;
pub mod library;
pub mod sequencer;
