use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use image::codecs::gif::GifDecoder;
use image::imageops::{self, FilterType};
use image::{AnimationDecoder, ImageReader, RgbaImage};

use super::fit::{aspect_ratio, fit, Region};
use crate::error::{DiceError, MediaError};

/// Resampling filter used whenever an asset is scaled to the canvas.
const RESIZE_FILTER: FilterType = FilterType::Triangle;

// ---------------------------------------------------------------------------
// AnimationAsset – decoded frames plus playback speed
// ---------------------------------------------------------------------------

/// A decoded animation. Frames are never modified after loading; playback
/// works on resized copies.
#[derive(Debug, Clone)]
pub struct AnimationAsset {
    name: String,
    frames: Vec<RgbaImage>,
    aspect_ratio: f64,
    speed: Duration,
}

impl AnimationAsset {
    /// Build from already decoded frames. The first frame sets the aspect ratio.
    pub fn from_frames(
        name: impl Into<String>,
        frames: Vec<RgbaImage>,
        speed: Duration,
    ) -> Result<Self, DiceError> {
        let name = name.into();
        let first = frames
            .first()
            .ok_or_else(|| DiceError::EmptyAnimation(name.clone()))?;
        let aspect_ratio = aspect_ratio(first.width(), first.height())?;
        Ok(Self {
            name,
            frames,
            aspect_ratio,
            speed,
        })
    }

    /// Decode every frame of a GIF file.
    ///
    /// Per-frame delays stored in the file are ignored; `speed` applies to all
    /// frames.
    pub fn open_gif(path: &Path, speed: Duration) -> Result<Self, MediaError> {
        let file = File::open(path).map_err(|source| MediaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let decode_err = |source| MediaError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let decoder = GifDecoder::new(BufReader::new(file)).map_err(decode_err)?;
        let frames: Vec<RgbaImage> = decoder
            .into_frames()
            .collect_frames()
            .map_err(decode_err)?
            .into_iter()
            .map(|frame| frame.into_buffer())
            .collect();

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("animation");
        Ok(Self::from_frames(name, frames, speed)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frames(&self) -> &[RgbaImage] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    /// Resized copies of every frame, fitted to `region`.
    pub fn fitted_frames(&self, region: Region) -> Result<Vec<RgbaImage>, DiceError> {
        let (w, h) = fit(region, self.aspect_ratio)?;
        Ok(self
            .frames
            .iter()
            .map(|frame| imageops::resize(frame, w, h, RESIZE_FILTER))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// StillAsset – a single image shown when nothing is playing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct StillAsset {
    name: String,
    image: RgbaImage,
    aspect_ratio: f64,
}

impl StillAsset {
    pub fn from_image(name: impl Into<String>, image: RgbaImage) -> Result<Self, DiceError> {
        let aspect_ratio = aspect_ratio(image.width(), image.height())?;
        Ok(Self {
            name: name.into(),
            image,
            aspect_ratio,
        })
    }

    /// Open any image format the `image` crate was built with.
    pub fn open(path: &Path) -> Result<Self, MediaError> {
        let io_err = |source| MediaError::Io {
            path: path.to_path_buf(),
            source,
        };
        let image = ImageReader::open(path)
            .map_err(io_err)?
            .with_guessed_format()
            .map_err(io_err)?
            .decode()
            .map_err(|source| MediaError::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("still");
        Ok(Self::from_image(name, image)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// A resized copy fitted to `region`.
    pub fn fitted(&self, region: Region) -> Result<RgbaImage, DiceError> {
        let (w, h) = fit(region, self.aspect_ratio)?;
        Ok(imageops::resize(&self.image, w, h, RESIZE_FILTER))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::codecs::gif::{GifEncoder, Repeat};
    use image::{Delay, Frame, Rgba};

    /// Solid-colour frames, `shade` picks the red channel of each.
    pub(crate) fn solid_frames(shades: &[u8], width: u32, height: u32) -> Vec<RgbaImage> {
        shades
            .iter()
            .map(|&shade| RgbaImage::from_pixel(width, height, Rgba([shade, 0, 0, 255])))
            .collect()
    }

    fn write_gif(path: &Path, frames: Vec<RgbaImage>) {
        let file = File::create(path).unwrap();
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).unwrap();
        encoder
            .encode_frames(frames.into_iter().map(|buf| {
                Frame::from_parts(buf, 0, 0, Delay::from_numer_denom_ms(40, 1))
            }))
            .unwrap();
    }

    #[test]
    fn gif_decodes_all_frames() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wave.gif");
        write_gif(&path, solid_frames(&[10, 120, 250], 40, 20));

        let asset = AnimationAsset::open_gif(&path, Duration::from_millis(75)).unwrap();
        assert_eq!(asset.name(), "wave");
        assert_eq!(asset.len(), 3);
        assert_eq!(asset.aspect_ratio(), 0.5);
        assert_eq!(asset.speed(), Duration::from_millis(75));
        assert_eq!(asset.frames()[0].dimensions(), (40, 20));
    }

    #[test]
    fn missing_gif_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.gif");
        let err = AnimationAsset::open_gif(&path, Duration::from_millis(75)).unwrap_err();
        assert!(matches!(err, MediaError::Io { .. }));
        assert!(err.to_string().contains("nope.gif"));
    }

    #[test]
    fn corrupt_gif_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.gif");
        std::fs::write(&path, b"definitely not a gif").unwrap();
        let err = AnimationAsset::open_gif(&path, Duration::from_millis(75)).unwrap_err();
        assert!(matches!(err, MediaError::Decode { .. }));
    }

    #[test]
    fn empty_animation_is_rejected() {
        let err = AnimationAsset::from_frames("blank", Vec::new(), Duration::from_millis(75))
            .unwrap_err();
        assert_eq!(err, DiceError::EmptyAnimation("blank".into()));
    }

    #[test]
    fn fitting_leaves_source_frames_untouched() {
        let asset = AnimationAsset::from_frames(
            "pair",
            solid_frames(&[1, 2], 100, 50),
            Duration::from_millis(75),
        )
        .unwrap();

        let small = asset.fitted_frames(Region::new(50, 200)).unwrap();
        assert!(small.iter().all(|f| f.dimensions() == (50, 25)));

        let large = asset.fitted_frames(Region::new(1000, 200)).unwrap();
        assert!(large.iter().all(|f| f.dimensions() == (400, 200)));

        assert!(asset.frames().iter().all(|f| f.dimensions() == (100, 50)));
    }

    #[test]
    fn still_png_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("idle.png");
        RgbaImage::from_pixel(30, 60, Rgba([0, 0, 255, 255]))
            .save(&path)
            .unwrap();

        let still = StillAsset::open(&path).unwrap();
        assert_eq!(still.name(), "idle");
        assert_eq!(still.aspect_ratio(), 2.0);
        assert_eq!(still.fitted(Region::new(300, 300)).unwrap().dimensions(), (150, 300));
    }
}
