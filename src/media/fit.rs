use crate::error::DiceError;

/// Size of a display surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_realized(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// `height / width` of an image.
pub fn aspect_ratio(width: u32, height: u32) -> Result<f64, DiceError> {
    if width == 0 || height == 0 {
        return Err(DiceError::DegenerateRegion { width, height });
    }
    Ok(height as f64 / width as f64)
}

/// Largest size with the image's aspect ratio that fits inside `region`.
///
/// One axis always matches the region exactly; the other is no larger than the
/// region's.
pub fn fit(region: Region, image_aspect: f64) -> Result<(u32, u32), DiceError> {
    if !region.is_realized() {
        return Err(DiceError::DegenerateRegion {
            width: region.width,
            height: region.height,
        });
    }
    if !image_aspect.is_finite() || image_aspect <= 0.0 {
        return Err(DiceError::InvalidAspectRatio(image_aspect));
    }

    let width = region.width as f64;
    let height = region.height as f64;
    let region_aspect = height / width;

    let (w, h) = if region_aspect > image_aspect {
        // Region is relatively taller: width binds.
        (width, (width * image_aspect).round())
    } else {
        ((height / image_aspect).round(), height)
    };

    Ok(((w as u32).max(1), (h as u32).max(1)))
}
