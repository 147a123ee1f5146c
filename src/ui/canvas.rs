use std::time::Instant;

use eframe::egui::{self, load::SizedTexture, ColorImage, TextureHandle, TextureOptions, Ui};
use image::RgbaImage;

use crate::media::fit::Region;
use crate::media::sequencer::Surface;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Canvas – egui-backed display surface
// ---------------------------------------------------------------------------

/// Holds the image most recently drawn by the sequencer and uploads it as a
/// texture on the next paint.
#[derive(Default)]
pub struct Canvas {
    region: Region,
    image: Option<ColorImage>,
    texture: Option<TextureHandle>,
    dirty: bool,
}

impl Surface for Canvas {
    fn region(&self) -> Region {
        self.region
    }

    fn clear(&mut self) {
        self.image = None;
        self.dirty = true;
    }

    fn draw(&mut self, image: &RgbaImage) {
        let size = [image.width() as usize, image.height() as usize];
        self.image = Some(ColorImage::from_rgba_unmultiplied(size, image.as_raw()));
        self.dirty = true;
    }
}

impl Canvas {
    pub fn set_region(&mut self, region: Region) {
        if region != self.region {
            log::debug!("Canvas resized to {}x{}", region.width, region.height);
            self.region = region;
        }
    }

    /// Size of the image waiting to be painted.
    #[cfg(test)]
    pub fn image_size(&self) -> Option<[usize; 2]> {
        self.image.as_ref().map(|image| image.size)
    }

    /// Paint the current image at the top-left of `ui`.
    pub fn paint(&mut self, ui: &mut Ui) {
        if self.dirty {
            self.dirty = false;
            match self.image.take() {
                Some(image) => match &mut self.texture {
                    Some(texture) => texture.set(image, TextureOptions::LINEAR),
                    None => {
                        self.texture =
                            Some(ui.ctx().load_texture("reaction", image, TextureOptions::LINEAR));
                    }
                },
                None => self.texture = None,
            }
        }

        if let Some(texture) = &self.texture {
            // Textures are sized in physical pixels.
            let size = texture.size_vec2() / ui.ctx().pixels_per_point();
            ui.add(egui::Image::from_texture(SizedTexture::new(texture.id(), size)));
        }
    }
}

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Size the canvas to the space left in `ui`, advance playback and paint.
pub fn reaction_canvas(ui: &mut Ui, state: &mut AppState) {
    let now = Instant::now();
    let ppp = ui.ctx().pixels_per_point();
    let available = ui.available_size();
    state.canvas.set_region(Region::new(
        (available.x * ppp).round() as u32,
        (available.y * ppp).round() as u32,
    ));

    if let Some(deadline) = state.advance(now) {
        ui.ctx()
            .request_repaint_after(deadline.saturating_duration_since(now));
    }

    state.canvas.paint(ui);
}
