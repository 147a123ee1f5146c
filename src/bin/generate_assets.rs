//! Writes placeholder reaction GIFs and the idle still, so the simulator can
//! run without the original media.
//!
//! Usage: `generate_assets [DIR]` (default `gifs`).

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use palette::{Hsl, IntoColor, Srgb};

/// File name, width, height, frame count. Sizes vary so both fit axes get used.
const CELEBRATIONS: [(&str, u32, u32, u32); 5] = [
    ("vin_diesel_critical.gif", 320, 180, 24),
    ("tony_stark_explosion.gif", 300, 300, 30),
    ("interesting_man_clap.gif", 240, 320, 20),
    ("drake_dancing.gif", 360, 200, 16),
    ("shaq_shimmy.gif", 200, 260, 40),
];

const COMMISERATIONS: [(&str, u32, u32, u32); 4] = [
    ("kevin_heart_blink.gif", 320, 240, 12),
    ("simon_cowell_facepalm.gif", 280, 210, 20),
    ("batman_facepalm.gif", 300, 170, 20),
    ("oh_no_panda.gif", 250, 250, 24),
];

const STILL: &str = "d20.png";

fn hsl(hue: f32, lightness: f32) -> Rgba<u8> {
    let rgb: Srgb = Hsl::new(hue, 0.8, lightness).into_color();
    Rgba([
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
        255,
    ])
}

/// A disc orbiting the centre; celebrations spin bright, commiserations sink dark.
fn render_frame(width: u32, height: u32, hue: f32, t: f32, cheerful: bool) -> RgbaImage {
    let angle = t * std::f32::consts::TAU;
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let orbit = width.min(height) as f32 * 0.25;
    let radius = width.min(height) as f32 * 0.15;

    let (bx, by) = if cheerful {
        (cx + orbit * angle.cos(), cy + orbit * angle.sin())
    } else {
        (cx, cy - orbit + 2.0 * orbit * t)
    };
    let background = hsl(hue, if cheerful { 0.2 } else { 0.1 });
    let ball = hsl((hue + 180.0 * t) % 360.0, if cheerful { 0.6 } else { 0.4 });

    RgbaImage::from_fn(width, height, |x, y| {
        let (dx, dy) = (x as f32 - bx, y as f32 - by);
        if dx * dx + dy * dy <= radius * radius {
            ball
        } else {
            background
        }
    })
}

fn write_gif(path: &Path, width: u32, height: u32, frames: u32, hue: f32, cheerful: bool) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite)?;

    let frames = (0..frames).map(|i| {
        let t = i as f32 / frames as f32;
        let buffer = render_frame(width, height, hue, t, cheerful);
        Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(75, 1))
    });
    encoder
        .encode_frames(frames)
        .with_context(|| format!("encoding {}", path.display()))?;
    Ok(())
}

/// An outlined triangle, roughly the silhouette of a d20.
fn write_still(path: &Path) -> Result<()> {
    let (width, height) = (240u32, 240u32);
    let face = hsl(210.0, 0.45);
    let background = hsl(210.0, 0.1);

    let image = RgbaImage::from_fn(width, height, |x, y| {
        let (x, y) = (x as f32, y as f32);
        let top = 20.0;
        let bottom = height as f32 - 30.0;
        if y < top || y > bottom {
            return background;
        }
        let half = (y - top) / (bottom - top) * (width as f32 / 2.0 - 20.0);
        if (x - width as f32 / 2.0).abs() <= half {
            face
        } else {
            background
        }
    });
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("gifs"));
    std::fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let sets = [(&CELEBRATIONS[..], true), (&COMMISERATIONS[..], false)];
    let total = CELEBRATIONS.len() + COMMISERATIONS.len();
    let mut index = 0;
    for (set, cheerful) in sets {
        for &(name, width, height, frames) in set {
            let hue = index as f32 / total as f32 * 360.0;
            write_gif(&dir.join(name), width, height, frames, hue, cheerful)?;
            println!("Wrote {name} ({width}x{height}, {frames} frames)");
            index += 1;
        }
    }

    write_still(&dir.join(STILL))?;
    println!("Wrote {STILL}");
    println!("Assets in {}", dir.display());
    Ok(())
}
