use std::sync::Arc;
use std::time::{Duration, Instant};

use image::RgbaImage;

use super::asset::{AnimationAsset, StillAsset};
use super::fit::Region;
use crate::error::DiceError;

// ---------------------------------------------------------------------------
// Display surface
// ---------------------------------------------------------------------------

/// Somewhere frames can be shown. Images are drawn at the top-left origin.
pub trait Surface {
    fn region(&self) -> Region;
    fn clear(&mut self);
    fn draw(&mut self, image: &RgbaImage);
}

/// Clear `surface` and draw `still` fitted to it.
pub fn show_still<S: Surface + ?Sized>(still: &StillAsset, surface: &mut S) -> Result<(), DiceError> {
    let image = still.fitted(surface.region())?;
    surface.clear();
    surface.draw(&image);
    Ok(())
}

// ---------------------------------------------------------------------------
// FrameSequencer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Playing,
    /// Playback finished; the fallback still (if any) is showing.
    Still,
}

/// A scheduled "show frame `frame`" step, tagged with the epoch it belongs to.
#[derive(Debug, Clone, Copy)]
struct Continuation {
    epoch: u64,
    frame: usize,
    due: Instant,
}

/// The animation currently being played.
struct Session {
    name: String,
    frames: Vec<RgbaImage>,
    speed: Duration,
    still: Option<Arc<StillAsset>>,
}

/// Plays one animation at a time on a fixed per-frame timer.
///
/// Every `start` moves to a new epoch. Continuations scheduled by an older
/// epoch never draw: they are skipped if they come due in the same tick and
/// purged from the queue at the end of every tick.
pub struct FrameSequencer {
    epoch: u64,
    phase: Phase,
    session: Option<Session>,
    pending: Vec<Continuation>,
}

impl Default for FrameSequencer {
    fn default() -> Self {
        Self {
            epoch: 0,
            phase: Phase::Idle,
            session: None,
            pending: Vec::new(),
        }
    }
}

impl FrameSequencer {
    /// Begin playing `asset`, replacing whatever was playing before.
    ///
    /// Frame 0 is drawn immediately. Fails without touching the surface if the
    /// surface region is degenerate.
    pub fn start<S: Surface + ?Sized>(
        &mut self,
        asset: &AnimationAsset,
        still: Option<Arc<StillAsset>>,
        surface: &mut S,
        now: Instant,
    ) -> Result<u64, DiceError> {
        if asset.frames().is_empty() {
            return Err(DiceError::EmptyAnimation(asset.name().to_string()));
        }
        let frames = asset.fitted_frames(surface.region())?;

        self.cancel();
        surface.clear();
        surface.draw(&frames[0]);

        log::debug!(
            "playing '{}' ({} frames at {:?}) as epoch {}",
            asset.name(),
            frames.len(),
            asset.speed(),
            self.epoch
        );

        self.pending.push(Continuation {
            epoch: self.epoch,
            frame: 1,
            due: now + asset.speed(),
        });
        self.session = Some(Session {
            name: asset.name().to_string(),
            frames,
            speed: asset.speed(),
            still,
        });
        self.phase = Phase::Playing;
        Ok(self.epoch)
    }

    /// Abandon the current animation. Its queued continuations become stale.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("cancelled '{}' in epoch {}", session.name, self.epoch);
        }
        self.epoch += 1;
        self.phase = Phase::Idle;
    }

    /// Run every continuation due at `now`.
    ///
    /// Returns when the next continuation is due, if any are left.
    pub fn tick<S: Surface + ?Sized>(&mut self, now: Instant, surface: &mut S) -> Option<Instant> {
        let (mut due, later): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|c| c.due <= now);
        self.pending = later;
        due.sort_by_key(|c| c.due);

        for continuation in due {
            self.run(continuation, now, surface);
        }

        let epoch = self.epoch;
        self.pending.retain(|c| c.epoch == epoch);
        self.next_deadline()
    }

    fn run<S: Surface + ?Sized>(&mut self, continuation: Continuation, now: Instant, surface: &mut S) {
        if continuation.epoch != self.epoch {
            log::trace!(
                "dropping stale frame {} from epoch {} (current {})",
                continuation.frame,
                continuation.epoch,
                self.epoch
            );
            return;
        }
        let Some(session) = &self.session else {
            return;
        };

        if let Some(frame) = session.frames.get(continuation.frame) {
            surface.draw(frame);
            self.pending.push(Continuation {
                epoch: self.epoch,
                frame: continuation.frame + 1,
                due: now + session.speed,
            });
            return;
        }

        // Past the last frame: hand over to the still image.
        surface.clear();
        if let Some(still) = &session.still {
            if let Err(e) = show_still(still, surface) {
                log::warn!("cannot show still '{}': {e}", still.name());
            }
        }
        log::debug!("'{}' finished in epoch {}", session.name, self.epoch);
        self.session = None;
        self.phase = Phase::Still;
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|c| c.due).min()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[cfg(test)]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
