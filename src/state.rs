use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dice::controller::{DieController, Reaction, RollReport};
use crate::dice::die::Die;
use crate::error::DiceError;
use crate::media::fit::Region;
use crate::media::library::AssetLibrary;
use crate::media::sequencer::{show_still, FrameSequencer, Phase, Surface};
use crate::ui::canvas::Canvas;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Rolls, running total and log.
    pub controller: DieController<StdRng>,

    /// Decoded animations and the idle still.
    pub assets: AssetLibrary,

    /// Playback of the current reaction animation.
    pub sequencer: FrameSequencer,

    /// Where animations are drawn.
    pub canvas: Canvas,

    /// Reaction waiting for the canvas to get a size.
    pub pending_reaction: Option<Reaction>,

    /// Region the idle still was last fitted to.
    pub still_region: Option<Region>,

    /// Most recent roll, for highlighting its button.
    pub last_roll: Option<RollReport>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(assets: AssetLibrary) -> Self {
        let controller = DieController::new(
            StdRng::from_entropy(),
            assets.celebrations.len(),
            assets.commiserations.len(),
        );
        Self {
            controller,
            assets,
            sequencer: FrameSequencer::default(),
            canvas: Canvas::default(),
            pending_reaction: None,
            still_region: None,
            last_roll: None,
            status_message: None,
        }
    }

    /// Roll `die` and start its reaction animation, if it has one.
    pub fn roll(&mut self, die: Die, now: Instant) {
        match self.controller.trigger(die) {
            Ok(report) => {
                self.last_roll = Some(report);
                self.status_message = None;
                if let Some(reaction) = report.reaction {
                    self.play(reaction, now);
                }
            }
            Err(e) => {
                log::error!("Roll failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Clear the log and the total.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.last_roll = None;
        self.status_message = None;
    }

    fn play(&mut self, reaction: Reaction, now: Instant) {
        let Some(asset) = self.assets.animation(reaction) else {
            log::warn!("No animation for {reaction:?}");
            return;
        };

        match self
            .sequencer
            .start(asset, self.assets.still.clone(), &mut self.canvas, now)
        {
            Ok(_) => self.pending_reaction = None,
            Err(DiceError::DegenerateRegion { .. }) => {
                log::debug!("Canvas not sized yet, deferring {reaction:?}");
                self.pending_reaction = Some(reaction);
            }
            Err(e) => {
                log::error!("Cannot play '{}': {e}", asset.name());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Per-frame housekeeping once the canvas knows its size: refit the idle
    /// still, start deferred work and advance playback. Returns the next
    /// playback deadline.
    pub fn advance(&mut self, now: Instant) -> Option<Instant> {
        let region = self.canvas.region();
        if region.is_realized() {
            if self.sequencer.phase() != Phase::Playing && self.still_region != Some(region) {
                self.refit_still(region);
            }
            if let Some(reaction) = self.pending_reaction.take() {
                self.play(reaction, now);
            }
        }
        self.sequencer.tick(now, &mut self.canvas)
    }

    fn refit_still(&mut self, region: Region) {
        self.still_region = Some(region);
        if let Some(still) = &self.assets.still {
            if let Err(e) = show_still(still, &mut self.canvas) {
                log::warn!("Cannot show still '{}': {e}", still.name());
            }
        }
    }
}
