use std::time::Instant;

use eframe::egui::{self, Key};

use crate::dice::die::Die;
use crate::media::library::AssetLibrary;
use crate::state::AppState;
use crate::ui::{canvas, panels};

// ---------------------------------------------------------------------------
// Keyboard bindings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Reset,
    Roll(Die),
}

/// Actions for the keys pressed this frame: a reset first, then one roll per
/// pressed hotkey in button order.
pub fn key_actions(pressed: &[Key]) -> Vec<KeyAction> {
    let reset = pressed
        .contains(&Key::Escape)
        .then_some(KeyAction::Reset);
    let rolls = Die::ALL
        .into_iter()
        .filter(|die| pressed.contains(&die.hotkey()))
        .map(KeyAction::Roll);
    reset.into_iter().chain(rolls).collect()
}

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DiceApp {
    pub state: AppState,
}

impl DiceApp {
    pub fn new(assets: AssetLibrary) -> Self {
        Self {
            state: AppState::new(assets),
        }
    }

    /// Home-row keys roll dice, Escape resets the log.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let pressed: Vec<Key> = ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::Key {
                        key, pressed: true, ..
                    } => Some(*key),
                    _ => None,
                })
                .collect()
        });

        for action in key_actions(&pressed) {
            match action {
                KeyAction::Reset => self.state.reset(),
                KeyAction::Roll(die) => self.state.roll(die, Instant::now()),
            }
        }
    }
}

impl eframe::App for DiceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // ---- Bottom bar: status + exit ----
        egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
            panels::bottom_bar(ui, &self.state);
        });

        // ---- Left side panel: dice buttons ----
        egui::SidePanel::left("dice_panel")
            .default_width(110.0)
            .resizable(false)
            .show(ctx, |ui| {
                panels::dice_panel(ui, &mut self.state);
            });

        // ---- Middle panel: total and log ----
        egui::SidePanel::left("results_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::results_panel(ui, &self.state);
            });

        // ---- Central panel: reaction canvas ----
        egui::CentralPanel::default().show(ctx, |ui| {
            canvas::reaction_canvas(ui, &mut self.state);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotkeys_roll_their_dice() {
        assert_eq!(key_actions(&[Key::A]), vec![KeyAction::Roll(Die::D4)]);
        assert_eq!(key_actions(&[Key::H]), vec![KeyAction::Roll(Die::D20)]);
        assert_eq!(key_actions(&[Key::Q, Key::Space]), vec![]);
    }

    #[test]
    fn escape_resets_before_any_roll() {
        assert_eq!(
            key_actions(&[Key::S, Key::Escape, Key::D]),
            vec![
                KeyAction::Reset,
                KeyAction::Roll(Die::D6),
                KeyAction::Roll(Die::D8),
            ]
        );
        assert_eq!(key_actions(&[Key::Escape]), vec![KeyAction::Reset]);
    }

    #[test]
    fn simultaneous_rolls_follow_button_order() {
        let all = [Key::H, Key::G, Key::F, Key::D, Key::S, Key::A];
        let rolled: Vec<KeyAction> = Die::ALL.into_iter().map(KeyAction::Roll).collect();
        assert_eq!(key_actions(&all), rolled);
    }
}
