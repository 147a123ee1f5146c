use std::time::Instant;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::{die_fill, die_highlight, TOTAL_COLOR};
use crate::dice::die::Die;
use crate::dice::history::RollLog;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – one button per die
// ---------------------------------------------------------------------------

/// Render the dice buttons and the reset button.
pub fn dice_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Dice");
    ui.separator();

    let last_die = state.last_roll.map(|report| report.outcome.die);

    for die in Die::ALL {
        let fill = if last_die == Some(die) {
            die_highlight(die)
        } else {
            die_fill(die)
        };
        let text = RichText::new(die.name()).strong().color(Color32::WHITE);
        let button = egui::Button::new(text)
            .fill(fill)
            .min_size(egui::vec2(80.0, 28.0));

        if ui
            .add(button)
            .on_hover_text(format!("Key: {:?}", die.hotkey()))
            .clicked()
        {
            state.roll(die, Instant::now());
        }
    }

    ui.add_space(8.0);
    if ui
        .button("Reset Log")
        .on_hover_text("Key: Escape")
        .clicked()
    {
        state.reset();
    }
}

// ---------------------------------------------------------------------------
// Middle panel – running total and log
// ---------------------------------------------------------------------------

pub fn results_panel(ui: &mut Ui, state: &AppState) {
    let total = state.controller.total().to_string();
    ui.label(RichText::new(total).color(TOTAL_COLOR).size(22.0));
    ui.separator();

    let log = state.controller.log();
    ui.label(RichText::new(RollLog::HEADER).size(16.0));
    if log.is_empty() {
        ui.weak("Roll a die to start the log.");
        return;
    }
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui: &mut Ui| {
            for entry in log.entries() {
                ui.label(RichText::new(entry.to_string()).size(16.0));
            }
        });
}

// ---------------------------------------------------------------------------
// Bottom bar
// ---------------------------------------------------------------------------

/// Status line and the exit button.
pub fn bottom_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if ui.button("Exit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
    });
}
