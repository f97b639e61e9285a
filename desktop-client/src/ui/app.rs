use std::time::Instant;

use common::games::snake::{SessionCommand, SnakeSession, Turn};
use common::log;
use eframe::egui;

use super::board::BoardPainter;
use super::controls::{self, KEY_HELP};

pub struct SnakeApp {
    session: SnakeSession,
    started: Instant,
    show_help: bool,
}

impl SnakeApp {
    pub fn new(session: SnakeSession, show_help: bool) -> Self {
        Self {
            session,
            started: Instant::now(),
            show_help,
        }
    }

    fn apply(&mut self, command: SessionCommand) {
        if let Err(e) = self.session.apply(command) {
            log!("Command {:?} failed: {}", command, e);
        }
    }

    fn render_stats(&self, ui: &mut egui::Ui) {
        let game = self.session.game();
        let stats = [
            ("Score", game.score().to_string()),
            ("Length", game.len().to_string()),
            ("Speed", game.speed().to_string()),
            ("Size", game.size().to_string()),
            ("Mode", if game.auto { "Auto" } else { "Manual" }.to_string()),
            ("Walls", if game.wrap() { "Wrap" } else { "Limit" }.to_string()),
        ];

        for (name, value) in stats {
            ui.label(egui::RichText::new(name).strong());
            ui.label(egui::RichText::new(value).size(24.0));
            ui.add_space(6.0);
        }
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        let mut pressed = None;
        ui.horizontal(|ui| {
            if ui.button("Left").clicked() {
                pressed = Some(SessionCommand::Turn(Turn::Left));
            }
            if ui.button("Right").clicked() {
                pressed = Some(SessionCommand::Turn(Turn::Right));
            }
            if ui.button("−Speed").clicked() {
                pressed = Some(SessionCommand::SpeedDown);
            }
            if ui.button("+Speed").clicked() {
                pressed = Some(SessionCommand::SpeedUp);
            }
            if ui.button("Pause").clicked() {
                pressed = Some(SessionCommand::PauseOrRestart);
            }
        });

        if let Some(command) = pressed {
            self.apply(command);
        }
    }

    fn render_help(ui: &mut egui::Ui) {
        egui::Grid::new("key_help").num_columns(2).spacing([16.0, 6.0]).show(ui, |ui| {
            for (keys, action) in KEY_HELP {
                ui.monospace(keys);
                ui.label(action);
                ui.end_row();
            }
        });
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.session.stop();
            return;
        }

        for command in controls::collect_commands(ctx) {
            self.apply(command);
        }

        self.session.on_frame(self.started.elapsed());

        if self.show_help {
            egui::SidePanel::left("help_panel").resizable(false).show(ctx, |ui| {
                ui.add_space(8.0);
                Self::render_help(ui);
            });
        }

        egui::SidePanel::right("stats_panel").resizable(false).show(ctx, |ui| {
            ui.add_space(8.0);
            self.render_stats(ui);
        });

        egui::TopBottomPanel::bottom("controls_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_buttons(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                BoardPainter::render(ui, self.session.game());
            });
        });

        ctx.request_repaint();
    }
}
