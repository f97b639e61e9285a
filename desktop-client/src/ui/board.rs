use common::games::snake::{Heading, Point, SnakeGameState};
use eframe::egui;

use crate::colors::{self, Lab};

const MIN_BOARD_SIDE: f32 = 120.0;

pub struct BoardPainter {
    rect: egui::Rect,
    scale: f32,
}

impl BoardPainter {
    /// Square board filling the available space of `ui`.
    pub fn render(ui: &mut egui::Ui, game: &SnakeGameState) {
        let available = ui.available_size();
        let side = available.x.min(available.y).max(MIN_BOARD_SIDE);
        let (rect, _response) = ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::hover());

        let board = Self {
            rect,
            scale: side / f32::from(game.size()),
        };
        let painter = ui.painter_at(rect);
        let scheme = colors::scheme(game.colour());

        painter.rect_filled(rect, 0.0, colors::background_colour(scheme));
        board.draw_grid(&painter, game.size());
        board.draw_food(&painter, game);
        board.draw_snake(&painter, game, scheme);

        if game.is_dead() || game.paused {
            board.draw_overlay(&painter, game);
        }
    }

    fn cell(&self, point: Point) -> egui::Rect {
        let min = self.rect.min + egui::vec2(f32::from(point.x), f32::from(point.y)) * self.scale;
        egui::Rect::from_min_size(min, egui::vec2(self.scale, self.scale))
    }

    fn draw_grid(&self, painter: &egui::Painter, size: u16) {
        let stroke = egui::Stroke::new(1.0, egui::Color32::from_white_alpha(10));
        for i in 1..size {
            let offset = f32::from(i) * self.scale;
            painter.line_segment(
                [
                    egui::pos2(self.rect.left() + offset, self.rect.top()),
                    egui::pos2(self.rect.left() + offset, self.rect.bottom()),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    egui::pos2(self.rect.left(), self.rect.top() + offset),
                    egui::pos2(self.rect.right(), self.rect.top() + offset),
                ],
                stroke,
            );
        }
    }

    fn draw_food(&self, painter: &egui::Painter, game: &SnakeGameState) {
        for (point, style) in game.food() {
            let center = self.cell(point).center();
            painter.circle_filled(center, self.scale * 0.35, colors::food_colour(style));
        }
    }

    fn draw_snake(&self, painter: &egui::Painter, game: &SnakeGameState, scheme: &[Lab]) {
        let len = game.len();
        let outline = colors::outline_colour(scheme);
        let label_font = egui::FontId::monospace(self.scale * 0.4);

        // Tail first so the head ends up on top.
        let segments: Vec<_> = game.snake().collect();
        for segment in segments.iter().rev() {
            let cell = self.cell(segment.point);
            let rounding = if segment.index == 0 { self.scale * 0.45 } else { self.scale * 0.2 };

            painter.rect_filled(cell.shrink(self.scale * 0.04), rounding, outline);
            painter.rect_filled(
                cell.shrink(self.scale * 0.1),
                rounding,
                colors::segment_colour(scheme, segment.index, len),
            );

            if segment.index == 0 {
                self.draw_eyes(painter, cell, segment.heading);
            }
            if game.labels {
                painter.text(
                    cell.center(),
                    egui::Align2::CENTER_CENTER,
                    segment.heading.label(),
                    label_font.clone(),
                    egui::Color32::BLACK,
                );
            }
        }
    }

    fn draw_eyes(&self, painter: &egui::Painter, cell: egui::Rect, heading: Heading) {
        let eyes = match heading {
            Heading::North => [(0.25, 0.33), (0.75, 0.33)],
            Heading::East => [(0.67, 0.25), (0.67, 0.75)],
            Heading::South => [(0.25, 0.67), (0.75, 0.67)],
            Heading::West => [(0.33, 0.25), (0.33, 0.75)],
        };
        for (x, y) in eyes {
            let center = cell.min + egui::vec2(x, y) * self.scale;
            painter.circle_filled(center, self.scale / 10.0, egui::Color32::BLACK);
        }
    }

    fn draw_overlay(&self, painter: &egui::Painter, game: &SnakeGameState) {
        painter.rect_filled(self.rect, 0.0, egui::Color32::from_black_alpha(140));

        let title = if game.is_dead() { "Game over" } else { "Paused" };
        let score = game.score().to_string();
        let speed = format!("Speed {}", game.speed());
        let lines = [title, "Score", score.as_str(), speed.as_str()];

        let font_size = (self.rect.width() / 14.0).max(14.0);
        let line_height = font_size * 1.2;
        let top = self.rect.center().y - line_height * (lines.len() as f32 - 1.0) / 2.0;

        for (i, line) in lines.iter().enumerate() {
            painter.text(
                egui::pos2(self.rect.center().x, top + line_height * i as f32),
                egui::Align2::CENTER_CENTER,
                *line,
                egui::FontId::proportional(font_size),
                egui::Color32::WHITE,
            );
        }
    }
}
