use std::time::Duration;

use eframe::egui;
use egui::{Color32, Rect, RichText, Sense, Stroke};

use snake_core::game::rules;
use snake_core::game::{Direction, GRID_SIZE};

use crate::command_sender::CommandSender;
use crate::config::DisplayConfig;
use crate::input::{MAPPED_KEYS, command_for_key};
use crate::state::{ClientCommand, Overlay, RenderFrame, SharedState};

const SCORE_POP_DURATION: Duration = Duration::from_millis(900);

const BOARD_BG: Color32 = Color32::from_rgb(0x0f, 0x12, 0x19);
const BOARD_BG_FAST: Color32 = Color32::from_rgb(0x15, 0x10, 0x1a);
const FOOD_COLOR: Color32 = Color32::from_rgb(0xf2, 0x5f, 0x5c);

pub struct SnakeGameUi {
    display: DisplayConfig,
}

impl SnakeGameUi {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    pub fn render_game(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        shared_state: &SharedState,
        command_sender: &CommandSender,
    ) {
        self.handle_input(ctx, command_sender);

        let Some(frame) = shared_state.frame() else {
            ui.centered_and_justified(|ui| {
                ui.label("Waiting for game state...");
            });
            return;
        };

        ui.vertical_centered(|ui| {
            ui.heading(format!("Score: {}", frame.score));
            self.render_score_pop(ui, shared_state);
            ui.add_space(4.0);
            self.render_board(ui, &frame);
            ui.add_space(4.0);
            self.render_overlay(ui, &frame, command_sender);
            self.render_direction_pad(ui, command_sender);
        });
    }

    fn handle_input(&self, ctx: &egui::Context, command_sender: &CommandSender) {
        let command = ctx
            .input(|i| MAPPED_KEYS.into_iter().find(|key| i.key_pressed(*key)))
            .and_then(command_for_key);

        if let Some(command) = command {
            command_sender.send(command);
        }
    }

    fn render_score_pop(&self, ui: &mut egui::Ui, shared_state: &SharedState) {
        let pop = shared_state
            .score_pop()
            .filter(|pop| pop.raised_at.elapsed() < SCORE_POP_DURATION);

        match pop {
            Some(pop) => {
                let fade =
                    1.0 - pop.raised_at.elapsed().as_secs_f32() / SCORE_POP_DURATION.as_secs_f32();
                let alpha = (fade.clamp(0.0, 1.0) * 255.0) as u8;
                ui.label(
                    RichText::new(format!("+{}", pop.score))
                        .size(16.0)
                        .color(Color32::from_rgba_unmultiplied(0xf2, 0xc4, 0x4c, alpha)),
                );
            }
            None => {
                ui.add_space(22.0);
            }
        }
    }

    fn render_board(&self, ui: &mut egui::Ui, frame: &RenderFrame) {
        let cell = self.display.cell_size_px;
        let board_px = cell * GRID_SIZE as f32;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(board_px, board_px), Sense::hover());
        let painter = ui.painter_at(rect);

        let length = frame.snake.len();
        let background = if length >= rules::SPEEDUP_START_LENGTH {
            BOARD_BG_FAST
        } else {
            BOARD_BG
        };
        painter.rect_filled(rect, 0.0, background);

        if self.display.show_grid_lines {
            let stroke = Stroke::new(1.0, Color32::from_white_alpha(10));
            for i in 1..GRID_SIZE {
                let offset = i as f32 * cell;
                painter.vline(rect.left() + offset, rect.y_range(), stroke);
                painter.hline(rect.x_range(), rect.top() + offset, stroke);
            }
        }

        if let Some(food) = frame.food {
            let center = rect.min
                + egui::vec2((food.x as f32 + 0.5) * cell, (food.y as f32 + 0.5) * cell);
            painter.circle_filled(center, (cell - 6.0) / 2.0, FOOD_COLOR);
        }

        for (idx, segment) in frame.snake.iter().enumerate() {
            let hue = ((length * 37 + idx * 97) % 360) as f32;
            let lightness = if length >= rules::SPEEDUP_START_LENGTH {
                0.62
            } else {
                0.56
            };
            let min = rect.min
                + egui::vec2(segment.x as f32 * cell + 2.0, segment.y as f32 * cell + 2.0);
            painter.rect_filled(
                Rect::from_min_size(min, egui::vec2(cell - 4.0, cell - 4.0)),
                2.0,
                hsl_color(hue, 0.70, lightness),
            );
        }
    }

    fn render_overlay(
        &self,
        ui: &mut egui::Ui,
        frame: &RenderFrame,
        command_sender: &CommandSender,
    ) {
        match frame.overlay {
            Overlay::Hidden => {
                ui.label("Arrow keys or WASD to steer");
            }
            Overlay::PressToStart => {
                ui.label(RichText::new("Hit Space to start").size(18.0));
            }
            Overlay::GameOver => {
                ui.label(
                    RichText::new("Game Over. Hit Space to restart")
                        .size(18.0)
                        .color(Color32::RED),
                );
                if ui.button("Restart").clicked() {
                    command_sender.send(ClientCommand::Restart);
                    command_sender.send(ClientCommand::Start);
                }
            }
        }
    }

    fn render_direction_pad(&self, ui: &mut egui::Ui, command_sender: &CommandSender) {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            let pad_width = 4.0 * 36.0;
            ui.add_space((ui.available_width() - pad_width).max(0.0) / 2.0);
            for (label, direction) in [
                ("\u{25b2}", Direction::Up),
                ("\u{25bc}", Direction::Down),
                ("\u{25c0}", Direction::Left),
                ("\u{25b6}", Direction::Right),
            ] {
                if ui.button(label).clicked() {
                    command_sender.send(ClientCommand::Turn { direction });
                }
            }
        });
    }
}

/// HSL to egui color; hue in degrees, saturation and lightness in `[0, 1]`.
fn hsl_color(hue_deg: f32, saturation: f32, lightness: f32) -> Color32 {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = (hue_deg.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    Color32::from_rgb(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_color(0.0, 1.0, 0.5), Color32::from_rgb(255, 0, 0));
        assert_eq!(hsl_color(120.0, 1.0, 0.5), Color32::from_rgb(0, 255, 0));
        assert_eq!(hsl_color(240.0, 1.0, 0.5), Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn test_hsl_grayscale_ignores_hue() {
        assert_eq!(hsl_color(0.0, 0.0, 0.5), hsl_color(180.0, 0.0, 0.5));
        assert_eq!(hsl_color(90.0, 0.0, 1.0), Color32::from_rgb(255, 255, 255));
        assert_eq!(hsl_color(90.0, 0.0, 0.0), Color32::from_rgb(0, 0, 0));
    }
}
