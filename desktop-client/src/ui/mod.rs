mod game_ui;

use std::time::Duration;

use eframe::egui;

use crate::command_sender::CommandSender;
use crate::config::DisplayConfig;
use crate::state::SharedState;

use game_ui::SnakeGameUi;

/// The eframe application. Reads published frames out of the shared state
/// and forwards input to the driver; holds no game logic.
pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    game_ui: SnakeGameUi,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        display: DisplayConfig,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            game_ui: SnakeGameUi::new(display),
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.game_ui
                .render_game(ui, ctx, &self.shared_state, &self.command_sender);
        });

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
