mod command_sender;
mod config;
mod input;
mod presenter;
mod runner;
mod state;
mod ui;

use clap::Parser;
use eframe::egui;
use tokio::sync::mpsc;

use snake_core::game::GRID_SIZE;
use snake_core::logger::init_logger;

use command_sender::CommandSender;
use presenter::SharedStatePresenter;
use runner::run_game_loop;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser, Debug)]
#[command(name = "snake_client", about = "Grid snake desktop client")]
struct Args {
    /// Path to the YAML config file. Missing file means defaults.
    #[arg(long, default_value = "snake_config.yaml")]
    config: String,

    /// Fixed RNG seed for a reproducible session.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logger(None);

    let config = config::load_config(&args.config)?;
    let seed = args.seed.unwrap_or_else(rand::random);

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let presenter = SharedStatePresenter::new(shared_state.clone());
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(run_game_loop(presenter, command_rx, seed));
    });

    let board_px = config.display.cell_size_px * GRID_SIZE as f32;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([board_px + 40.0, board_px + 180.0])
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(SnakeApp::new(
                shared_state,
                CommandSender::new(command_tx),
                config.display,
            )))
        }),
    )?;

    Ok(())
}
