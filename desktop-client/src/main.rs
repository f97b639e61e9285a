mod colors;
mod config;
mod ui;

use clap::Parser;
use common::config::ConfigManager;
use common::games::SessionRng;
use common::games::snake::{SnakeGameState, SnakeSession};
use common::logger::{self, LogLevel};
use common::log;
use eframe::egui;

use config::get_config_manager;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_desktop")]
struct Args {
    /// Config file to use instead of the one next to the executable.
    #[arg(long)]
    config: Option<String>,
    /// Seed for food placement; overrides the config.
    #[arg(long)]
    seed: Option<u64>,
    /// Log debug output (food placement, autopilot decisions).
    #[arg(long)]
    verbose: bool,
    /// Start with the autopilot on.
    #[arg(long)]
    auto: bool,
    #[arg(long)]
    log_prefix: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = match &args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let config = config_manager.load_or_init()?;

    let level = if args.verbose { LogLevel::Debug } else { config.log.level };
    logger::init_logger(args.log_prefix.or(config.log.prefix.clone()), level);

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting with seed {}", rng.seed());

    let mut game = SnakeGameState::new(config.game.clone(), colors::scheme_count(), rng);
    game.auto = args.auto;
    let session = SnakeSession::new(game);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Snake"),
        ..Default::default()
    };

    let show_help = config.window.show_help;
    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(session, show_help)))),
    )?;

    log!("Window closed");
    Ok(())
}
