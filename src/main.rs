mod app;
mod assets;
mod config;
mod data;
mod quiz;
mod shell;
mod ui;

use app::QuizApp;
use assets::Assets;
use config::UserConfig;
use eframe::egui;
use quiz::{QuizBrain, QuizSession};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config = UserConfig::load();
    let assets = Assets::load(&config.asset_dir, config.window_size()).map_err(|e| {
        log::error!("{}", e);
        e
    })?;

    let questions = data::default_questions();
    let brain = if config.shuffle_questions {
        QuizBrain::shuffled(questions, &mut rand::thread_rng())?
    } else {
        QuizBrain::new(questions)?
    };
    log::info!("Starting quiz with {} questions", brain.total());

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(config.window_width, config.window_height)),
        resizable: false,
        centered: true,
        ..Default::default()
    };

    let feedback_delay = config.feedback_delay();
    eframe::run_native(
        "QuizWiz-Modern Quiz App",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(QuizApp::new(cc, assets, brain, feedback_delay))
        }),
    )?;
    Ok(())
}
