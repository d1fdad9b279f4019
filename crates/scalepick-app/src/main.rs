//! Main application entry point.
//!
//! Usage: `scalepick [CONFIG] [SCRIPT]`. Without a config the built-in
//! defaults are used, without a script the demo drag is replayed.

use scalepick_app::{App, AppResult, ReplayReport, ReplayScript, load_config};
use scalepick_core::PickerConfig;

fn run() -> AppResult<ReplayReport> {
    let mut args = std::env::args().skip(1);

    let config = match args.next() {
        Some(path) => {
            log::info!("Loading config from {}", path);
            load_config(path)?
        }
        None => {
            log::warn!("No config given, using defaults");
            PickerConfig::default()
        }
    };
    let script = match args.next() {
        Some(path) => {
            log::info!("Loading script from {}", path);
            ReplayScript::load(path)?
        }
        None => ReplayScript::demo(),
    };

    let mut app = App::new(&config)?;
    app.replay(&script)
}

fn main() {
    env_logger::init();
    log::info!("Starting ScalePick");

    match run() {
        Ok(report) => {
            log::info!(
                "Replay finished: ruler = {}, dial = {}, {} changes, {} frames",
                report.ruler_value,
                report.dial_value,
                report.changes.len(),
                report.frames
            );
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
