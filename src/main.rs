//! River Hop entry point
//!
//! In the browser the library's `web` module is the entry point. Natively
//! this runs a headless autopilot session and prints the final state.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use river_hop::session::Session;
    use river_hop::{Autopilot, Settings};

    env_logger::init();
    log::info!("River Hop (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => load_settings(&path),
        None => Settings::default(),
    };
    let ticks: u64 = args.next().and_then(|t| t.parse().ok()).unwrap_or(10_000);

    let mut session = Session::new(settings.clone());
    let mut pilot = Autopilot::new(&settings.autopilot);
    let mut exits = 0usize;
    let mut count_exits = |s: &river_hop::sim::State| exits += s.exit.len();
    let summary = pilot.drive(&mut session, ticks, &mut count_exits);

    log::info!(
        "Autopilot ran {} ticks: {} moves, {} game(s) over, best score {}, max score {}, {} recycled bodies",
        summary.ticks,
        summary.moves,
        summary.games_over,
        summary.best_score,
        summary.max_score,
        exits
    );

    match serde_json::to_string_pretty(session.state()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final state: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings(path: &str) -> river_hop::Settings {
    use river_hop::Settings;

    match std::fs::read_to_string(path) {
        Ok(json) => match Settings::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path);
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings in {} ({}), using defaults", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            log::warn!("Cannot read {} ({}), using defaults", path, e);
            Settings::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
