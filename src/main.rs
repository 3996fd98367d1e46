use chemassist::config::Config;
use chemassist::state::AppState;
use chemassist::utils::logger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let (config, config_msg) = Config::load();
    if let Err(e) = logger::init(&config.log_level) {
        eprintln!("Logger already initialised: {}", e);
    }
    log::info!("{}", config_msg);

    // No lookup is possible without data
    let state = match AppState::from_config(&config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    run(state)
}

#[cfg(feature = "gui")]
fn run(state: AppState) -> ExitCode {
    let code = chemassist::ui::window::run(state);
    if code == gtk4::glib::ExitCode::SUCCESS {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(not(feature = "gui"))]
fn run(state: AppState) -> ExitCode {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match chemassist::ui::terminal::run(&state, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal I/O failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
