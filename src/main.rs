// sortviz: animated sorting algorithms in the terminal

use clap::Parser;
use tracing::info;

use sortviz::config::{Args, Config};
use sortviz::logging;
use sortviz::ui::{App, TerminalSession};
use sortviz::visualizer::Visualizer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let _log_guard = match logging::init(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    info!(
        length = config.list.length(),
        min = config.list.min(),
        max = config.list.max(),
        fps = config.fps,
        seed = ?config.seed,
        "starting"
    );

    let visualizer =
        Visualizer::new(config.list, config.seed).with_selection(config.algorithm, config.order);
    let mut app = App::new(visualizer, config.frame_budget());

    // The session restores the terminal when it goes out of scope
    let res = {
        let mut session = TerminalSession::start()?;
        app.run(session.terminal_mut())
    };
    res?;

    info!("exiting");
    Ok(())
}
