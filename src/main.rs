//! Headless brickfall runner (default binary).
//!
//! Plays a game with the built-in placement search and prints a summary. Per-lock progress
//! goes to stderr with `--verbose`.

use anyhow::Result;

use brickfall::driver::{parse_driver_args, run_autoplay, USAGE};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_driver_args(&args).map_err(|e| e.context(USAGE))? else {
        println!("{}", USAGE);
        return Ok(());
    };

    if config.verbose {
        eprintln!("[brickfall] mode={} seed={}", config.mode.as_str(), config.seed);
    }

    let summary = run_autoplay(&config, |session, data| {
        if !config.verbose {
            return;
        }
        let lines = data.clear_row.as_ref().map_or(0, |c| c.lines_removed);
        eprintln!(
            "[brickfall] piece={} lines={} score={} next={}{}",
            session.stats().pieces_locked,
            lines,
            session.score(),
            session.board().active_kind().as_str(),
            if data.game_over { " GAME OVER" } else { "" }
        );
    });

    println!("{}", summary);
    Ok(())
}
