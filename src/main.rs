use std::io::{self, Cursor};
use std::process::ExitCode;

use log::info;
use word_guess_game::cli::{CliInterface, DEMO_SCRIPT, build_game, parse_cli};
use word_guess_game::{game_loop, logging};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);

    let mut game = match build_game(&cli) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let summary = if cli.demo {
        game_loop(&mut game, &mut CliInterface::new(Cursor::new(DEMO_SCRIPT)))
    } else {
        game_loop(&mut game, &mut CliInterface::new(io::stdin().lock()))
    };
    info!(
        "Session over: {} submissions, {} rejected, complete: {}",
        summary.submissions, summary.rejections, summary.completed
    );

    ExitCode::SUCCESS
}
