use std::io;
use std::process::ExitCode;

use chess_ai::console::{Console, ConsoleOptions};

fn main() -> ExitCode {
    env_logger::init();

    let options = match ConsoleOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("usage: chess_ai [--depth N] [--white] [--seed N] [--no-book] [--info]");
            return ExitCode::from(2);
        }
    };
    log::info!("starting console with {options:?}");

    let console = Console::new(&options);
    let stdin = io::stdin();
    // Not locked for the whole session: the search logger prints from the worker thread.
    let mut stdout = io::stdout();

    match console.run(stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("console i/o failed: {e}");
            ExitCode::FAILURE
        }
    }
}
