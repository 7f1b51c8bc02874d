mod app;

use std::env;
use std::process::ExitCode;

use app::{AppError, Args, USAGE_EXAMPLE};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

const EXIT_USAGE: u8 = 1;
const EXIT_FAILURE: u8 = 255;

fn main() -> ExitCode {
    if env::args_os().len() == 1 {
        println!("Usage: ");
        println!("{}", USAGE_EXAMPLE);
        return ExitCode::from(EXIT_USAGE);
    }

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // Not an error, just the requested text
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => return fail(&AppError::from(e)),
    };

    lib_recolor::init_logging(args.log_level());

    match app::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn fail(error: &AppError) -> ExitCode {
    log::error!("{:?}", error);
    match error {
        AppError::Args(e) => eprint!("\n{}", e),
        other => eprintln!("\nError: {}", other),
    }
    eprintln!("\n{}", Args::command().render_help());
    ExitCode::from(EXIT_FAILURE)
}
