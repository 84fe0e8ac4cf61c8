use std::process::ExitCode;

use htmlsplit::cli::{self, Command};
use htmlsplit::config::Config;
use htmlsplit::logger::{LogMode, Logger};
use htmlsplit::splitter::Splitter;
use htmlsplit::SplitResult;

fn run(args: cli::Args) -> SplitResult<()> {
    let config = Config::load()?.resolve(&args)?;
    let splitter = Splitter::new(config.layout, Logger::new(config.log_mode));

    match args.command {
        Command::Extract => splitter.extract().map(|_| ()),
        Command::Clean => splitter.clean().map(|_| ()),
        Command::Finish => splitter.finish().map(|_| ()),
        Command::Fix => splitter.fix().map(|_| ()),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();
    let log_mode = args.log_mode;

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            Logger::new(log_mode.unwrap_or(LogMode::Plain)).error(&err.to_string());
            ExitCode::from(1)
        }
    }
}
