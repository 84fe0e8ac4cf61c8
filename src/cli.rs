use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::logger::LogMode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Site directory holding index.html
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    #[arg(short, long, value_enum)]
    log_mode: Option<LogMode>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Move inline <style> and main <script> into css/styles.css and js/app.js
    Extract,
    /// Remove leftover head content after the stylesheet link
    Clean,
    /// Clean the head if possible and externalize a leftover main script
    Finish,
    /// Move CSS left between the stylesheet link and </head>, and the body script, into assets
    Fix,
}

#[derive(Debug)]
pub struct Args {
    pub dir: PathBuf,
    pub log_mode: Option<LogMode>,
    pub command: Command,
}

impl From<CliArgs> for Args {
    fn from(cli: CliArgs) -> Self {
        Args {
            dir: cli.dir,
            log_mode: cli.log_mode,
            command: cli.command,
        }
    }
}

pub fn parse() -> Args {
    CliArgs::parse().into()
}

pub fn parse_from<I, T>(itr: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Ok(CliArgs::try_parse_from(itr)?.into())
}
