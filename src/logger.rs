use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use std::time::Duration;

use crate::error::{SplitError, SplitResult};

#[derive(Clone, Copy, ValueEnum, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogMode {
    Quiet,
    Plain,
    Fancy,
}

pub struct Logger {
    mode: LogMode,
}

impl Logger {
    pub fn new(mode: LogMode) -> Self {
        Self { mode }
    }

    pub fn add_spinner(&self, msg: Option<String>) -> SplitResult<MaybeSpinner> {
        let inner = match self.mode {
            LogMode::Fancy => {
                let spinner = new_spinner()?;
                if let Some(ref msg) = msg {
                    spinner.set_message(msg.clone());
                }
                Some(spinner)
            }
            LogMode::Plain => {
                if let Some(ref msg) = msg {
                    println!("[INFO] {msg}");
                }
                None
            }
            LogMode::Quiet => None,
        };

        Ok(MaybeSpinner {
            inner,
            mode: self.mode,
        })
    }

    pub fn finish_spinner(&self, spinner: MaybeSpinner) {
        if let Some(bar) = spinner.inner {
            bar.finish_and_clear();
        }
    }

    /// Errors are printed in every mode.
    pub fn error(&self, msg: &str) {
        eprintln!("[ERROR] {msg}");
    }
}

// -- Null-object wrapper -----------------------------------------------------

pub struct MaybeSpinner {
    inner: Option<ProgressBar>,
    mode: LogMode,
}

impl MaybeSpinner {
    pub fn info(&self, msg: String) {
        match self.mode {
            LogMode::Fancy => {
                if let Some(ref s) = self.inner {
                    s.println(format!("  {msg}"));
                }
            }
            LogMode::Plain => println!("[INFO] {msg}"),
            LogMode::Quiet => {}
        }
    }

    pub fn success(&self, msg: String) {
        match self.mode {
            LogMode::Fancy => {
                if let Some(ref s) = self.inner {
                    s.println(format!("✅ {msg}"));
                }
            }
            LogMode::Plain => println!("[SUCCESS] {msg}"),
            LogMode::Quiet => {}
        }
    }
}

fn new_spinner() -> SplitResult<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner} {msg}")
        .map_err(|e| SplitError::Logger(e.to_string()))?;
    spinner.set_style(style);
    spinner.enable_steady_tick(Duration::from_millis(50));
    Ok(spinner)
}
