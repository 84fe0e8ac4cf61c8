use std::fs;

use crate::config::SiteLayout;
use crate::logger::Logger;
use crate::models::{Cleanup, Extraction, Finish, Fix};
use crate::utils::write_asset;
use crate::{transform, SplitResult};

/// Runs the transformations against `index.html` in a site directory.
pub struct Splitter {
    layout: SiteLayout,
    logger: Logger,
}

impl Splitter {
    pub fn new(layout: SiteLayout, logger: Logger) -> Self {
        Self { layout, logger }
    }

    pub fn layout(&self) -> &SiteLayout {
        &self.layout
    }

    fn read_index(&self) -> SplitResult<String> {
        Ok(fs::read_to_string(self.layout.index_html())?)
    }

    pub fn extract(&self) -> SplitResult<Extraction> {
        let spinner = self
            .logger
            .add_spinner(Some(format!("Extracting {}", self.layout.index_html().display())))?;

        let doc = self.read_index()?;
        spinner.info(format!("File read, length: {}", doc.chars().count()));

        let extraction = transform::extract(&doc);

        match &extraction.css {
            Some(css) => {
                write_asset(&self.layout.css_file(), css)?;
                spinner.success(format!("CSS extracted: {} characters", css.chars().count()));
            }
            None => spinner.info("CSS not found".to_string()),
        }

        match &extraction.js {
            Some(js) => {
                write_asset(&self.layout.js_file(), js)?;
                spinner.success(format!(
                    "JavaScript extracted: {} characters",
                    js.chars().count()
                ));
            }
            None => spinner.info("JavaScript not found".to_string()),
        }

        fs::write(self.layout.index_html(), &extraction.html)?;
        if extraction.style_replaced() {
            spinner.success("Replaced <style> tag with <link>".to_string());
        }
        if extraction.script_replaced() {
            spinner.success("Replaced main <script> tag with <script src>".to_string());
        }
        spinner.success("HTML updated with external CSS and JS references".to_string());

        self.logger.finish_spinner(spinner);
        Ok(extraction)
    }

    /// Fails without touching the file when a marker is missing.
    pub fn clean(&self) -> SplitResult<Cleanup> {
        let spinner = self
            .logger
            .add_spinner(Some(format!("Cleaning {}", self.layout.index_html().display())))?;

        let doc = self.read_index()?;
        let cleanup = match transform::clean(&doc) {
            Ok(cleanup) => cleanup,
            Err(err) => {
                self.logger.finish_spinner(spinner);
                return Err(err);
            }
        };

        fs::write(self.layout.index_html(), &cleanup.html)?;
        spinner.success(format!(
            "Removed {} characters of CSS from HTML",
            cleanup.removed
        ));

        self.logger.finish_spinner(spinner);
        Ok(cleanup)
    }

    pub fn finish(&self) -> SplitResult<Finish> {
        let spinner = self
            .logger
            .add_spinner(Some(format!("Finishing {}", self.layout.index_html().display())))?;

        let doc = self.read_index()?;
        let finish = transform::finish(&doc);

        match finish.removed {
            Some(removed) => spinner.success(format!("Removed {removed} characters of CSS from HTML")),
            None => spinner.info("Could not find CSS section to remove".to_string()),
        }
        if finish.script_replaced {
            spinner.success("Replaced main <script> tag with <script src>".to_string());
        }

        if finish.html != doc {
            fs::write(self.layout.index_html(), &finish.html)?;
            spinner.success("HTML updated".to_string());
        } else {
            spinner.info("Nothing to change".to_string());
        }

        self.logger.finish_spinner(spinner);
        Ok(finish)
    }

    /// Fails without touching any file when a marker is missing.
    pub fn fix(&self) -> SplitResult<Fix> {
        let spinner = self
            .logger
            .add_spinner(Some(format!("Fixing {}", self.layout.index_html().display())))?;

        let doc = self.read_index()?;
        let fix = match transform::fix(&doc) {
            Ok(fix) => fix,
            Err(err) => {
                self.logger.finish_spinner(spinner);
                return Err(err);
            }
        };

        write_asset(&self.layout.css_file(), &fix.css)?;
        spinner.success(format!("CSS extracted: {} characters", fix.css.chars().count()));

        match &fix.js {
            Some(js) => {
                write_asset(&self.layout.js_file(), js)?;
                spinner.success(format!(
                    "JavaScript extracted: {} characters",
                    js.chars().count()
                ));
                spinner.success("Replaced inline script with external reference".to_string());
            }
            None => {
                if let Some(js_dir) = self.layout.js_file().parent() {
                    fs::create_dir_all(js_dir)?;
                }
                spinner.info("JavaScript not found".to_string());
            }
        }

        fs::write(self.layout.index_html(), &fix.html)?;
        spinner.success("HTML updated".to_string());

        self.logger.finish_spinner(spinner);
        Ok(fix)
    }
}
