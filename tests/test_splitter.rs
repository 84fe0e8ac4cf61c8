mod common;

use std::fs;

use htmlsplit::config::SiteLayout;
use htmlsplit::logger::{LogMode, Logger};
use htmlsplit::splitter::Splitter;
use htmlsplit::transform::{APP_SCRIPT, STYLESHEET_LINK};
use htmlsplit::SplitError;
use tempfile::TempDir;

fn splitter(dir: &TempDir) -> Splitter {
    Splitter::new(SiteLayout::new(dir.path()), Logger::new(LogMode::Quiet))
}

#[test]
fn extract_writes_assets_and_rewrites_index() {
    let doc = common::load_fixture("index.html");
    let dir = common::site_with(&doc);
    let splitter = splitter(&dir);

    let extraction = splitter.extract().unwrap();

    let css = fs::read_to_string(splitter.layout().css_file()).unwrap();
    let js = fs::read_to_string(splitter.layout().js_file()).unwrap();
    let html = fs::read_to_string(splitter.layout().index_html()).unwrap();

    assert_eq!(Some(css), extraction.css);
    assert_eq!(Some(js), extraction.js);
    assert_eq!(html, extraction.html);
    assert!(html.contains(STYLESHEET_LINK));
    assert!(html.contains(APP_SCRIPT));
    assert!(!html.contains("<style>"));
}

#[test]
fn extract_without_style_writes_no_css() {
    let dir = common::site_with("<body><script>go();</script></body>");
    let splitter = splitter(&dir);

    splitter.extract().unwrap();

    assert!(!splitter.layout().css_file().exists());
    assert!(!dir.path().join("css").exists());
    assert_eq!(
        fs::read_to_string(splitter.layout().js_file()).unwrap(),
        "go();"
    );
    assert_eq!(
        fs::read_to_string(splitter.layout().index_html()).unwrap(),
        format!("<body>{APP_SCRIPT}</body>")
    );
}

#[test]
fn extract_overwrites_existing_assets() {
    let dir = common::site_with("<style>new{}</style>");
    fs::create_dir_all(dir.path().join("css")).unwrap();
    fs::write(dir.path().join("css/styles.css"), "old{}").unwrap();

    splitter(&dir).extract().unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("css/styles.css")).unwrap(),
        "new{}"
    );
}

#[test]
fn extract_missing_index_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = splitter(&dir).extract().unwrap_err();

    assert!(matches!(err, SplitError::Io(_)));
}

#[test]
fn clean_rewrites_index() {
    let doc = common::load_fixture("head_residue.html");
    let dir = common::site_with(&doc);
    let splitter = splitter(&dir);

    let cleanup = splitter.clean().unwrap();
    let html = fs::read_to_string(splitter.layout().index_html()).unwrap();

    assert_eq!(html, cleanup.html);
    assert_eq!(html.chars().count() + cleanup.removed, doc.chars().count());
    assert!(!html.contains("border-radius"));
}

#[test]
fn clean_failure_leaves_file_unchanged() {
    let doc = "<head>\n<style>a{}</style>\n</head>";
    let dir = common::site_with(doc);
    let splitter = splitter(&dir);

    let err = splitter.clean().unwrap_err();

    assert!(matches!(err, SplitError::LinkTagMissing(_)));
    assert_eq!(
        fs::read(splitter.layout().index_html()).unwrap(),
        doc.as_bytes()
    );
}

#[test]
fn finish_without_changes_keeps_file() {
    let doc = "<html><head></head><body></body></html>";
    let dir = common::site_with(doc);
    let splitter = splitter(&dir);

    let finish = splitter.finish().unwrap();

    assert!(finish.removed.is_none());
    assert!(!finish.script_replaced);
    assert!(!splitter.layout().js_file().exists());
    assert_eq!(
        fs::read_to_string(splitter.layout().index_html()).unwrap(),
        doc
    );
}

#[test]
fn finish_writes_cleaned_index() {
    let doc = format!("<head>\n{STYLESHEET_LINK}\nleft{{}}\n</head><body></body>");
    let dir = common::site_with(&doc);
    let splitter = splitter(&dir);

    splitter.finish().unwrap();

    assert_eq!(
        fs::read_to_string(splitter.layout().index_html()).unwrap(),
        format!("<head>\n{STYLESHEET_LINK}\n</head><body></body>")
    );
}
