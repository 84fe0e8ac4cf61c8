use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Temporary site directory with `index.html` set to `html`.
pub fn site_with(html: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), html).unwrap();
    dir
}
