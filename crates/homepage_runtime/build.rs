use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const HOME_WINDOW_ID: &str = "homeWindow";
const DRAG_BINDINGS: [&str; 3] = ["static", "whole_surface", "handle"];
const CONTENT_KINDS: [&str; 3] = ["launcher", "text", "guestbook"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SiteManifest {
    title: String,
    owner: String,
    description: String,
    music_src: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManifest {
    id: String,
    title: String,
    top: i32,
    left: i32,
    z_index: Option<String>,
    open: bool,
    drag: String,
    content: toml::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogManifest {
    schema_version: u32,
    site: SiteManifest,
    windows: Vec<WindowManifest>,
}

fn validate(catalog: &CatalogManifest, path: &str) {
    if catalog.schema_version != 1 {
        panic!(
            "window catalog schema mismatch in {path}: expected 1 found {}",
            catalog.schema_version
        );
    }

    let mut seen = HashSet::new();
    for window in &catalog.windows {
        if !seen.insert(window.id.as_str()) {
            panic!("duplicate window id `{}` in {path}", window.id);
        }
        if !DRAG_BINDINGS.contains(&window.drag.as_str()) {
            panic!(
                "window `{}` in {path} has unknown drag binding `{}`",
                window.id, window.drag
            );
        }
        if window.id == HOME_WINDOW_ID && window.drag != "static" {
            panic!("`{HOME_WINDOW_ID}` in {path} must use drag = \"static\"");
        }
        let kind = window
            .content
            .get("kind")
            .and_then(toml::Value::as_str)
            .unwrap_or_else(|| panic!("window `{}` in {path} has no content kind", window.id));
        if !CONTENT_KINDS.contains(&kind) {
            panic!(
                "window `{}` in {path} has unknown content kind `{kind}`",
                window.id
            );
        }
    }

    if !seen.contains(HOME_WINDOW_ID) {
        panic!("{path} must declare `{HOME_WINDOW_ID}`");
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("windows.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: CatalogManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&catalog, &path.display().to_string());

    let json = serde_json::to_string_pretty(&catalog).expect("serialize window catalog");
    let generated = format!(
        "/// Build-time generated window catalog JSON.\n\
pub const WINDOW_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("window_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
