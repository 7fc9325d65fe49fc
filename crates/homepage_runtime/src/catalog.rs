//! Static window catalog and site settings, compiled in from `windows.toml`.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::{
    model::{
        DragBinding, WindowContent, WindowId, WindowPosition, WindowRecord, WindowState,
    },
    z_order::parse_z_index,
};

include!(concat!(env!("OUT_DIR"), "/window_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub owner: String,
    pub description: String,
    pub music_src: String,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogWindow {
    id: String,
    title: String,
    top: i32,
    left: i32,
    z_index: Option<String>,
    open: bool,
    drag: DragBinding,
    content: WindowContent,
}

#[derive(Debug, Clone, Deserialize)]
struct Catalog {
    site: SiteConfig,
    windows: Vec<CatalogWindow>,
}

fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(WINDOW_CATALOG_JSON).expect("generated window catalog should parse")
    })
}

pub fn site_config() -> &'static SiteConfig {
    &catalog().site
}

/// Builds the page's windows in declaration order. Windows declared closed start minimized.
pub fn initial_windows() -> Vec<WindowRecord> {
    catalog()
        .windows
        .iter()
        .map(|entry| WindowRecord {
            id: WindowId::new(entry.id.clone()),
            title: entry.title.clone(),
            position: WindowPosition {
                top: entry.top,
                left: entry.left,
            },
            z_index: entry.z_index.as_deref().and_then(parse_z_index),
            state: if entry.open {
                WindowState::Normal
            } else {
                WindowState::Minimized
            },
            drag: entry.drag,
            content: entry.content.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::HOME_WINDOW_ID;

    #[test]
    fn catalog_declares_a_static_home_window() {
        let windows = initial_windows();
        let home = windows
            .iter()
            .find(|w| w.id.as_str() == HOME_WINDOW_ID)
            .expect("home window");
        assert_eq!(home.drag, DragBinding::Static);
        assert!(!home.is_draggable());
        assert_eq!(home.content, WindowContent::Launcher);
    }

    #[test]
    fn catalog_ids_are_unique() {
        let windows = initial_windows();
        let mut ids: Vec<&str> = windows.iter().map(|w| w.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), windows.len());
    }

    #[test]
    fn unparsable_declared_z_index_reads_as_missing() {
        let windows = initial_windows();
        let sticky = windows
            .iter()
            .find(|w| w.id.as_str() == "stickyWindow")
            .expect("sticky window");
        assert_eq!(sticky.z_index, None);
    }

    #[test]
    fn site_config_is_populated() {
        assert!(!site_config().owner.is_empty());
        assert!(!site_config().title.is_empty());
    }
}
