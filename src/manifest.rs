//! Icon section of a browser-extension `manifest.json`
//!
//! Extensions declare their icons twice: once under the top-level `icons`
//! key and once under `action.default_icon`. This module mirrors that shape
//! so the generated `icons.json` can be merged into a manifest as-is.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// File name the fragment is written to
pub const MANIFEST_FILE: &str = "icons.json";

/// Root of the manifest fragment
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IconManifest {
    /// Icons shown on the extensions page and in the store, keyed by edge length
    pub icons: BTreeMap<String, String>,

    /// Toolbar button icons
    pub action: Action,

    #[serde(skip)]
    prefix: String,
}

/// The `action` key of the manifest
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Action {
    pub default_icon: BTreeMap<String, String>,
}

impl IconManifest {
    /// Creates an empty manifest whose paths are relative to `prefix`
    ///
    /// # Arguments
    /// * `prefix` - Directory the icons live in, relative to the extension root
    pub fn new(prefix: String) -> Self {
        Self {
            icons: BTreeMap::new(),
            action: Action::default(),
            prefix,
        }
    }

    /// Registers `icon{size}.png` under both icon maps
    pub fn add_icon(&mut self, size: u32) {
        let path = icon_path(&self.prefix, size);
        self.icons.insert(size.to_string(), path.clone());
        self.action.default_icon.insert(size.to_string(), path);
    }
}

/// File name of the PNG rendered for `size`
pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

fn icon_path(prefix: &str, size: u32) -> String {
    if prefix.is_empty() {
        icon_filename(size)
    } else {
        format!("{}/{}", prefix.trim_end_matches('/'), icon_filename(size))
    }
}

/// Write `icons.json` into `dir` with one entry per size
pub fn write_icon_manifest(dir: &Path, prefix: &str, sizes: &[u32]) -> Result<()> {
    let mut manifest = IconManifest::new(prefix.to_string());

    for &size in sizes {
        manifest.add_icon(size);
    }

    let manifest_path = dir.join(MANIFEST_FILE);
    let manifest_json =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize icons.json")?;

    std::fs::write(&manifest_path, manifest_json).context("Failed to write icons.json file")?;

    println!("✓ Created {MANIFEST_FILE}");
    Ok(())
}
