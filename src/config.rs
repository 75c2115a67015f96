//! Brand preset catalog loaded from JSON.
//!
//! ```json
//! { "brands": [ { "name": "Acme", "primary": "#FFD200", "secondary": "#000000" } ] }
//! ```

use crate::color::{is_preserved, parse_rgb};
use crate::types::Palette;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

/// A named palette
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BrandPreset {
    pub name: String,
    #[serde(flatten)]
    pub palette: Palette,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BrandCatalog {
    #[serde(default)]
    pub brands: Vec<BrandPreset>,
}

impl BrandCatalog {
    pub fn from_json(text: &str) -> Result<Self, String> {
        let catalog: BrandCatalog =
            serde_json::from_str(text).map_err(|e| format!("Invalid brand catalog: {}", e))?;
        for preset in &catalog.brands {
            if preset.palette.is_empty() {
                return Err(format!("Brand \"{}\" has no primary color", preset.name));
            }
            warn_unparsed(&preset.name, &preset.palette);
        }
        Ok(catalog)
    }

    /// Case-insensitive lookup by name
    pub fn find(&self, name: &str) -> Option<&BrandPreset> {
        let name = name.trim();
        self.brands.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> Vec<&str> {
        self.brands.iter().map(|b| b.name.as_str()).collect()
    }
}

pub fn load_catalog(path: &Path) -> Result<BrandCatalog, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
    BrandCatalog::from_json(&text)
}

/// Named brand colors are allowed, so this only warns
fn warn_unparsed(name: &str, palette: &Palette) {
    let roles = [
        Some(palette.primary.as_str()),
        palette.secondary(),
        palette.accent(),
    ];
    for color in roles.into_iter().flatten() {
        if parse_rgb(color).is_none() && !is_preserved(color) {
            warn!(brand = name, color, "brand color is not a hex or rgb() value");
        }
    }
}
