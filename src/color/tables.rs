//! Static classification tables.
//!
//! Entries are stored already normalized (lowercase, no whitespace) so lookups
//! compare against `normalize(token)` directly.

use crate::types::Role;
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Colors that are never rewritten
pub const PRESERVED: &[&str] = &[
    "white",
    "#fff",
    "#ffffff",
    "rgb(255,255,255)",
    "none",
    "transparent",
];

/// Paint values that are not colors and pass through every mode
pub const PAINT_KEYWORDS: &[&str] = &[
    "currentcolor",
    "inherit",
    "initial",
    "unset",
    "revert",
    "context-fill",
    "context-stroke",
];

/// Near-black outlines and fills
pub const PRIMARY: &[&str] = &[
    "#000",
    "#000000",
    "black",
    "rgb(0,0,0)",
    "#111",
    "#111111",
    "#1a1a1a",
    "#212121",
    "#222",
    "#222222",
    "#2d2d2d",
    "#333",
    "#333333",
    "rgb(51,51,51)",
];

/// Mid grays
pub const SECONDARY: &[&str] = &[
    "#444",
    "#444444",
    "#555",
    "#555555",
    "#666",
    "#666666",
    "#777",
    "#777777",
    "#808080",
    "gray",
    "grey",
    "#888",
    "#888888",
    "#999",
    "#999999",
    "rgb(102,102,102)",
    "rgb(128,128,128)",
];

/// Light grays
pub const ACCENT: &[&str] = &[
    "#aaa",
    "#aaaaaa",
    "#bbb",
    "#bbbbbb",
    "#c0c0c0",
    "silver",
    "#ccc",
    "#cccccc",
    "rgb(204,204,204)",
    "#d3d3d3",
    "lightgray",
    "lightgrey",
    "#ddd",
    "#dddddd",
    "#e0e0e0",
    "#eee",
    "#eeeeee",
    "#f5f5f5",
    "whitesmoke",
];

/// Role scan order
pub const ROLE_TABLE: &[(Role, &[&str])] = &[
    (Role::Primary, PRIMARY),
    (Role::Secondary, SECONDARY),
    (Role::Accent, ACCENT),
];

lazy_static! {
    pub static ref PRESERVED_SET: HashSet<&'static str> = PRESERVED.iter().copied().collect();

    /// Normalized token -> role, built from `ROLE_TABLE` in scan order
    pub static ref ROLE_INDEX: HashMap<&'static str, Role> = {
        let mut index = HashMap::new();
        for (role, tokens) in ROLE_TABLE {
            for token in tokens.iter() {
                index.entry(*token).or_insert(*role);
            }
        }
        index
    };
}
