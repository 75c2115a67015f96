//! Batch recoloring of many icons with one palette and mode.

use crate::export::export_file_name;
use crate::rewrite::recolor;
use crate::types::{Mode, Palette};
use rayon::prelude::*;

/// A named SVG document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub markup: String,
}

impl Icon {
    pub fn new(name: &str, markup: &str) -> Self {
        Self {
            name: name.to_string(),
            markup: markup.to_string(),
        }
    }
}

/// Recolor every icon in parallel.
///
/// Output order matches input order and each output is named by
/// [`export_file_name`]. Gradient mode gives every icon its own gradient id.
pub fn recolor_batch(icons: &[Icon], palette: &Palette, mode: Mode) -> Vec<Icon> {
    icons
        .par_iter()
        .map(|icon| Icon {
            name: export_file_name(&icon.name, mode),
            markup: recolor(&icon.markup, palette, mode),
        })
        .collect()
}
