//! brandsvg - Recolor SVG icons onto a brand palette
//!
//! This library rewrites the colors embedded in SVG markup (presentation
//! attributes, inline styles and `<style>` blocks) so an icon set picks up a
//! brand's primary, secondary and accent colors.
//!
//! # Example
//!
//! ```rust
//! use brandsvg::{recolor, Mode, Palette};
//!
//! let palette = Palette::new("#FFD200").with_secondary("#000000");
//! let svg = recolor(r##"<svg><path fill="#000000"/></svg>"##, &palette, Mode::Primary);
//! assert_eq!(svg, r##"<svg><path fill="#FFD200"/></svg>"##);
//! ```
//!
//! # Modes
//!
//! - `primary` / `secondary`: near-black source colors take that brand color
//! - `gradient`: near-black source colors reference an injected linear gradient
//! - `duo-primary` / `duo-secondary`: two-tone, dark outline plus one brand color

pub mod types;
pub mod color;
pub mod resolve;
pub mod rewrite;
pub mod export;
pub mod batch;
pub mod config;

pub use types::*;
pub use resolve::{resolve, ColorResolver};
pub use rewrite::{recolor, recolor_with_gradient_id};
pub use export::{export_file_name, to_blob, to_data_uri};
pub use batch::{recolor_batch, Icon};
pub use config::{load_catalog, BrandCatalog, BrandPreset};
