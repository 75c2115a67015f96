//! Color classifier - normalization, table lookups and RGB heuristics.

mod classify;
pub mod tables;

pub use classify::{
    is_chromatic, is_dark, is_hex_literal, is_paint_reference, is_preserved, normalize, parse_rgb,
    role_of,
};
