//! Gradient definition synthesis and `<defs>` injection.

use crate::types::Palette;
use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;

lazy_static! {
    static ref RE_DEFS_BLOCK: Regex = Regex::new(r"(?is)<defs(?:\s[^>]*)?>.*?(</defs\s*>)").unwrap();
    static ref RE_DEFS_EMPTY: Regex = Regex::new(r"(?i)<defs\b[^>]*/>").unwrap();
    static ref RE_SVG_OPEN: Regex = Regex::new(r"(?i)<svg\b[^>]*>").unwrap();
}

/// One color stop of a linear gradient
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientStop {
    pub offset: String,
    pub color: String,
}

/// Two-stop gradient from brand primary to brand secondary.
///
/// Built and serialized within a single recolor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientDescriptor {
    pub id: String,
    pub stops: Vec<GradientStop>,
}

impl GradientDescriptor {
    /// Returns `None` unless the palette has both primary and secondary
    pub fn from_palette(id: &str, palette: &Palette) -> Option<Self> {
        if !palette.supports_gradient() {
            return None;
        }
        let secondary = palette.secondary()?;
        Some(Self {
            id: id.to_string(),
            stops: vec![
                GradientStop {
                    offset: "0%".to_string(),
                    color: palette.primary.clone(),
                },
                GradientStop {
                    offset: "100%".to_string(),
                    color: secondary.to_string(),
                },
            ],
        })
    }

    pub fn to_svg(&self) -> String {
        let stops: String = self
            .stops
            .iter()
            .map(|stop| {
                format!(
                    r#"<stop offset="{}" stop-color="{}"/>"#,
                    stop.offset,
                    escape_attr(&stop.color)
                )
            })
            .collect();
        format!(
            r#"<linearGradient id="{}" x1="0%" y1="0%" x2="100%" y2="100%">{}</linearGradient>"#,
            escape_attr(&self.id),
            stops
        )
    }
}

/// Fresh gradient id, unique enough that two icons recolored into the same
/// page do not collide
pub fn fresh_id() -> String {
    let suffix: u64 = rand::thread_rng().gen();
    format!("brand-gradient-{:016x}", suffix)
}

/// Whether `markup` has a place a `<defs>` entry can go
pub fn has_injection_point(markup: &str) -> bool {
    RE_DEFS_BLOCK.is_match(markup) || RE_DEFS_EMPTY.is_match(markup) || RE_SVG_OPEN.is_match(markup)
}

/// Insert `definition` as the last child of the first `<defs>` element, or in
/// a new `<defs>` right after the opening `<svg>` tag.
///
/// Returns `None` when neither exists.
pub fn inject_definition(markup: &str, definition: &str) -> Option<String> {
    let block = RE_DEFS_BLOCK.captures(markup);
    let empty = RE_DEFS_EMPTY.find(markup);

    // a self-closing <defs/> may come before the first paired block; the block
    // pattern can start at `<defs />` too, so ties go to the self-closing tag
    let empty_first = match (&block, empty) {
        (Some(caps), Some(m)) => m.start() <= caps.get(0).map_or(usize::MAX, |b| b.start()),
        (None, Some(_)) => true,
        _ => false,
    };

    if empty_first {
        let m = empty?;
        let open = markup[m.start()..m.end()].trim_end_matches("/>").trim_end();
        return Some(format!(
            "{}{}>{}</defs>{}",
            &markup[..m.start()],
            open,
            definition,
            &markup[m.end()..]
        ));
    }

    if let Some(caps) = block {
        let close = caps.get(1)?;
        return Some(format!(
            "{}{}{}",
            &markup[..close.start()],
            definition,
            &markup[close.start()..]
        ));
    }

    let open = RE_SVG_OPEN.find(markup)?;
    Some(format!(
        "{}<defs>{}</defs>{}",
        &markup[..open.end()],
        definition,
        &markup[open.end()..]
    ))
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
