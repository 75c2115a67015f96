//! Markup rewriter - recolors SVG text without building a DOM.
//!
//! Three constructs are rewritten, each by one left-to-right scan:
//! - color attributes (attributes::rewrite_attributes)
//! - inline style attributes (inline_style::rewrite_inline_styles)
//! - `<style>` blocks (style_block::rewrite_style_blocks)
//!
//! Each scan only touches its own construct, so a color written by one pass is
//! never seen again by another. The gradient definition is spliced in after
//! the scans so its stop colors are emitted verbatim.

mod attributes;
pub mod gradient;
mod inline_style;
mod style_block;

pub use attributes::rewrite_attributes;
pub use gradient::{GradientDescriptor, GradientStop};
pub use inline_style::{rewrite_declarations, rewrite_inline_styles};
pub use style_block::{rewrite_css, rewrite_style_blocks};

use crate::resolve::ColorResolver;
use crate::types::{Mode, Palette};
use tracing::{debug, warn};

/// Recolor `markup` onto `palette` under `mode`.
///
/// Never fails. Empty markup or an empty primary returns the input unchanged.
/// Gradient mode needs both `primary` and `secondary`; without them, or without
/// an `<svg>` tag to hang the definition on, primary-role colors are written as
/// plain `primary`.
pub fn recolor(markup: &str, palette: &Palette, mode: Mode) -> String {
    let id = match mode {
        Mode::Gradient => gradient::fresh_id(),
        _ => String::new(),
    };
    recolor_with_gradient_id(markup, palette, mode, &id)
}

/// [`recolor`] with a caller-chosen gradient id.
///
/// `gradient_id` is ignored outside gradient mode.
pub fn recolor_with_gradient_id(markup: &str, palette: &Palette, mode: Mode, gradient_id: &str) -> String {
    if markup.trim().is_empty() || palette.is_empty() {
        debug!("nothing to recolor: empty markup or palette");
        return markup.to_string();
    }

    let gradient = match mode {
        Mode::Gradient => gradient_setup(markup, palette, gradient_id),
        _ => None,
    };

    let resolver = ColorResolver::new(palette, mode, gradient.as_ref().map(|g| g.id.as_str()));

    let (out, attrs) = rewrite_attributes(markup, &resolver);
    let (out, inline) = rewrite_inline_styles(&out, &resolver);
    let (out, css) = rewrite_style_blocks(&out, &resolver);
    debug!(%mode, attrs, inline, css, "recolored markup");

    match gradient {
        Some(g) => match gradient::inject_definition(&out, &g.to_svg()) {
            Some(injected) => {
                debug!(id = %g.id, "injected gradient definition");
                injected
            }
            None => out,
        },
        None => out,
    }
}

fn gradient_setup(markup: &str, palette: &Palette, gradient_id: &str) -> Option<GradientDescriptor> {
    if gradient_id.trim().is_empty() {
        warn!("gradient mode without a gradient id, using primary");
        return None;
    }
    if !gradient::has_injection_point(markup) {
        warn!("gradient mode without an <svg> or <defs> tag, using primary");
        return None;
    }
    let descriptor = GradientDescriptor::from_palette(gradient_id, palette);
    if descriptor.is_none() {
        warn!("gradient mode needs a secondary color, using primary");
    }
    descriptor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DUOTONE_OUTLINE;

    fn brand() -> Palette {
        Palette::new("#FFD200").with_secondary("#000000").with_accent("#F5F5F5")
    }

    #[test]
    fn test_empty_inputs_unchanged() {
        assert_eq!(recolor("", &brand(), Mode::Primary), "");
        let markup = r##"<svg><path fill="#000"/></svg>"##;
        assert_eq!(recolor(markup, &Palette::new(" "), Mode::Primary), markup);
    }

    #[test]
    fn test_all_three_constructs() {
        let markup = r##"<svg><style>.a{stroke:#333}</style><path fill="#000" style="stroke:#666"/></svg>"##;
        let out = recolor(markup, &brand(), Mode::Primary);
        assert_eq!(
            out,
            r##"<svg><style>.a{stroke:#FFD200}</style><path fill="#FFD200" style="stroke:#000000"/></svg>"##
        );
    }

    #[test]
    fn test_gradient_mode() {
        let markup = r##"<svg viewBox="0 0 24 24"><path fill="#000"/><path stroke="black"/></svg>"##;
        let out = recolor_with_gradient_id(markup, &brand(), Mode::Gradient, "g1");
        assert_eq!(
            out,
            concat!(
                r##"<svg viewBox="0 0 24 24"><defs><linearGradient id="g1" x1="0%" y1="0%" x2="100%" y2="100%">"##,
                r##"<stop offset="0%" stop-color="#FFD200"/><stop offset="100%" stop-color="#000000"/>"##,
                r##"</linearGradient></defs><path fill="url(#g1)"/><path stroke="url(#g1)"/></svg>"##
            )
        );
    }

    #[test]
    fn test_gradient_stops_are_not_rewritten() {
        // secondary #000000 is itself a primary-role color
        let out = recolor_with_gradient_id("<svg></svg>", &brand(), Mode::Gradient, "g1");
        assert!(out.contains(r##"stop-color="#000000""##));
        assert!(!out.contains("stop-color=\"url("));
    }

    #[test]
    fn test_gradient_without_secondary_falls_back() {
        let palette = Palette::new("#FFD200");
        let out = recolor(r##"<svg><path fill="#000"/></svg>"##, &palette, Mode::Gradient);
        assert_eq!(out, r##"<svg><path fill="#FFD200"/></svg>"##);
    }

    #[test]
    fn test_gradient_joins_defs_with_trailing_whitespace() {
        for open in ["<defs >", "<defs\n>"] {
            let markup = format!(r##"<svg>{}<clipPath id="c"/></defs><path fill="#000"/></svg>"##, open);
            let out = recolor_with_gradient_id(&markup, &brand(), Mode::Gradient, "g1");
            assert_eq!(out.matches("<defs").count(), 1, "{:?}", open);
            assert!(out.contains(r##"<clipPath id="c"/><linearGradient id="g1""##));
            assert!(out.ends_with(r##"</linearGradient></defs><path fill="url(#g1)"/></svg>"##));
        }
    }

    #[test]
    fn test_blank_secondary_is_ignored() {
        let palette = Palette::new("#FFD200").with_secondary("");
        let markup = r##"<svg><path fill="#000" stroke="#666"/></svg>"##;
        let expected = r##"<svg><path fill="#FFD200" stroke="#666"/></svg>"##;
        assert_eq!(recolor(markup, &palette, Mode::Secondary), expected);
        assert_eq!(recolor(markup, &palette, Mode::Gradient), expected);
    }

    #[test]
    fn test_gradient_without_svg_tag_falls_back() {
        let out = recolor(r##"<path fill="#000"/>"##, &brand(), Mode::Gradient);
        assert_eq!(out, r##"<path fill="#FFD200"/>"##);
    }

    #[test]
    fn test_duotone_outline() {
        let out = recolor(r##"<svg><path stroke="#111" fill="#E35724"/></svg>"##, &brand(), Mode::DuoSecondary);
        assert_eq!(
            out,
            format!(r##"<svg><path stroke="{}" fill="#000000"/></svg>"##, DUOTONE_OUTLINE)
        );
    }
}
