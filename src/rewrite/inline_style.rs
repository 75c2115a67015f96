//! Inline `style="..."` attributes, treated as a flat declaration list.

use crate::resolve::ColorResolver;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref RE_STYLE_ATTR: Regex = Regex::new(
        r#"(?i)(^|\s)(style\s*=\s*)(?:"([^"]*)"|'([^']*)')"#
    ).unwrap();
}

/// Declarations whose value is a color
const COLOR_PROPERTIES: &[&str] = &[
    "fill",
    "stroke",
    "stop-color",
    "color",
    "background",
    "background-color",
];

const IMPORTANT: &str = "!important";

pub fn rewrite_inline_styles(markup: &str, resolver: &ColorResolver) -> (String, usize) {
    let mut count = 0;
    let out = RE_STYLE_ATTR.replace_all(markup, |caps: &Captures| {
        let (quote, value) = match (caps.get(3), caps.get(4)) {
            (Some(v), _) => ('"', v.as_str()),
            (None, Some(v)) => ('\'', v.as_str()),
            _ => return caps[0].to_string(),
        };
        let (style, n) = rewrite_declarations(value, resolver);
        if n == 0 {
            return caps[0].to_string();
        }
        count += n;
        format!("{}{}{}{}{}", &caps[1], &caps[2], quote, style, quote)
    });
    (out.into_owned(), count)
}

/// Rewrite color declarations of a `;`-separated style string.
///
/// Rewritten declarations come out as `property:value`; everything else is
/// kept byte for byte, including empty trailing segments.
pub fn rewrite_declarations(style: &str, resolver: &ColorResolver) -> (String, usize) {
    let mut count = 0;
    let declarations: Vec<String> = style
        .split(';')
        .map(|decl| match rewrite_declaration(decl, resolver) {
            Some(rewritten) => {
                count += 1;
                rewritten
            }
            None => decl.to_string(),
        })
        .collect();
    (declarations.join(";"), count)
}

fn rewrite_declaration(decl: &str, resolver: &ColorResolver) -> Option<String> {
    let (property, value) = decl.split_once(':')?;
    let property = property.trim();
    if !COLOR_PROPERTIES.contains(&property.to_ascii_lowercase().as_str()) {
        return None;
    }

    let value = value.trim();
    let (value, important) = match value.len().checked_sub(IMPORTANT.len()) {
        Some(at) if value.is_char_boundary(at) && value[at..].eq_ignore_ascii_case(IMPORTANT) => {
            (value[..at].trim_end(), true)
        }
        _ => (value, false),
    };

    let color = resolver.substitute(value)?;
    if important {
        Some(format!("{}:{} {}", property, color, IMPORTANT))
    } else {
        Some(format!("{}:{}", property, color))
    }
}
