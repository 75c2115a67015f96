//! Token normalization and classification

use super::tables::{PAINT_KEYWORDS, PRESERVED_SET, ROLE_INDEX};
use crate::types::{Rgb, Role};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref RE_RGB_FUNC: Regex = Regex::new(r"^rgb\((\d{1,3}),(\d{1,3}),(\d{1,3})\)$").unwrap();
}

/// Lowercase, trim and strip all whitespace.
///
/// `"RGB(0, 0, 0)"` and `"rgb(0,0,0)"` normalize to the same key.
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

pub fn is_preserved(token: &str) -> bool {
    PRESERVED_SET.contains(normalize(token).as_str())
}

/// `url(...)`, `var(...)` or a keyword such as `currentColor`
pub fn is_paint_reference(token: &str) -> bool {
    let token = normalize(token);
    token.starts_with("url(") || token.starts_with("var(") || PAINT_KEYWORDS.contains(&token.as_str())
}

/// Role whose table lists this token, if any
pub fn role_of(token: &str) -> Option<Role> {
    ROLE_INDEX.get(normalize(token).as_str()).copied()
}

/// `#` followed by exactly 3 or 6 hex digits
pub fn is_hex_literal(token: &str) -> bool {
    match token.trim().strip_prefix('#') {
        Some(digits) => {
            (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Parse `#rgb`, `#rrggbb` or `rgb(r,g,b)`.
///
/// Named colors and anything malformed return `None`.
pub fn parse_rgb(token: &str) -> Option<Rgb> {
    let token = normalize(token);

    if let Some(digits) = token.strip_prefix('#') {
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return match digits.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|n| n * 17);
                Some(Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
                Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        };
    }

    let caps = RE_RGB_FUNC.captures(&token)?;
    let channel = |i: usize| caps[i].parse::<u8>().ok();
    Some(Rgb::new(channel(1)?, channel(2)?, channel(3)?))
}

/// Channels differ by more than 10, i.e. the color carries a visible hue
pub fn is_chromatic(token: &str) -> bool {
    parse_rgb(token).is_some_and(|rgb| rgb.max_channel_diff() > 10)
}

/// Luma below 80 out of 255
pub fn is_dark(token: &str) -> bool {
    parse_rgb(token).is_some_and(|rgb| rgb.luma() < 80.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  RGB(0, 0, 0) "), "rgb(0,0,0)");
        assert_eq!(normalize("#FFD200"), "#ffd200");
        assert_eq!(normalize("White"), "white");
    }

    #[test]
    fn test_preserved() {
        assert!(is_preserved("white"));
        assert!(is_preserved("#FFF"));
        assert!(is_preserved("#FFFFFF"));
        assert!(is_preserved("rgb(255, 255, 255)"));
        assert!(is_preserved("None"));
        assert!(is_preserved("transparent"));
        assert!(!is_preserved("#fffffe"));
        assert!(!is_preserved("whitesmoke"));
    }

    #[test]
    fn test_paint_reference() {
        assert!(is_paint_reference("url(#grad)"));
        assert!(is_paint_reference("URL( #grad )"));
        assert!(is_paint_reference("var(--brand)"));
        assert!(is_paint_reference("currentColor"));
        assert!(!is_paint_reference("#000"));
        assert!(!is_paint_reference("navy"));
    }

    #[test]
    fn test_role_lookup_is_exact() {
        assert_eq!(role_of("#000000"), Some(Role::Primary));
        assert_eq!(role_of("BLACK"), Some(Role::Primary));
        assert_eq!(role_of("rgb(0, 0, 0)"), Some(Role::Primary));
        assert_eq!(role_of("#666"), Some(Role::Secondary));
        assert_eq!(role_of("#CCC"), Some(Role::Accent));
        assert_eq!(role_of("#0000"), None);
        assert_eq!(role_of("darkgray"), None);
        assert_eq!(role_of("#E35724"), None);
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("#abc"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!(parse_rgb("#E35724"), Some(Rgb::new(0xe3, 0x57, 0x24)));
        assert_eq!(parse_rgb("rgb( 10, 20 ,30 )"), Some(Rgb::new(10, 20, 30)));
        assert_eq!(parse_rgb("rgb(256,0,0)"), None);
        assert_eq!(parse_rgb("rgba(0,0,0,0.5)"), None);
        assert_eq!(parse_rgb("#abcd"), None);
        assert_eq!(parse_rgb("#ggg"), None);
        assert_eq!(parse_rgb("red"), None);
        assert_eq!(parse_rgb(""), None);
    }

    #[test]
    fn test_chromatic_threshold() {
        assert!(!is_chromatic("#808080"));
        // max diff exactly 10 is still gray
        assert!(!is_chromatic("rgb(100,110,105)"));
        assert!(is_chromatic("rgb(100,111,105)"));
        assert!(is_chromatic("#E35724"));
        assert!(!is_chromatic("red"));
    }

    #[test]
    fn test_dark_threshold() {
        assert!(is_dark("#000"));
        assert!(is_dark("#404040"));
        assert!(!is_dark("#505050"));
        assert!(!is_dark("#ffd200"));
        assert!(!is_dark("black"));
    }

    #[test]
    fn test_hex_literal() {
        assert!(is_hex_literal("#abc"));
        assert!(is_hex_literal("#A1B2C3"));
        assert!(!is_hex_literal("#abcd"));
        assert!(!is_hex_literal("#add-button"));
        assert!(!is_hex_literal("abc"));
    }
}
