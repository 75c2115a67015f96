//! Embedded `<style>` CSS blocks.
//!
//! The block body is scanned once for color-like tokens. Each token is matched
//! whole against the role table, so `#000` never fires inside `#0000ff` and
//! `gray` never fires inside `darkgray`. Bare hex literals outside the table go
//! through the chromatic / dark heuristics.

use crate::color::{is_hex_literal, role_of};
use crate::resolve::ColorResolver;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref RE_STYLE_BLOCK: Regex = Regex::new(r"(?is)(<style\b[^>]*>)(.*?)(</style\s*>)").unwrap();

    // Alternation order matters: url() and rgb() before bare identifiers.
    static ref RE_CSS_TOKEN: Regex = Regex::new(
        r"(?i)url\([^)]*\)|rgb\s*\([^)]*\)|#[\w-]+|-*[a-z][\w-]*"
    ).unwrap();
}

pub fn rewrite_style_blocks(markup: &str, resolver: &ColorResolver) -> (String, usize) {
    let mut count = 0;
    let out = RE_STYLE_BLOCK.replace_all(markup, |caps: &Captures| {
        let (css, n) = rewrite_css(&caps[2], resolver);
        count += n;
        format!("{}{}{}", &caps[1], css, &caps[3])
    });
    (out.into_owned(), count)
}

/// Rewrite color tokens of a CSS body
pub fn rewrite_css(css: &str, resolver: &ColorResolver) -> (String, usize) {
    let mut count = 0;
    let out = RE_CSS_TOKEN.replace_all(css, |caps: &Captures| {
        let token = &caps[0];
        if !is_candidate(token) {
            return token.to_string();
        }
        match resolver.substitute(token) {
            Some(color) => {
                count += 1;
                color
            }
            None => token.to_string(),
        }
    });
    (out.into_owned(), count)
}

/// Role-table colors of any form, plus bare 3/6-digit hex literals
fn is_candidate(token: &str) -> bool {
    if token.get(..4).is_some_and(|head| head.eq_ignore_ascii_case("url(")) {
        return false;
    }
    role_of(token).is_some() || is_hex_literal(token)
}
