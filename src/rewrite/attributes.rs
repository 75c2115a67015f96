//! `fill`, `stroke` and `stop-color` presentation attributes.

use crate::resolve::ColorResolver;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // No backreferences in `regex`, so each quote style gets its own group.
    static ref RE_COLOR_ATTR: Regex = Regex::new(
        r#"(?i)(^|\s)((?:fill|stroke|stop-color)\s*=\s*)(?:"([^"]*)"|'([^']*)')"#
    ).unwrap();
}

/// Rewrite color attribute values in place, keeping each match's quote style.
///
/// Returns the new markup and the number of values replaced.
pub fn rewrite_attributes(markup: &str, resolver: &ColorResolver) -> (String, usize) {
    let mut count = 0;
    let out = RE_COLOR_ATTR.replace_all(markup, |caps: &Captures| {
        let (quote, value) = match (caps.get(3), caps.get(4)) {
            (Some(v), _) => ('"', v.as_str()),
            (None, Some(v)) => ('\'', v.as_str()),
            _ => return caps[0].to_string(),
        };
        match resolver.substitute(value) {
            Some(color) => {
                count += 1;
                format!("{}{}{}{}{}", &caps[1], &caps[2], quote, color, quote)
            }
            None => caps[0].to_string(),
        }
    });
    (out.into_owned(), count)
}
