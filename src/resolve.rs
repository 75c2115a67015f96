//! Role resolver - maps a classified token to its output color under a mode.

use crate::color::{is_chromatic, is_dark, is_paint_reference, is_preserved, role_of};
use crate::types::{Mode, Palette, Role, DUOTONE_OUTLINE};

/// Resolve a non-preserved token to its output color.
///
/// `gradient_id` is only consulted in gradient mode. When it is `None`
/// primary-role tokens fall back to `palette.primary`. Tokens no rule
/// applies to are returned unchanged, and so are paint references like
/// `url(#id)` or `currentColor` in every mode.
pub fn resolve(token: &str, palette: &Palette, mode: Mode, gradient_id: Option<&str>) -> String {
    if is_paint_reference(token) {
        return token.to_string();
    }
    let role = role_of(token);

    match mode {
        Mode::DuoPrimary | Mode::DuoSecondary => {
            let accent_color = match mode {
                Mode::DuoPrimary => palette.primary.as_str(),
                _ => palette.secondary_or_primary(),
            };
            match role {
                Some(Role::Primary) => DUOTONE_OUTLINE.to_string(),
                Some(Role::Secondary) | Some(Role::Accent) => accent_color.to_string(),
                None if is_chromatic(token) => accent_color.to_string(),
                None if is_dark(token) => DUOTONE_OUTLINE.to_string(),
                None => accent_color.to_string(),
            }
        }
        Mode::Primary | Mode::Secondary | Mode::Gradient => {
            match (role, palette.secondary(), palette.accent()) {
                (Some(Role::Primary), _, _) => match (mode, gradient_id) {
                    (Mode::Gradient, Some(id)) => format!("url(#{})", id),
                    (Mode::Secondary, _) => palette.secondary_or_primary().to_string(),
                    _ => palette.primary.clone(),
                },
                (Some(Role::Secondary), Some(secondary), _) => secondary.to_string(),
                (Some(Role::Accent), _, Some(accent)) => accent.to_string(),
                _ if is_chromatic(token) => match mode {
                    Mode::Secondary => palette.secondary_or_primary().to_string(),
                    _ => palette.primary.clone(),
                },
                _ => token.to_string(),
            }
        }
    }
}

/// Resolver bound to one recolor call.
///
/// Wraps the preserved check around [`resolve`] and reports only tokens whose
/// text actually changes.
#[derive(Debug, Clone, Copy)]
pub struct ColorResolver<'a> {
    pub palette: &'a Palette,
    pub mode: Mode,
    pub gradient_id: Option<&'a str>,
}

impl<'a> ColorResolver<'a> {
    pub fn new(palette: &'a Palette, mode: Mode, gradient_id: Option<&'a str>) -> Self {
        Self {
            palette,
            mode,
            gradient_id,
        }
    }

    /// Replacement text for `token`, or `None` when it stays as written
    pub fn substitute(&self, token: &str) -> Option<String> {
        let trimmed = token.trim();
        if trimmed.is_empty() || is_preserved(trimmed) {
            return None;
        }
        let resolved = resolve(trimmed, self.palette, self.mode, self.gradient_id);
        if resolved == trimmed {
            None
        } else {
            Some(resolved)
        }
    }
}
