//! Type definitions shared by the classifier, resolver and rewriter

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outline color every primary-role token collapses to in duotone modes
pub const DUOTONE_OUTLINE: &str = "#2D2D2D";

/// Brand palette a document is recolored onto.
///
/// Only `primary` is required. Rules that would emit `secondary` or `accent`
/// are skipped when the role is absent or blank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Palette {
    pub primary: String,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
}

impl Palette {
    pub fn new(primary: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: None,
            accent: None,
        }
    }

    pub fn with_secondary(mut self, secondary: &str) -> Self {
        self.secondary = Some(secondary.to_string());
        self
    }

    pub fn with_accent(mut self, accent: &str) -> Self {
        self.accent = Some(accent.to_string());
        self
    }

    /// A palette with an empty primary is treated as absent
    pub fn is_empty(&self) -> bool {
        self.primary.trim().is_empty()
    }

    /// Secondary color; a blank value counts as unset
    pub fn secondary(&self) -> Option<&str> {
        non_blank(self.secondary.as_deref())
    }

    /// Accent color; a blank value counts as unset
    pub fn accent(&self) -> Option<&str> {
        non_blank(self.accent.as_deref())
    }

    /// Both gradient stops are available
    pub fn supports_gradient(&self) -> bool {
        !self.is_empty() && self.secondary().is_some()
    }

    /// Secondary color, or primary when no secondary is set
    pub fn secondary_or_primary(&self) -> &str {
        self.secondary().unwrap_or(&self.primary)
    }
}

fn non_blank(color: Option<&str>) -> Option<&str> {
    color.filter(|c| !c.trim().is_empty())
}

/// Rendering strategy selected once per recolor call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    Primary,
    Secondary,
    Gradient,
    DuoPrimary,
    DuoSecondary,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Primary,
        Mode::Secondary,
        Mode::Gradient,
        Mode::DuoPrimary,
        Mode::DuoSecondary,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "primary" => Some(Mode::Primary),
            "secondary" => Some(Mode::Secondary),
            "gradient" => Some(Mode::Gradient),
            "duo-primary" | "duotone-primary" => Some(Mode::DuoPrimary),
            "duo-secondary" | "duotone-secondary" => Some(Mode::DuoSecondary),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Primary => "primary",
            Mode::Secondary => "secondary",
            Mode::Gradient => "gradient",
            Mode::DuoPrimary => "duo-primary",
            Mode::DuoSecondary => "duo-secondary",
        }
    }

    pub fn is_duotone(&self) -> bool {
        matches!(self, Mode::DuoPrimary | Mode::DuoSecondary)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic bucket a source color belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    Secondary,
    Accent,
}

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Largest pairwise channel difference
    pub fn max_channel_diff(&self) -> u8 {
        let (r, g, b) = (self.r as i16, self.g as i16, self.b as i16);
        (r - g).abs().max((g - b).abs()).max((r - b).abs()) as u8
    }

    /// Perceptual luma (0.299r + 0.587g + 0.114b), 0..=255
    pub fn luma(&self) -> f64 {
        0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64
    }
}
