//! Tunables for the page behaviors.
//!
//! Every field defaults to the theme's built-in constant, so a host only needs
//! to supply the values it wants to change. The browser build reads an
//! optional JSON block from the page; see `crate::browser`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ACTIVE_LINK_OFFSET_PX, BACK_TO_TOP_THRESHOLD_PX, HEADER_OFFSET_PX, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
    THEME_STORAGE_KEY,
};

/// Error returned by [`PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The text is not a JSON object with the expected field types.
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A numeric field is negative, not finite, or (for the threshold) above 1.
    #[error("page config field {field} is out of range, got {value}")]
    OutOfRange { field: &'static str, value: f64 },
    /// The root margin is not 1 to 4 `px` or `%` lengths.
    #[error("page config reveal_root_margin {0:?} is not 1-4 px/% lengths")]
    RootMargin(String),
}

/// Runtime configuration for [`crate::page::PageBehaviors`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Local storage key for the theme preference.
    pub storage_key: String,
    /// Fixed header height subtracted from anchor scroll targets.
    pub header_offset_px: f64,
    /// Scroll offset above which back-to-top is shown (exclusive).
    pub back_to_top_threshold_px: f64,
    /// Probe distance below the viewport top for active-link highlighting.
    pub active_link_offset_px: f64,
    /// Visible fraction that triggers a reveal.
    pub reveal_threshold: f64,
    /// Root margin for the reveal observer.
    pub reveal_root_margin: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            header_offset_px: HEADER_OFFSET_PX,
            back_to_top_threshold_px: BACK_TO_TOP_THRESHOLD_PX,
            active_link_offset_px: ACTIVE_LINK_OFFSET_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON object, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON,
    /// [`ConfigError::OutOfRange`] for negative or non-finite numbers or a
    /// threshold above 1, and [`ConfigError::RootMargin`] for a margin the
    /// intersection observer would reject.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("header_offset_px", self.header_offset_px),
            ("back_to_top_threshold_px", self.back_to_top_threshold_px),
            ("active_link_offset_px", self.active_link_offset_px),
            ("reveal_threshold", self.reveal_threshold),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if self.reveal_threshold > 1.0 {
            return Err(ConfigError::OutOfRange { field: "reveal_threshold", value: self.reveal_threshold });
        }
        if !is_root_margin(&self.reveal_root_margin) {
            return Err(ConfigError::RootMargin(self.reveal_root_margin.clone()));
        }
        Ok(())
    }
}

/// CSS margin shorthand as `IntersectionObserver` accepts it: 1 to 4 lengths,
/// each in `px` or `%`. A bare `0` is allowed.
fn is_root_margin(raw: &str) -> bool {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    (1..=4).contains(&parts.len()) && parts.iter().all(|part| is_margin_length(part))
}

fn is_margin_length(part: &str) -> bool {
    if part == "0" {
        return true;
    }
    let number = part.strip_suffix("px").or_else(|| part.strip_suffix('%'));
    number.is_some_and(|n| !n.is_empty() && n.parse::<f64>().is_ok_and(f64::is_finite))
}
