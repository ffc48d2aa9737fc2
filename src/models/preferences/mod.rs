// Preferences module
// User preference set applied across the journal surface

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest font size the slider offers.
pub const MIN_FONT_SIZE: u32 = 16;
/// Largest font size the slider offers.
pub const MAX_FONT_SIZE: u32 = 48;
/// Font sizes advance in fixed increments between the bounds.
pub const FONT_SIZE_STEP: u32 = 2;
/// Font size applied before the user ever touches the slider.
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Validation failure for a preference field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("font size {0} is outside the allowed range 16-48")]
    FontSizeOutOfRange(u32),
    #[error("font size {0} is not aligned to the 2pt step")]
    FontSizeOffStep(u32),
}

/// Durable user preferences: a dark-mode flag and a font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
    pub font_size: u32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Preferences {
    /// Validate the preference set
    pub fn validate(&self) -> Result<(), PreferenceError> {
        validate_font_size(self.font_size)
    }
}

/// Checks a font size against the range and step the slider enforces.
pub fn validate_font_size(size: u32) -> Result<(), PreferenceError> {
    if !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size) {
        return Err(PreferenceError::FontSizeOutOfRange(size));
    }
    if (size - MIN_FONT_SIZE) % FONT_SIZE_STEP != 0 {
        return Err(PreferenceError::FontSizeOffStep(size));
    }
    Ok(())
}

/// Maps an arbitrary requested size onto the closest value the slider can
/// produce: clamped to the bounds, rounded to the step.
pub fn snap_font_size(requested: u32) -> u32 {
    let clamped = requested.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    let offset = clamped - MIN_FONT_SIZE;
    let rounded = (offset + FONT_SIZE_STEP / 2) / FONT_SIZE_STEP * FONT_SIZE_STEP;
    (MIN_FONT_SIZE + rounded).min(MAX_FONT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn defaults_match_first_run_state() {
        let preferences = Preferences::default();
        assert!(!preferences.dark_mode);
        assert_eq!(preferences.font_size, 16);
        assert!(preferences.validate().is_ok());
    }

    #[test_case(0, 16; "far below the range clamps to the minimum")]
    #[test_case(16, 16; "minimum maps to itself")]
    #[test_case(17, 18; "odd value rounds to the nearest step")]
    #[test_case(33, 34; "odd mid-range value rounds up")]
    #[test_case(48, 48; "maximum maps to itself")]
    #[test_case(49, 48; "just above the range clamps to the maximum")]
    #[test_case(200, 48; "far above the range clamps to the maximum")]
    fn snap_maps_onto_slider_values(requested: u32, expected: u32) {
        assert_eq!(snap_font_size(requested), expected);
    }

    #[test]
    fn validate_rejects_out_of_range_sizes() {
        assert_eq!(
            validate_font_size(14),
            Err(PreferenceError::FontSizeOutOfRange(14))
        );
        assert_eq!(
            validate_font_size(50),
            Err(PreferenceError::FontSizeOutOfRange(50))
        );
    }

    #[test]
    fn validate_rejects_off_step_sizes() {
        assert_eq!(
            validate_font_size(17),
            Err(PreferenceError::FontSizeOffStep(17))
        );
        assert!(validate_font_size(18).is_ok());
    }
}
