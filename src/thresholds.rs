//! Analog switch thresholds for the ladder inputs.
//!
//! A pressed pad pulls its input toward the supply rail, so press/release is
//! decided by comparing each sample against a percent-of-full-scale
//! boundary. The boundary is not a single point: a dead band around the
//! switching center keeps electrical noise near the boundary from toggling
//! the key. A released pad becomes pressed only above the upper edge of the
//! band, a pressed pad is released only below the lower edge, and inside the
//! band the previous state holds.

/// Smallest accepted dead-band half-width, percent of full scale.
pub const OFFSET_PERC_MIN: u8 = 1;

/// Largest accepted dead-band half-width.
pub const OFFSET_PERC_MAX: u8 = 49;

/// Smallest accepted switching center, percent of full scale.
pub const CENTER_BIAS_MIN: u8 = 1;

/// Largest accepted switching center. 100% is the supply rail itself and is
/// never a usable boundary, just as 0% is ground.
pub const CENTER_BIAS_MAX: u8 = 99;

/// Error type for threshold validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThresholdError {
    /// Dead-band half-width outside `[OFFSET_PERC_MIN, OFFSET_PERC_MAX]`.
    OffsetOutOfRange { value: u8 },
    /// Switching center outside `[CENTER_BIAS_MIN, CENTER_BIAS_MAX]`.
    CenterBiasOutOfRange { value: u8 },
    /// Center and offset together push a band edge outside 1..=99%.
    DeadBandOutOfRange { low: i16, high: i16 },
}

/// Validated noise-rejection tuning for the analog inputs.
///
/// Both values are fixed at construction; the scanner only ever reads them.
/// `offset_perc` is the dead-band half-width. Larger values protect better
/// against noise oscillation but make keys harder to both press and
/// release; 2..=20 works well in practice.
///
/// `center_bias_perc` places the switching center on the 0-100% analog
/// range. Larger values make keys easier to release but harder to press,
/// smaller values the opposite; 30..=70 is the recommended window, with 50
/// the electrical midpoint of the ladder.
///
/// # Example
///
/// ```
/// use masher_core::ThresholdConfig;
///
/// let thresholds = ThresholdConfig::new(5, 55).unwrap();
/// assert_eq!(thresholds.press_boundary_perc(), 60);
/// assert_eq!(thresholds.release_boundary_perc(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThresholdConfig {
    offset_perc: u8,
    center_bias_perc: u8,
}

impl ThresholdConfig {
    /// Factory tuning: 5% half-width around a 55% center.
    pub const DEFAULT: Self = Self {
        offset_perc: 5,
        center_bias_perc: 55,
    };

    /// Validate and build a threshold configuration.
    ///
    /// Rejects values outside the documented ranges, and combinations whose
    /// dead band would reach ground or the supply rail: both band edges
    /// must land in 1..=99% or the scanner could never cross them.
    pub const fn new(offset_perc: u8, center_bias_perc: u8) -> Result<Self, ThresholdError> {
        if offset_perc < OFFSET_PERC_MIN || offset_perc > OFFSET_PERC_MAX {
            return Err(ThresholdError::OffsetOutOfRange { value: offset_perc });
        }
        if center_bias_perc < CENTER_BIAS_MIN || center_bias_perc > CENTER_BIAS_MAX {
            return Err(ThresholdError::CenterBiasOutOfRange {
                value: center_bias_perc,
            });
        }

        let low = center_bias_perc as i16 - offset_perc as i16;
        let high = center_bias_perc as i16 + offset_perc as i16;
        if low < 1 || high > 99 {
            return Err(ThresholdError::DeadBandOutOfRange { low, high });
        }

        Ok(Self {
            offset_perc,
            center_bias_perc,
        })
    }

    /// Dead-band half-width, percent of full scale.
    #[must_use]
    pub const fn offset_perc(&self) -> u8 {
        self.offset_perc
    }

    /// Switching center, percent of full scale.
    #[must_use]
    pub const fn center_bias_perc(&self) -> u8 {
        self.center_bias_perc
    }

    /// Sample percent a released input must exceed to register as pressed.
    #[must_use]
    pub const fn press_boundary_perc(&self) -> u8 {
        self.center_bias_perc + self.offset_perc
    }

    /// Sample percent a pressed input must fall below to release.
    #[must_use]
    pub const fn release_boundary_perc(&self) -> u8 {
        self.center_bias_perc - self.offset_perc
    }

    /// Press boundary scaled to raw ADC counts for the given full scale
    /// (1023 for a 10-bit converter).
    #[must_use]
    pub const fn press_level(&self, full_scale: u16) -> u16 {
        (full_scale as u32 * self.press_boundary_perc() as u32 / 100) as u16
    }

    /// Release boundary scaled to raw ADC counts.
    #[must_use]
    pub const fn release_level(&self, full_scale: u16) -> u16 {
        (full_scale as u32 * self.release_boundary_perc() as u32 / 100) as u16
    }

    /// Dead-band decision for one raw sample.
    ///
    /// `was_pressed` is the state from the previous scan; inside the band
    /// it is carried forward unchanged.
    #[must_use]
    pub const fn is_pressed(&self, sample: u16, full_scale: u16, was_pressed: bool) -> bool {
        if was_pressed {
            sample >= self.release_level(full_scale)
        } else {
            sample > self.press_level(full_scale)
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(ThresholdConfig::DEFAULT.offset_perc(), 5);
        assert_eq!(ThresholdConfig::DEFAULT.center_bias_perc(), 55);
        assert_eq!(ThresholdConfig::new(5, 55), Ok(ThresholdConfig::DEFAULT));
    }

    #[test]
    fn test_rejects_zero() {
        assert_eq!(
            ThresholdConfig::new(0, 55),
            Err(ThresholdError::OffsetOutOfRange { value: 0 })
        );
        assert_eq!(
            ThresholdConfig::new(5, 0),
            Err(ThresholdError::CenterBiasOutOfRange { value: 0 })
        );
    }

    #[test]
    fn test_rejects_upper_bounds() {
        assert_eq!(
            ThresholdConfig::new(50, 55),
            Err(ThresholdError::OffsetOutOfRange { value: 50 })
        );
        assert_eq!(
            ThresholdConfig::new(5, 100),
            Err(ThresholdError::CenterBiasOutOfRange { value: 100 })
        );
    }

    #[test]
    fn test_rejects_band_reaching_rails() {
        // 60 + 45 = 105%: the press edge would sit above the supply rail.
        assert_eq!(
            ThresholdConfig::new(45, 60),
            Err(ThresholdError::DeadBandOutOfRange { low: 15, high: 105 })
        );
        // 30 - 30 = 0%: the release edge would sit at ground.
        assert_eq!(
            ThresholdConfig::new(30, 30),
            Err(ThresholdError::DeadBandOutOfRange { low: 0, high: 60 })
        );
    }

    #[test]
    fn test_boundary_derivation() {
        let thresholds = ThresholdConfig::DEFAULT;
        assert_eq!(thresholds.press_boundary_perc(), 60);
        assert_eq!(thresholds.release_boundary_perc(), 50);
    }

    #[test]
    fn test_levels_10_bit() {
        let thresholds = ThresholdConfig::DEFAULT;
        assert_eq!(thresholds.press_level(1023), 613);
        assert_eq!(thresholds.release_level(1023), 511);
    }

    #[test]
    fn test_press_requires_crossing_upper_edge() {
        let thresholds = ThresholdConfig::DEFAULT;
        assert!(!thresholds.is_pressed(60, 100, false));
        assert!(thresholds.is_pressed(61, 100, false));
    }

    #[test]
    fn test_release_requires_crossing_lower_edge() {
        let thresholds = ThresholdConfig::DEFAULT;
        assert!(thresholds.is_pressed(50, 100, true));
        assert!(!thresholds.is_pressed(49, 100, true));
    }

    #[test]
    fn test_dead_band_holds_previous_state() {
        let thresholds = ThresholdConfig::DEFAULT;
        // 55% sits inside the 50-60% band: no transition either way.
        assert!(thresholds.is_pressed(55, 100, true));
        assert!(!thresholds.is_pressed(55, 100, false));
    }

    #[test]
    fn test_wider_offset_widens_band() {
        let narrow = ThresholdConfig::new(2, 50).unwrap();
        let wide = ThresholdConfig::new(20, 50).unwrap();
        assert!(narrow.press_level(1023) < wide.press_level(1023));
        assert!(narrow.release_level(1023) > wide.release_level(1023));
    }
}
