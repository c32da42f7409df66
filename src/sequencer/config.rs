// Overture Sequencer - Configuration
//
// All timings for the intro, supplied once and validated once. Durations are
// seconds as f32, the way the scene designer thinks about them; accessors
// hand out `Duration`s for the runtime. A bad value here is a wiring mistake,
// fatal at startup, never handled mid-run.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors from configuration validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A duration field is negative
    NegativeDuration(&'static str),
    /// A duration field is NaN or infinite
    NonFiniteDuration(&'static str),
    /// A tween duration is zero (delays may be zero, tweens may not)
    ZeroDuration(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDuration(field) => {
                write!(f, "Duration '{}' must not be negative", field)
            }
            Self::NonFiniteDuration(field) => {
                write!(f, "Duration '{}' must be a finite number", field)
            }
            Self::ZeroDuration(field) => {
                write!(f, "Tween duration '{}' must be greater than zero", field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result type for configuration validation
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Timing configuration for the intro sequence.
///
/// Defaults match the designed sequence: a one second hold, half-second tree
/// pop-ins 0.1s apart, a 0.75s gas station scale-in, then a 0.75s car
/// scale-in followed by a two second drive to its parked spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Hold before anything appears, in seconds
    pub delay_start: f32,

    /// Per-tree scale-in duration, in seconds
    pub tree_scale_duration: f32,

    /// Gap between successive trees starting their pop-in, in seconds
    pub tree_stagger: f32,

    /// Gas station scale-in duration, in seconds
    pub gas_station_scale_duration: f32,

    /// Car scale-in duration, in seconds
    pub car_scale_duration: f32,

    /// Car drive from start position to parked spot, in seconds
    pub car_move_duration: f32,

    /// Join every tree's scale tween before finishing the trees phase.
    ///
    /// When false (the default), only the last tree's tween gates phase
    /// completion; earlier trees' tweens run to the end on their own. With
    /// one shared tween duration the two modes finish at the same time, but
    /// they diverge if per-object durations ever do.
    pub await_all_tree_tweens: bool,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            delay_start: 1.0,
            tree_scale_duration: 0.5,
            tree_stagger: 0.1,
            gas_station_scale_duration: 0.75,
            car_scale_duration: 0.75,
            car_move_duration: 2.0,
            await_all_tree_tweens: false,
        }
    }
}

impl SequencerConfig {
    /// Validate once at startup.
    ///
    /// Rejects negative or non-finite values anywhere, and zero for the four
    /// tween durations. `delay_start` and `tree_stagger` may be zero.
    pub fn validate(self) -> ConfigResult<Self> {
        let delays = [
            ("delay_start", self.delay_start),
            ("tree_stagger", self.tree_stagger),
        ];
        let tweens = [
            ("tree_scale_duration", self.tree_scale_duration),
            ("gas_station_scale_duration", self.gas_station_scale_duration),
            ("car_scale_duration", self.car_scale_duration),
            ("car_move_duration", self.car_move_duration),
        ];

        for &(field, value) in delays.iter().chain(tweens.iter()) {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteDuration(field));
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeDuration(field));
            }
        }
        for (field, value) in tweens {
            if value == 0.0 {
                return Err(ConfigError::ZeroDuration(field));
            }
        }

        Ok(self)
    }

    pub fn delay_start(&self) -> Duration {
        Duration::from_secs_f32(self.delay_start)
    }

    pub fn tree_scale_duration(&self) -> Duration {
        Duration::from_secs_f32(self.tree_scale_duration)
    }

    pub fn tree_stagger(&self) -> Duration {
        Duration::from_secs_f32(self.tree_stagger)
    }

    pub fn gas_station_scale_duration(&self) -> Duration {
        Duration::from_secs_f32(self.gas_station_scale_duration)
    }

    pub fn car_scale_duration(&self) -> Duration {
        Duration::from_secs_f32(self.car_scale_duration)
    }

    pub fn car_move_duration(&self) -> Duration {
        Duration::from_secs_f32(self.car_move_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SequencerConfig::default().validate().unwrap();
        assert_eq!(config.delay_start(), Duration::from_secs(1));
        assert_eq!(config.tree_stagger(), Duration::from_millis(100));
        assert_eq!(config.car_move_duration(), Duration::from_secs(2));
        assert!(!config.await_all_tree_tweens);
    }

    #[test]
    fn test_rejects_negative_duration() {
        let config = SequencerConfig {
            tree_stagger: -0.1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeDuration("tree_stagger"))
        );
    }

    #[test]
    fn test_rejects_non_finite_duration() {
        let config = SequencerConfig {
            car_move_duration: f32::NAN,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteDuration("car_move_duration"))
        );

        let config = SequencerConfig {
            delay_start: f32::INFINITY,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonFiniteDuration("delay_start"))
        );
    }

    #[test]
    fn test_rejects_zero_tween_duration() {
        let config = SequencerConfig {
            gas_station_scale_duration: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroDuration("gas_station_scale_duration"))
        );
    }

    #[test]
    fn test_zero_delays_are_allowed() {
        let config = SequencerConfig {
            delay_start: 0.0,
            tree_stagger: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_error_display_names_field() {
        let err = ConfigError::ZeroDuration("tree_scale_duration");
        assert!(err.to_string().contains("tree_scale_duration"));
        assert!(err.to_string().contains("greater than zero"));
    }
}
