use std::env::vars;
use std::time::Duration;

use log::{info, warn};
use serde::Deserialize;

const DEFAULT_TICK_MS: u64 = 60;
const DEFAULT_MIN_COLUMN_WIDTH: f32 = 48.0;

/// Settings of the sample app.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub dark_theme: bool,
    pub tick_interval: Duration,
    pub min_column_width: f32,
    /// Size box score columns by their content instead of equal shares.
    pub intrinsic_columns: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_theme: true,
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            min_column_width: DEFAULT_MIN_COLUMN_WIDTH,
            intrinsic_columns: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    datagrid_dark_theme: Option<bool>,
    datagrid_tick_ms: Option<u64>,
    datagrid_min_column_width: Option<f32>,
    datagrid_intrinsic_columns: Option<bool>,
}

impl AppConfig {
    /// Reads `DATAGRID_*` environment variables, defaulting anything unset.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let RawConfig {
            datagrid_dark_theme,
            datagrid_tick_ms,
            datagrid_min_column_width,
            datagrid_intrinsic_columns,
        } = raw;
        let defaults = Self::default();

        let tick_interval = match datagrid_tick_ms {
            Some(0) => {
                warn!("DATAGRID_TICK_MS must be positive, using {DEFAULT_TICK_MS}");
                defaults.tick_interval
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.tick_interval,
        };

        let min_column_width = match datagrid_min_column_width {
            Some(width) if width.is_finite() && width > 0.0 => width,
            Some(width) => {
                warn!(
                    "DATAGRID_MIN_COLUMN_WIDTH must be positive, got {width}, using {DEFAULT_MIN_COLUMN_WIDTH}"
                );
                defaults.min_column_width
            }
            None => defaults.min_column_width,
        };

        Self {
            dark_theme: datagrid_dark_theme.unwrap_or(defaults.dark_theme),
            tick_interval,
            min_column_width,
            intrinsic_columns: datagrid_intrinsic_columns.unwrap_or(defaults.intrinsic_columns),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn empty_environment_gives_defaults() {
        let raw: RawConfig =
            from_iter(Vec::<(&str, &str)>::new()).expect("RawConfig should deserialize");
        assert_eq!(AppConfig::from_raw(raw), AppConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let raw: RawConfig = from_iter(vec![
            ("DATAGRID_DARK_THEME", "false"),
            ("DATAGRID_TICK_MS", "250"),
            ("DATAGRID_MIN_COLUMN_WIDTH", "50"),
            ("DATAGRID_INTRINSIC_COLUMNS", "true"),
        ])
        .expect("RawConfig should deserialize");

        let config = AppConfig::from_raw(raw);
        assert!(!config.dark_theme);
        assert_eq!(config.tick_interval, Duration::from_millis(250));
        assert_eq!(config.min_column_width, 50.0);
        assert!(config.intrinsic_columns);
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let raw: RawConfig = from_iter(vec![("PATH", "/usr/bin"), ("DATAGRID_TICK_MS", "90")])
            .expect("RawConfig should deserialize");
        let config = AppConfig::from_raw(raw);
        assert_eq!(config.tick_interval, Duration::from_millis(90));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = AppConfig::from_raw(RawConfig {
            datagrid_tick_ms: Some(0),
            datagrid_min_column_width: Some(-3.0),
            ..RawConfig::default()
        });
        assert_eq!(config.tick_interval, AppConfig::default().tick_interval);
        assert_eq!(config.min_column_width, DEFAULT_MIN_COLUMN_WIDTH);
    }
}
