//! Table configuration and column sizing policies.

use bon::Builder;
use log::warn;

use crate::ConfigError;

/// Resize floor used when the caller does not pick one.
pub const DEFAULT_MIN_COLUMN_WIDTH: f32 = 48.0;

/// Width used for a column before anything better is known.
pub const FALLBACK_COLUMN_WIDTH: f32 = 180.0;

pub const DEFAULT_ROW_HEIGHT: f32 = 36.0;

/// Rows materialized above and below the viewport.
pub const DEFAULT_OVERSCAN: usize = 2;

/// How a column gets its width when the user has not resized it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ColumnSizing {
    /// Every column starts at the same explicit width.
    Fixed(f32),
    /// Available width split into `column_count + 1` shares, one kept as slack.
    #[default]
    EqualShare,
    /// Widest content measured so far, `fallback` until the first measurement.
    Intrinsic { fallback: f32 },
}

impl ColumnSizing {
    /// `Fixed` when a default width is given, `EqualShare` otherwise.
    pub fn from_default_width(default_width: Option<f32>) -> Self {
        match default_width {
            Some(width) => Self::Fixed(width),
            None => Self::EqualShare,
        }
    }

    pub fn intrinsic() -> Self {
        Self::Intrinsic {
            fallback: FALLBACK_COLUMN_WIDTH,
        }
    }

    pub fn is_intrinsic(&self) -> bool {
        matches!(self, Self::Intrinsic { .. })
    }
}

/// Everything the table needs to lay out columns and rows.
///
/// Row count is not part of the configuration: it may change every frame
/// without invalidating column widths.
#[derive(Debug, Clone, Copy, PartialEq, Builder)]
pub struct TableConfig {
    pub column_count: usize,
    #[builder(default)]
    pub sizing: ColumnSizing,
    #[builder(default = DEFAULT_MIN_COLUMN_WIDTH)]
    pub min_column_width: f32,
    #[builder(default = DEFAULT_ROW_HEIGHT)]
    pub row_height: f32,
    #[builder(default = DEFAULT_OVERSCAN)]
    pub overscan: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::builder().column_count(0).build()
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.min_column_width) {
            return Err(ConfigError::InvalidMinWidth(self.min_column_width));
        }
        if !is_positive(self.row_height) {
            return Err(ConfigError::InvalidRowHeight(self.row_height));
        }
        match self.sizing {
            ColumnSizing::Fixed(width) if !(width >= self.min_column_width) => {
                Err(ConfigError::FixedWidthBelowMin {
                    width,
                    min: self.min_column_width,
                })
            }
            ColumnSizing::Intrinsic { fallback } if !is_positive(fallback) => {
                Err(ConfigError::InvalidFallbackWidth(fallback))
            }
            _ => Ok(()),
        }
    }

    /// Replaces every invalid field with its default, logging what was dropped.
    pub fn sanitized(mut self) -> Self {
        while let Err(err) = self.validate() {
            warn!("Invalid table configuration, using default: {err}");
            match err {
                ConfigError::InvalidMinWidth(_) => {
                    self.min_column_width = DEFAULT_MIN_COLUMN_WIDTH;
                }
                ConfigError::InvalidRowHeight(_) => self.row_height = DEFAULT_ROW_HEIGHT,
                ConfigError::FixedWidthBelowMin { .. } => {
                    self.sizing = ColumnSizing::Fixed(self.min_column_width);
                }
                ConfigError::InvalidFallbackWidth(_) => self.sizing = ColumnSizing::intrinsic(),
            }
        }
        self
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_defaults() {
        let config = TableConfig::builder().column_count(5).build();
        assert_eq!(config.column_count, 5);
        assert_eq!(config.sizing, ColumnSizing::EqualShare);
        assert_eq!(config.min_column_width, DEFAULT_MIN_COLUMN_WIDTH);
        assert_eq!(config.row_height, DEFAULT_ROW_HEIGHT);
        assert_eq!(config.overscan, DEFAULT_OVERSCAN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_width_selects_policy() {
        assert_eq!(
            ColumnSizing::from_default_width(Some(120.0)),
            ColumnSizing::Fixed(120.0)
        );
        assert_eq!(
            ColumnSizing::from_default_width(None),
            ColumnSizing::EqualShare
        );
    }

    #[test]
    fn fixed_width_below_floor_is_rejected() {
        let config = TableConfig::builder()
            .column_count(3)
            .sizing(ColumnSizing::Fixed(20.0))
            .build();
        assert_eq!(
            config.validate(),
            Err(ConfigError::FixedWidthBelowMin {
                width: 20.0,
                min: DEFAULT_MIN_COLUMN_WIDTH
            })
        );
    }

    #[test]
    fn sanitized_repairs_every_bad_field() {
        let config = TableConfig::builder()
            .column_count(3)
            .min_column_width(f32::NAN)
            .row_height(0.0)
            .sizing(ColumnSizing::Fixed(10.0))
            .build()
            .sanitized();

        assert!(config.validate().is_ok());
        assert_eq!(config.min_column_width, DEFAULT_MIN_COLUMN_WIDTH);
        assert_eq!(config.row_height, DEFAULT_ROW_HEIGHT);
        assert_eq!(config.sizing, ColumnSizing::Fixed(DEFAULT_MIN_COLUMN_WIDTH));
    }

    #[test]
    fn sanitized_keeps_valid_config() {
        let config = TableConfig::builder()
            .column_count(4)
            .min_column_width(50.0)
            .sizing(ColumnSizing::Fixed(200.0))
            .build();
        assert_eq!(config.sanitized(), config);
    }
}
