//! Bar chart geometry for the portfolio timeline column.

use egui::emath::easing;
use egui::{Rect, Vec2, pos2, vec2};

/// Horizontal padding on each side, as a fraction of the width.
const HORIZONTAL_PADDING: f32 = 0.15;
/// Top padding, as a fraction of the height.
const TOP_PADDING: f32 = 0.15;
/// Height of the plotting area, as a fraction of the height.
const PLOT_HEIGHT: f32 = 0.7;
/// Share of the plot width spent on gaps between bars.
const SPACING_SHARE: f32 = 0.2;

/// Seconds the bars take to grow to full height.
pub const ANIMATION_SECONDS: f32 = 1.0;

/// Plotting area inside a chart of `size`, relative to its top-left corner.
pub fn plot_area(size: Vec2) -> Rect {
    let padding = size.x * HORIZONTAL_PADDING;
    Rect::from_min_size(
        pos2(padding, size.y * TOP_PADDING),
        vec2(size.x - padding * 2.0, size.y * PLOT_HEIGHT),
    )
}

/// `(bar_width, gap)` for `count` single-bar groups in a plot `plot_width` wide.
pub fn bar_dimensions(plot_width: f32, count: usize) -> (f32, f32) {
    if count == 0 {
        return (0.0, 0.0);
    }
    let total_spacing = plot_width * SPACING_SHARE;
    let gap = total_spacing / (count + 1) as f32;
    let bar_width = (plot_width - total_spacing) / count as f32;
    (bar_width, gap)
}

/// One rect per value, laid out left to right inside `chart`.
///
/// Bars are scaled against the largest value and grown by `progress`
/// (`0.0..=1.0`). A chart whose largest value is not positive has no bars.
pub fn bar_rects(chart: Rect, values: &[f32], progress: f32) -> Vec<Rect> {
    if chart.width() < 1.0 || chart.height() < 1.0 {
        return Vec::new();
    }
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if !(max > 0.0) {
        return Vec::new();
    }
    let plot = plot_area(chart.size()).translate(chart.min.to_vec2());
    let (bar_width, gap) = bar_dimensions(plot.width(), values.len());
    let progress = progress.clamp(0.0, 1.0);

    let mut left = plot.left();
    values
        .iter()
        .map(|value| {
            let height = (value.max(0.0) / max) * plot.height() * progress;
            let rect = Rect::from_min_max(
                pos2(left, plot.bottom() - height),
                pos2(left + bar_width, plot.bottom()),
            );
            left += bar_width + gap;
            rect
        })
        .collect()
}

/// Eased animation progress `elapsed` seconds after the chart first showed.
pub fn animation_progress(elapsed: f32) -> f32 {
    let t = (elapsed / ANIMATION_SECONDS).clamp(0.0, 1.0);
    easing::cubic_out(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(200.0, 100.0))
    }

    #[track_caller]
    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn plot_area_is_padded() {
        let plot = plot_area(vec2(200.0, 100.0));
        assert_close(plot.left(), 30.0);
        assert_close(plot.width(), 140.0);
        assert_close(plot.top(), 15.0);
        assert_close(plot.bottom(), 85.0);
    }

    #[test]
    fn bars_fill_plot_with_gaps() {
        let (bar, gap) = bar_dimensions(140.0, 4);
        assert_close(gap, 28.0 / 5.0);
        assert_close(bar, 112.0 / 4.0);
        assert_eq!(bar_dimensions(140.0, 0), (0.0, 0.0));
    }

    #[test]
    fn tallest_bar_reaches_plot_top() {
        let rects = bar_rects(chart(), &[1.0, 4.0, 2.0], 1.0);
        assert_eq!(rects.len(), 3);
        assert_close(rects[1].top(), 15.0);
        assert_close(rects[1].bottom(), 85.0);
        assert_close(rects[0].height(), 70.0 / 4.0);
        assert!(rects[0].right() < rects[1].left());
    }

    #[test]
    fn bars_grow_with_progress() {
        let half = bar_rects(chart(), &[2.0, 2.0], 0.5);
        assert_close(half[0].height(), 35.0);
        let none = bar_rects(chart(), &[2.0, 2.0], 0.0);
        assert_close(none[0].height(), 0.0);
    }

    #[test]
    fn no_bars_without_positive_max() {
        assert!(bar_rects(chart(), &[], 1.0).is_empty());
        assert!(bar_rects(chart(), &[0.0, 0.0], 1.0).is_empty());
        assert!(bar_rects(chart(), &[-1.0], 1.0).is_empty());
    }

    #[test]
    fn animation_eases_out_and_finishes() {
        assert_close(animation_progress(0.0), 0.0);
        assert!(animation_progress(0.5) > 0.5);
        assert_close(animation_progress(ANIMATION_SECONDS), 1.0);
        assert_close(animation_progress(10.0), 1.0);
    }
}
