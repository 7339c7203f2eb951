//! Integration tests for column sizing.
//!
//! These tests verify:
//! 1. Columns start at an equal share of the available width
//! 2. Dragging a header divider resizes that column in header and body alike
//! 3. A column never shrinks below the minimum width
//! 4. Drag distances are measured in points on high density displays
//! 5. A divider reports the dragging state only while held
//! 6. Intrinsic columns grow to fit their widest content

use crate::common::{
    MIN_COLUMN_WIDTH, TABLE_ID, TableProbe, drag, move_pointer, press_at, release_at,
    table_harness, table_harness_at_density,
};
use datagrid_states::{DRAGGING_OPACITY, DividerState, FALLBACK_COLUMN_WIDTH};
use datagrid_ui::DataTable;
use egui::vec2;

mod common;

// =============================================================================
// INITIAL WIDTHS
// =============================================================================

/// Tests that every column gets the same width before any resize.
#[test]
fn test_columns_start_equal() {
    let mut harness = table_harness(TableProbe::new(4, 20));
    harness.step();

    let widths = &harness.state().response.column_widths;
    assert_eq!(widths.len(), 4);
    assert!(widths.iter().all(|width| *width == widths[0]));
    assert!(widths[0] >= MIN_COLUMN_WIDTH);
}

/// Tests that header and body cells of the same column share a width.
#[test]
fn test_header_and_body_widths_match() {
    let mut harness = table_harness(TableProbe::new(4, 20));
    harness.step();

    let probe = harness.state();
    assert!(probe.header_width.is_some());
    assert_eq!(probe.header_width, probe.body_width);
}

// =============================================================================
// DRAG TO RESIZE
// =============================================================================

/// Tests that dragging a column divider to the right widens the column.
#[test]
fn test_drag_divider_widens_column() {
    let mut harness = table_harness(TableProbe::new(4, 20));
    harness.state_mut().watched_column = 1;
    harness.step();

    let before = harness.state().response.column_widths[1];
    let divider = harness.state().response.divider_rects[1].center();

    drag(&mut harness, divider, vec2(60.0, 0.0), 4);
    harness.step();

    let probe = harness.state();
    let after = probe.response.column_widths[1];
    assert!(
        after > before + 30.0,
        "Column should have grown from {before}, got {after}"
    );
    assert_eq!(probe.response.column_widths[0], before);
    assert_eq!(probe.header_width, probe.body_width);

    let state = DataTable::load_state(&harness.ctx, TABLE_ID).expect("table state is stored");
    assert!(state.widths().is_resized(1));
    assert!(!state.widths().is_resized(0));
}

/// Tests that resetting the widths undoes a drag.
#[test]
fn test_reset_widths_restores_equal_columns() {
    let mut harness = table_harness(TableProbe::new(4, 20));
    harness.step();

    let initial = harness.state().response.column_widths.clone();
    let divider = harness.state().response.divider_rects[0].center();
    drag(&mut harness, divider, vec2(50.0, 0.0), 2);
    harness.step();
    assert_ne!(harness.state().response.column_widths, initial);

    DataTable::reset_widths(&harness.ctx, TABLE_ID);
    harness.step();

    assert_eq!(harness.state().response.column_widths, initial);
}

/// Tests that dragging far to the left stops at the minimum width.
#[test]
fn test_drag_never_goes_below_minimum() {
    let mut harness = table_harness(TableProbe::new(4, 20));
    harness.step();

    let before = harness.state().response.column_widths[2];
    let divider = harness.state().response.divider_rects[2].center();

    drag(&mut harness, divider, vec2(-(before + 100.0), 0.0), 8);
    harness.step();

    let after = harness.state().response.column_widths[2];
    assert!(
        after >= MIN_COLUMN_WIDTH,
        "Column should stay at or above {MIN_COLUMN_WIDTH}, got {after}"
    );
    assert!(after <= before);
}

/// Tests that a drag on a 2x display widens the column by the dragged points.
#[test]
fn test_drag_on_high_density_display_moves_by_points() {
    let mut harness = table_harness_at_density(TableProbe::new(4, 20), 2.0);
    harness.step();
    assert_eq!(harness.ctx.pixels_per_point(), 2.0);

    let before = harness.state().response.column_widths[1];
    let divider = harness.state().response.divider_rects[1].center();

    drag(&mut harness, divider, vec2(40.0, 0.0), 4);
    harness.step();

    let after = harness.state().response.column_widths[1];
    let grown = after - before;
    assert!(
        (30.0..=50.0).contains(&grown),
        "A 40 point drag should grow the column by about 40 points, got {grown}"
    );
}

/// Tests that the divider is dragging while held and idle after release.
#[test]
fn test_divider_state_follows_the_pointer_button() {
    let mut harness = table_harness(TableProbe::new(4, 20));
    harness.step();

    let divider = harness.state().response.divider_rects[1].center();
    let state = DataTable::load_state(&harness.ctx, TABLE_ID).expect("table state is stored");
    assert_eq!(state.divider_state(1), DividerState::Idle);

    press_at(&mut harness, divider);
    for step in 1..=3 {
        move_pointer(&mut harness, divider + vec2(10.0 * step as f32, 0.0));
    }

    let state = DataTable::load_state(&harness.ctx, TABLE_ID).expect("table state is stored");
    assert_eq!(state.divider_state(1), DividerState::Dragging);
    assert_eq!(state.divider_state(1).opacity(), DRAGGING_OPACITY);
    assert_eq!(state.divider_state(0), DividerState::Idle);

    release_at(&mut harness, divider + vec2(30.0, 0.0));
    harness.step();

    let state = DataTable::load_state(&harness.ctx, TABLE_ID).expect("table state is stored");
    assert_eq!(state.divider_state(1), DividerState::Idle);
    assert!(state.widths().is_resized(1));
}

// =============================================================================
// INTRINSIC SIZING
// =============================================================================

/// Tests that intrinsic columns follow their content.
#[test]
fn test_intrinsic_columns_fit_content() {
    let mut harness = table_harness(TableProbe::new(3, 5).intrinsic());
    harness.step();
    harness.step();

    let widths = harness.state().response.column_widths.clone();
    assert!(widths.iter().all(|width| *width >= MIN_COLUMN_WIDTH));
    assert!(
        widths.iter().all(|width| *width < FALLBACK_COLUMN_WIDTH),
        "Short content should not keep the fallback width: {widths:?}"
    );

    let state = DataTable::load_state(&harness.ctx, TABLE_ID).expect("table state is stored");
    assert!(state.widths().sizing().is_intrinsic());

    // Another frame with the same content must not change anything.
    harness.step();
    assert_eq!(harness.state().response.column_widths, widths);
}
