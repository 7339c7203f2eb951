//! Column and row separators.

use egui::{Color32, Painter, Rect, Stroke};

/// Vertical padding of the default column divider line.
const COLUMN_DIVIDER_PADDING: f32 = 8.0;
const COLUMN_DIVIDER_LINE: f32 = 2.0;
const COLUMN_DIVIDER_SPACER: f32 = 10.0;

/// A separator that occupies `extent` points across the table's flow:
/// horizontal space for column dividers, vertical space for item dividers.
pub struct Divider<'a> {
    extent: f32,
    paint: Box<dyn Fn(&Painter, Rect, f32) + 'a>,
}

impl<'a> Divider<'a> {
    /// `paint` receives the divider's rect and an opacity in `0.0..=1.0`.
    pub fn new(extent: f32, paint: impl Fn(&Painter, Rect, f32) + 'a) -> Self {
        Self {
            extent: extent.max(0.0),
            paint: Box::new(paint),
        }
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }

    pub(crate) fn paint(&self, painter: &Painter, rect: Rect, opacity: f32) {
        (self.paint)(painter, rect, opacity);
    }
}

impl std::fmt::Debug for Divider<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Divider")
            .field("extent", &self.extent)
            .finish_non_exhaustive()
    }
}

/// A thin vertical line followed by some breathing room.
pub fn default_column_divider(color: Color32) -> Divider<'static> {
    Divider::new(
        COLUMN_DIVIDER_LINE + COLUMN_DIVIDER_SPACER,
        move |painter, rect, opacity| {
            let x = rect.left() + COLUMN_DIVIDER_LINE / 2.0;
            let top = rect.top() + COLUMN_DIVIDER_PADDING;
            let bottom = rect.bottom() - COLUMN_DIVIDER_PADDING;
            if bottom > top {
                painter.vline(
                    x,
                    top..=bottom,
                    Stroke::new(COLUMN_DIVIDER_LINE, color.gamma_multiply(opacity)),
                );
            }
        },
    )
}

/// A one point horizontal rule.
pub fn default_item_divider(color: Color32) -> Divider<'static> {
    Divider::new(1.0, move |painter, rect, opacity| {
        painter.hline(
            rect.x_range(),
            rect.center().y,
            Stroke::new(1.0, color.gamma_multiply(opacity)),
        );
    })
}

/// Whether a table uses the default divider, a custom one, or none.
#[derive(Debug, Default)]
pub(crate) enum DividerSlot<'a> {
    #[default]
    Default,
    Custom(Divider<'a>),
    Disabled,
}

impl<'a> DividerSlot<'a> {
    pub(crate) fn from_option(divider: Option<Divider<'a>>) -> Self {
        match divider {
            Some(divider) => Self::Custom(divider),
            None => Self::Disabled,
        }
    }

    pub(crate) fn resolve(self, make_default: impl FnOnce() -> Divider<'a>) -> Option<Divider<'a>> {
        match self {
            Self::Default => Some(make_default()),
            Self::Custom(divider) => Some(divider),
            Self::Disabled => None,
        }
    }
}
