use datagrid_states::RowWindow;
use egui::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
enum VerticalRequest {
    Offset(f32),
    Row(usize),
}

/// Scroll position of a table, readable after every frame and settable
/// between frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableScroll {
    offset: Vec2,
    vertical: Option<VerticalRequest>,
    horizontal: Option<f32>,
}

impl TableScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset of the body content as of the last frame.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn scroll_vertical_to(&mut self, offset: f32) {
        self.vertical = Some(VerticalRequest::Offset(offset.max(0.0)));
    }

    pub fn scroll_horizontal_to(&mut self, offset: f32) {
        self.horizontal = Some(offset.max(0.0));
    }

    /// Puts `row` at the top of the viewport on the next frame.
    pub fn scroll_to_row(&mut self, row: usize) {
        self.vertical = Some(VerticalRequest::Row(row));
    }

    pub fn has_pending_request(&self) -> bool {
        self.vertical.is_some() || self.horizontal.is_some()
    }

    /// Takes the pending `(vertical, horizontal)` offsets.
    pub(crate) fn take_requests(&mut self, window: &RowWindow) -> (Option<f32>, Option<f32>) {
        let vertical = self.vertical.take().map(|request| match request {
            VerticalRequest::Offset(offset) => offset,
            VerticalRequest::Row(row) => window.offset_for_row(row),
        });
        (vertical, self.horizontal.take())
    }

    pub(crate) fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }
}
