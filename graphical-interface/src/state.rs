/// Tracks which shop marker the pointer is over during the current frame.
///
/// The index is the shop's ordinal position in the loaded table; the tooltip
/// looks the record up by it, so the table must never be reordered after
/// startup.
pub struct HoverState {
    pub shop: Option<usize>,
}

impl HoverState {
    pub fn new() -> HoverState {
        Self { shop: None }
    }

    /// Cleared at the start of every frame; the plugin re-reports while
    /// drawing markers.
    pub fn clear(&mut self) {
        self.shop = None;
    }

    pub fn hover(&mut self, index: usize) {
        self.shop = Some(index);
    }
}
