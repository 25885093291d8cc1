//! Keyboard navigation state

/// What the dropdown was built for and which row is highlighted.
///
/// `active_index` is either `None` or a valid index into the rendered rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Text the current list was built for (or the last committed label)
    pub current_text: String,
    pub active_index: Option<usize>,
    pub visible: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `keyword` differs from what the list was built for
    pub fn is_changed(&self, keyword: &str) -> bool {
        self.current_text != keyword
    }

    /// Move the highlight by `delta` rows without wrapping.
    ///
    /// With nothing active the position counts as -1, so `+1` lands on the
    /// first row. Returns whether the highlight changed.
    pub fn move_by(&mut self, delta: isize, row_count: usize) -> bool {
        let current = self.active_index.map_or(-1, |i| i as isize);
        let target = current + delta;

        if target < 0 || target as usize >= row_count || target == current {
            return false;
        }

        self.active_index = Some(target as usize);
        true
    }

    /// Forget the highlight, e.g. when rows are cleared
    pub fn clear_active(&mut self) {
        self.active_index = None;
    }
}
