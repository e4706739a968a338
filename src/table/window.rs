//! Cursor and scroll window over the table rows.
//!
//! [`Window`] tracks the selected row (`cursor`) and the first visible row
//! (`start`) for a row collection whose length is passed into every
//! operation. After each operation:
//!
//! - `cursor` lies in `0..len` whenever `len > 0`, and is `0` otherwise;
//! - with a fixed height `h`, `start <= cursor < start + h`;
//! - with an automatic height, `start` is `0` because every row is visible.
//!
//! Scrolling is incremental: `start` only moves as far as needed to bring the
//! cursor back inside the window, then is clamped into the row bounds.

use super::types::Extent;

/// Cursor position and scroll offset for a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    cursor: usize,
    start: usize,
    height: Extent,
}

impl Window {
    /// Creates a window at the top with automatic height.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the selected row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first visible row.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The configured height.
    pub fn height(&self) -> Extent {
        self.height
    }

    /// Number of rows the window shows: the fixed height, or `len` when automatic.
    ///
    /// A fixed height is reported even when there are no rows, so this is `0`
    /// for an empty table only in automatic mode. [`Window::visible_rows`] is
    /// `0` either way.
    pub fn effective_height(&self, len: usize) -> usize {
        self.height.resolve(len)
    }

    /// Rows actually available from `start`, never more than the effective height.
    pub fn visible_rows(&self, len: usize) -> usize {
        self.effective_height(len).min(len.saturating_sub(self.start))
    }

    /// Changes the height and re-settles the scroll offset for it.
    pub fn set_height(&mut self, height: Extent, len: usize) {
        self.height = height;
        self.settle(len);
    }

    /// Moves the cursor up by `n` rows, stopping at the first row.
    pub fn move_up(&mut self, n: usize, len: usize) {
        self.cursor = self.cursor.saturating_sub(n);
        self.settle(len);
    }

    /// Moves the cursor down by `n` rows, stopping at the last row.
    pub fn move_down(&mut self, n: usize, len: usize) {
        self.cursor = self.cursor.saturating_add(n);
        self.settle(len);
    }

    /// Moves the cursor to the first row.
    pub fn goto_top(&mut self, len: usize) {
        self.move_up(self.cursor, len);
    }

    /// Moves the cursor to the last row.
    pub fn goto_bottom(&mut self, len: usize) {
        self.move_down(len, len);
    }

    /// Places the cursor on row `n`, clamped into the row bounds.
    pub fn set_cursor(&mut self, n: usize, len: usize) {
        self.cursor = n;
        self.settle(len);
    }

    /// Re-establishes the window invariants after the row count changed.
    pub fn sync(&mut self, len: usize) {
        self.settle(len);
    }

    fn settle(&mut self, len: usize) {
        if len == 0 {
            self.cursor = 0;
            self.start = 0;
            return;
        }
        let last = len - 1;
        self.cursor = self.cursor.min(last);

        if self.height == Extent::Auto {
            self.start = 0;
            return;
        }

        // A zero-height window still anchors on the cursor row.
        let height = self.effective_height(len).max(1);
        let lowest = (self.cursor + 1).saturating_sub(height);
        // Upper bound is the cursor itself; anything larger leaves the cursor
        // above the window after moving up.
        self.start = self.start.clamp(lowest, self.cursor).min(last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(h: usize, len: usize) -> Window {
        let mut window = Window::new();
        window.set_height(Extent::Fixed(h), len);
        window
    }

    fn assert_in_view(window: &Window, h: usize) {
        assert!(window.start() <= window.cursor());
        assert!(window.cursor() < window.start() + h);
    }

    #[test]
    fn test_empty_rows_stay_at_zero() {
        let mut window = fixed(5, 0);
        window.move_down(3, 0);
        window.goto_bottom(0);
        window.set_cursor(10, 0);
        assert_eq!(window.cursor(), 0);
        assert_eq!(window.start(), 0);
        assert_eq!(window.effective_height(0), 5);
        assert_eq!(window.visible_rows(0), 0);
        assert_eq!(Window::new().effective_height(0), 0);
    }

    #[test]
    fn test_scrolls_one_row_at_a_time() {
        let mut window = fixed(3, 10);
        window.move_down(1, 10);
        window.move_down(1, 10);
        assert_eq!((window.cursor(), window.start()), (2, 0));

        window.move_down(1, 10);
        assert_eq!((window.cursor(), window.start()), (3, 1));

        window.move_up(1, 10);
        window.move_up(1, 10);
        assert_eq!((window.cursor(), window.start()), (1, 1));

        window.move_up(1, 10);
        assert_eq!((window.cursor(), window.start()), (0, 0));
    }

    #[test]
    fn test_jump_keeps_cursor_at_window_edge() {
        let mut window = fixed(4, 20);
        window.goto_bottom(20);
        assert_eq!((window.cursor(), window.start()), (19, 16));

        window.move_up(10, 20);
        assert_eq!((window.cursor(), window.start()), (9, 9));
    }

    #[test]
    fn test_cursor_stays_in_view_for_every_move() {
        let len = 17;
        let h = 4;
        let mut window = fixed(h, len);
        let steps: &[(bool, usize)] = &[
            (false, 1),
            (false, 4),
            (false, 2),
            (true, 3),
            (false, 100),
            (true, 1),
            (true, 2),
            (true, 50),
            (false, 9),
        ];
        for &(up, n) in steps {
            if up {
                window.move_up(n, len);
            } else {
                window.move_down(n, len);
            }
            assert!(window.cursor() < len);
            assert_in_view(&window, h);
        }
    }

    #[test]
    fn test_auto_height_never_scrolls() {
        let mut window = Window::new();
        window.goto_bottom(50);
        assert_eq!(window.cursor(), 49);
        assert_eq!(window.start(), 0);
        assert_eq!(window.effective_height(50), 50);
    }

    #[test]
    fn test_switching_to_auto_resets_start() {
        let mut window = fixed(2, 10);
        window.goto_bottom(10);
        assert_eq!(window.start(), 8);

        window.set_height(Extent::Auto, 10);
        assert_eq!(window.start(), 0);
        assert_eq!(window.cursor(), 9);
    }

    #[test]
    fn test_shrinking_height_pulls_start_forward() {
        let mut window = fixed(5, 10);
        window.set_cursor(4, 10);
        assert_eq!(window.start(), 0);

        window.set_height(Extent::Fixed(2), 10);
        assert_eq!(window.start(), 3);
        assert_in_view(&window, 2);
    }

    #[test]
    fn test_sync_after_rows_shrink() {
        let mut window = fixed(3, 10);
        window.goto_bottom(10);
        window.sync(4);
        assert_eq!(window.cursor(), 3);
        assert_in_view(&window, 3);

        window.sync(0);
        assert_eq!((window.cursor(), window.start()), (0, 0));
    }

    #[test]
    fn test_zero_height_tracks_cursor() {
        let mut window = fixed(0, 5);
        window.move_down(3, 5);
        assert_eq!((window.cursor(), window.start()), (3, 3));
        assert_eq!(window.visible_rows(5), 0);
    }

    #[test]
    fn test_visible_rows_clipped_to_data() {
        let window = fixed(5, 3);
        assert_eq!(window.visible_rows(3), 3);

        let mut window = fixed(3, 10);
        window.goto_bottom(10);
        assert_eq!(window.visible_rows(10), 3);
    }
}
