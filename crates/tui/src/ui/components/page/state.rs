//! Scroll position of the routed page body.

/// Vertical scroll metrics for the page body, in content rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageState {
    offset: u32,
    content_height: u32,
    viewport_height: u32,
}

impl PageState {
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    pub const fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    pub fn max_offset(&self) -> u32 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn is_scrollable(&self) -> bool {
        self.content_height > self.viewport_height && self.viewport_height > 0
    }

    /// New page: back to the top with fresh dimensions.
    pub fn reset(&mut self, content_height: u32) {
        self.offset = 0;
        self.content_height = content_height;
    }

    pub fn update_viewport_height(&mut self, viewport_height: u32) -> bool {
        self.viewport_height = viewport_height;
        self.clamp_offset()
    }

    pub fn update_content_height(&mut self, content_height: u32) -> bool {
        self.content_height = content_height;
        self.clamp_offset()
    }

    /// Scrolls by relative rows (`+` down, `-` up). Returns whether the offset moved.
    pub fn scroll_lines(&mut self, delta: i32) -> bool {
        if delta == 0 || !self.is_scrollable() {
            return false;
        }
        let next = (i64::from(self.offset) + i64::from(delta)).clamp(0, i64::from(self.max_offset()));
        self.set_offset(next as u32)
    }

    pub fn scroll_pages(&mut self, delta_pages: i32) -> bool {
        if delta_pages == 0 || self.viewport_height == 0 {
            return false;
        }
        let rows = i32::try_from(self.viewport_height).unwrap_or(i32::MAX);
        self.scroll_lines(rows.saturating_mul(delta_pages))
    }

    pub fn scroll_to_top(&mut self) -> bool {
        self.set_offset(0)
    }

    pub fn scroll_to_bottom(&mut self) -> bool {
        self.set_offset(self.max_offset())
    }

    fn set_offset(&mut self, offset: u32) -> bool {
        let moved = self.offset != offset;
        self.offset = offset;
        moved
    }

    fn clamp_offset(&mut self) -> bool {
        self.set_offset(self.offset.min(self.max_offset()))
    }
}

#[cfg(test)]
mod tests {
    use super::PageState;

    #[test]
    fn scrolling_clamps_to_bounds() {
        let mut page = PageState::default();
        page.update_viewport_height(20);
        page.update_content_height(120);

        assert!(page.scroll_lines(3));
        assert_eq!(page.offset(), 3);
        assert!(page.scroll_lines(-10));
        assert_eq!(page.offset(), 0);
        assert!(!page.scroll_lines(-1));

        page.scroll_to_bottom();
        assert_eq!(page.offset(), 100);
    }

    #[test]
    fn page_scrolling_uses_viewport_height() {
        let mut page = PageState::default();
        page.update_viewport_height(10);
        page.update_content_height(200);
        page.scroll_pages(3);
        assert_eq!(page.offset(), 30);
        page.scroll_pages(-1);
        assert_eq!(page.offset(), 20);
    }

    #[test]
    fn shrinking_content_clamps_the_offset() {
        let mut page = PageState::default();
        page.update_viewport_height(10);
        page.update_content_height(100);
        page.scroll_to_bottom();
        assert!(page.update_content_height(30));
        assert_eq!(page.offset(), 20);
    }
}
