//! Incremental page loading for the paginated reader.
//!
//! Only a contiguous run of pages is materialized. The run grows by a fixed
//! number of pages whenever the visible page comes within one page of either
//! edge, and is rebuilt around the target on a jump.

use std::ops::Range;

use log::debug;

use crate::error::ContentError;

/// Page count of the standard Madinah mushaf.
pub const MUSHAF_PAGES: u32 = 604;

/// Loaded page range over `1..=total_pages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    total_pages: u32,
    window: u32,
    loaded: Range<u32>,
}

impl PageWindow {
    /// Window of `window` pages starting at `start` (clamped into range).
    pub fn new(total_pages: u32, window: u32, start: u32) -> Result<Self, ContentError> {
        if total_pages == 0 || window == 0 {
            return Err(ContentError::InvalidWindow {
                total_pages,
                window,
            });
        }
        let start = start.clamp(1, total_pages);
        let mut w = Self {
            total_pages,
            window,
            loaded: start..start,
        };
        w.loaded.end = start.saturating_add(window).min(w.end_bound());
        Ok(w)
    }

    fn end_bound(&self) -> u32 {
        self.total_pages.saturating_add(1)
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn window(&self) -> u32 {
        self.window
    }

    /// Currently loaded pages, half-open.
    pub fn loaded(&self) -> Range<u32> {
        self.loaded.clone()
    }

    pub fn len(&self) -> u32 {
        self.loaded.end - self.loaded.start
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    pub fn contains(&self, page: u32) -> bool {
        self.loaded.contains(&page)
    }

    /// Record that `page` is on screen. Returns whether the loaded range changed.
    ///
    /// A page outside the loaded range is treated as a jump.
    pub fn on_visible(&mut self, page: u32) -> bool {
        let page = page.clamp(1, self.total_pages);
        if !self.contains(page) {
            self.jump_to(page);
            return true;
        }

        let mut changed = false;
        let last = self.loaded.end - 1;
        if page + 1 >= last && self.loaded.end < self.end_bound() {
            self.loaded.end = self
                .loaded
                .end
                .saturating_add(self.window)
                .min(self.end_bound());
            changed = true;
        }
        if page <= self.loaded.start + 1 && self.loaded.start > 1 {
            self.loaded.start = self.loaded.start.saturating_sub(self.window).max(1);
            changed = true;
        }
        if changed {
            debug!(
                "page {page} visible, loaded {}..{}",
                self.loaded.start, self.loaded.end
            );
        }
        changed
    }

    /// Rebuild the window centred on `page`, shifted back near the last page.
    pub fn jump_to(&mut self, page: u32) {
        let page = page.clamp(1, self.total_pages);
        let start = page.saturating_sub(self.window / 2).max(1);
        let end = start.saturating_add(self.window).min(self.end_bound());
        let start = end.saturating_sub(self.window).max(1);
        self.loaded = start..end;
        debug!("jump to page {page}, loaded {start}..{end}");
    }
}
