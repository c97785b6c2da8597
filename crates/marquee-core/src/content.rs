//! Scroll state for the nested content pane.
//!
//! Once the split completes the pane behaves as an ordinary scrollable
//! region. Scrolling up while already at the top raises a reclaim signal
//! exactly once; further input is swallowed until authority is granted
//! again.

use tracing::debug;

/// Outcome of feeding a scroll delta to the content pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSignal {
    /// Not delegated, or waiting for a reclaim to be acknowledged.
    Ignored,
    /// Ordinary clamped movement.
    Scrolled,
    /// At the top and moving up: the transition should reverse.
    /// Raised at most once per delegation.
    ReclaimRequested,
}

#[derive(Debug, Clone, Default)]
pub struct ContentScroll {
    /// Scroll offset in rows
    offset: u16,
    /// Maximum scroll offset for the current wrap
    max_scroll: u16,
    /// Scroll authority currently held
    delegated: bool,
    /// Reclaim already raised for this delegation
    reclaim_sent: bool,
}

impl ContentScroll {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    #[inline]
    pub fn is_delegated(&self) -> bool {
        self.delegated
    }

    /// Authority granted: start from the top with the reclaim latch re-armed.
    pub fn grant(&mut self, max_scroll: u16) {
        debug!(max_scroll, "content pane granted scroll authority");
        self.delegated = true;
        self.reclaim_sent = false;
        self.offset = 0;
        self.max_scroll = max_scroll;
    }

    /// Authority removed (reclaim acknowledged or the split reopened).
    pub fn revoke(&mut self) {
        self.delegated = false;
    }

    /// Content re-wrapped; clamp the offset into the new range.
    pub fn set_max_scroll(&mut self, max_scroll: u16) {
        self.max_scroll = max_scroll;
        self.offset = self.offset.min(max_scroll);
    }

    /// Feed a scroll delta in rows (positive = down).
    pub fn scroll(&mut self, delta_rows: i32) -> ContentSignal {
        if !self.delegated || self.reclaim_sent {
            return ContentSignal::Ignored;
        }
        if delta_rows < 0 && self.offset == 0 {
            self.reclaim_sent = true;
            return ContentSignal::ReclaimRequested;
        }
        self.offset = (self.offset as i32 + delta_rows).clamp(0, self.max_scroll as i32) as u16;
        ContentSignal::Scrolled
    }
}
