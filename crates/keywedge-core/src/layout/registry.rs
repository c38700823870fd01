//! Process-wide active layout registry.
//!
//! The original firmware lifecycle is "select one layout at startup,
//! encode forever": a single implicit table shared by every encode call
//! that does not want to thread a `&Layout` through its call chain.
//! [`set_layout`] fills the slot (and may overwrite it), and
//! [`active_layout`] reads it.
//!
//! # Thread safety
//!
//! The slot is an `RwLock<Option<Arc<Layout>>>`.  Readers clone the
//! `Arc` out of the lock, so an encode call keeps the table it resolved
//! even if another thread swaps the layout mid-call.  The lock exists
//! for memory safety, not as a feature: the supported lifecycle is still
//! configure-once-then-read, and hot-swapping gets no ordering guarantee
//! beyond the lock's.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::Layout;

/// The process-wide active layout, empty until [`set_layout`] runs.
static ACTIVE: RwLock<Option<Arc<Layout>>> = RwLock::new(None);

/// Selects `layout` as the process-wide active layout.
///
/// Expected to be called once during startup, before encoding begins.
/// Calling it again replaces the previous selection; encode calls
/// already holding the old table finish against it.
pub fn set_layout(layout: Layout) {
    debug!("selecting active layout '{}'", layout.name());
    let mut slot = ACTIVE.write().unwrap_or_else(PoisonError::into_inner);
    *slot = Some(Arc::new(layout));
}

/// Returns the active layout, or `None` if [`set_layout`] has not been
/// called yet.
pub fn active_layout() -> Option<Arc<Layout>> {
    ACTIVE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{us_qwerty, KeyStroke};

    // The registry is genuinely global, so the select/read/overwrite
    // lifecycle lives in a single test to keep it ordered under the
    // parallel test runner.  The unset case is covered by the
    // integration suite, which runs in its own process.
    #[test]
    fn test_set_layout_selects_and_overwrites_the_active_layout() {
        set_layout(us_qwerty());
        let first = active_layout().expect("layout was just selected");
        assert_eq!(first.name(), "us-qwerty");

        let custom = Layout::new("custom", &[('a', KeyStroke::plain(0x1F))]);
        set_layout(custom);
        let second = active_layout().expect("overwritten layout is active");
        assert_eq!(second.name(), "custom");
        assert_eq!(second.lookup('a'), Some(KeyStroke::plain(0x1F)));

        // A reader that resolved before the swap keeps its table.
        assert_eq!(first.name(), "us-qwerty");
    }
}
