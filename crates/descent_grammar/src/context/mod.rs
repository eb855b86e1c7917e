//! Per-parse diagnostic state.

use std::sync::Arc;

/// State threaded through one parse.
///
/// Records the id of the most recently attempted grammar. Every run
/// overwrites it, including runs that go on to succeed, so after an
/// overall failure it names the last grammar tried, which is not
/// necessarily the one that got furthest into the input.
///
/// A context belongs to a single parse and is not reused.
#[derive(Debug, Default)]
pub struct Context {
    last_id: Option<Arc<str>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the most recently attempted grammar, if any ran at all.
    pub fn last_id(&self) -> Option<&str> {
        self.last_id.as_deref()
    }

    #[inline]
    pub(crate) fn attempt(&mut self, id: &Arc<str>) {
        self.last_id = Some(Arc::clone(id));
    }
}
