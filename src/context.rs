use std::fmt;

/// Identifier of a content item (a WordPress post).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        PostId(id)
    }
}

/// Which post is currently being rendered.
///
/// Threaded explicitly by the caller rather than read from ambient global
/// state; lookups that pass no post id fall back to the post held here.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext {
    current: Option<PostId>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for rendering one specific post.
    pub fn for_post(post: PostId) -> Self {
        Self {
            current: Some(post),
        }
    }

    pub fn current_post(&self) -> Option<PostId> {
        self.current
    }

    /// An explicit per-call id wins over the current post.
    pub fn resolve(&self, explicit: Option<PostId>) -> Option<PostId> {
        explicit.or(self.current)
    }
}
