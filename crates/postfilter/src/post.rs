//! The filterable item record.

/// One filterable entry in a post list.
///
/// The filter pass reads the title and writes the visibility flag; it never
/// creates, destroys, or reorders posts. Whatever populates the list owns the
/// records themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    title: Option<String>,
    /// Presentation flag a rendering layer reflects as shown/hidden.
    pub visible: bool,
}

impl Post {
    /// Create a post with the given title.
    ///
    /// New posts start visible: an unfiltered list shows everything.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            visible: true,
        }
    }

    /// Create a post with no title.
    ///
    /// A missing title is treated as empty text, so the post matches only
    /// the empty query.
    #[must_use]
    pub fn untitled() -> Self {
        Self {
            title: None,
            visible: true,
        }
    }

    /// Title text, empty when the title is absent.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

impl From<&str> for Post {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
