#![forbid(unsafe_code)]

//! Live title filter for post lists.
//!
//! Given a query string and an ordered list of [`Post`]s, [`apply`] recomputes
//! each post's visibility flag: a post stays visible iff its title contains
//! the query as a case-insensitive substring. The pass is total, stateless,
//! and idempotent; an empty query matches every post.
//!
//! The library computes flags only. Mapping `visible` to an actual show/hide
//! mechanism is the rendering layer's job, and the caller supplies the query
//! and the post slice explicitly rather than the pass reaching into ambient
//! state.

pub mod filter;
pub mod matcher;
pub mod post;

pub use filter::{FilterPersistState, FilterState, apply, visible_indices};
pub use matcher::contains_ignore_case;
pub use post::Post;
