//! Map records.
//!
//! The root entity is [`MapDetail`], which owns the uploader, song metadata,
//! popularity stats, and the ordered list of published [`MapVersion`]s; each
//! version owns its [`MapDifficulty`] variants.

mod detail;
mod difficulty;
mod version;

pub use detail::*;
pub use difficulty::*;
pub use version::*;
