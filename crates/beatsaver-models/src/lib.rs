//! Typed, immutable records for the BeatSaver map detail API.
//!
//! This crate turns loosely-typed JSON payloads into strongly-typed values:
//! - `MapDetail` - the root record: one map with uploader, metadata, stats,
//!   and its published versions
//! - `MapVersion`, `MapDifficulty`, `MapParitySummary` - per-revision data
//! - `UserDetail`, `UserStats`, `UserDiffStats` - uploader data
//! - `HashId`, `LegacyKeyId` - the two hex identifier flavors (lenient and
//!   strict)
//!
//! There is no networking here; callers hand in an already-fetched
//! [`serde_json::Value`] (or raw JSON text) and get back either a fully
//! populated record or an [`Error`] naming the offending field by path.
//!
//! ```no_run
//! use beatsaver_models::MapDetail;
//!
//! # fn demo(body: &str) -> beatsaver_models::Result<()> {
//! let map = MapDetail::from_json_str(body)?;
//! println!("{} by {}", map.name, map.uploader.name);
//! # Ok(())
//! # }
//! ```

pub mod decode;
pub mod error;
pub mod id;
pub mod map;
pub mod user;

pub use decode::{FromObject, FromValue, Object};
pub use error::{Error, Result};
pub use id::{HashId, LegacyKeyId};
pub use map::{
    Characteristic, Difficulty, MapDetail, MapDetailMetadata, MapDifficulty, MapParitySummary,
    MapStats, MapVersion,
};
pub use user::{UserDetail, UserDiffStats, UserStats};
