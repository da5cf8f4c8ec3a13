use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::decode::{FromObject, Object};
use crate::error::Result;
use crate::map::MapVersion;
use crate::user::UserDetail;

/// Song metadata for a map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDetailMetadata {
    pub bpm: f32,
    pub duration: u32,
    pub song_name: String,
    pub song_sub_name: String,
    pub song_author_name: String,
    pub level_author_name: String,
}

impl FromObject for MapDetailMetadata {
    fn from_object(obj: Object<'_>) -> Result<Self> {
        Ok(Self {
            bpm: obj.req("bpm")?,
            duration: obj.req("duration")?,
            song_name: obj.req("songName")?,
            song_sub_name: obj.req("songSubName")?,
            song_author_name: obj.req("songAuthorName")?,
            level_author_name: obj.req("levelAuthorName")?,
        })
    }
}

/// Popularity counters for a map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapStats {
    pub plays: u32,
    pub downloads: u32,
    pub upvotes: u32,
    pub downvotes: u32,
    pub score: f32,
}

impl FromObject for MapStats {
    fn from_object(obj: Object<'_>) -> Result<Self> {
        Ok(Self {
            plays: obj.req("plays")?,
            downloads: obj.req("downloads")?,
            upvotes: obj.req("upvotes")?,
            downvotes: obj.req("downvotes")?,
            score: obj.req("score")?,
        })
    }
}

/// The root map record, as served by the map detail endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDetail {
    pub id: String,
    pub name: String,
    pub description: String,
    pub uploader: UserDetail,
    pub metadata: MapDetailMetadata,
    pub stats: MapStats,
    pub uploaded: DateTime<Utc>,
    pub automapper: bool,
    pub ranked: bool,
    pub qualified: bool,
    pub versions: Vec<MapVersion>,
}

impl MapDetail {
    /// Decode a map detail from an already-parsed JSON value.
    ///
    /// Fails fast: the first missing, wrong-shaped, or invalid field
    /// anywhere in the tree aborts the parse with its full path.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::from_object(Object::root(value)?)
    }

    /// Parse raw JSON text and decode it. Convenience over
    /// [`MapDetail::from_value`] for callers that hold the response body.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }
}

impl FromObject for MapDetail {
    fn from_object(obj: Object<'_>) -> Result<Self> {
        Ok(Self {
            id: obj.req("id")?,
            name: obj.req("name")?,
            description: obj.req("description")?,
            uploader: obj.req_entity("uploader")?,
            metadata: obj.req_entity("metadata")?,
            stats: obj.req_entity("stats")?,
            uploaded: obj.req("uploaded")?,
            automapper: obj.req("automapper")?,
            ranked: obj.req("ranked")?,
            qualified: obj.req("qualified")?,
            versions: obj.req_seq("versions")?,
        })
    }
}
