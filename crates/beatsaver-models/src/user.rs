//! Uploader records.
//!
//! A map detail embeds one [`UserDetail`]; the API only includes the stats
//! block on some endpoints, so it is optional all the way down.

use chrono::{DateTime, Utc};

use crate::decode::{FromObject, Object};
use crate::error::Result;
use crate::id::HashId;

/// Per-tier upload counts for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDiffStats {
    pub easy: u32,
    pub normal: u32,
    pub hard: u32,
    pub expert: u32,
    pub expert_plus: u32,
    pub total: u32,
}

impl FromObject for UserDiffStats {
    fn from_object(obj: Object<'_>) -> Result<Self> {
        Ok(Self {
            easy: obj.req("easy")?,
            normal: obj.req("normal")?,
            hard: obj.req("hard")?,
            expert: obj.req("expert")?,
            expert_plus: obj.req("expertPlus")?,
            total: obj.req("total")?,
        })
    }
}

/// Aggregate upload and vote statistics for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub total_upvotes: u32,
    pub total_downvotes: u32,
    pub total_maps: u32,
    pub ranked_maps: u32,
    pub avg_bpm: f32,
    pub avg_duration: f32,
    pub avg_score: f32,
    pub first_upload: DateTime<Utc>,
    pub last_upload: DateTime<Utc>,
    pub diff_stats: UserDiffStats,
}

impl FromObject for UserStats {
    fn from_object(obj: Object<'_>) -> Result<Self> {
        Ok(Self {
            total_upvotes: obj.req("totalUpvotes")?,
            total_downvotes: obj.req("totalDownvotes")?,
            total_maps: obj.req("totalMaps")?,
            ranked_maps: obj.req("rankedMaps")?,
            avg_bpm: obj.req("avgBpm")?,
            avg_duration: obj.req("avgDuration")?,
            avg_score: obj.req("avgScore")?,
            first_upload: obj.req("firstUpload")?,
            last_upload: obj.req("lastUpload")?,
            diff_stats: obj.req_entity("diffStats")?,
        })
    }
}

/// The uploader of a map.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDetail {
    pub id: u32,
    pub name: String,
    pub hash: Option<HashId>,
    pub avatar: String,
    pub stats: Option<UserStats>,
}

impl FromObject for UserDetail {
    fn from_object(obj: Object<'_>) -> Result<Self> {
        Ok(Self {
            id: obj.req("id")?,
            name: obj.req("name")?,
            hash: obj.opt("hash")?,
            avatar: obj.req("avatar")?,
            stats: obj.opt_entity("stats")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn decode<T: FromObject>(value: &serde_json::Value) -> Result<T> {
        T::from_object(Object::root(value)?)
    }

    fn full_user() -> serde_json::Value {
        json!({
            "id": 4284,
            "name": "rustic",
            "hash": "5cff0b7298cc5a672c84e98d",
            "avatar": "https://www.gravatar.com/avatar/4284",
            "stats": {
                "totalUpvotes": 120,
                "totalDownvotes": 10,
                "totalMaps": 12,
                "rankedMaps": 3,
                "avgBpm": 142.5,
                "avgDuration": 211.0,
                "avgScore": 0.84,
                "firstUpload": "2018-05-21T18:00:00Z",
                "lastUpload": "2020-11-05T09:30:00Z",
                "diffStats": {
                    "easy": 1,
                    "normal": 2,
                    "hard": 3,
                    "expert": 4,
                    "expertPlus": 2,
                    "total": 12
                }
            }
        })
    }

    #[test]
    fn test_user_with_stats() {
        let user: UserDetail = decode(&full_user()).unwrap();
        assert_eq!(user.id, 4284);
        assert_eq!(user.name, "rustic");
        let stats = user.stats.unwrap();
        assert_eq!(stats.total_maps, 12);
        assert_eq!(stats.diff_stats.expert_plus, 2);
        assert_eq!(stats.diff_stats.total, 12);
    }

    #[test]
    fn test_user_without_stats_or_hash() {
        let value = json!({
            "id": 1,
            "name": "anon",
            "avatar": "https://example.com/a.png"
        });
        let user: UserDetail = decode(&value).unwrap();
        assert_eq!(user.hash, None);
        assert_eq!(user.stats, None);
    }

    #[test]
    fn test_missing_diff_stats_is_an_error() {
        let mut value = full_user();
        value["stats"].as_object_mut().unwrap().remove("diffStats");
        let err = decode::<UserDetail>(&value).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "diffStats"));
        assert_eq!(err.field_path().as_deref(), Some("stats.diffStats"));
    }

    #[test]
    fn test_diff_stats_path_context() {
        let mut value = full_user();
        value["stats"]["diffStats"]["hard"] = json!("three");
        let err = decode::<UserDetail>(&value).unwrap_err();
        assert_eq!(err.field_path().as_deref(), Some("stats.diffStats.hard"));
    }
}
