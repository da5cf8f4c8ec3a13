use chrono::{DateTime, Utc};

use crate::decode::{FromObject, Object};
use crate::error::Result;
use crate::id::{HashId, LegacyKeyId};
use crate::map::MapDifficulty;

/// One published revision of a map, identified by content hash.
#[derive(Debug, Clone, PartialEq)]
pub struct MapVersion {
    pub hash: HashId,
    /// Old-style map key; only present in legacy records.
    pub key: Option<LegacyKeyId>,
    pub state: String,
    pub created_at: DateTime<Utc>,
    /// Moderation/quality score; only present in legacy records.
    pub sage_score: Option<i32>,
    pub diffs: Vec<MapDifficulty>,
    pub download_url: String,
    pub cover_url: String,
    pub preview_url: String,
}

impl FromObject for MapVersion {
    fn from_object(obj: Object<'_>) -> Result<Self> {
        let key = obj
            .opt::<String>("key")?
            .map(|raw| LegacyKeyId::parse(&raw).map_err(|reason| obj.invalid("key", reason)))
            .transpose()?;

        Ok(Self {
            hash: obj.req("hash")?,
            key,
            state: obj.req("state")?,
            created_at: obj.req("createdAt")?,
            sage_score: obj.opt("sageScore")?,
            diffs: obj.req_seq("diffs")?,
            download_url: obj.req("downloadURL")?,
            cover_url: obj.req("coverURL")?,
            preview_url: obj.req("previewURL")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn published_version() -> serde_json::Value {
        json!({
            "hash": "27fcbaf107668d0ee0durr3a396e3b6332f7fa0d",
            "key": "1a2b",
            "state": "Published",
            "createdAt": "2019-12-01T10:15:30Z",
            "sageScore": 4,
            "diffs": [],
            "downloadURL": "https://cdn.example.com/27fc.zip",
            "coverURL": "https://cdn.example.com/27fc.jpg",
            "previewURL": "https://cdn.example.com/27fc.mp3"
        })
    }

    fn decode(value: &serde_json::Value) -> Result<MapVersion> {
        MapVersion::from_object(Object::root(value)?)
    }

    #[test]
    fn test_version_with_legacy_fields() {
        let version = decode(&published_version()).unwrap();
        assert_eq!(version.key.as_ref().unwrap().as_str(), "1a2b");
        assert_eq!(version.sage_score, Some(4));
        assert_eq!(version.state, "Published");
        assert!(version.diffs.is_empty());
    }

    #[test]
    fn test_version_without_key_is_not_an_error() {
        let mut value = published_version();
        let obj = value.as_object_mut().unwrap();
        obj.remove("key");
        obj.remove("sageScore");
        let version = decode(&value).unwrap();
        assert_eq!(version.key, None);
        assert_eq!(version.sage_score, None);
    }

    #[test]
    fn test_malformed_key_is_a_validation_error() {
        let mut value = published_version();
        value["key"] = json!("zzzz");
        let err = decode(&value).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation { ref field, .. } if field == "key"
        ));
    }

    #[test]
    fn test_malformed_hash_is_kept() {
        // Hash validation is deliberately lenient; see `HashId::parse`.
        let version = decode(&published_version()).unwrap();
        assert_eq!(
            version.hash.as_str(),
            "27FCBAF107668D0EE0DURR3A396E3B6332F7FA0D"
        );
    }
}
