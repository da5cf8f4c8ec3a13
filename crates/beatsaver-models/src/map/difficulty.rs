use std::str::FromStr;

use serde_json::Value;
use strum::{EnumString, IntoStaticStr};

use crate::decode::{FromObject, FromValue, Object};
use crate::error::Result;

/// Gameplay mode of a difficulty.
///
/// The wire value is validated against the closed set below; an unrecognized
/// characteristic is a type mismatch, not a silently kept string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
pub enum Characteristic {
    Standard,
    #[strum(serialize = "360Degree")]
    Degree360,
}

impl Characteristic {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Characteristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromValue for Characteristic {
    const EXPECTED: &'static str = "a characteristic (Standard or 360Degree)";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(|s| Self::from_str(s).ok())
    }
}

/// Difficulty tier of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString, IntoStaticStr)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    Expert,
    ExpertPlus,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromValue for Difficulty {
    const EXPECTED: &'static str = "a difficulty (Easy through ExpertPlus)";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().and_then(|s| Self::from_str(s).ok())
    }
}

/// Pattern-analysis issue counts for one difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapParitySummary {
    pub errors: u32,
    pub warns: u32,
    pub resets: u32,
}

impl FromObject for MapParitySummary {
    fn from_object(obj: Object<'_>) -> Result<Self> {
        Ok(Self {
            errors: obj.req("errors")?,
            warns: obj.req("warns")?,
            resets: obj.req("resets")?,
        })
    }
}

/// One gameplay variant within a map version.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDifficulty {
    pub njs: f32,
    pub offset: f32,
    pub notes: u32,
    pub bombs: u32,
    pub obstacles: u32,
    pub nps: f32,
    pub length: f32,
    pub characteristic: Characteristic,
    pub difficulty: Difficulty,
    pub events: u32,
    pub chroma: bool,
    pub me: bool,
    pub ne: bool,
    pub cinema: bool,
    pub seconds: f32,
    pub parity_summary: MapParitySummary,
    /// Ranked star rating; absent for unranked difficulties.
    pub stars: Option<f32>,
    /// Only present in newer records.
    pub max_score: Option<u32>,
}

impl FromObject for MapDifficulty {
    fn from_object(obj: Object<'_>) -> Result<Self> {
        Ok(Self {
            njs: obj.req("njs")?,
            offset: obj.req("offset")?,
            notes: obj.req("notes")?,
            bombs: obj.req("bombs")?,
            obstacles: obj.req("obstacles")?,
            nps: obj.req("nps")?,
            length: obj.req("length")?,
            characteristic: obj.req("characteristic")?,
            difficulty: obj.req("difficulty")?,
            events: obj.req("events")?,
            chroma: obj.req("chroma")?,
            me: obj.req("me")?,
            ne: obj.req("ne")?,
            cinema: obj.req("cinema")?,
            seconds: obj.req("seconds")?,
            parity_summary: obj.req_entity("paritySummary")?,
            stars: obj.opt("stars")?,
            max_score: obj.opt("maxScore")?,
        })
    }
}
