//! Parcel records: raw input and enriched form.
//!
//! 地块记录：原始输入与派生后的形态。

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use super::size::{SizeClass, SizeLabel};
use super::{wire, DERIVED_KEYS, NO_BOOST};

/// Parcel identifier, stable across loads.
///
/// Numeric ids are normalized to their decimal string form so that the
/// catalog's object keys and the records' `id` field compare equal.
///
/// 地块标识符。数字 ID 统一为十进制字符串。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ParcelId(String);

impl ParcelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ParcelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        wire::string(deserializer).map(ParcelId)
    }
}

impl fmt::Display for ParcelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParcelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ParcelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for ParcelId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

/// Raw parcel fields as supplied by the catalog or a live feed.
///
/// Attributes this crate does not interpret (coordinates, district, name…)
/// are kept in `extra` and carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParcelInput {
    pub id: ParcelId,
    #[serde(default, skip_serializing_if = "SizeClass::is_unset")]
    pub size: SizeClass,
    #[serde(default = "wire::no_boost", deserialize_with = "wire::string")]
    pub fud_boost: String,
    #[serde(default = "wire::no_boost", deserialize_with = "wire::string")]
    pub fomo_boost: String,
    #[serde(default = "wire::no_boost", deserialize_with = "wire::string")]
    pub alpha_boost: String,
    #[serde(default = "wire::no_boost", deserialize_with = "wire::string")]
    pub kek_boost: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ParcelInput {
    /// Input with no boosts and no extra attributes.
    pub fn new(id: impl Into<ParcelId>, size: SizeClass) -> Self {
        Self {
            id: id.into(),
            size,
            fud_boost: NO_BOOST.to_string(),
            fomo_boost: NO_BOOST.to_string(),
            alpha_boost: NO_BOOST.to_string(),
            kek_boost: NO_BOOST.to_string(),
            extra: Map::new(),
        }
    }

    pub fn with_boosts(
        mut self,
        fud: impl Into<String>,
        fomo: impl Into<String>,
        alpha: impl Into<String>,
        kek: impl Into<String>,
    ) -> Self {
        self.fud_boost = fud.into();
        self.fomo_boost = fomo.into();
        self.alpha_boost = alpha.into();
        self.kek_boost = kek.into();
        self
    }

    /// True iff any boost field differs from `"0"`.
    pub fn has_boost(&self) -> bool {
        [
            &self.fud_boost,
            &self.fomo_boost,
            &self.alpha_boost,
            &self.kek_boost,
        ]
        .iter()
        .any(|boost| boost.as_str() != NO_BOOST)
    }
}

/// Enriched parcel record.
///
/// Derived fields are computed once from the raw input in [`Parcel::derive`]
/// and cannot be set any other way. Deserializing a `Parcel` goes through the
/// same derivation, so previously serialized derived values are recomputed.
///
/// 派生字段只能通过 [`Parcel::derive`] 从原始输入计算得出。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    #[serde(flatten)]
    raw: ParcelInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_label: Option<SizeLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    has_boost: bool,
}

impl Parcel {
    /// Compute derived attributes from a raw record.
    pub fn derive(mut raw: ParcelInput) -> Self {
        for key in DERIVED_KEYS {
            raw.extra.remove(*key);
        }

        let spec = raw.size.spec();
        if spec.is_none() {
            warn!(
                parcel_id = %raw.id,
                size = ?raw.size.value(),
                "Unknown parcel size class, leaving dimensions unset"
            );
        }
        let has_boost = raw.has_boost();

        Self {
            size_label: spec.map(|s| s.label),
            width: spec.map(|s| s.width),
            height: spec.map(|s| s.height),
            has_boost,
            raw,
        }
    }

    pub fn id(&self) -> &ParcelId {
        &self.raw.id
    }

    pub fn raw(&self) -> &ParcelInput {
        &self.raw
    }

    pub fn size(&self) -> SizeClass {
        self.raw.size
    }

    pub fn size_label(&self) -> Option<SizeLabel> {
        self.size_label
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }

    pub fn has_boost(&self) -> bool {
        self.has_boost
    }
}

impl From<ParcelInput> for Parcel {
    fn from(raw: ParcelInput) -> Self {
        Parcel::derive(raw)
    }
}

impl<'de> Deserialize<'de> for Parcel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ParcelInput::deserialize(deserializer).map(Parcel::derive)
    }
}
