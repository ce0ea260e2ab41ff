//! Parcel size classification.
//!
//! 地块尺寸分类。

use serde::{Deserialize, Serialize};

use super::wire;

/// Display label for a size class.
///
/// 尺寸分类的显示标签。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeLabel {
    Humble,
    Reasonable,
    Spacious,
}

impl SizeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeLabel::Humble => "humble",
            SizeLabel::Reasonable => "reasonable",
            SizeLabel::Spacious => "spacious",
        }
    }
}

impl std::fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable row of the size table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub label: SizeLabel,
    pub width: u32,
    pub height: u32,
}

const SIZE_TABLE: [SizeSpec; 4] = [
    SizeSpec {
        label: SizeLabel::Humble,
        width: 8,
        height: 8,
    },
    SizeSpec {
        label: SizeLabel::Reasonable,
        width: 16,
        height: 16,
    },
    SizeSpec {
        label: SizeLabel::Spacious,
        width: 32,
        height: 64,
    },
    SizeSpec {
        label: SizeLabel::Spacious,
        width: 64,
        height: 32,
    },
];

/// Raw size class as it arrives on the wire.
///
/// Only `0..=3` are known. Any other integer is kept as-is so the record can
/// still be stored; it simply has no [`SizeSpec`]. The catalog sometimes
/// encodes the class as a numeric string, both forms are accepted. A class
/// that is missing or has no integral reading (`null`, `2.5`, `"big"`,
/// out of `i64` range) is unset.
///
/// 线上传输的原始尺寸分类。仅 `0..=3` 为已知值；其他值原样保留，但没有对应的 [`SizeSpec`]。
/// 缺失或无法解析为整数的分类视为未设置。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SizeClass(Option<i64>);

impl SizeClass {
    pub const HUMBLE: SizeClass = SizeClass(Some(0));
    pub const REASONABLE: SizeClass = SizeClass(Some(1));
    pub const SPACIOUS_TALL: SizeClass = SizeClass(Some(2));
    pub const SPACIOUS_WIDE: SizeClass = SizeClass(Some(3));
    pub const UNSET: SizeClass = SizeClass(None);

    pub fn new(value: i64) -> Self {
        Self(Some(value))
    }

    /// The integral class, `None` when unset.
    pub fn value(&self) -> Option<i64> {
        self.0
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    /// Look up the table row, `None` for unknown or unset classes.
    pub fn spec(&self) -> Option<SizeSpec> {
        let index = usize::try_from(self.0?).ok()?;
        SIZE_TABLE.get(index).copied()
    }

    pub fn is_known(&self) -> bool {
        self.spec().is_some()
    }
}

impl<'de> Deserialize<'de> for SizeClass {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        wire::lenient_integer(deserializer).map(SizeClass)
    }
}

impl From<i64> for SizeClass {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}
