use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// FieldType
///
/// Indexing kind carried by a field marker. `Object` and `Nested` are the only
/// reference kinds; every other kind describes a leaf value.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[remain::sorted]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Auto,
    Binary,
    Boolean,
    Byte,
    ConstantKeyword,
    Date,
    DateNanos,
    DenseVector,
    Double,
    Flattened,
    Float,
    HalfFloat,
    Integer,
    Ip,
    Keyword,
    Long,
    MatchOnlyText,
    Nested,
    Object,
    ScaledFloat,
    SearchAsYouType,
    Short,
    Text,
    TokenCount,
    Version,
    Wildcard,
}

impl FieldType {
    /// Kinds whose field points at another mapped type.
    #[must_use]
    pub const fn is_reference(self) -> bool {
        matches!(self, Self::Object | Self::Nested)
    }

    #[must_use]
    pub const fn is_nested(self) -> bool {
        matches!(self, Self::Nested)
    }

    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !self.is_reference()
    }

    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::DateNanos)
    }

    /// The mapping type name as written in an index mapping.
    #[must_use]
    pub const fn mapping_name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Binary => "binary",
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::ConstantKeyword => "constant_keyword",
            Self::Date => "date",
            Self::DateNanos => "date_nanos",
            Self::DenseVector => "dense_vector",
            Self::Double => "double",
            Self::Flattened => "flattened",
            Self::Float => "float",
            Self::HalfFloat => "half_float",
            Self::Integer => "integer",
            Self::Ip => "ip",
            Self::Keyword => "keyword",
            Self::Long => "long",
            Self::MatchOnlyText => "match_only_text",
            Self::Nested => "nested",
            Self::Object => "object",
            Self::ScaledFloat => "scaled_float",
            Self::SearchAsYouType => "search_as_you_type",
            Self::Short => "short",
            Self::Text => "text",
            Self::TokenCount => "token_count",
            Self::Version => "version",
            Self::Wildcard => "wildcard",
        }
    }
}

///
/// TESTS
///
