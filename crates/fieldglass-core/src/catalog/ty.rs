/// The field's underlying storage type, as reported by the connected
/// database.
///
/// This is a closed set. Records arriving from the store with a tag outside
/// it are rejected at the deserialization boundary rather than carried as
/// opaque strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BaseType {
    Boolean,
    Integer,
    BigInteger,
    Float,
    Decimal,
    Text,
    Date,
    Time,
    DateTime,
    Uuid,
    Json,
    Array,
}

/// A semantic tag for what a field *means*, used for UI and analysis hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpecialType {
    PrimaryKey,
    ForeignKey,
    Name,
    Category,
    City,
    State,
    Country,
    ZipCode,
    Latitude,
    Longitude,
    Url,
    Json,
    Timestamp,
}

/// Coarse usage classification of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldType {
    /// A numeric value that can be aggregated
    Metric,
    /// A value rows are grouped or filtered by
    Dimension,
    /// Descriptive, not useful for aggregation or grouping
    Info,
    /// Present in the source but should not be surfaced
    Sensitive,
}

impl BaseType {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Integer | Self::BigInteger | Self::Float | Self::Decimal
        )
    }

    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::DateTime)
    }
}

impl SpecialType {
    pub fn is_key(&self) -> bool {
        matches!(self, Self::PrimaryKey | Self::ForeignKey)
    }

    /// Returns `true` for tags whose distinct values are worth summarizing
    /// for filter pickers and the like.
    pub fn is_summarizable(&self) -> bool {
        matches!(
            self,
            Self::Category | Self::City | Self::State | Self::Country
        )
    }
}

impl FieldType {
    pub fn is_dimension(&self) -> bool {
        matches!(self, Self::Dimension)
    }

    pub fn is_sensitive(&self) -> bool {
        matches!(self, Self::Sensitive)
    }
}
