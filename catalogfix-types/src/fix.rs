use serde::{Deserialize, Serialize};
use std::fmt;

/// Category label assigned to a free-text fix message.
///
/// The set is closed; [`FixCategory::OtherNormalisation`] catches everything the rules miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FixCategory {
    #[serde(rename = "Header normalisation")]
    HeaderNormalisation,
    #[serde(rename = "URL handle")]
    UrlHandle,
    #[serde(rename = "Boolean fields")]
    BooleanFields,
    #[serde(rename = "Status / visibility")]
    StatusVisibility,
    #[serde(rename = "Price fields")]
    PriceFields,
    #[serde(rename = "Inventory")]
    Inventory,
    #[serde(rename = "Options / variants")]
    OptionsVariants,
    #[serde(rename = "Tags / lists")]
    TagsLists,
    #[serde(rename = "Images")]
    Images,
    #[serde(rename = "Weight / shipping")]
    WeightShipping,
    #[serde(rename = "Whitespace cleanup")]
    WhitespaceCleanup,
    #[serde(rename = "Generated / derived values")]
    GeneratedValues,
    #[serde(rename = "List cleanup")]
    ListCleanup,
    #[serde(rename = "Other normalisation")]
    OtherNormalisation,
}

impl FixCategory {
    pub fn label(self) -> &'static str {
        match self {
            FixCategory::HeaderNormalisation => "Header normalisation",
            FixCategory::UrlHandle => "URL handle",
            FixCategory::BooleanFields => "Boolean fields",
            FixCategory::StatusVisibility => "Status / visibility",
            FixCategory::PriceFields => "Price fields",
            FixCategory::Inventory => "Inventory",
            FixCategory::OptionsVariants => "Options / variants",
            FixCategory::TagsLists => "Tags / lists",
            FixCategory::Images => "Images",
            FixCategory::WeightShipping => "Weight / shipping",
            FixCategory::WhitespaceCleanup => "Whitespace cleanup",
            FixCategory::GeneratedValues => "Generated / derived values",
            FixCategory::ListCleanup => "List cleanup",
            FixCategory::OtherNormalisation => "Other normalisation",
        }
    }
}

impl fmt::Display for FixCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregate of fix messages that share a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixGroup {
    #[serde(rename = "type")]
    pub category: FixCategory,

    pub count: u64,

    /// First message seen for this category, kept verbatim.
    pub sample: String,
}
