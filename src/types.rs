use serde::{Deserialize, Serialize};

/// Input field that may arrive as text or as a number.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
}

/// One unparsed catalog row, exactly as loaded by the caller.
///
/// Aliases accept the column names of the IMDB top-1000 dump.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct RawRecord {
    #[serde(alias = "Series_Title")]
    pub title: String,
    #[serde(alias = "Released_Year")]
    pub year: Option<RawField>,
    #[serde(alias = "Genre")]
    pub genre: Option<String>,
    #[serde(alias = "IMDB_Rating")]
    pub rating: Option<RawField>,
    #[serde(alias = "Gross")]
    pub gross: Option<RawField>,
}

/// A normalized film entry. Immutable once materialized.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CatalogRecord {
    pub title: String,
    pub year: Option<i32>,
    /// Ordered genre labels; empty when the raw field was missing.
    pub genres: Vec<String>,
    pub rating: Option<f32>,
    /// Pass-through display data, not part of the feature set.
    pub gross: Option<f64>,
}

/// One ranked hit: the resolved record plus its similarity to the query.
#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub year: Option<i32>,
    pub genres: Vec<String>,
    pub rating: Option<f32>,
    pub similarity: f32,
}
