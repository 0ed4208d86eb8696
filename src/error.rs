/// Outcomes a caller is expected to handle.
///
/// Field-level parse failures are not errors: a value that fails to
/// coerce becomes missing in the `CatalogRecord` and the encoder applies
/// its imputation policy.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The category filter matched no film; terminal for the run.
    #[error("no films found in category: {0}")]
    EmptySubset(String),

    /// The query title has no exact match in the subset. The
    /// precomputed matrix stays valid for further queries.
    #[error("title not found: {0}")]
    TitleNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
