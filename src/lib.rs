pub mod error;
pub mod features;
pub mod normalize;
pub mod recommender;
pub mod similarity;
pub mod subset;
pub mod types;

pub use error::{Error, Result};
pub use features::Vocabulary;
pub use recommender::Recommender;
pub use types::{CatalogRecord, RawField, RawRecord, Recommendation};
