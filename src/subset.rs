use crate::error::{Error, Result};
use crate::types::CatalogRecord;

/// Filters the catalog to films carrying `category`, preserving catalog
/// order. The position of a record in the returned vec is its subset
/// index for the rest of the run. Records without genres never match.
pub fn select(catalog: &[CatalogRecord], category: &str) -> Result<Vec<CatalogRecord>> {
    let subset: Vec<CatalogRecord> = catalog
        .iter()
        .filter(|record| record.genres.iter().any(|label| label == category))
        .cloned()
        .collect();
    if subset.is_empty() {
        return Err(Error::EmptySubset(category.to_string()));
    }
    Ok(subset)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn film(title: &str, genres: &[&str]) -> CatalogRecord {
        CatalogRecord {
            title: title.into(),
            year: None,
            genres: genres.iter().map(|g| g.to_string()).collect(),
            rating: None,
            gross: None,
        }
    }

    #[test]
    fn keeps_catalog_order() {
        let catalog = vec![
            film("A", &["Drama"]),
            film("B", &["Biography", "Drama"]),
            film("C", &["Biography"]),
            film("D", &[]),
        ];
        let subset = select(&catalog, "Biography").unwrap();
        let titles: Vec<&str> = subset.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C"]);
    }

    #[test]
    fn empty_subset_is_an_error() {
        let catalog = vec![film("A", &["Drama"]), film("B", &[])];
        let err = select(&catalog, "Western").unwrap_err();
        assert_eq!(err, Error::EmptySubset("Western".into()));
    }
}
