use crate::types::{CatalogRecord, RawField, RawRecord};

/// Turns one raw row into a typed record. A field that fails to coerce
/// becomes missing; normalization never rejects a record.
pub fn normalize(raw: &RawRecord) -> CatalogRecord {
    CatalogRecord {
        title: raw.title.trim().to_string(),
        year: raw.year.as_ref().and_then(parse_year),
        genres: raw.genre.as_deref().map(split_genres).unwrap_or_default(),
        rating: raw.rating.as_ref().and_then(parse_number).map(|v| v as f32),
        gross: raw.gross.as_ref().and_then(parse_number),
    }
}

fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

/// Numbers pass through; text is parsed after stripping thousands
/// separators. Anything unparseable is missing, never zero.
fn parse_number(field: &RawField) -> Option<f64> {
    match field {
        RawField::Number(v) => Some(*v),
        RawField::Text(s) => {
            let cleaned = s.trim().replace(',', "");
            if cleaned.is_empty() {
                return None;
            }
            cleaned.parse().ok()
        }
    }
}

fn parse_year(field: &RawField) -> Option<i32> {
    parse_number(field).map(|v| v as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str) -> RawRecord {
        RawRecord {
            title: title.into(),
            year: None,
            genre: None,
            rating: None,
            gross: None,
        }
    }

    #[test]
    fn splits_and_trims_genres() {
        let mut record = raw("Gandhi");
        record.genre = Some("Biography, Drama,  History ".into());
        let normalized = normalize(&record);
        assert_eq!(normalized.genres, vec!["Biography", "Drama", "History"]);
    }

    #[test]
    fn missing_genre_is_empty() {
        let normalized = normalize(&raw("Untagged"));
        assert!(normalized.genres.is_empty());
    }

    #[test]
    fn strips_thousands_separators() {
        let mut record = raw("Schindler's List");
        record.gross = Some(RawField::Text("96,898,818".into()));
        assert_eq!(normalize(&record).gross, Some(96_898_818.0));
    }

    #[test]
    fn unparseable_becomes_missing() {
        let mut record = raw("Odd");
        record.rating = Some(RawField::Text("N/A".into()));
        record.year = Some(RawField::Text("PG".into()));
        let normalized = normalize(&record);
        assert_eq!(normalized.rating, None);
        assert_eq!(normalized.year, None);
    }

    #[test]
    fn numbers_and_numeric_text_coerce() {
        let mut record = raw("Amadeus");
        record.rating = Some(RawField::Number(8.6));
        record.year = Some(RawField::Text("1984".into()));
        let normalized = normalize(&record);
        assert_eq!(normalized.rating, Some(8.6));
        assert_eq!(normalized.year, Some(1984));
    }
}
