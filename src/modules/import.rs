use crate::domain::DomainError;
use crate::models::BookRecord;

// Accepted header names per column. The published sheet uses Korean headers.
const TITLE_COLUMNS: &[&str] = &["title", "도서명"];
const AUTHOR_COLUMNS: &[&str] = &["author", "저자"];
const NOTE_COLUMNS: &[&str] = &["note", "한마디"];
const CATEGORY_COLUMNS: &[&str] = &["category", "카테고리"];

fn column_index(headers: &csv::StringRecord, aliases: &[&str]) -> Option<usize> {
    headers.iter().position(|header| {
        let header = header.trim().trim_start_matches('\u{feff}').trim();
        aliases.iter().any(|alias| header.eq_ignore_ascii_case(alias))
    })
}

/// Parse a catalog CSV export into book records.
///
/// Header names are trimmed before matching. Title and category columns are
/// required; author and note default to empty. Rows without a title or a
/// category are skipped.
pub fn parse_catalog_csv(content: &[u8]) -> Result<Vec<BookRecord>, DomainError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content);

    let headers = rdr.headers()?.clone();

    let title_idx = column_index(&headers, TITLE_COLUMNS)
        .ok_or_else(|| DomainError::DataUnavailable("missing title column".to_string()))?;
    let category_idx = column_index(&headers, CATEGORY_COLUMNS)
        .ok_or_else(|| DomainError::DataUnavailable("missing category column".to_string()))?;
    let author_idx = column_index(&headers, AUTHOR_COLUMNS);
    let note_idx = column_index(&headers, NOTE_COLUMNS);

    let cell = |record: &csv::StringRecord, idx: Option<usize>| -> String {
        idx.and_then(|i| record.get(i))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    let mut books = Vec::new();

    for (line, result) in rdr.records().enumerate() {
        let record = result?;

        let title = cell(&record, Some(title_idx));
        let category = cell(&record, Some(category_idx));
        if title.is_empty() || category.is_empty() {
            tracing::debug!("Skipping catalog row {}: missing title or category", line + 2);
            continue;
        }

        books.push(BookRecord {
            title,
            author: cell(&record, author_idx),
            note: cell(&record, note_idx),
            category,
        });
    }

    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_header_whitespace() {
        let csv = " Title ,Author,  Note,Category \nDune,Frank Herbert,Sand.,Adventure\n";
        let books = parse_catalog_csv(csv.as_bytes()).unwrap();
        assert_eq!(
            books,
            vec![BookRecord::new("Dune", "Frank Herbert", "Sand.", "Adventure")]
        );
    }

    #[test]
    fn test_parse_sheet_headers() {
        let csv = "카테고리,도서명,저자,한마디\n위로,아몬드,손원평,따뜻해요\n";
        let books = parse_catalog_csv(csv.as_bytes()).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "아몬드");
        assert_eq!(books[0].author, "손원평");
        assert_eq!(books[0].note, "따뜻해요");
        assert_eq!(books[0].category, "위로");
    }

    #[test]
    fn test_optional_columns_default_to_empty() {
        let csv = "title,category\nCosmos,Science\n";
        let books = parse_catalog_csv(csv.as_bytes()).unwrap();
        assert_eq!(books[0].author, "");
        assert_eq!(books[0].note, "");
    }

    #[test]
    fn test_rows_without_title_are_skipped() {
        let csv = "title,author,note,category\n\
                   ,Nobody,,Science\n\
                   Cosmos,Carl Sagan,,Science\n\
                   Orphan,,,\n";
        let books = parse_catalog_csv(csv.as_bytes()).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Cosmos");
    }

    #[test]
    fn test_missing_category_column_is_unavailable() {
        let csv = "title,author\nCosmos,Carl Sagan\n";
        let err = parse_catalog_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DomainError::DataUnavailable(_)));
    }
}
