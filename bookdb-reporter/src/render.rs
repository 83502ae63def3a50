//! Console rendering of analysis and sample results
//!
//! Raw sample rows print as tuples: strings quoted, missing values as `None`.

use crate::report::{AnalysisResult, SampleResult};
use std::fmt;

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Database Analysis ===")?;

        writeln!(f, "\nBooks per author:")?;
        for row in &self.books_per_author {
            writeln!(f, "  {} {}: {} book(s)", row.first, row.last, row.book_count)?;
        }

        writeln!(f, "\nBooks by time period:")?;
        for row in &self.books_by_era {
            writeln!(f, "  {}: {} book(s)", row.era, row.book_count)?;
        }

        if !self.duplicate_authors.is_empty() {
            writeln!(f, "\nDuplicate author entries found:")?;
            for row in &self.duplicate_authors {
                writeln!(f, "  {} {}: {} entries", row.first, row.last, row.count)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for SampleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n=== Sample Data Verification ===")?;

        writeln!(f, "First {} authors:", self.limit)?;
        for author in &self.authors {
            writeln!(
                f,
                "  ({}, {}, {})",
                quoted(&author.author_id),
                quoted(&author.first),
                quoted(&author.last)
            )?;
        }

        writeln!(f, "\nFirst {} books:", self.limit)?;
        for book in &self.books {
            writeln!(
                f,
                "  ({}, {}, {}, {})",
                quoted(&book.book_id),
                quoted(&book.title),
                or_none(book.year_published),
                book.author_id.as_deref().map_or_else(|| "None".to_string(), quoted)
            )?;
        }

        writeln!(f, "\nBooks with author names:")?;
        for row in &self.books_with_authors {
            writeln!(
                f,
                "  '{}' ({}) by {} {}",
                row.title,
                or_none(row.year_published),
                row.first,
                row.last
            )?;
        }

        Ok(())
    }
}

fn or_none(value: Option<i64>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

/// Quote a string for tuple output.
///
/// Single quotes unless the text contains a single quote and no double quote.
fn quoted(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::era::Era;
    use crate::queries::{AuthorBookCount, BookWithAuthor, DuplicateAuthor, EraCount};
    use bookdb_common::db::{Author, Book};

    fn analysis() -> AnalysisResult {
        AnalysisResult {
            books_per_author: vec![
                AuthorBookCount {
                    author_id: "A1".to_string(),
                    first: "J.R.R.".to_string(),
                    last: "Tolkien".to_string(),
                    book_count: 2,
                },
                AuthorBookCount {
                    author_id: "A2".to_string(),
                    first: "Jane".to_string(),
                    last: "Austen".to_string(),
                    book_count: 0,
                },
            ],
            books_by_era: vec![
                EraCount { era: Era::Before1900, book_count: 1 },
                EraCount { era: Era::From1950To1999, book_count: 1 },
            ],
            duplicate_authors: vec![],
        }
    }

    #[test]
    fn test_analysis_without_duplicates() {
        let expected = "\
=== Database Analysis ===

Books per author:
  J.R.R. Tolkien: 2 book(s)
  Jane Austen: 0 book(s)

Books by time period:
  Before 1900: 1 book(s)
  1950-1999: 1 book(s)
";
        assert_eq!(analysis().to_string(), expected);
    }

    #[test]
    fn test_analysis_with_duplicates() {
        let mut result = analysis();
        result.duplicate_authors.push(DuplicateAuthor {
            first: "J.R.R.".to_string(),
            last: "Tolkien".to_string(),
            count: 2,
        });

        let text = result.to_string();

        assert!(text.ends_with("\nDuplicate author entries found:\n  J.R.R. Tolkien: 2 entries\n"));
    }

    #[test]
    fn test_sample_rendering() {
        let sample = SampleResult {
            limit: 3,
            authors: vec![Author::new("A1", "Flannery", "O'Connor")],
            books: vec![
                Book::new("B1", "Wise Blood", 1952, Some("A1")),
                Book {
                    book_id: "B2".to_string(),
                    title: "Untitled".to_string(),
                    year_published: None,
                    author_id: None,
                },
            ],
            books_with_authors: vec![BookWithAuthor {
                title: "Wise Blood".to_string(),
                year_published: Some(1952),
                first: "Flannery".to_string(),
                last: "O'Connor".to_string(),
            }],
        };

        let expected = "
=== Sample Data Verification ===
First 3 authors:
  ('A1', 'Flannery', \"O'Connor\")

First 3 books:
  ('B1', 'Wise Blood', 1952, 'A1')
  ('B2', 'Untitled', None, None)

Books with author names:
  'Wise Blood' (1952) by Flannery O'Connor
";
        assert_eq!(sample.to_string(), expected);
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(quoted("plain"), "'plain'");
        assert_eq!(quoted("it's \"both\""), "'it\\'s \"both\"'");
        assert_eq!(quoted("back\\slash"), "'back\\\\slash'");
    }
}
