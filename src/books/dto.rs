use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookDto is the full book record as returned by the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookDto {
    #[serde(rename = "id")]
    pub book_id: String,
    pub name: String,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub finished: bool,
    pub reading: bool,
    #[serde(with = "serializer")]
    pub inserted_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookDto {
    fn is_finished(&self) -> bool {
        self.finished
    }

    fn is_reading(&self) -> bool {
        self.reading
    }
}

// NewBookDto carries caller-supplied fields for add and update; name stays
// optional so the catalog service can reject a missing one itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewBookDto {
    pub name: Option<String>,
    pub year: i32,
    pub author: String,
    pub summary: String,
    pub publisher: String,
    pub page_count: u32,
    pub read_page: u32,
    pub reading: bool,
}

impl NewBookDto {
    pub fn new(name: Option<&str>, year: i32, author: &str, summary: &str, publisher: &str,
               page_count: u32, read_page: u32, reading: bool) -> Self {
        Self {
            name: name.map(str::to_string),
            year,
            author: author.to_string(),
            summary: summary.to_string(),
            publisher: publisher.to_string(),
            page_count,
            read_page,
            reading,
        }
    }
}

// BookSummaryDto is the projection returned by list queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookSummaryDto {
    #[serde(rename = "id")]
    pub book_id: String,
    pub name: String,
    pub publisher: String,
}

// BookFilters narrows a list query; at most one filter applies, in the
// fixed order name, reading, finished.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct BookFilters {
    pub name: Option<String>,
    pub reading: Option<String>,
    pub finished: Option<String>,
}

impl BookFilters {
    pub fn none() -> Self {
        BookFilters::default()
    }

    pub fn by_name(name: &str) -> Self {
        BookFilters { name: Some(name.to_string()), ..BookFilters::default() }
    }

    pub fn by_reading(reading: &str) -> Self {
        BookFilters { reading: Some(reading.to_string()), ..BookFilters::default() }
    }

    pub fn by_finished(finished: &str) -> Self {
        BookFilters { finished: Some(finished.to_string()), ..BookFilters::default() }
    }

    pub fn matches(&self, book: &BookEntity) -> bool {
        if let Some(name) = self.name.as_ref().filter(|name| !name.trim().is_empty()) {
            // literal case-insensitive substring match, not a pattern
            return book.name.to_lowercase().contains(name.to_lowercase().as_str());
        }
        if let Some(reading) = &self.reading {
            return numeric_flag(reading) == Some(flag_number(book.is_reading()));
        }
        if let Some(finished) = &self.finished {
            return numeric_flag(finished) == Some(flag_number(book.is_finished()));
        }
        true
    }
}

// loose numeric coercion for flag filters: "0"/"1" and boolean literals
// select on the flag; an uncoercible value matches no books
fn numeric_flag(raw: &str) -> Option<f64> {
    match raw.trim() {
        "true" => Some(1.0),
        "false" => Some(0.0),
        other => other.parse::<f64>().ok(),
    }
}

fn flag_number(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
