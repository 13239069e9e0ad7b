use chrono::{NaiveDateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

const BOOK_ID_LEN: usize = 16;

// BookEntity is a single record on the shelf. The id is assigned once at
// creation and never changes; finished is always derived from the page
// counters and is never set by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookEntity {
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

impl BookEntity {
    pub fn new(name: &str, year: i32, author: &str, summary: &str, publisher: &str,
               page_count: u32, read_page: u32, reading: bool) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            book_id: random_book_id(),
            name: name.to_string(),
            year,
            author: author.to_string(),
            summary: summary.to_string(),
            publisher: publisher.to_string(),
            page_count,
            read_page,
            finished: page_count == read_page,
            reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    // Overwrites every mutable field, keeping book_id and inserted_at.
    pub fn revise(&self, name: &str, year: i32, author: &str, summary: &str, publisher: &str,
                  page_count: u32, read_page: u32, reading: bool) -> Self {
        Self {
            book_id: self.book_id.to_string(),
            name: name.to_string(),
            year,
            author: author.to_string(),
            summary: summary.to_string(),
            publisher: publisher.to_string(),
            page_count,
            read_page,
            finished: page_count == read_page,
            reading,
            inserted_at: self.inserted_at,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

fn random_book_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(BOOK_ID_LEN)
        .map(char::from)
        .collect()
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Book for BookEntity {
    fn is_finished(&self) -> bool {
        self.finished
    }

    fn is_reading(&self) -> bool {
        self.reading
    }
}
