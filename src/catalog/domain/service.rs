use std::sync::Arc;
use async_trait::async_trait;
use tracing::debug;
use crate::books::domain::model::BookEntity;
use crate::books::dto::{BookDto, BookFilters, BookSummaryDto, NewBookDto};
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::bookshelf::{BookshelfError, BookshelfResult};
use crate::core::domain::{Configuration, Identifiable};

pub(crate) struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

// Validates caller input for add and update; both share the same rules and
// messages. Returns the accepted name.
fn validate_book_input(input: &NewBookDto) -> BookshelfResult<String> {
    let name = match &input.name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => return Err(BookshelfError::validation("name is required", None)),
    };
    if input.read_page > input.page_count {
        return Err(BookshelfError::validation("readPage must not exceed pageCount", None));
    }
    Ok(name)
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, input: &NewBookDto) -> BookshelfResult<String> {
        let name = validate_book_input(input)?;
        let book = BookEntity::new(name.as_str(), input.year, input.author.as_str(),
                                   input.summary.as_str(), input.publisher.as_str(),
                                   input.page_count, input.read_page, input.reading);
        let id = book.id();
        let _ = self.book_repository.create(&book).await?;
        // confirm the book actually landed on the shelf before reporting success
        let _ = self.book_repository.get(id.as_str()).await
            .map_err(|_| BookshelfError::runtime("book was not added to the shelf", None))?;
        debug!("added book {}", id);
        Ok(id)
    }

    async fn find_all_books(&self, filters: &BookFilters) -> BookshelfResult<Vec<BookSummaryDto>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter()
            .filter(|book| filters.matches(book))
            .map(BookSummaryDto::from)
            .collect())
    }

    async fn find_book_by_id(&self, id: &str) -> BookshelfResult<BookDto> {
        match self.book_repository.get(id).await {
            Ok(book) => Ok(BookDto::from(&book)),
            Err(BookshelfError::NotFound { .. }) => Err(BookshelfError::not_found("book not found")),
            Err(err) => Err(err),
        }
    }

    async fn update_book(&self, id: &str, input: &NewBookDto) -> BookshelfResult<BookDto> {
        let existing = match self.book_repository.get(id).await {
            Ok(book) => book,
            Err(BookshelfError::NotFound { .. }) => return Err(BookshelfError::not_found("id not found")),
            Err(err) => return Err(err),
        };
        let name = validate_book_input(input)?;
        let revised = existing.revise(name.as_str(), input.year, input.author.as_str(),
                                      input.summary.as_str(), input.publisher.as_str(),
                                      input.page_count, input.read_page, input.reading);
        let _ = self.book_repository.update(&revised).await?;
        debug!("updated book {}", id);
        Ok(BookDto::from(&revised))
    }

    async fn remove_book(&self, id: &str) -> BookshelfResult<()> {
        match self.book_repository.delete(id).await {
            Ok(_) => {
                debug!("removed book {}", id);
                Ok(())
            }
            Err(BookshelfError::NotFound { .. }) => Err(BookshelfError::not_found("id not found")),
            Err(err) => Err(err),
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            name: other.name.to_string(),
            year: other.year,
            author: other.author.to_string(),
            summary: other.summary.to_string(),
            publisher: other.publisher.to_string(),
            page_count: other.page_count,
            read_page: other.read_page,
            finished: other.finished,
            reading: other.reading,
            inserted_at: other.inserted_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookEntity> for BookSummaryDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            name: other.name.to_string(),
            publisher: other.publisher.to_string(),
        }
    }
}
