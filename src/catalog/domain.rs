pub mod service;

use async_trait::async_trait;
use crate::books::dto::{BookDto, BookFilters, BookSummaryDto, NewBookDto};
use crate::core::bookshelf::BookshelfResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn add_book(&self, input: &NewBookDto) -> BookshelfResult<String>;
    async fn find_all_books(&self, filters: &BookFilters) -> BookshelfResult<Vec<BookSummaryDto>>;
    async fn find_book_by_id(&self, id: &str) -> BookshelfResult<BookDto>;
    async fn update_book(&self, id: &str, input: &NewBookDto) -> BookshelfResult<BookDto>;
    async fn remove_book(&self, id: &str) -> BookshelfResult<()>;
}
