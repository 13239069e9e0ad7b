pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::bookshelf::BookshelfResult;
use crate::core::repository::Repository;

#[async_trait]
pub(crate) trait BookRepository: Repository<BookEntity> {
    // full shelf contents in insertion order
    async fn find_all(&self) -> BookshelfResult<Vec<BookEntity>>;
}
