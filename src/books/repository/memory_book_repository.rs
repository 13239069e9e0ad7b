use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::bookshelf::{BookshelfError, BookshelfResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the shelf in process memory as an ordered
// sequence guarded by a single lock; every call locks for its full duration,
// so each operation is atomic. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub(crate) fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> BookshelfResult<usize> {
        let mut books = self.books.write().await;
        if books.iter().any(|book| book.book_id == entity.book_id) {
            return Err(BookshelfError::duplicate_key(
                format!("book already exists for {}", entity.book_id).as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> BookshelfResult<usize> {
        let mut books = self.books.write().await;
        match books.iter().position(|book| book.book_id == entity.book_id) {
            Some(index) => {
                // in-place overwrite keeps the insertion position
                books[index] = entity.clone();
                Ok(1)
            }
            None => Err(BookshelfError::not_found(
                format!("book not found for {}", entity.book_id).as_str())),
        }
    }

    async fn get(&self, id: &str) -> BookshelfResult<BookEntity> {
        let books = self.books.read().await;
        books.iter().find(|book| book.book_id == id).cloned()
            .ok_or_else(|| BookshelfError::not_found(
                format!("book not found for {}", id).as_str()))
    }

    async fn delete(&self, id: &str) -> BookshelfResult<usize> {
        let mut books = self.books.write().await;
        match books.iter().position(|book| book.book_id == id) {
            Some(index) => {
                books.remove(index);
                Ok(1)
            }
            None => Err(BookshelfError::not_found(
                format!("book not found for {}", id).as_str())),
        }
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_all(&self) -> BookshelfResult<Vec<BookEntity>> {
        let books = self.books.read().await;
        Ok(books.clone())
    }
}
