use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::{BookFilters, BookSummaryDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Filter values arrive as raw query strings; coercion happens at match time.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListBooksCommandRequest {
    pub(crate) name: Option<String>,
    pub(crate) reading: Option<String>,
    pub(crate) finished: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn filters(&self) -> BookFilters {
        BookFilters {
            name: self.name.clone(),
            reading: self.reading.clone(),
            finished: self.finished.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListBooksCommandResponse {
    pub books: Vec<BookSummaryDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookSummaryDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.find_all_books(&req.filters()).await
            .map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}
