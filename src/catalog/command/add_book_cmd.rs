use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::NewBookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddBookCommandRequest {
    pub(crate) name: Option<String>,
    pub(crate) year: i32,
    pub(crate) author: String,
    pub(crate) summary: String,
    pub(crate) publisher: String,
    pub(crate) page_count: u32,
    pub(crate) read_page: u32,
    pub(crate) reading: bool,
}

impl AddBookCommandRequest {
    pub fn build_book(&self) -> NewBookDto {
        NewBookDto::new(self.name.as_deref(), self.year, self.author.as_str(),
                        self.summary.as_str(), self.publisher.as_str(),
                        self.page_count, self.read_page, self.reading)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    #[serde(rename = "bookId")]
    pub book_id: String,
}

impl AddBookCommandResponse {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await
            .map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
