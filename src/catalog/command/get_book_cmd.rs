use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetBookCommandRequest {
    pub(crate) book_id: String,
}

impl GetBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetBookCommandResponse {
    book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_id(req.book_id.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::NewBookDto;
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    fn build_service() -> Box<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test"), create_book_repository())
    }

    #[tokio::test]
    async fn test_should_run_get_book() {
        let svc = build_service();
        let id = svc.add_book(&NewBookDto::new(
            Some("test book"), 2020, "author", "summary", "publisher", 100, 25, true))
            .await.expect("should add book");

        let cmd = GetBookCommand::new(svc);
        let loaded = cmd.execute(GetBookCommandRequest::new(id.to_string())).await.expect("should get book");
        assert_eq!(id, loaded.book.book_id);
        assert_eq!("test book", loaded.book.name.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_get_book_on_unknown_id() {
        let cmd = GetBookCommand::new(build_service());

        let res = cmd.execute(GetBookCommandRequest::new("no-such-book-here".to_string())).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
