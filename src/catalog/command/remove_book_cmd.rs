use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    pub(crate) book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        self.catalog_service.remove_book(req.book_id.as_str()).await
            .map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::NewBookDto;
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    fn build_service() -> Box<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test"), create_book_repository())
    }

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let svc = build_service();
        let id = svc.add_book(&NewBookDto::new(
            Some("test book"), 2020, "author", "summary", "publisher", 100, 0, false))
            .await.expect("should add book");

        let cmd = RemoveBookCommand::new(svc);
        let _ = cmd.execute(RemoveBookCommandRequest::new(id.to_string())).await.expect("should remove book");

        let res = cmd.execute(RemoveBookCommandRequest::new(id)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
