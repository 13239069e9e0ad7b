use async_trait::async_trait;
use serde::Serialize;
use crate::books::dto::{BookDto, NewBookDto};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug)]
pub(crate) struct UpdateBookCommandRequest {
    pub(crate) book_id: String,
    pub(crate) book: NewBookDto,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: &str, book: NewBookDto) -> Self {
        Self {
            book_id: book_id.to_string(),
            book,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        self.catalog_service.update_book(req.book_id.as_str(), &req.book).await
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::NewBookDto;
    use crate::books::factory::create_book_repository;
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;

    fn build_service() -> Box<dyn CatalogService> {
        factory::create_catalog_service(&Configuration::new("test"), create_book_repository())
    }

    #[tokio::test]
    async fn test_should_run_update_book() {
        let svc = build_service();
        let id = svc.add_book(&NewBookDto::new(
            Some("test book"), 2020, "author", "summary", "publisher", 100, 50, true))
            .await.expect("should add book");

        let cmd = UpdateBookCommand::new(svc);
        let input = NewBookDto::new(Some("new name"), 2021, "author", "summary", "publisher", 100, 100, false);
        let res = cmd.execute(UpdateBookCommandRequest::new(id.as_str(), input)).await.expect("should update book");
        assert_eq!("new name", res.book.name.as_str());
        assert!(res.book.finished);
    }

    #[tokio::test]
    async fn test_should_fail_update_book_on_unknown_id() {
        let cmd = UpdateBookCommand::new(build_service());

        let input = NewBookDto::new(Some("new name"), 2021, "author", "summary", "publisher", 100, 0, false);
        let res = cmd.execute(UpdateBookCommandRequest::new("no-such-book-here", input)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_fail_update_book_without_name() {
        let svc = build_service();
        let id = svc.add_book(&NewBookDto::new(
            Some("test book"), 2020, "author", "summary", "publisher", 100, 50, true))
            .await.expect("should add book");

        let cmd = UpdateBookCommand::new(svc);
        let input = NewBookDto::new(None, 2021, "author", "summary", "publisher", 100, 0, false);
        let res = cmd.execute(UpdateBookCommandRequest::new(id.as_str(), input)).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
