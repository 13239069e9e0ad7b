use async_trait::async_trait;
use crate::core::bookshelf::BookshelfResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> BookshelfResult<usize>;

    // updates an entity in place, keeping its position
    async fn update(&self, entity: &Entity) -> BookshelfResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> BookshelfResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> BookshelfResult<usize>;
}
