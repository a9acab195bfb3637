use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

// Repository persists a whole collection at once; there is no per-entity write path.
pub trait Repository<Entity>: Sync + Send {
    // loads every stored entity, or nothing if the store does not exist yet
    fn load(&self) -> LibraryResult<Vec<Entity>>;

    // replaces the stored collection with the given entities
    fn save(&self, entities: &[Entity]) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    FlatFile,
    InMemory,
}
