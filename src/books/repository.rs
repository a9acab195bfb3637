pub mod file_book_repository;
pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

pub trait BookRepository: Repository<BookEntity> {
    // short label of the backing store, used in log lines
    fn describe(&self) -> String;
}
