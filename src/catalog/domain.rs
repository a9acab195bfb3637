pub mod service;

use crate::books::domain::model::BookEntity;
use crate::core::library::Field;

// CatalogService is the contract the console consumes. Every operation reports a
// plain outcome (bool, Option or a possibly empty list) and never returns an error;
// mutations are flushed to the book store before returning.
pub trait CatalogService: Sync + Send {
    fn list_books(&self) -> &[BookEntity];
    fn add_book(&mut self, id: i32, title: &str, author: &str, field: Field) -> bool;
    fn delete_book(&mut self, id: i32) -> bool;
    fn search_books_by_title(&self, keyword: &str) -> Vec<BookEntity>;
    fn borrow_book(&mut self, borrower_id: &str, field: &str, book_id: i32) -> bool;
    fn return_book(&mut self, borrower_id: &str) -> bool;
    fn borrowed_book_by(&self, borrower_id: &str) -> Option<BookEntity>;
    fn find_book_by_id(&self, id: i32) -> Option<BookEntity>;
    fn available_books_in_field(&self, field: &str) -> Vec<BookEntity>;
}
