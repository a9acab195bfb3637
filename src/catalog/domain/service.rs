use std::collections::HashMap;
use tracing::{debug, error, info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::library::{Field, LibraryError, LibraryResult};
use crate::patrons::is_valid_borrower_id;

pub struct CatalogServiceImpl {
    books: Vec<BookEntity>,
    // borrower id -> id of the one book they hold; always derived from `books`
    borrowed: HashMap<String, i32>,
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>) -> Self {
        let books = match book_repository.load() {
            Ok(books) => books,
            Err(err) => {
                error!("error reading {}: {}", book_repository.describe(), err);
                vec![]
            }
        };
        let borrowed = build_borrower_index(&books);
        info!("loaded {} books, {} on loan from {:?} store {}",
              books.len(), borrowed.len(), config.store, book_repository.describe());
        Self {
            books,
            borrowed,
            book_repository,
        }
    }

    fn position_of(&self, id: i32) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    // Save failures are logged and swallowed; memory keeps the mutation either way.
    fn persist(&self) {
        if let Err(err) = self.book_repository.save(&self.books) {
            error!("error saving {}: {}", self.book_repository.describe(), err);
        }
    }

    fn outcome(&self, op: &str, res: LibraryResult<()>) -> bool {
        match res {
            Ok(()) => {
                self.persist();
                true
            }
            Err(err) => {
                debug!("{} rejected: {}", op, err);
                false
            }
        }
    }

    fn try_add(&mut self, book: BookEntity) -> LibraryResult<()> {
        if self.position_of(book.id).is_some() {
            return Err(LibraryError::duplicate_key(format!("book id {} already exists", book.id).as_str()));
        }
        self.books.push(book);
        Ok(())
    }

    fn try_delete(&mut self, id: i32) -> LibraryResult<()> {
        let pos = self.position_of(id)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", id).as_str()))?;
        if !self.books[pos].is_available {
            return Err(LibraryError::unavailable(format!("book {} is borrowed", id).as_str(), None));
        }
        self.books.remove(pos);
        Ok(())
    }

    fn try_borrow(&mut self, borrower_id: &str, field: &str, book_id: i32) -> LibraryResult<()> {
        if !is_valid_borrower_id(borrower_id) {
            return Err(LibraryError::validation(
                format!("malformed borrower id {:?}", borrower_id).as_str(), Some("borrower_id".to_string())));
        }
        if let Some(held) = self.borrowed.get(borrower_id) {
            return Err(LibraryError::unavailable(
                format!("borrower {} already holds book {}", borrower_id, held).as_str(), Some("loan_limit".to_string())));
        }
        let pos = self.position_of(book_id)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", book_id).as_str()))?;
        let book = &mut self.books[pos];
        if !book.field.matches(field) {
            return Err(LibraryError::validation(
                format!("book {} is shelved under {}, not {:?}", book_id, book.field, field).as_str(), Some("field".to_string())));
        }
        if !book.is_available {
            return Err(LibraryError::unavailable(format!("book {} is not available", book_id).as_str(), None));
        }
        book.check_out(borrower_id);
        self.borrowed.insert(borrower_id.to_string(), book_id);
        Ok(())
    }

    fn try_return(&mut self, borrower_id: &str) -> LibraryResult<()> {
        let book_id = *self.borrowed.get(borrower_id)
            .ok_or_else(|| LibraryError::not_found(format!("borrower {} has no loan", borrower_id).as_str()))?;
        let pos = self.position_of(book_id)
            .ok_or_else(|| LibraryError::not_found(format!("book {} not found", book_id).as_str()))?;
        self.books[pos].check_in();
        self.borrowed.remove(borrower_id);
        Ok(())
    }
}

impl CatalogService for CatalogServiceImpl {
    fn list_books(&self) -> &[BookEntity] {
        &self.books
    }

    fn add_book(&mut self, id: i32, title: &str, author: &str, field: Field) -> bool {
        let res = self.try_add(BookEntity::new(id, title, author, field));
        self.outcome("add", res)
    }

    fn delete_book(&mut self, id: i32) -> bool {
        let res = self.try_delete(id);
        self.outcome("delete", res)
    }

    fn search_books_by_title(&self, keyword: &str) -> Vec<BookEntity> {
        self.books.iter().filter(|b| b.title_contains(keyword)).cloned().collect()
    }

    fn borrow_book(&mut self, borrower_id: &str, field: &str, book_id: i32) -> bool {
        let res = self.try_borrow(borrower_id, field, book_id);
        self.outcome("borrow", res)
    }

    fn return_book(&mut self, borrower_id: &str) -> bool {
        let res = self.try_return(borrower_id);
        self.outcome("return", res)
    }

    fn borrowed_book_by(&self, borrower_id: &str) -> Option<BookEntity> {
        self.borrowed.get(borrower_id).and_then(|id| self.find_book_by_id(*id))
    }

    fn find_book_by_id(&self, id: i32) -> Option<BookEntity> {
        self.books.iter().find(|b| b.id == id).cloned()
    }

    fn available_books_in_field(&self, field: &str) -> Vec<BookEntity> {
        self.books.iter().filter(|b| b.is_available && b.field.matches(field)).cloned().collect()
    }
}

// A borrower listed on several books keeps the last one; the earlier books stay
// checked out with no index entry until the store is fixed by hand.
fn build_borrower_index(books: &[BookEntity]) -> HashMap<String, i32> {
    let mut borrowed = HashMap::new();
    for book in books {
        let Some(borrower) = book.borrower() else {
            continue;
        };
        if let Some(previous) = borrowed.insert(borrower.to_string(), book.id) {
            warn!("borrower {} is listed on books {} and {}, keeping {}", borrower, previous, book.id, book.id);
        }
    }
    borrowed
}
