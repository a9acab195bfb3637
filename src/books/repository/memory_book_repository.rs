use std::sync::Mutex;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keeps the last saved snapshot in process memory only.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: Mutex<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new(books: Vec<BookEntity>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }
}

impl Repository<BookEntity> for MemoryBookRepository {
    fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = self.books.lock()
            .map_err(|err| LibraryError::runtime(format!("poisoned store {:?}", err).as_str(), None))?;
        Ok(books.clone())
    }

    fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let mut books = self.books.lock()
            .map_err(|err| LibraryError::runtime(format!("poisoned store {:?}", err).as_str(), None))?;
        *books = entities.to_vec();
        Ok(books.len())
    }
}

impl BookRepository for MemoryBookRepository {
    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::Field;
    use crate::core::repository::Repository;

    #[test]
    fn test_should_save_load_books() {
        let books_repo = MemoryBookRepository::default();
        assert!(books_repo.load().expect("should load books").is_empty());

        let books = vec![BookEntity::new(1, "Intro to C", "A. Smith", Field::Programming)];
        let size = books_repo.save(&books).expect("should save books");
        assert_eq!(1, size);
        assert_eq!(books, books_repo.load().expect("should load books"));

        let size = books_repo.save(&[]).expect("should save books");
        assert_eq!(0, size);
        assert!(books_repo.load().expect("should load books").is_empty());
    }
}
