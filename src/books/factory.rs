use crate::books::repository::BookRepository;
use crate::books::repository::file_book_repository::FileBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    match config.store {
        RepositoryStore::FlatFile => {
            Box::new(FileBookRepository::new(config.store_path.as_path()))
        }
        RepositoryStore::InMemory => {
            Box::new(MemoryBookRepository::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use crate::books::factory::create_book_repository;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[test]
    fn test_should_create_file_repository() {
        let config = Configuration::new().with_store_path(Path::new("/tmp/lms-factory.txt"));
        let books_repo = create_book_repository(&config);
        assert_eq!("file \"/tmp/lms-factory.txt\"", books_repo.describe().as_str());
    }

    #[test]
    fn test_should_create_memory_repository() {
        let config = Configuration::new().with_store(RepositoryStore::InMemory);
        let books_repo = create_book_repository(&config);
        assert_eq!("memory", books_repo.describe().as_str());
        assert!(books_repo.load().expect("should load books").is_empty());
    }
}
