use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{Field, LibraryError, LibraryResult};
use crate::core::repository::Repository;

const RECORD_FIELDS: usize = 6;

// FileBookRepository keeps the catalog in a flat text file, one book per line as
// id,title,author,isAvailable,field,borrowedBy. Values are not escaped, so a comma
// inside a title or author shifts the remaining columns of that record.
#[derive(Debug)]
pub struct FileBookRepository {
    path: PathBuf,
}

impl FileBookRepository {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl Repository<BookEntity> for FileBookRepository {
    fn load(&self) -> LibraryResult<Vec<BookEntity>> {
        if !self.path.exists() {
            debug!("no book store at {:?}, starting empty", self.path);
            return Ok(vec![]);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        let mut books = vec![];
        for (n, line) in contents.lines().enumerate() {
            let parts: Vec<&str> = line.split(',').collect();
            if parts.len() < RECORD_FIELDS {
                warn!("skipping line {} of {:?} with {} fields", n + 1, self.path, parts.len());
                continue;
            }
            // a single bad value rejects the whole file, not just the line
            let book = map_to_book(&parts).map_err(|err| LibraryError::serialization(
                format!("line {} of {:?}: {}", n + 1, self.path, err).as_str()))?;
            books.push(book);
        }
        Ok(books)
    }

    // Truncates and rewrites the file in place. A failure part way through can
    // leave the file short; there is no temp file or backup.
    fn save(&self, entities: &[BookEntity]) -> LibraryResult<usize> {
        let mut writer = BufWriter::new(File::create(&self.path)?);
        for book in entities {
            writeln!(writer, "{}", to_record(book))?;
        }
        writer.flush()?;
        Ok(entities.len())
    }
}

impl BookRepository for FileBookRepository {
    fn describe(&self) -> String {
        format!("file {:?}", self.path)
    }
}

fn map_to_book(parts: &[&str]) -> LibraryResult<BookEntity> {
    let id = parse_number_attribute("id", parts[0])?;
    let is_available = parse_bool_attribute("isAvailable", parts[3])?;
    let field: Field = parts[4].trim().parse()?;
    let borrowed_by = Some(parts[5].trim().to_string()).filter(|b| !b.is_empty());
    Ok(BookEntity {
        id,
        title: parts[1].trim().to_string(),
        author: parts[2].trim().to_string(),
        is_available,
        field,
        borrowed_by,
    })
}

fn to_record(book: &BookEntity) -> String {
    format!("{},{},{},{},{},{}", book.id, book.title, book.author, book.is_available,
            book.field, book.borrowed_by.as_deref().unwrap_or(""))
}

fn parse_number_attribute(name: &str, value: &str) -> LibraryResult<i32> {
    value.trim().parse::<i32>().map_err(|err| LibraryError::serialization(
        format!("invalid {} {:?}: {}", name, value, err).as_str()))
}

fn parse_bool_attribute(name: &str, value: &str) -> LibraryResult<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(LibraryError::serialization(format!("invalid {} {:?}", name, value).as_str()))
    }
}
