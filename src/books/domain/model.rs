use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::Field;

// BookEntity abstracts a single physical book in the catalog. A book is either
// available or held by exactly one borrower; check_out and check_in are the
// only ways to move between the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub is_available: bool,
    pub field: Field,
    pub borrowed_by: Option<String>,
}

impl BookEntity {
    pub fn new(id: i32, title: &str, author: &str, field: Field) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            is_available: true,
            field,
            borrowed_by: None,
        }
    }

    pub fn check_out(&mut self, borrower_id: &str) {
        self.is_available = false;
        self.borrowed_by = Some(borrower_id.to_string());
    }

    pub fn check_in(&mut self) {
        self.is_available = true;
        self.borrowed_by = None;
    }

    // unavailable books with a borrower are the ones that feed the borrower index
    pub fn borrower(&self) -> Option<&str> {
        if self.is_available {
            return None;
        }
        self.borrowed_by.as_deref().filter(|b| !b.is_empty())
    }

    pub fn title_contains(&self, keyword: &str) -> bool {
        self.title.to_lowercase().contains(keyword.to_lowercase().as_str())
    }
}

impl Display for BookEntity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} by {} - {} - ", self.id, self.title, self.author, self.field)?;
        match self.borrower() {
            Some(borrower) => write!(f, "Borrowed by {}", borrower),
            None => write!(f, "Available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::core::library::Field;

    #[test]
    fn test_should_build_books() {
        let book = BookEntity::new(1, "Intro to C", "A. Smith", Field::Programming);
        assert_eq!(1, book.id);
        assert_eq!("Intro to C", book.title.as_str());
        assert!(book.is_available);
        assert_eq!(None, book.borrowed_by);
    }

    #[test]
    fn test_should_check_out_and_in() {
        let mut book = BookEntity::new(1, "Intro to C", "A. Smith", Field::Programming);
        book.check_out("GU202312345");
        assert!(!book.is_available);
        assert_eq!(Some("GU202312345"), book.borrower());
        book.check_in();
        assert!(book.is_available);
        assert_eq!(None, book.borrowed_by);
        assert_eq!(None, book.borrower());
    }

    #[test]
    fn test_should_match_title_ignoring_case() {
        let book = BookEntity::new(2, "Law of Contracts", "B. Jones", Field::Law);
        assert!(book.title_contains("law"));
        assert!(book.title_contains("CONTRACT"));
        assert!(book.title_contains(""));
        assert!(!book.title_contains("physics"));
    }

    #[test]
    fn test_should_display_book() {
        let mut book = BookEntity::new(3, "Forensic Basics", "C. Doe", Field::Forensic);
        assert_eq!("[3] Forensic Basics by C. Doe - Forensic - Available", book.to_string());
        book.check_out("GU202300001");
        assert_eq!("[3] Forensic Basics by C. Doe - Forensic - Borrowed by GU202300001", book.to_string());
    }
}
