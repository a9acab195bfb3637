use std::io;
use std::io::{BufRead, Write};
use tracing::warn;
use crate::books::domain::model::BookEntity;
use crate::catalog::domain::CatalogService;
use crate::core::library::Field;

const MENU: &str = "\n=== Library Menu ===
1. View All Books
2. Add Book
3. Delete Book
4. Borrow Book
5. Return Book
6. Search Book by Title
7. View My Borrowed Book
8. Exit";

// Console is the interactive menu front end. It only talks to the catalog through
// the CatalogService contract and owns all prompting and printing.
pub struct Console<R: BufRead, W: Write> {
    catalog_service: Box<dyn CatalogService>,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(catalog_service: Box<dyn CatalogService>, input: R, output: W) -> Self {
        Self {
            catalog_service,
            input,
            output,
        }
    }

    // Runs until the exit choice or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Library Management Console!")?;
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter choice (1-8): ")? else {
                break;
            };
            let res = match choice.as_str() {
                "1" => self.view_books(),
                "2" => self.add_book(),
                "3" => self.delete_book(),
                "4" => self.borrow_book(),
                "5" => self.return_book(),
                "6" => self.search_books(),
                "7" => self.view_borrowed_book(),
                "8" => break,
                _ => writeln!(self.output, "Invalid choice. Please enter a valid option (1-8)."),
            };
            if let Err(err) = res {
                if err.kind() == io::ErrorKind::BrokenPipe {
                    return Err(err);
                }
                warn!("menu choice {} failed: {}", choice, err);
                writeln!(self.output, "An unexpected error occurred: {}", err)?;
            }
        }
        writeln!(self.output, "\nThank you for using the Library Management App!")?;
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_number(&mut self, message: &str) -> io::Result<Option<i32>> {
        let Some(value) = self.prompt(message)? else {
            return Ok(None);
        };
        match value.parse::<i32>() {
            Ok(n) => Ok(Some(n)),
            Err(_) => {
                writeln!(self.output, "Invalid input. ID must be a number.")?;
                Ok(None)
            }
        }
    }

    fn select_field(&mut self) -> io::Result<Option<Field>> {
        writeln!(self.output, "\nSelect field/category of the book:")?;
        for (n, field) in Field::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", n + 1, field)?;
        }
        let Some(choice) = self.prompt("Enter choice (1-7): ")? else {
            return Ok(None);
        };
        let field = field_from_menu_choice(choice.as_str());
        if field.is_none() {
            writeln!(self.output, "Invalid field choice.")?;
        }
        Ok(field)
    }

    fn print_books(&mut self, books: &[BookEntity]) -> io::Result<()> {
        for book in books {
            writeln!(self.output, "{}", book)?;
        }
        Ok(())
    }

    fn view_books(&mut self) -> io::Result<()> {
        let books = self.catalog_service.list_books().to_vec();
        if books.is_empty() {
            return writeln!(self.output, "No books available.");
        }
        self.print_books(&books)
    }

    fn add_book(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_number("Enter new book ID (number): ")? else {
            return Ok(());
        };
        let Some(title) = self.prompt("Enter book title: ")? else {
            return Ok(());
        };
        let Some(author) = self.prompt("Enter author name: ")? else {
            return Ok(());
        };
        let Some(field) = self.select_field()? else {
            return Ok(());
        };
        if self.catalog_service.add_book(id, title.as_str(), author.as_str(), field) {
            writeln!(self.output, "Book added successfully.")
        } else {
            writeln!(self.output, "Book ID already exists.")
        }
    }

    fn delete_book(&mut self) -> io::Result<()> {
        let Some(id) = self.prompt_number("Enter book ID to delete: ")? else {
            return Ok(());
        };
        if self.catalog_service.delete_book(id) {
            writeln!(self.output, "Book deleted successfully.")
        } else {
            writeln!(self.output, "Cannot delete book (may not exist or is borrowed).")
        }
    }

    fn borrow_book(&mut self) -> io::Result<()> {
        let Some(borrower_id) = self.prompt("Enter your admission number (Format: GUYYYYNNNNN): ")? else {
            return Ok(());
        };
        let Some(field) = self.select_field()? else {
            return Ok(());
        };
        writeln!(self.output, "\nAvailable books in {}:", field)?;
        let available = self.catalog_service.available_books_in_field(field.to_string().as_str());
        if available.is_empty() {
            return writeln!(self.output, "No available books in this field.");
        }
        self.print_books(&available)?;
        let Some(book_id) = self.prompt_number("Enter book ID to borrow: ")? else {
            return Ok(());
        };
        if self.catalog_service.borrow_book(borrower_id.as_str(), field.to_string().as_str(), book_id) {
            writeln!(self.output, "Book borrowed successfully.")
        } else {
            writeln!(self.output, "Borrowing failed. Check admission number or book availability.")
        }
    }

    fn return_book(&mut self) -> io::Result<()> {
        let Some(borrower_id) = self.prompt("Enter your admission number (Format: GUYYYYNNNNN): ")? else {
            return Ok(());
        };
        if self.catalog_service.return_book(borrower_id.as_str()) {
            writeln!(self.output, "Book returned successfully.")
        } else {
            writeln!(self.output, "Return failed. You may not have borrowed any book.")
        }
    }

    fn search_books(&mut self) -> io::Result<()> {
        let Some(keyword) = self.prompt("Enter book title or keyword to search: ")? else {
            return Ok(());
        };
        let found = self.catalog_service.search_books_by_title(keyword.as_str());
        if found.is_empty() {
            return writeln!(self.output, "No books found matching: {}", keyword);
        }
        self.print_books(&found)
    }

    fn view_borrowed_book(&mut self) -> io::Result<()> {
        let Some(borrower_id) = self.prompt("Enter your admission number (Format: GUYYYYNNNNN): ")? else {
            return Ok(());
        };
        match self.catalog_service.borrowed_book_by(borrower_id.as_str()) {
            Some(book) => writeln!(self.output, "You have borrowed: {}", book),
            None => writeln!(self.output, "You have not borrowed any book."),
        }
    }
}

// maps the 1-7 menu numbering onto the field set
pub fn field_from_menu_choice(choice: &str) -> Option<Field> {
    let n = choice.trim().parse::<usize>().ok()?;
    Field::ALL.get(n.checked_sub(1)?).copied()
}
