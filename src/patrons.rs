use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // GU, a four digit year, then a five digit sequence: GU202312345
    static ref BORROWER_ID: Regex = Regex::new(r"^GU[0-9]{4}[0-9]{5}$").expect("valid borrower id pattern");
}

pub fn is_valid_borrower_id(borrower_id: &str) -> bool {
    BORROWER_ID.is_match(borrower_id)
}
