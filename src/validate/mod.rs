//! Input validation
//!
//! Pure checks applied before any store access or business rule. Identifiers
//! must be positive integer literals, names and titles must be non-blank, and
//! combined inputs ("title/author", "bookId/readerId") must split into
//! exactly two well-formed parts.

mod errors;

pub use errors::{ValidateError, ValidateResult};

/// Separator for combined two-part inputs.
const PART_SEPARATOR: char = '/';

/// Validates a single identifier string.
///
/// Accepts decimal positive integers ("1", " 42 "); rejects zero, signs,
/// non-digits and empty input.
pub fn single_id(raw: &str) -> ValidateResult<u64> {
    let candidate = raw.trim();
    let digits_only = !candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_digit());

    match candidate.parse::<u64>() {
        Ok(id) if digits_only && id > 0 => Ok(id),
        _ => Err(ValidateError::InvalidId(raw.to_string())),
    }
}

/// Validates a reader or author name, returning it trimmed.
pub fn name(raw: &str) -> ValidateResult<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidateError::InvalidName);
    }
    Ok(trimmed)
}

/// Validates a book title, returning it trimmed.
pub fn book_title(raw: &str) -> ValidateResult<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidateError::InvalidBookTitle);
    }
    Ok(trimmed)
}

/// Validates a combined "title/author" input and splits it.
///
/// Both parts must be present and non-blank; "Title", "Title/" and "/Author"
/// are all rejected at the format level.
pub fn new_book_input(raw: &str) -> ValidateResult<(&str, &str)> {
    let (title, author) =
        split_pair(raw).ok_or_else(|| invalid_format(raw, "'title/author'"))?;
    if title.is_empty() || author.is_empty() {
        return Err(invalid_format(raw, "'title/author'"));
    }
    Ok((title, author))
}

/// Validates a combined "bookId/readerId" input and parses both ids.
pub fn borrow_input(raw: &str) -> ValidateResult<(u64, u64)> {
    let (book, reader) =
        split_pair(raw).ok_or_else(|| invalid_format(raw, "'bookId/readerId'"))?;

    let book_id = single_id(book).map_err(|_| invalid_format(raw, "'bookId/readerId'"))?;
    let reader_id = single_id(reader).map_err(|_| invalid_format(raw, "'bookId/readerId'"))?;
    Ok((book_id, reader_id))
}

/// Splits on the separator into exactly two trimmed parts.
fn split_pair(raw: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = raw.split(PART_SEPARATOR).collect();
    match parts.as_slice() {
        [first, second] => Some((first.trim(), second.trim())),
        _ => None,
    }
}

fn invalid_format(input: &str, expected: &'static str) -> ValidateError {
    ValidateError::InvalidInputFormat {
        input: input.to_string(),
        expected,
    }
}
