use bookdeck_types::{Book, BookFilter};

/// Decide whether one book satisfies a filter.
///
/// A blank title clause passes everything; otherwise the match is a
/// case-insensitive substring test. The author and genre clauses are
/// delegated to their closed select enums. All three must hold.
pub fn matches(book: &Book, filter: &BookFilter) -> bool {
    let needle = filter.title.trim();
    let title_match =
        needle.is_empty() || book.title.to_lowercase().contains(&needle.to_lowercase());

    title_match && filter.author.admits(&book.author) && filter.genre.admits(&book.genres)
}

/// Indices of the books satisfying `filter`, in catalog order
pub fn filter_books(books: &[Book], filter: &BookFilter) -> Vec<usize> {
    books
        .iter()
        .enumerate()
        .filter(|(_, book)| matches(book, filter))
        .map(|(index, _)| index)
        .collect()
}
