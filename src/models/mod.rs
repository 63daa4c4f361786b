mod book;

pub use book::{Book, BookSummary};
