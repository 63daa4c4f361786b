use serde::{Deserialize, Serialize};

/// A single catalog record as stored in the `books` collection.
///
/// Titles are unique within the catalog, so updates and deletes key on
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    pub price: f64,
    pub in_stock: bool,
    pub pages: i32,
    pub publisher: String,
}

/// Projected view of a record: title, author and price only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookSummary {
    pub title: String,
    pub author: String,
    pub price: f64,
}

impl Book {
    fn new(
        title: &str,
        author: &str,
        genre: &str,
        published_year: i32,
        price: f64,
        in_stock: bool,
        pages: i32,
        publisher: &str,
    ) -> Book {
        Book {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            published_year,
            price,
            in_stock,
            pages,
            publisher: publisher.to_string(),
        }
    }

    /// The fixed list of records the seeder provisions.
    pub fn catalog() -> Vec<Book> {
        vec![
            Book::new(
                "To Kill a Mockingbird",
                "Harper Lee",
                "Fiction",
                1960,
                12.99,
                true,
                336,
                "J. B. Lippincott & Co.",
            ),
            Book::new(
                "1984",
                "George Orwell",
                "Dystopian",
                1949,
                10.99,
                true,
                328,
                "Secker & Warburg",
            ),
            Book::new(
                "The Great Gatsby",
                "F. Scott Fitzgerald",
                "Fiction",
                1925,
                9.99,
                true,
                180,
                "Charles Scribner's Sons",
            ),
            Book::new(
                "Brave New World",
                "Aldous Huxley",
                "Dystopian",
                1932,
                11.5,
                false,
                311,
                "Chatto & Windus",
            ),
            Book::new(
                "The Hobbit",
                "J.R.R. Tolkien",
                "Fantasy",
                1937,
                14.99,
                true,
                310,
                "George Allen & Unwin",
            ),
            Book::new(
                "The Catcher in the Rye",
                "J.D. Salinger",
                "Fiction",
                1951,
                8.99,
                true,
                224,
                "Little, Brown and Company",
            ),
            Book::new(
                "Pride and Prejudice",
                "Jane Austen",
                "Romance",
                1813,
                7.99,
                true,
                432,
                "T. Egerton, Whitehall",
            ),
            Book::new(
                "The Lord of the Rings",
                "J.R.R. Tolkien",
                "Fantasy",
                1954,
                19.99,
                true,
                1178,
                "Allen & Unwin",
            ),
            Book::new(
                "Animal Farm",
                "George Orwell",
                "Political Satire",
                1945,
                8.5,
                false,
                112,
                "Secker & Warburg",
            ),
            Book::new(
                "The Alchemist",
                "Paulo Coelho",
                "Fiction",
                1988,
                10.99,
                true,
                197,
                "HarperOne",
            ),
            Book::new(
                "Moby Dick",
                "Herman Melville",
                "Adventure",
                1851,
                12.5,
                false,
                635,
                "Harper & Brothers",
            ),
            Book::new(
                "Wuthering Heights",
                "Emily Brontë",
                "Gothic Fiction",
                1847,
                9.99,
                true,
                342,
                "Thomas Cautley Newby",
            ),
        ]
    }

    /// One-line form used by the seeder's numbered read-back.
    pub fn summary(&self) -> String {
        format!(
            "\"{}\" by {} ({})",
            self.title, self.author, self.published_year
        )
    }
}

#[cfg(test)]
mod test {
    use super::Book;

    #[test]
    fn catalog_has_twelve_unique_titles() {
        let catalog = Book::catalog();

        assert_eq!(12, catalog.len());

        let mut titles: Vec<&str> = catalog.iter().map(|b| b.title.as_str()).collect();
        titles.sort();
        titles.dedup();

        assert_eq!(12, titles.len());
    }

    #[test]
    fn catalog_keeps_known_record_values() {
        let catalog = Book::catalog();

        let orwell = catalog.iter().find(|b| b.title == "1984").unwrap();
        assert_eq!("George Orwell", orwell.author);
        assert_eq!("Dystopian", orwell.genre);
        assert_eq!(1949, orwell.published_year);
        assert_eq!(10.99, orwell.price);
        assert!(orwell.in_stock);
        assert_eq!(328, orwell.pages);
        assert_eq!("Secker & Warburg", orwell.publisher);

        let hobbit = catalog.iter().find(|b| b.title == "The Hobbit").unwrap();
        assert_eq!("J.R.R. Tolkien", hobbit.author);
        assert_eq!(1937, hobbit.published_year);
    }

    #[test]
    fn summary_prints_title_author_and_year() {
        let catalog = Book::catalog();
        let first = &catalog[0];

        assert_eq!(
            "\"To Kill a Mockingbird\" by Harper Lee (1960)",
            first.summary()
        );
    }
}
