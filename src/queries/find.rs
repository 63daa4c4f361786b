use anyhow;
use futures::stream::TryStreamExt;
use log::trace;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

use crate::models::{Book, BookSummary};

pub fn genre_filter(genre: &str) -> Document {
    doc! { "genre": genre }
}

pub fn published_after_filter(year: i32) -> Document {
    doc! { "published_year": { "$gt": year } }
}

pub fn author_filter(author: &str) -> Document {
    doc! { "author": author }
}

pub fn in_stock_published_after_filter(year: i32) -> Document {
    doc! { "in_stock": true, "published_year": { "$gt": year } }
}

/// Keeps title, author and price; the record id never reaches the caller.
pub fn summary_projection() -> Document {
    doc! { "title": 1, "author": 1, "price": 1, "_id": 0 }
}

pub async fn by_genre(books: &Collection<Book>, genre: &str) -> anyhow::Result<Vec<Book>> {
    trace!("find::by_genre({})", genre);

    let found = books.find(genre_filter(genre)).await?.try_collect().await?;

    Ok(found)
}

pub async fn published_after(books: &Collection<Book>, year: i32) -> anyhow::Result<Vec<Book>> {
    trace!("find::published_after({})", year);

    let found = books
        .find(published_after_filter(year))
        .await?
        .try_collect()
        .await?;

    Ok(found)
}

pub async fn by_author(books: &Collection<Book>, author: &str) -> anyhow::Result<Vec<Book>> {
    trace!("find::by_author({})", author);

    let found = books.find(author_filter(author)).await?.try_collect().await?;

    Ok(found)
}

/// In-stock records newer than `year`, projected to summaries, cheapest
/// first, at most `limit` after skipping `skip`.
pub async fn summaries_in_stock_after(
    books: &Collection<Book>,
    year: i32,
    limit: i64,
    skip: u64,
) -> anyhow::Result<Vec<BookSummary>> {
    trace!("find::summaries_in_stock_after({}, {}, {})", year, limit, skip);

    let found = books
        .clone_with_type::<BookSummary>()
        .find(in_stock_published_after_filter(year))
        .projection(summary_projection())
        .sort(doc! { "price": 1 })
        .limit(limit)
        .skip(skip)
        .await?
        .try_collect()
        .await?;

    Ok(found)
}

#[cfg(test)]
mod test {
    use mongodb::bson::doc;

    use super::*;

    #[test]
    fn genre_filter_matches_exactly() {
        assert_eq!(doc! { "genre": "Fantasy" }, genre_filter("Fantasy"));
    }

    #[test]
    fn published_after_filter_is_strictly_greater() {
        assert_eq!(
            doc! { "published_year": { "$gt": 2010 } },
            published_after_filter(2010)
        );
    }

    #[test]
    fn combined_filter_requires_stock_and_year() {
        assert_eq!(
            doc! { "in_stock": true, "published_year": { "$gt": 1950 } },
            in_stock_published_after_filter(1950)
        );
    }

    #[test]
    fn summary_projection_drops_the_id() {
        assert_eq!(
            doc! { "title": 1, "author": 1, "price": 1, "_id": 0 },
            summary_projection()
        );
    }
}
