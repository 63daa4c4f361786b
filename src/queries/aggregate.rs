use anyhow;
use futures::stream::TryStreamExt;
use log::trace;
use mongodb::bson::{doc, Document};
use mongodb::Collection;
use serde::Deserialize;

use crate::models::Book;

/// Average price of one genre's records.
#[derive(Debug, Deserialize)]
pub struct GenreAverage {
    #[serde(rename = "_id")]
    pub genre: String,
    #[serde(rename = "avgPrice")]
    pub avg_price: f64,
}

#[derive(Debug, Deserialize)]
pub struct AuthorCount {
    #[serde(rename = "_id")]
    pub author: String,
    pub count: i64,
}

/// Record count for one decade bucket, keyed by floor(published_year / 10).
#[derive(Debug, Deserialize)]
pub struct DecadeCount {
    #[serde(rename = "_id")]
    pub key: DecadeKey,
    #[serde(rename = "totalBooks")]
    pub total_books: i64,
}

#[derive(Debug, Deserialize)]
pub struct DecadeKey {
    pub decade: f64,
}

impl DecadeCount {
    pub fn label(&self) -> String {
        decade_label(self.key.decade)
    }
}

/// 194 -> "1940s"
pub fn decade_label(bucket: f64) -> String {
    format!("{}0s", bucket as i64)
}

pub fn avg_price_by_genre_pipeline() -> Vec<Document> {
    vec![doc! { "$group": { "_id": "$genre", "avgPrice": { "$avg": "$price" } } }]
}

pub fn most_prolific_author_pipeline() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$author", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1 } },
        doc! { "$limit": 1 },
    ]
}

pub fn books_per_decade_pipeline() -> Vec<Document> {
    vec![doc! {
        "$group": {
            "_id": { "decade": { "$floor": { "$divide": ["$published_year", 10] } } },
            "totalBooks": { "$sum": 1 },
        }
    }]
}

pub async fn avg_price_by_genre(books: &Collection<Book>) -> anyhow::Result<Vec<GenreAverage>> {
    trace!("aggregate::avg_price_by_genre()");

    let rows = books
        .aggregate(avg_price_by_genre_pipeline())
        .with_type::<GenreAverage>()
        .await?
        .try_collect()
        .await?;

    Ok(rows)
}

pub async fn most_prolific_author(books: &Collection<Book>) -> anyhow::Result<Vec<AuthorCount>> {
    trace!("aggregate::most_prolific_author()");

    let rows = books
        .aggregate(most_prolific_author_pipeline())
        .with_type::<AuthorCount>()
        .await?
        .try_collect()
        .await?;

    Ok(rows)
}

pub async fn books_per_decade(books: &Collection<Book>) -> anyhow::Result<Vec<DecadeCount>> {
    trace!("aggregate::books_per_decade()");

    let rows = books
        .aggregate(books_per_decade_pipeline())
        .with_type::<DecadeCount>()
        .await?
        .try_collect()
        .await?;

    Ok(rows)
}

#[cfg(test)]
mod test {
    use mongodb::bson::doc;

    use super::*;

    #[test]
    fn avg_price_pipeline_groups_by_genre() {
        assert_eq!(
            vec![doc! { "$group": { "_id": "$genre", "avgPrice": { "$avg": "$price" } } }],
            avg_price_by_genre_pipeline()
        );
    }

    #[test]
    fn prolific_author_pipeline_sorts_and_keeps_one() {
        let pipeline = most_prolific_author_pipeline();

        assert_eq!(3, pipeline.len());
        assert_eq!(
            doc! { "$group": { "_id": "$author", "count": { "$sum": 1 } } },
            pipeline[0]
        );
        assert_eq!(doc! { "$sort": { "count": -1 } }, pipeline[1]);
        assert_eq!(doc! { "$limit": 1 }, pipeline[2]);
    }

    #[test]
    fn decade_pipeline_buckets_by_floored_division() {
        assert_eq!(
            vec![doc! {
                "$group": {
                    "_id": { "decade": { "$floor": { "$divide": ["$published_year", 10] } } },
                    "totalBooks": { "$sum": 1 },
                }
            }],
            books_per_decade_pipeline()
        );
    }

    #[test]
    fn decade_bucket_follows_floor_division() {
        // same expression the $group stage evaluates server-side
        let bucket = |year: f64| (year / 10.0).floor();

        assert_eq!(bucket(1949.0), bucket(1944.0));
        assert_ne!(bucket(1949.0), bucket(1951.0));
    }

    #[test]
    fn decade_label_formats_bucket() {
        assert_eq!("1940s", decade_label(194.0));
        assert_eq!("1810s", decade_label(181.0));
    }
}
