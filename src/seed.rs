use anyhow;
use futures::stream::TryStreamExt;
use log::{debug, info, trace};
use mongodb::bson::doc;
use mongodb::Collection;

use crate::models::Book;

/// Drops the collection when it already holds documents, so reseeding
/// replaces the catalog instead of appending to it. Returns how many
/// documents were discarded.
pub async fn reset_collection(books: &Collection<Book>) -> anyhow::Result<u64> {
    trace!("seed::reset_collection()");

    let existing = books.count_documents(doc! {}).await?;

    if existing > 0 {
        info!("collection already contains {} documents, dropping", existing);
        books.drop().await?;
    }

    Ok(existing)
}

pub async fn insert_catalog(books: &Collection<Book>) -> anyhow::Result<usize> {
    trace!("seed::insert_catalog()");

    let catalog = Book::catalog();
    let result = books.insert_many(&catalog).await?;

    debug!("inserted ids = {:?}", result.inserted_ids);

    Ok(result.inserted_ids.len())
}

pub async fn read_back(books: &Collection<Book>) -> anyhow::Result<Vec<Book>> {
    trace!("seed::read_back()");

    let all = books.find(doc! {}).await?.try_collect().await?;

    Ok(all)
}
