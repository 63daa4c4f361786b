use anyhow;
use log::{debug, trace};
use mongodb::bson::{doc, Document};
use mongodb::results::{DeleteResult, UpdateResult};
use mongodb::Collection;

use crate::models::Book;

pub fn title_filter(title: &str) -> Document {
    doc! { "title": title }
}

pub fn price_update(price: f64) -> Document {
    doc! { "$set": { "price": price } }
}

pub async fn set_price_by_title(
    books: &Collection<Book>,
    title: &str,
    price: f64,
) -> anyhow::Result<UpdateResult> {
    trace!("mutate::set_price_by_title({}, {})", title, price);

    let result = books
        .update_one(title_filter(title), price_update(price))
        .await?;

    debug!(
        "matched = {}, modified = {}",
        result.matched_count, result.modified_count
    );

    Ok(result)
}

pub async fn delete_by_title(
    books: &Collection<Book>,
    title: &str,
) -> anyhow::Result<DeleteResult> {
    trace!("mutate::delete_by_title({})", title);

    let result = books.delete_one(title_filter(title)).await?;

    debug!("deleted = {}", result.deleted_count);

    Ok(result)
}

#[cfg(test)]
mod test {
    use mongodb::bson::doc;

    use super::*;

    #[test]
    fn title_filter_keys_on_the_exact_title() {
        assert_eq!(doc! { "title": "1984" }, title_filter("1984"));
    }

    #[test]
    fn price_update_sets_only_the_price() {
        assert_eq!(doc! { "$set": { "price": 1500.0 } }, price_update(1500.0));
    }
}
