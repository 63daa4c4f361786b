use anyhow;
use log::{info, trace};
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database, IndexModel};

use crate::models::Book;

pub fn title_index() -> IndexModel {
    IndexModel::builder().keys(doc! { "title": 1 }).build()
}

pub fn author_year_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "author": 1, "published_year": 1 })
        .build()
}

/// Creates the single-field title index and the compound
/// (author, published_year) index, returning their server-side names.
pub async fn create_indexes(books: &Collection<Book>) -> anyhow::Result<(String, String)> {
    trace!("index::create_indexes()");

    let title = books.create_index(title_index()).await?;
    info!("created index {}", title.index_name);

    let compound = books.create_index(author_year_index()).await?;
    info!("created index {}", compound.index_name);

    Ok((title.index_name, compound.index_name))
}

pub fn explain_command(collection: &str, filter: Document) -> Document {
    doc! {
        "explain": { "find": collection, "filter": filter },
        "verbosity": "executionStats",
    }
}

/// Asks the query planner how it would run a lookup by title, returning
/// the executionStats document of the explain reply.
pub async fn explain_title_lookup(
    db: &Database,
    collection: &str,
    title: &str,
) -> anyhow::Result<Document> {
    trace!("index::explain_title_lookup({})", title);

    let command = explain_command(collection, doc! { "title": title });
    let reply = db.run_command(command).await?;

    let stats = reply.get_document("executionStats")?.clone();

    Ok(stats)
}

#[cfg(test)]
mod test {
    use mongodb::bson::doc;

    use super::*;

    #[test]
    fn title_index_is_single_field_ascending() {
        assert_eq!(doc! { "title": 1 }, title_index().keys);
    }

    #[test]
    fn compound_index_orders_author_before_year() {
        assert_eq!(
            doc! { "author": 1, "published_year": 1 },
            author_year_index().keys
        );
    }

    #[test]
    fn explain_command_asks_for_execution_stats() {
        assert_eq!(
            doc! {
                "explain": { "find": "books", "filter": { "title": "Sapiens" } },
                "verbosity": "executionStats",
            },
            explain_command("books", doc! { "title": "Sapiens" })
        );
    }
}
