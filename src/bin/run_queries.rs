extern crate bookstore_provisioner;

use anyhow;
use log::info;
use mongodb::Client;

use bookstore_provisioner::models::Book;
use bookstore_provisioner::queries::{aggregate, find, index, mutate};
use bookstore_provisioner::stage::{self, Stage};
use bookstore_provisioner::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env()?;

    let client = Client::with_uri_str(&config.mongodb_uri).await?;
    info!("connected to {}", config.mongodb_uri);

    let result = run(&client, &config).await;

    if let Err(ref err) = result {
        stage::update(Stage::Fail(err));
    }

    // release the connection on both paths
    client.shutdown().await;
    info!("connection closed");

    result
}

async fn run(client: &Client, config: &Config) -> anyhow::Result<()> {
    let db = client.database(&config.database);
    let books = db.collection::<Book>(&config.collection);

    println!("=== Basic Queries ===");

    let self_help = find::by_genre(&books, "Self-help").await?;
    print_books("genre = Self-help", &self_help);
    stage::update(Stage::FilteredGenre);

    let recent = find::published_after(&books, 2010).await?;
    print_books("published after 2010", &recent);
    stage::update(Stage::FilteredRecent);

    let orwell = find::by_author(&books, "George Orwell").await?;
    print_books("author = George Orwell", &orwell);
    stage::update(Stage::FilteredAuthor);

    let repriced = mutate::set_price_by_title(&books, "1984", 1500.0).await?;
    println!(
        "Repriced \"1984\": matched {}, modified {}",
        repriced.matched_count, repriced.modified_count
    );
    stage::update(Stage::RepricedBook);

    let removed = mutate::delete_by_title(&books, "The Hobbit").await?;
    println!("Removed \"The Hobbit\": deleted {}", removed.deleted_count);
    stage::update(Stage::RemovedBook);

    println!("\n=== Advanced Queries ===");

    let summaries = find::summaries_in_stock_after(&books, 2010, 5, 0).await?;
    println!("in stock, published after 2010 ({} matches)", summaries.len());
    for summary in &summaries {
        println!("  {} by {} - {:.2}", summary.title, summary.author, summary.price);
    }
    stage::update(Stage::ProjectedSummaries);

    println!("\n=== Aggregation Pipelines ===");

    println!("Average price per genre:");
    for row in aggregate::avg_price_by_genre(&books).await? {
        println!("  {}: {:.2}", row.genre, row.avg_price);
    }
    stage::update(Stage::AveragedPrices);

    println!("Most prolific author:");
    for row in aggregate::most_prolific_author(&books).await? {
        println!("  {}: {} books", row.author, row.count);
    }
    stage::update(Stage::RankedAuthors);

    println!("Books per decade:");
    for row in aggregate::books_per_decade(&books).await? {
        println!("  {}: {} books", row.label(), row.total_books);
    }
    stage::update(Stage::BucketedDecades);

    println!("\n=== Indexing ===");

    let (title_index, compound_index) = index::create_indexes(&books).await?;
    println!("Created indexes: {}, {}", title_index, compound_index);

    let stats = index::explain_title_lookup(&db, &config.collection, "Sapiens").await?;
    println!("Execution stats:\n{}", serde_json::to_string_pretty(&stats)?);
    stage::update(Stage::IndexedCatalog);

    Ok(())
}

fn print_books(heading: &str, books: &[Book]) {
    println!("{} ({} matches)", heading, books.len());
    for book in books {
        println!("  {}", book.summary());
    }
}
