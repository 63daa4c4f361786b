extern crate bookstore_provisioner;

use anyhow;
use log::info;
use mongodb::Client;

use bookstore_provisioner::models::Book;
use bookstore_provisioner::seed;
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
    let books = client
        .database(&config.database)
        .collection::<Book>(&config.collection);

    let dropped = seed::reset_collection(&books).await?;
    if dropped > 0 {
        println!("Collection already contained {} documents, dropped", dropped);
    }
    stage::update(Stage::ResetCollection);

    let inserted = seed::insert_catalog(&books).await?;
    println!("{} books successfully inserted", inserted);
    stage::update(Stage::SeededCatalog);

    let all = seed::read_back(&books).await?;
    println!("\nInserted books:");
    for (i, book) in all.iter().enumerate() {
        println!("{}. {}", i + 1, book.summary());
    }

    Ok(())
}
