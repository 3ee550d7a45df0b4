use std::error::Error;

use clap::Parser;
use rusqlite::Connection;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use transaction_dashboard::{SeedSource, fetch_seed_transactions, initialize_db, seed_transactions};

/// The data set the dashboard was built around.
const DEFAULT_SOURCE: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

/// A utility for loading transactions into the database of the transaction dashboard.
///
/// Any transactions already in the database are replaced.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database. Created if it does not exist.
    #[arg(long, env = "DB_PATH")]
    db_path: String,

    /// A URL or file path to a JSON array of transactions.
    #[arg(long, short, default_value = DEFAULT_SOURCE)]
    source: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let source = SeedSource::from(args.source.as_str());

    tracing::info!("Reading transactions from {source}");
    let transactions = fetch_seed_transactions(&source).await?;

    let conn = Connection::open(&args.db_path)?;
    initialize_db(&conn)?;
    let inserted = seed_transactions(&transactions, &conn)?;

    println!("Loaded {inserted} transactions into {}", args.db_path);

    Ok(())
}
