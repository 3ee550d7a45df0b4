//! Defines the core data model and database queries for transactions.

use rusqlite::{Connection, Row, Transaction as SqlTransaction, TransactionBehavior};
use serde::{Deserialize, Serialize};

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// A product sale record.
///
/// Records are loaded in bulk by the seeding tool and are read-only afterwards.
/// The field order matches the JSON shape the dashboard client expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The identifier from the data source.
    ///
    /// Not guaranteed to be unique, the database orders records by its own key.
    pub id: i64,
    /// The name of the product.
    #[serde(default)]
    pub title: String,
    /// A text description of the product.
    #[serde(default)]
    pub description: String,
    /// The listed price of the product.
    pub price: f64,
    /// The product category, e.g. "electronics".
    #[serde(default)]
    pub category: String,
    /// Whether the product was sold.
    #[serde(default)]
    pub sold: bool,
    /// A URL to a picture of the product.
    #[serde(default)]
    pub image: String,
    /// When the sale happened, as the string supplied by the data source.
    ///
    /// Usually an RFC 3339 date-time such as "2021-11-27T20:29:54+05:30".
    pub date_of_sale: String,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(id: i64, price: f64, date_of_sale: &str) -> TransactionBuilder {
        TransactionBuilder {
            id,
            title: String::new(),
            description: String::new(),
            price,
            category: String::new(),
            sold: false,
            image: String::new(),
            date_of_sale: date_of_sale.to_owned(),
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// Text fields default to empty strings and `sold` defaults to `false`.
///
/// # Examples
///
/// ```
/// use transaction_dashboard::Transaction;
///
/// let transaction = Transaction::build(7, 329.85, "2022-03-27T20:29:54+05:30")
///     .title("Mens Casual Slim Fit")
///     .category("men's clothing")
///     .sold(true)
///     .finish();
///
/// assert_eq!(transaction.category, "men's clothing");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    id: i64,
    title: String,
    description: String,
    price: f64,
    category: String,
    sold: bool,
    image: String,
    date_of_sale: String,
}

impl TransactionBuilder {
    /// Set the product name.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    /// Set the product description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    /// Set the product category.
    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_owned();
        self
    }

    /// Set whether the product was sold.
    pub fn sold(mut self, sold: bool) -> Self {
        self.sold = sold;
        self
    }

    /// Set the product image URL.
    pub fn image(mut self, image: &str) -> Self {
        self.image = image.to_owned();
        self
    }

    /// Create the [Transaction].
    pub fn finish(self) -> Transaction {
        Transaction {
            id: self.id,
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            sold: self.sold,
            image: self.image,
            date_of_sale: self.date_of_sale,
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Insert a transaction into the database.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn create_transaction(transaction: &Transaction, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO \"transaction\" (id, title, description, price, category, sold, image, date_of_sale)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        (
            transaction.id,
            &transaction.title,
            &transaction.description,
            transaction.price,
            &transaction.category,
            transaction.sold,
            &transaction.image,
            &transaction.date_of_sale,
        ),
    )?;

    Ok(())
}

/// Delete every transaction and insert `transactions` in their place.
///
/// Both steps happen in one SQL transaction so readers never see a partially
/// loaded data set.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error, in
/// which case the existing transactions are kept.
pub fn replace_all_transactions(
    transactions: &[Transaction],
    connection: &Connection,
) -> Result<usize, Error> {
    let sql_transaction =
        SqlTransaction::new_unchecked(connection, TransactionBehavior::Immediate)?;

    let deleted = sql_transaction.execute("DELETE FROM \"transaction\"", ())?;
    tracing::debug!("Deleted {deleted} transactions");

    for transaction in transactions {
        create_transaction(transaction, &sql_transaction)?;
    }

    sql_transaction.commit()?;

    Ok(transactions.len())
}

/// Get every transaction in the order they were inserted.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, title, description, price, category, sold, image, date_of_sale
             FROM \"transaction\" ORDER BY row_key ASC",
        )?
        .query_map([], map_transaction_row)?
        .map(|transaction_result| transaction_result.map_err(Error::from))
        .collect()
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(row_key) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                row_key INTEGER PRIMARY KEY,
                id INTEGER NOT NULL,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                price REAL NOT NULL,
                category TEXT NOT NULL,
                sold INTEGER NOT NULL,
                image TEXT NOT NULL,
                date_of_sale TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        category: row.get(4)?,
        sold: row.get(5)?,
        image: row.get(6)?,
        date_of_sale: row.get(7)?,
    })
}

// ============================================================================
// TESTS
// ============================================================================
