//! Transaction records and the listing of them.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and its database table
//! - The month filter and search query shared with the statistics
//! - The paginated listing and its route handler

mod model;
mod list;
mod month;
mod query;
mod search;

#[cfg(test)]
pub(crate) mod test_utils;

pub use model::{
    Transaction, TransactionBuilder, count_transactions, create_transaction,
    create_transaction_table, get_all_transactions, replace_all_transactions,
};
pub use list::{TransactionPage, list_transactions, list_transactions_endpoint};
pub use month::MonthFilter;
pub use query::{get_matching_transactions, read_matching_transactions};
pub use search::SearchFilter;
