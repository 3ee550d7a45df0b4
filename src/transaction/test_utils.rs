use rusqlite::Connection;

use crate::db::initialize;

use super::{Transaction, create_transaction};

pub(crate) fn get_test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}

/// Twelve transactions, five of which were sold in March of various years.
///
/// The March transactions are priced 50, 150, 250, 950 and 905, and three of
/// them were sold.
pub(crate) fn march_fixture() -> Vec<Transaction> {
    vec![
        Transaction::build(1, 50.0, "2021-03-02T10:00:00Z")
            .title("Backpack")
            .category("men's clothing")
            .sold(true)
            .finish(),
        Transaction::build(2, 75.0, "2021-01-15T10:00:00Z")
            .title("Ring")
            .category("jewelery")
            .finish(),
        Transaction::build(3, 150.0, "2022-03-11T08:30:00+05:30")
            .title("Jacket")
            .category("men's clothing")
            .sold(true)
            .finish(),
        Transaction::build(4, 999.0, "2022-04-01T12:00:00Z")
            .title("Monitor")
            .category("electronics")
            .sold(true)
            .finish(),
        Transaction::build(5, 250.0, "2021-03-20T18:45:00Z")
            .title("Hard drive")
            .category("electronics")
            .finish(),
        Transaction::build(6, 120.0, "2021-05-05T09:00:00Z")
            .title("Bracelet")
            .category("jewelery")
            .sold(true)
            .finish(),
        Transaction::build(7, 950.0, "2022-03-28T21:10:00Z")
            .title("Television")
            .category("electronics")
            .sold(true)
            .finish(),
        Transaction::build(8, 30.0, "2021-12-24T10:00:00Z")
            .title("Scarf")
            .category("women's clothing")
            .finish(),
        Transaction::build(9, 905.0, "2021-03-09T11:11:11Z")
            .title("Laptop")
            .category("electronics")
            .finish(),
        Transaction::build(10, 15.0, "2022-02-28T23:00:00Z")
            .title("Socks")
            .category("women's clothing")
            .finish(),
        Transaction::build(11, 640.0, "2021-08-19T10:00:00Z")
            .title("Phone")
            .category("electronics")
            .sold(true)
            .finish(),
        Transaction::build(12, 88.0, "2022-10-10T10:00:00Z")
            .title("Earrings")
            .category("jewelery")
            .finish(),
    ]
}

pub(crate) fn insert_march_fixture(connection: &Connection) {
    for transaction in march_fixture() {
        create_transaction(&transaction, connection).expect("Could not create transaction");
    }
}
