//! Database initialization for the application.

use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Add the expenses table to the database if it does not exist yet.
///
/// Safe to call on every boot.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    transaction.execute(
        "CREATE TABLE IF NOT EXISTS expenses (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            amount REAL NOT NULL,
            note TEXT NOT NULL,
            tags TEXT NOT NULL
        )",
        (),
    )?;

    transaction.commit()
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn creates_expenses_table() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("Could not initialize database");

        connection
            .execute(
                "INSERT INTO expenses (title, amount, note, tags) VALUES ('tea', 25.0, '', '{}')",
                (),
            )
            .expect("Could not insert into expenses table");
    }

    #[test]
    fn is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("Could not initialize database");
        initialize(&connection).expect("Second initialize failed");
    }
}
