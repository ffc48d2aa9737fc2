// Database service module
// SQLite connection and schema management for the preference row

mod connection;
mod migrations;
mod schema;

pub use connection::Database;
