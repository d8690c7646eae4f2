//! SQLite database module for the Suit Store Engine.
mod sqlite_impl;

pub mod db;
pub use sqlite_impl::SqliteDatabase;
