//! Key-value blob storage backed by SQLite.

use crate::Result;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(include_str!("schema.sql"))?;
        Ok(Self { conn })
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    /// Writes several entries in one transaction.
    pub fn set_items(&mut self, items: &[(&str, String)]) -> Result<()> {
        let tx = self.conn.transaction()?;
        for (key, value) in items {
            tx.execute(
                "INSERT INTO kv_store (key, value) VALUES (?, ?)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                rusqlite::params![key, value],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_open_creates_table() {
        let temp = NamedTempFile::new().unwrap();
        let storage = Storage::open(temp.path()).unwrap();

        let tables: Vec<String> = storage
            .connection()
            .prepare("SELECT name FROM sqlite_master WHERE type='table'")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();

        assert!(tables.contains(&"kv_store".to_string()));
    }

    #[test]
    fn test_missing_key_is_none() {
        let storage = Storage::open_in_memory().unwrap();
        assert_eq!(storage.get_item("linkbox_bookmarks").unwrap(), None);
    }

    #[test]
    fn test_set_item_overwrites() {
        let mut storage = Storage::open_in_memory().unwrap();
        storage.set_item("k", "one").unwrap();
        storage.set_item("k", "two").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));

        let count: i64 = storage
            .connection()
            .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_set_items_writes_every_entry() {
        let mut storage = Storage::open_in_memory().unwrap();
        storage
            .set_items(&[("a", "1".to_string()), ("b", "2".to_string())])
            .unwrap();
        assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get_item("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_values_persist_across_open() {
        let temp = NamedTempFile::new().unwrap();
        {
            let mut storage = Storage::open(temp.path()).unwrap();
            storage.set_item("linkbox_settings", "{}").unwrap();
        }
        let storage = Storage::open(temp.path()).unwrap();
        assert_eq!(
            storage.get_item("linkbox_settings").unwrap().as_deref(),
            Some("{}")
        );
    }

    #[test]
    fn test_open_invalid_database() {
        let temp = NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "not a database, just some text padding it out").unwrap();

        let result = Storage::open(temp.path());
        assert!(result.is_err());
    }
}
