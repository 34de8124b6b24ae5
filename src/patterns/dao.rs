//! Data access object: table access lives behind a gateway trait so callers
//! ask for users rather than build queries.
//!
//! The gateway's default methods carry the shared fetch/update logic; a
//! concrete DAO only names its table and primary key. Storage is an in-memory
//! table map.

use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::{Result, anyhow, bail};
use std::collections::BTreeMap;

pub type Row = BTreeMap<String, String>;

#[derive(Debug, Default, Clone)]
pub struct InMemoryDatabase {
    tables: BTreeMap<String, Vec<Row>>,
}

impl InMemoryDatabase {
    pub fn insert(&mut self, table: &str, row: Row) {
        self.tables.entry(table.to_string()).or_default().push(row);
    }

    pub fn select(&self, table: &str, key: &str, value: &str) -> Vec<Row> {
        self.tables
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| row.get(key).map(String::as_str) == Some(value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Overwrite columns on matching rows; returns the number of rows touched.
    pub fn update_where(&mut self, table: &str, key: &str, value: &str, changes: &Row) -> usize {
        let Some(rows) = self.tables.get_mut(table) else {
            return 0;
        };
        let mut touched = 0;
        for row in rows
            .iter_mut()
            .filter(|row| row.get(key).map(String::as_str) == Some(value))
        {
            for (column, new_value) in changes {
                row.insert(column.clone(), new_value.clone());
            }
            touched += 1;
        }
        touched
    }
}

pub trait TableGateway {
    fn table_name(&self) -> &str;
    fn primary_key(&self) -> &str;
    fn database(&self) -> &InMemoryDatabase;
    fn database_mut(&mut self) -> &mut InMemoryDatabase;

    fn fetch(&self, value: &str) -> Vec<Row> {
        self.fetch_by(self.primary_key(), value)
    }

    fn fetch_by(&self, key: &str, value: &str) -> Vec<Row> {
        self.database().select(self.table_name(), key, value)
    }

    /// Update the row named by the primary key carried in `keyed`.
    fn update(&mut self, keyed: &Row) -> Result<usize> {
        let primary_key = self.primary_key().to_string();
        let table = self.table_name().to_string();
        let id = keyed
            .get(&primary_key)
            .cloned()
            .ok_or_else(|| anyhow!("update for {table} is missing primary key '{primary_key}'"))?;
        let touched = self
            .database_mut()
            .update_where(&table, &primary_key, &id, keyed);
        if touched == 0 {
            bail!("no {table} row with {primary_key} = {id}");
        }
        Ok(touched)
    }
}

pub struct UserDao {
    db: InMemoryDatabase,
}

impl UserDao {
    pub fn new(db: InMemoryDatabase) -> Self {
        UserDao { db }
    }

    pub fn user_by_first_name(&self, name: &str) -> Vec<Row> {
        self.fetch_by("firstName", name)
    }
}

impl TableGateway for UserDao {
    fn table_name(&self) -> &str {
        "user"
    }

    fn primary_key(&self) -> &str {
        "id"
    }

    fn database(&self) -> &InMemoryDatabase {
        &self.db
    }

    fn database_mut(&mut self) -> &mut InMemoryDatabase {
        &mut self.db
    }
}

fn row(columns: &[(&str, &str)]) -> Row {
    columns
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn seeded_users() -> InMemoryDatabase {
    let mut db = InMemoryDatabase::default();
    db.insert(
        "user",
        row(&[("id", "1"), ("firstName", "Aaron"), ("lastName", "Saunders")]),
    );
    db.insert(
        "user",
        row(&[("id", "2"), ("firstName", "Keith"), ("lastName", "Reilly")]),
    );
    db
}

fn demonstrate() -> Result<Observed> {
    let mut users = UserDao::new(seeded_users());
    if users.fetch("1").is_empty() {
        bail!("seed user 1 missing");
    }
    users.update(&row(&[("id", "1"), ("firstName", "Jason")]))?;

    let jasons = users.user_by_first_name("Jason");
    let [jason] = jasons.as_slice() else {
        bail!("expected exactly one Jason, found {}", jasons.len());
    };
    Ok(Observed::Pairs(
        jason.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
    ))
}

pub fn example() -> Example {
    Example::new(
        "dao",
        PatternFamily::Structural,
        "Fetch and update users through a table gateway",
        Observed::pairs([("firstName", "Jason"), ("id", "1"), ("lastName", "Saunders")]),
        demonstrate,
    )
}
