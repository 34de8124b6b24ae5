//! Proxy: purchases go through a connection provider; the Dallas NOC proxy
//! swaps where the connection points without touching the purchase logic.

use super::{BAND, TITLE};
use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::{Result, bail};

/// Simulated database connection; queries are recorded, not executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    host: String,
    database: String,
    executed: Vec<String>,
}

impl Connection {
    pub fn new(host: &str, database: &str) -> Self {
        Connection {
            host: host.to_string(),
            database: database.to_string(),
            executed: Vec::new(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn query(&mut self, sql: String) {
        self.executed.push(sql);
    }

    pub fn executed(&self) -> &[String] {
        &self.executed
    }
}

pub trait ConnectionProvider {
    fn connect(&self) -> Connection {
        Connection::new("localhost", "CDs")
    }
}

pub struct LocalInventory;

impl ConnectionProvider for LocalInventory {}

pub struct DallasNocProxy;

impl ConnectionProvider for DallasNocProxy {
    fn connect(&self) -> Connection {
        Connection::new("dallas", "CDs")
    }
}

pub struct Cd<P: ConnectionProvider> {
    title: String,
    band: String,
    provider: P,
}

impl<P: ConnectionProvider> Cd<P> {
    pub fn new(title: impl Into<String>, band: impl Into<String>, provider: P) -> Self {
        Cd {
            title: title.into(),
            band: band.into(),
            provider,
        }
    }

    /// Mark the CD as bought; returns the connection that served the update.
    pub fn buy(&self) -> Connection {
        let mut connection = self.provider.connect();
        connection.query(format!(
            "update CDs set bought = 1 where band = \"{}\" and title = \"{}\"",
            escape_sql(&self.band),
            escape_sql(&self.title)
        ));
        connection
    }
}

fn escape_sql(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' | '"' | '\'' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            other => escaped.push(other),
        }
    }
    escaped
}

fn demonstrate() -> Result<Observed> {
    let cd = Cd::new(TITLE, BAND, DallasNocProxy);
    let connection = cd.buy();
    let [query] = connection.executed() else {
        bail!("expected one query, found {}", connection.executed().len());
    };
    Ok(Observed::pairs([
        ("host", connection.host().to_string()),
        ("query", query.clone()),
    ]))
}

pub fn example() -> Example {
    Example::new(
        "proxy",
        PatternFamily::Structural,
        "Route a purchase through the Dallas NOC connection proxy",
        Observed::pairs([
            ("host", "dallas"),
            (
                "query",
                "update CDs set bought = 1 where band = \"Never Again\" and title = \"Waste of a Rib\"",
            ),
        ]),
        demonstrate,
    )
}
