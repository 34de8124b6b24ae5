//! Singleton: every purchase shares one inventory connection.
//!
//! The shared instance lives in an explicitly passed handle rather than a
//! process global, so each run starts from a fresh handle. The connection is
//! built on first access and the same instance is returned afterwards.

use super::{BAND, TITLE};
use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::{Context, Result, bail};
use std::cell::{Cell, OnceCell, RefCell};
use std::collections::BTreeMap;

type StockKey = (String, String);

#[derive(Debug)]
pub struct InventoryConnection {
    amounts: RefCell<BTreeMap<StockKey, u32>>,
}

impl InventoryConnection {
    fn open(stock: BTreeMap<StockKey, u32>) -> Self {
        InventoryConnection {
            amounts: RefCell::new(stock),
        }
    }

    /// Take `number` copies out of stock.
    pub fn update_quantity(&self, band: &str, title: &str, number: u32) -> Result<()> {
        let mut amounts = self.amounts.borrow_mut();
        let amount = amounts
            .get_mut(&(band.to_string(), title.to_string()))
            .with_context(|| format!("{title} by {band} is not stocked"))?;
        if *amount < number {
            bail!("only {amount} copies of {title} by {band} left");
        }
        *amount -= number;
        Ok(())
    }

    pub fn amount(&self, band: &str, title: &str) -> Option<u32> {
        self.amounts
            .borrow()
            .get(&(band.to_string(), title.to_string()))
            .copied()
    }
}

/// Lazily initialised, shared access to the inventory connection.
#[derive(Debug)]
pub struct InventoryHandle {
    stock: BTreeMap<StockKey, u32>,
    instance: OnceCell<InventoryConnection>,
    constructed: Cell<usize>,
}

impl InventoryHandle {
    pub fn new(stock: BTreeMap<StockKey, u32>) -> Self {
        InventoryHandle {
            stock,
            instance: OnceCell::new(),
            constructed: Cell::new(0),
        }
    }

    pub fn instance(&self) -> &InventoryConnection {
        self.instance.get_or_init(|| {
            self.constructed.set(self.constructed.get() + 1);
            InventoryConnection::open(self.stock.clone())
        })
    }

    /// Number of connections built through this handle.
    pub fn constructed(&self) -> usize {
        self.constructed.get()
    }
}

pub struct Cd {
    title: String,
    band: String,
}

impl Cd {
    pub fn new(title: impl Into<String>, band: impl Into<String>) -> Self {
        Cd {
            title: title.into(),
            band: band.into(),
        }
    }

    pub fn buy(&self, inventory: &InventoryHandle) -> Result<()> {
        inventory
            .instance()
            .update_quantity(&self.band, &self.title, 1)
    }
}

fn seeded_stock() -> BTreeMap<StockKey, u32> {
    [((BAND, TITLE), 10), (("Therapee", "Long Road"), 4)]
        .into_iter()
        .map(|((band, title), amount)| ((band.to_string(), title.to_string()), amount))
        .collect()
}

fn demonstrate() -> Result<Observed> {
    let inventory = InventoryHandle::new(seeded_stock());
    let bought = [Cd::new(TITLE, BAND), Cd::new("Long Road", "Therapee")];
    for cd in &bought {
        cd.buy(&inventory)?;
    }

    let connection = inventory.instance();
    if connection.amount(BAND, TITLE) != Some(9)
        || connection.amount("Therapee", "Long Road") != Some(3)
    {
        bail!("inventory was not decremented once per purchase");
    }
    Ok(Observed::Number(inventory.constructed() as i64))
}

pub fn example() -> Example {
    Example::new(
        "singleton",
        PatternFamily::Creational,
        "Share one inventory connection across purchases",
        Observed::Number(1),
        demonstrate,
    )
}
