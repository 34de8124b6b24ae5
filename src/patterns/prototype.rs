//! Prototype: load a CD once, then stamp out mixtape copies per purchase
//! instead of reloading it.

use super::BAND;
use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::{Context, Result};
use std::collections::BTreeMap;

const MIXTAPE_TITLE: &str = "Mixtape";

/// In-memory `CD` table keyed by id.
#[derive(Debug, Default)]
pub struct CdTable {
    rows: BTreeMap<u32, (String, String)>,
}

impl CdTable {
    pub fn insert(&mut self, id: u32, band: &str, title: &str) {
        self.rows.insert(id, (band.to_string(), title.to_string()));
    }

    fn row(&self, id: u32) -> Option<&(String, String)> {
        self.rows.get(&id)
    }
}

pub trait Prototype {
    /// Copy used for each new instance; implementors decide what to reset.
    fn prototype_clone(&self) -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MixtapeCd {
    pub band: String,
    pub title: String,
    pub track_list: Vec<String>,
}

impl MixtapeCd {
    pub fn load(table: &CdTable, id: u32) -> Result<Self> {
        let (band, title) = table
            .row(id)
            .with_context(|| format!("no CD with id {id}"))?;
        Ok(MixtapeCd {
            band: band.clone(),
            title: title.clone(),
            track_list: Vec::new(),
        })
    }

    pub fn buy(&self, purchases: &mut Vec<String>) {
        purchases.push(format!(
            "{} / {}: {}",
            self.band,
            self.title,
            self.track_list.join(", ")
        ));
    }
}

impl Prototype for MixtapeCd {
    fn prototype_clone(&self) -> Self {
        MixtapeCd {
            title: MIXTAPE_TITLE.to_string(),
            ..self.clone()
        }
    }
}

fn demonstrate() -> Result<Observed> {
    let mut table = CdTable::default();
    table.insert(12, BAND, "Waste of a Rib");
    let proto = MixtapeCd::load(&table, 12)?;

    let purchase_info = [vec!["brr", "goodbye"], vec!["what it means", "brr"]];
    let mut purchases = Vec::new();
    for mixed in purchase_info {
        let mut cd = proto.prototype_clone();
        cd.track_list = mixed.into_iter().map(str::to_string).collect();
        cd.buy(&mut purchases);
    }

    Ok(Observed::pairs(
        purchases
            .into_iter()
            .enumerate()
            .map(|(idx, line)| (format!("purchase-{}", idx + 1), line)),
    ))
}

pub fn example() -> Example {
    Example::new(
        "prototype",
        PatternFamily::Creational,
        "Clone a loaded CD into mixtapes, one per purchase",
        Observed::pairs([
            ("purchase-1", "Never Again / Mixtape: brr, goodbye"),
            ("purchase-2", "Never Again / Mixtape: what it means, brr"),
        ]),
        demonstrate,
    )
}
