//! Iterator: walk the CDs a band released without exposing the joined rows
//! they are stored as.

use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cd {
    pub band: String,
    pub title: String,
    pub track_list: Vec<String>,
}

/// One row of the CD/tracks left join; `track` is `None` for a CD without
/// tracks.
#[derive(Debug, Clone)]
pub struct JoinedRow {
    pub cd_id: u32,
    pub band: String,
    pub title: String,
    pub track: Option<(u32, String)>,
}

#[derive(Debug, Default, Clone)]
pub struct CdStore {
    rows: Vec<JoinedRow>,
}

impl CdStore {
    pub fn add(&mut self, cd_id: u32, band: &str, title: &str, track: Option<(u32, &str)>) {
        self.rows.push(JoinedRow {
            cd_id,
            band: band.to_string(),
            title: title.to_string(),
            track: track.map(|(num, name)| (num, name.to_string())),
        });
    }
}

pub struct CdSearchByBand {
    cds: std::vec::IntoIter<Cd>,
}

impl CdSearchByBand {
    /// Collect the band's CDs in id order, tracks in track-number order.
    pub fn new(store: &CdStore, band: &str) -> Self {
        let mut rows: Vec<&JoinedRow> = store.rows.iter().filter(|r| r.band == band).collect();
        rows.sort_by_key(|r| (r.cd_id, r.track.as_ref().map(|(num, _)| *num)));

        let mut cds: Vec<(u32, Cd)> = Vec::new();
        for row in rows {
            let needs_new = cds.last().map(|(id, _)| *id != row.cd_id).unwrap_or(true);
            if needs_new {
                cds.push((
                    row.cd_id,
                    Cd {
                        band: row.band.clone(),
                        title: row.title.clone(),
                        track_list: Vec::new(),
                    },
                ));
            }
            if let (Some((_, cd)), Some((_, track))) = (cds.last_mut(), row.track.as_ref()) {
                cd.track_list.push(track.clone());
            }
        }

        CdSearchByBand {
            cds: cds
                .into_iter()
                .map(|(_, cd)| cd)
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl Iterator for CdSearchByBand {
    type Item = Cd;

    fn next(&mut self) -> Option<Cd> {
        self.cds.next()
    }
}

fn seeded_store() -> CdStore {
    let mut store = CdStore::default();
    store.add(1, "Never Again", "Waste of a Rib", Some((2, "Brr")));
    store.add(1, "Never Again", "Waste of a Rib", Some((1, "What It Means")));
    store.add(1, "Never Again", "Waste of a Rib", Some((3, "Goodbye")));
    store.add(2, "Therapee", "Long Road", Some((1, "Long Road")));
    store.add(3, "Never Again", "Maybe Once More", Some((1, "Maybe")));
    store.add(3, "Never Again", "Maybe Once More", Some((2, "Once More")));
    store.add(4, "Never Again", "Unreleased", None);
    store
}

fn demonstrate() -> Result<Observed> {
    let store = seeded_store();
    let found = CdSearchByBand::new(&store, "Never Again")
        .map(|cd| (cd.title, cd.track_list.len().to_string()));
    Ok(Observed::pairs(found))
}

pub fn example() -> Example {
    Example::new(
        "iterator",
        PatternFamily::Behavioral,
        "Iterate a band's CDs with their track counts",
        Observed::pairs([
            ("Waste of a Rib", "3"),
            ("Maybe Once More", "2"),
            ("Unreleased", "0"),
        ]),
        demonstrate,
    )
}
