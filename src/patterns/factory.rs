//! Factory: callers name the kind of CD they want and the factory picks the
//! constructor.

use super::{BAND, TITLE, TRACKS};
use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::{Result, bail};

const DATA_TRACK: &str = "DATA TRACK";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CdKind {
    Standard,
    Enhanced,
}

impl CdKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CdKind::Standard => "standard",
            CdKind::Enhanced => "enhanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cd {
    kind: CdKind,
    title: String,
    band: String,
    tracks: Vec<String>,
}

impl Cd {
    pub fn standard() -> Self {
        Cd {
            kind: CdKind::Standard,
            title: String::new(),
            band: String::new(),
            tracks: Vec::new(),
        }
    }

    /// Enhanced CDs carry a data track ahead of the audio tracks.
    pub fn enhanced() -> Self {
        Cd {
            kind: CdKind::Enhanced,
            tracks: vec![DATA_TRACK.to_string()],
            ..Cd::standard()
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_band(&mut self, band: impl Into<String>) {
        self.band = band.into();
    }

    pub fn add_track(&mut self, track: impl Into<String>) {
        self.tracks.push(track.into());
    }

    pub fn kind(&self) -> CdKind {
        self.kind
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }
}

struct KindSpec {
    kind: CdKind,
    build: fn() -> Cd,
}

const KIND_SPECS: &[KindSpec] = &[
    KindSpec {
        kind: CdKind::Standard,
        build: Cd::standard,
    },
    KindSpec {
        kind: CdKind::Enhanced,
        build: Cd::enhanced,
    },
];

pub struct CdFactory;

impl CdFactory {
    pub fn create(kind: &str) -> Result<Cd> {
        match KIND_SPECS.iter().find(|spec| spec.kind.as_str() == kind) {
            Some(spec) => Ok((spec.build)()),
            None => bail!("Unknown CD kind: {kind}"),
        }
    }

    pub fn kinds() -> Vec<&'static str> {
        KIND_SPECS.iter().map(|spec| spec.kind.as_str()).collect()
    }
}

fn demonstrate() -> Result<Observed> {
    let mut cd = CdFactory::create("enhanced")?;
    cd.set_title(TITLE);
    cd.set_band(BAND);
    for track in TRACKS {
        cd.add_track(track);
    }
    Ok(Observed::pairs([
        ("kind", cd.kind().as_str().to_string()),
        ("title", cd.title.clone()),
        ("band", cd.band.clone()),
        ("tracks", cd.tracks().join(", ")),
    ]))
}

pub fn example() -> Example {
    Example::new(
        "factory",
        PatternFamily::Creational,
        "Create a CD variant from its kind name",
        Observed::pairs([
            ("kind", "enhanced"),
            ("title", TITLE),
            ("band", BAND),
            ("tracks", "DATA TRACK, What It Means, Brr, Goodbye"),
        ]),
        demonstrate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_cd_starts_empty() {
        let cd = CdFactory::create("standard").unwrap();
        assert_eq!(cd.kind(), CdKind::Standard);
        assert!(cd.tracks().is_empty());
    }

    #[test]
    fn unknown_kind_lists_nothing_new() {
        assert!(CdFactory::create("vinyl").is_err());
        assert_eq!(CdFactory::kinds(), vec!["standard", "enhanced"]);
    }
}
