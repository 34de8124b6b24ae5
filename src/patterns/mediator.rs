//! Mediator: a band rename on one music container is propagated to every
//! other container kind without the containers knowing about each other.

use super::{BAND, TITLE};
use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::{Result, bail};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    Cd,
    Mp3Archive,
}

impl ContainerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerKind::Cd => "cd",
            ContainerKind::Mp3Archive => "mp3_archive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerChange {
    Band(String),
    Title(String),
}

/// Stand-in for persistence: every save appends one entry.
#[derive(Debug, Default)]
pub struct SaveLog {
    entries: Vec<(ContainerKind, String)>,
}

impl SaveLog {
    pub fn entries(&self) -> &[(ContainerKind, String)] {
        &self.entries
    }
}

#[derive(Debug, Clone)]
pub struct MusicContainer<'m> {
    kind: ContainerKind,
    pub title: String,
    pub band: String,
    mediator: Option<&'m MusicContainerMediator>,
}

impl<'m> MusicContainer<'m> {
    pub fn new(kind: ContainerKind, mediator: Option<&'m MusicContainerMediator>) -> Self {
        MusicContainer {
            kind,
            title: String::new(),
            band: String::new(),
            mediator,
        }
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn save(&self, log: &mut SaveLog) {
        log.entries
            .push((self.kind, format!("{} by {}", self.title, self.band)));
    }

    /// Notify the mediator first so sibling containers are saved before this
    /// one.
    pub fn change_band_name(&mut self, new_name: &str, log: &mut SaveLog) {
        if let Some(mediator) = self.mediator {
            mediator.change(self, &[ContainerChange::Band(new_name.to_string())], log);
        }
        self.band = new_name.to_string();
        self.save(log);
    }

    fn apply(&mut self, change: &ContainerChange) {
        match change {
            ContainerChange::Band(band) => self.band = band.clone(),
            ContainerChange::Title(title) => self.title = title.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MusicContainerMediator {
    containers: Vec<ContainerKind>,
}

impl Default for MusicContainerMediator {
    fn default() -> Self {
        MusicContainerMediator {
            containers: vec![ContainerKind::Cd, ContainerKind::Mp3Archive],
        }
    }
}

impl MusicContainerMediator {
    pub fn change(
        &self,
        original: &MusicContainer<'_>,
        changes: &[ContainerChange],
        log: &mut SaveLog,
    ) {
        for kind in self
            .containers
            .iter()
            .copied()
            .filter(|kind| *kind != original.kind())
        {
            let mut sibling = MusicContainer::new(kind, None);
            sibling.title = original.title.clone();
            sibling.band = original.band.clone();
            for change in changes {
                sibling.apply(change);
            }
            sibling.save(log);
        }
    }
}

fn demonstrate() -> Result<Observed> {
    let mediator = MusicContainerMediator::default();
    let mut log = SaveLog::default();

    let mut cd = MusicContainer::new(ContainerKind::Cd, Some(&mediator));
    cd.title = TITLE.to_string();
    cd.band = BAND.to_string();
    cd.change_band_name("Maybe Once More", &mut log);

    if log.entries().is_empty() {
        bail!("band rename produced no saves");
    }
    Ok(Observed::pairs(
        log.entries()
            .iter()
            .map(|(kind, saved)| (kind.as_str(), saved.clone())),
    ))
}

pub fn example() -> Example {
    Example::new(
        "mediator",
        PatternFamily::Behavioral,
        "Propagate a band rename from a CD to its MP3 archive",
        Observed::pairs([
            ("mp3_archive", "Waste of a Rib by Maybe Once More"),
            ("cd", "Waste of a Rib by Maybe Once More"),
        ]),
        demonstrate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_without_mediator_saves_only_itself() {
        let mut log = SaveLog::default();
        let mut archive = MusicContainer::new(ContainerKind::Mp3Archive, None);
        archive.title = "Long Road".to_string();
        archive.change_band_name("Therapee", &mut log);
        assert_eq!(
            log.entries(),
            &[(ContainerKind::Mp3Archive, "Long Road by Therapee".to_string())]
        );
    }

    #[test]
    fn mediator_applies_title_changes() {
        let mediator = MusicContainerMediator::default();
        let mut log = SaveLog::default();
        let archive = MusicContainer::new(ContainerKind::Mp3Archive, None);
        mediator.change(
            &archive,
            &[ContainerChange::Title("Brr".to_string())],
            &mut log,
        );
        assert_eq!(log.entries(), &[(ContainerKind::Cd, "Brr by ".to_string())]);
    }
}
