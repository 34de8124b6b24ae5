//! Decorator: wrap a CD to change how its track list renders without touching
//! the CD itself.

use super::{TRACKS, owned};
use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::{Result, bail};

pub trait TrackListing {
    fn tracks(&self) -> Vec<String>;

    /// `1) First. 2) Second.` numbering shared by every listing.
    fn track_list(&self) -> String {
        self.tracks()
            .iter()
            .enumerate()
            .map(|(idx, track)| format!("{}) {track}.", idx + 1))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Cd {
    track_list: Vec<String>,
}

impl Cd {
    pub fn add_track(&mut self, track: impl Into<String>) {
        self.track_list.push(track.into());
    }
}

impl TrackListing for Cd {
    fn tracks(&self) -> Vec<String> {
        self.track_list.clone()
    }
}

pub struct CdTrackListCaps<'a, T: TrackListing> {
    inner: &'a T,
}

impl<'a, T: TrackListing> CdTrackListCaps<'a, T> {
    pub fn new(inner: &'a T) -> Self {
        CdTrackListCaps { inner }
    }
}

impl<T: TrackListing> TrackListing for CdTrackListCaps<'_, T> {
    fn tracks(&self) -> Vec<String> {
        self.inner
            .tracks()
            .into_iter()
            .map(|track| track.to_uppercase())
            .collect()
    }
}

fn demonstrate() -> Result<Observed> {
    let mut cd = Cd::default();
    for track in owned(&TRACKS) {
        cd.add_track(track);
    }
    let plain = cd.track_list();
    let caps = CdTrackListCaps::new(&cd).track_list();
    if cd.track_list() != plain {
        bail!("decorating the track list changed the underlying CD");
    }
    Ok(Observed::Text(caps))
}

pub fn example() -> Example {
    Example::new(
        "decorator",
        PatternFamily::Structural,
        "Uppercase a CD track list through a wrapping listing",
        Observed::text("1) WHAT IT MEANS. 2) BRR. 3) GOODBYE."),
        demonstrate,
    )
}
