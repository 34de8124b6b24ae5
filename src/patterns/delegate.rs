//! Delegate: a playlist hands rendering to a format object picked at runtime
//! by a string key.
//!
//! Formats are a closed set. The key-to-constructor table below is the only
//! place a new format has to be added.

use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::{Result, bail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub location: String,
    pub title: String,
}

pub trait PlaylistDelegate {
    fn render(&self, songs: &[Song]) -> String;
}

pub struct M3uPlaylist;

impl PlaylistDelegate for M3uPlaylist {
    fn render(&self, songs: &[Song]) -> String {
        let mut m3u = String::from("#EXTM3U\n\n");
        for song in songs {
            m3u.push_str(&format!("#EXTINF: -1, {}\n", song.title));
            m3u.push_str(&format!("{}\n", song.location));
        }
        m3u
    }
}

pub struct PlsPlaylist;

impl PlaylistDelegate for PlsPlaylist {
    fn render(&self, songs: &[Song]) -> String {
        let mut pls = format!("[playlist]\nNumberOfEntries = {}\n\n", songs.len());
        for (idx, song) in songs.iter().enumerate() {
            let counter = idx + 1;
            pls.push_str(&format!("File{counter} = {}\n", song.location));
            pls.push_str(&format!("Title{counter} = {}\n", song.title));
            pls.push_str(&format!("Length{counter} = -1\n\n"));
        }
        pls
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaylistFormat {
    M3u,
    Pls,
}

impl PlaylistFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaylistFormat::M3u => "m3u",
            PlaylistFormat::Pls => "pls",
        }
    }
}

impl TryFrom<&str> for PlaylistFormat {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        FormatSpec::lookup(value).map(|spec| spec.format)
    }
}

struct FormatSpec {
    format: PlaylistFormat,
    build: fn() -> Box<dyn PlaylistDelegate>,
}

impl FormatSpec {
    fn lookup(key: &str) -> Result<&'static FormatSpec> {
        match FORMAT_SPECS.iter().find(|spec| spec.format.as_str() == key) {
            Some(spec) => Ok(spec),
            None => bail!("Unknown playlist format: {key}"),
        }
    }
}

fn build_m3u() -> Box<dyn PlaylistDelegate> {
    Box::new(M3uPlaylist)
}

fn build_pls() -> Box<dyn PlaylistDelegate> {
    Box::new(PlsPlaylist)
}

const FORMAT_SPECS: &[FormatSpec] = &[
    FormatSpec {
        format: PlaylistFormat::M3u,
        build: build_m3u,
    },
    FormatSpec {
        format: PlaylistFormat::Pls,
        build: build_pls,
    },
];

pub struct Playlist {
    format: PlaylistFormat,
    songs: Vec<Song>,
    delegate: Box<dyn PlaylistDelegate>,
}

impl Playlist {
    /// Create a playlist rendered by the format named `kind`.
    pub fn new(kind: &str) -> Result<Self> {
        let spec = FormatSpec::lookup(kind)?;
        Ok(Playlist {
            format: spec.format,
            songs: Vec::new(),
            delegate: (spec.build)(),
        })
    }

    pub fn format(&self) -> PlaylistFormat {
        self.format
    }

    pub fn add_song(&mut self, location: impl Into<String>, title: impl Into<String>) {
        self.songs.push(Song {
            location: location.into(),
            title: title.into(),
        });
    }

    pub fn playlist(&self) -> String {
        self.delegate.render(&self.songs)
    }
}

const EXPECTED_PLS: &str = "[playlist]\nNumberOfEntries = 2\n\n\
File1 = /home/aaron/music/brr3.mp3\nTitle1 = Brr\nLength1 = -1\n\n\
File2 = /home/aaron/music/goodbye.mp3\nTitle2 = Goodbye\nLength2 = -1\n\n";

fn demonstrate() -> Result<Observed> {
    let requested = "pls";
    let mut playlist = Playlist::new(requested)?;
    playlist.add_song("/home/aaron/music/brr3.mp3", "Brr");
    playlist.add_song("/home/aaron/music/goodbye.mp3", "Goodbye");
    Ok(Observed::Text(playlist.playlist()))
}

pub fn example() -> Example {
    Example::new(
        "delegate",
        PatternFamily::Behavioral,
        "Render a playlist through a format chosen by key",
        Observed::text(EXPECTED_PLS),
        demonstrate,
    )
}
