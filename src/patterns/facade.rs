//! Facade: one call hides the uppercase-then-serialize sequence a web service
//! needs.

use super::markup::Element;
use super::{BAND, TITLE, TRACKS, owned};
use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cd {
    pub title: String,
    pub band: String,
    pub tracks: Vec<String>,
}

impl Cd {
    pub fn new(title: impl Into<String>, band: impl Into<String>, tracks: Vec<String>) -> Self {
        Cd {
            title: title.into(),
            band: band.into(),
            tracks,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TextField {
    Title,
    Band,
}

pub struct CdUpperCase;

impl CdUpperCase {
    pub fn make_string(cd: &mut Cd, field: TextField) {
        let value = match field {
            TextField::Title => &mut cd.title,
            TextField::Band => &mut cd.band,
        };
        *value = value.to_uppercase();
    }

    pub fn make_tracks(cd: &mut Cd) {
        for track in &mut cd.tracks {
            *track = track.to_uppercase();
        }
    }
}

pub struct CdMakeXml;

impl CdMakeXml {
    pub fn create(cd: &Cd) -> String {
        let mut tracks = Element::new("TRACKS");
        for track in &cd.tracks {
            tracks.push(Element::with_text("TRACK", track.as_str()));
        }
        Element::new("CD")
            .child(Element::with_text("TITLE", cd.title.as_str()))
            .child(Element::with_text("BAND", cd.band.as_str()))
            .child(tracks)
            .render()
    }
}

pub struct WebServiceFacade;

impl WebServiceFacade {
    pub fn make_xml_call(cd: &mut Cd) -> String {
        CdUpperCase::make_string(cd, TextField::Title);
        CdUpperCase::make_string(cd, TextField::Band);
        CdUpperCase::make_tracks(cd);
        CdMakeXml::create(cd)
    }
}

fn demonstrate() -> Result<Observed> {
    let mut cd = Cd::new(TITLE, BAND, owned(&TRACKS));
    Ok(Observed::Text(WebServiceFacade::make_xml_call(&mut cd)))
}

pub fn example() -> Example {
    Example::new(
        "facade",
        PatternFamily::Structural,
        "Uppercase and serialize a CD for a web service in one call",
        Observed::text(
            "<CD><TITLE>WASTE OF A RIB</TITLE><BAND>NEVER AGAIN</BAND><TRACKS>\
<TRACK>WHAT IT MEANS</TRACK><TRACK>BRR</TRACK><TRACK>GOODBYE</TRACK></TRACKS></CD>",
        ),
        demonstrate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xml_without_tracks_uses_empty_element() {
        let cd = Cd::new("Long Road", "Therapee", Vec::new());
        assert_eq!(
            CdMakeXml::create(&cd),
            "<CD><TITLE>Long Road</TITLE><BAND>Therapee</BAND><TRACKS/></CD>"
        );
    }

    #[test]
    fn facade_is_idempotent_on_uppercase_data() {
        let mut cd = Cd::new("brr", "x", vec!["y".to_string()]);
        let first = WebServiceFacade::make_xml_call(&mut cd);
        let second = WebServiceFacade::make_xml_call(&mut cd);
        assert_eq!(first, second);
    }
}
