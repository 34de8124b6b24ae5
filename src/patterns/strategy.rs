//! Strategy: a CD's serialization format is an object set at runtime rather
//! than a method per format on the CD.

use super::markup::Element;
use super::{BAND, TITLE};
use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::{Context, Result};
use serde::Serialize;

pub trait CdStrategy {
    fn get(&self, cd: &CdUsesStrategy) -> Result<String>;
}

pub struct CdAsXmlStrategy;

impl CdStrategy for CdAsXmlStrategy {
    fn get(&self, cd: &CdUsesStrategy) -> Result<String> {
        Ok(Element::new("CD")
            .child(Element::with_text("TITLE", cd.title.as_str()))
            .child(Element::with_text("BAND", cd.band.as_str()))
            .render())
    }
}

#[derive(Serialize)]
struct CdJson<'a> {
    #[serde(rename = "CD")]
    cd: CdJsonFields<'a>,
}

#[derive(Serialize)]
struct CdJsonFields<'a> {
    title: &'a str,
    band: &'a str,
}

pub struct CdAsJsonStrategy;

impl CdStrategy for CdAsJsonStrategy {
    fn get(&self, cd: &CdUsesStrategy) -> Result<String> {
        let doc = CdJson {
            cd: CdJsonFields {
                title: &cd.title,
                band: &cd.band,
            },
        };
        serde_json::to_string(&doc).context("serializing CD as JSON")
    }
}

pub struct CdUsesStrategy {
    pub title: String,
    pub band: String,
    strategy: Option<Box<dyn CdStrategy>>,
}

impl CdUsesStrategy {
    pub fn new(title: impl Into<String>, band: impl Into<String>) -> Self {
        CdUsesStrategy {
            title: title.into(),
            band: band.into(),
            strategy: None,
        }
    }

    pub fn set_strategy_context(&mut self, strategy: Box<dyn CdStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn get(&self) -> Result<String> {
        let strategy = self
            .strategy
            .as_ref()
            .context("no output strategy set for CD")?;
        strategy.get(self)
    }
}

fn render_with(strategy: Box<dyn CdStrategy>) -> Result<Observed> {
    let mut cd = CdUsesStrategy::new(TITLE, BAND);
    cd.set_strategy_context(strategy);
    Ok(Observed::Text(cd.get()?))
}

pub fn xml_example() -> Example {
    Example::new(
        "strategy-xml",
        PatternFamily::Behavioral,
        "Render a CD through the XML strategy",
        Observed::text("<CD><TITLE>Waste of a Rib</TITLE><BAND>Never Again</BAND></CD>"),
        || render_with(Box::new(CdAsXmlStrategy)),
    )
}

pub fn json_example() -> Example {
    Example::new(
        "strategy-json",
        PatternFamily::Behavioral,
        "Render a CD through the JSON strategy",
        Observed::text(r#"{"CD":{"title":"Waste of a Rib","band":"Never Again"}}"#),
        || render_with(Box::new(CdAsJsonStrategy)),
    )
}
