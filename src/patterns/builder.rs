//! Builder: assemble a product from a configuration map instead of calling
//! each setter at every construction site.

use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::{Context, Result};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    kind: String,
    size: String,
    color: String,
}

impl Product {
    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into();
    }

    pub fn set_size(&mut self, size: impl Into<String>) {
        self.size = size.into();
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn color(&self) -> &str {
        &self.color
    }
}

pub struct ProductBuilder {
    product: Product,
    configs: BTreeMap<String, String>,
}

impl ProductBuilder {
    pub fn new(configs: BTreeMap<String, String>) -> Self {
        ProductBuilder {
            product: Product::default(),
            configs,
        }
    }

    /// Apply every configuration key; all three keys are required.
    pub fn build(mut self) -> Result<Product> {
        let kind = self.config("type")?;
        let size = self.config("size")?;
        let color = self.config("color")?;
        self.product.set_kind(kind);
        self.product.set_size(size);
        self.product.set_color(color);
        Ok(self.product)
    }

    fn config(&self, key: &str) -> Result<String> {
        self.configs
            .get(key)
            .cloned()
            .with_context(|| format!("product config is missing '{key}'"))
    }
}

fn shirt_config() -> BTreeMap<String, String> {
    [("type", "shirt"), ("size", "XL"), ("color", "red")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn demonstrate() -> Result<Observed> {
    let product = ProductBuilder::new(shirt_config()).build()?;
    Ok(Observed::pairs([
        ("type", product.kind()),
        ("size", product.size()),
        ("color", product.color()),
    ]))
}

pub fn example() -> Example {
    Example::new(
        "builder",
        PatternFamily::Creational,
        "Build a product from a configuration map",
        Observed::pairs([("type", "shirt"), ("size", "XL"), ("color", "red")]),
        demonstrate,
    )
}
