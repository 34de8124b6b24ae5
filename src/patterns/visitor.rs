//! Visitor: purchase logging and discount tracking are visitors a CD accepts,
//! so new bookkeeping does not change the CD type.

use super::{BAND, TITLE};
use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::Result;

const DISCOUNT_THRESHOLD_CENTS: i64 = 1000;

pub struct Cd {
    pub title: String,
    pub band: String,
    pub price_cents: i64,
}

impl Cd {
    pub fn new(title: impl Into<String>, band: impl Into<String>, price_cents: i64) -> Self {
        Cd {
            title: title.into(),
            band: band.into(),
            price_cents,
        }
    }

    pub fn accept_visitor(&self, visitor: &mut dyn CdVisitor) {
        visitor.visit_cd(self);
    }
}

pub trait CdVisitor {
    fn visit_cd(&mut self, cd: &Cd);
}

#[derive(Default)]
pub struct CdVisitorLogPurchase {
    lines: Vec<String>,
}

impl CdVisitorLogPurchase {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl CdVisitor for CdVisitorLogPurchase {
    fn visit_cd(&mut self, cd: &Cd) {
        self.lines.push(format!(
            "{} by {} was purchased for {}.{:02}",
            cd.title,
            cd.band,
            cd.price_cents / 100,
            cd.price_cents % 100
        ));
    }
}

#[derive(Default)]
pub struct CdVisitorPopulateDiscountList {
    discounted: Vec<String>,
}

impl CdVisitorPopulateDiscountList {
    pub fn discounted(&self) -> &[String] {
        &self.discounted
    }
}

impl CdVisitor for CdVisitorPopulateDiscountList {
    fn visit_cd(&mut self, cd: &Cd) {
        if cd.price_cents < DISCOUNT_THRESHOLD_CENTS {
            self.discounted.push(cd.title.clone());
        }
    }
}

fn demonstrate() -> Result<Observed> {
    let cd = Cd::new(TITLE, BAND, 999);
    let mut log = CdVisitorLogPurchase::default();
    let mut discounts = CdVisitorPopulateDiscountList::default();
    cd.accept_visitor(&mut log);
    cd.accept_visitor(&mut discounts);

    Ok(Observed::pairs([
        ("log", log.lines().join("\n")),
        ("discounted", discounts.discounted().join(", ")),
    ]))
}

pub fn example() -> Example {
    Example::new(
        "visitor",
        PatternFamily::Behavioral,
        "Log a purchase and collect discounts through visitors",
        Observed::pairs([
            ("log", "Waste of a Rib by Never Again was purchased for 9.99"),
            ("discounted", "Waste of a Rib"),
        ]),
        demonstrate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_price_cd_is_not_discounted() {
        let mut discounts = CdVisitorPopulateDiscountList::default();
        Cd::new("Long Road", "Therapee", 1000).accept_visitor(&mut discounts);
        assert!(discounts.discounted().is_empty());
    }

    #[test]
    fn one_visitor_sees_many_cds() {
        let mut log = CdVisitorLogPurchase::default();
        for cd in [Cd::new("A", "X", 105), Cd::new("B", "Y", 2000)] {
            cd.accept_visitor(&mut log);
        }
        assert_eq!(
            log.lines(),
            &[
                "A by X was purchased for 1.05".to_string(),
                "B by Y was purchased for 20.00".to_string()
            ]
        );
    }
}
