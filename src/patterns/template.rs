//! Template method: the price adjustment sequence is fixed; items only supply
//! the oversize and tax hooks.
//!
//! Money is held in integer cents and percentages round half up.

use super::{BAND, TITLE};
use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::Result;

pub type Cents = i64;

pub trait SaleItem {
    fn price(&self) -> Cents;
    fn set_price(&mut self, price: Cents);

    fn oversized_addition(&self) -> Cents {
        0
    }

    fn tax_addition(&self) -> Cents;
}

/// Oversize surcharge first, then tax on the surcharged price.
pub fn apply_price_adjustments<T: SaleItem + ?Sized>(item: &mut T) {
    let oversized = item.oversized_addition();
    item.set_price(item.price() + oversized);
    let tax = item.tax_addition();
    item.set_price(item.price() + tax);
}

fn percent_of(amount: Cents, percent: i64) -> Cents {
    (amount * percent + 50).div_euclid(100)
}

pub fn format_dollars(amount: Cents) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

pub struct Cd {
    pub title: String,
    pub band: String,
    price: Cents,
}

impl Cd {
    pub fn new(title: impl Into<String>, band: impl Into<String>, price: Cents) -> Self {
        Cd {
            title: title.into(),
            band: band.into(),
            price,
        }
    }
}

impl SaleItem for Cd {
    fn price(&self) -> Cents {
        self.price
    }

    fn set_price(&mut self, price: Cents) {
        self.price = price;
    }

    fn tax_addition(&self) -> Cents {
        percent_of(self.price, 5)
    }
}

pub struct BandEndorsedCaseOfCereal {
    pub band: String,
    price: Cents,
}

impl BandEndorsedCaseOfCereal {
    pub fn new(band: impl Into<String>, price: Cents) -> Self {
        BandEndorsedCaseOfCereal {
            band: band.into(),
            price,
        }
    }
}

impl SaleItem for BandEndorsedCaseOfCereal {
    fn price(&self) -> Cents {
        self.price
    }

    fn set_price(&mut self, price: Cents) {
        self.price = price;
    }

    fn oversized_addition(&self) -> Cents {
        percent_of(self.price, 20)
    }

    fn tax_addition(&self) -> Cents {
        0
    }
}

fn demonstrate() -> Result<Observed> {
    let mut cd = Cd::new(TITLE, BAND, 1299);
    apply_price_adjustments(&mut cd);

    let mut cereal = BandEndorsedCaseOfCereal::new(BAND, 9000);
    apply_price_adjustments(&mut cereal);

    Ok(Observed::pairs([
        ("cd", format_dollars(cd.price())),
        ("cereal", format_dollars(cereal.price())),
    ]))
}

pub fn example() -> Example {
    Example::new(
        "template",
        PatternFamily::Behavioral,
        "Apply the fixed price adjustment sequence to a CD and a cereal case",
        Observed::pairs([("cd", "$13.64"), ("cereal", "$108.00")]),
        demonstrate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent_of(1299, 5), 65);
        assert_eq!(percent_of(1290, 5), 65);
        assert_eq!(percent_of(1289, 5), 64);
    }

    #[test]
    fn dollars_are_zero_padded() {
        assert_eq!(format_dollars(10800), "$108.00");
        assert_eq!(format_dollars(5), "$0.05");
        assert_eq!(format_dollars(-150), "-$1.50");
    }

    #[test]
    fn adjustments_work_through_trait_objects() {
        let mut items: Vec<Box<dyn SaleItem>> = vec![
            Box::new(Cd::new("Long Road", "Therapee", 1000)),
            Box::new(BandEndorsedCaseOfCereal::new("Therapee", 1000)),
        ];
        for item in items.iter_mut() {
            apply_price_adjustments(item.as_mut());
        }
        let prices: Vec<Cents> = items.iter().map(|item| item.price()).collect();
        assert_eq!(prices, vec![1050, 1200]);
    }
}
