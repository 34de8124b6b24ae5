//! Observer: a CD notifies observers registered for an event when the event
//! happens.

use super::{BAND, TITLE};
use crate::catalog::{Example, PatternFamily};
use crate::outcome::Observed;
use anyhow::{Result, bail};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CdEvent {
    Purchased,
    Returned,
}

#[derive(Debug, Default)]
pub struct ActivityStream {
    items: Vec<String>,
}

impl ActivityStream {
    pub fn add_new_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

pub trait CdObserver {
    fn update(&self, cd: &Cd, stream: &mut ActivityStream);
}

pub struct BuyCdNotifyStreamObserver;

impl CdObserver for BuyCdNotifyStreamObserver {
    fn update(&self, cd: &Cd, stream: &mut ActivityStream) {
        stream.add_new_item(format!(
            "The CD named {} by {} was just purchased.",
            cd.title, cd.band
        ));
    }
}

pub struct Cd {
    pub title: String,
    pub band: String,
    observers: BTreeMap<CdEvent, Vec<Box<dyn CdObserver>>>,
}

impl Cd {
    pub fn new(title: impl Into<String>, band: impl Into<String>) -> Self {
        Cd {
            title: title.into(),
            band: band.into(),
            observers: BTreeMap::new(),
        }
    }

    pub fn attach_observer(&mut self, event: CdEvent, observer: Box<dyn CdObserver>) {
        self.observers.entry(event).or_default().push(observer);
    }

    /// Only observers attached for `event` are called.
    pub fn notify_observers(&self, event: CdEvent, stream: &mut ActivityStream) {
        if let Some(observers) = self.observers.get(&event) {
            for observer in observers {
                observer.update(self, stream);
            }
        }
    }

    pub fn buy(&self, stream: &mut ActivityStream) {
        self.notify_observers(CdEvent::Purchased, stream);
    }
}

fn demonstrate() -> Result<Observed> {
    let mut stream = ActivityStream::default();
    let mut cd = Cd::new(TITLE, BAND);
    cd.attach_observer(CdEvent::Purchased, Box::new(BuyCdNotifyStreamObserver));
    cd.buy(&mut stream);

    let [item] = stream.items() else {
        bail!("expected one activity item, found {}", stream.items().len());
    };
    Ok(Observed::text(item.as_str()))
}

pub fn example() -> Example {
    Example::new(
        "observer",
        PatternFamily::Behavioral,
        "Publish a purchase to the activity stream through an observer",
        Observed::text("The CD named Waste of a Rib by Never Again was just purchased."),
        demonstrate,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observers_for_other_events_stay_silent() {
        let mut stream = ActivityStream::default();
        let mut cd = Cd::new("Long Road", "Therapee");
        cd.attach_observer(CdEvent::Returned, Box::new(BuyCdNotifyStreamObserver));
        cd.buy(&mut stream);
        assert!(stream.items().is_empty());
    }

    #[test]
    fn every_attached_observer_is_notified() {
        let mut stream = ActivityStream::default();
        let mut cd = Cd::new("Long Road", "Therapee");
        cd.attach_observer(CdEvent::Purchased, Box::new(BuyCdNotifyStreamObserver));
        cd.attach_observer(CdEvent::Purchased, Box::new(BuyCdNotifyStreamObserver));
        cd.buy(&mut stream);
        assert_eq!(stream.items().len(), 2);
    }
}
