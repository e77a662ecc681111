//! Observer: a subject keeps a list of dependents and notifies each of them
//! when something happens.
//!
//! Typical uses: UI event subscriptions, chat notifications, live stock
//! tickers with many viewers.

use crate::Result;
use std::io::Write;
use std::rc::Rc;

pub trait Observer {
    fn update(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConcreteObserver {
    name: String,
}

impl ConcreteObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for ConcreteObserver {
    fn update(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} has been notified.", self.name)?;
        Ok(())
    }
}

/// Observers are held by `Rc` so that `detach` can match on identity:
/// two observers that compare equal are still distinct subscriptions.
#[derive(Default)]
pub struct Subject {
    observers: Vec<Rc<dyn Observer>>,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
        tracing::debug!(observers = self.observers.len(), "observer attached");
    }

    /// Removes every attachment of this exact observer.
    pub fn detach(&mut self, observer: &Rc<dyn Observer>) {
        self.observers.retain(|held| !Rc::ptr_eq(held, observer));
        tracing::debug!(observers = self.observers.len(), "observer detached");
    }

    /// Calls `update` on each observer, in attachment order.
    pub fn notify(&self, out: &mut dyn Write) -> Result<()> {
        for observer in &self.observers {
            observer.update(out)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut subject = Subject::new();
    let observer1: Rc<dyn Observer> = Rc::new(ConcreteObserver::new("Observer1"));
    let observer2: Rc<dyn Observer> = Rc::new(ConcreteObserver::new("Observer2"));

    subject.attach(Rc::clone(&observer1));
    subject.attach(Rc::clone(&observer2));
    subject.notify(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::capture;
    use std::cell::RefCell;

    /// Records its updates into a shared log instead of writing output.
    struct Recorder {
        tag: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Observer for Recorder {
        fn update(&self, _out: &mut dyn Write) -> Result<()> {
            self.log.borrow_mut().push(self.tag);
            Ok(())
        }
    }

    fn recorder(tag: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Rc<dyn Observer> {
        Rc::new(Recorder {
            tag,
            log: Rc::clone(log),
        })
    }

    #[test]
    fn test_each_observer_updated_once_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subject = Subject::new();
        subject.attach(recorder("first", &log));
        subject.attach(recorder("second", &log));

        capture(|out| subject.notify(out));
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_detached_observer_is_skipped() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = recorder("first", &log);
        let mut subject = Subject::new();
        subject.attach(Rc::clone(&first));
        subject.attach(recorder("second", &log));

        subject.detach(&first);
        capture(|out| subject.notify(out));
        assert_eq!(*log.borrow(), vec!["second"]);
        assert_eq!(subject.len(), 1);
    }

    #[test]
    fn test_detach_matches_identity_not_value() {
        let a: Rc<dyn Observer> = Rc::new(ConcreteObserver::new("Twin"));
        let b: Rc<dyn Observer> = Rc::new(ConcreteObserver::new("Twin"));
        let mut subject = Subject::new();
        subject.attach(Rc::clone(&a));
        subject.attach(Rc::clone(&b));

        subject.detach(&a);
        assert_eq!(subject.len(), 1);
        assert_eq!(capture(|out| subject.notify(out)), vec!["Twin has been notified."]);

        subject.detach(&a);
        assert_eq!(subject.len(), 1);
    }

    #[test]
    fn test_notify_without_observers() {
        let subject = Subject::new();
        assert!(subject.is_empty());
        assert!(capture(|out| subject.notify(out)).is_empty());
    }

    #[test]
    fn test_run_output() {
        assert_eq!(
            capture(run),
            vec!["Observer1 has been notified.", "Observer2 has been notified."]
        );
    }
}
