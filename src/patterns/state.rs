//! State: an object delegates its behavior to a swappable state object, so
//! it appears to change type at runtime.
//!
//! Typical uses: state machines, ATMs (idle, processing, out of service),
//! media players (playing, paused, stopped).

use crate::Result;
use std::io::Write;

pub trait State {
    fn name(&self) -> &'static str;
    fn handle(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HappyState;

impl State for HappyState {
    fn name(&self) -> &'static str {
        "happy"
    }

    fn handle(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "I am in a happy state!")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SadState;

impl State for SadState {
    fn name(&self) -> &'static str {
        "sad"
    }

    fn handle(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "I am in a sad state.")?;
        Ok(())
    }
}

/// No transition rules: any state can be set at any time.
#[derive(Default)]
pub struct Individual {
    state: Option<Box<dyn State>>,
}

impl Individual {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_state(&mut self, state: impl State + 'static) {
        tracing::debug!(
            from = self.state.as_ref().map(|s| s.name()),
            to = state.name(),
            "state changed"
        );
        self.state = Some(Box::new(state));
    }

    /// No-op while no state is set.
    pub fn behave(&self, out: &mut dyn Write) -> Result<()> {
        match &self.state {
            Some(state) => state.handle(out),
            None => Ok(()),
        }
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut person = Individual::new();

    person.set_state(HappyState);
    person.behave(out)?;

    person.set_state(SadState);
    person.behave(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::capture;

    #[test]
    fn test_unset_state_does_nothing() {
        let person = Individual::new();
        assert!(capture(|out| person.behave(out)).is_empty());
    }

    #[test]
    fn test_same_individual_changes_behavior() {
        let mut person = Individual::new();
        person.set_state(HappyState);
        assert_eq!(capture(|out| person.behave(out)), vec!["I am in a happy state!"]);

        person.set_state(SadState);
        assert_eq!(capture(|out| person.behave(out)), vec!["I am in a sad state."]);

        person.set_state(HappyState);
        assert_eq!(capture(|out| person.behave(out)), vec!["I am in a happy state!"]);
    }

    #[test]
    fn test_run_output() {
        assert_eq!(
            capture(run),
            vec!["I am in a happy state!", "I am in a sad state."]
        );
    }
}
