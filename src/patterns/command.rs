//! Command: a request wrapped in an object, so it can be stored, passed
//! around and fired later.
//!
//! Typical uses: remote controls, queued or undoable operations,
//! database transactions.

use crate::Result;
use std::cell::Cell;
use std::io::Write;

pub trait Command {
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
}

/// The receiver. Commands borrow it; the flag records the last switch.
#[derive(Debug, Default)]
pub struct Light {
    on: Cell<bool>,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.on.get()
    }

    pub fn on(&self, out: &mut dyn Write) -> Result<()> {
        self.on.set(true);
        writeln!(out, "Light is ON")?;
        Ok(())
    }

    pub fn off(&self, out: &mut dyn Write) -> Result<()> {
        self.on.set(false);
        writeln!(out, "Light is OFF")?;
        Ok(())
    }
}

pub struct LightOnCommand<'a> {
    light: &'a Light,
}

impl<'a> LightOnCommand<'a> {
    pub fn new(light: &'a Light) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.light.on(out)
    }
}

pub struct LightOffCommand<'a> {
    light: &'a Light,
}

impl<'a> LightOffCommand<'a> {
    pub fn new(light: &'a Light) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand<'_> {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.light.off(out)
    }
}

/// Invoker holding at most one command.
#[derive(Default)]
pub struct RemoteControl<'a> {
    command: Option<&'a dyn Command>,
}

impl<'a> RemoteControl<'a> {
    pub fn new() -> Self {
        Self { command: None }
    }

    pub fn set_command(&mut self, command: &'a dyn Command) {
        tracing::debug!(replaced = self.command.is_some(), "remote control command set");
        self.command = Some(command);
    }

    /// Does nothing until a command is set.
    pub fn press_button(&self, out: &mut dyn Write) -> Result<()> {
        match self.command {
            Some(command) => command.execute(out),
            None => Ok(()),
        }
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let light = Light::new();
    let light_on = LightOnCommand::new(&light);

    let mut remote = RemoteControl::new();
    remote.set_command(&light_on);
    remote.press_button(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::capture;

    #[test]
    fn test_unset_remote_is_noop() {
        let remote = RemoteControl::new();
        assert!(capture(|out| remote.press_button(out)).is_empty());
    }

    #[test]
    fn test_commands_reach_receiver() {
        let light = Light::new();
        let on = LightOnCommand::new(&light);
        let off = LightOffCommand::new(&light);

        let mut remote = RemoteControl::new();
        remote.set_command(&on);
        assert_eq!(capture(|out| remote.press_button(out)), vec!["Light is ON"]);
        assert!(light.is_on());

        remote.set_command(&off);
        assert_eq!(capture(|out| remote.press_button(out)), vec!["Light is OFF"]);
        assert!(!light.is_on());
    }

    #[test]
    fn test_pressing_twice_repeats_command() {
        let light = Light::new();
        let on = LightOnCommand::new(&light);
        let mut remote = RemoteControl::new();
        remote.set_command(&on);
        let lines = capture(|out| {
            remote.press_button(out)?;
            remote.press_button(out)
        });
        assert_eq!(lines, vec!["Light is ON", "Light is ON"]);
    }

    #[test]
    fn test_run_output() {
        assert_eq!(capture(run), vec!["Light is ON"]);
    }
}
