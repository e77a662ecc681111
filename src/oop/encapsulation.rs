//! Encapsulation: the name field is private and only reachable through
//! the getter and setter.

use crate::Result;
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut person = Person::new("John");
    writeln!(out, "{}", person.name())?;
    person.set_name("Doe");
    writeln!(out, "{}", person.name())?;
    Ok(())
}
