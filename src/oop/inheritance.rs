//! Inheritance, Rust style: shared behavior lives in a trait's default
//! method, and a type "overrides" it by providing its own body.

use crate::Result;
use std::io::Write;

pub trait Animal {
    fn name(&self) -> &str;

    /// Generic sound for any animal that does not know better.
    fn make_sound(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Some generic sound...")?;
        Ok(())
    }
}

/// An animal that keeps the default sound.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericAnimal {
    name: String,
}

impl GenericAnimal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for GenericAnimal {
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} says: Woof!", self.name)?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let animal = GenericAnimal::new("Animal");
    animal.make_sound(out)?;

    let dog = Dog::new("Buddy");
    dog.make_sound(out)?;
    Ok(())
}
