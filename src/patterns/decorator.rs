//! Decorator: wrap an object in layers that each add a little behavior,
//! without touching the wrapped type.
//!
//! Typical uses: coffee add-ons, compression or encryption around streams,
//! power-ups stacked on a game character.

use crate::Result;
use std::io::Write;

pub trait Coffee {
    fn cost(&self) -> u32;
    fn description(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BasicCoffee;

impl Coffee for BasicCoffee {
    fn cost(&self) -> u32 {
        5
    }

    fn description(&self) -> String {
        "Basic Coffee".to_string()
    }
}

pub struct MilkDecorator {
    inner: Box<dyn Coffee>,
}

impl MilkDecorator {
    pub fn new(inner: impl Coffee + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Coffee for MilkDecorator {
    fn cost(&self) -> u32 {
        self.inner.cost() + 2
    }

    fn description(&self) -> String {
        format!("{}, Milk", self.inner.description())
    }
}

pub struct SugarDecorator {
    inner: Box<dyn Coffee>,
}

impl SugarDecorator {
    pub fn new(inner: impl Coffee + 'static) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl Coffee for SugarDecorator {
    fn cost(&self) -> u32 {
        self.inner.cost() + 1
    }

    fn description(&self) -> String {
        format!("{}, Sugar", self.inner.description())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let coffee = SugarDecorator::new(MilkDecorator::new(BasicCoffee));
    writeln!(out, "{}", coffee.description())?;
    writeln!(out, "{}", coffee.cost())?;
    Ok(())
}
