//! Abstraction: callers see *what* a vehicle can do, never how it does it.

use crate::Result;
use std::io::Write;

/// Every vehicle has a brand and must say how it starts and honks.
pub trait Vehicle {
    fn brand(&self) -> &str;
    fn start_engine(&self, out: &mut dyn Write) -> Result<()>;
    fn honk(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    brand: String,
}

impl Car {
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
        }
    }
}

impl Vehicle for Car {
    fn brand(&self) -> &str {
        &self.brand
    }

    fn start_engine(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} car engine started.", self.brand)?;
        Ok(())
    }

    fn honk(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Bi Bi!")?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let car: Box<dyn Vehicle> = Box::new(Car::new("Ferrari"));
    car.start_engine(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::capture;

    #[test]
    fn test_start_engine_uses_brand() {
        let car = Car::new("Lada");
        assert_eq!(capture(|out| car.start_engine(out)), vec!["Lada car engine started."]);
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let vehicle: &dyn Vehicle = &Car::new("Fiat");
        assert_eq!(vehicle.brand(), "Fiat");
        assert_eq!(capture(|out| vehicle.honk(out)), vec!["Bi Bi!"]);
    }

    #[test]
    fn test_run_output() {
        assert_eq!(capture(run), vec!["Ferrari car engine started."]);
    }
}
