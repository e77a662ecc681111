//! Strategy: a family of interchangeable algorithms behind one trait; the
//! client picks one and never cares which.
//!
//! Typical uses: choosing a sort by data size, payment providers picked at
//! checkout, image filters.

use crate::Result;
use std::io::Write;

pub trait PaymentStrategy {
    fn pay(&self, amount: f64, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: f64, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Paid ${amount} using Credit Card.")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalPayment;

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: f64, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Paid ${amount} using PayPal.")?;
        Ok(())
    }
}

pub struct ShoppingCart {
    strategy: Box<dyn PaymentStrategy>,
}

impl ShoppingCart {
    pub fn new(strategy: impl PaymentStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn checkout(&self, amount: f64, out: &mut dyn Write) -> Result<()> {
        self.strategy.pay(amount, out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let cart1 = ShoppingCart::new(CreditCardPayment);
    cart1.checkout(100.0, out)?;

    let cart2 = ShoppingCart::new(PayPalPayment);
    cart2.checkout(200.0, out)?;
    Ok(())
}
