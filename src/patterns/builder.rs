//! Builder: assemble a complex object step by step.
//!
//! Typical uses: document generation with many sections, meal planning
//! (drink, main course, dessert), configuring vehicles or API clients.

use crate::Result;
use std::io::Write;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    pub fn add_part(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn show_parts(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Product parts: {}", self.parts.join(", "))?;
        Ok(())
    }
}

/// Non-consuming builder: each step takes `&mut self` and hands the
/// builder back so calls chain.
#[derive(Debug, Default)]
pub struct ProductBuilder {
    product: Product,
}

impl ProductBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_part_a(&mut self) -> &mut Self {
        self.product.add_part("PartA");
        self
    }

    pub fn build_part_b(&mut self) -> &mut Self {
        self.product.add_part("PartB");
        self
    }

    pub fn build_part_c(&mut self) -> &mut Self {
        self.product.add_part("PartC");
        self
    }

    #[must_use]
    pub fn product(&self) -> Product {
        self.product.clone()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let product = ProductBuilder::new()
        .build_part_a()
        .build_part_b()
        .build_part_c()
        .product();
    product.show_parts(out)
}
