//! The four pillars: abstraction, encapsulation, inheritance, polymorphism.

pub mod abstraction;
pub mod encapsulation;
pub mod inheritance;
pub mod polymorphism;
