//! Creational, structural and behavioral design patterns.

pub mod adapter;
pub mod builder;
pub mod command;
pub mod decorator;
pub mod factory;
pub mod observer;
pub mod proxy;
pub mod singleton;
pub mod state;
pub mod strategy;
