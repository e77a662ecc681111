//! Singleton: exactly one instance per process, reached through a global
//! accessor and created on first use.
//!
//! Typical uses: centralized app configuration, a shared logger, a
//! process-wide cache.

use crate::Result;
use lazy_static::lazy_static;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

lazy_static! {
    static ref INSTANCE: Singleton = Singleton::construct();
}

#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    fn construct() -> Self {
        let count = CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(count, "singleton constructed");
        Self { _private: () }
    }

    pub fn instance() -> &'static Singleton {
        &INSTANCE
    }

    /// Identity check, the equivalent of comparing two references with `===`.
    pub fn same(a: &Singleton, b: &Singleton) -> bool {
        std::ptr::eq(a, b)
    }

    /// How many times the instance has been built; never more than one.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    pub fn show_message(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Singleton instance.")?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let first = Singleton::instance();
    let second = Singleton::instance();
    writeln!(out, "{}", Singleton::same(first, second))?;
    first.show_message(out)
}
