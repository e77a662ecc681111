//! Factory: callers ask for a drawing by key and get back a `Box<dyn Draw>`
//! without naming the concrete type.
//!
//! Typical uses: platform-specific UI widgets, picking a JSON/XML/CSV
//! parser from a file type, choosing a payment provider at runtime.

use crate::{PatternError, Result};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub trait Draw {
    fn draw(&self, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Star;

impl Draw for Star {
    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing a Star.")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Retangle;

impl Draw for Retangle {
    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing a Retangle.")?;
        Ok(())
    }
}

/// The keys the factory understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    Star,
    Retangle,
}

impl DrawKind {
    pub const ALL: [DrawKind; 2] = [DrawKind::Star, DrawKind::Retangle];

    pub fn key(self) -> &'static str {
        match self {
            DrawKind::Star => "star",
            DrawKind::Retangle => "retangle",
        }
    }
}

impl fmt::Display for DrawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DrawKind {
    type Err = PatternError;

    fn from_str(key: &str) -> Result<Self> {
        match key {
            "star" => Ok(DrawKind::Star),
            "retangle" => Ok(DrawKind::Retangle),
            other => Err(PatternError::InvalidShapeType(other.to_string())),
        }
    }
}

pub struct DrawFactory;

impl DrawFactory {
    /// Unknown keys are an error, never a fallback variant.
    pub fn create_draw(key: &str) -> Result<Box<dyn Draw>> {
        let kind = key.parse::<DrawKind>().map_err(|err| {
            tracing::warn!(key, "draw factory rejected key");
            err
        })?;
        Ok(Self::create(kind))
    }

    pub fn create(kind: DrawKind) -> Box<dyn Draw> {
        match kind {
            DrawKind::Star => Box::new(Star),
            DrawKind::Retangle => Box::new(Retangle),
        }
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let star = DrawFactory::create_draw("star")?;
    star.draw(out)
}
