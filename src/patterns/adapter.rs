//! Adapter: lets a legacy type satisfy an interface it was never written for.
//!
//! Typical uses: integrating legacy systems, wrapping third-party libraries,
//! adapting platform-specific types to a common interface.

use crate::Result;
use std::io::Write;

/// Legacy printer with its own, incompatible API.
#[derive(Debug, Default, Clone, Copy)]
pub struct OldPrinter;

impl OldPrinter {
    pub fn print_old_way(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Printing with old printer...")?;
        Ok(())
    }
}

pub trait NewPrinter {
    fn print(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct PrinterAdapter {
    legacy: OldPrinter,
}

impl PrinterAdapter {
    pub fn new(legacy: OldPrinter) -> Self {
        Self { legacy }
    }
}

impl NewPrinter for PrinterAdapter {
    fn print(&self, out: &mut dyn Write) -> Result<()> {
        self.legacy.print_old_way(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let adapter = PrinterAdapter::new(OldPrinter);
    adapter.print(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::capture;

    #[test]
    fn test_adapter_forwards_to_legacy_call() {
        let printer: Box<dyn NewPrinter> = Box::new(PrinterAdapter::new(OldPrinter));
        let direct = capture(|out| OldPrinter.print_old_way(out));
        assert_eq!(capture(|out| printer.print(out)), direct);
    }

    #[test]
    fn test_run_output() {
        assert_eq!(capture(run), vec!["Printing with old printer..."]);
    }
}
