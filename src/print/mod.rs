//! Print hand-off for generated documents

mod spool;
mod traits;

pub use spool::{PrintReceipt, SpoolPrinter};
pub use traits::PrintSink;

#[cfg(test)]
pub use traits::MockPrintSink;
