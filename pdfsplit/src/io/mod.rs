//! PDF file I/O.
//!
//! Reading the source document and writing part files. All disk access for
//! a split operation goes through these two types.

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};
