//! STX structural text format
//!
//! A line-oriented exchange format: one record per line, comma-separated
//! fields with the keyword first, `!` starting a comment line.
//!
//! ```text
//! ! cantilever
//! MATL, 1, S355, 210000000000, 7850
//! SECT, 1, IPE200, 1
//! NODE, 1, 0, 0, 0
//! NODE, 2, 6, 0, 0
//! BAR, 1, 1, 2, 1
//! ```
//!
//! Records reference each other by external integer id; a reference must
//! point at a record defined earlier in the file. Field text must not
//! contain commas.

mod document;
mod reader;
mod writer;

pub use document::{StxDocument, StxRecord, KW_BAR, KW_MATL, KW_NODE, KW_SECT};
pub use reader::{parse_stx, read_stx};
pub use writer::{serialize_stx, write_stx};
