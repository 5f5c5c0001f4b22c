//! nether-half tool library
//!
//! Value inspection and file conversion used by the `nether-half` binary.

pub mod config;
pub mod inspect;
pub mod stream;

pub use config::{DisplayFormat, HalfConfig};
pub use inspect::{Inspection, parse_bits};
pub use stream::{pack_file, unpack_file};
