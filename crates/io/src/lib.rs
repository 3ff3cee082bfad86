//! Binary IO substrate for the neotx crates.
//!
//! Provides the `BinaryWriter`/`MemoryReader` pair used by every wire
//! format in this workspace (transactions, scripts, NEF containers) and
//! the [`Serializable`] trait tying the two together.

mod binary_writer;
mod error;
mod memory_reader;
mod serializable;

pub use binary_writer::BinaryWriter;
pub use error::{IoError, IoResult};
pub use memory_reader::MemoryReader;
pub use serializable::{list_size, Serializable, SerializableExt};

/// Returns the serialized size of a variable-length integer.
pub fn var_size(value: u64) -> usize {
    if value < 0xFD {
        1
    } else if value <= 0xFFFF {
        3
    } else if value <= 0xFFFF_FFFF {
        5
    } else {
        9
    }
}

/// Returns the serialized size of a length-prefixed byte string.
pub fn var_bytes_size(len: usize) -> usize {
    var_size(len as u64) + len
}
