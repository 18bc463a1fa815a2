//! Utilkit Core Library
//!
//! Small standalone utilities: human-readable byte sizes, string case
//! conversion and splitting, value-based comparison of pointer collections,
//! map-key extraction, file accessibility checks, and a fatal
//! "this should never happen" path.

pub mod byte_size;
pub mod collections;
pub mod error;
pub mod fatal;
pub mod file_access;
pub mod strings;

pub use byte_size::{from_bytes, to_bytes, ByteSize, ByteUnit};
pub use collections::{
    are_equal_by, are_set_of_ptr_equal, contains_by, get_keys, pointee_eq, set_of_ptr_contains,
};
pub use error::{Error, Result, SizeError};
pub use fatal::this_should_never_happen;
pub use file_access::{file_exists, is_file_accessible, FileAccessMode};
pub use strings::{split_string, split_string_by_any, split_strings, to_lowercase, to_uppercase};
