//! Helpers for test harnesses that need files, usually disk images, of a
//! specific size: rounding sizes up to a power of two, and truncating or
//! extending files on disk.

pub mod image;
pub mod pow2;

pub use image::{file_size, file_truncate, image_pow2ceil_expand};
pub use pow2::{bit_length, checked_pow2ceil, is_power_of_two, pow2ceil};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failure from the underlying filesystem operation, as it was reported.
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    /// No power of two size representable in 64 bits fits a file this big.
    #[error("file of {0} bytes can't be expanded to a power of two size")]
    SizeOverflow(u64),
}
