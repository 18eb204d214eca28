//! Resizing of files on disk, typically disk images used by tests.

use std::{fs, fs::OpenOptions, path::Path};

use log::{debug, trace};

use crate::{pow2::checked_pow2ceil, Error};

/// Current length of the file at `path`, in bytes.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64, Error> {
    Ok(fs::metadata(path)?.len())
}

/// Truncates or zero-extends the file at `path` so that its length is exactly
/// `size` bytes.
///
/// The file is only opened if its size is not already `size`. Contents below
/// `size` are left untouched.
pub fn file_truncate(path: impl AsRef<Path>, size: u64) -> Result<(), Error> {
    let path = path.as_ref();
    let current = file_size(path)?;
    if current == size {
        trace!("{}: already {} bytes long", path.display(), size);
        return Ok(());
    }

    set_len(path, current, size)
}

/// Grows the file at `path` to the next power of two size. Never shrinks it.
///
/// Fails with `Error::SizeOverflow`, without touching the file, if the file is
/// larger than the largest power of two a `u64` can hold.
pub fn image_pow2ceil_expand(path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let current = file_size(path)?;
    let size = checked_pow2ceil(current).ok_or(Error::SizeOverflow(current))?;
    if current == size {
        trace!("{}: size {} is already a power of two", path.display(), size);
        return Ok(());
    }

    set_len(path, current, size)
}

fn set_len(path: &Path, current: u64, size: u64) -> Result<(), Error> {
    // Open without truncating, set_len() alone decides the final length.
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;
    file.set_len(size)?;

    debug!("{}: resized from {} to {} bytes", path.display(), current, size);
    Ok(())
}
