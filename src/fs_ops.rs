//! The raw copy primitive.
//!
//! - The destination is created with `create_new(true)`, so an existing file
//!   is never clobbered (the engine checks first, but the primitive holds the
//!   guarantee against races too).
//! - Source permission bits are preserved: on Unix the destination is created
//!   with the source's mode; elsewhere permissions are applied after the copy.
//! - A failure mid-copy removes the partially written destination before the
//!   error propagates. Handles close on every exit path.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

const BUF_SIZE: usize = 64 * 1024;

/// Copy `src` -> `dst` with create-exclusive semantics. Returns bytes copied.
pub fn copy_file(src: &Path, dst: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let src_perms = src_f.metadata()?.permissions();

    let mut opts = OpenOptions::new();
    opts.write(true).create_new(true);
    #[cfg(unix)]
    opts.mode(src_perms.mode());

    let dst_f = opts.open(dst)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dst_f);

    let result = io::copy(&mut reader, &mut writer).and_then(|bytes| {
        writer.flush()?;
        // umask may have stripped bits at creation; reassert the source mode
        fs::set_permissions(dst, src_perms)?;
        Ok(bytes)
    });
    drop(writer);

    match result {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            // any failure after creation removes the destination, truncated
            // or complete; the caller is told the copy did not happen
            let _ = fs::remove_file(dst);
            Err(e)
        }
    }
}
