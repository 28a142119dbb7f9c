//! Structural validator for KTX2 texture container files.
//!
//! A KTX2 file is a structured binary texture asset: a fixed header, a level
//! index, a Data Format Descriptor, a Key/Value metadata block, optional
//! Supercompression Global Data, and the image payload. This crate reads such
//! a file and reports every structural deviation from the KTX2 specification
//! through a caller-supplied sink, returning an exit status derived from the
//! worst diagnostic seen.
//!
//! # Example
//!
//! ```
//! use ktx2_validate::{validate_memory, Severity};
//!
//! let not_ktx2 = b"definitely not a texture";
//! let mut worst = None;
//! let exit_code = validate_memory(not_ktx2, false, |report| {
//!     worst = worst.max(Some(report.severity));
//! });
//! assert_eq!(exit_code, 3);
//! assert_eq!(worst, Some(Severity::Fatal));
//! ```
//!
//! Validation never mutates or interprets the image payload; only the
//! container structure is checked.

pub mod format;
pub mod header;
pub mod issues;
mod reader;
mod sink;
mod validate;

pub use issues::{Issue, IssueId, Severity};
pub use sink::ValidationReport;

use lightweight_mmap::handles::ReadOnlyFileHandle;
use lightweight_mmap::mmap::ReadOnlyMmap;
use sink::DiagnosticSink;
use std::io::Read;
use std::path::Path;
use validate::ValidationContext;

/// The file is structurally valid (warnings allowed).
pub const EXIT_VALID: i32 = 0;
/// The input could not be opened or read before any parsing happened.
pub const EXIT_IO_FAILURE: i32 = 2;
/// Validation found errors, or a fatal diagnostic aborted it.
pub const EXIT_INVALID: i32 = 3;

/// Validates a KTX2 file held in memory.
///
/// `callback` is invoked synchronously, exactly once per diagnostic, in
/// detection order. When `warnings_as_errors` is set every warning is
/// delivered re-stamped as an error and counts towards the exit code.
pub fn validate_memory<F>(data: &[u8], warnings_as_errors: bool, callback: F) -> i32
where
    F: FnMut(&ValidationReport),
{
    let mut ctx = ValidationContext::new(data, warnings_as_errors, callback);
    match ctx.validate() {
        Ok(()) => ctx.exit_code(),
        // The fatal report already reached the sink; skip the rest of the
        // validation and return.
        Err(_) => EXIT_INVALID,
    }
}

/// Reads a stream to its end and validates the buffered bytes.
///
/// A read failure is reported as the `FileRead` fatal diagnostic and returns
/// [`EXIT_IO_FAILURE`].
pub fn validate_stream<R, F>(stream: &mut R, warnings_as_errors: bool, mut callback: F) -> i32
where
    R: Read,
    F: FnMut(&ValidationReport),
{
    let mut data = Vec::new();
    if let Err(e) = stream.read_to_end(&mut data) {
        let mut sink = DiagnosticSink::new(warnings_as_errors, &mut callback);
        let _ = sink.fatal(&issues::io::FILE_READ, &[&e]);
        return EXIT_IO_FAILURE;
    }
    validate_memory(&data, warnings_as_errors, callback)
}

/// Maps a file into memory and validates it.
///
/// Open, size and mapping failures are reported as their 1000-series fatal
/// diagnostics and return [`EXIT_IO_FAILURE`]; everything past that point
/// behaves like [`validate_memory`].
pub fn validate_file<P, F>(path: P, warnings_as_errors: bool, mut callback: F) -> i32
where
    P: AsRef<Path>,
    F: FnMut(&ValidationReport),
{
    let path = path.as_ref();
    let mut sink = DiagnosticSink::new(warnings_as_errors, &mut callback);

    let handle = match ReadOnlyFileHandle::open(path) {
        Ok(handle) => handle,
        Err(e) => {
            let shown = path.display();
            let _ = sink.fatal(&issues::io::FILE_OPEN, &[&shown, &e]);
            return EXIT_IO_FAILURE;
        }
    };
    let size = match handle.size() {
        Ok(size) => size as usize,
        Err(e) => {
            let _ = sink.fatal(&issues::io::FILE_TELL_FAILURE, &[&e]);
            return EXIT_IO_FAILURE;
        }
    };
    drop(sink);

    // Mapping a zero-length file is platform-dependent; an empty buffer
    // produces the same diagnostics.
    if size == 0 {
        return validate_memory(&[], warnings_as_errors, callback);
    }

    let mapping = match ReadOnlyMmap::new(&handle, 0, size) {
        Ok(mapping) => mapping,
        Err(e) => {
            let mut sink = DiagnosticSink::new(warnings_as_errors, &mut callback);
            let _ = sink.fatal(&issues::io::FILE_READ, &[&e]);
            return EXIT_IO_FAILURE;
        }
    };
    validate_memory(mapping.as_slice(), warnings_as_errors, callback)
}
