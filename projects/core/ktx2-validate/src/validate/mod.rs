//! The validation passes and the state they share.

mod header;
mod indices;
mod metadata;

use crate::header::Header;
use crate::issues::{self, Issue};
use crate::reader::{ByteReader, OutOfBounds};
use crate::sink::{DiagnosticSink, FatalIssue, ValidationReport};
use core::fmt;

/// Rounds `value` up to the next multiple of `alignment`.
pub(crate) fn align_up(value: u64, alignment: u64) -> u64 {
    value.div_ceil(alignment) * alignment
}

/// State shared by the validation passes of a single call: the bounded
/// reader over the input, the diagnostic sink, the parsed header and the
/// counts derived from it.
pub(crate) struct ValidationContext<'a, F> {
    pub reader: ByteReader<'a>,
    pub sink: DiagnosticSink<F>,

    pub header: Header,
    /// Effective layer count (`max(layerCount, 1)`).
    pub layer_count: u32,
    /// Effective level count (`max(levelCount, 1)`).
    pub level_count: u32,
    /// 1, 2 or 3; 4 for the (unsupported) 3D array case.
    pub dimension_count: u32,
}

impl<'a, F: FnMut(&ValidationReport)> ValidationContext<'a, F> {
    pub fn new(data: &'a [u8], warnings_as_errors: bool, callback: F) -> Self {
        Self {
            reader: ByteReader::new(data),
            sink: DiagnosticSink::new(warnings_as_errors, callback),
            header: Header::default(),
            layer_count: 0,
            level_count: 0,
            dimension_count: 0,
        }
    }

    /// Runs every pass in file order. Returns early only on a fatal
    /// diagnostic; errors accumulate in the sink.
    pub fn validate(&mut self) -> Result<(), FatalIssue> {
        self.validate_header()?;
        self.validate_indices();
        self.validate_metadata()?;
        Ok(())
    }

    pub fn exit_code(&self) -> i32 {
        if self.sink.error_count() > 0 {
            3
        } else {
            0
        }
    }

    pub(crate) fn warning(&mut self, issue: &Issue, args: &[&dyn fmt::Display]) {
        self.sink.warning(issue, args);
    }

    pub(crate) fn error(&mut self, issue: &Issue, args: &[&dyn fmt::Display]) {
        self.sink.error(issue, args);
    }

    /// Converts a reader bounds error into the `UnexpectedEOF` fatal.
    pub(crate) fn unexpected_eof(&mut self, e: OutOfBounds) -> FatalIssue {
        self.sink
            .fatal(&issues::io::UNEXPECTED_EOF, &[&e.needed, &e.name, &e.available])
    }

    /// Seeks forward, raising the `UnexpectedEOFSeek` fatal when the target
    /// is not inside the file.
    pub(crate) fn seek_to(&mut self, offset: u64, name: &'static str) -> Result<(), FatalIssue> {
        self.reader
            .seek_to(offset, name)
            .map_err(|e| {
                self.sink.fatal(
                    &issues::io::UNEXPECTED_EOF_SEEK,
                    &[&e.offset, &e.name, &e.length],
                )
            })
    }

    /// Checks that the bytes from `start` up to the next `alignment`
    /// boundary (clamped to `limit`) are zero, reporting each non-zero
    /// padding byte. Returns the position after the padding.
    pub(crate) fn check_padding_zeros(
        &mut self,
        bytes: &[u8],
        start: usize,
        limit: usize,
        alignment: u64,
        location: &str,
    ) -> usize {
        let end = (align_up(start as u64, alignment) as usize).min(limit);
        for (i, &byte) in bytes[start..end].iter().enumerate() {
            if byte != 0 {
                let position = format!("{location} at offset {}", start + i);
                self.sink
                    .error(&issues::metadata::PADDING_NOT_ZERO, &[&byte, &position]);
            }
        }
        end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn align_up_rounds_to_the_next_multiple() {
        assert_eq!(align_up(0, 4), 0);
        assert_eq!(align_up(1, 4), 4);
        assert_eq!(align_up(4, 4), 4);
        assert_eq!(align_up(13, 8), 16);
        assert_eq!(align_up(96, 8), 96);
    }

    #[test]
    fn check_padding_zeros_reports_each_nonzero_byte() {
        let reports = RefCell::new(Vec::new());
        let bytes = [7u8, 0, 5, 0, 9];
        let mut ctx = ValidationContext::new(&[], false, |r: &ValidationReport| {
            reports.borrow_mut().push(r.clone())
        });

        // Padding runs from offset 1 to the 4-byte boundary.
        let end = ctx.check_padding_zeros(&bytes, 1, bytes.len(), 4, "in the test block");
        assert_eq!(end, 4);

        let reports = reports.borrow();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].id, issues::metadata::PADDING_NOT_ZERO.id);
        assert!(reports[0].details.contains("at offset 2"));
    }

    #[test]
    fn check_padding_zeros_clamps_to_the_limit() {
        let reports = RefCell::new(Vec::new());
        let bytes = [0u8, 1];
        let mut ctx = ValidationContext::new(&[], false, |r: &ValidationReport| {
            reports.borrow_mut().push(r.clone())
        });

        let end = ctx.check_padding_zeros(&bytes, 0, 2, 8, "in the test block");
        assert_eq!(end, 2);
        assert_eq!(reports.borrow().len(), 1);
    }
}
