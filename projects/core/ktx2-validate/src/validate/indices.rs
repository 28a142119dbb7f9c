//! Index validation: the DFD, KVD and SGD `(byteOffset, byteLength)` pairs
//! and the continuity of the regions they describe.

use super::{align_up, ValidationContext};
use crate::header::{KTX2_HEADER_SIZE, LEVEL_INDEX_ENTRY_SIZE};
use crate::issues::header as issue;
use crate::sink::ValidationReport;

impl<F: FnMut(&ValidationReport)> ValidationContext<'_, F> {
    /// One error per violation; nothing here aborts validation.
    pub(crate) fn validate_indices(&mut self) {
        let header = self.header;
        let file_length = self.reader.len() as u64;
        let dfd = header.dfd;
        let kvd = header.kvd;
        let sgd = header.sgd;
        let scheme = header.supercompression_scheme;

        // DFD: required, 4-byte aligned, in bounds.
        if dfd.byte_offset == 0 {
            self.error(&issue::INDEX_DFD_ZERO_OFFSET, &[]);
        }
        if dfd.byte_offset % 4 != 0 {
            self.error(&issue::INDEX_DFD_ALIGNMENT, &[&dfd.byte_offset]);
        }
        if dfd.byte_length == 0 {
            self.error(&issue::INDEX_DFD_ZERO_LENGTH, &[]);
        }
        if u64::from(dfd.byte_offset) + u64::from(dfd.byte_length) > file_length {
            self.error(
                &issue::INDEX_DFD_INVALID,
                &[&dfd.byte_offset, &dfd.byte_length, &file_length],
            );
        }

        // KVD: optional, 4-byte aligned, in bounds.
        if kvd.byte_length == 0 && kvd.byte_offset != 0 {
            self.error(&issue::INDEX_KVD_OFFSET_WITHOUT_LENGTH, &[&kvd.byte_offset]);
        }
        if kvd.byte_offset % 4 != 0 {
            self.error(&issue::INDEX_KVD_ALIGNMENT, &[&kvd.byte_offset]);
        }
        if u64::from(kvd.byte_offset) + u64::from(kvd.byte_length) > file_length {
            self.error(
                &issue::INDEX_KVD_INVALID,
                &[&kvd.byte_offset, &kvd.byte_length, &file_length],
            );
        }

        // SGD: presence driven by the scheme, 8-byte aligned, in bounds.
        if sgd.byte_length == 0 && sgd.byte_offset != 0 {
            self.error(&issue::INDEX_SGD_OFFSET_WITHOUT_LENGTH, &[&sgd.byte_offset]);
        }
        if sgd.byte_offset % 8 != 0 {
            self.error(&issue::INDEX_SGD_ALIGNMENT, &[&sgd.byte_offset]);
        }
        if scheme.has_global_data() && sgd.byte_length == 0 {
            self.error(&issue::INDEX_SGD_MISSING, &[&scheme]);
        }
        if !scheme.has_global_data() && sgd.byte_length != 0 {
            self.error(&issue::INDEX_SGD_EXISTS, &[&sgd.byte_length, &scheme]);
        }
        if sgd
            .byte_offset
            .checked_add(sgd.byte_length)
            .is_none_or(|end| end > file_length)
        {
            self.error(
                &issue::INDEX_SGD_INVALID,
                &[&sgd.byte_offset, &sgd.byte_length, &file_length],
            );
        }

        // Continuity: header, level index, DFD, KVD, SGD must be contiguous
        // up to the required alignment padding.
        let level_index_end =
            KTX2_HEADER_SIZE as u64 + LEVEL_INDEX_ENTRY_SIZE * u64::from(self.level_count);

        let expected_dfd = align_up(level_index_end, 4);
        if dfd.byte_offset != 0 && u64::from(dfd.byte_offset) != expected_dfd {
            self.error(&issue::INDEX_DFD_CONTINUITY, &[&dfd.byte_offset, &expected_dfd]);
        }
        let mut previous_end = if dfd.byte_offset != 0 {
            u64::from(dfd.byte_offset) + u64::from(dfd.byte_length)
        } else {
            expected_dfd + u64::from(dfd.byte_length)
        };

        if kvd.byte_offset != 0 {
            let expected_kvd = align_up(previous_end, 4);
            if u64::from(kvd.byte_offset) != expected_kvd {
                self.error(&issue::INDEX_KVD_CONTINUITY, &[&kvd.byte_offset, &expected_kvd]);
            }
            previous_end = u64::from(kvd.byte_offset) + u64::from(kvd.byte_length);
        }

        if sgd.byte_offset != 0 {
            let expected_sgd = align_up(previous_end, 8);
            if sgd.byte_offset != expected_sgd {
                self.error(&issue::INDEX_SGD_CONTINUITY, &[&sgd.byte_offset, &expected_sgd]);
            }
        }
    }
}
