//! Bounded, forward-only cursor over the validation buffer.
//!
//! Every read on the untrusted path goes through this cursor; the structured
//! errors it returns carry enough context for the caller to raise the
//! matching `UnexpectedEOF` / `UnexpectedEOFSeek` fatal.

use thiserror::Error;

/// A read would cross the end of the buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unexpected end of input: needed {needed} byte for {name} but only {available} available")]
pub struct OutOfBounds {
    pub needed: usize,
    pub name: &'static str,
    pub available: usize,
}

/// A seek target lies past the end of the buffer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("seek to {offset} for {name} past the end of {length} byte of input")]
pub struct SeekOutOfBounds {
    pub offset: u64,
    pub name: &'static str,
    pub length: usize,
}

/// Forward-only cursor over an immutable byte buffer.
pub struct ByteReader<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Moves the cursor to an absolute offset.
    ///
    /// Backward seeks never happen during validation; the contract is
    /// debug-checked but not observable in release builds.
    pub fn seek_to(&mut self, offset: u64, name: &'static str) -> Result<(), SeekOutOfBounds> {
        if offset > self.data.len() as u64 {
            return Err(SeekOutOfBounds {
                offset,
                name,
                length: self.data.len(),
            });
        }
        debug_assert!(
            offset as usize >= self.cursor,
            "backward seek to {offset} from {} for {name}",
            self.cursor
        );
        self.cursor = offset as usize;
        Ok(())
    }

    /// Copies `N` bytes at the cursor. The cursor is not advanced; callers
    /// combine `seek_to` and `read`.
    pub fn read<const N: usize>(&self, name: &'static str) -> Result<[u8; N], OutOfBounds> {
        let slice = self.read_slice(N, name)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Borrows `len` bytes at the cursor without advancing it.
    pub fn read_slice(&self, len: usize, name: &'static str) -> Result<&'a [u8], OutOfBounds> {
        self.cursor
            .checked_add(len)
            .and_then(|end| self.data.get(self.cursor..end))
            .ok_or(OutOfBounds {
                needed: len,
                name,
                available: self.data.len() - self.cursor,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_within_bounds() {
        let reader = ByteReader::new(&[1, 2, 3, 4]);
        assert_eq!(reader.read::<4>("all"), Ok([1, 2, 3, 4]));
        assert_eq!(reader.read::<2>("prefix"), Ok([1, 2]));
    }

    #[test]
    fn read_past_end_reports_what_was_available() {
        let reader = ByteReader::new(&[0u8; 10]);
        let err = reader.read::<16>("the header").unwrap_err();
        assert_eq!(
            err,
            OutOfBounds {
                needed: 16,
                name: "the header",
                available: 10
            }
        );
    }

    #[test]
    fn read_does_not_advance_the_cursor() {
        let mut reader = ByteReader::new(&[9, 8, 7, 6]);
        assert_eq!(reader.read::<1>("a"), Ok([9]));
        assert_eq!(reader.read::<1>("a"), Ok([9]));
        reader.seek_to(2, "b").unwrap();
        assert_eq!(reader.read::<2>("b"), Ok([7, 6]));
    }

    #[test]
    fn seek_to_end_is_allowed() {
        let mut reader = ByteReader::new(&[0u8; 4]);
        assert!(reader.seek_to(4, "end").is_ok());
        let err = reader.read_slice(1, "past").unwrap_err();
        assert_eq!(err.available, 0);
    }

    #[test]
    fn seek_past_end_reports_the_file_length() {
        let mut reader = ByteReader::new(&[0u8; 4]);
        let err = reader.seek_to(5, "region").unwrap_err();
        assert_eq!(
            err,
            SeekOutOfBounds {
                offset: 5,
                name: "region",
                length: 4
            }
        );
    }

    #[test]
    fn empty_buffer() {
        let reader = ByteReader::new(&[]);
        assert!(reader.is_empty());
        assert!(reader.read::<1>("anything").is_err());
    }
}
