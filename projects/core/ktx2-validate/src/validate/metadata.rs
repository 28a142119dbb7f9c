//! Key/value metadata validation: the wire-format scan, ordering and
//! uniqueness, and the per-key validators for the reserved `KTX*` keys.

use super::ValidationContext;
use crate::format::VkFormat;
use crate::issues::metadata as issue;
use crate::sink::{FatalIssue, ValidationReport};

/// Hard cap on parsed entries, so corrupt length words cannot drive an
/// unbounded scan.
const MAX_NUM_KV_ENTRY: usize = 100;

/// One parsed metadata record, borrowing from the validation buffer.
struct KeyValueEntry<'a> {
    key: &'a [u8],
    value: &'a [u8],
}

/// Presence of the keys that participate in cross-entry rules, collected
/// before per-key dispatch so the rules do not depend on key order.
#[derive(Default)]
struct KeyPresence {
    writer: bool,
    writer_sc_params: bool,
    cubemap_incomplete: bool,
}

impl<'a, F: FnMut(&ValidationReport)> ValidationContext<'a, F> {
    pub(crate) fn validate_metadata(&mut self) -> Result<(), FatalIssue> {
        let header = self.header;
        let mut presence = KeyPresence::default();

        if header.kvd.byte_length != 0 {
            self.seek_to(u64::from(header.kvd.byte_offset), "the Key/Value Data")?;
            let kvd = match self
                .reader
                .read_slice(header.kvd.byte_length as usize, "the Key/Value Data")
            {
                Ok(kvd) => kvd,
                Err(e) => return Err(self.unexpected_eof(e)),
            };

            let mut entries = self.scan_entries(kvd);

            // The region between the KVD and a following SGD must be zeroed
            // up to the SGD's 8-byte alignment.
            if header.sgd.byte_offset != 0 {
                let kvd_end = header.kvd.byte_offset as usize + header.kvd.byte_length as usize;
                let file_length = self.reader.len();
                self.check_padding_zeros(
                    self.reader.data(),
                    kvd_end,
                    file_length,
                    8,
                    "after the keyValueData",
                );
            }

            if entries.windows(2).any(|pair| pair[0].key > pair[1].key) {
                self.error(&issue::OUT_OF_ORDER, &[]);
                // Sort in memory so the per-key checks still run.
                entries.sort_by(|a, b| a.key.cmp(b.key));
            }

            if entries.windows(2).any(|pair| pair[0].key == pair[1].key) {
                self.error(&issue::DUPLICATE_KEY, &[]);
            }

            for entry in &entries {
                match entry.key {
                    b"KTXwriter" => presence.writer = true,
                    b"KTXwriterScParams" => presence.writer_sc_params = true,
                    b"KTXcubemapIncomplete" => presence.cubemap_incomplete = true,
                    _ => {}
                }
            }

            for entry in &entries {
                self.validate_entry(entry, &presence);
            }
        }

        if !presence.writer {
            if presence.writer_sc_params {
                self.error(&issue::KTX_WRITER_REQUIRED_BUT_MISSING, &[]);
            } else {
                self.warning(&issue::KTX_WRITER_MISSING, &[]);
            }
        }

        Ok(())
    }

    /// Walks the wire format: `u32 keyAndValueByteLength`, `key\0value`,
    /// zero padding to the next 4-byte boundary, repeated until the block is
    /// exactly filled. Recovery policies keep the scan going so one corrupt
    /// entry does not hide the rest.
    fn scan_entries(&mut self, kvd: &'a [u8]) -> Vec<KeyValueEntry<'a>> {
        let mut entries = Vec::new();
        let block_length = kvd.len();
        let mut cursor = 0usize;
        // Tracks the block length the entries claim, which can exceed the
        // actual block when the final padding is missing.
        let mut processed = 0usize;
        let mut stopped_early = false;

        while cursor < block_length {
            if entries.len() >= MAX_NUM_KV_ENTRY {
                self.error(&issue::TOO_MANY_ENTRY, &[&MAX_NUM_KV_ENTRY]);
                stopped_early = true;
                break;
            }

            let remaining = block_length - cursor;
            if remaining < 6 {
                self.error(&issue::NOT_ENOUGH_DATA_FOR_AN_ENTRY, &[&remaining]);
                if remaining < 4 {
                    stopped_early = true;
                    break;
                }
            }

            let declared = u32::from_le_bytes([
                kvd[cursor],
                kvd[cursor + 1],
                kvd[cursor + 2],
                kvd[cursor + 3],
            ]) as usize;
            cursor += 4;

            let available = block_length - cursor;
            let pair_length = if declared > available {
                self.error(&issue::KEY_VALUE_PAIR_SIZE_TOO_BIG, &[&declared, &available]);
                available
            } else {
                declared
            };
            if declared < 2 {
                self.error(&issue::KEY_VALUE_PAIR_SIZE_TOO_SMALL, &[&declared]);
            }

            let pair = &kvd[cursor..cursor + pair_length];
            let (key, value) = match pair.iter().position(|&byte| byte == 0) {
                Some(nul) => (&pair[..nul], &pair[nul + 1..]),
                None => {
                    let shown = String::from_utf8_lossy(pair);
                    self.error(&issue::KEY_MISSING_NULL_TERMINATOR, &[&shown]);
                    (pair, &pair[pair.len()..])
                }
            };

            let key = if key.starts_with(&[0xEF, 0xBB, 0xBF]) {
                let stripped = &key[3..];
                let shown = String::from_utf8_lossy(stripped);
                self.error(&issue::KEY_FORBIDDEN_BOM, &[&shown]);
                stripped
            } else {
                key
            };

            if let Err(e) = core::str::from_utf8(key) {
                let shown = String::from_utf8_lossy(key);
                let position = e.valid_up_to();
                self.error(&issue::KEY_INVALID_UTF8, &[&shown, &position]);
            }

            entries.push(KeyValueEntry { key, value });

            cursor += pair_length;
            processed = cursor;
            cursor = self.check_padding_zeros(kvd, cursor, block_length, 4, "in the keyValueData");
            processed = super::align_up(processed as u64, 4) as usize;
        }

        if !stopped_early {
            let consumed = processed.max(cursor);
            if consumed != block_length {
                self.error(&issue::SIZES_DONT_ADD_UP, &[&consumed, &block_length]);
            }
        }

        entries
    }

    fn validate_entry(&mut self, entry: &KeyValueEntry<'a>, presence: &KeyPresence) {
        match entry.key {
            b"KTXcubemapIncomplete" => self.validate_cubemap_incomplete(entry.value),
            b"KTXorientation" => self.validate_orientation(entry.value),
            b"KTXglFormat" => self.validate_gl_format(entry.value),
            b"KTXdxgiFormat__" => self.validate_dxgi_format(entry.value),
            b"KTXmetalPixelFormat" => self.validate_metal_pixel_format(entry.value),
            b"KTXswizzle" => self.validate_swizzle(entry.value),
            b"KTXwriter" => self.validate_writer(entry.value),
            b"KTXwriterScParams" => self.validate_writer_sc_params(entry.value),
            b"KTXastcDecodeMode" => self.validate_astc_decode_mode(entry.value),
            b"KTXanimData" => self.validate_anim_data(entry.value, presence),
            key if key.starts_with(b"KTX") || key.starts_with(b"ktx") => {
                let shown = String::from_utf8_lossy(key);
                self.error(&issue::UNKNOWN_RESERVED_KEY, &[&shown]);
            }
            key => {
                let shown = String::from_utf8_lossy(key);
                self.warning(&issue::CUSTOM_METADATA, &[&shown]);
            }
        }
    }

    fn validate_cubemap_incomplete(&mut self, value: &[u8]) {
        if value.len() != 1 {
            let length = value.len();
            self.error(&issue::KTX_CUBEMAP_INCOMPLETE_INVALID_SIZE, &[&length]);
            return;
        }
        let bits = value[0];

        if bits & 0xC0 != 0 {
            let shown = format!("{bits:08b}");
            self.error(&issue::KTX_CUBEMAP_INCOMPLETE_INVALID_VALUE, &[&shown]);
        }

        let faces_present = (bits & 0x3F).count_ones();
        if faces_present == 6 {
            self.warning(&issue::KTX_CUBEMAP_INCOMPLETE_ALL_BIT_SET, &[]);
        }
        if faces_present == 0 {
            self.error(&issue::KTX_CUBEMAP_INCOMPLETE_NO_BIT_SET, &[]);
        } else if self.layer_count % faces_present != 0 {
            let layer_count = self.layer_count;
            self.error(
                &issue::KTX_CUBEMAP_INCOMPLETE_INCOMPATIBLE_LAYER_COUNT,
                &[&layer_count, &faces_present],
            );
        }

        let header = self.header;
        if header.face_count != 1 {
            self.error(
                &issue::KTX_CUBEMAP_INCOMPLETE_WITH_FACE_COUNT_NOT_1,
                &[&header.face_count],
            );
        }
        if header.pixel_width != header.pixel_height {
            self.error(
                &issue::KTX_CUBEMAP_INCOMPLETE_WIDTH_HEIGHT_MISMATCH,
                &[&header.pixel_width, &header.pixel_height],
            );
        }
        if header.pixel_depth != 0 {
            self.error(
                &issue::KTX_CUBEMAP_INCOMPLETE_WITH_DEPTH,
                &[&header.pixel_depth],
            );
        }
    }

    fn validate_orientation(&mut self, value: &[u8]) {
        if value.len() < 2 || value.len() > 4 {
            let length = value.len();
            self.error(&issue::KTX_ORIENTATION_INVALID_SIZE, &[&length]);
            return;
        }

        let axes = match value.split_last() {
            Some((&0, axes)) => axes,
            _ => {
                self.error(&issue::KTX_ORIENTATION_MISSING_NULL, &[]);
                value
            }
        };

        // A 3D array texture still orients at most three axes.
        let dimension_count = self.dimension_count.min(3) as usize;
        if axes.len() != dimension_count {
            let specified = axes.len();
            self.error(
                &issue::KTX_ORIENTATION_INCORRECT_DIMENSION,
                &[&specified, &dimension_count],
            );
        }

        for (dimension, &byte) in axes.iter().enumerate().take(dimension_count) {
            let (positive, negative) = match dimension {
                0 => ('r', 'l'),
                1 => ('d', 'u'),
                _ => ('o', 'i'),
            };
            if byte != positive as u8 && byte != negative as u8 {
                let shown = byte as char;
                self.error(
                    &issue::KTX_ORIENTATION_INVALID_VALUE,
                    &[&dimension, &shown, &positive, &negative],
                );
            }
        }
    }

    fn validate_gl_format(&mut self, value: &[u8]) {
        if value.len() != 12 {
            let length = value.len();
            self.error(&issue::KTX_GL_FORMAT_INVALID_SIZE, &[&length]);
            return;
        }

        let vk_format = self.header.vk_format;
        if vk_format != VkFormat::UNDEFINED {
            self.error(&issue::KTX_GL_FORMAT_WITH_VK_FORMAT, &[&vk_format]);
        }

        // Value is glInternalformat, glFormat, glType. For compressed
        // formats the latter two are both zero; one zero without the other
        // is inconsistent.
        let gl_format = u32::from_le_bytes([value[4], value[5], value[6], value[7]]);
        let gl_type = u32::from_le_bytes([value[8], value[9], value[10], value[11]]);
        if (gl_format == 0) != (gl_type == 0) {
            self.error(
                &issue::KTX_GL_FORMAT_INVALID_VALUE_FOR_COMPRESSED,
                &[&gl_format, &gl_type],
            );
        }
    }

    fn validate_dxgi_format(&mut self, value: &[u8]) {
        if value.len() != 4 {
            let length = value.len();
            self.error(&issue::KTX_DXGI_FORMAT_INVALID_SIZE, &[&length]);
            return;
        }
        let vk_format = self.header.vk_format;
        if vk_format != VkFormat::UNDEFINED {
            self.error(&issue::KTX_DXGI_FORMAT_WITH_VK_FORMAT, &[&vk_format]);
        }
    }

    fn validate_metal_pixel_format(&mut self, value: &[u8]) {
        if value.len() != 4 {
            let length = value.len();
            self.error(&issue::KTX_METAL_PIXEL_FORMAT_INVALID_SIZE, &[&length]);
            return;
        }
        let vk_format = self.header.vk_format;
        if vk_format != VkFormat::UNDEFINED {
            self.error(&issue::KTX_METAL_PIXEL_FORMAT_WITH_VK_FORMAT, &[&vk_format]);
        }
    }

    fn validate_swizzle(&mut self, value: &[u8]) {
        if value.len() != 5 {
            let length = value.len();
            self.error(&issue::KTX_SWIZZLE_INVALID_SIZE, &[&length]);
            return;
        }
        if value[4] != 0 {
            self.error(&issue::KTX_SWIZZLE_MISSING_NULL, &[]);
        }
        for (position, &byte) in value[..4].iter().enumerate() {
            if !matches!(byte, b'r' | b'g' | b'b' | b'a' | b'0' | b'1') {
                let shown = byte as char;
                self.error(&issue::KTX_SWIZZLE_INVALID_VALUE, &[&position, &shown]);
            }
        }

        let vk_format = self.header.vk_format;
        if vk_format.is_depth() || vk_format.is_stencil() {
            self.warning(&issue::KTX_SWIZZLE_WITH_DEPTH_OR_STENCIL, &[&vk_format]);
        }
    }

    fn validate_writer(&mut self, value: &[u8]) {
        let text = match value.split_last() {
            Some((&0, text)) => text,
            _ => {
                self.error(&issue::KTX_WRITER_MISSING_NULL, &[]);
                value
            }
        };
        if let Err(e) = core::str::from_utf8(text) {
            let position = e.valid_up_to();
            self.warning(&issue::KTX_WRITER_INVALID_UTF8, &[&position]);
        }
    }

    fn validate_writer_sc_params(&mut self, value: &[u8]) {
        let text = match value.split_last() {
            Some((&0, text)) => text,
            _ => {
                self.error(&issue::KTX_WRITER_SC_PARAMS_MISSING_NULL, &[]);
                value
            }
        };
        if let Err(e) = core::str::from_utf8(text) {
            let position = e.valid_up_to();
            self.warning(&issue::KTX_WRITER_SC_PARAMS_INVALID_UTF8, &[&position]);
        }
    }

    fn validate_astc_decode_mode(&mut self, value: &[u8]) {
        let text = match value.split_last() {
            Some((&0, text)) => text,
            _ => value,
        };
        if text != b"rgb9e5" && text != b"unorm8" {
            let shown = String::from_utf8_lossy(text);
            self.error(&issue::KTX_ASTC_DECODE_MODE_INVALID_VALUE, &[&shown]);
        }
    }

    fn validate_anim_data(&mut self, value: &[u8], presence: &KeyPresence) {
        if presence.cubemap_incomplete {
            self.error(&issue::KTX_ANIM_DATA_WITH_CUBEMAP_INCOMPLETE, &[]);
        }
        if self.header.layer_count == 0 {
            self.error(&issue::KTX_ANIM_DATA_NOT_ARRAY, &[]);
        }
        if value.len() != 12 {
            let length = value.len();
            self.error(&issue::KTX_ANIM_DATA_INVALID_SIZE, &[&length]);
        }
    }
}
