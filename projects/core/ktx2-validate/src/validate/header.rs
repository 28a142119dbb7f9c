//! Header validation: identifier, format and scheme compatibility,
//! dimensions, face/level counts, and the derived counts later passes read.

use super::ValidationContext;
use crate::format::{SupercompressionScheme, VkFormat};
use crate::header::{Header, KTX2_HEADER_SIZE};
use crate::issues::header as issue;
use crate::sink::{FatalIssue, ValidationReport};

impl<F: FnMut(&ValidationReport)> ValidationContext<'_, F> {
    pub(crate) fn validate_header(&mut self) -> Result<(), FatalIssue> {
        let bytes: [u8; KTX2_HEADER_SIZE] = match self.reader.read("the header") {
            Ok(bytes) => bytes,
            Err(e) => return Err(self.unexpected_eof(e)),
        };
        self.header = Header::from_bytes(&bytes);
        let header = self.header;
        let format = header.vk_format;
        let scheme = header.supercompression_scheme;

        if !header.has_ktx2_identifier() {
            return Err(self.sink.fatal(&crate::issues::file::NOT_KTX2, &[]));
        }

        // vkFormat
        if format.is_prohibited() {
            self.error(&issue::PROHIBITED_FORMAT, &[&format]);
        }
        if !format.is_valid() {
            if format.0 >= 0x8000_0000 {
                // Negative when read as the signed C enum.
                self.error(&issue::INVALID_FORMAT, &[&format]);
            } else if format.0 >= VkFormat::FIRST_EXTENSION_ENUM {
                self.warning(&issue::UNKNOWN_FORMAT, &[&format]);
            } else {
                self.error(&issue::INVALID_FORMAT, &[&format]);
            }
        }

        if scheme == SupercompressionScheme::BASIS_LZ && format != VkFormat::UNDEFINED {
            self.error(&issue::VK_FORMAT_AND_BASIS, &[&format]);
        }

        // typeSize
        let block_compressed = format.is_block_compressed() || scheme.is_block_compressed();
        if (format == VkFormat::UNDEFINED || block_compressed) && header.type_size != 1 {
            self.error(&issue::TYPE_SIZE_NOT_ONE, &[&header.type_size, &format]);
        }

        // Image dimensions
        if header.pixel_width == 0 {
            self.error(&issue::WIDTH_ZERO, &[]);
        }

        if block_compressed && header.pixel_height == 0 {
            self.error(&issue::BLOCK_COMPRESSED_NO_HEIGHT, &[&format]);
        }

        if header.face_count == 6 && header.pixel_width != header.pixel_height {
            self.error(
                &issue::CUBE_HEIGHT_WIDTH_MISMATCH,
                &[&header.pixel_width, &header.pixel_height],
            );
        }

        if header.pixel_depth != 0 && header.pixel_height == 0 {
            self.error(&issue::DEPTH_NO_HEIGHT, &[&header.pixel_depth]);
        }

        if format.is_3d_block_compressed() && header.pixel_depth == 0 {
            self.error(&issue::DEPTH_BLOCK_COMPRESSED_NO_DEPTH, &[&format]);
        }

        if (format.is_depth() || format.is_stencil()) && header.pixel_depth != 0 {
            self.error(
                &issue::DEPTH_STENCIL_FORMAT_WITH_DEPTH,
                &[&header.pixel_depth, &format],
            );
        }

        if header.face_count == 6 && header.pixel_depth != 0 {
            self.error(&issue::CUBE_WITH_DEPTH, &[&header.pixel_depth]);
        }

        // Dimensionality
        self.dimension_count = if header.pixel_depth != 0 {
            if header.layer_count != 0 {
                self.warning(&issue::THREE_D_ARRAY, &[]);
                4
            } else {
                3
            }
        } else if header.pixel_height != 0 {
            2
        } else {
            1
        };

        self.layer_count = header.effective_layer_count();

        // faceCount; cube faces being 2D is covered by CubeHeightWidthMismatch
        // and CubeWithDepth above.
        if header.face_count != 6 && header.face_count != 1 {
            self.error(&issue::INVALID_FACE_COUNT, &[&header.face_count]);
        }

        // levelCount
        self.level_count = header.effective_level_count();

        let level_count = self.level_count;
        let max_dimension = header.max_dimension();
        let too_many_levels = match 1u64.checked_shl(level_count - 1) {
            Some(min_dim) => u64::from(max_dimension) < min_dim,
            None => true,
        };
        if too_many_levels {
            // Can't have more mip levels than 1 + log2(max(w, h, d)).
            self.error(&issue::TOO_MANY_MIP_LEVELS, &[&level_count, &max_dimension]);
        }

        if block_compressed && header.level_count == 0 {
            self.error(&issue::BLOCK_COMPRESSED_NO_LEVEL, &[&format]);
        }

        // supercompressionScheme
        if scheme.is_vendor() {
            let value = format!("0x{:X}", scheme.0);
            self.warning(&issue::VENDOR_SUPERCOMPRESSION, &[&value]);
        } else if !scheme.is_valid() {
            let value = format!("0x{:X}", scheme.0);
            self.error(&issue::INVALID_SUPERCOMPRESSION, &[&value]);
        }

        Ok(())
    }
}
