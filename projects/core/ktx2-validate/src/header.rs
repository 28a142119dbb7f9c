//! The fixed KTX2 file header and its decoding.

use crate::format::{SupercompressionScheme, VkFormat};

/// The 12-byte KTX2 file identifier: `«KTX 20»\r\n\x1A\n`.
pub const KTX2_IDENTIFIER: [u8; 12] = [
    0xAB, 0x4B, 0x54, 0x58, 0x20, 0x32, 0x30, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
];

/// Size of the fixed header at the start of the file.
pub const KTX2_HEADER_SIZE: usize = 80;

/// Size of one level index entry following the header.
pub const LEVEL_INDEX_ENTRY_SIZE: u64 = 16;

/// A 32-bit `(byteOffset, byteLength)` index pair (DFD and KVD regions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexEntry32 {
    pub byte_offset: u32,
    pub byte_length: u32,
}

/// A 64-bit `(byteOffset, byteLength)` index pair (SGD region).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexEntry64 {
    pub byte_offset: u64,
    pub byte_length: u64,
}

/// The parsed 80-byte header. All multi-byte fields are little-endian in the
/// file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub identifier: [u8; 12],
    pub vk_format: VkFormat,
    pub type_size: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_depth: u32,
    pub layer_count: u32,
    pub face_count: u32,
    pub level_count: u32,
    pub supercompression_scheme: SupercompressionScheme,
    pub dfd: IndexEntry32,
    pub kvd: IndexEntry32,
    pub sgd: IndexEntry64,
}

impl Default for Header {
    /// An all-zero header, the state before the header bytes are parsed.
    fn default() -> Self {
        Self::from_bytes(&[0u8; KTX2_HEADER_SIZE])
    }
}

fn u32_le(bytes: &[u8; KTX2_HEADER_SIZE], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn u64_le(bytes: &[u8; KTX2_HEADER_SIZE], offset: usize) -> u64 {
    let mut out = [0u8; 8];
    out.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(out)
}

impl Header {
    pub fn from_bytes(bytes: &[u8; KTX2_HEADER_SIZE]) -> Self {
        let mut identifier = [0u8; 12];
        identifier.copy_from_slice(&bytes[0..12]);

        Self {
            identifier,
            vk_format: VkFormat(u32_le(bytes, 12)),
            type_size: u32_le(bytes, 16),
            pixel_width: u32_le(bytes, 20),
            pixel_height: u32_le(bytes, 24),
            pixel_depth: u32_le(bytes, 28),
            layer_count: u32_le(bytes, 32),
            face_count: u32_le(bytes, 36),
            level_count: u32_le(bytes, 40),
            supercompression_scheme: SupercompressionScheme(u32_le(bytes, 44)),
            dfd: IndexEntry32 {
                byte_offset: u32_le(bytes, 48),
                byte_length: u32_le(bytes, 52),
            },
            kvd: IndexEntry32 {
                byte_offset: u32_le(bytes, 56),
                byte_length: u32_le(bytes, 60),
            },
            sgd: IndexEntry64 {
                byte_offset: u64_le(bytes, 64),
                byte_length: u64_le(bytes, 72),
            },
        }
    }

    pub fn has_ktx2_identifier(&self) -> bool {
        self.identifier == KTX2_IDENTIFIER
    }

    /// A raw `layerCount` of 0 denotes one layer.
    pub fn effective_layer_count(&self) -> u32 {
        self.layer_count.max(1)
    }

    /// A raw `levelCount` of 0 denotes one level.
    pub fn effective_level_count(&self) -> u32 {
        self.level_count.max(1)
    }

    /// The largest of width, height and depth. Works for arrays too because
    /// the unused dimensions are 0.
    pub fn max_dimension(&self) -> u32 {
        self.pixel_width
            .max(self.pixel_height)
            .max(self.pixel_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes() -> [u8; KTX2_HEADER_SIZE] {
        let mut bytes = [0u8; KTX2_HEADER_SIZE];
        bytes[0..12].copy_from_slice(&KTX2_IDENTIFIER);
        bytes[12..16].copy_from_slice(&37u32.to_le_bytes()); // vkFormat
        bytes[16..20].copy_from_slice(&1u32.to_le_bytes()); // typeSize
        bytes[20..24].copy_from_slice(&256u32.to_le_bytes()); // pixelWidth
        bytes[24..28].copy_from_slice(&128u32.to_le_bytes()); // pixelHeight
        bytes[40..44].copy_from_slice(&9u32.to_le_bytes()); // levelCount
        bytes[44..48].copy_from_slice(&2u32.to_le_bytes()); // supercompressionScheme
        bytes[48..52].copy_from_slice(&96u32.to_le_bytes()); // dfdByteOffset
        bytes[52..56].copy_from_slice(&44u32.to_le_bytes()); // dfdByteLength
        bytes[64..72].copy_from_slice(&144u64.to_le_bytes()); // sgdByteOffset
        bytes[72..80].copy_from_slice(&64u64.to_le_bytes()); // sgdByteLength
        bytes
    }

    #[test]
    fn fields_decode_little_endian_at_their_offsets() {
        let header = Header::from_bytes(&header_bytes());

        assert!(header.has_ktx2_identifier());
        assert_eq!(header.vk_format, VkFormat::R8G8B8A8_UNORM);
        assert_eq!(header.type_size, 1);
        assert_eq!(header.pixel_width, 256);
        assert_eq!(header.pixel_height, 128);
        assert_eq!(header.pixel_depth, 0);
        assert_eq!(header.layer_count, 0);
        assert_eq!(header.face_count, 0);
        assert_eq!(header.level_count, 9);
        assert_eq!(
            header.supercompression_scheme,
            SupercompressionScheme::ZSTD
        );
        assert_eq!(header.dfd.byte_offset, 96);
        assert_eq!(header.dfd.byte_length, 44);
        assert_eq!(header.kvd, IndexEntry32::default());
        assert_eq!(header.sgd.byte_offset, 144);
        assert_eq!(header.sgd.byte_length, 64);
    }

    #[test]
    fn zero_counts_are_clamped_to_one() {
        let header = Header::from_bytes(&header_bytes());
        assert_eq!(header.effective_layer_count(), 1);
        assert_eq!(header.effective_level_count(), 9);
        assert_eq!(header.max_dimension(), 256);
    }

    #[test]
    fn altered_identifier_is_rejected() {
        let mut bytes = header_bytes();
        bytes[0] = b'K';
        assert!(!Header::from_bytes(&bytes).has_ktx2_identifier());
    }
}
