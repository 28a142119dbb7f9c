//! The `VkFormat` enumeration and the KTX2 classification tables over it.

use core::fmt;

/// A `VkFormat` value as stored in the KTX2 header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VkFormat(pub u32);

/// Defines the named format constants together with the name lookup, so the
/// two cannot drift apart.
macro_rules! vk_formats {
    ($($name:ident = $value:literal,)+) => {
        impl VkFormat {
            $(pub const $name: VkFormat = VkFormat($value);)+

            /// The `VK_FORMAT_*` name of a known format value.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some(concat!("VK_FORMAT_", stringify!($name))),)+
                    _ => None,
                }
            }
        }
    };
}

vk_formats! {
    UNDEFINED = 0,
    R4G4_UNORM_PACK8 = 1,
    R4G4B4A4_UNORM_PACK16 = 2,
    B4G4R4A4_UNORM_PACK16 = 3,
    R5G6B5_UNORM_PACK16 = 4,
    B5G6R5_UNORM_PACK16 = 5,
    R5G5B5A1_UNORM_PACK16 = 6,
    B5G5R5A1_UNORM_PACK16 = 7,
    A1R5G5B5_UNORM_PACK16 = 8,
    R8_UNORM = 9,
    R8_SNORM = 10,
    R8_USCALED = 11,
    R8_SSCALED = 12,
    R8_UINT = 13,
    R8_SINT = 14,
    R8_SRGB = 15,
    R8G8_UNORM = 16,
    R8G8_SNORM = 17,
    R8G8_USCALED = 18,
    R8G8_SSCALED = 19,
    R8G8_UINT = 20,
    R8G8_SINT = 21,
    R8G8_SRGB = 22,
    R8G8B8_UNORM = 23,
    R8G8B8_SNORM = 24,
    R8G8B8_USCALED = 25,
    R8G8B8_SSCALED = 26,
    R8G8B8_UINT = 27,
    R8G8B8_SINT = 28,
    R8G8B8_SRGB = 29,
    B8G8R8_UNORM = 30,
    B8G8R8_SNORM = 31,
    B8G8R8_USCALED = 32,
    B8G8R8_SSCALED = 33,
    B8G8R8_UINT = 34,
    B8G8R8_SINT = 35,
    B8G8R8_SRGB = 36,
    R8G8B8A8_UNORM = 37,
    R8G8B8A8_SNORM = 38,
    R8G8B8A8_USCALED = 39,
    R8G8B8A8_SSCALED = 40,
    R8G8B8A8_UINT = 41,
    R8G8B8A8_SINT = 42,
    R8G8B8A8_SRGB = 43,
    B8G8R8A8_UNORM = 44,
    B8G8R8A8_SNORM = 45,
    B8G8R8A8_USCALED = 46,
    B8G8R8A8_SSCALED = 47,
    B8G8R8A8_UINT = 48,
    B8G8R8A8_SINT = 49,
    B8G8R8A8_SRGB = 50,
    A8B8G8R8_UNORM_PACK32 = 51,
    A8B8G8R8_SNORM_PACK32 = 52,
    A8B8G8R8_USCALED_PACK32 = 53,
    A8B8G8R8_SSCALED_PACK32 = 54,
    A8B8G8R8_UINT_PACK32 = 55,
    A8B8G8R8_SINT_PACK32 = 56,
    A8B8G8R8_SRGB_PACK32 = 57,
    A2R10G10B10_UNORM_PACK32 = 58,
    A2R10G10B10_SNORM_PACK32 = 59,
    A2R10G10B10_USCALED_PACK32 = 60,
    A2R10G10B10_SSCALED_PACK32 = 61,
    A2R10G10B10_UINT_PACK32 = 62,
    A2R10G10B10_SINT_PACK32 = 63,
    A2B10G10R10_UNORM_PACK32 = 64,
    A2B10G10R10_SNORM_PACK32 = 65,
    A2B10G10R10_USCALED_PACK32 = 66,
    A2B10G10R10_SSCALED_PACK32 = 67,
    A2B10G10R10_UINT_PACK32 = 68,
    A2B10G10R10_SINT_PACK32 = 69,
    R16_UNORM = 70,
    R16_SNORM = 71,
    R16_USCALED = 72,
    R16_SSCALED = 73,
    R16_UINT = 74,
    R16_SINT = 75,
    R16_SFLOAT = 76,
    R16G16_UNORM = 77,
    R16G16_SNORM = 78,
    R16G16_USCALED = 79,
    R16G16_SSCALED = 80,
    R16G16_UINT = 81,
    R16G16_SINT = 82,
    R16G16_SFLOAT = 83,
    R16G16B16_UNORM = 84,
    R16G16B16_SNORM = 85,
    R16G16B16_USCALED = 86,
    R16G16B16_SSCALED = 87,
    R16G16B16_UINT = 88,
    R16G16B16_SINT = 89,
    R16G16B16_SFLOAT = 90,
    R16G16B16A16_UNORM = 91,
    R16G16B16A16_SNORM = 92,
    R16G16B16A16_USCALED = 93,
    R16G16B16A16_SSCALED = 94,
    R16G16B16A16_UINT = 95,
    R16G16B16A16_SINT = 96,
    R16G16B16A16_SFLOAT = 97,
    R32_UINT = 98,
    R32_SINT = 99,
    R32_SFLOAT = 100,
    R32G32_UINT = 101,
    R32G32_SINT = 102,
    R32G32_SFLOAT = 103,
    R32G32B32_UINT = 104,
    R32G32B32_SINT = 105,
    R32G32B32_SFLOAT = 106,
    R32G32B32A32_UINT = 107,
    R32G32B32A32_SINT = 108,
    R32G32B32A32_SFLOAT = 109,
    R64_UINT = 110,
    R64_SINT = 111,
    R64_SFLOAT = 112,
    R64G64_UINT = 113,
    R64G64_SINT = 114,
    R64G64_SFLOAT = 115,
    R64G64B64_UINT = 116,
    R64G64B64_SINT = 117,
    R64G64B64_SFLOAT = 118,
    R64G64B64A64_UINT = 119,
    R64G64B64A64_SINT = 120,
    R64G64B64A64_SFLOAT = 121,
    B10G11R11_UFLOAT_PACK32 = 122,
    E5B9G9R9_UFLOAT_PACK32 = 123,
    D16_UNORM = 124,
    X8_D24_UNORM_PACK32 = 125,
    D32_SFLOAT = 126,
    S8_UINT = 127,
    D16_UNORM_S8_UINT = 128,
    D24_UNORM_S8_UINT = 129,
    D32_SFLOAT_S8_UINT = 130,
    BC1_RGB_UNORM_BLOCK = 131,
    BC1_RGB_SRGB_BLOCK = 132,
    BC1_RGBA_UNORM_BLOCK = 133,
    BC1_RGBA_SRGB_BLOCK = 134,
    BC2_UNORM_BLOCK = 135,
    BC2_SRGB_BLOCK = 136,
    BC3_UNORM_BLOCK = 137,
    BC3_SRGB_BLOCK = 138,
    BC4_UNORM_BLOCK = 139,
    BC4_SNORM_BLOCK = 140,
    BC5_UNORM_BLOCK = 141,
    BC5_SNORM_BLOCK = 142,
    BC6H_UFLOAT_BLOCK = 143,
    BC6H_SFLOAT_BLOCK = 144,
    BC7_UNORM_BLOCK = 145,
    BC7_SRGB_BLOCK = 146,
    ETC2_R8G8B8_UNORM_BLOCK = 147,
    ETC2_R8G8B8_SRGB_BLOCK = 148,
    ETC2_R8G8B8A1_UNORM_BLOCK = 149,
    ETC2_R8G8B8A1_SRGB_BLOCK = 150,
    ETC2_R8G8B8A8_UNORM_BLOCK = 151,
    ETC2_R8G8B8A8_SRGB_BLOCK = 152,
    EAC_R11_UNORM_BLOCK = 153,
    EAC_R11_SNORM_BLOCK = 154,
    EAC_R11G11_UNORM_BLOCK = 155,
    EAC_R11G11_SNORM_BLOCK = 156,
    ASTC_4x4_UNORM_BLOCK = 157,
    ASTC_4x4_SRGB_BLOCK = 158,
    ASTC_5x4_UNORM_BLOCK = 159,
    ASTC_5x4_SRGB_BLOCK = 160,
    ASTC_5x5_UNORM_BLOCK = 161,
    ASTC_5x5_SRGB_BLOCK = 162,
    ASTC_6x5_UNORM_BLOCK = 163,
    ASTC_6x5_SRGB_BLOCK = 164,
    ASTC_6x6_UNORM_BLOCK = 165,
    ASTC_6x6_SRGB_BLOCK = 166,
    ASTC_8x5_UNORM_BLOCK = 167,
    ASTC_8x5_SRGB_BLOCK = 168,
    ASTC_8x6_UNORM_BLOCK = 169,
    ASTC_8x6_SRGB_BLOCK = 170,
    ASTC_8x8_UNORM_BLOCK = 171,
    ASTC_8x8_SRGB_BLOCK = 172,
    ASTC_10x5_UNORM_BLOCK = 173,
    ASTC_10x5_SRGB_BLOCK = 174,
    ASTC_10x6_UNORM_BLOCK = 175,
    ASTC_10x6_SRGB_BLOCK = 176,
    ASTC_10x8_UNORM_BLOCK = 177,
    ASTC_10x8_SRGB_BLOCK = 178,
    ASTC_10x10_UNORM_BLOCK = 179,
    ASTC_10x10_SRGB_BLOCK = 180,
    ASTC_12x10_UNORM_BLOCK = 181,
    ASTC_12x10_SRGB_BLOCK = 182,
    ASTC_12x12_UNORM_BLOCK = 183,
    ASTC_12x12_SRGB_BLOCK = 184,
    PVRTC1_2BPP_UNORM_BLOCK_IMG = 1000054000,
    PVRTC1_4BPP_UNORM_BLOCK_IMG = 1000054001,
    PVRTC2_2BPP_UNORM_BLOCK_IMG = 1000054002,
    PVRTC2_4BPP_UNORM_BLOCK_IMG = 1000054003,
    PVRTC1_2BPP_SRGB_BLOCK_IMG = 1000054004,
    PVRTC1_4BPP_SRGB_BLOCK_IMG = 1000054005,
    PVRTC2_2BPP_SRGB_BLOCK_IMG = 1000054006,
    PVRTC2_4BPP_SRGB_BLOCK_IMG = 1000054007,
    ASTC_4x4_SFLOAT_BLOCK_EXT = 1000066000,
    ASTC_5x4_SFLOAT_BLOCK_EXT = 1000066001,
    ASTC_5x5_SFLOAT_BLOCK_EXT = 1000066002,
    ASTC_6x5_SFLOAT_BLOCK_EXT = 1000066003,
    ASTC_6x6_SFLOAT_BLOCK_EXT = 1000066004,
    ASTC_8x5_SFLOAT_BLOCK_EXT = 1000066005,
    ASTC_8x6_SFLOAT_BLOCK_EXT = 1000066006,
    ASTC_8x8_SFLOAT_BLOCK_EXT = 1000066007,
    ASTC_10x5_SFLOAT_BLOCK_EXT = 1000066008,
    ASTC_10x6_SFLOAT_BLOCK_EXT = 1000066009,
    ASTC_10x8_SFLOAT_BLOCK_EXT = 1000066010,
    ASTC_10x10_SFLOAT_BLOCK_EXT = 1000066011,
    ASTC_12x10_SFLOAT_BLOCK_EXT = 1000066012,
    ASTC_12x12_SFLOAT_BLOCK_EXT = 1000066013,
    G8B8G8R8_422_UNORM = 1000156000,
    B8G8R8G8_422_UNORM = 1000156001,
    G8_B8_R8_3PLANE_420_UNORM = 1000156002,
    G8_B8R8_2PLANE_420_UNORM = 1000156003,
    G8_B8_R8_3PLANE_422_UNORM = 1000156004,
    G8_B8R8_2PLANE_422_UNORM = 1000156005,
    G8_B8_R8_3PLANE_444_UNORM = 1000156006,
    R10X6_UNORM_PACK16 = 1000156007,
    R10X6G10X6_UNORM_2PACK16 = 1000156008,
    R10X6G10X6B10X6A10X6_UNORM_4PACK16 = 1000156009,
    G10X6B10X6G10X6R10X6_422_UNORM_4PACK16 = 1000156010,
    B10X6G10X6R10X6G10X6_422_UNORM_4PACK16 = 1000156011,
    G10X6_B10X6_R10X6_3PLANE_420_UNORM_3PACK16 = 1000156012,
    G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16 = 1000156013,
    G10X6_B10X6_R10X6_3PLANE_422_UNORM_3PACK16 = 1000156014,
    G10X6_B10X6R10X6_2PLANE_422_UNORM_3PACK16 = 1000156015,
    G10X6_B10X6_R10X6_3PLANE_444_UNORM_3PACK16 = 1000156016,
    R12X4_UNORM_PACK16 = 1000156017,
    R12X4G12X4_UNORM_2PACK16 = 1000156018,
    R12X4G12X4B12X4A12X4_UNORM_4PACK16 = 1000156019,
    G12X4B12X4G12X4R12X4_422_UNORM_4PACK16 = 1000156020,
    B12X4G12X4R12X4G12X4_422_UNORM_4PACK16 = 1000156021,
    G12X4_B12X4_R12X4_3PLANE_420_UNORM_3PACK16 = 1000156022,
    G12X4_B12X4R12X4_2PLANE_420_UNORM_3PACK16 = 1000156023,
    G12X4_B12X4_R12X4_3PLANE_422_UNORM_3PACK16 = 1000156024,
    G12X4_B12X4R12X4_2PLANE_422_UNORM_3PACK16 = 1000156025,
    G12X4_B12X4_R12X4_3PLANE_444_UNORM_3PACK16 = 1000156026,
    G16B16G16R16_422_UNORM = 1000156027,
    B16G16R16G16_422_UNORM = 1000156028,
    G16_B16_R16_3PLANE_420_UNORM = 1000156029,
    G16_B16R16_2PLANE_420_UNORM = 1000156030,
    G16_B16_R16_3PLANE_422_UNORM = 1000156031,
    G16_B16R16_2PLANE_422_UNORM = 1000156032,
    G16_B16_R16_3PLANE_444_UNORM = 1000156033,
    ASTC_3x3x3_UNORM_BLOCK_EXT = 1000288000,
    ASTC_3x3x3_SRGB_BLOCK_EXT = 1000288001,
    ASTC_3x3x3_SFLOAT_BLOCK_EXT = 1000288002,
    ASTC_4x3x3_UNORM_BLOCK_EXT = 1000288003,
    ASTC_4x3x3_SRGB_BLOCK_EXT = 1000288004,
    ASTC_4x3x3_SFLOAT_BLOCK_EXT = 1000288005,
    ASTC_4x4x3_UNORM_BLOCK_EXT = 1000288006,
    ASTC_4x4x3_SRGB_BLOCK_EXT = 1000288007,
    ASTC_4x4x3_SFLOAT_BLOCK_EXT = 1000288008,
    ASTC_4x4x4_UNORM_BLOCK_EXT = 1000288009,
    ASTC_4x4x4_SRGB_BLOCK_EXT = 1000288010,
    ASTC_4x4x4_SFLOAT_BLOCK_EXT = 1000288011,
    ASTC_5x4x4_UNORM_BLOCK_EXT = 1000288012,
    ASTC_5x4x4_SRGB_BLOCK_EXT = 1000288013,
    ASTC_5x4x4_SFLOAT_BLOCK_EXT = 1000288014,
    ASTC_5x5x4_UNORM_BLOCK_EXT = 1000288015,
    ASTC_5x5x4_SRGB_BLOCK_EXT = 1000288016,
    ASTC_5x5x4_SFLOAT_BLOCK_EXT = 1000288017,
    ASTC_5x5x5_UNORM_BLOCK_EXT = 1000288018,
    ASTC_5x5x5_SRGB_BLOCK_EXT = 1000288019,
    ASTC_5x5x5_SFLOAT_BLOCK_EXT = 1000288020,
    ASTC_6x5x5_UNORM_BLOCK_EXT = 1000288021,
    ASTC_6x5x5_SRGB_BLOCK_EXT = 1000288022,
    ASTC_6x5x5_SFLOAT_BLOCK_EXT = 1000288023,
    ASTC_6x6x5_UNORM_BLOCK_EXT = 1000288024,
    ASTC_6x6x5_SRGB_BLOCK_EXT = 1000288025,
    ASTC_6x6x5_SFLOAT_BLOCK_EXT = 1000288026,
    ASTC_6x6x6_UNORM_BLOCK_EXT = 1000288027,
    ASTC_6x6x6_SRGB_BLOCK_EXT = 1000288028,
    ASTC_6x6x6_SFLOAT_BLOCK_EXT = 1000288029,
    G8_B8R8_2PLANE_444_UNORM_EXT = 1000330000,
    G10X6_B10X6R10X6_2PLANE_444_UNORM_3PACK16_EXT = 1000330001,
    G12X4_B12X4R12X4_2PLANE_444_UNORM_3PACK16_EXT = 1000330002,
    G16_B16R16_2PLANE_444_UNORM_EXT = 1000330003,
    A4R4G4B4_UNORM_PACK16_EXT = 1000340000,
    A4B4G4R4_UNORM_PACK16_EXT = 1000340001,
}

impl VkFormat {
    /// Highest value of the non-extension Vulkan format range.
    pub const MAX_STANDARD_ENUM: u32 = 184;

    /// First value of the Vulkan extension format numbering space.
    pub const FIRST_EXTENSION_ENUM: u32 = 1_000_001_000;

    /// Whether this is a defined format value (prohibited formats included).
    pub fn is_valid(self) -> bool {
        self.name().is_some()
    }

    /// Whether the KTX2 specification explicitly disallows this format.
    ///
    /// Prohibited are every `USCALED`/`SSCALED` format, the
    /// `A8B8G8R8_*_PACK32` family and the formats requiring sampler Y′CbCr
    /// conversion.
    pub fn is_prohibited(self) -> bool {
        matches!(
            self,
            VkFormat::R8_USCALED
                | VkFormat::R8_SSCALED
                | VkFormat::R8G8_USCALED
                | VkFormat::R8G8_SSCALED
                | VkFormat::R8G8B8_USCALED
                | VkFormat::R8G8B8_SSCALED
                | VkFormat::B8G8R8_USCALED
                | VkFormat::B8G8R8_SSCALED
                | VkFormat::R8G8B8A8_USCALED
                | VkFormat::R8G8B8A8_SSCALED
                | VkFormat::B8G8R8A8_USCALED
                | VkFormat::B8G8R8A8_SSCALED
                | VkFormat::A8B8G8R8_UNORM_PACK32
                | VkFormat::A8B8G8R8_SNORM_PACK32
                | VkFormat::A8B8G8R8_USCALED_PACK32
                | VkFormat::A8B8G8R8_SSCALED_PACK32
                | VkFormat::A8B8G8R8_UINT_PACK32
                | VkFormat::A8B8G8R8_SINT_PACK32
                | VkFormat::A8B8G8R8_SRGB_PACK32
                | VkFormat::A2R10G10B10_USCALED_PACK32
                | VkFormat::A2R10G10B10_SSCALED_PACK32
                | VkFormat::A2B10G10R10_USCALED_PACK32
                | VkFormat::A2B10G10R10_SSCALED_PACK32
                | VkFormat::R16_USCALED
                | VkFormat::R16_SSCALED
                | VkFormat::R16G16_USCALED
                | VkFormat::R16G16_SSCALED
                | VkFormat::R16G16B16_USCALED
                | VkFormat::R16G16B16_SSCALED
                | VkFormat::R16G16B16A16_USCALED
                | VkFormat::R16G16B16A16_SSCALED
        ) || matches!(self.0, 1000156000..=1000156033 | 1000330000..=1000330003)
    }

    /// Any block-compressed format: BC, ETC2/EAC, ASTC (LDR, HDR and 3D)
    /// and PVRTC.
    pub fn is_block_compressed(self) -> bool {
        matches!(
            self.0,
            131..=184 // BC, ETC2, EAC and LDR ASTC
                | 1000054000..=1000054007 // PVRTC
                | 1000066000..=1000066013 // HDR ASTC
                | 1000288000..=1000288029 // 3D ASTC
        )
    }

    /// Block-compressed formats whose block extends in the Z dimension.
    pub fn is_3d_block_compressed(self) -> bool {
        matches!(self.0, 1000288000..=1000288029)
    }

    pub fn is_depth(self) -> bool {
        matches!(
            self,
            VkFormat::D16_UNORM
                | VkFormat::X8_D24_UNORM_PACK32
                | VkFormat::D32_SFLOAT
                | VkFormat::D16_UNORM_S8_UINT
                | VkFormat::D24_UNORM_S8_UINT
                | VkFormat::D32_SFLOAT_S8_UINT
        )
    }

    pub fn is_stencil(self) -> bool {
        matches!(
            self,
            VkFormat::S8_UINT
                | VkFormat::D16_UNORM_S8_UINT
                | VkFormat::D24_UNORM_S8_UINT
                | VkFormat::D32_SFLOAT_S8_UINT
        )
    }
}

impl fmt::Display for VkFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "(0x{:X})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(VkFormat::UNDEFINED, "VK_FORMAT_UNDEFINED")]
    #[case(VkFormat::R8G8B8A8_UNORM, "VK_FORMAT_R8G8B8A8_UNORM")]
    #[case(VkFormat::ASTC_12x12_SRGB_BLOCK, "VK_FORMAT_ASTC_12x12_SRGB_BLOCK")]
    #[case(VkFormat::G8B8G8R8_422_UNORM, "VK_FORMAT_G8B8G8R8_422_UNORM")]
    fn known_formats_render_their_name(#[case] format: VkFormat, #[case] expected: &str) {
        assert_eq!(format.to_string(), expected);
    }

    #[test]
    fn unknown_formats_render_as_hex() {
        assert_eq!(VkFormat(0xBAD).to_string(), "(0xBAD)");
        assert!(!VkFormat(0xBAD).is_valid());
    }

    #[test]
    fn standard_range_is_fully_defined() {
        for value in 0..=VkFormat::MAX_STANDARD_ENUM {
            assert!(VkFormat(value).is_valid(), "value {value} should be defined");
        }
        assert!(!VkFormat(VkFormat::MAX_STANDARD_ENUM + 1).is_valid());
    }

    #[rstest]
    #[case(VkFormat::R8_USCALED)]
    #[case(VkFormat::R16G16B16A16_SSCALED)]
    #[case(VkFormat::A8B8G8R8_SRGB_PACK32)]
    #[case(VkFormat::G8_B8R8_2PLANE_420_UNORM)]
    #[case(VkFormat::R10X6_UNORM_PACK16)]
    #[case(VkFormat::G16_B16_R16_3PLANE_444_UNORM)]
    #[case(VkFormat::G8_B8R8_2PLANE_444_UNORM_EXT)]
    fn prohibited_formats(#[case] format: VkFormat) {
        assert!(format.is_prohibited());
        // Prohibited formats are still defined values.
        assert!(format.is_valid());
    }

    #[rstest]
    #[case(VkFormat::UNDEFINED)]
    #[case(VkFormat::R8G8B8A8_UNORM)]
    #[case(VkFormat::BC7_SRGB_BLOCK)]
    #[case(VkFormat::E5B9G9R9_UFLOAT_PACK32)]
    #[case(VkFormat::A4R4G4B4_UNORM_PACK16_EXT)]
    fn allowed_formats(#[case] format: VkFormat) {
        assert!(!format.is_prohibited());
    }

    #[rstest]
    #[case(VkFormat::BC1_RGB_UNORM_BLOCK, true)]
    #[case(VkFormat::BC7_SRGB_BLOCK, true)]
    #[case(VkFormat::ETC2_R8G8B8_UNORM_BLOCK, true)]
    #[case(VkFormat::EAC_R11G11_SNORM_BLOCK, true)]
    #[case(VkFormat::ASTC_4x4_UNORM_BLOCK, true)]
    #[case(VkFormat::PVRTC1_2BPP_UNORM_BLOCK_IMG, true)]
    #[case(VkFormat::ASTC_4x4_SFLOAT_BLOCK_EXT, true)]
    #[case(VkFormat::ASTC_3x3x3_UNORM_BLOCK_EXT, true)]
    #[case(VkFormat::R8G8B8A8_UNORM, false)]
    #[case(VkFormat::UNDEFINED, false)]
    #[case(VkFormat::D32_SFLOAT, false)]
    fn block_compressed_formats(#[case] format: VkFormat, #[case] expected: bool) {
        assert_eq!(format.is_block_compressed(), expected);
    }

    #[test]
    fn only_3d_astc_is_3d_block_compressed() {
        assert!(VkFormat::ASTC_3x3x3_UNORM_BLOCK_EXT.is_3d_block_compressed());
        assert!(VkFormat::ASTC_6x6x6_SFLOAT_BLOCK_EXT.is_3d_block_compressed());
        assert!(!VkFormat::ASTC_4x4_UNORM_BLOCK.is_3d_block_compressed());
        assert!(!VkFormat::BC1_RGB_UNORM_BLOCK.is_3d_block_compressed());
    }

    #[rstest]
    #[case(VkFormat::D16_UNORM, true, false)]
    #[case(VkFormat::X8_D24_UNORM_PACK32, true, false)]
    #[case(VkFormat::D32_SFLOAT, true, false)]
    #[case(VkFormat::S8_UINT, false, true)]
    #[case(VkFormat::D16_UNORM_S8_UINT, true, true)]
    #[case(VkFormat::D24_UNORM_S8_UINT, true, true)]
    #[case(VkFormat::D32_SFLOAT_S8_UINT, true, true)]
    #[case(VkFormat::R8G8B8A8_UNORM, false, false)]
    fn depth_and_stencil_formats(
        #[case] format: VkFormat,
        #[case] depth: bool,
        #[case] stencil: bool,
    ) {
        assert_eq!(format.is_depth(), depth);
        assert_eq!(format.is_stencil(), stencil);
    }
}
