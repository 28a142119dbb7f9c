//! The KTX2 supercompression scheme enumeration and its predicates.

use core::fmt;

/// A `supercompressionScheme` value as stored in the KTX2 header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupercompressionScheme(pub u32);

impl SupercompressionScheme {
    pub const NONE: Self = Self(0);
    pub const BASIS_LZ: Self = Self(1);
    pub const ZSTD: Self = Self(2);
    pub const ZLIB: Self = Self(3);

    /// Inclusive bounds of the reserved vendor range.
    pub const BEGIN_VENDOR_RANGE: u32 = 0x10000;
    pub const END_VENDOR_RANGE: u32 = 0x1FFFF;

    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::NONE => Some("KTX_SS_NONE"),
            Self::BASIS_LZ => Some("KTX_SS_BASIS_LZ"),
            Self::ZSTD => Some("KTX_SS_ZSTD"),
            Self::ZLIB => Some("KTX_SS_ZLIB"),
            _ => None,
        }
    }

    /// Whether the value is one of the defined schemes.
    pub fn is_valid(self) -> bool {
        self.name().is_some()
    }

    pub fn is_vendor(self) -> bool {
        (Self::BEGIN_VENDOR_RANGE..=Self::END_VENDOR_RANGE).contains(&self.0)
    }

    /// Schemes that require a Supercompression Global Data region.
    pub fn has_global_data(self) -> bool {
        self == Self::BASIS_LZ
    }

    /// Schemes whose payload is inherently block-compressed (the texture
    /// keeps block semantics even with `vkFormat` UNDEFINED).
    pub fn is_block_compressed(self) -> bool {
        self == Self::BASIS_LZ
    }
}

impl fmt::Display for SupercompressionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None if self.is_vendor() => write!(f, "Vendor (0x{:X})", self.0),
            None => write!(f, "(0x{:X})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SupercompressionScheme::NONE, "KTX_SS_NONE")]
    #[case(SupercompressionScheme::BASIS_LZ, "KTX_SS_BASIS_LZ")]
    #[case(SupercompressionScheme::ZSTD, "KTX_SS_ZSTD")]
    #[case(SupercompressionScheme::ZLIB, "KTX_SS_ZLIB")]
    fn defined_schemes_render_their_name(
        #[case] scheme: SupercompressionScheme,
        #[case] expected: &str,
    ) {
        assert!(scheme.is_valid());
        assert_eq!(scheme.to_string(), expected);
    }

    #[test]
    fn vendor_schemes_render_with_vendor_prefix() {
        let scheme = SupercompressionScheme(0x10001);
        assert!(scheme.is_vendor());
        assert!(!scheme.is_valid());
        assert_eq!(scheme.to_string(), "Vendor (0x10001)");
    }

    #[test]
    fn out_of_range_schemes_render_as_hex() {
        let scheme = SupercompressionScheme(0x20000);
        assert!(!scheme.is_vendor());
        assert!(!scheme.is_valid());
        assert_eq!(scheme.to_string(), "(0x20000)");
    }

    #[test]
    fn only_basis_lz_has_global_data() {
        assert!(SupercompressionScheme::BASIS_LZ.has_global_data());
        assert!(SupercompressionScheme::BASIS_LZ.is_block_compressed());
        for scheme in [
            SupercompressionScheme::NONE,
            SupercompressionScheme::ZSTD,
            SupercompressionScheme::ZLIB,
            SupercompressionScheme(0x10000),
        ] {
            assert!(!scheme.has_global_data());
            assert!(!scheme.is_block_compressed());
        }
    }
}
