//! The diagnostic catalog.
//!
//! Every diagnostic the validator can emit is defined here as a `const`
//! [`Issue`] with a stable numeric ID. IDs are grouped by category (1000 I/O,
//! 2000 file, 3000 header and index, 7000 metadata) and are never reassigned
//! once published, so downstream tooling may match on them.

use core::fmt;

/// Stable catalog identifier of an [`Issue`].
pub type IssueId = u16;

/// Diagnostic severity. Ordered: `Warning < Error < Fatal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Legal under the KTX2 specification but likely unintended.
    Warning,
    /// A specification violation that does not prevent further validation.
    Error,
    /// A condition that prevents any further validation of the file.
    Fatal,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalogued diagnostic descriptor.
///
/// The `details` field is a template with positional `{}` placeholders;
/// [`Issue::render_details`] binds arguments to it when the diagnostic is
/// raised. Severity is part of the issue's identity and does not depend on
/// how the issue is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub id: IssueId,
    pub message: &'static str,
    pub details: &'static str,
}

impl Issue {
    const fn warning(id: IssueId, message: &'static str, details: &'static str) -> Self {
        Self {
            severity: Severity::Warning,
            id,
            message,
            details,
        }
    }

    const fn error(id: IssueId, message: &'static str, details: &'static str) -> Self {
        Self {
            severity: Severity::Error,
            id,
            message,
            details,
        }
    }

    const fn fatal(id: IssueId, message: &'static str, details: &'static str) -> Self {
        Self {
            severity: Severity::Fatal,
            id,
            message,
            details,
        }
    }

    /// Renders the details template, substituting each `{}` placeholder with
    /// the next argument in order.
    pub fn render_details(&self, args: &[&dyn fmt::Display]) -> String {
        use fmt::Write;

        let mut pieces = self.details.split("{}");
        let mut out = String::with_capacity(self.details.len());
        if let Some(first) = pieces.next() {
            out.push_str(first);
        }

        let mut args = args.iter();
        for piece in pieces {
            match args.next() {
                Some(arg) => {
                    let _ = write!(out, "{arg}");
                }
                // Unbound placeholders are left in place rather than panicking;
                // the catalog and the raise sites are kept in sync by tests.
                None => out.push_str("{}"),
            }
            out.push_str(piece);
        }
        out
    }
}

/// I/O failures on the input (1000 range).
pub mod io {
    use super::Issue;

    pub const FILE_OPEN: Issue = Issue::fatal(
        1001,
        "Failed to open file.",
        "Failed to open file {}: {}.",
    );
    pub const FILE_READ: Issue = Issue::fatal(
        1002,
        "Failed to read the file.",
        "File read failed: {}.",
    );
    pub const UNEXPECTED_EOF: Issue = Issue::fatal(
        1003,
        "Unexpected end of file.",
        "Unexpected end of file. Expected {} more byte for {} but only found {} byte.",
    );
    // 1004 and 1006 were seek failures on seekable handles; unused with
    // mapped or fully buffered input.
    pub const FILE_TELL_FAILURE: Issue = Issue::fatal(
        1005,
        "Failed to determine the size of the file.",
        "Failed to determine the size of the file: {}.",
    );
    pub const UNEXPECTED_EOF_SEEK: Issue = Issue::fatal(
        1007,
        "Unexpected end of file. Requested seek position is not in the file.",
        "Requested seek position is {} for accessing {}, but the file is only {} byte long.",
    );
}

/// File-level failures (2000 range).
pub mod file {
    use super::Issue;

    pub const NOT_KTX2: Issue = Issue::fatal(
        2001,
        "Not a KTX2 file.",
        "Not a KTX2 file. The beginning of the file does not match the expected file identifier \"«KTX 20»\\r\\n\\x1A\\n\".",
    );
}

/// Header and index violations (3000 range).
pub mod header {
    use super::Issue;

    pub const PROHIBITED_FORMAT: Issue = Issue::error(
        3001,
        "Prohibited VkFormat.",
        "Prohibited VkFormat {} cannot be used in a KTX2 file.",
    );
    pub const INVALID_FORMAT: Issue = Issue::error(
        3002,
        "Invalid VkFormat.",
        "Invalid VkFormat {}.",
    );
    pub const UNKNOWN_FORMAT: Issue = Issue::warning(
        3003,
        "Unknown VkFormat. Possibly an extension format.",
        "Unknown VkFormat {}, possibly an extension format.",
    );
    pub const VK_FORMAT_AND_BASIS: Issue = Issue::error(
        3004,
        "Invalid VkFormat. VkFormat must be VK_FORMAT_UNDEFINED for BASIS_LZ supercompression.",
        "VkFormat is {} but for supercompressionScheme BASIS_LZ it must be VK_FORMAT_UNDEFINED.",
    );
    pub const TYPE_SIZE_NOT_ONE: Issue = Issue::error(
        3005,
        "Invalid typeSize. typeSize must be 1 for block-compressed or supercompressed formats.",
        "typeSize is {} but for block-compressed or supercompressed format {} it must be 1.",
    );
    pub const WIDTH_ZERO: Issue = Issue::error(
        3006,
        "Invalid pixelWidth. pixelWidth cannot be 0.",
        "pixelWidth is 0, but textures must have width.",
    );
    pub const BLOCK_COMPRESSED_NO_HEIGHT: Issue = Issue::error(
        3007,
        "Invalid pixelHeight. pixelHeight cannot be 0 for a block compressed formats.",
        "pixelHeight is 0, but for block-compressed format {} it cannot be 0.",
    );
    pub const CUBE_HEIGHT_WIDTH_MISMATCH: Issue = Issue::error(
        3008,
        "Mismatching pixelWidth and pixelHeight for a cube map.",
        "pixelWidth is {} and pixelHeight is {}, but for a cube map they must be equal.",
    );
    pub const DEPTH_NO_HEIGHT: Issue = Issue::error(
        3009,
        "Invalid pixelHeight. pixelHeight cannot be 0 if pixelDepth is not also 0.",
        "pixelHeight is 0 and pixelDepth is {}, but pixelHeight cannot be 0 if pixelDepth is not 0 as well.",
    );
    pub const DEPTH_BLOCK_COMPRESSED_NO_DEPTH: Issue = Issue::error(
        3010,
        "Invalid pixelDepth. pixelDepth cannot be 0 for block-compressed formats with non-zero block depth.",
        "pixelDepth is 0, but for format {} (which is a block-compressed format with non-zero block depth) it cannot be 0.",
    );
    pub const DEPTH_STENCIL_FORMAT_WITH_DEPTH: Issue = Issue::error(
        3011,
        "Invalid pixelDepth. pixelDepth must be 0 for depth or stencil formats.",
        "pixelDepth is {} but for depth or stencil format {} it must be 0.",
    );
    // 3012 unused
    pub const CUBE_WITH_DEPTH: Issue = Issue::error(
        3013,
        "Invalid pixelDepth. pixelDepth must be 0 for cube maps.",
        "pixelDepth is {} but for cube maps it must be 0 (cube map faces must be 2D).",
    );
    pub const THREE_D_ARRAY: Issue = Issue::warning(
        3014,
        "File contains a 3D array texture.",
        "File contains a 3D array texture. No APIs support these.",
    );
    pub const INVALID_FACE_COUNT: Issue = Issue::error(
        3015,
        "Invalid faceCount. faceCount must be either 6 for Cubemaps and Cubemap Arrays or 1 otherwise.",
        "faceCount is {} but it must be either 6 for Cubemaps and Cubemap Arrays or 1 otherwise.",
    );
    pub const TOO_MANY_MIP_LEVELS: Issue = Issue::error(
        3016,
        "Too many mip levels",
        "levelCount is {} for the largest image dimension {} is too many levels.",
    );
    pub const BLOCK_COMPRESSED_NO_LEVEL: Issue = Issue::error(
        3017,
        "Invalid levelCount. levelCount cannot be 0 for block-compressed formats.",
        "levelCount is 0 but for block-compressed format {} it cannot be 0.",
    );
    pub const VENDOR_SUPERCOMPRESSION: Issue = Issue::warning(
        3018,
        "Using vendor supercompressionScheme. Cannot validate.",
        "supercompressionScheme is {} which falls into the reserved vendor range. Cannot validate.",
    );
    pub const INVALID_SUPERCOMPRESSION: Issue = Issue::error(
        3019,
        "Invalid supercompressionScheme.",
        "Invalid supercompressionScheme: {}.",
    );

    // Index related issues:

    pub const INDEX_DFD_ZERO_OFFSET: Issue = Issue::error(
        3020,
        "Invalid dataFormatDescriptor.byteOffset. byteOffset cannot be 0.",
        "dataFormatDescriptor.byteOffset is 0, but the file must have a dataFormatDescriptor.",
    );
    pub const INDEX_DFD_ALIGNMENT: Issue = Issue::error(
        3021,
        "Invalid dataFormatDescriptor.byteOffset. Defined region must be aligned to 4 byte.",
        "dataFormatDescriptor.byteOffset is {}, but the byteOffset must be aligned to 4 byte.",
    );
    pub const INDEX_DFD_ZERO_LENGTH: Issue = Issue::error(
        3022,
        "Invalid dataFormatDescriptor.byteLength. byteLength cannot be 0.",
        "dataFormatDescriptor.byteLength is 0, but the file must have a dataFormatDescriptor.",
    );
    pub const INDEX_DFD_INVALID: Issue = Issue::error(
        3023,
        "Invalid dataFormatDescriptor index. Defined region cannot exceed the size of the file.",
        "dataFormatDescriptor.byteOffset is {} and dataFormatDescriptor.byteLength is {}, but the file is only {} byte long.",
    );
    pub const INDEX_KVD_OFFSET_WITHOUT_LENGTH: Issue = Issue::error(
        3024,
        "Invalid keyValueData.byteOffset. byteOffset must be 0 if the byteLength is 0.",
        "keyValueData.byteOffset is {}, but if the byteLength is 0 it must also be 0.",
    );
    pub const INDEX_KVD_ALIGNMENT: Issue = Issue::error(
        3025,
        "Invalid keyValueData.byteOffset. Defined region must be aligned to 4 byte.",
        "keyValueData.byteOffset is {}, but the byteOffset must be aligned to 4 byte.",
    );
    pub const INDEX_KVD_INVALID: Issue = Issue::error(
        3026,
        "Invalid keyValueData index. Defined region cannot exceed the size of the file.",
        "keyValueData.byteOffset is {} and keyValueData.byteLength is {}, but the file is only {} byte long.",
    );
    pub const INDEX_SGD_OFFSET_WITHOUT_LENGTH: Issue = Issue::error(
        3027,
        "Invalid supercompressionGlobalData.byteOffset. byteOffset must be 0 if the byteLength is 0.",
        "supercompressionGlobalData.byteOffset is {}, but if the byteLength is 0 it must also be 0.",
    );
    pub const INDEX_SGD_ALIGNMENT: Issue = Issue::error(
        3028,
        "Invalid supercompressionGlobalData.byteOffset. Defined region must be aligned to 8 byte.",
        "supercompressionGlobalData.byteOffset is {}, but the byteOffset must be aligned to 8 byte.",
    );
    pub const INDEX_SGD_MISSING: Issue = Issue::error(
        3029,
        "Invalid supercompressionGlobalData.byteLength. byteLength cannot be 0 for supercompression schemes with global data.",
        "supercompressionGlobalData.byteLength is 0, but for supercompression scheme {} (which has global data) it cannot be 0.",
    );
    pub const INDEX_SGD_EXISTS: Issue = Issue::error(
        3030,
        "Invalid supercompressionGlobalData.byteLength. byteLength must be 0 for supercompression schemes without global data.",
        "supercompressionGlobalData.byteLength is {}, but for supercompression scheme {} (which has no global data) it must be 0.",
    );
    pub const INDEX_SGD_INVALID: Issue = Issue::error(
        3031,
        "Invalid supercompressionGlobalData index. Defined region cannot exceed the size of the file.",
        "supercompressionGlobalData.byteOffset is {} and supercompressionGlobalData.byteLength is {}, but the file is only {} byte long.",
    );
    pub const INDEX_DFD_CONTINUITY: Issue = Issue::error(
        3032,
        "Invalid dataFormatDescriptor.byteOffset. DFD region must immediately follow the level index.",
        "dataFormatDescriptor.byteOffset is {}, but DFD region must immediately follow (with 4 byte alignment) the level index so it must {}.",
    );
    pub const INDEX_KVD_CONTINUITY: Issue = Issue::error(
        3033,
        "Invalid keyValueData.byteOffset. KVD region must immediately follow the DFD region.",
        "keyValueData.byteOffset is {}, but KVD region must immediately follow (with 4 byte alignment) the DFD region so it must {}.",
    );
    pub const INDEX_SGD_CONTINUITY: Issue = Issue::error(
        3034,
        "Invalid supercompressionGlobalData.byteOffset. SGD region must immediately follow the KVD region.",
        "supercompressionGlobalData.byteOffset is {}, but SGD region must immediately follow (with 8 byte alignment) the KVD region so it must {}.",
    );
}

/// Key/value metadata violations (7000 range).
pub mod metadata {
    use super::Issue;

    pub const TOO_MANY_ENTRY: Issue = Issue::error(
        7001,
        "Invalid keyValueData. The number of key-value entries exceeds the maximum allowed.",
        "The number of key-value entries exceeds the maximum allowed {}.",
    );
    pub const NOT_ENOUGH_DATA_FOR_AN_ENTRY: Issue = Issue::error(
        7002,
        "Invalid keyValueData. Not enough data left in keyValueData to process another key-value entry",
        "KeyValueData has {} byte unprocessed, but for a key value entry at least 6 byte is required (4 byte size + 1 byte key + 1 byte \\0).",
    );
    pub const KEY_VALUE_PAIR_SIZE_TOO_BIG: Issue = Issue::error(
        7003,
        "Invalid keyAndValueByteLength. The value is bigger than the amount of bytes left in the keyValueData.",
        "keyAndValueByteLength is {}, but the keyValueData only has {} byte left for the key-value pair.",
    );
    pub const KEY_VALUE_PAIR_SIZE_TOO_SMALL: Issue = Issue::error(
        7004,
        "Invalid keyAndValueByteLength. keyAndValueByteLength must be at least 2.",
        "keyAndValueByteLength is {}, but it must be at least 2 (1 byte key + 1 byte \\0).",
    );
    pub const KEY_MISSING_NULL_TERMINATOR: Issue = Issue::error(
        7005,
        "Invalid keyValueData entry is missing the NULL terminator. Every key-value entry must have a NULL terminator separating the key from the value.",
        "The key-value entry \"{}\" is missing the NULL terminator, but every key-value entry must have a NULL terminator separating the key from the value.",
    );
    pub const KEY_FORBIDDEN_BOM: Issue = Issue::error(
        7006,
        "Invalid key in keyValueData. Key cannot contain BOM.",
        "The beginning of the key \"{}\" has forbidden BOM.",
    );
    pub const KEY_INVALID_UTF8: Issue = Issue::error(
        7007,
        "Invalid key in keyValueData. Key must be a valid UTF8 string.",
        "Key is \"{}\", which contains an invalid UTF8 character at position: {}.",
    );
    pub const SIZES_DONT_ADD_UP: Issue = Issue::error(
        7008,
        "Invalid keyValueData. keyValueData.byteLength must add up to sum of the key-value entries with paddings.",
        "The processed keyValueData length is {}, but keyValueData.byteLength is {}, but they must match.",
    );
    pub const UNKNOWN_RESERVED_KEY: Issue = Issue::error(
        7009,
        "Invalid key in keyValueData. Keys with \"KTX\" or \"ktx\" prefix are reserved.",
        "The key is \"{}\", but it is not recognized and every key with \"KTX\" or \"ktx\" prefix is reserved.",
    );
    pub const CUSTOM_METADATA: Issue = Issue::warning(
        7010,
        "Custom key in keyValueData.",
        "Custom key \"{}\" found in keyValueData.",
    );
    pub const PADDING_NOT_ZERO: Issue = Issue::error(
        7011,
        "Invalid padding byte value. Every padding byte's value must be 0.",
        "A padding byte value is {} {}, but it must be 0.",
    );
    pub const OUT_OF_ORDER: Issue = Issue::error(
        7012,
        "Invalid keyValueData. Key-value entries must be sorted by their key.",
        "Key-value entries are not sorted, but they must be sorted by their key.",
    );
    pub const DUPLICATE_KEY: Issue = Issue::error(
        7013,
        "Invalid keyValueData. Keys must be unique.",
        "There is a duplicate key, but the keys must be unique.",
    );

    pub const KTX_CUBEMAP_INCOMPLETE_INVALID_SIZE: Issue = Issue::error(
        7100,
        "Invalid KTXcubemapIncomplete metadata. The size of the value must be 1 byte.",
        "The size of the KTXcubemapIncomplete value is {}, but it must be 1 byte.",
    );
    pub const KTX_CUBEMAP_INCOMPLETE_INVALID_VALUE: Issue = Issue::error(
        7101,
        "Invalid KTXcubemapIncomplete value. The two MSB must be 0.",
        "The value is {} but the two MSB must be 0 (00XXXXXX).",
    );
    pub const KTX_CUBEMAP_INCOMPLETE_ALL_BIT_SET: Issue = Issue::warning(
        7102,
        "KTXcubemapIncomplete is not incomplete. All face is marked present.",
        "All face bit is set as present. Prefer using normal Cube maps instead.",
    );
    pub const KTX_CUBEMAP_INCOMPLETE_NO_BIT_SET: Issue = Issue::error(
        7103,
        "Invalid KTXcubemapIncomplete value. No face is marked present.",
        "No face bit is set as present, but at least 1 face must be present.",
    );
    pub const KTX_CUBEMAP_INCOMPLETE_INCOMPATIBLE_LAYER_COUNT: Issue = Issue::error(
        7104,
        "Incompatible KTXcubemapIncomplete and layerCount. layerCount must be the multiple of the number of faces present.",
        "layerCount is {} and KTXcubemapIncomplete indicates {} faces present, but layerCount must the multiple of the number of faces present.",
    );
    pub const KTX_CUBEMAP_INCOMPLETE_WITH_FACE_COUNT_NOT_1: Issue = Issue::error(
        7105,
        "Invalid faceCount. faceCount must be 1 if KTXcubemapIncomplete is present.",
        "faceCount is {}, but if KTXcubemapIncomplete is present it must be 1.",
    );

    pub const KTX_ORIENTATION_INVALID_SIZE: Issue = Issue::error(
        7106,
        "Invalid KTXorientation metadata. The size of the value must be 2 to 4 byte (including the NULL terminator).",
        "The size of the KTXorientation value is {}, but it must be 2 to 4 byte (including the NULL terminator).",
    );
    pub const KTX_ORIENTATION_MISSING_NULL: Issue = Issue::error(
        7107,
        "Invalid KTXorientation metadata. The value is missing the NULL terminator.",
        "The last byte of the value must be a NULL terminator.",
    );
    pub const KTX_ORIENTATION_INCORRECT_DIMENSION: Issue = Issue::error(
        7108,
        "Invalid KTXorientation value. The number of dimensions specified must match the number of dimension in the texture type.",
        "The value has {} dimension, but the dimension of the texture type has {} and they must match.",
    );
    pub const KTX_ORIENTATION_INVALID_VALUE: Issue = Issue::error(
        7109,
        "Invalid KTXorientation value. The value must match /^[rl]$/ for 1D, /^[rl][du]$/ for 2D and /^[rl][du][oi]$/ for 3D texture types.",
        "Dimension {} is \"{}\", but for it must be either \"{}\" or \"{}\".",
    );

    pub const KTX_GL_FORMAT_INVALID_SIZE: Issue = Issue::error(
        7110,
        "Invalid KTXglFormat metadata. The size of the value must be 12 byte.",
        "The size of KTXglFormat value is {}, but it must be 12 byte.",
    );
    pub const KTX_GL_FORMAT_WITH_VK_FORMAT: Issue = Issue::error(
        7111,
        "Incompatible KTXglFormat with vkFormat. vkFormat must be VK_FORMAT_UNDEFINED if KTXglFormat is present.",
        "vkFormat is {}, but if KTXglFormat is present it must be VK_FORMAT_UNDEFINED.",
    );
    pub const KTX_GL_FORMAT_INVALID_VALUE_FOR_COMPRESSED: Issue = Issue::error(
        7112,
        "Invalid KTXglFormat value. glFormat and glType must be zero for compressed formats.",
        "glFormat is {} and glType is {}, but for compressed formats both must be zero.",
    );

    pub const KTX_DXGI_FORMAT_INVALID_SIZE: Issue = Issue::error(
        7113,
        "Invalid KTXdxgiFormat__ metadata. The size of the value must be 4 byte.",
        "The size of KTXdxgiFormat__ value is {}, but it must be 4 byte.",
    );
    pub const KTX_DXGI_FORMAT_WITH_VK_FORMAT: Issue = Issue::error(
        7114,
        "Incompatible KTXdxgiFormat__ with vkFormat. vkFormat must be VK_FORMAT_UNDEFINED if KTXdxgiFormat__ is present.",
        "vkFormat is {}, but if KTXdxgiFormat__ is present it must be VK_FORMAT_UNDEFINED.",
    );

    pub const KTX_METAL_PIXEL_FORMAT_INVALID_SIZE: Issue = Issue::error(
        7115,
        "Invalid KTXmetalPixelFormat metadata. The size of the value must be 4 byte.",
        "The size of KTXmetalPixelFormat value is {}, but it must be 4 byte.",
    );
    pub const KTX_METAL_PIXEL_FORMAT_WITH_VK_FORMAT: Issue = Issue::error(
        7116,
        "Incompatible KTXmetalPixelFormat with vkFormat. vkFormat must be VK_FORMAT_UNDEFINED if KTXmetalPixelFormat is present.",
        "vkFormat is {}, but if KTXmetalPixelFormat is present it must be VK_FORMAT_UNDEFINED.",
    );

    pub const KTX_SWIZZLE_INVALID_SIZE: Issue = Issue::error(
        7117,
        "Invalid KTXswizzle metadata. The size of the value must be 5 byte (including the NULL terminator).",
        "The size of KTXswizzle value is {}, but it must be 5 byte (including the NULL terminator).",
    );
    pub const KTX_SWIZZLE_MISSING_NULL: Issue = Issue::error(
        7118,
        "Invalid KTXswizzle metadata. The value is missing the NULL terminator.",
        "The last byte of the value must be a NULL terminator.",
    );
    pub const KTX_SWIZZLE_INVALID_VALUE: Issue = Issue::error(
        7119,
        "Invalid KTXswizzle value. The value must match /^[rgba01]{4}$/.",
        "The character at position {} is \"{}\", but it must be one of \"rgba01\".",
    );
    // 7120 reserved: the missing-channel swizzle check needs DFD sample
    // information, which is outside the current validation scope.
    pub const KTX_SWIZZLE_WITH_DEPTH_OR_STENCIL: Issue = Issue::warning(
        7121,
        "KTXswizzle has no effect on depth or stencil texture formats.",
        "KTXswizzle is present but for vkFormat {} it has no effect.",
    );

    pub const KTX_WRITER_MISSING_NULL: Issue = Issue::error(
        7122,
        "Invalid KTXwriter metadata. The value is missing the NULL terminator.",
        "The last byte of the value must be a NULL terminator.",
    );
    pub const KTX_WRITER_INVALID_UTF8: Issue = Issue::warning(
        7123,
        "Invalid KTXwriter value. The value must be a valid UTF8 string.",
        "The value contains an invalid UTF8 character at position: {}.",
    );
    pub const KTX_WRITER_REQUIRED_BUT_MISSING: Issue = Issue::error(
        7124,
        "Missing KTXwriter metadata. When KTXwriterScParams is present KTXwriter must also be present",
        "KTXwriter metadata is missing. When KTXwriterScParams is present KTXwriter must also be present",
    );
    pub const KTX_WRITER_MISSING: Issue = Issue::warning(
        7125,
        "Missing KTXwriter metadata. Writers are strongly urged to identify themselves via this.",
        "KTXwriter metadata is missing. Writers are strongly urged to identify themselves via this.",
    );

    pub const KTX_WRITER_SC_PARAMS_MISSING_NULL: Issue = Issue::error(
        7126,
        "Invalid KTXwriterScParams metadata. The value is missing the NULL terminator.",
        "The last byte of the value must be a NULL terminator.",
    );
    pub const KTX_WRITER_SC_PARAMS_INVALID_UTF8: Issue = Issue::warning(
        7127,
        "Invalid KTXwriterScParams value. The value must be a valid UTF8 string.",
        "The value contains an invalid UTF8 character at position: {}.",
    );

    pub const KTX_CUBEMAP_INCOMPLETE_WIDTH_HEIGHT_MISMATCH: Issue = Issue::error(
        7128,
        "Mismatching pixelWidth and pixelHeight with KTXcubemapIncomplete.",
        "pixelWidth is {} and pixelHeight is {}, but if KTXcubemapIncomplete is present they must be equal.",
    );
    pub const KTX_CUBEMAP_INCOMPLETE_WITH_DEPTH: Issue = Issue::error(
        7129,
        "Invalid pixelDepth. pixelDepth must be 0 if KTXcubemapIncomplete is present.",
        "pixelDepth is {}, but if KTXcubemapIncomplete is present it must be 0 (cube map faces must be 2D).",
    );
    pub const KTX_ASTC_DECODE_MODE_INVALID_VALUE: Issue = Issue::error(
        7130,
        "Invalid KTXastcDecodeMode value. The value must be either \"rgb9e5\" or \"unorm8\".",
        "The value is \"{}\", but it must be either \"rgb9e5\" or \"unorm8\".",
    );
    pub const KTX_ANIM_DATA_INVALID_SIZE: Issue = Issue::error(
        7131,
        "Invalid KTXanimData metadata. The size of the value must be 12 byte.",
        "The size of KTXanimData value is {}, but it must be 12 byte.",
    );
    pub const KTX_ANIM_DATA_WITH_CUBEMAP_INCOMPLETE: Issue = Issue::error(
        7132,
        "Incompatible KTXanimData and KTXcubemapIncomplete. They cannot be present together.",
        "KTXanimData is present together with KTXcubemapIncomplete, but they are mutually exclusive.",
    );
    pub const KTX_ANIM_DATA_NOT_ARRAY: Issue = Issue::error(
        7133,
        "Invalid KTXanimData metadata. KTXanimData is only allowed for array textures.",
        "layerCount is 0, but KTXanimData is only allowed for array textures (layerCount must not be 0).",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every catalogued issue, used to check catalog-wide invariants.
    fn all_issues() -> Vec<Issue> {
        vec![
            io::FILE_OPEN,
            io::FILE_READ,
            io::UNEXPECTED_EOF,
            io::FILE_TELL_FAILURE,
            io::UNEXPECTED_EOF_SEEK,
            file::NOT_KTX2,
            header::PROHIBITED_FORMAT,
            header::INVALID_FORMAT,
            header::UNKNOWN_FORMAT,
            header::VK_FORMAT_AND_BASIS,
            header::TYPE_SIZE_NOT_ONE,
            header::WIDTH_ZERO,
            header::BLOCK_COMPRESSED_NO_HEIGHT,
            header::CUBE_HEIGHT_WIDTH_MISMATCH,
            header::DEPTH_NO_HEIGHT,
            header::DEPTH_BLOCK_COMPRESSED_NO_DEPTH,
            header::DEPTH_STENCIL_FORMAT_WITH_DEPTH,
            header::CUBE_WITH_DEPTH,
            header::THREE_D_ARRAY,
            header::INVALID_FACE_COUNT,
            header::TOO_MANY_MIP_LEVELS,
            header::BLOCK_COMPRESSED_NO_LEVEL,
            header::VENDOR_SUPERCOMPRESSION,
            header::INVALID_SUPERCOMPRESSION,
            header::INDEX_DFD_ZERO_OFFSET,
            header::INDEX_DFD_ALIGNMENT,
            header::INDEX_DFD_ZERO_LENGTH,
            header::INDEX_DFD_INVALID,
            header::INDEX_KVD_OFFSET_WITHOUT_LENGTH,
            header::INDEX_KVD_ALIGNMENT,
            header::INDEX_KVD_INVALID,
            header::INDEX_SGD_OFFSET_WITHOUT_LENGTH,
            header::INDEX_SGD_ALIGNMENT,
            header::INDEX_SGD_MISSING,
            header::INDEX_SGD_EXISTS,
            header::INDEX_SGD_INVALID,
            header::INDEX_DFD_CONTINUITY,
            header::INDEX_KVD_CONTINUITY,
            header::INDEX_SGD_CONTINUITY,
            metadata::TOO_MANY_ENTRY,
            metadata::NOT_ENOUGH_DATA_FOR_AN_ENTRY,
            metadata::KEY_VALUE_PAIR_SIZE_TOO_BIG,
            metadata::KEY_VALUE_PAIR_SIZE_TOO_SMALL,
            metadata::KEY_MISSING_NULL_TERMINATOR,
            metadata::KEY_FORBIDDEN_BOM,
            metadata::KEY_INVALID_UTF8,
            metadata::SIZES_DONT_ADD_UP,
            metadata::UNKNOWN_RESERVED_KEY,
            metadata::CUSTOM_METADATA,
            metadata::PADDING_NOT_ZERO,
            metadata::OUT_OF_ORDER,
            metadata::DUPLICATE_KEY,
            metadata::KTX_CUBEMAP_INCOMPLETE_INVALID_SIZE,
            metadata::KTX_CUBEMAP_INCOMPLETE_INVALID_VALUE,
            metadata::KTX_CUBEMAP_INCOMPLETE_ALL_BIT_SET,
            metadata::KTX_CUBEMAP_INCOMPLETE_NO_BIT_SET,
            metadata::KTX_CUBEMAP_INCOMPLETE_INCOMPATIBLE_LAYER_COUNT,
            metadata::KTX_CUBEMAP_INCOMPLETE_WITH_FACE_COUNT_NOT_1,
            metadata::KTX_ORIENTATION_INVALID_SIZE,
            metadata::KTX_ORIENTATION_MISSING_NULL,
            metadata::KTX_ORIENTATION_INCORRECT_DIMENSION,
            metadata::KTX_ORIENTATION_INVALID_VALUE,
            metadata::KTX_GL_FORMAT_INVALID_SIZE,
            metadata::KTX_GL_FORMAT_WITH_VK_FORMAT,
            metadata::KTX_GL_FORMAT_INVALID_VALUE_FOR_COMPRESSED,
            metadata::KTX_DXGI_FORMAT_INVALID_SIZE,
            metadata::KTX_DXGI_FORMAT_WITH_VK_FORMAT,
            metadata::KTX_METAL_PIXEL_FORMAT_INVALID_SIZE,
            metadata::KTX_METAL_PIXEL_FORMAT_WITH_VK_FORMAT,
            metadata::KTX_SWIZZLE_INVALID_SIZE,
            metadata::KTX_SWIZZLE_MISSING_NULL,
            metadata::KTX_SWIZZLE_INVALID_VALUE,
            metadata::KTX_SWIZZLE_WITH_DEPTH_OR_STENCIL,
            metadata::KTX_WRITER_MISSING_NULL,
            metadata::KTX_WRITER_INVALID_UTF8,
            metadata::KTX_WRITER_REQUIRED_BUT_MISSING,
            metadata::KTX_WRITER_MISSING,
            metadata::KTX_WRITER_SC_PARAMS_MISSING_NULL,
            metadata::KTX_WRITER_SC_PARAMS_INVALID_UTF8,
            metadata::KTX_CUBEMAP_INCOMPLETE_WIDTH_HEIGHT_MISMATCH,
            metadata::KTX_CUBEMAP_INCOMPLETE_WITH_DEPTH,
            metadata::KTX_ASTC_DECODE_MODE_INVALID_VALUE,
            metadata::KTX_ANIM_DATA_INVALID_SIZE,
            metadata::KTX_ANIM_DATA_WITH_CUBEMAP_INCOMPLETE,
            metadata::KTX_ANIM_DATA_NOT_ARRAY,
        ]
    }

    #[test]
    fn ids_are_unique_across_the_catalog() {
        let issues = all_issues();
        for (i, a) in issues.iter().enumerate() {
            for b in &issues[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate issue id {}", a.id);
            }
        }
    }

    #[test]
    fn ids_fall_into_their_category_ranges() {
        for issue in all_issues() {
            match issue.id {
                1000..=1999 | 2000..=2999 | 3000..=3999 | 7000..=7999 => {}
                other => panic!("issue id {other} outside all known category ranges"),
            }
        }
    }

    #[test]
    fn render_details_substitutes_positionally() {
        let rendered = header::CUBE_HEIGHT_WIDTH_MISMATCH.render_details(&[&4u32, &2u32]);
        assert_eq!(
            rendered,
            "pixelWidth is 4 and pixelHeight is 2, but for a cube map they must be equal."
        );
    }

    #[test]
    fn render_details_without_placeholders_is_verbatim() {
        let rendered = header::WIDTH_ZERO.render_details(&[]);
        assert_eq!(rendered, header::WIDTH_ZERO.details);
    }

    #[test]
    fn severity_order_matches_escalation() {
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }
}
