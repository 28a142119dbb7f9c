//! Classification of the format-related enumerations in a KTX2 header.
//!
//! Both enumerations are open: files may carry values this build does not
//! know, and those must still render into diagnostics, so the types are
//! `u32` newtypes with named constants rather than closed Rust enums.

mod supercompression;
mod vk_format;

pub use supercompression::SupercompressionScheme;
pub use vk_format::VkFormat;
