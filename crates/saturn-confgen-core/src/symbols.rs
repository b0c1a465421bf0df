//! Symbolic tag mapping.
//!
//! The input document names guest OS families and memory-region types with
//! lowercase tags; the generated code refers to the hypervisor's `OS_Type`
//! and `core::MMapType` enumerants. Both enumerations are closed: any tag
//! outside them is rejected, never passed through.

use crate::error::TranslateError;

/// Guest OS family of a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsType {
    /// A Linux guest.
    Linux,
    /// The hypervisor's default bare-metal guest (the `asteroid` test OS).
    Default,
}

impl OsType {
    /// Map a document OS tag to its enumerant. Tags are matched exactly.
    pub fn from_tag(tag: &str) -> Result<Self, TranslateError> {
        match tag {
            "linux" => Ok(Self::Linux),
            "asteroid" => Ok(Self::Default),
            _ => Err(TranslateError::UnknownSymbol {
                field: "guest OS tag",
                tag: tag.to_string(),
                expected: "`linux` or `asteroid`",
            }),
        }
    }

    /// The `OS_Type::` enumerant spelling used in generated code.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Linux => "Linux",
            Self::Default => "Default",
        }
    }
}

/// Mapping type of a guest memory region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapType {
    /// Device memory (MMIO; non-cacheable, non-gathering attributes).
    Device,
    /// Normal cacheable RAM.
    Normal,
}

impl MapType {
    /// Map a document memory-type tag to its enumerant. Tags are matched
    /// exactly.
    pub fn from_tag(tag: &str) -> Result<Self, TranslateError> {
        match tag {
            "device" => Ok(Self::Device),
            "normal" => Ok(Self::Normal),
            _ => Err(TranslateError::UnknownSymbol {
                field: "memory region type",
                tag: tag.to_string(),
                expected: "`device` or `normal`",
            }),
        }
    }

    /// The `core::MMapType::` enumerant spelling used in generated code.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Device => "Device",
            Self::Normal => "Normal",
        }
    }
}
