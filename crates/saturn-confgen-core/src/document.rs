//! Configuration document parsing.
//!
//! The input is a JSON document describing hypervisor partitions: one entry
//! per virtual machine with its guest-physical memory map, interrupt
//! assignments, boot images and guest OS family. Address and size fields are
//! opaque C++ literal expressions and are carried through to the generated
//! code verbatim; the compiler validates structure, never numeric semantics.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result, TranslateError};

/// A parsed configuration document: the format version plus the partitions
/// in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDocument {
    /// Configuration format version. Advisory: reported in diagnostics, not
    /// enforced against a supported set.
    pub version: String,
    /// Partition descriptors in document order.
    pub partitions: Vec<Partition>,
}

/// One virtual machine's configuration unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// Guest memory map in registration order.
    pub memory: Vec<MemoryRegion>,
    /// Interrupt numbers assigned to the guest, in registration order.
    pub interrupts: Vec<u32>,
    /// Guest entry address expression (e.g., "0x41000000").
    pub entry: String,
    /// Boot images in load order.
    pub images: Vec<ImageEntry>,
    /// Guest OS tag ("linux" or "asteroid").
    pub system: String,
}

/// One guest memory region: physical/intermediate-physical addresses, size,
/// and mapping type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryRegion {
    /// Host physical address expression.
    pub pa: String,
    /// Guest-visible (IPA) address expression.
    pub va: String,
    /// Region size expression.
    pub size: String,
    /// Mapping type tag ("device" or "normal").
    #[serde(rename = "type")]
    pub kind: String,
}

/// One boot image: where it is stored, where the guest expects it, and its
/// size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// Storage source address expression.
    pub store: String,
    /// Guest boot address expression.
    pub boot: String,
    /// Image size expression.
    pub size: String,
}

impl ConfigDocument {
    /// Parse a configuration document from a JSON string.
    ///
    /// Top-level schema failures (`version` or `partitions` missing or
    /// mistyped) are reported before any partition is examined. A broken
    /// partition is reported with its 1-based index and, best-effort, its OS
    /// tag.
    pub fn parse(input: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(input)?;

        let version = root
            .get("version")
            .and_then(Value::as_str)
            .ok_or(ConfigError::DocumentSchema { field: "version" })?
            .to_owned();

        let entries = root
            .get("partitions")
            .and_then(Value::as_array)
            .ok_or(ConfigError::DocumentSchema {
                field: "partitions",
            })?;

        let mut partitions = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            // Peeked before the typed pass so the diagnostic can name the
            // partition's OS even when some other field is broken.
            let system = entry
                .get("system")
                .and_then(Value::as_str)
                .map(str::to_owned);

            let partition: Partition =
                serde_json::from_value(entry.clone()).map_err(|e| ConfigError::Partition {
                    index: i + 1,
                    system,
                    reason: TranslateError::Schema(e),
                })?;
            partitions.push(partition);
        }

        Ok(Self {
            version,
            partitions,
        })
    }

    /// Parse a configuration document from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}
