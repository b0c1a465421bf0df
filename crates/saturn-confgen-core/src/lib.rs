//! Build-time configuration compilation for the Saturn hypervisor.
//!
//! Reads a JSON descriptor of hypervisor partitions and produces the C++
//! source that statically wires each virtual machine's memory map,
//! interrupts, boot images and guest OS type into the BSP. The hypervisor
//! links the generated file instead of parsing configuration at runtime.
//!
//! ## Modules
//!
//! - [`document`] — JSON configuration document model and parsing
//! - [`symbols`] — closed tag-to-identifier enumerations (OS and mapping types)
//! - [`translate`] — per-partition C++ installer block rendering
//! - [`emit`] — fixed header and namespace assembly around translated blocks
//! - [`error`] — compilation error taxonomy
//!
//! ## Example
//!
//! ```
//! let source = saturn_confgen_core::compile(r#"{"version":"1","partitions":[]}"#)?;
//! assert!(source.contains("namespace generated"));
//! # Ok::<(), saturn_confgen_core::ConfigError>(())
//! ```

pub mod document;
pub mod emit;
pub mod error;
pub mod symbols;
pub mod translate;

// Re-export key types for convenience
pub use document::{ConfigDocument, ImageEntry, MemoryRegion, Partition};
pub use error::{ConfigError, Result, TranslateError};
pub use symbols::{MapType, OsType};

/// Compile a configuration document into generated C++ source.
///
/// One-shot pipeline: parse the document, translate every partition in
/// order, wrap the result in the fixed file chrome. The returned string is
/// the complete content of the output file; nothing is written to disk.
pub fn compile(input: &str) -> Result<String> {
    let doc = ConfigDocument::parse(input)?;
    let body = translate::document_body(&doc)?;
    Ok(emit::module(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_PARTITION: &str = r#"{"version":"1","partitions":[{"memory":[{"pa":"0x1000","va":"0x2000","size":"0x1000","type":"normal"}],"interrupts":[27],"entry":"0x2000","images":[{"store":"0","boot":"0x1000","size":"0x500000"}],"system":"linux"}]}"#;

    #[test]
    fn compile_single_partition_document() {
        let expected = r#"// Copyright (C) 2023 Alexander Smirnov <alex.bluesman.smirnov@gmail.com>
//
// Licensed under the MIT License (the "License"); you may not use this file except
// in compliance with the License. You may obtain a copy of the License at
//
// http://opensource.org/licenses/MIT
//
// Unless required by applicable law or agreed to in writing, software distributed
// under the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR
// CONDITIONS OF ANY KIND, either express or implied. See the License for the
// specific language governing permissions and limitations under the License.

#pragma once

// (!) GENERATED CODE, DO NOT MODIFY (!)

namespace saturn {
namespace bsp {
namespace generated {

static void VM_Configuration(core::IVirtualMachineConfig& vmConfig)
{
    // IPA memory mapping

    vmConfig.VM_Assign_Memory_Region({0x1000, 0x2000, 0x1000, core::MMapType::Normal});

    // INT mapping

    vmConfig.VM_Assign_Interrupt(27);

    // Boot address
    vmConfig.VM_Set_Entry_Address(0x2000);
}

static void OS_Storage_Configuration(OS_Storage& osStorage)
{
    // OS storage table
    osStorage.Add_Image(0, 0x1000, 0x500000);

    // Guest OS type
    osStorage.Set_OS_Type(OS_Type::Linux);
}

}; // namespace generated
}; // namespace bsp
}; // namespace saturn"#;

        assert_eq!(compile(SINGLE_PARTITION).unwrap(), expected);
    }

    #[test]
    fn compile_is_deterministic() {
        assert_eq!(
            compile(SINGLE_PARTITION).unwrap(),
            compile(SINGLE_PARTITION).unwrap()
        );
    }

    #[test]
    fn compile_empty_document_is_chrome_only() {
        let out = compile(r#"{"version":"1","partitions":[]}"#).unwrap();
        assert!(out.starts_with("// Copyright (C) 2023 Alexander Smirnov"));
        assert!(out.ends_with("}; // namespace saturn"));
        assert!(!out.contains("static void"));
    }

    #[test]
    fn compile_suffixes_names_for_multiple_partitions() {
        let doc = serde_json::json!({
            "version": "1",
            "partitions": [
                {
                    "memory": [],
                    "interrupts": [27],
                    "entry": "0x41000000",
                    "images": [],
                    "system": "linux"
                },
                {
                    "memory": [],
                    "interrupts": [],
                    "entry": "0x50000000",
                    "images": [],
                    "system": "asteroid"
                }
            ]
        });

        let out = compile(&doc.to_string()).unwrap();
        assert!(out.contains("static void VM_Configuration_1("));
        assert!(out.contains("static void OS_Storage_Configuration_1("));
        assert!(out.contains("static void VM_Configuration_2("));
        assert!(out.contains("static void OS_Storage_Configuration_2("));
        assert!(!out.contains("static void VM_Configuration("));
        assert!(out.contains("Set_OS_Type(OS_Type::Linux)"));
        assert!(out.contains("Set_OS_Type(OS_Type::Default)"));
    }

    #[test]
    fn compile_rejects_unparseable_document() {
        let err = compile("{").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn compile_rejects_missing_top_level_fields() {
        let err = compile(r#"{"partitions": []}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DocumentSchema { field: "version" }
        ));
    }

    #[test]
    fn compile_rejects_unknown_tags_with_partition_context() {
        let doc = SINGLE_PARTITION.replace("\"system\":\"linux\"", "\"system\":\"freertos\"");
        let err = compile(&doc).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("partition 1"), "message: {message}");
        assert!(message.contains("freertos"), "message: {message}");
    }
}
