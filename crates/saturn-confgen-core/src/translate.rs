//! Partition translation.
//!
//! Each partition becomes two C++ installer functions: a `VM_Configuration`
//! block that assigns memory regions, interrupts and the entry address to a
//! virtual machine, and an `OS_Storage_Configuration` block that registers
//! boot images and declares the guest OS type. When the document holds more
//! than one partition, every installer name carries a 1-based `_<n>` suffix
//! so the blocks stay distinct within the generated namespace.

use crate::document::{ConfigDocument, Partition};
use crate::error::{ConfigError, TranslateError};
use crate::symbols::{MapType, OsType};

/// Installer function names for the partition at `index` (0-based) in a
/// document of `total` partitions. A single-partition document keeps the
/// bare names.
pub fn installer_names(index: usize, total: usize) -> (String, String) {
    if total > 1 {
        (
            format!("VM_Configuration_{}", index + 1),
            format!("OS_Storage_Configuration_{}", index + 1),
        )
    } else {
        (
            "VM_Configuration".to_owned(),
            "OS_Storage_Configuration".to_owned(),
        )
    }
}

/// Render the VM resource assignment block: memory regions, interrupts and
/// the entry address, in document order.
pub fn vm_configuration(
    partition: &Partition,
    fn_name: &str,
) -> Result<String, TranslateError> {
    let mut block = String::new();
    block.push_str(&format!(
        "static void {fn_name}(core::IVirtualMachineConfig& vmConfig)\n{{\n"
    ));

    block.push_str("    // IPA memory mapping\n\n");
    for region in &partition.memory {
        let kind = MapType::from_tag(&region.kind)?;
        block.push_str(&format!(
            "    vmConfig.VM_Assign_Memory_Region({{{}, {}, {}, core::MMapType::{}}});\n",
            region.pa,
            region.va,
            region.size,
            kind.identifier()
        ));
    }

    block.push_str("\n    // INT mapping\n\n");
    for interrupt in &partition.interrupts {
        block.push_str(&format!("    vmConfig.VM_Assign_Interrupt({interrupt});\n"));
    }

    block.push_str("\n    // Boot address\n");
    block.push_str(&format!(
        "    vmConfig.VM_Set_Entry_Address({});\n}}\n\n",
        partition.entry
    ));
    Ok(block)
}

/// Render the OS storage block: boot image registrations followed by the
/// guest OS type.
pub fn os_storage_configuration(
    partition: &Partition,
    fn_name: &str,
) -> Result<String, TranslateError> {
    let os = OsType::from_tag(&partition.system)?;

    let mut block = String::new();
    block.push_str(&format!("static void {fn_name}(OS_Storage& osStorage)\n{{\n"));

    block.push_str("    // OS storage table\n");
    for image in &partition.images {
        block.push_str(&format!(
            "    osStorage.Add_Image({}, {}, {});\n",
            image.store, image.boot, image.size
        ));
    }

    block.push_str(&format!(
        "\n    // Guest OS type\n    osStorage.Set_OS_Type(OS_Type::{});\n}}\n\n",
        os.identifier()
    ));
    Ok(block)
}

/// Render both installer blocks for one partition, with names chosen by
/// [`installer_names`]. Failures carry the partition's 1-based index and
/// its OS tag.
pub fn partition_blocks(
    partition: &Partition,
    index: usize,
    total: usize,
) -> Result<String, ConfigError> {
    let (vm_name, storage_name) = installer_names(index, total);

    let mut blocks =
        vm_configuration(partition, &vm_name).map_err(|e| attributed(index, partition, e))?;
    blocks.push_str(
        &os_storage_configuration(partition, &storage_name)
            .map_err(|e| attributed(index, partition, e))?,
    );
    Ok(blocks)
}

/// Render the installer blocks for every partition in the document, in
/// document order.
pub fn document_body(doc: &ConfigDocument) -> Result<String, ConfigError> {
    let total = doc.partitions.len();
    let mut body = String::new();
    for (index, partition) in doc.partitions.iter().enumerate() {
        body.push_str(&partition_blocks(partition, index, total)?);
    }
    Ok(body)
}

fn attributed(index: usize, partition: &Partition, reason: TranslateError) -> ConfigError {
    ConfigError::Partition {
        index: index + 1,
        system: Some(partition.system.clone()),
        reason,
    }
}
