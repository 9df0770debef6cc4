// ABOUTME: Cell layout library for key=value manufacturing-info blobs
// ABOUTME: Exposes stored values as named cells and derives per-port MAC addresses

//! # Manufacturing-info layout
//!
//! Hardware configuration memories (EEPROMs, flash partitions) often hold a
//! short text blob of `KEY=VALUE` lines written at the factory, terminated by
//! erased flash (`0xFF`). This crate turns that blob into named cells that
//! consumers such as network drivers read by name.
//!
//! ## Quick Start
//!
//! ```rust
//! # use mfginfo_layout::{
//! #     CellTable, DeviceTreeNode, Layout, LayoutConfig, MemoryStorage, MfgInfoError,
//! #     PropertyValue,
//! # };
//! # fn main() -> Result<(), MfgInfoError> {
//! let mut eeprom = vec![0xffu8; 1024];
//! let text = b"# factory data\nMFG_MAC=00:11:22:33:44:50\nSERIAL_NO=X123\n";
//! eeprom[..text.len()].copy_from_slice(text);
//!
//! let container = DeviceTreeNode::new("nvmem-layout")
//!     .with_property("compatible", PropertyValue::String("adtran,mfginfo".into()));
//! let layout = Layout::probe(&container, LayoutConfig::default()).expect("compatible");
//!
//! let storage = MemoryStorage::new(&eeprom);
//! let mut cells = CellTable::new();
//! layout.add_cells(&storage, &mut cells)?;
//!
//! assert_eq!(cells.read_cell(&storage, "serial-no", 0)?, b"X123");
//! // Second port of the device gets the next address in the block
//! assert_eq!(cells.read_cell(&storage, "mfg-mac", 1)?, b"00:11:22:33:44:51");
//! # Ok(())
//! # }
//! ```
//!
//! ## Format
//!
//! - One `KEY=VALUE` pair per line, terminated by `\n`
//! - Full-line comments start with `#`
//! - Content ends at the first `0xFF` byte
//! - Keys are exposed lower-case with `_` replaced by `-` (`MFG_MAC` is `mfg-mac`)
//!
//! ## Main Types
//!
//! - [`Layout`] - Binds to a storage device and registers its cells
//! - [`Tokenizer`] - Iterator over the `KEY=VALUE` records of a blob
//! - [`CellTable`] - In-memory cell registry serving consumer reads
//! - [`PostProcess`] - Read-time transform of a cell (MAC derivation)
//! - [`Storage`] - Read-only access to the configuration memory
//! - [`MfgInfoError`] - Error type for all operations

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod mfginfo;


// Re-export main types
pub use mfginfo::{
    Cell, CellInfo, CellSink, CellTable, DeviceTreeNode, FormatError, Layout, LayoutConfig,
    MemoryStorage, MfgInfoError, PostProcess, Property, PropertyValue, Record, Storage, Tokenizer,
};

// Re-export utility functions
pub use mfginfo::{derive_mac, normalize_name, parse_mac};
