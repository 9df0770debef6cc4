// ABOUTME: Manufacturing-info layout module
// ABOUTME: Provides no_std compatible blob tokenizing, cell registration and MAC derivation

pub mod cell;
pub mod config;
pub mod error;
pub mod layout;
pub mod mac;
pub mod storage;
pub mod tokens;
pub mod tree;

pub use cell::{Cell, CellInfo, CellSink, CellTable};
pub use config::LayoutConfig;
pub use error::{FormatError, MfgInfoError, Result};
pub use layout::Layout;
pub use mac::{MAC_STRING_LEN, PostProcess, derive_mac, parse_mac};
pub use storage::{MemoryStorage, Storage};
pub use tokens::{Record, Tokenizer, normalize_name};
pub use tree::{DeviceTreeNode, Property, PropertyValue};
