// ABOUTME: Cell descriptors, the registration interface and an in-memory cell table
// ABOUTME: Serves consumer reads by applying each cell's post-processor on demand

use super::config::LayoutConfig;
use super::error::{MfgInfoError, Result};
use super::mac::{PostProcess, parse_mac};
use super::storage::Storage;
use super::tree::DeviceTreeNode;
use alloc::{string::String, vec, vec::Vec};

/// Descriptor handed to a [`CellSink`] for every parsed line
#[derive(Debug, Clone, PartialEq)]
pub struct CellInfo<'a> {
    /// Normalized cell name
    pub name: String,
    /// Byte offset of the value on the storage device
    pub offset: usize,
    /// Value length in bytes
    pub bytes: usize,
    /// Transform applied when the cell is read
    pub post_process: PostProcess,
    /// Metadata node of the same name, if the layout container has one
    pub node: Option<&'a DeviceTreeNode>,
}

/// Registration interface receiving cells from a layout
pub trait CellSink {
    /// Register one cell; an error aborts the parse
    fn add_cell(&mut self, info: CellInfo<'_>) -> Result<()>;
}

impl<T: CellSink + ?Sized> CellSink for &mut T {
    fn add_cell(&mut self, info: CellInfo<'_>) -> Result<()> {
        (**self).add_cell(info)
    }
}

/// A registered cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub name: String,
    pub offset: usize,
    pub bytes: usize,
    pub post_process: PostProcess,
    pub node: Option<DeviceTreeNode>,
}

impl Cell {
    /// Read the raw value from `storage` and apply the post-processor for `index`
    pub fn read<S: Storage + ?Sized>(&self, storage: &S, index: i32) -> Result<Vec<u8>> {
        let mut raw = vec![0u8; self.bytes];
        storage.read_exact(self.offset, &mut raw)?;
        log::trace!("read cell {} index {index}", self.name);
        self.post_process.apply(&raw, index)
    }
}

impl From<CellInfo<'_>> for Cell {
    fn from(info: CellInfo<'_>) -> Self {
        Self {
            name: info.name,
            offset: info.offset,
            bytes: info.bytes,
            post_process: info.post_process,
            node: info.node.cloned(),
        }
    }
}

/// In-memory registry of cells, one per unique name
#[derive(Debug, Clone, Default)]
pub struct CellTable {
    cells: Vec<Cell>,
}

impl CellTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Find a cell by normalized name
    pub fn get(&self, name: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| c.name == name)
    }

    /// Cells in registration order
    pub fn iter(&self) -> core::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Consumer read of the cell `name` with the given index
    pub fn read_cell<S: Storage + ?Sized>(
        &self,
        storage: &S,
        name: &str,
        index: i32,
    ) -> Result<Vec<u8>> {
        self.get(name)
            .ok_or_else(|| MfgInfoError::UnknownCell(name.into()))?
            .read(storage, index)
    }

    /// First cell carrying the MAC derivation post-processor
    pub fn mac_cell(&self) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|c| c.post_process == PostProcess::MacDerive)
    }

    /// Octets of the `index`th MAC address of the device block
    pub fn mac_address<S: Storage + ?Sized>(&self, storage: &S, index: i32) -> Result<[u8; 6]> {
        let text = self
            .mac_cell()
            .ok_or_else(|| MfgInfoError::UnknownCell(LayoutConfig::MAC_KEY.into()))?
            .read(storage, index)?;
        parse_mac(&text)
    }
}

impl CellSink for CellTable {
    fn add_cell(&mut self, info: CellInfo<'_>) -> Result<()> {
        if self.get(&info.name).is_some() {
            return Err(MfgInfoError::Registration {
                name: info.name,
                reason: "name already registered",
            });
        }
        self.cells.push(info.into());
        Ok(())
    }
}

impl<'a> IntoIterator for &'a CellTable {
    type Item = &'a Cell;
    type IntoIter = core::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mfginfo::storage::MemoryStorage;
    use alloc::string::ToString;

    const IMAGE: &[u8] = b"MFG_MAC=00:11:22:33:44:50\nSN=42\n\xff";

    fn info(
        name: &str,
        offset: usize,
        bytes: usize,
        post_process: PostProcess,
    ) -> CellInfo<'static> {
        CellInfo {
            name: name.to_string(),
            offset,
            bytes,
            post_process,
            node: None,
        }
    }

    fn table() -> CellTable {
        let mut table = CellTable::new();
        table
            .add_cell(info("mfg-mac", 8, 17, PostProcess::MacDerive))
            .unwrap();
        table.add_cell(info("sn", 29, 2, PostProcess::None)).unwrap();
        table
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut table = table();
        let err = table
            .add_cell(info("sn", 0, 1, PostProcess::None))
            .unwrap_err();
        assert_eq!(
            err,
            MfgInfoError::Registration {
                name: "sn".to_string(),
                reason: "name already registered"
            }
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_read_plain_cell() {
        let storage = MemoryStorage::new(IMAGE);
        assert_eq!(table().read_cell(&storage, "sn", 0).unwrap(), b"42");
    }

    #[test]
    fn test_read_derived_mac() {
        let storage = MemoryStorage::new(IMAGE);
        let table = table();
        assert_eq!(
            table.read_cell(&storage, "mfg-mac", 2).unwrap(),
            b"00:11:22:33:44:52"
        );
        assert!(matches!(
            table.read_cell(&storage, "mfg-mac", 16),
            Err(MfgInfoError::Range { .. })
        ));
        assert_eq!(
            table.mac_address(&storage, 3).unwrap(),
            [0x00, 0x11, 0x22, 0x33, 0x44, 0x53]
        );
    }

    #[test]
    fn test_mac_address_without_mac_cell() {
        let storage = MemoryStorage::new(IMAGE);
        let mut table = CellTable::new();
        table.add_cell(info("sn", 29, 2, PostProcess::None)).unwrap();
        assert!(table.mac_cell().is_none());
        assert_eq!(
            table.mac_address(&storage, 0),
            Err(MfgInfoError::UnknownCell("mfg-mac".to_string()))
        );
    }

    #[test]
    fn test_unknown_cell() {
        let storage = MemoryStorage::new(IMAGE);
        assert_eq!(
            table().read_cell(&storage, "missing", 0),
            Err(MfgInfoError::UnknownCell("missing".to_string()))
        );
    }

    #[test]
    fn test_metadata_node_is_kept() {
        let node = DeviceTreeNode::new("sn");
        let mut table = CellTable::new();
        table
            .add_cell(CellInfo {
                node: Some(&node),
                ..info("sn", 29, 2, PostProcess::None)
            })
            .unwrap();
        assert_eq!(table.get("sn").unwrap().node.as_ref(), Some(&node));
        assert_eq!((&table).into_iter().count(), 1);
    }
}
