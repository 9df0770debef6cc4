// ABOUTME: Manufacturing-info layout bound to one storage device
// ABOUTME: Reads the blob once, turns each KEY=VALUE line into a cell and registers it

use super::cell::{CellInfo, CellSink};
use super::config::LayoutConfig;
use super::error::{FormatError, MfgInfoError, Result};
use super::mac::PostProcess;
use super::storage::Storage;
use super::tokens::Tokenizer;
use super::tree::DeviceTreeNode;
use alloc::vec;

/// Layout instance for one storage device
///
/// Created by [`Layout::probe`] against the device's layout container node and
/// torn down by [`Layout::remove`].
#[derive(Debug)]
pub struct Layout<'a> {
    container: &'a DeviceTreeNode,
    config: LayoutConfig,
}

impl<'a> Layout<'a> {
    /// Compatible strings this layout binds to
    pub const COMPATIBLE: &'static [&'static str] = &["adtran,mfginfo"];

    /// Name of the container node below a storage device node
    pub const CONTAINER: &'static str = "nvmem-layout";

    /// Bind to `container` if it is compatible with this layout
    pub fn probe(container: &'a DeviceTreeNode, config: LayoutConfig) -> Option<Self> {
        if !Self::COMPATIBLE.iter().any(|c| container.is_compatible(c)) {
            return None;
        }
        log::info!("mfginfo layout bound to {}", container.name);
        Some(Self { container, config })
    }

    /// Locate the layout container of a storage device node and probe it
    pub fn for_device(device: &'a DeviceTreeNode, config: LayoutConfig) -> Result<Option<Self>> {
        let container = Self::container(device)?;
        Ok(Self::probe(container, config))
    }

    /// Layout container node of a storage device node
    pub fn container(device: &DeviceTreeNode) -> Result<&DeviceTreeNode> {
        device
            .find_child(Self::CONTAINER)
            .ok_or(MfgInfoError::MissingContainer(Self::CONTAINER))
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Describe the cells found in `blob` without registering them
    pub fn describe<'b>(&'b self, blob: &'b [u8]) -> impl Iterator<Item = CellInfo<'a>> + 'b {
        let container = self.container;
        Tokenizer::new(blob, &self.config).map(move |record| {
            let post_process = if record.name == self.config.mac_key {
                PostProcess::MacDerive
            } else {
                PostProcess::None
            };
            let node = container.find_child(&record.name);

            CellInfo {
                name: record.name,
                offset: record.offset,
                bytes: record.len,
                post_process,
                node,
            }
        })
    }

    /// Read the blob from `storage` and register every cell with `sink`
    ///
    /// Returns the number of registered cells. The first registration error
    /// aborts the parse; cells registered before it stay registered.
    pub fn add_cells<S, K>(&self, storage: &S, sink: &mut K) -> Result<usize>
    where
        S: Storage + ?Sized,
        K: CellSink + ?Sized,
    {
        let mut blob = vec![0u8; self.config.blob_size];
        storage.read_exact(0, &mut blob)?;

        let mut count = 0;
        for info in self.describe(&blob) {
            log::debug!(
                "cell {} at {}+{} ({:?}{})",
                info.name,
                info.offset,
                info.bytes,
                info.post_process,
                if info.node.is_some() { ", with node" } else { "" }
            );
            if let Err(err) = sink.add_cell(info) {
                log::warn!("cell registration failed after {count} cells: {err}");
                return Err(err);
            }
            count += 1;
        }

        if count == 0 {
            log::warn!("no cells found in {} byte blob", blob.len());
            return Err(FormatError::NoCells.into());
        }

        Ok(count)
    }

    /// Unbind the layout, handing back the container node it was bound to
    pub fn remove(self) -> &'a DeviceTreeNode {
        log::info!("mfginfo layout removed from {}", self.container.name);
        self.container
    }
}
