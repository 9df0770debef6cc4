// ABOUTME: Tunables for the manufacturing-info layout
// ABOUTME: Defaults describe the 1 KiB, 0xFF-terminated blob of the reference device

use alloc::borrow::Cow;

/// Layout parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Number of bytes read from offset 0 of the storage device
    pub blob_size: usize,
    /// Byte marking the logical end of the blob
    pub sentinel: u8,
    /// Byte starting a full-line comment
    pub comment: u8,
    /// Normalized cell name that receives the MAC derivation post-processor
    pub mac_key: Cow<'static, str>,
}

impl LayoutConfig {
    /// Blob size of the reference device
    pub const BLOB_SIZE: usize = 1024;

    /// End-of-content marker (erased flash)
    pub const SENTINEL: u8 = 0xff;

    /// Comment marker
    pub const COMMENT: u8 = b'#';

    /// Line terminator
    pub const NEWLINE: u8 = b'\n';

    /// Key/value separator
    pub const SEPARATOR: u8 = b'=';

    /// Normalized form of `MFG_MAC`
    pub const MAC_KEY: &'static str = "mfg-mac";

    /// Override the blob size
    pub fn with_blob_size(mut self, blob_size: usize) -> Self {
        self.blob_size = blob_size;
        self
    }

    /// Override the sentinel byte
    pub fn with_sentinel(mut self, sentinel: u8) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// Override the comment marker
    pub fn with_comment(mut self, comment: u8) -> Self {
        self.comment = comment;
        self
    }

    /// Override which cell receives MAC derivation; the name is normalized first
    pub fn with_mac_key(mut self, key: &str) -> Self {
        self.mac_key = Cow::Owned(super::tokens::normalize_name(key.as_bytes()));
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            blob_size: Self::BLOB_SIZE,
            sentinel: Self::SENTINEL,
            comment: Self::COMMENT,
            mac_key: Cow::Borrowed(Self::MAC_KEY),
        }
    }
}
