// ABOUTME: Line tokenizer for KEY=VALUE manufacturing-info blobs
// ABOUTME: Splits the blob into normalized names and value spans without decoding values

use super::config::LayoutConfig;
use alloc::string::String;

/// One `KEY=VALUE` line located in the blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Normalized key (lower-case, `_` replaced by `-`)
    pub name: String,
    /// Byte offset of the value within the blob
    pub offset: usize,
    /// Value length in bytes, excluding the line terminator
    pub len: usize,
}

impl Record {
    /// Value bytes of this record within `blob`
    pub fn value<'b>(&self, blob: &'b [u8]) -> &'b [u8] {
        &blob[self.offset..self.offset + self.len]
    }
}

/// Normalize a raw key: lower-case every byte and turn `_` into `-`
///
/// Only ASCII characters are changed. Invalid UTF-8 becomes U+FFFD, so the
/// result is always valid UTF-8 and normalizing it again is a no-op.
pub fn normalize_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw)
        .chars()
        .map(|c| match c.to_ascii_lowercase() {
            '_' => '-',
            c => c,
        })
        .collect()
}

/// Iterator over the records of a blob
///
/// Content ends at the first sentinel byte, wherever it occurs. Comment lines
/// and lines without a separator are skipped; a final line without a
/// terminator is dropped.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    data: &'a [u8],
    pos: usize,
    comment: u8,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `blob`
    pub fn new(blob: &'a [u8], config: &LayoutConfig) -> Self {
        let end = blob
            .iter()
            .position(|&b| b == config.sentinel)
            .unwrap_or(blob.len());

        Self {
            data: &blob[..end],
            pos: 0,
            comment: config.comment,
        }
    }

    /// Length of the content before the sentinel
    pub fn content_len(&self) -> usize {
        self.data.len()
    }

    fn find_byte(&self, from: usize, byte: u8) -> Option<usize> {
        self.data[from..]
            .iter()
            .position(|&b| b == byte)
            .map(|i| from + i)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.pos;
            if start >= self.data.len() {
                return None;
            }

            let Some(line_end) = self.find_byte(start, LayoutConfig::NEWLINE) else {
                log::debug!("dropping unterminated line at offset {start}");
                self.pos = self.data.len();
                return None;
            };
            self.pos = line_end + 1;

            let line = &self.data[start..line_end];
            if line.first() == Some(&self.comment) {
                log::trace!("skipping comment at offset {start}");
                continue;
            }

            let Some(eq) = line.iter().position(|&b| b == LayoutConfig::SEPARATOR) else {
                log::debug!("skipping line without separator at offset {start}");
                continue;
            };

            let offset = start + eq + 1;
            let record = Record {
                name: normalize_name(&line[..eq]),
                offset,
                len: line_end - offset,
            };
            log::trace!(
                "record {} at {}+{}",
                record.name,
                record.offset,
                record.len
            );
            return Some(record);
        }
    }
}
