// ABOUTME: Read-time post-processors for manufacturing-info cells
// ABOUTME: Derives the Nth MAC address of a device block from the stored base MAC

use super::error::{FormatError, MfgInfoError, Result};
use alloc::vec::Vec;

/// Length of a colon separated MAC string (`aa:bb:cc:dd:ee:ff`)
pub const MAC_STRING_LEN: usize = 17;

/// Transform applied to a cell's raw bytes when a consumer reads it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostProcess {
    /// Raw bytes are returned unchanged
    #[default]
    None,
    /// Raw bytes are a base MAC; the read index selects the derived address
    MacDerive,
}

impl PostProcess {
    /// Apply this transform to `raw` for the consumer-supplied `index`
    pub fn apply(self, raw: &[u8], index: i32) -> Result<Vec<u8>> {
        match self {
            PostProcess::None => Ok(raw.to_vec()),
            PostProcess::MacDerive => derive_mac(raw, index).map(|mac| mac.to_vec()),
        }
    }
}

/// Compute the MAC address `index` positions after the stored base address
///
/// Devices ship with a base MAC whose last nibble is usually 0, giving a block
/// of up to 16 addresses. Only the last hex digit changes; the derived digit
/// must not pass `f`, there is no carry into the preceding octet.
pub fn derive_mac(raw: &[u8], index: i32) -> Result<[u8; MAC_STRING_LEN]> {
    let mut mac: [u8; MAC_STRING_LEN] = raw
        .try_into()
        .map_err(|_| FormatError::MacLength(raw.len()))?;

    let last = mac[MAC_STRING_LEN - 1];
    let digit = hex_value(last).ok_or(FormatError::MacDigit(last))?;

    let max = 0xf - digit;
    let offset = u8::try_from(index)
        .ok()
        .filter(|&i| i <= max)
        .ok_or(MfgInfoError::Range { index, max })?;

    mac[MAC_STRING_LEN - 1] = hex_digit(digit + offset);
    Ok(mac)
}

/// Decode a colon separated MAC string into its six octets
pub fn parse_mac(text: &[u8]) -> Result<[u8; 6]> {
    if text.len() != MAC_STRING_LEN {
        return Err(FormatError::MacLength(text.len()).into());
    }

    let mut octets = [0u8; 6];
    for (i, chunk) in text.chunks(3).enumerate() {
        if chunk.len() == 3 && chunk[2] != b':' {
            return Err(FormatError::MacSyntax.into());
        }
        let hi = hex_value(chunk[0]).ok_or(FormatError::MacSyntax)?;
        let lo = hex_value(chunk[1]).ok_or(FormatError::MacSyntax)?;
        octets[i] = (hi << 4) | lo;
    }

    Ok(octets)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn hex_digit(value: u8) -> u8 {
    match value {
        0..=9 => b'0' + value,
        _ => b'a' + value - 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &[u8] = b"00:11:22:33:44:50";

    #[test]
    fn test_index_zero_is_identity() {
        assert_eq!(&derive_mac(BASE, 0).unwrap()[..], BASE);
    }

    #[test]
    fn test_derive_full_block() {
        assert_eq!(&derive_mac(BASE, 1).unwrap()[..], b"00:11:22:33:44:51");
        assert_eq!(&derive_mac(BASE, 10).unwrap()[..], b"00:11:22:33:44:5a");
        assert_eq!(&derive_mac(BASE, 15).unwrap()[..], b"00:11:22:33:44:5f");
    }

    #[test]
    fn test_no_carry_past_last_nibble() {
        let result = derive_mac(b"00:11:22:33:44:5f", 1);
        assert_eq!(result, Err(MfgInfoError::Range { index: 1, max: 0 }));

        let result = derive_mac(BASE, 16);
        assert_eq!(result, Err(MfgInfoError::Range { index: 16, max: 15 }));
    }

    #[test]
    fn test_negative_index_rejected() {
        for index in [-1, -16, i32::MIN] {
            assert!(matches!(
                derive_mac(BASE, index),
                Err(MfgInfoError::Range { .. })
            ));
        }
    }

    #[test]
    fn test_upper_case_digit_accepted() {
        let mac = derive_mac(b"00:11:22:33:44:5A", 2).unwrap();
        assert_eq!(&mac[..], b"00:11:22:33:44:5c");
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(
            derive_mac(b"00:11:22:33:44:5", 0),
            Err(MfgInfoError::Format(FormatError::MacLength(16)))
        );
        assert_eq!(
            derive_mac(b"00:11:22:33:44:5g", 0),
            Err(MfgInfoError::Format(FormatError::MacDigit(b'g')))
        );
    }

    #[test]
    fn test_prefix_untouched() {
        let raw = b"De:aD:bE:eF:00:a3";
        for index in 0..=12 {
            let mac = derive_mac(raw, index).unwrap();
            assert_eq!(&mac[..16], &raw[..16]);
        }
    }

    #[test]
    fn test_post_process_dispatch() {
        assert_eq!(PostProcess::None.apply(b"abc", 7).unwrap(), b"abc");
        assert_eq!(
            PostProcess::MacDerive.apply(BASE, 3).unwrap(),
            b"00:11:22:33:44:53"
        );
        assert!(PostProcess::MacDerive.apply(b"abc", 0).is_err());
    }

    #[test]
    fn test_parse_mac() {
        assert_eq!(
            parse_mac(b"00:11:22:33:44:5f").unwrap(),
            [0x00, 0x11, 0x22, 0x33, 0x44, 0x5f]
        );
        assert!(parse_mac(b"00-11-22-33-44-5f").is_err());
        assert!(parse_mac(b"zz:11:22:33:44:5f").is_err());
    }
}
