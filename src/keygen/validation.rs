//! Key grammar parsing shared by the schemes

use crate::checksum::parse_digits;
use crate::types::is_forbidden_prefix;
use once_cell::sync::Lazy;
use regex::Regex;

static OEM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{3})([0-9]{2})-OEM-0([0-9]{7})-([0-9]{5})$").expect("valid OEM pattern")
});

static RETAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{3})-([0-9]{7})$").expect("valid retail pattern"));

/// Fields of a structurally valid OEM key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OemFields {
    pub day: u16,
    pub year: u16,
    pub block: Vec<u8>,
    pub serial: String,
}

/// Fields of a structurally valid retail key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetailFields {
    pub prefix: u16,
    pub block: Vec<u8>,
}

/// Match `DDDYY-OEM-0CCCCCCC-NNNNN` and split it into fields.
///
/// Only the structure is checked here; ranges and checksums are left to
/// the scheme.
pub fn parse_oem(key: &str) -> Option<OemFields> {
    let caps = OEM_PATTERN.captures(key)?;
    Some(OemFields {
        day: caps[1].parse().ok()?,
        year: caps[2].parse().ok()?,
        block: parse_digits(&caps[3])?,
        serial: caps[4].to_string(),
    })
}

/// Match `PPP-CCCCCCC` and split it into fields.
pub fn parse_retail(key: &str) -> Option<RetailFields> {
    let caps = RETAIL_PATTERN.captures(key)?;
    Some(RetailFields {
        prefix: caps[1].parse().ok()?,
        block: parse_digits(&caps[2])?,
    })
}

/// Parse a retail key and drop it if the prefix is a repeated-digit value.
pub fn parse_retail_allowed(key: &str) -> Option<RetailFields> {
    parse_retail(key).filter(|fields| !is_forbidden_prefix(fields.prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_oem() {
        let fields = parse_oem("00104-OEM-01111111-00000").unwrap();
        assert_eq!(fields.day, 1);
        assert_eq!(fields.year, 4);
        assert_eq!(fields.block, vec![1; 7]);
        assert_eq!(fields.serial, "00000");
    }

    #[test]
    fn test_parse_oem_rejects_structure() {
        assert!(parse_oem("001-04-OEM-01111111-00000").is_none());
        assert!(parse_oem("00104-OEM-11111111-00000").is_none());
        assert!(parse_oem("00104-oem-01111111-00000").is_none());
        assert!(parse_oem("00104-OEM-01111111-0000").is_none());
        assert!(parse_oem("00104-OEM-01111111-00000 ").is_none());
        assert!(parse_oem("").is_none());
    }

    #[test]
    fn test_parse_retail() {
        let fields = parse_retail("042-1234567").unwrap();
        assert_eq!(fields.prefix, 42);
        assert_eq!(fields.block, vec![1, 2, 3, 4, 5, 6, 7]);

        assert!(parse_retail("42-1234567").is_none());
        assert!(parse_retail("042-123456").is_none());
        assert!(parse_retail("042_1234567").is_none());
        assert!(parse_retail("042-12345a7").is_none());
        // Unicode digits must not sneak past the grammar
        assert!(parse_retail("042-123456٧").is_none());
    }

    #[test]
    fn test_parse_retail_allowed() {
        assert!(parse_retail_allowed("332-0000000").is_some());
        assert!(parse_retail_allowed("333-0000000").is_none());
        assert!(parse_retail_allowed("999-0000000").is_none());
    }
}
