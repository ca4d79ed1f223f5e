//! Common types and constants

/// Every checksum block must sum to a multiple of this.
pub const CHECKSUM_MODULUS: u32 = 7;

/// Length of the checksummed digit block shared by every format
pub const BLOCK_LEN: usize = 7;

/// Repeated-digit prefixes that retail keys never use
pub const FORBIDDEN_PREFIXES: [u16; 7] = [333, 444, 555, 666, 777, 888, 999];

/// Product names registered by default, with a short format description
pub const PRODUCTS: &[(&str, &str)] = &[
    ("Windows 95 OEM", "DDDYY-OEM-0XXXXXXX-NNNNN"),
    ("Windows 98 OEM", "DDDYY-OEM-0XXXXXXX-NNNNN (same as Windows 95 OEM)"),
    ("Windows 95 Retail", "PPP-XXXXXXX, digits 0-8"),
    ("Office 97 Retail", "PPP-XXXXXXX, digits 0-8"),
    ("Windows 98 Retail", "PPP-XXXXXXX, last digit 1-7"),
];

/// Look up the format description for a product name
pub fn describe(name: &str) -> Option<&'static str> {
    PRODUCTS
        .iter()
        .find(|(product, _)| *product == name)
        .map(|(_, desc)| *desc)
}

/// Returns true for one of the repeated-digit retail prefixes.
pub fn is_forbidden_prefix(prefix: u16) -> bool {
    FORBIDDEN_PREFIXES.contains(&prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_prefixes() {
        for prefix in [333, 444, 555, 666, 777, 888, 999] {
            assert!(is_forbidden_prefix(prefix));
        }
        assert!(!is_forbidden_prefix(0));
        assert!(!is_forbidden_prefix(111));
        assert!(!is_forbidden_prefix(222));
        assert!(!is_forbidden_prefix(334));
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe("Windows 95 Retail"), Some("PPP-XXXXXXX, digits 0-8"));
        assert_eq!(describe("Windows 2000"), None);
    }
}
