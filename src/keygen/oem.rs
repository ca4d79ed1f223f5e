//! OEM key generation (`DDDYY-OEM-0CCCCCCC-NNNNN`)

use crate::checksum::{digits_to_string, is_checksum_block, random_digits, sample_block};
use crate::keygen::validation::parse_oem;
use crate::keygen::Scheme;
use rand::{Rng, RngCore};
use std::ops::RangeInclusive;

/// Valid day-of-year field
pub const DAY_RANGE: RangeInclusive<u16> = 1..=366;

/// Valid two-digit year field
pub const YEAR_RANGE: RangeInclusive<u16> = 4..=93;

const SERIAL_LEN: usize = 5;

/// Windows 95 OEM keys, also used for Windows 98 OEM.
///
/// The trailing five-digit serial is random and carries no checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct Windows95OemScheme;

impl Scheme for Windows95OemScheme {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        let day = rng.gen_range(DAY_RANGE);
        let year = rng.gen_range(YEAR_RANGE);
        let block = sample_block(rng, 9, |_| true);
        let serial = random_digits(rng, SERIAL_LEN);

        format!("{:03}{:02}-OEM-0{}-{}", day, year, digits_to_string(&block), serial)
    }

    fn validate(&self, key: &str) -> bool {
        let Some(fields) = parse_oem(key) else {
            return false;
        };

        DAY_RANGE.contains(&fields.day)
            && YEAR_RANGE.contains(&fields.year)
            && is_checksum_block(&fields.block)
    }
}
