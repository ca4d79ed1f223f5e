//! Retail key generation (`PPP-CCCCCCC`)

use crate::checksum::{digits_to_string, is_checksum_block, sample_block, sample_prefix, Block};
use crate::keygen::validation::parse_retail_allowed;
use crate::keygen::Scheme;
use crate::types::BLOCK_LEN;
use rand::RngCore;
use std::ops::RangeInclusive;

/// Allowed final digit of a Windows 98 retail block
pub const LAST_DIGIT_RANGE: RangeInclusive<u8> = 1..=7;

fn format_retail(prefix: u16, block: &Block) -> String {
    format!("{:03}-{}", prefix, digits_to_string(block))
}

/// Retail keys whose block never contains the digit 9.
///
/// Shared by Windows 95 and Office 97. The label only identifies the
/// product and has no effect on generation or validation.
#[derive(Debug, Clone)]
pub struct RetailSimpleScheme {
    label: String,
}

impl RetailSimpleScheme {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Scheme for RetailSimpleScheme {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        let prefix = sample_prefix(rng);
        let block = sample_block(rng, 8, |_| true);
        format_retail(prefix, &block)
    }

    fn validate(&self, key: &str) -> bool {
        let Some(fields) = parse_retail_allowed(key) else {
            return false;
        };

        fields.block.iter().all(|&d| d <= 8) && is_checksum_block(&fields.block)
    }
}

/// Windows 98 retail keys: any digits, but the block must end in 1-7.
#[derive(Debug, Clone, Copy, Default)]
pub struct Windows98RetailScheme;

impl Scheme for Windows98RetailScheme {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        let prefix = sample_prefix(rng);
        let block = sample_block(rng, 9, |b| LAST_DIGIT_RANGE.contains(&b[BLOCK_LEN - 1]));
        format_retail(prefix, &block)
    }

    fn validate(&self, key: &str) -> bool {
        let Some(fields) = parse_retail_allowed(key) else {
            return false;
        };

        is_checksum_block(&fields.block)
            && fields
                .block
                .last()
                .is_some_and(|last| LAST_DIGIT_RANGE.contains(last))
    }
}
