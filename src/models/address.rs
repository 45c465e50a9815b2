use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::CustomError;

const ADDRESS_REGEX: &str = r"^(0x)?[0-9a-fA-F]{40}$";

lazy_static! {
    static ref ADDRESS_RE: Regex = Regex::new(ADDRESS_REGEX).unwrap();
}

/// Casing is left untouched; mixed-case addresses are accepted as-is.
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

pub fn validate_address(address: &str) -> Result<(), CustomError> {
    if is_valid_address(address) {
        Ok(())
    } else {
        Err(CustomError::InvalidAddressError(address.to_string()))
    }
}
