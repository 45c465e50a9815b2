use ethers::types::U256;

/// Decimal exponent used for every balance, native and token alike.
pub const DEFAULT_DECIMALS: u8 = 18;

/// Number of significant fractional digits kept after the first non-zero one.
const SIGNIFICANT_FRACTION_DIGITS: usize = 4;

// 10^78 does not fit in 256 bits.
const MAX_U256_EXP10: u8 = 77;

/// Split `amount` into its integer and fractional parts at `decimals`.
pub fn split_units(amount: U256, decimals: u8) -> (U256, U256) {
    if decimals > MAX_U256_EXP10 {
        return (U256::zero(), amount);
    }
    amount.div_mod(U256::exp10(decimals as usize))
}

/// Format a balance in minimal units as a grouped, truncated decimal string,
/// e.g. `1234567890123456789012` with 18 decimals becomes `1,234.5678`.
pub fn format_units(amount: U256, decimals: u8) -> String {
    let (integer_part, fractional_part) = split_units(amount, decimals);
    let mut result = group_thousands(&integer_part.to_string());

    if fractional_part.is_zero() {
        return result;
    }

    let padded = format!(
        "{:0>width$}",
        fractional_part.to_string(),
        width = decimals as usize
    );
    let mut fraction = padded.trim_end_matches('0');

    if fraction.len() > SIGNIFICANT_FRACTION_DIGITS {
        let first_non_zero = fraction.find(|c: char| c != '0').unwrap_or(0);
        let keep = (first_non_zero + SIGNIFICANT_FRACTION_DIGITS).min(fraction.len());
        fraction = &fraction[..keep];
    }

    result.push('.');
    result.push_str(fraction);
    result
}

pub fn format_balance(amount: U256) -> String {
    format_units(amount, DEFAULT_DECIMALS)
}

/// Insert a comma every three digits counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
