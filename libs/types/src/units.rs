//! Currency units
//!
//! All on-ledger amounts are integer counts of the smallest unit (wei, 10^-18
//! ether), held as `u128`. `rust_decimal` is used only at the edges, to turn
//! human-entered ether amounts into wei and back.

use rust_decimal::Decimal;

use crate::errors::UnitsError;

/// Integer amount in the smallest currency unit.
pub type Wei = u128;

/// Number of decimal places between ether and wei.
pub const ETHER_DECIMALS: u32 = 18;

/// 1 ether expressed in wei.
pub const WEI_PER_ETHER: Wei = 1_000_000_000_000_000_000;

/// Largest mantissa a `Decimal` can hold (2^96 - 1).
const MAX_DECIMAL_MANTISSA: Wei = (1 << 96) - 1;

/// Convert a wei amount into ether.
///
/// Fails only for amounts beyond the 96-bit mantissa range of `Decimal`
/// (roughly 79 billion ether).
pub fn to_ether(wei: Wei) -> Result<Decimal, UnitsError> {
    if wei > MAX_DECIMAL_MANTISSA {
        return Err(UnitsError::Overflow(wei.to_string()));
    }
    Ok(Decimal::from_i128_with_scale(wei as i128, ETHER_DECIMALS).normalize())
}

/// Convert an ether amount into wei.
pub fn from_ether(ether: Decimal) -> Result<Wei, UnitsError> {
    if ether.is_sign_negative() && !ether.is_zero() {
        return Err(UnitsError::Negative(ether.to_string()));
    }

    let normalized = ether.normalize();
    let scale = normalized.scale();
    if scale > ETHER_DECIMALS {
        return Err(UnitsError::TooPrecise(ether.to_string()));
    }

    let mantissa = normalized.mantissa().unsigned_abs();
    mantissa
        .checked_mul(10u128.pow(ETHER_DECIMALS - scale))
        .ok_or_else(|| UnitsError::Overflow(ether.to_string()))
}

/// Parse a decimal ether string (e.g. `"0.01"`) into wei.
pub fn parse_ether(input: &str) -> Result<Wei, UnitsError> {
    let ether = Decimal::from_str_exact(input.trim())
        .map_err(|_| UnitsError::Parse(input.to_string()))?;
    from_ether(ether)
}
