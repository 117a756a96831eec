use crate::error::IndexOutOfRange;

/// Write `index` as a big-endian binary string of exactly `digits` characters
/// (left-padded with zeros).
///
/// Fails if `index` is negative, if `digits` is zero, or if `index > 2^digits - 1`.
///
/// ```rust
/// use biodivine_algo_link_variants::enumeration::encode;
///
/// assert_eq!(encode(5, 5).unwrap(), "00101");
/// assert_eq!(encode(11, 4).unwrap(), "1011");
/// assert!(encode(16, 4).is_err());
/// ```
pub fn encode(index: i64, digits: u32) -> Result<String, IndexOutOfRange> {
    if index < 0 {
        return Err(IndexOutOfRange::Negative(index));
    }
    if digits < 1 {
        return Err(IndexOutOfRange::NoDigits);
    }
    // For 63 or more digits, every non-negative `i64` is representable.
    if digits < 63 {
        let max = (1i64 << digits) - 1;
        if index > max {
            return Err(IndexOutOfRange::ExceedsDigits {
                index,
                digits,
                max,
            });
        }
    }

    Ok(format!("{:0width$b}", index, width = digits as usize))
}

/// Inverse of [`encode`]: read a big-endian binary string back into an index.
///
/// Returns `None` if the string is empty, contains anything other than `0`/`1`, or
/// describes a value that does not fit into a non-negative `i64`.
pub fn decode(bits: &str) -> Option<i64> {
    if bits.is_empty() {
        return None;
    }
    let mut result: i64 = 0;
    for digit in bits.chars() {
        let bit = match digit {
            '0' => 0,
            '1' => 1,
            _ => return None,
        };
        result = result.checked_mul(2)?.checked_add(bit)?;
    }
    Some(result)
}
