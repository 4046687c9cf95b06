//! Digit-sum arithmetic shared by the CUSIP and ISIN checksums.
//!
//! Only the arithmetic is shared. Each scheme keeps its own alphabet and
//! decides which positions are doubled.

/// Base-10 digit sum of a value below 100, e.g. `36 -> 3 + 6`.
pub(crate) const fn digit_sum(value: u32) -> u32 {
    value / 10 + value % 10
}

/// Check digit that brings `total` up to the next multiple of ten.
///
/// The outer `% 10` maps a total already divisible by ten to `0`, not `10`.
pub(crate) const fn tens_complement(total: u32) -> u8 {
    ((10 - total % 10) % 10) as u8
}

/// Double-add-double over decimal digits, walking from the rightmost digit.
///
/// With `double_rightmost == false` the rightmost digit is taken as-is and
/// every second digit to its left is doubled, which is how a full number
/// including its check digit is verified. With `true` the rightmost digit is
/// doubled, which is how the payload is summed before a check digit exists.
pub(crate) fn double_add_double(digits: &[u8], double_rightmost: bool) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(offset, &digit)| {
            let doubled = (offset % 2 == 0) == double_rightmost;
            let value = u32::from(digit);
            digit_sum(if doubled { value * 2 } else { value })
        })
        .sum()
}
