//! Duration flags in the `1m30s` notation.
//!
//! A value is one or more `<number><unit>` pairs. Units are `ns`, `us` (or
//! `µs`), `ms`, `s`, `m` and `h`; numbers may carry a decimal fraction. A bare
//! `0` is accepted. Signs are rejected since a negative window makes no sense.

use std::time::Duration;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Longest fraction kept; finer digits are below nanosecond resolution
const MAX_FRACTION_DIGITS: usize = 18;

/// Parse a duration such as `5s`, `5m`, `1m30s` or `1.5s`
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let value = input.trim();
    if value.is_empty() {
        return Err("duration is empty".to_string());
    }
    if value.starts_with('-') || value.starts_with('+') {
        return Err(format!("invalid duration {:?}: sign not allowed", input));
    }
    if value == "0" {
        return Ok(Duration::ZERO);
    }

    let mut rest = value;
    let mut total: u128 = 0;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if number_len == 0 {
            return Err(format!("invalid duration {:?}: expected a number", input));
        }
        let (number, tail) = rest.split_at(number_len);

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_len);

        let scale = unit_nanos(unit)
            .ok_or_else(|| match unit {
                "" => format!("invalid duration {:?}: missing unit", input),
                other => format!("invalid duration {:?}: unknown unit {:?}", input, other),
            })?;

        let nanos = scaled(number, scale)
            .ok_or_else(|| format!("invalid duration {:?}: bad number {:?}", input, number))?;
        total = total
            .checked_add(nanos)
            .ok_or_else(|| format!("invalid duration {:?}: overflow", input))?;

        rest = next;
    }

    u64::try_from(total)
        .map(Duration::from_nanos)
        .map_err(|_| format!("invalid duration {:?}: overflow", input))
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(60 * NANOS_PER_SECOND),
        "h" => Some(3_600 * NANOS_PER_SECOND),
        _ => None,
    }
}

/// `number` (optionally fractional) times `scale`, in nanoseconds
fn scaled(number: &str, scale: u128) -> Option<u128> {
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (number, ""),
    };
    if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
        return None;
    }

    let whole_value = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().ok()?
    };
    let mut nanos = whole_value.checked_mul(scale)?;

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if !fraction.is_empty() {
        let digits = fraction.parse::<u128>().ok()?;
        let divisor = 10u128.pow(fraction.len() as u32);
        nanos = nanos.checked_add(digits.checked_mul(scale)? / divisor)?;
    }

    Some(nanos)
}
