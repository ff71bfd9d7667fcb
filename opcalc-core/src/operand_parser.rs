/// Parses an operand the way C's `atoi()` does: leading whitespace is
/// skipped, an optional sign is consumed, and then decimal digits are
/// read until the first non-digit. Anything else just stops the scan, so
/// malformed input quietly becomes 0.
///
/// Values that don't fit in an `i32` wrap around.
pub fn parse_operand<T: AsRef<str>>(value: T) -> i32 {
    let mut bytes = value
        .as_ref()
        .bytes()
        .skip_while(|byte| byte.is_ascii_whitespace())
        .peekable();

    let is_negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };

    let mut number: i32 = 0;
    for byte in bytes {
        if !byte.is_ascii_digit() {
            break;
        }
        number = number
            .wrapping_mul(10)
            .wrapping_add((byte - b'0') as i32);
    }

    if is_negative {
        number.wrapping_neg()
    } else {
        number
    }
}
