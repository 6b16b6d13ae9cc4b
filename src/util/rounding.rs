/// Rounds `value` to `places` decimal places, ties away from zero.
///
/// Operates on the shortest decimal representation of the double (the text
/// `Display` produces), so `0.1234565` rounds to `0.123457` even though its
/// binary value sits just below the tie.
pub fn round_half_up(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let text = value.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    if frac_part.len() <= places {
        return value;
    }

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes()[places] >= b'5' {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - places;
    let mut rounded = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        rounded.push('-');
    }
    rounded.extend(digits[..split].iter().map(|d| char::from(b'0' + d)));
    if places > 0 {
        rounded.push('.');
        rounded.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }

    rounded.parse().unwrap_or(value)
}
