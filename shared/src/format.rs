pub const DEFAULT_DECIMALS: usize = 2;
/// Largest fraction-digit count `Intl.NumberFormat` accepts.
pub const MAX_DECIMALS: usize = 100;
// Every finite f64 has an exact decimal expansion at most this long.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// en-US number formatting: fixed fraction digits, comma thousands separators,
/// halves rounded away from zero. `decimals` is capped at [`MAX_DECIMALS`].
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let decimals = decimals.min(MAX_DECIMALS);
    let (int_part, frac_part) = round_half_away_from_zero(value.abs(), decimals);

    let rounds_to_zero = int_part.bytes().chain(frac_part.bytes()).all(|b| b == b'0');
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + decimals + 2);
    if value < 0.0 && !rounds_to_zero {
        out.push('-');
    }

    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if decimals > 0 {
        out.push('.');
        out.push_str(&frac_part);
    }
    out
}

/// Page-supplied fraction-digit count, or the reason it is out of range.
pub fn checked_decimals(decimals: Option<u32>) -> Result<usize, String> {
    let Some(decimals) = decimals else {
        return Ok(DEFAULT_DECIMALS);
    };
    usize::try_from(decimals)
        .ok()
        .filter(|d| *d <= MAX_DECIMALS)
        .ok_or_else(|| format!("maximumFractionDigits value is out of range: {decimals}"))
}

/// Integer and fraction digits of a non-negative finite `abs`, rounded on
/// its exact binary value.
fn round_half_away_from_zero(abs: f64, decimals: usize) -> (String, String) {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, abs);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(decimals))
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|next| *next >= b'5');

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let frac = digits.split_off(split);
    (
        String::from_utf8_lossy(&digits).into_owned(),
        String::from_utf8_lossy(&frac).into_owned(),
    )
}
