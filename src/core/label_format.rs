/// Magnitudes above this switch tick labels to `mantissa E<magnitude>` form.
pub const SCIENTIFIC_MAGNITUDE_THRESHOLD: i32 = 4;

/// Renders a tick value for the given spacing magnitude.
///
/// - `magnitude > 4`: `value / 10^magnitude` with no decimals, then `E<magnitude>`.
/// - `0..=4`: integer with thousands separators.
/// - `< 0`: fixed point with `-magnitude` decimals, thousands separators kept.
#[must_use]
pub fn format_tick_label(value: f64, magnitude: i32) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    if magnitude > SCIENTIFIC_MAGNITUDE_THRESHOLD {
        let mantissa = value / 10f64.powi(magnitude);
        let text = normalize_negative_zero(format!("{mantissa:.0}"));
        return format!("{text} E{magnitude}");
    }

    let precision = if magnitude >= 0 {
        0
    } else {
        magnitude.unsigned_abs() as usize
    };
    group_thousands(&normalize_negative_zero(format!("{value:.precision$}")))
}

fn normalize_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|ch| ch == '0' || ch == '.') => rest.to_owned(),
        _ => text,
    }
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
