//! Partial statement dates (`M/D`, `M/D/YY`, `M/D/YYYY`) → `YYYY-MM-DD`.
//!
//! No calendar validation happens here: `2/30` becomes `YYYY-02-30`. OCR rows
//! are kept as printed and any correction is left to the reader.

fn is_digits(s: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// Normalize a date token, filling a missing year with `default_year`.
///
/// Two-digit years always land in the 2000s (`99` → `2099`).
/// Returns `None` only when the token is not shaped like a statement date.
pub fn normalize_date(token: &str, default_year: i32) -> Option<String> {
    let parts: Vec<&str> = token.trim().split('/').collect();
    let (month, day, year) = match parts.as_slice() {
        [m, d] => (*m, *d, None),
        [m, d, y] => (*m, *d, Some(*y)),
        _ => return None,
    };

    if !is_digits(month, 1, 2) || !is_digits(day, 1, 2) {
        return None;
    }

    let year = match year {
        None => format!("{default_year:04}"),
        Some(y) if is_digits(y, 2, 2) => format!("20{y}"),
        Some(y) if is_digits(y, 4, 4) => y.to_string(),
        Some(_) => return None,
    };

    Some(format!("{year}-{month:0>2}-{day:0>2}"))
}
