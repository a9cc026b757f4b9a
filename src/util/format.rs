//! Display formatting for prices, dates and course metadata.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a USD price with thousands separators and no cents, e.g. `$1,200`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_price(price: f64) -> String {
    let whole = price.round().abs() as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${out}")
}

/// Format an ISO 8601 timestamp as a long date, e.g. `January 2, 2026`.
///
/// Falls back to the input string when it does not start with `YYYY-MM-DD`.
pub fn format_date(iso: &str) -> String {
    let date = iso.split('T').next().unwrap_or(iso);
    let mut parts = date.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return iso.to_owned();
    };
    let (Ok(month), Ok(day)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return iso.to_owned();
    };
    let Some(month_name) = month.checked_sub(1).and_then(|m| MONTHS.get(m)) else {
        return iso.to_owned();
    };
    format!("{month_name} {day}, {year}")
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Human label for a course type, e.g. `diploma` → `Diploma Program`.
pub fn course_type_label(course_type: &str) -> String {
    match course_type {
        "diploma" => "Diploma Program".to_owned(),
        "bachelor" => "Bachelor Program".to_owned(),
        "certification" => "Certification".to_owned(),
        other => other.to_owned(),
    }
}
