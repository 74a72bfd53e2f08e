use crate::model::service::price_to_cents;

/// Formats a price as Brazilian reais, e.g. `R$ 1.234,50`.
///
/// The symbol is followed by a non-breaking space, thousands are grouped with
/// `.` and two decimal digits follow a `,`.
pub fn format_brl(price: f64) -> String {
    let cents = price_to_cents(price);
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();

    format!(
        "{}R$\u{a0}{},{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    grouped
}

pub fn format_duration(minutes: i32) -> String {
    format!("{} min", minutes)
}

/// Parses a price typed by the user.
///
/// Accepts both `45.50` and the Brazilian `45,50`. Dots are read as thousands
/// separators when a comma is present (`1.234,50`) or when every dot is
/// followed by exactly three digits (`1.234`, `1.000.000`).
pub fn parse_price(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let normalized = if input.contains(',') {
        input.replace('.', "").replace(',', ".")
    } else if is_dot_grouped(input) {
        input.replace('.', "")
    } else {
        input.to_string()
    };

    normalized.parse::<f64>().ok()
}

/// `1.234` or `12.345.678`: a 1-3 digit lead followed by dot-separated groups of three.
fn is_dot_grouped(input: &str) -> bool {
    let mut groups = input.split('.');
    let lead = groups.next().unwrap_or_default();
    let is_digits = |group: &str| group.chars().all(|c| c.is_ascii_digit());

    let mut rest = groups.peekable();
    if rest.peek().is_none() || lead.is_empty() || lead.len() > 3 || !is_digits(lead) {
        return false;
    }

    rest.all(|group| group.len() == 3 && is_digits(group))
}
