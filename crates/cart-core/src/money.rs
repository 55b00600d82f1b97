//! Price Formatting
//!
//! Renders exact integer amounts for display. Integer arithmetic only.

/// Format an amount in the smallest currency unit.
///
/// Rupees use the `₹` sign and Indian digit grouping (`₹1,50,000.00`);
/// anything else is rendered as `<CODE> 1,500.00`.
pub fn format_price(cents: u128, currency: &str) -> String {
    let major = cents / 100;
    let minor = cents % 100;
    let digits = major.to_string();

    if currency.eq_ignore_ascii_case("inr") {
        format!("₹{}.{minor:02}", group_indian(&digits))
    } else {
        format!("{} {}.{minor:02}", currency.to_uppercase(), group_digits(&digits, 3))
    }
}

/// Last three digits, then groups of two (lakh / crore)
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    format!("{},{tail}", group_digits(head, 2))
}

fn group_digits(digits: &str, size: usize) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / size);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % size == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
