//! Number formatting for currency, percentages, and basis points.
//!
//! Output matches the en-US conventions the dashboard copy is written in:
//! `$` prefix, comma thousands separators, no currency decimals.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format whole US dollars, e.g. `$125,000,000`.
///
/// Rounds half away from zero. Negative amounts render as `-$1,234`.
pub fn format_usd(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}${}", group_thousands(&digits))
}

/// Format a figure already expressed in millions, e.g. `$315M`.
pub fn format_musd(amount_musd: f64) -> String {
    format!("{}M", format_usd(amount_musd))
}

/// Format with a fixed number of decimals, e.g. `99.80`.
///
/// Ties round half away from zero (`82.5` prints `83`), not to even.
/// Negative zero prints as `0.00`, never `-0.00`.
pub fn format_fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let rounded = if scale.is_finite() { (value * scale).round() / scale } else { value };
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.digits$}")
}

/// Fixed decimals with an explicit `+` on positive values.
pub fn format_signed_fixed(value: f64, digits: usize) -> String {
    let body = format_fixed(value, digits);
    if value > 0.0 { format!("+{body}") } else { body }
}

/// Signed basis points, e.g. `-15bps` or `+5bps`; zero reads `Neutral`.
pub fn format_bps(bps: i32) -> String {
    match bps.signum() {
        0 => "Neutral".to_owned(),
        1 => format!("+{bps}bps"),
        _ => format!("{bps}bps"),
    }
}

/// Render a percentage rate the way the loan tapes quote it: `5.75%`, `8%`.
pub fn format_rate(rate: f64) -> String {
    format!("{rate}%")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
