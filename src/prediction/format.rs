/// Rupiah without decimals. Truncates toward zero; never rounds.
///
/// Works on the float directly, so amounts beyond the `i64` range keep all
/// their digits. Non-finite amounts have no rupiah value and render as `Rp -`.
pub fn format_rupiah(amount: f64) -> String {
    if !amount.is_finite() {
        return "Rp -".to_string();
    }
    let whole = amount.trunc();
    // -0.7 truncates to -0.0, which prints without a sign
    let sign = if whole < 0.0 { "-" } else { "" };
    format!("Rp {sign}{}", group_thousands(&format!("{:.0}", whole.abs())))
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
