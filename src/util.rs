/// Formats whole seconds as `m:ss`. Minutes are not wrapped into hours.
pub fn format_time(secs: u64) -> String {
    let m = secs / 60;
    let s = secs % 60;
    format!("{}:{:02}", m, s)
}

/// One decimal digit, rounding exact ties away from zero like JS `toFixed(1)`.
/// `{:.1}` alone would send 6.25 to "6.2".
pub fn format_tenths(v: f64) -> String {
    // a binary value sits exactly between two tenths only when 4v is an odd integer
    let quarters = v * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return format!("{:.1}", (v * 10.0).round() / 10.0);
    }
    format!("{:.1}", v)
}
