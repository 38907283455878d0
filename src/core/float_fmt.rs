/// Fixed-point float formatting that does not go through `format!` on floats.
///
/// Float-to-decimal formatting has panicked on some wasm toolchain/browser
/// combinations, and the statistics panel and particle styles are rendered
/// there. These helpers scale + round into an `i64` and format integers.

#[inline]
pub fn fmt_f64_fixed(v: f64, decimals: usize) -> String {
    if !v.is_finite() {
        return if v.is_nan() {
            "NaN".to_string()
        } else if v.is_sign_positive() {
            "Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }

    // Clamp decimals to something reasonable to avoid huge powers.
    let decimals = decimals.min(9);
    let scale_i64 = 10_i64.checked_pow(decimals as u32).unwrap_or(1_i64);

    let scaled = (v * scale_i64 as f64).round();
    if !scaled.is_finite() || scaled.abs() > (i64::MAX as f64) {
        return if v.is_sign_negative() {
            "-Inf".to_string()
        } else {
            "Inf".to_string()
        };
    }

    let scaled_i = scaled as i64;
    let abs_i = scaled_i.unsigned_abs();
    let int_part = abs_i / scale_i64 as u64;
    let frac_part = abs_i % scale_i64 as u64;

    let mut out = String::new();
    if scaled_i < 0 {
        out.push('-');
    }
    out.push_str(&int_part.to_string());

    if decimals > 0 {
        out.push('.');
        let frac_str = frac_part.to_string();
        for _ in 0..decimals.saturating_sub(frac_str.len()) {
            out.push('0');
        }
        out.push_str(&frac_str);
    }

    out
}
