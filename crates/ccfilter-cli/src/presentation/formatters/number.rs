/// Milliseconds as seconds with one decimal, e.g. `5.0s`
pub fn format_duration_ms(ms: i64) -> String {
    format!("{:.1}s", ms as f64 / 1000.0)
}

/// US dollars with four decimals, e.g. `$0.0123`
pub fn format_cost_usd(usd: f64) -> String {
    format!("${:.4}", usd)
}

pub fn format_compact(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}k", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}
