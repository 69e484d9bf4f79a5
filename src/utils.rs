/// `MM:SS`, minutes are not wrapped into hours.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Whole minutes, half-up.
pub fn rounded_minutes(seconds: u32) -> u32 {
    seconds.saturating_add(30) / 60
}

/// Upper-case the first character only: `ball-handling` -> `Ball-handling`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Fixed-width text progress bar for a fraction in `[0, 1]`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
