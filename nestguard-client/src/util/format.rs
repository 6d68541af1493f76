const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";

pub fn format_updated(name: &str, fahrenheit: f64, ansi: bool) -> String {
    let msg = format!("Updated {name} to {fahrenheit:.1}°F");
    if !ansi {
        return format!("✔ {msg}");
    }
    format!("{GREEN}✔{RESET} {msg}")
}

pub fn format_failed(name: &str, reason: &str, ansi: bool) -> String {
    let reason = reason.trim_end_matches('\n');
    let msg = format!("Failed to update {name}: {reason}");
    if !ansi {
        return format!("✘ {msg}");
    }
    format!("{RED}✘{RESET} {msg}")
}
