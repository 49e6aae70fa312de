use std::collections::HashMap;
use std::hash::Hash;
use std::thread;
use std::time::Duration;

use rand::Rng;

/// Format a millisecond duration as a human string, e.g. "1h 2m 3s".
pub fn format_elapsed(ms: u64) -> String {
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Format seconds as a clock string: MM:SS, or HH:MM:SS past an hour.
pub fn format_clock(secs: u64) -> String {
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Rounded integer percentage. Zero when the total is zero.
pub fn percentage(value: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (value as f64 / total as f64 * 100.0).round() as u32
}

/// Group items by a key, preserving first-seen group order.
pub fn group_by<'a, T, K, F>(items: &'a [T], key: F) -> Vec<(K, Vec<&'a T>)>
where
    K: Eq + Clone,
    F: Fn(&T) -> K,
{
    let mut groups: Vec<(K, Vec<&T>)> = Vec::new();
    for item in items {
        let k = key(item);
        match groups.iter_mut().find(|(gk, _)| *gk == k) {
            Some((_, members)) => members.push(item),
            None => groups.push((k, vec![item])),
        }
    }
    groups
}

/// Drop later items whose key was already seen, keeping the first occurrence.
pub fn dedup_by_key<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

/// Stable sort by a primary key, breaking ties with a secondary key.
pub fn sort_by_two_keys<T, K1, K2, F1, F2>(items: &mut [T], primary: F1, secondary: F2)
where
    K1: Ord,
    K2: Ord,
    F1: Fn(&T) -> K1,
    F2: Fn(&T) -> K2,
{
    items.sort_by(|a, b| {
        primary(a)
            .cmp(&primary(b))
            .then_with(|| secondary(a).cmp(&secondary(b)))
    });
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Convert camelCase to Title Case: "subjectScores" -> "Subject Scores".
pub fn camel_to_title(s: &str) -> String {
    let mut out = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push(' ');
        }
        if i == 0 {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out.trim().to_string()
}

/// Lowercase slug with single separators, e.g. "General Knowledge" -> "general-knowledge".
pub fn slugify(s: &str) -> String {
    let mut out = String::new();
    let mut last_sep = true;
    for c in s.trim().to_lowercase().chars() {
        if c.is_alphanumeric() {
            out.push(c);
            last_sep = false;
        } else if c.is_whitespace() || c == '-' || c == '_' {
            if !last_sep {
                out.push('-');
                last_sep = true;
            }
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// HSL to "#rrggbb". Hue in degrees, saturation and lightness in percent.
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    let (r, g, b) = hsl_to_rgb(h, s, l);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let l = l / 100.0;
    let a = s * l.min(1.0 - l) / 100.0;
    let f = |n: f64| {
        let k = (n + h / 30.0) % 12.0;
        let color = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * color).round() as u8
    };
    (f(0.0), f(8.0), f(4.0))
}

pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Parse a CSV string into header-keyed rows. Rows whose field count does
/// not match the header are skipped.
pub fn parse_csv(csv: &str, delimiter: char) -> Vec<HashMap<String, String>> {
    let mut lines = csv.lines();
    let headers: Vec<String> = match lines.next() {
        Some(line) => line.split(delimiter).map(|h| h.trim().to_string()).collect(),
        None => return Vec::new(),
    };

    let mut rows = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let values: Vec<&str> = line.split(delimiter).collect();
        if values.len() != headers.len() {
            continue;
        }
        let mut row = HashMap::new();
        for (header, value) in headers.iter().zip(values) {
            row.insert(header.clone(), value.trim().to_string());
        }
        rows.push(row);
    }
    rows
}

/// Serialize rows to CSV. Fields are quoted when they contain the
/// delimiter, a quote, or a newline.
pub fn to_csv(headers: &[&str], rows: &[Vec<String>], delimiter: char) -> String {
    let esc = |field: &str| -> String {
        if field.contains(delimiter) || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    };

    let mut out = headers.join(&delimiter.to_string());
    out.push('\n');
    for row in rows {
        let line: Vec<String> = row.iter().map(|f| esc(f)).collect();
        out.push_str(&line.join(&delimiter.to_string()));
        out.push('\n');
    }
    out
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}

pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Retry a fallible operation with exponential backoff. The delay doubles
/// after each failed attempt; the last error is returned when all attempts
/// are exhausted.
pub fn retry<T, E, F>(mut op: F, max_attempts: u32, base_delay: Duration) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
{
    let mut delay = base_delay;
    let mut attempt = 1;
    loop {
        match op() {
            Ok(v) => return Ok(v),
            Err(e) => {
                if attempt >= max_attempts {
                    return Err(e);
                }
                thread::sleep(delay);
                delay *= 2;
                attempt += 1;
            }
        }
    }
}
