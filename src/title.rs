/// Derives a display title from a filename stem: underscore-separated
/// segments, first character of each forced to uppercase (the rest is left
/// untouched), joined with single spaces.
///
/// Consecutive underscores yield empty segments that still take part in the
/// join, so `"a__b"` becomes `"A  B"`. Accepted behavior, kept as-is.
pub fn format_title(stem: &str) -> String {
    stem.split('_')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
