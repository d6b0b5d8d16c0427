const HEALTH_KEYWORDS: [&str; 13] = [
    "diet",
    "exercise",
    "workout",
    "meal",
    "food",
    "nutrition",
    "fitness",
    "weight",
    "health",
    "calories",
    "protein",
    "carbs",
    "fat",
];

pub fn is_health_query(message: &str) -> bool {
    let message = message.to_lowercase();
    HEALTH_KEYWORDS
        .iter()
        .any(|keyword| message.contains(keyword))
}

/// Cleans up generated text: trims it, collapses runs of blank lines into
/// a single one and trims every line.
pub fn format_health_response(response: &str) -> String {
    let mut collapsed = String::with_capacity(response.len());
    let mut newlines = 0;
    for c in response.trim().chars() {
        if c == '\n' {
            newlines += 1;
            continue;
        }
        if newlines > 0 {
            collapsed.push_str(if newlines == 1 { "\n" } else { "\n\n" });
            newlines = 0;
        }
        collapsed.push(c);
    }

    collapsed
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}
