pub const REPEAT_COUNT: usize = 10;

/// `"1. x, 2. x, ..., 10. x"`
pub fn repeat_line(line: &str) -> String {
    (1..=REPEAT_COUNT)
        .map(|i| format!("{}. {}", i, line))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn third_word(words: &[String]) -> Option<&str> {
    words.get(2).map(String::as_str)
}
