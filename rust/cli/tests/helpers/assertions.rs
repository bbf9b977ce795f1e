use serde_json::Value;

pub(crate) fn commands_list() -> &'static [&'static str] {
    &["play", "deal", "cfg"]
}

pub fn assert_help_contains_commands(help_text: &str) {
    for c in commands_list() {
        assert!(
            help_text.contains(c),
            "help should contain command `{}`\n---help---\n{}\n----------",
            c,
            help_text
        );
    }
}

/// Parses every non-empty line as JSON and returns the records.
pub fn parse_jsonl(content: &str) -> Vec<Value> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<Value>(line)
                .unwrap_or_else(|e| panic!("invalid JSON at line {}: {}\n{}", i + 1, e, line))
        })
        .collect()
}

pub fn assert_valid_game_id(game_id: &str) {
    let (date, seq) = game_id
        .split_once('-')
        .unwrap_or_else(|| panic!("game id without separator: {}", game_id));
    assert_eq!(date.len(), 8, "date part of {}", game_id);
    assert_eq!(seq.len(), 6, "sequence part of {}", game_id);
    assert!(date.chars().chain(seq.chars()).all(|c| c.is_ascii_digit()));
}
