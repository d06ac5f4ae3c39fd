use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use hangterm::games::hangman::BUILTIN_WORDS;
use hangterm::{WordList, WordListError, WordSource};

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("hangterm-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_empty_list_rejected() {
    let empty: [&str; 0] = [];
    assert!(matches!(WordList::new(empty), Err(WordListError::Empty)));
    assert!(matches!(WordList::new(["", "   "]), Err(WordListError::Empty)));
}

#[test]
fn test_candidates_normalized() {
    let words = WordList::new(["  Beach ", "", "Credit Card"]).unwrap();
    assert_eq!(words.words(), &["beach".to_string(), "credit card".to_string()]);
}

#[test]
fn test_single_candidate() {
    let mut words = WordList::new(["rush"]).unwrap();
    for _ in 0..5 {
        assert_eq!(words.next_secret(), "rush");
    }
}

#[test]
fn test_seeded_is_deterministic() {
    let mut first = WordList::builtin_seeded(7);
    let mut second = WordList::builtin_seeded(7);
    for _ in 0..20 {
        assert_eq!(first.next_secret(), second.next_secret());
    }
}

#[test]
fn test_draws_cover_candidates() {
    let mut words = WordList::seeded(["a", "b", "c"], 1).unwrap();
    let seen: HashSet<String> = (0..300).map(|_| words.next_secret()).collect();
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_builtin_draws_from_builtin_set() {
    let mut words = WordList::builtin();
    for _ in 0..20 {
        let secret = words.next_secret();
        assert!(BUILTIN_WORDS.contains(&secret.as_str()));
    }
}

#[test]
fn test_load_text_file() {
    let path = temp_file("words.txt", "# animals\ncat\n\n  Dog  \nsea lion\n");
    let words = WordList::from_path(&path, Some(3)).unwrap();
    assert_eq!(
        words.words(),
        &["cat".to_string(), "dog".to_string(), "sea lion".to_string()]
    );
    fs::remove_file(path).unwrap();
}

#[test]
fn test_load_json_file() {
    let path = temp_file("words.json", r#"["Ferris", "cargo crate"]"#);
    let words = WordList::from_path(&path, None).unwrap();
    assert_eq!(words.words(), &["ferris".to_string(), "cargo crate".to_string()]);
    fs::remove_file(path).unwrap();
}

#[test]
fn test_bad_json_file() {
    let path = temp_file("bad.json", r#"{"words": 3}"#);
    assert!(matches!(WordList::from_path(&path, None), Err(WordListError::Json { .. })));
    fs::remove_file(path).unwrap();
}

#[test]
fn test_comment_only_file_is_empty() {
    let path = temp_file("comments.txt", "# nothing here\n\n");
    assert!(matches!(WordList::from_path(&path, None), Err(WordListError::Empty)));
    fs::remove_file(path).unwrap();
}

#[test]
fn test_missing_file() {
    let err = WordList::from_path("/nonexistent/hangterm/words.txt", None).unwrap_err();
    assert!(matches!(err, WordListError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/hangterm/words.txt"));
}
