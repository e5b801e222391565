//! Word dictionary loading is a load-time contract: exactly 256 unique
//! entries or a hard error.

use std::fs::File;
use std::io::Write;

use wirecode::error::WordListError;
use wirecode::{ExchangeId, WordList, code};

fn synthetic_words() -> Vec<String> {
    (0..256).map(|i| format!("aa{i:03}")).collect()
}

#[test]
fn loads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wordlist.json");
    serde_json::to_writer(File::create(&path).unwrap(), &synthetic_words()).unwrap();

    let words = WordList::from_json_reader(File::open(&path).unwrap()).unwrap();
    assert_eq!(words.word(0), "aa000");
    assert_eq!(words.index_of("aa255"), Some(255));
}

#[test]
fn loads_line_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wordlist.txt");
    let mut file = File::create(&path).unwrap();
    for word in synthetic_words() {
        writeln!(file, "{word}").unwrap();
    }
    writeln!(file).unwrap(); // trailing blank line is ignored
    drop(file);

    let words = WordList::from_lines_reader(File::open(&path).unwrap()).unwrap();
    assert_eq!(words.word(255), "aa255");
}

#[test]
fn short_list_is_a_hard_error() {
    let mut words = synthetic_words();
    words.pop();
    let json = serde_json::to_string(&words).unwrap();
    assert!(matches!(
        WordList::from_json_reader(json.as_bytes()),
        Err(WordListError::WrongCount(255))
    ));
}

#[test]
fn malformed_json_is_a_hard_error() {
    assert!(matches!(
        WordList::from_json_reader(&b"{\"not\": \"an array\"}"[..]),
        Err(WordListError::Json(_))
    ));
}

#[test]
fn custom_dictionary_round_trips() {
    let words = WordList::from_words(synthetic_words()).unwrap();
    let id = ExchangeId::from_bytes([10, 250, 1, 2, 3, 4, 5]);
    let encoded = code::encode(&id, &words);
    assert!(encoded.starts_with("aa010-aa250-"));
    assert_eq!(code::decode(&encoded, &words).unwrap().id, id);
}
