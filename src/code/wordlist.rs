//! The 256-entry word dictionary used for the first two identifier bytes.
//!
//! Each byte value 0-255 maps 1:1 to a lowercase five-letter word. A list of
//! any other length cannot address two of the identifier's seven bytes, so
//! loading one is a hard error, never a silent restriction.

use std::collections::HashMap;
use std::io::Read;
use std::sync::OnceLock;

use log::{debug, warn};

use crate::error::WordListError;

/// Required number of dictionary entries (one per byte value).
pub const WORD_COUNT: usize = 256;
/// Every dictionary word is exactly this many characters.
pub const WORD_LENGTH: usize = 5;

const BUILTIN_WORDS: [&str; WORD_COUNT] = [
    "ember", "laser", "amber", "apple", "aspen", "badge", "baker", "banjo",
    "basil", "beach", "beard", "berry", "birch", "bison", "blaze", "bloom",
    "board", "brass", "bravo", "bread", "brick", "bride", "brisk", "brook",
    "broom", "candy", "cargo", "cedar", "chalk", "charm", "chess", "chief",
    "chili", "cider", "cigar", "civic", "cliff", "clock", "cloud", "clown",
    "coast", "cobra", "cocoa", "comet", "coral", "crane", "crash", "creek",
    "crepe", "crisp", "crown", "crumb", "cubic", "curve", "cycle", "daily",
    "dairy", "dance", "delta", "diner", "disco", "diver", "dozen", "draft",
    "drama", "dream", "drift", "drink", "eagle", "early", "earth", "ebony",
    "elbow", "elder", "elite", "envoy", "epoch", "equal", "essay", "ether",
    "evoke", "exact", "fable", "fancy", "feast", "fence", "ferry", "fiber",
    "field", "fifty", "flame", "flash", "fleet", "flint", "flock", "flora",
    "flour", "flute", "focal", "focus", "forge", "forum", "frame", "fresh",
    "frost", "fruit", "gamma", "gauge", "gecko", "genre", "giant", "glade",
    "glass", "globe", "gloss", "goose", "gorge", "grace", "grain", "grand",
    "grape", "grasp", "grass", "gravy", "green", "grill", "grove", "guard",
    "guest", "guide", "gusto", "habit", "handy", "haven", "hazel", "heart",
    "hedge", "heron", "hippo", "hobby", "honey", "horse", "hotel", "house",
    "hover", "human", "humor", "hyena", "igloo", "image", "index", "ingot",
    "inlet", "ivory", "jelly", "jewel", "joint", "jolly", "judge", "juice",
    "jumbo", "kayak", "kiosk", "knack", "knoll", "koala", "label", "labor",
    "lapel", "larch", "latch", "laugh", "layer", "ledge", "lemon", "level",
    "lever", "lilac", "limbo", "linen", "llama", "lodge", "lotus", "loyal",
    "lunar", "lunch", "lyric", "macro", "magma", "maize", "mango", "maple",
    "march", "marsh", "mason", "match", "medal", "melon", "mercy", "merge",
    "merit", "metal", "meter", "micro", "model", "moose", "motel", "motif",
    "mound", "mount", "mouse", "movie", "mural", "music", "naval", "nerve",
    "niche", "night", "ninja", "noble", "nomad", "north", "notch", "novel",
    "nurse", "nylon", "oasis", "ocean", "olive", "onion", "opera", "orbit",
    "otter", "ounce", "oxide", "ozone", "paint", "panda", "pansy", "paper",
    "parka", "pasta", "patch", "peach", "pearl", "pedal", "penny", "perch",
    "petal", "phone", "photo", "piano", "pilot", "pinch", "pixel", "pizza",];

/// Byte <-> word lookup table.
///
/// Built once and shared read-only; lookups never mutate.
#[derive(Debug)]
pub struct WordList {
    words: Vec<String>,
    index: HashMap<String, u8>,
}

impl WordList {
    /// The built-in dictionary, constructed once per process.
    pub fn builtin() -> &'static WordList {
        static BUILTIN: OnceLock<WordList> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            WordList::from_words(BUILTIN_WORDS.iter().map(|w| w.to_string()).collect())
                .expect("built-in word list is valid")
        })
    }

    /// Build a dictionary from an ordered list of words.
    ///
    /// Words are case-normalized to lowercase. Fails unless there are exactly
    /// 256 unique entries.
    pub fn from_words(words: Vec<String>) -> Result<Self, WordListError> {
        if words.len() != WORD_COUNT {
            warn!(
                "rejecting word list with {} entries (need {})",
                words.len(),
                WORD_COUNT
            );
            return Err(WordListError::WrongCount(words.len()));
        }
        let words: Vec<String> = words.into_iter().map(|w| w.to_lowercase()).collect();
        let mut index = HashMap::with_capacity(WORD_COUNT);
        for (i, word) in words.iter().enumerate() {
            if index.insert(word.clone(), i as u8).is_some() {
                warn!("rejecting word list with duplicate entry {word:?}");
                return Err(WordListError::Duplicate(word.clone()));
            }
        }
        debug!("loaded word list with {WORD_COUNT} entries");
        Ok(Self { words, index })
    }

    /// Load a dictionary from a JSON array of strings.
    pub fn from_json_reader(reader: impl Read) -> Result<Self, WordListError> {
        let words: Vec<String> = serde_json::from_reader(reader)?;
        Self::from_words(words)
    }

    /// Load a dictionary from newline-separated text, skipping blank lines.
    pub fn from_lines_reader(mut reader: impl Read) -> Result<Self, WordListError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::from_words(words)
    }

    /// The word for a byte value.
    pub fn word(&self, byte: u8) -> &str {
        &self.words[byte as usize]
    }

    /// The byte value for a word, if present. Lookup is case-insensitive.
    pub fn index_of(&self, word: &str) -> Option<u8> {
        self.index.get(&word.to_lowercase()).copied()
    }
}
