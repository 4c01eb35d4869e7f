// User word and constant storage

use rustc_hash::FxHashMap;

use crate::memory::Cell;
use crate::parser::words::Body;

/// The dictionary: user-defined words and named constants.
///
/// Names are stored case-folded.  User words rebind freely (the latest
/// definition wins); constants never rebind.  Collision checks against
/// built-ins and variables live in the engine, which can see all the name
/// tables at once.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashMap<String, Body>,
    constants: FxHashMap<String, Cell>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary {
            words: FxHashMap::default(),
            constants: FxHashMap::default(),
        }
    }

    pub fn is_user_word(&self, name: &str) -> bool {
        self.words.contains_key(name)
    }

    /// The stored body for a user word.
    pub fn word_body(&self, name: &str) -> Option<&Body> {
        self.words.get(name)
    }

    /// Bind (or rebind) a user word.
    pub fn define_word(&mut self, name: String, body: Body) {
        self.words.insert(name, body);
    }

    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    pub fn constant(&self, name: &str) -> Option<Cell> {
        self.constants.get(name).copied()
    }

    pub fn define_constant(&mut self, name: String, value: Cell) {
        self.constants.insert(name, value);
    }
}
