use super::{Address, Cell, Opcode, DICT_MAX};
use crate::error;
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// What a dictionary name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    /// A native operation.
    Primitive(Opcode),
    /// A variable record slot; resolving pushes the variable's address.
    Variable(usize),
    /// Resolving pushes the value, fixed at definition time.
    Constant(Cell),
    /// A colon definition; the address is its thread start offset.
    Compound(Address),
}

/// ## Dictionary
///
/// Append-only registry of every named word. Redefining a name appends
/// a second entry; it never replaces the first. Lookup is a forward
/// scan from entry zero, so the *earliest* definition of a name wins
/// and later redefinitions are unreachable by name. Canonical Forth
/// resolves the other way; this machine's order is kept deliberately.
/// Names match case-sensitively, exactly as registered.

pub struct Dictionary {
    entries: Vec<(Rc<str>, Word)>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary { entries: vec![] }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry and returns its index.
    pub fn define(&mut self, name: Rc<str>, word: Word) -> Result<usize> {
        if self.entries.len() >= DICT_MAX {
            return Err(error!(OutOfMemory; "dictionary full"));
        }
        self.entries.push((name, word));
        Ok(self.entries.len() - 1)
    }

    /// First entry whose name matches, scanning in insertion order.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n.as_ref() == name)
    }

    pub fn get(&self, index: usize) -> Option<&(Rc<str>, Word)> {
        self.entries.get(index)
    }

    /// Names newest first, the order `WORDS` prints.
    pub fn names(&self) -> impl Iterator<Item = &Rc<str>> {
        self.entries.iter().rev().map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_earliest_match_wins() {
        let mut dictionary = Dictionary::new();
        let first = dictionary.define("THREE".into(), Word::Constant(3)).unwrap();
        dictionary.define("THREE".into(), Word::Constant(9)).unwrap();
        assert_eq!(dictionary.lookup("THREE"), Some(first));
    }

    #[test]
    fn test_case_sensitive() {
        let mut dictionary = Dictionary::new();
        dictionary
            .define("DUP".into(), Word::Primitive(Opcode::Dup))
            .unwrap();
        assert!(dictionary.lookup("dup").is_none());
        assert!(dictionary.lookup("DUP").is_some());
    }

    #[test]
    fn test_names_newest_first() {
        let mut dictionary = Dictionary::new();
        dictionary.define("A".into(), Word::Constant(1)).unwrap();
        dictionary.define("B".into(), Word::Constant(2)).unwrap();
        let names: Vec<&str> = dictionary.names().map(|n| n.as_ref()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_full() {
        let mut dictionary = Dictionary::new();
        for i in 0..DICT_MAX {
            dictionary
                .define(format!("W{}", i).into(), Word::Constant(i as Cell))
                .unwrap();
        }
        let error = dictionary
            .define("OVERFULL".into(), Word::Constant(0))
            .unwrap_err();
        assert_eq!(error.code(), ErrorCode::OutOfMemory);
    }
}
