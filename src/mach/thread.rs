use super::{Address, Cell, THREAD_MAX};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// One cell of threaded code. `Word` holds a dictionary index, bound at
/// compile time; name resolution never happens during execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    /// Push the inline cell.
    Lit(Cell),
    /// Dispatch the dictionary entry at this index.
    Word(usize),
    /// End of a compound word's body.
    Exit,
}

/// ## Threaded code store
///
/// One flat, append-only sequence holding the compiled bodies of every
/// compound word. The dictionary records each body's start offset; a
/// body runs from there to its `Exit`.

#[derive(Debug, Default)]
pub struct Thread {
    code: Vec<Code>,
    cells: usize,
}

impl Thread {
    pub fn new() -> Thread {
        Thread::default()
    }

    /// Offset where the next appended cell will land, used to pin a new
    /// definition's start before its body exists.
    pub fn here(&self) -> Address {
        self.code.len()
    }

    pub fn get(&self, ip: Address) -> Option<Code> {
        self.code.get(ip).copied()
    }

    pub fn append(&mut self, code: Code) -> Result<()> {
        // A literal carries its value inline, so it costs two of the
        // store's cells even though it is one `Code` here.
        let cost = match code {
            Code::Lit(_) => 2,
            _ => 1,
        };
        if self.cells + cost > THREAD_MAX {
            return Err(error!(OutOfMemory; "thread overflow"));
        }
        self.cells += cost;
        self.code.push(code);
        Ok(())
    }
}
