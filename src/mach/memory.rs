use super::{Cell, MEM_SIZE};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Linear memory
///
/// A fixed array of cells addressed `0..MEM_SIZE`, zero at start.
/// Variables live here from `VAR_BASE` up; the low cells are free for
/// `!` and `@` scratch use.

pub struct Memory {
    cells: Vec<Cell>,
}

impl Memory {
    pub fn new() -> Memory {
        Memory {
            cells: vec![0; MEM_SIZE],
        }
    }

    pub fn store(&mut self, addr: Cell, val: Cell) -> Result<()> {
        match self.index(addr) {
            Some(i) => {
                self.cells[i] = val;
                Ok(())
            }
            None => Err(error!(InvalidAddress; format!("invalid store address {}", addr))),
        }
    }

    pub fn fetch(&self, addr: Cell) -> Result<Cell> {
        match self.index(addr) {
            Some(i) => Ok(self.cells[i]),
            None => Err(error!(InvalidAddress; format!("invalid fetch address {}", addr))),
        }
    }

    fn index(&self, addr: Cell) -> Option<usize> {
        if addr >= 0 && (addr as usize) < self.cells.len() {
            Some(addr as usize)
        } else {
            None
        }
    }
}
