use super::{Address, VAR_BASE, VAR_LIMIT};
use crate::error;
use crate::lang::Error;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable records
///
/// `VARIABLE` reserves memory cells starting at `VAR_BASE`, one per
/// declaration, never reused. The dictionary refers to a variable by
/// its slot here rather than by a bare address so a dangling reference
/// is representable and reported instead of silently misread.

#[derive(Debug, Default)]
pub struct Var {
    records: Vec<(Rc<str>, Address)>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    /// Reserves the next free cell for `name` and returns its slot.
    pub fn allocate(&mut self, name: Rc<str>) -> Result<usize> {
        if self.records.len() >= VAR_LIMIT {
            return Err(error!(OutOfMemory; "max VARIABLES reached"));
        }
        let slot = self.records.len();
        let addr = VAR_BASE + slot;
        log::trace!("define variable {} -> {}", name, addr);
        self.records.push((name, addr));
        Ok(slot)
    }

    pub fn address(&self, slot: usize) -> Option<Address> {
        self.records.get(slot).map(|(_, addr)| *addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_sequential_addresses() {
        let mut var = Var::new();
        assert_eq!(var.allocate("X".into()).unwrap(), 0);
        assert_eq!(var.allocate("Y".into()).unwrap(), 1);
        assert_eq!(var.address(0), Some(VAR_BASE));
        assert_eq!(var.address(1), Some(VAR_BASE + 1));
        assert_eq!(var.address(2), None);
    }

    #[test]
    fn test_limit() {
        let mut var = Var::new();
        for i in 0..VAR_LIMIT {
            var.allocate(format!("V{}", i).into()).unwrap();
        }
        let error = var.allocate("ONE-TOO-MANY".into()).unwrap_err();
        assert_eq!(error.code(), ErrorCode::OutOfMemory);
        assert_eq!(error.to_string(), "max VARIABLES reached");
    }
}
