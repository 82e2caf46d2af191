use super::Cell;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Bounded data stack
///
/// Every operand and result flows through here. Overflow and underflow
/// are ordinary errors; a failed push or check leaves the contents
/// untouched.

pub struct Stack {
    capacity: usize,
    vec: Vec<Cell>,
}

impl std::fmt::Debug for Stack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl Stack {
    pub fn new(capacity: usize) -> Stack {
        Stack {
            capacity,
            vec: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.vec.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Bottom-to-top view, for `.S` and tests.
    pub fn view(&self) -> &[Cell] {
        &self.vec
    }

    /// Peek at the item `depth` slots below the top. `pick(0)` is the
    /// top of the stack.
    pub fn pick(&self, depth: usize) -> Option<Cell> {
        if depth < self.vec.len() {
            Some(self.vec[self.vec.len() - 1 - depth])
        } else {
            None
        }
    }

    pub fn push(&mut self, val: Cell) -> Result<()> {
        if self.vec.len() >= self.capacity {
            return Err(error!(StackOverflow; "stack overflow"));
        }
        log::trace!("push: {}", val);
        self.vec.push(val);
        Ok(())
    }

    /// Pops the top cell. An empty stack reports underflow and the
    /// failing operation aborts with no partial effect; recovery
    /// happens at the token level. The raw pop is only a defensive
    /// fallback behind each operation's arity check.
    pub fn pop(&mut self) -> Result<Cell> {
        match self.vec.pop() {
            Some(val) => {
                log::trace!("pop: {}", val);
                Ok(val)
            }
            None => Err(error!(StackUnderflow; "stack underflow")),
        }
    }

    /// Arity pre-check. Operations call this before popping anything so
    /// that a failed check consumes no operands.
    pub fn require(&self, op: &str, wants: usize) -> Result<()> {
        if self.vec.len() >= wants {
            Ok(())
        } else if wants == 1 {
            Err(error!(StackUnderflow; format!("{} requires 1 item", op)))
        } else {
            Err(error!(StackUnderflow; format!("{} requires {} items", op, wants)))
        }
    }
}
