/// ## Native operations
///
/// The fixed catalog of primitives. Each consumes and produces a
/// documented number of stack cells and checks its own arity before
/// touching any operand.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Arithmetic
    /// `( a b -- a+b )`
    Add,
    /// `( a b -- a-b )`
    Sub,
    /// `( a b -- a*b )`
    Mul,
    /// `( a b -- a/b )` truncating; zero divisor reports and pushes 0.
    Div,
    /// `( a b -- r )` floored remainder; zero divisor pushes nothing.
    Mod,
    /// `( a b -- r q )` floored remainder and quotient.
    DivMod,

    // *** Stack shuffles
    Dup,
    Drop,
    Swap,
    Over,
    Rot,

    // *** Comparisons, -1 true and 0 false
    Eq,
    Lt,
    Gt,

    // *** Memory
    /// `( val addr -- )`
    Store,
    /// `( addr -- val )`
    Fetch,

    // *** Defining words, name taken from the input stream
    Variable,
    Constant,

    // *** Output
    /// Pop one cell and print it in decimal.
    Dot,
    /// Print the whole stack, bottom to top, without consuming it.
    DotS,
    /// Pop one cell and write its low byte as a character.
    Emit,
    /// List all dictionary names, newest first.
    Words,
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        let name = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "MOD",
            DivMod => "/MOD",
            Dup => "DUP",
            Drop => "DROP",
            Swap => "SWAP",
            Over => "OVER",
            Rot => "ROT",
            Eq => "=",
            Lt => "<",
            Gt => ">",
            Store => "!",
            Fetch => "@",
            Variable => "VARIABLE",
            Constant => "CONSTANT",
            Dot => ".",
            DotS => ".S",
            Emit => "EMIT",
            Words => "WORDS",
        };
        write!(f, "{}", name)
    }
}
