use super::operation;
use super::{Cell, Code, Dictionary, Memory, Opcode, Stack, Thread, Var, Word, STACK_SIZE};
use crate::error;
use crate::lang::{lex, Error, ErrorCode};
use std::fmt::Write;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## The Forth machine
///
/// One `Runtime` owns the whole machine state: data stack, linear
/// memory, variable records, dictionary and threaded-code store.
/// Nothing is process-global, so independent machines can coexist.
///
/// `enter` evaluates one line and returns everything it printed.
/// Every failure is recovered at the token that caused it; the next
/// token on the line still runs.

pub struct Runtime {
    stack: Stack,
    memory: Memory,
    vars: Var,
    dictionary: Dictionary,
    thread: Thread,
    compiling: bool,
    out: String,
}

/// The native catalog, registered in this order. `.s` is a second
/// spelling of the same primitive; lookup is case-sensitive.
const PRIMITIVES: &[(&str, Opcode)] = &[
    ("+", Opcode::Add),
    ("-", Opcode::Sub),
    ("*", Opcode::Mul),
    ("/", Opcode::Div),
    (".", Opcode::Dot),
    (".S", Opcode::DotS),
    (".s", Opcode::DotS),
    ("DUP", Opcode::Dup),
    ("DROP", Opcode::Drop),
    ("SWAP", Opcode::Swap),
    ("OVER", Opcode::Over),
    ("ROT", Opcode::Rot),
    ("!", Opcode::Store),
    ("@", Opcode::Fetch),
    ("VARIABLE", Opcode::Variable),
    ("CONSTANT", Opcode::Constant),
    ("MOD", Opcode::Mod),
    ("/MOD", Opcode::DivMod),
    ("WORDS", Opcode::Words),
    ("EMIT", Opcode::Emit),
    ("=", Opcode::Eq),
    ("<", Opcode::Lt),
    (">", Opcode::Gt),
];

/// Compound words defined in Forth itself at startup.
const BOOTSTRAP: &[&str] = &[
    ": 1+ 1 + ;",
    ": 1- 1 - ;",
    ": 2+ 2 + ;",
    ": 2- 2 - ;",
    ": 2* DUP + ;",
    ": 2/ DUP 2 / ;",
    ": NEGATE 0 SWAP - ;",
    ": NIP SWAP DROP ;",
    ": TUCK SWAP OVER ;",
    ": -ROT ROT ROT ;",
    "4 CONSTANT CELL",
    ": CELLS CELL * ;",
    ": CELL+ CELL + ;",
    "-1 CONSTANT TRUE",
    "0 CONSTANT FALSE",
    ": SQR DUP * ;",
    ": CUBE DUP DUP * * ;",
    ": .CR 13 EMIT 10 EMIT ;",
    ": 2DROP DROP DROP ;",
    ": 2DUP OVER OVER ;",
];

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new()
    }
}

impl Runtime {
    pub fn new() -> Runtime {
        let mut runtime = Runtime {
            stack: Stack::new(STACK_SIZE),
            memory: Memory::new(),
            vars: Var::new(),
            dictionary: Dictionary::new(),
            thread: Thread::new(),
            compiling: false,
            out: String::new(),
        };
        for (name, op) in PRIMITIVES {
            let defined = runtime.dictionary.define(Rc::from(*name), Word::Primitive(*op));
            debug_assert!(defined.is_ok());
        }
        for line in BOOTSTRAP {
            let output = runtime.enter(line);
            debug_assert!(output.is_empty(), "bootstrap: {}", output);
        }
        runtime
    }

    /// Evaluates one line of input and returns its printed output,
    /// diagnostics included.
    pub fn enter(&mut self, line: &str) -> String {
        let mut tokens = lex(line).into_iter();
        while let Some(token) = tokens.next() {
            if self.compiling {
                self.compile(&token);
            } else {
                self.evaluate(&token, &mut tokens);
            }
        }
        std::mem::take(&mut self.out)
    }

    /// Bottom-to-top stack contents.
    pub fn stack(&self) -> &[Cell] {
        self.stack.view()
    }

    /// True between `:` and the matching `;`. Definitions may span
    /// lines.
    pub fn is_compiling(&self) -> bool {
        self.compiling
    }

    /// Abandons any open definition, sealing what was already compiled.
    pub fn interrupt(&mut self) {
        if self.compiling {
            if let Err(error) = self.thread.append(Code::Exit) {
                self.report(error);
            }
            self.compiling = false;
        }
    }

    /// One token in normal mode: `:` opens a definition, a dictionary
    /// name dispatches, a numeric token pushes, anything else is `?`.
    fn evaluate(&mut self, token: &str, tokens: &mut dyn Iterator<Item = String>) {
        if token == ":" {
            if let Err(error) = self.begin_definition(tokens) {
                self.report(error);
            }
            return;
        }
        if let Some(index) = self.dictionary.lookup(token) {
            log::trace!("matched word: {}", token);
            if let Err(error) = self.dispatch(index, tokens) {
                self.report(error);
            }
            return;
        }
        if let Ok(value) = token.parse::<Cell>() {
            if let Err(error) = self.stack.push(value) {
                self.report(error);
            }
            return;
        }
        self.report(error!(UnknownWord; token));
    }

    /// One token inside `: … ;`. The entry for the word under
    /// construction already exists, so a body may name it; the call
    /// resolves through the dictionary at run time.
    fn compile(&mut self, token: &str) {
        if token == ";" {
            if let Err(error) = self.thread.append(Code::Exit) {
                self.report(error);
            }
            self.compiling = false;
            return;
        }
        if token == ":" {
            self.report(error!(DefinitionSyntax; "nested definition"));
            return;
        }
        let appended = if let Ok(value) = token.parse::<Cell>() {
            self.thread.append(Code::Lit(value))
        } else if let Some(index) = self.dictionary.lookup(token) {
            self.thread.append(Code::Word(index))
        } else {
            // Unknown at compile time: report and skip, keep compiling.
            self.report(error!(UnknownWord; token));
            Ok(())
        };
        if let Err(error) = appended {
            self.report(error);
        }
    }

    /// `:` registers the name as a compound word pinned to the current
    /// end of the thread store, then switches to compile mode.
    fn begin_definition(&mut self, tokens: &mut dyn Iterator<Item = String>) -> Result<()> {
        let name = match tokens.next() {
            Some(name) => name,
            None => return Err(error!(DefinitionSyntax; ": requires a name")),
        };
        log::trace!("define word {} -> {}", name, self.thread.here());
        self.dictionary
            .define(Rc::from(name.as_str()), Word::Compound(self.thread.here()))?;
        self.compiling = true;
        Ok(())
    }

    /// Resolves one dictionary entry: run a primitive, push a
    /// variable's address, push a constant, or walk a compound body.
    fn dispatch(&mut self, index: usize, tokens: &mut dyn Iterator<Item = String>) -> Result<()> {
        let (name, word) = match self.dictionary.get(index) {
            Some((name, word)) => (name.clone(), *word),
            None => return Err(error!(UnresolvedWord; "colon dispatch")),
        };
        match word {
            Word::Primitive(op) => self.primitive(op, tokens),
            Word::Constant(value) => self.stack.push(value),
            Word::Variable(slot) => match self.vars.address(slot) {
                Some(addr) => self.stack.push(addr as Cell),
                None => Err(error!(UnresolvedWord; format!("unresolved word {}", name))),
            },
            Word::Compound(start) => self.execute(start),
        }
    }

    /// Walks one compound body. Compound references recurse on the host
    /// call stack, which bounds the nesting depth. An unresolved word
    /// abandons the rest of this body only; any other failure is
    /// reported and the walk continues, so one bad cell cannot wedge
    /// the machine.
    fn execute(&mut self, start: usize) -> Result<()> {
        let mut ip = start;
        loop {
            let code = match self.thread.get(ip) {
                Some(code) => code,
                None => return Err(error!(UnresolvedWord; "thread ran past its end")),
            };
            ip += 1;
            match code {
                Code::Exit => return Ok(()),
                Code::Lit(value) => {
                    if let Err(error) = self.stack.push(value) {
                        self.report(error);
                    }
                }
                Code::Word(index) => {
                    match self.dispatch(index, &mut std::iter::empty::<String>()) {
                        Err(error) if error.code() == ErrorCode::UnresolvedWord => {
                            return Err(error)
                        }
                        Err(error) => self.report(error),
                        Ok(()) => {}
                    }
                }
            }
        }
    }

    fn primitive(&mut self, op: Opcode, tokens: &mut dyn Iterator<Item = String>) -> Result<()> {
        use Opcode::*;
        match op {
            Add => {
                self.stack.require("+", 2)?;
                let b = self.stack.pop()?;
                let a = self.stack.pop()?;
                self.stack.push(a.wrapping_add(b))
            }
            Sub => {
                self.stack.require("-", 2)?;
                let b = self.stack.pop()?;
                let a = self.stack.pop()?;
                self.stack.push(a.wrapping_sub(b))
            }
            Mul => {
                self.stack.require("*", 2)?;
                let b = self.stack.pop()?;
                let a = self.stack.pop()?;
                self.stack.push(a.wrapping_mul(b))
            }
            Div => {
                self.stack.require("/", 2)?;
                let b = self.stack.pop()?;
                let a = self.stack.pop()?;
                if b == 0 {
                    // Placeholder result keeps the stack from running
                    // short under later operations.
                    self.stack.push(0)?;
                    return Err(error!(DivisionByZero; "division by zero"));
                }
                self.stack.push(a.wrapping_div(b))
            }
            Mod => {
                self.stack.require("MOD", 2)?;
                let b = self.stack.pop()?;
                let a = self.stack.pop()?;
                let (_, r) = operation::floored_divmod(a, b)?;
                self.stack.push(r)
            }
            DivMod => {
                self.stack.require("/MOD", 2)?;
                let b = self.stack.pop()?;
                let a = self.stack.pop()?;
                let (q, r) = operation::floored_divmod(a, b)?;
                self.stack.push(r)?;
                self.stack.push(q)
            }
            Dup => {
                self.stack.require("DUP", 1)?;
                if let Some(top) = self.stack.pick(0) {
                    self.stack.push(top)?;
                }
                Ok(())
            }
            Drop => {
                self.stack.require("DROP", 1)?;
                self.stack.pop()?;
                Ok(())
            }
            Swap => {
                self.stack.require("SWAP", 2)?;
                let a = self.stack.pop()?;
                let b = self.stack.pop()?;
                self.stack.push(a)?;
                self.stack.push(b)
            }
            Over => {
                self.stack.require("OVER", 2)?;
                if let Some(second) = self.stack.pick(1) {
                    self.stack.push(second)?;
                }
                Ok(())
            }
            Rot => {
                self.stack.require("ROT", 3)?;
                let a = self.stack.pop()?;
                let b = self.stack.pop()?;
                let c = self.stack.pop()?;
                self.stack.push(b)?;
                self.stack.push(a)?;
                self.stack.push(c)
            }
            Eq => {
                self.stack.require("=", 2)?;
                let b = self.stack.pop()?;
                let a = self.stack.pop()?;
                self.stack.push(operation::truth(a == b))
            }
            Lt => {
                self.stack.require("<", 2)?;
                let b = self.stack.pop()?;
                let a = self.stack.pop()?;
                self.stack.push(operation::truth(a < b))
            }
            Gt => {
                self.stack.require(">", 2)?;
                let b = self.stack.pop()?;
                let a = self.stack.pop()?;
                self.stack.push(operation::truth(a > b))
            }
            Store => {
                self.stack.require("!", 2)?;
                let addr = self.stack.pop()?;
                let val = self.stack.pop()?;
                self.memory.store(addr, val)
            }
            Fetch => {
                self.stack.require("@", 1)?;
                let addr = self.stack.pop()?;
                let val = self.memory.fetch(addr)?;
                self.stack.push(val)
            }
            Variable => {
                let name = match tokens.next() {
                    Some(name) => name,
                    None => return Err(error!(DefinitionSyntax; "VARIABLE needs a name")),
                };
                let name: Rc<str> = Rc::from(name.as_str());
                let slot = self.vars.allocate(name.clone())?;
                self.dictionary.define(name, Word::Variable(slot))?;
                Ok(())
            }
            Constant => {
                if self.stack.is_empty() {
                    return Err(error!(StackUnderflow; "CONSTANT requires a value"));
                }
                let name = match tokens.next() {
                    Some(name) => name,
                    None => {
                        return Err(error!(DefinitionSyntax; "invalid constant declaration"))
                    }
                };
                let value = self.stack.pop()?;
                self.dictionary.define(Rc::from(name.as_str()), Word::Constant(value))?;
                Ok(())
            }
            Dot => {
                self.stack.require(".", 1)?;
                let val = self.stack.pop()?;
                let _ = write!(self.out, " {}", val);
                Ok(())
            }
            DotS => {
                let _ = write!(self.out, "<{}> ", self.stack.len());
                for val in self.stack.view() {
                    let _ = write!(self.out, "{} ", val);
                }
                self.out.push('\n');
                Ok(())
            }
            Emit => {
                self.stack.require("EMIT", 1)?;
                let val = self.stack.pop()?;
                self.out.push((val as u8) as char);
                Ok(())
            }
            Words => {
                for name in self.dictionary.names() {
                    let _ = write!(self.out, "{} ", name);
                }
                self.out.push('\n');
                Ok(())
            }
        }
    }

    /// Unknown words get the terse `? <token>` reply; everything else
    /// reports as `Error: <description>`.
    fn report(&mut self, error: Error) {
        if error.code() == ErrorCode::UnknownWord {
            let _ = writeln!(self.out, "? {}", error);
        } else {
            let _ = writeln!(self.out, "Error: {}", error);
        }
    }
}
