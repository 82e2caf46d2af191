pub struct Error {
    code: ErrorCode,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            message: String::new(),
        }
    }

    pub fn message<S: Into<String>>(self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            code: self.code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    StackUnderflow,
    StackOverflow,
    DivisionByZero,
    InvalidAddress,
    UnknownWord,
    UnresolvedWord,
    DefinitionSyntax,
    OutOfMemory,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.message.is_empty() {
            let code_str = match self.code {
                ErrorCode::StackUnderflow => "stack underflow",
                ErrorCode::StackOverflow => "stack overflow",
                ErrorCode::DivisionByZero => "division by zero",
                ErrorCode::InvalidAddress => "invalid address",
                ErrorCode::UnknownWord => "unknown word",
                ErrorCode::UnresolvedWord => "unresolved word",
                ErrorCode::DefinitionSyntax => "definition syntax",
                ErrorCode::OutOfMemory => "out of memory",
            };
            write!(f, "{}", code_str)
        } else {
            write!(f, "{}", self.message)
        }
    }
}
