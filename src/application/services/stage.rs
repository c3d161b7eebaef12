use std::fmt;

/// Steps of the office conversion pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Bind,
    PerFile,
    Merge,
    Format,
    Register,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Bind => "bind",
            Stage::PerFile => "per_file",
            Stage::Merge => "merge",
            Stage::Format => "format",
            Stage::Register => "register",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
