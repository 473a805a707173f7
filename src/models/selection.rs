/// A menu choice typed at the console prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// `0`, or end of input with nothing typed.
    Exit,
    /// Any other integer, as typed (1-based).
    Position(i64),
    /// Text that is not an integer.
    Invalid(String),
}

impl Selection {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Exit;
        }

        match trimmed.parse::<i64>() {
            Ok(0) => Self::Exit,
            Ok(position) => Self::Position(position),
            Err(_) => Self::Invalid(trimmed.to_string()),
        }
    }

    /// 0-based index into the device list, if this is a position.
    pub fn index(&self) -> Option<i64> {
        match self {
            Self::Position(position) => Some(position.saturating_sub(1)),
            _ => None,
        }
    }
}
