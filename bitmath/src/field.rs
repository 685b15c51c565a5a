use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::range::{BitRange, ParseError, parse_index};

/// One field specification `base=r1|r2|...`: the encoded-word bit position
/// anchoring the lowest-order chunk, plus the destination ranges in the order
/// written (highest encoded-word position first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    base: u32,
    chunks: Vec<BitRange>,
}

/// The argument itself is malformed, before any token is looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    MissingSeparator { spec: Box<str> },
    TooManySeparators { spec: Box<str> },
    EmptyChunkList { spec: Box<str> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    Format(FormatError),
    Parse(ParseError),
}

impl FieldSpec {
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Chunks in written order; emission consumes them reversed.
    pub fn chunks(&self) -> &[BitRange] {
        &self.chunks
    }
}

impl FromStr for FieldSpec {
    type Err = SpecError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let Some((base, chunks)) = spec.split_once('=') else {
            return Err(FormatError::MissingSeparator { spec: spec.into() }.into());
        };
        if chunks.contains('=') {
            return Err(FormatError::TooManySeparators { spec: spec.into() }.into());
        }

        let base = parse_index(base)?;

        if chunks.is_empty() {
            return Err(FormatError::EmptyChunkList { spec: spec.into() }.into());
        }
        let chunks = chunks
            .split('|')
            .map(BitRange::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        trace!(base, chunks = chunks.len(), "parsed field spec");

        Ok(Self { base, chunks })
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=", self.base)?;
        for (i, chunk) in self.chunks.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            write!(f, "{chunk}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingSeparator { spec } => {
                write!(f, "`{spec}` has no `=` between the base offset and the chunk list")
            }
            FormatError::TooManySeparators { spec } => {
                write!(f, "`{spec}` has more than one `=`")
            }
            FormatError::EmptyChunkList { spec } => {
                write!(f, "`{spec}` lists no chunks after the `=`")
            }
        }
    }
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::Format(err) => fmt::Display::fmt(err, f),
            SpecError::Parse(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for FormatError {}

impl std::error::Error for SpecError {}

impl From<FormatError> for SpecError {
    fn from(err: FormatError) -> Self {
        SpecError::Format(err)
    }
}

impl From<ParseError> for SpecError {
    fn from(err: ParseError) -> Self {
        SpecError::Parse(err)
    }
}
