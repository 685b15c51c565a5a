use std::fmt;
use std::str::FromStr;

/// An inclusive interval `[lo, hi]` of bit positions in the reconstructed
/// value, written `hi:lo`, or a single index for a one-bit range.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BitRange {
    lo: u32,
    hi: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    BadIndex { token: Box<str> },
    TooManySeparators { token: Box<str> },
    DescendingRange { hi: u32, lo: u32 },
}

impl BitRange {
    pub fn new(hi: u32, lo: u32) -> Result<Self, ParseError> {
        if hi < lo {
            return Err(ParseError::DescendingRange { hi, lo });
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(self) -> u32 {
        self.lo
    }

    pub fn hi(self) -> u32 {
        self.hi
    }

    /// Number of bits covered, always at least 1.
    pub fn width(self) -> u32 {
        self.hi - self.lo + 1
    }
}

/// Parses one bit index, used both for range endpoints and for the base
/// offset of a field spec.
pub(crate) fn parse_index(token: &str) -> Result<u32, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::BadIndex { token: token.into() })
}

impl FromStr for BitRange {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.split_once(':') {
            None => {
                let bit = parse_index(token)?;
                Ok(Self { lo: bit, hi: bit })
            }
            Some((hi, lo)) => {
                if lo.contains(':') {
                    return Err(ParseError::TooManySeparators {
                        token: token.into(),
                    });
                }
                Self::new(parse_index(hi)?, parse_index(lo)?)
            }
        }
    }
}

impl fmt::Display for BitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lo == self.hi {
            write!(f, "{}", self.lo)
        } else {
            write!(f, "{}:{}", self.hi, self.lo)
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadIndex { token } => write!(f, "`{token}` is not a valid bit index"),
            ParseError::TooManySeparators { token } => {
                write!(f, "`{token}` has more than one `:`")
            }
            ParseError::DescendingRange { hi, lo } => {
                write!(f, "range `{hi}:{lo}` puts its upper bit below its lower bit")
            }
        }
    }
}

impl std::error::Error for ParseError {}
