use std::cmp::Ordering;

use tracing::trace;

use crate::field::FieldSpec;
use crate::range::BitRange;

/// One chunk pinned at its extraction position in the encoded word.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MaskTerm {
    pub offset: u32,
    pub range: BitRange,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Shift {
    Left(u32),
    Right(u32),
}

impl MaskTerm {
    /// Binary literal of `width` one-bits followed by `offset` zero-bits.
    pub fn mask(&self) -> String {
        format!(
            "0b{}{}",
            "1".repeat(self.range.width() as usize),
            "0".repeat(self.offset as usize)
        )
    }

    /// How the masked field moves to its destination. `None` when the
    /// extraction position and `range.lo` already agree.
    pub fn shift(&self) -> Option<Shift> {
        match self.range.lo().cmp(&self.offset) {
            Ordering::Greater => Some(Shift::Left(self.range.lo() - self.offset)),
            Ordering::Less => Some(Shift::Right(self.offset - self.range.lo())),
            Ordering::Equal => None,
        }
    }

    /// One output line, a disjunct of the caller's bitwise-OR accumulation.
    pub fn render(&self, word: &str) -> String {
        let mask = self.mask();
        let range = self.range;
        match self.shift() {
            Some(Shift::Left(n)) => format!("| ({word} & {mask}) << {n} // imm[{range}]"),
            Some(Shift::Right(n)) => format!("| ({word} & {mask}) >> {n} // imm[{range}]"),
            None => format!("| ({word} & {mask}) // imm[{range}]"),
        }
    }
}

impl FieldSpec {
    /// Terms in extraction order: the written chunk list reversed, each
    /// anchored where the previous one ended, starting at `base`.
    pub fn terms(&self) -> impl Iterator<Item = MaskTerm> + '_ {
        self.chunks()
            .iter()
            .rev()
            .scan(self.base(), |offset, &range| {
                let term = MaskTerm {
                    offset: *offset,
                    range,
                };
                *offset += range.width();
                Some(term)
            })
    }

    /// All lines for this field, each newline-terminated.
    pub fn render(&self, word: &str) -> String {
        let mut out = String::new();
        for term in self.terms() {
            trace!(
                offset = term.offset,
                width = term.range.width(),
                shift = ?term.shift(),
                "emit term"
            );
            out.push_str(&term.render(word));
            out.push('\n');
        }
        out
    }
}
