pub mod emit;
pub mod field;
pub mod range;

pub use emit::MaskTerm;
pub use field::FieldSpec;
pub use range::BitRange;
