//! Elementwise Algebra
//!
//! Arithmetic, comparison and reductions over coordinate values. Every
//! operation returns a new coordinate; the operands are never modified.

pub mod compare;
pub mod elementwise;
pub mod operators;
pub mod reduction;

pub use elementwise::Operand;
