//! 符号表

pub mod symbol;
