//! Small shared utilities: localStorage access, formatting, loan math.

pub mod format;
pub mod loan;
pub mod storage;
