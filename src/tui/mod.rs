//! Terminal UI building blocks shared by the higher level orchestration code.

pub mod input;
pub mod theme;
