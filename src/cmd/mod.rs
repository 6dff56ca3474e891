pub mod evaluate;
pub mod optimal;
