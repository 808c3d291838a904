//! Singly linked containers used by the calculator session.

pub mod queue;
pub mod stack;

pub use queue::Queue;
pub use stack::Stack;
