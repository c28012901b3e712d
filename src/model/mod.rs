//! Domain model for tracked issues.

pub mod issue;

pub use issue::Issue;
