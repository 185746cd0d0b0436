//! Storage collaborator for the ledger engine.
//!
//! The engine itself is pure; this crate is the stateful edge it talks to.
//! [`BooksStore`] is the interface the engine consumes (account and entry
//! listings, the validated append, cascading deletes) and [`InMemoryBooks`]
//! is the reference implementation used by tests and embedders. Write
//! serialization (at most one concurrent accept per company) lives here, not
//! in the engine.

pub mod books;
pub mod in_memory;

#[cfg(test)]
mod integration_tests;

pub use books::{BooksStore, StoreError};
pub use in_memory::InMemoryBooks;
