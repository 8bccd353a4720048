//! Shared data model and table logic for the admin data board.
//!
//! Everything in this crate is plain Rust with no DOM dependency: the
//! per-team column schemas, record/identifier handling, the filter
//! engine, the paginator, and the dynamic form model. The `frontend`
//! crate wires these into Yew components; keeping the logic here keeps
//! it unit-testable with `cargo test`.

pub mod filter;
pub mod form;
pub mod page;
pub mod record;
pub mod request;
pub mod schema;
