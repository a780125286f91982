//! Core conversion building blocks: the symbol tables, the validator predicates,
//! and the two converters. These are pure primitives consumed by the
//! high-level `api` module.
pub mod arabic;
pub mod roman;
pub mod symbols;
pub mod validator;
