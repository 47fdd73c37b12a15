//! Staff record validation.
//!
//! Rules are plain data tables ([`rules`]) evaluated by a pure-logic
//! evaluator ([`evaluator`]). Every rule is checked; failures accumulate in
//! table order.

pub mod evaluator;
pub mod rules;
