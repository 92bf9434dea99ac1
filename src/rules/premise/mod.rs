//! Premise formatting: predicates, element-list helpers and the rule set.

pub mod helpers;
pub mod predicates;
pub mod rules;

#[cfg(test)]
mod tests;
