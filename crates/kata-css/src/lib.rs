//! Fluent builder for CSS compound selector strings.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector builder** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Element, id, class, attribute, pseudo-class, and pseudo-element fragments
//!   - Fragment ordering and uniqueness validation
//!   - Specificity counting
//!
//! - **Combination** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Joining two selectors around a combinator token
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Matching selectors against a DOM

/// Free-function entry points that start a new selector.
pub mod css_selector_builder;
/// Selector fragments, the builder, and combination.
pub mod selector;

pub use selector::{
    Category, CombinedSelector, Combinator, Selector, SelectorError, Specificity, Stringify,
};
