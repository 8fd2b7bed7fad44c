//! Entry points for building selectors.
//!
//! Each function starts a fresh [`Selector`] holding a single fragment. A
//! fresh selector accepts any first fragment, so these never fail; chain
//! further fragments with the [`Selector`] methods.
//!
//! ```
//! use kata_css::css_selector_builder as css;
//!
//! # fn main() -> Result<(), kata_css::SelectorError> {
//! let selector = css::id("main").class("container")?.class("editable")?.stringify();
//! assert_eq!(selector, "#main.container.editable");
//! # Ok(())
//! # }
//! ```

use crate::selector::{self, Category, CombinedSelector, Selector, Stringify};

fn start(category: Category, value: &str) -> Selector {
    let mut selector = Selector::new();
    selector.append(category, value);
    selector
}

/// Start a selector with a type selector, e.g. `div`.
#[must_use]
pub fn element(value: &str) -> Selector {
    start(Category::Element, value)
}

/// Start a selector with an id selector, e.g. `#main`.
#[must_use]
pub fn id(value: &str) -> Selector {
    start(Category::Id, value)
}

/// Start a selector with a class selector, e.g. `.container`.
#[must_use]
pub fn class(value: &str) -> Selector {
    start(Category::Class, value)
}

/// Start a selector with an attribute selector, e.g. `[href$=".png"]`.
#[must_use]
pub fn attr(value: &str) -> Selector {
    start(Category::Attribute, value)
}

/// Start a selector with a pseudo-class, e.g. `:focus`.
#[must_use]
pub fn pseudo_class(value: &str) -> Selector {
    start(Category::PseudoClass, value)
}

/// Start a selector with a pseudo-element, e.g. `::before`.
#[must_use]
pub fn pseudo_element(value: &str) -> Selector {
    start(Category::PseudoElement, value)
}

/// Join two selectors around `combinator`, e.g. `div + span`.
#[must_use]
pub fn combine<A, B>(left: &A, combinator: &str, right: &B) -> CombinedSelector
where
    A: Stringify + ?Sized,
    B: Stringify + ?Sized,
{
    selector::combine(left, combinator, right)
}
