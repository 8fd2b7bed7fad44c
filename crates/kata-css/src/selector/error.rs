use strum::IntoEnumIterator;
use thiserror::Error;

use super::Category;

/// A fragment that would make the selector an invalid compound selector.
///
/// Both variants describe the same violation: the sequence of fragments is
/// not a valid compound selector. The variant and message say which rule
/// was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// An element, id, or pseudo-element was added a second time.
    #[error("Element, id and pseudo-element should not occur more than one time inside the selector")]
    Duplicate {
        /// The repeated category.
        category: Category,
    },

    /// A fragment was added after a fragment that must follow it.
    #[error("Selector parts should be arranged in the following order: {}", category_order())]
    OutOfOrder {
        /// The category that was rejected.
        category: Category,
        /// The category appended before it.
        after: Category,
    },
}

impl SelectorError {
    /// The category of the rejected fragment.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Duplicate { category } | Self::OutOfOrder { category, .. } => *category,
        }
    }
}

/// `element, id, class, attribute, pseudo-class, pseudo-element`
fn category_order() -> String {
    Category::iter()
        .map(|category| category.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_lists_every_category() {
        assert_eq!(
            category_order(),
            "element, id, class, attribute, pseudo-class, pseudo-element"
        );
    }
}
