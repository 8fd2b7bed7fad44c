//! CSS compound selector building
//!
//! This module builds selector text per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/), enforcing the
//! fragment order and the uniqueness rules of a compound selector.

mod combine;
mod error;

use std::fmt;
use std::ops::{Add, AddAssign};

use strum_macros::{Display, EnumIter};

pub use combine::{CombinedSelector, Combinator, Stringify, combine};
pub use error::SelectorError;

/// The kind of a selector fragment.
///
/// Variants are declared in the only order fragments may be appended, and
/// the discriminant is the fragment's ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `span`
    Element = 1,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    Id = 2,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.highlight`, `.btn`
    Class = 3,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[src$=".png"]`
    Attribute = 4,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:focus`, `:first-child`
    PseudoClass = 5,

    /// [§ 3.6.1 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::placeholder`
    PseudoElement = 6,
}

impl Category {
    /// Rank of this category, 1 (element) through 6 (pseudo-element).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Whether a compound selector may hold at most one fragment of this kind.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Write `value` with this category's syntax onto `out`.
    fn write_fragment(self, out: &mut String, value: &str) {
        let (prefix, suffix) = match self {
            Self::Element => ("", ""),
            Self::Id => ("#", ""),
            Self::Class => (".", ""),
            Self::Attribute => ("[", "]"),
            Self::PseudoClass => (":", ""),
            Self::PseudoElement => ("::", ""),
        };
        out.push_str(prefix);
        out.push_str(value);
        out.push_str(suffix);
    }

    /// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
    const fn specificity(self) -> Specificity {
        match self {
            // "count the number of ID selectors in the selector (= A)"
            Self::Id => Specificity(1, 0, 0),
            // "count the number of class selectors, attributes selectors,
            // and pseudo-classes in the selector (= B)"
            Self::Class | Self::Attribute | Self::PseudoClass => Specificity(0, 1, 0),
            // "count the number of type selectors and pseudo-elements
            // in the selector (= C)"
            Self::Element | Self::PseudoElement => Specificity(0, 0, 1),
        }
    }
}

/// [§ 17 Calculating Specificity](https://www.w3.org/TR/selectors-4/#specificity-rules)
/// "A selector's specificity is calculated for a given element as follows:
///  - count the number of ID selectors in the selector (= A)
///  - count the number of class selectors, attributes selectors, and pseudo-classes in the selector (= B)
///  - count the number of type selectors and pseudo-elements in the selector (= C)
///
/// Specificities are compared by comparing the three components in order."
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (A, B, C) components.
    #[must_use]
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self(a, b, c)
    }
}

impl Add for Specificity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(
            self.0.saturating_add(rhs.0),
            self.1.saturating_add(rhs.1),
            self.2.saturating_add(rhs.2),
        )
    }
}

impl AddAssign for Specificity {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// Fragments are appended in place and every appending method returns the
/// same selector, so calls chain with `?`. A rejected fragment leaves the
/// selector untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    text: String,
    /// Category of the most recent fragment, `None` while empty.
    last: Option<Category>,
    element_used: bool,
    id_used: bool,
    pseudo_element_used: bool,
    specificity: Specificity,
}

impl Selector {
    /// An empty selector that accepts any first fragment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a type selector, written verbatim.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an element was already added,
    /// [`SelectorError::OutOfOrder`] if any later fragment was already added.
    pub fn element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.push(Category::Element, value)
    }

    /// Append `#value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if an id was already added,
    /// [`SelectorError::OutOfOrder`] if a class, attribute, pseudo-class or
    /// pseudo-element was already added.
    pub fn id(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.push(Category::Id, value)
    }

    /// Append `.value`. Classes may repeat.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if an attribute, pseudo-class or
    /// pseudo-element was already added.
    pub fn class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.push(Category::Class, value)
    }

    /// Append `[value]`. The attribute expression is not parsed, so
    /// `href$=".png"` yields `[href$=".png"]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-class or pseudo-element was
    /// already added.
    pub fn attr(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.push(Category::Attribute, value)
    }

    /// Append `:value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OutOfOrder`] if a pseudo-element was already added.
    pub fn pseudo_class(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.push(Category::PseudoClass, value)
    }

    /// Append `::value`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::Duplicate`] if a pseudo-element was already added.
    pub fn pseudo_element(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        self.push(Category::PseudoElement, value)
    }

    /// The selector text built so far.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    /// Specificity of the fragments added so far.
    #[must_use]
    pub const fn specificity(&self) -> Specificity {
        self.specificity
    }

    /// Category of the most recently added fragment.
    #[must_use]
    pub const fn last_category(&self) -> Option<Category> {
        self.last
    }

    /// Whether no fragment has been added yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    const fn is_used(&self, category: Category) -> bool {
        match category {
            Category::Element => self.element_used,
            Category::Id => self.id_used,
            Category::PseudoElement => self.pseudo_element_used,
            Category::Class | Category::Attribute | Category::PseudoClass => false,
        }
    }

    /// Check that `category` may follow the fragments already added.
    ///
    /// The duplicate rule is checked before the order rule.
    fn validate(&self, category: Category) -> Result<(), SelectorError> {
        if self.is_used(category) {
            return Err(SelectorError::Duplicate { category });
        }
        match self.last {
            Some(after) if after > category => Err(SelectorError::OutOfOrder { category, after }),
            _ => Ok(()),
        }
    }

    fn push(&mut self, category: Category, value: &str) -> Result<&mut Self, SelectorError> {
        self.validate(category)?;
        self.append(category, value);
        Ok(self)
    }

    /// Append without validating. Callers must have run `validate`, or
    /// start from an empty selector.
    pub(crate) fn append(&mut self, category: Category, value: &str) {
        category.write_fragment(&mut self.text, value);
        self.last = Some(category);
        self.specificity += category.specificity();
        match category {
            Category::Element => self.element_used = true,
            Category::Id => self.id_used = true,
            Category::PseudoElement => self.pseudo_element_used = true,
            Category::Class | Category::Attribute | Category::PseudoClass => {}
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
