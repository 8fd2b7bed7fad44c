use std::fmt;

use kata_common::warning::warn_once;

use super::{Selector, Specificity};

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// [`combine`] takes the token as text, so these are a convenience for the
/// four standard tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// Whitespace: `A B`
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// `A > B`
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// `A + B`
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// `A ~ B`
    SubsequentSibling,
}

impl Combinator {
    /// The token written between the two selectors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
        }
    }

    /// Look up a standard combinator by its exact token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::NextSibling),
            "~" => Some(Self::SubsequentSibling),
            _ => None,
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can appear on either side of [`combine`].
pub trait Stringify {
    /// The selector text.
    fn stringify(&self) -> String;

    /// The summed specificity of every fragment in the selector.
    fn specificity(&self) -> Specificity;
}

impl Stringify for Selector {
    fn stringify(&self) -> String {
        Self::stringify(self)
    }

    fn specificity(&self) -> Specificity {
        Self::specificity(self)
    }
}

impl Stringify for CombinedSelector {
    fn stringify(&self) -> String {
        Self::stringify(self)
    }

    fn specificity(&self) -> Specificity {
        Self::specificity(self)
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two selectors joined by a combinator. Only its text and specificity can
/// be read; it can be combined again but takes no more fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    text: String,
    specificity: Specificity,
}

impl CombinedSelector {
    /// The selector text, e.g. `div + span`.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    /// Component-wise sum of both operands' specificity.
    #[must_use]
    pub const fn specificity(&self) -> Specificity {
        self.specificity
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Join `left` and `right` as `"{left} {combinator} {right}"`.
///
/// The combinator is used verbatim and fragment ordering is not checked
/// across the two operands. Tokens other than the four standard ones are
/// reported once through the warning system.
#[must_use]
pub fn combine<A, B>(left: &A, combinator: &str, right: &B) -> CombinedSelector
where
    A: Stringify + ?Sized,
    B: Stringify + ?Sized,
{
    if Combinator::from_token(combinator).is_none() {
        warn_once(
            "CSS",
            &format!("non-standard combinator '{combinator}' used verbatim"),
        );
    }

    CombinedSelector {
        text: format!("{} {combinator} {}", left.stringify(), right.stringify()),
        specificity: left.specificity() + right.specificity(),
    }
}
