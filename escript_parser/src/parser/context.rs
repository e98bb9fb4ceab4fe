//! Grammar contexts: `[In]`, `[Yield]`, `[Return]`
//!
//! A production parameterized by one of these flags parses its
//! sub-productions under a modified context; the parser's scoped-override
//! helper restores the previous flags on every exit path.

use bitflags::bitflags;

bitflags! {
    /// Context flags threaded through the grammar
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Context: u8 {
        /// `in` may appear as a relational operator. Cleared only inside
        /// a `for` head before the first `;`.
        const IN = 1 << 0;

        /// `yield` parses as a YieldExpression. Set only inside a
        /// generator body.
        const YIELD = 1 << 1;

        /// `return` statements are legal. Set only inside a function
        /// body.
        const RETURN = 1 << 2;
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::IN
    }
}

impl Context {
    #[inline]
    pub(crate) fn has_in(self) -> bool {
        self.contains(Self::IN)
    }

    #[inline]
    pub(crate) fn has_yield(self) -> bool {
        self.contains(Self::YIELD)
    }

    #[inline]
    pub(crate) fn has_return(self) -> bool {
        self.contains(Self::RETURN)
    }

    #[inline]
    pub(crate) fn and_in(self, set: bool) -> Self {
        self.and(Self::IN, set)
    }

    #[inline]
    pub(crate) fn and_yield(self, set: bool) -> Self {
        self.and(Self::YIELD, set)
    }

    #[inline]
    pub(crate) fn and_return(self, set: bool) -> Self {
        self.and(Self::RETURN, set)
    }

    #[inline]
    fn and(self, flag: Self, set: bool) -> Self {
        if set {
            self | flag
        } else {
            self - flag
        }
    }
}
