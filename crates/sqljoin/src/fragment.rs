//! Fragments accepted by [`Join::add`](crate::Join::add).
//!
//! A fragment is one of a closed set of kinds:
//!
//! - [`Fragment::Text`]: appended verbatim
//! - [`Fragment::Nested`]: another builder, finalized and copied in
//! - [`Fragment::Display`]: rendered once through [`std::fmt::Display`]
//! - [`Fragment::Debug`]: fallback rendering through [`std::fmt::Debug`]
//!
//! Most callers never name `Fragment` directly; [`IntoFragment`] converts
//! strings, builders and primitive values at the call site.

use crate::join::Join;
use std::borrow::Cow;
use std::fmt;

/// A single piece of text handed to a [`Join`].
pub enum Fragment<'a> {
    /// Plain text.
    Text(Cow<'a, str>),
    /// A nested builder. Its text and parameters are copied at composition time.
    Nested(&'a Join),
    /// A value that renders itself.
    Display(&'a dyn fmt::Display),
    /// Any other value, rendered through its debug representation.
    Debug(&'a dyn fmt::Debug),
}

impl<'a> Fragment<'a> {
    /// Wrap a renderable value.
    pub fn display(value: &'a dyn fmt::Display) -> Self {
        Fragment::Display(value)
    }

    /// Wrap an arbitrary value, rendered with `{:?}`.
    pub fn debug(value: &'a dyn fmt::Debug) -> Self {
        Fragment::Debug(value)
    }

    /// Name of the variant, for logging without rendering the value.
    pub fn kind(&self) -> &'static str {
        match self {
            Fragment::Text(_) => "text",
            Fragment::Nested(_) => "nested",
            Fragment::Display(_) => "display",
            Fragment::Debug(_) => "debug",
        }
    }
}

impl fmt::Debug for Fragment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Fragment::Nested(j) => f.debug_tuple("Nested").field(j).finish(),
            Fragment::Display(v) => f.debug_tuple("Display").field(&format_args!("{v}")).finish(),
            Fragment::Debug(v) => f.debug_tuple("Debug").field(v).finish(),
        }
    }
}

/// Conversion into a [`Fragment`].
pub trait IntoFragment<'a> {
    fn into_fragment(self) -> Fragment<'a>;
}

impl<'a> IntoFragment<'a> for Fragment<'a> {
    fn into_fragment(self) -> Fragment<'a> {
        self
    }
}

impl<'a> IntoFragment<'a> for &'a str {
    fn into_fragment(self) -> Fragment<'a> {
        Fragment::Text(Cow::Borrowed(self))
    }
}

impl<'a> IntoFragment<'a> for &'a String {
    fn into_fragment(self) -> Fragment<'a> {
        Fragment::Text(Cow::Borrowed(self.as_str()))
    }
}

impl<'a> IntoFragment<'a> for String {
    fn into_fragment(self) -> Fragment<'a> {
        Fragment::Text(Cow::Owned(self))
    }
}

impl<'a> IntoFragment<'a> for Cow<'a, str> {
    fn into_fragment(self) -> Fragment<'a> {
        Fragment::Text(self)
    }
}

impl<'a> IntoFragment<'a> for &'a Join {
    fn into_fragment(self) -> Fragment<'a> {
        Fragment::Nested(self)
    }
}

macro_rules! impl_into_fragment_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'a> IntoFragment<'a> for $ty {
                fn into_fragment(self) -> Fragment<'a> {
                    Fragment::Text(Cow::Owned(self.to_string()))
                }
            }
        )+
    };
}

impl_into_fragment_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);
