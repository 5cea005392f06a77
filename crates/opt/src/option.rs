//! The [`Option`] sum type and its combinators.

/// A value that is either present ([`Some`](Option::Some)) or absent
/// ([`None`](Option::None)).
///
/// Deliberately shadows [`std::option::Option`]. The two variants are the
/// only states: every operation is total and defined by exhaustive case
/// analysis, so absence propagates as ordinary data instead of via panics
/// or sentinel values.
///
/// Combinators taking an alternative *value* (`and`, `or`) are eager: the
/// alternative is built by the caller regardless of the receiver's variant.
/// Combinators taking a *closure* (`and_then`, `or_else`) are lazy: the
/// closure runs at most once, and only when the receiver does not already
/// determine the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Option<T> {
    /// No value. Zero-sized payload, so a single `None` fits every `T`.
    #[default]
    None,
    /// A present value of type `T`, owned by the option.
    Some(T),
}

impl<T> Option<T> {
    /// Returns `true` if the option is a [`Some`](Option::Some) value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        match self {
            Self::Some(_) => true,
            Self::None => false,
        }
    }

    /// Returns `true` if the option is a [`Some`](Option::Some) value and the
    /// wrapped value matches the predicate.
    ///
    /// On [`None`](Option::None) the predicate is not invoked.
    #[inline]
    pub fn is_some_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if the option is a [`None`](Option::None) value.
    #[inline]
    pub const fn is_none(&self) -> bool {
        match self {
            Self::Some(_) => false,
            Self::None => true,
        }
    }

    /// Returns `true` if the option is a [`None`](Option::None) value, or is
    /// a [`Some`](Option::Some) value whose wrapped value matches the
    /// predicate.
    ///
    /// On [`None`](Option::None) the predicate is not invoked.
    #[inline]
    pub fn is_none_or(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    /// Returns `other` if the option is [`Some`](Option::Some), otherwise
    /// [`None`](Option::None).
    ///
    /// `other` is eagerly evaluated by the caller; use [`Option::and_then`]
    /// when it is expensive to build or has side effects.
    #[inline]
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Option::None,
        }
    }

    /// Returns `f` applied to the wrapped value if the option is
    /// [`Some`](Option::Some), otherwise [`None`](Option::None) without
    /// invoking `f`.
    #[inline]
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> Option<U> {
        match self {
            Self::Some(value) => f(value),
            Self::None => Option::None,
        }
    }

    /// Returns the option itself if it is [`Some`](Option::Some), otherwise
    /// `other`.
    ///
    /// `other` is eagerly evaluated by the caller; use [`Option::or_else`]
    /// when it is expensive to build or has side effects.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => other,
        }
    }

    /// Returns the option itself if it is [`Some`](Option::Some) without
    /// invoking `f`, otherwise the result of `f`.
    #[inline]
    pub fn or_else(self, f: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::None => f(),
        }
    }

    /// Maps an `Option<T>` to an `Option<U>` by applying `f` to a wrapped
    /// value. Never changes variant: `Some` in, `Some` out; `None` in,
    /// `None` out, with `f` not invoked.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Option<U> {
        match self {
            Self::Some(value) => Option::Some(f(value)),
            Self::None => Option::None,
        }
    }

    /// Converts from `&Option<T>` to `Option<&T>`, for applying combinators
    /// without consuming the option.
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }
}

impl<T> From<std::option::Option<T>> for Option<T> {
    fn from(value: std::option::Option<T>) -> Self {
        match value {
            std::option::Option::Some(value) => Self::Some(value),
            std::option::Option::None => Self::None,
        }
    }
}

impl<T> From<Option<T>> for std::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Option::Some(value) => Self::Some(value),
            Option::None => Self::None,
        }
    }
}

/// Wraps `value` in [`Some`](Option::Some).
#[inline]
pub fn some<T>(value: T) -> Option<T> {
    Option::Some(value)
}

/// The canonical absent value, compatible with `Option<T>` for every `T`.
#[inline]
pub const fn none<T>() -> Option<T> {
    Option::None
}
