//! Arbitrarily nested sequences.
//!
//! ## Purpose
//!
//! This module defines [`Nested`], a sequence whose elements are either
//! scalar leaves or further nested sequences, together with a lazy
//! depth-first iterator over its leaves.
//!
//! ## Design notes
//!
//! * **Iterative**: Traversal, depth measurement, cloning, comparison,
//!   hashing, formatting, and dropping all use an explicit heap-allocated
//!   stack, so nesting depth is bounded by memory rather than by the call
//!   stack. None of these traits are derived, since derived impls recurse.
//! * **Borrowed traversal**: [`Leaves`] yields `&T` without cloning; callers
//!   decide whether to copy the leaves out.
//! * **Literal syntax**: The [`nested!`](crate::nested) macro mirrors bracket
//!   notation, e.g. `nested![1, [2, 3]]`.
//!
//! ## Key concepts
//!
//! * **Leaf**: a `Nested::Item` value.
//! * **Depth-first order**: a list's leaves come before those of its right
//!   siblings, and left-to-right within the list.
//!
//! ## Invariants
//!
//! * Leaves are visited in depth-first, left-to-right order.
//! * Empty lists contribute no leaves.
//!
//! ## Non-goals
//!
//! * This module does not support cyclic or shared structures.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::mem;
use core::slice::{self, Iter};

// ============================================================================
// Nested Sequence
// ============================================================================

/// A value that is either a scalar leaf or a list of further nested values.
///
/// `Nested` implements `Drop` iteratively, so it is inspected by reference
/// (`match &value { .. }`) rather than destructured by value.
pub enum Nested<T> {
    /// A scalar leaf.
    Item(T),

    /// A list of nested values, possibly empty.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Build a list from any iterator of nested values.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Nested<T>>,
    {
        Self::List(items.into_iter().collect())
    }

    /// Returns `true` if this is a scalar leaf.
    #[inline]
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// Returns `true` if this is a list.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the scalar value if this is a leaf.
    #[inline]
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Self::Item(value) => Some(value),
            Self::List(_) => None,
        }
    }

    /// Iterate over all leaves in depth-first, left-to-right order.
    pub fn leaves(&self) -> Leaves<'_, T> {
        Leaves::new(slice::from_ref(self))
    }

    /// Maximum nesting depth.
    ///
    /// A scalar has depth 0; a list has depth one greater than its deepest
    /// child, so an empty list has depth 1.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut pending = Vec::from([(self, 0_usize)]);

        while let Some((node, level)) = pending.pop() {
            match node {
                Self::Item(_) => max_depth = max_depth.max(level),
                Self::List(children) => {
                    max_depth = max_depth.max(level + 1);
                    pending.extend(children.iter().map(|child| (child, level + 1)));
                }
            }
        }

        max_depth
    }

    /// Write `self` in bracket notation without recursing.
    ///
    /// Lists are wrapped in `open` and `close`; leaves are written by
    /// `write_item`.
    fn write_bracketed<F>(
        &self,
        f: &mut Formatter<'_>,
        open: &str,
        close: &str,
        write_item: F,
    ) -> fmt::Result
    where
        F: Fn(&T, &mut Formatter<'_>) -> fmt::Result,
    {
        let children = match self {
            Self::Item(value) => return write_item(value, f),
            Self::List(children) => children,
        };

        f.write_str(open)?;
        let mut pending: Vec<(Iter<'_, Nested<T>>, bool)> = Vec::from([(children.iter(), false)]);

        while let Some((iter, started)) = pending.last_mut() {
            let Some(node) = iter.next() else {
                f.write_str(close)?;
                pending.pop();
                continue;
            };

            if *started {
                f.write_str(", ")?;
            }
            *started = true;

            match node {
                Self::Item(value) => write_item(value, f)?,
                Self::List(grandchildren) => {
                    f.write_str(open)?;
                    pending.push((grandchildren.iter(), false));
                }
            }
        }

        Ok(())
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Item(value)
    }
}

impl<T> AsRef<[Nested<T>]> for Nested<T> {
    /// A list views as its children; a scalar views as a one-element slice
    /// containing itself.
    fn as_ref(&self) -> &[Nested<T>] {
        match self {
            Self::List(children) => children,
            Self::Item(_) => slice::from_ref(self),
        }
    }
}

// ============================================================================
// Iterative Drop
// ============================================================================

impl<T> Drop for Nested<T> {
    fn drop(&mut self) {
        let Self::List(children) = self else {
            return;
        };

        // Detach grandchildren before each node is dropped so that no drop
        // ever sees more than one level below it.
        let mut pending = mem::take(children);
        while let Some(mut node) = pending.pop() {
            if let Self::List(grandchildren) = &mut node {
                pending.append(grandchildren);
            }
        }
    }
}

// ============================================================================
// Clone Implementation
// ============================================================================

impl<T: Clone> Clone for Nested<T> {
    fn clone(&self) -> Self {
        let children = match self {
            Self::Item(value) => return Self::Item(value.clone()),
            Self::List(children) => children,
        };

        // Each open list keeps its source iterator and the clones built so far.
        let mut root = Vec::with_capacity(children.len());
        let mut root_iter = children.iter();
        let mut open: Vec<(Iter<'_, Nested<T>>, Vec<Nested<T>>)> = Vec::new();

        loop {
            let (next, built) = match open.last_mut() {
                Some((iter, built)) => (iter.next(), built),
                None => (root_iter.next(), &mut root),
            };

            match next {
                Some(Self::Item(value)) => built.push(Self::Item(value.clone())),
                Some(Self::List(grandchildren)) => {
                    open.push((grandchildren.iter(), Vec::with_capacity(grandchildren.len())));
                }
                None => {
                    let Some((_, finished)) = open.pop() else {
                        return Self::List(root);
                    };
                    match open.last_mut() {
                        Some((_, parent)) => parent.push(Self::List(finished)),
                        None => root.push(Self::List(finished)),
                    }
                }
            }
        }
    }
}

// ============================================================================
// Equality and Hashing
// ============================================================================

impl<T: PartialEq> PartialEq for Nested<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = Vec::from([(self, other)]);

        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Item(a), Self::Item(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (Self::List(a), Self::List(b)) => {
                    if a.len() != b.len() {
                        return false;
                    }
                    pending.extend(a.iter().zip(b));
                }
                _ => return false,
            }
        }

        true
    }
}

impl<T: Eq> Eq for Nested<T> {}

impl<T: Hash> Hash for Nested<T> {
    /// Hashes a pre-order walk: a tag per node, plus the length of each list,
    /// so equal values produce equal hash input.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = Vec::from([self]);

        while let Some(node) = pending.pop() {
            match node {
                Self::Item(value) => {
                    state.write_u8(0);
                    value.hash(state);
                }
                Self::List(children) => {
                    state.write_u8(1);
                    state.write_usize(children.len());
                    pending.extend(children.iter().rev());
                }
            }
        }
    }
}

// ============================================================================
// Formatting
// ============================================================================

impl<T: Display> Display for Nested<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_bracketed(f, "[", "]", |value, f| Display::fmt(value, f))
    }
}

impl<T: Debug> Debug for Nested<T> {
    /// Same shape as a derived `Debug` in compact form, e.g.
    /// `List([Item(1), List([Item(2)])])`. The alternate flag is passed to
    /// leaf values only.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_bracketed(f, "List([", "])", |value, f| {
            f.write_str("Item(")?;
            Debug::fmt(value, f)?;
            f.write_str(")")
        })
    }
}

// ============================================================================
// Leaf Iterator
// ============================================================================

/// Depth-first iterator over the leaves of a nested sequence.
///
/// Created by [`Nested::leaves`] or [`Leaves::new`].
#[derive(Debug)]
pub struct Leaves<'a, T> {
    stack: Vec<Iter<'a, Nested<T>>>,
}

impl<T> Clone for Leaves<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Leaves<'a, T> {
    /// Iterate over the leaves of every element of `items`, in order.
    pub fn new(items: &'a [Nested<T>]) -> Self {
        Self {
            stack: Vec::from([items.iter()]),
        }
    }
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            match top.next() {
                Some(Nested::Item(value)) => return Some(value),
                Some(Nested::List(children)) => self.stack.push(children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl<T> core::iter::FusedIterator for Leaves<'_, T> {}

// ============================================================================
// Literal Macro
// ============================================================================

/// Build a [`Nested`](crate::Nested) list using bracket notation.
///
/// Each element is either a single token tree evaluated as a scalar or a
/// bracketed group that becomes a nested list. Wrap multi-token scalars
/// (such as negative numbers) in parentheses.
///
/// ```
/// use seqkit::prelude::*;
///
/// let value = nested![1, [2, 3], [4, [(-5), 6]]];
/// assert_eq!(value.to_string(), "[1, [2, 3], [4, [-5, 6]]]");
/// ```
#[macro_export]
macro_rules! nested {
    (@element [$($inner:tt)*]) => {
        $crate::nested![$($inner)*]
    };
    (@element $value:expr) => {
        $crate::Nested::Item($value)
    };
    ($($element:tt),* $(,)?) => {
        $crate::Nested::list([$($crate::nested!(@element $element)),*])
    };
}
