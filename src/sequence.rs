//! Indexable sequences and the lazy-array combinator engine.
//!
//! A [`Sequence`] is anything with a length and a pure `index → value` accessor. Fixed-arity
//! aggregates satisfy the contract for free (a [`Vector`] is a sequence of its elements, a
//! [`Matrix`] a sequence of its column vectors), and [`LazyArray`] is the canonical
//! generator-backed instance with no storage at all.
//!
//! Every combinator is defined purely in terms of [`len`][Sequence::len] and
//! [`at`][Sequence::at], so all conforming types inherit the whole set. Nothing is memoized:
//! each `at` call recomputes its value through the entire combinator chain. That makes the
//! engine trivially cheap to construct and safe to share, but it also means generators must be
//! *pure functions of the index* — a generator that reads captured mutable state can observe
//! different values on every evaluation, and nothing here will cache the first answer.

use crate::{Matrix, Vector};

/// An indexable, fixed-length sequence of values.
///
/// See the [module documentation][self] for the evaluation model. Out-of-range access is an
/// explicit panic for every implementation in this crate, matching slice indexing.
pub trait Sequence {
    type Item;

    /// The number of elements in this sequence.
    fn len(&self) -> usize;

    /// Returns the element at `index`, computing it on demand.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn at(&self, index: usize) -> Self::Item;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn first(&self) -> Option<Self::Item> {
        (!self.is_empty()).then(|| self.at(0))
    }

    fn last(&self) -> Option<Self::Item> {
        (!self.is_empty()).then(|| self.at(self.len() - 1))
    }

    /// Returns the element in the middle of the sequence (rounding up for even lengths).
    fn middle(&self) -> Option<Self::Item> {
        (!self.is_empty()).then(|| self.at(self.len() / 2))
    }

    /// Everything after the first element.
    fn rest(self) -> Slice<Self>
    where
        Self: Sized,
    {
        self.skip(1)
    }

    /// Skips the first `n` elements. Skipping more elements than there are yields an empty
    /// sequence.
    fn skip(self, n: usize) -> Slice<Self>
    where
        Self: Sized,
    {
        let start = n.min(self.len());
        let len = self.len() - start;
        Slice {
            seq: self,
            start,
            len,
        }
    }

    /// Keeps only the first `n` elements. Taking more elements than there are yields the whole
    /// sequence.
    fn take(self, n: usize) -> Slice<Self>
    where
        Self: Sized,
    {
        let len = n.min(self.len());
        Slice {
            seq: self,
            start: 0,
            len,
        }
    }

    /// Selects `count` elements starting at `start`, clamped to the available range.
    fn slice(self, start: usize, count: usize) -> Slice<Self>
    where
        Self: Sized,
    {
        let start = start.min(self.len());
        let len = count.min(self.len() - start);
        Slice {
            seq: self,
            start,
            len,
        }
    }

    /// Applies a closure to each element. The closure runs on every access.
    fn map<U, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map { seq: self, f }
    }

    /// Combines the sequences element-wise, up to the length of the shorter one.
    fn zip_with<S, U, F>(self, other: S, f: F) -> ZipWith<Self, S, F>
    where
        Self: Sized,
        S: Sequence,
        F: Fn(Self::Item, S::Item) -> U,
    {
        ZipWith {
            a: self,
            b: other,
            f,
        }
    }

    /// Combines each element with its successor, yielding `len - 1` results.
    fn pairwise<U, F>(self, f: F) -> Pairwise<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item, Self::Item) -> U,
    {
        Pairwise { seq: self, f }
    }

    /// Combines each element with its successor, wrapping the last element around to the first,
    /// yielding `len` results.
    ///
    /// This is the natural way to visit the edges of a closed polygon given its corners.
    fn pairwise_wrapping<U, F>(self, f: F) -> PairwiseWrapping<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item, Self::Item) -> U,
    {
        PairwiseWrapping { seq: self, f }
    }

    /// Left fold over all elements.
    fn fold<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        let mut acc = init;
        for i in 0..self.len() {
            acc = f(acc, self.at(i));
        }
        acc
    }

    fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        (0..self.len()).all(|i| predicate(self.at(i)))
    }

    fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        (0..self.len()).any(|i| predicate(self.at(i)))
    }

    /// Evaluates every element into a [`Vec`], the one eager escape hatch.
    fn to_vec(&self) -> Vec<Self::Item> {
        (0..self.len()).map(|i| self.at(i)).collect()
    }
}

/// A sequence backed by nothing but a length and a generator closure.
///
/// # Examples
///
/// Procedural point generation without intermediate storage:
///
/// ```
/// # use metria::*;
/// let corners = LazyArray::new(4, |i| {
///     let theta = Angle::from_turns(i as f64 / 4.0);
///     vec2(theta.cos(), theta.sin())
/// });
/// // Summing the edge lengths of the inscribed square:
/// let perimeter = corners
///     .pairwise_wrapping(|a, b| a.distance_to(b))
///     .fold(0.0, |acc, edge| acc + edge);
/// assert_approx_eq!(perimeter, 4.0 * 2.0f64.sqrt());
/// ```
#[derive(Clone, Copy)]
pub struct LazyArray<F> {
    len: usize,
    generator: F,
}

impl<F> LazyArray<F> {
    /// Creates a lazy array of `len` elements produced by `generator`.
    ///
    /// `generator` must be a pure function of the index; it is re-invoked on every access.
    pub fn new<T>(len: usize, generator: F) -> Self
    where
        F: Fn(usize) -> T,
    {
        Self { len, generator }
    }
}

impl<T, F: Fn(usize) -> T> Sequence for LazyArray<F> {
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn at(&self, index: usize) -> T {
        assert!(
            index < self.len,
            "index out of bounds: the len is {} but the index is {}",
            self.len,
            index
        );
        (self.generator)(index)
    }
}

/// Lazy element-wise transformation, returned by [`Sequence::map`].
#[derive(Clone, Copy)]
pub struct Map<S, F> {
    seq: S,
    f: F,
}

impl<S: Sequence, U, F: Fn(S::Item) -> U> Sequence for Map<S, F> {
    type Item = U;

    fn len(&self) -> usize {
        self.seq.len()
    }

    fn at(&self, index: usize) -> U {
        (self.f)(self.seq.at(index))
    }
}

/// A contiguous sub-range of a sequence, returned by [`Sequence::skip`], [`Sequence::take`] and
/// [`Sequence::slice`].
#[derive(Clone, Copy)]
pub struct Slice<S> {
    seq: S,
    start: usize,
    len: usize,
}

impl<S: Sequence> Sequence for Slice<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.len
    }

    fn at(&self, index: usize) -> S::Item {
        assert!(
            index < self.len,
            "index out of bounds: the len is {} but the index is {}",
            self.len,
            index
        );
        self.seq.at(self.start + index)
    }
}

/// Lazy element-wise combination of two sequences, returned by [`Sequence::zip_with`].
#[derive(Clone, Copy)]
pub struct ZipWith<A, B, F> {
    a: A,
    b: B,
    f: F,
}

impl<A: Sequence, B: Sequence, U, F: Fn(A::Item, B::Item) -> U> Sequence for ZipWith<A, B, F> {
    type Item = U;

    fn len(&self) -> usize {
        self.a.len().min(self.b.len())
    }

    fn at(&self, index: usize) -> U {
        assert!(
            index < self.len(),
            "index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );
        (self.f)(self.a.at(index), self.b.at(index))
    }
}

/// Lazy adjacent-pair combination, returned by [`Sequence::pairwise`].
#[derive(Clone, Copy)]
pub struct Pairwise<S, F> {
    seq: S,
    f: F,
}

impl<S: Sequence, U, F: Fn(S::Item, S::Item) -> U> Sequence for Pairwise<S, F> {
    type Item = U;

    fn len(&self) -> usize {
        self.seq.len().saturating_sub(1)
    }

    fn at(&self, index: usize) -> U {
        assert!(
            index < self.len(),
            "index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );
        (self.f)(self.seq.at(index), self.seq.at(index + 1))
    }
}

/// Lazy adjacent-pair combination that wraps around, returned by
/// [`Sequence::pairwise_wrapping`].
#[derive(Clone, Copy)]
pub struct PairwiseWrapping<S, F> {
    seq: S,
    f: F,
}

impl<S: Sequence, U, F: Fn(S::Item, S::Item) -> U> Sequence for PairwiseWrapping<S, F> {
    type Item = U;

    fn len(&self) -> usize {
        self.seq.len()
    }

    fn at(&self, index: usize) -> U {
        assert!(
            index < self.len(),
            "index out of bounds: the len is {} but the index is {}",
            self.len(),
            index
        );
        (self.f)(self.seq.at(index), self.seq.at((index + 1) % self.seq.len()))
    }
}

/// A vector is a sequence of its elements.
impl<T: Copy, const N: usize> Sequence for Vector<T, N> {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> T {
        self[index]
    }
}

/// A matrix is a sequence of its column vectors.
impl<T: Copy, const R: usize, const C: usize> Sequence for Matrix<T, R, C> {
    type Item = Vector<T, R>;

    fn len(&self) -> usize {
        C
    }

    fn at(&self, index: usize) -> Vector<T, R> {
        self.col(index)
    }
}

impl<S: Sequence> Sequence for &S {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn at(&self, index: usize) -> S::Item {
        (**self).at(index)
    }
}
