use std::ops::{Index, IndexMut};

use crate::error::{DenseError, Result};
use crate::scalar::Scalar;

/// A dense 1-D vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// Create a zero-filled vector of length `len`.
    pub fn zeros(len: usize) -> Self {
        Vector {
            data: vec![T::zero(); len],
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Vector { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<T> {
        self.data.get(i).copied()
    }

    /// Overwrites element `i`.
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        let len = self.data.len();
        match self.data.get_mut(i) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(DenseError::IndexOutOfBounds {
                row: i,
                col: 0,
                rows: len,
                cols: 1,
            }),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Element-wise sum: `result[i] = self[i] + other[i]`.
    pub fn add(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.check_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&x, &y)| x + y)
            .collect())
    }

    /// Element-wise difference: `result[i] = self[i] - other[i]`.
    pub fn sub(&self, other: &Vector<T>) -> Result<Vector<T>> {
        self.check_len(other)?;
        Ok(self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&x, &y)| x - y)
            .collect())
    }

    /// Unconjugated dot product `sum(self[i] * other[i])`.
    pub fn dot(&self, other: &Vector<T>) -> Result<T> {
        self.check_len(other)?;
        Ok(dot_slices(&self.data, &other.data))
    }

    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &x| acc + x)
    }

    fn check_len(&self, other: &Vector<T>) -> Result<()> {
        if self.data.len() != other.data.len() {
            return Err(DenseError::LengthMismatch {
                expected: self.data.len(),
                actual: other.data.len(),
            });
        }
        Ok(())
    }
}

/// Unconjugated dot product over the common prefix of two slices.
pub fn dot_slices<T: Scalar>(a: &[T], b: &[T]) -> T {
    let mut sum = T::zero();
    for (&x, &y) in a.iter().zip(b.iter()) {
        sum += x * y;
    }
    sum
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector {
            data: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Vector { data }
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}
