use std::slice;

use tracing::{debug, warn};

use crate::error::{BoxError, Result};
use crate::shape::{Geometry, Shape};

// =============================================================================
// ShapeBox: bounded, ordered collection of shapes
// =============================================================================

/// A box holding at most `capacity` shapes in insertion order.
///
/// Indices are positions in the current sequence, not stable identities:
/// extracting a shape shifts every later shape down by one. Capacity and
/// indices are signed so that negative values can be passed in and rejected
/// through the normal error path.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBox {
    shapes: Vec<Shape>,
    capacity: isize,
}

impl ShapeBox {
    /// Creates an empty box. A capacity of zero or below is accepted and
    /// makes every later [`add_shape`](Self::add_shape) fail.
    pub fn new(capacity: isize) -> Self {
        Self {
            shapes: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> isize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// How many more shapes fit before the box is full.
    pub fn remaining(&self) -> usize {
        usize::try_from(self.capacity)
            .unwrap_or(0)
            .saturating_sub(self.shapes.len())
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn iter(&self) -> slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    // -------------------------------------------------------------------------
    // List management
    // -------------------------------------------------------------------------

    /// Appends `shape` at the end. When the box is full the shape is returned
    /// inside [`BoxError::CapacityExceeded`] and the box is left untouched.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> Result<()> {
        let shape = shape.into();
        if self.is_full() {
            warn!(capacity = self.capacity, kind = %shape.kind(), "box is full, shape rejected");
            return Err(BoxError::capacity_exceeded(self.capacity, shape));
        }

        debug!(kind = %shape.kind(), index = self.shapes.len(), "shape added");
        self.shapes.push(shape);
        Ok(())
    }

    pub fn get_by_index(&self, index: isize) -> Result<&Shape> {
        let i = self.checked_index(index)?;
        Ok(&self.shapes[i])
    }

    /// Removes and returns the shape at `index`, shifting later shapes left.
    pub fn extract_by_index(&mut self, index: isize) -> Result<Shape> {
        let i = self.checked_index(index)?;
        let shape = self.shapes.remove(i);
        debug!(index = i, kind = %shape.kind(), len = self.shapes.len(), "shape extracted");
        Ok(shape)
    }

    /// Puts `shape` at `index` and returns the shape that was there.
    pub fn replace_by_index(&mut self, index: isize, shape: impl Into<Shape>) -> Result<Shape> {
        let i = self.checked_index(index)?;
        let old = std::mem::replace(&mut self.shapes[i], shape.into());
        debug!(index = i, old = %old.kind(), new = %self.shapes[i].kind(), "shape replaced");
        Ok(old)
    }

    /// Drops every circle, keeping the order of the remaining shapes, and
    /// returns how many were removed.
    ///
    /// An empty box and a box without circles both yield
    /// [`BoxError::CirclesNotFound`]; the sequence is unchanged in that case.
    pub fn remove_all_circles(&mut self) -> Result<usize> {
        let circles = self.shapes.iter().filter(|s| s.is_circle()).count();
        if circles == 0 {
            warn!(len = self.shapes.len(), "no circles to remove");
            return Err(BoxError::CirclesNotFound);
        }

        self.shapes.retain(|s| !s.is_circle());
        debug!(removed = circles, len = self.shapes.len(), "circles removed");
        Ok(circles)
    }

    // -------------------------------------------------------------------------
    // Aggregates
    // -------------------------------------------------------------------------

    pub fn sum_perimeter(&self) -> f64 {
        self.shapes.iter().map(Geometry::perimeter).sum()
    }

    pub fn sum_area(&self) -> f64 {
        self.shapes.iter().map(Geometry::area).sum()
    }

    // One bounds check for every index-taking operation: negative and
    // past-the-end indices are the same error.
    fn checked_index(&self, index: isize) -> Result<usize> {
        match usize::try_from(index) {
            Ok(i) if i < self.shapes.len() => Ok(i),
            _ => {
                warn!(index, len = self.shapes.len(), "shape index out of range");
                Err(BoxError::index_out_of_range(index, self.shapes.len()))
            }
        }
    }
}

impl<'a> IntoIterator for &'a ShapeBox {
    type Item = &'a Shape;
    type IntoIter = slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
