//! Common

/// Interface for computing dot products.
pub trait Dot<T> {
    /// The scalar result type.
    type Output;

    /// Returns the dot product.
    ///
    /// * `other` - The other value.
    fn dot(&self, other: &T) -> Self::Output;
}
