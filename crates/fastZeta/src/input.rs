//! Batches of ordinates and Z samples.
//!
//! `RiemannSiegel::evaluate_many` takes a batch of ordinates `t` and
//! [`count_sign_changes_in`] takes a batch of already computed Z values. Both
//! read the batch as one contiguous `&[T]`, which is what [`ZetaInput`]
//! provides for slices, `Vec` and one-dimensional ndarray arrays. Strided
//! ndarray views have no such slice and are refused with
//! [`ZetaError::InvalidInput`].

// Feature-gated imports
#[cfg(feature = "cpu")]
use ndarray::{ArrayBase, Data, Ix1};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ZetaError;
use crate::primitives::sign::count_sign_changes;

/// A batch of ordinates or samples stored back to back in memory.
pub trait ZetaInput<T: Float = f64> {
    /// Borrow the batch in index order.
    fn as_zeta_slice(&self) -> Result<&[T], ZetaError>;
}

impl<T: Float> ZetaInput<T> for [T] {
    fn as_zeta_slice(&self) -> Result<&[T], ZetaError> {
        Ok(self)
    }
}

impl<T: Float> ZetaInput<T> for Vec<T> {
    fn as_zeta_slice(&self) -> Result<&[T], ZetaError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "cpu")]
impl<T: Float, S> ZetaInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_zeta_slice(&self) -> Result<&[T], ZetaError> {
        self.as_slice().ok_or_else(|| {
            ZetaError::invalid_input(format!(
                "strided array of {} points; pass a standard-layout copy",
                self.len()
            ))
        })
    }
}

/// Count sign changes between index-adjacent Z samples.
pub fn count_sign_changes_in<T, I>(samples: &I) -> Result<u64, ZetaError>
where
    T: Float,
    I: ZetaInput<T> + ?Sized,
{
    samples.as_zeta_slice().map(count_sign_changes)
}
