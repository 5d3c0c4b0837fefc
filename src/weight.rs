//! Edge weights usable by the shortest paths algorithm.

use std::{cmp::Ordering, ops::Add};

/// A cost that can be accumulated along a path and compared.
///
/// The associated [`Ord`](Weight::Ord) type is a total-order form of the
/// weight so that it can be used as a priority in a binary heap. For integers
/// it is the type itself, for floats it is a wrapper comparing with
/// [`total_cmp`](f64::total_cmp).
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;
}

macro_rules! impl_int_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }
        }
    };
}

impl_int_weight!(u8);
impl_int_weight!(u16);
impl_int_weight!(u32);
impl_int_weight!(u64);
impl_int_weight!(usize);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<$ty>;

            fn zero() -> Self {
                0.0
            }
        }

        impl Ord for OrderedFloat<$ty> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Eq for OrderedFloat<$ty> {}

        impl From<$ty> for OrderedFloat<$ty> {
            fn from(value: $ty) -> Self {
                Self(value)
            }
        }

        impl From<OrderedFloat<$ty>> for $ty {
            fn from(value: OrderedFloat<$ty>) -> Self {
                value.0
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

/// Float wrapper with a total order.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct OrderedFloat<T>(T);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_total_order() {
        let mut values = vec![
            OrderedFloat::from(3.5f64),
            OrderedFloat::from(f64::INFINITY),
            OrderedFloat::from(0.0),
            OrderedFloat::from(1.25),
        ];
        values.sort();

        let sorted = values.into_iter().map(f64::from).collect::<Vec<_>>();
        assert_eq!(sorted, vec![0.0, 1.25, 3.5, f64::INFINITY]);
    }

    #[test]
    fn int_weight_zero() {
        assert_eq!(<u32 as Weight>::zero(), 0);
    }
}
