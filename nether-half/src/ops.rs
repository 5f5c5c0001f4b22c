//! Arithmetic operators for `Half`
//!
//! Each operator decodes both sides, computes in f32, and encodes the result.
//! An `f32` right-hand side is encoded to a `Half` first, so `h + 0.1`
//! behaves exactly like `h + Half::from(0.1)`.

use crate::Half;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $assign_op:ident, $assign_method:ident, $sym:tt) => {
        impl $op for Half {
            type Output = Half;

            #[inline]
            fn $method(self, rhs: Half) -> Half {
                Half::from_f32(self.to_f32() $sym rhs.to_f32())
            }
        }

        impl $op<f32> for Half {
            type Output = Half;

            #[inline]
            fn $method(self, rhs: f32) -> Half {
                self $sym Half::from_f32(rhs)
            }
        }

        impl $assign_op for Half {
            #[inline]
            fn $assign_method(&mut self, rhs: Half) {
                *self = *self $sym rhs;
            }
        }

        impl $assign_op<f32> for Half {
            #[inline]
            fn $assign_method(&mut self, rhs: f32) {
                *self = *self $sym rhs;
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, +);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, -);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, *);
impl_binary_op!(Div, div, DivAssign, div_assign, /);

impl Neg for Half {
    type Output = Half;

    #[inline]
    fn neg(self) -> Half {
        Half::from_f32(-self.to_f32())
    }
}
