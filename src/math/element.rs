use nalgebra::Scalar;
use num_traits::Zero;

/// Element types usable in matrix and vector conversions.
pub trait Element: Scalar + Zero {}

impl<T> Element for T where T: Scalar + Zero {}

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for i8 {}
    impl Sealed for u16 {}
    impl Sealed for i16 {}
    impl Sealed for u32 {}
    impl Sealed for i32 {}
    impl Sealed for u64 {}
    impl Sealed for i64 {}
}

/// Integral element types accepted by `GrayBuffer` conversions.
///
/// Implemented for the unsigned and signed 8, 16, 32 and 64 bit integers.
pub trait Integral: Element + Copy + image::Primitive + sealed::Sealed {}

impl Integral for u8 {}
impl Integral for i8 {}
impl Integral for u16 {}
impl Integral for i16 {}
impl Integral for u32 {}
impl Integral for i32 {}
impl Integral for u64 {}
impl Integral for i64 {}
