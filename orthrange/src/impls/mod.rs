#[allow(unused_macros)]
macro_rules! impl_position {
    ($vector: ty, $new: expr) => {
        impl $crate::point::Position for $vector {
            #[inline]
            fn position(&self) -> $crate::point::Point {
                $crate::point::Point::new(self.x, self.y)
            }
        }

        impl From<$vector> for $crate::point::Point {
            #[inline]
            fn from(vector: $vector) -> Self {
                Self::new(vector.x, vector.y)
            }
        }

        impl From<$crate::point::Point> for $vector {
            #[inline]
            fn from(point: $crate::point::Point) -> Self {
                $new(point.x, point.y)
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use impl_position;

#[cfg(feature = "glam")]
mod glam;
#[cfg(feature = "nalgebra")]
mod nalgebra;
#[cfg(feature = "ultraviolet")]
mod ultraviolet;
