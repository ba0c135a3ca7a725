super::impl_position!(nalgebra::Vector2<f64>, nalgebra::Vector2::new);
super::impl_position!(nalgebra::Point2<f64>, nalgebra::Point2::new);
