super::impl_position!(ultraviolet::DVec2, ultraviolet::DVec2::new);
