super::impl_position!(glam::DVec2, glam::DVec2::new);

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use glam::DVec2;

    #[test]
    fn dvec2_is_indexable() {
        let points = vec![DVec2::new(1.0, 1.0), DVec2::new(2.0, 3.0), DVec2::new(4.0, 0.5)];
        let tree = KdTree::new(points).unwrap();

        let found = tree.search(0.0, 2.0, 0.0, 3.0).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(DVec2::from(Point::new(2.0, 3.0)), DVec2::new(2.0, 3.0));
    }
}
