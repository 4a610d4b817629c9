use macroquad::prelude::*;

// 两个轴对齐矩形是否重叠（边缘相接不算重叠）
pub fn boxes_intersect(a: Rect, b: Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

// 点是否落在矩形内（含边缘）
pub fn point_in_box(p: Vec2, r: Rect) -> bool {
    p.x >= r.x && p.x <= r.x + r.w && p.y >= r.y && p.y <= r.y + r.h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_boxes_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(boxes_intersect(a, b));
        assert!(boxes_intersect(b, a));
    }

    #[test]
    fn separated_boxes_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!boxes_intersect(a, b));
    }

    // 边缘恰好贴合时采用严格比较，不视为相交
    #[test]
    fn touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!boxes_intersect(a, b));
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!boxes_intersect(a, c));
    }

    #[test]
    fn point_inside_box() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(point_in_box(vec2(15.0, 25.0), r));
        assert!(!point_in_box(vec2(9.0, 15.0), r));
        assert!(!point_in_box(vec2(15.0, 31.0), r));
    }

    // 点在边缘上采用包含比较，算作命中
    #[test]
    fn point_on_edge_counts_as_inside() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(point_in_box(vec2(10.0, 10.0), r));
        assert!(point_in_box(vec2(30.0, 30.0), r));
        assert!(point_in_box(vec2(10.0, 30.0), r));
    }
}
