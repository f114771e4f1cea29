/// Half-open pixel rectangle `[min_x, max_x) x [min_y, max_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

// helper methods
impl Rect {
    pub fn full(width: u32, height: u32) -> Self {
        Rect { min_x: 0, min_y: 0, max_x: width, max_y: height }
    }
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

// Compute minimum depth to get at least n rectangles for n workers
pub fn compute_subdivisions(n: usize) -> u32 {
    let mut depth = 0;
    let mut count = 1;
    while count < n {
        depth += 1;
        count *= 2;
    }
    depth
}

/// Subdivide a rectangle evenly with given depth, alternating vertical and
/// horizontal splits. Empty pieces are dropped.
pub fn subdivide(width: u32, height: u32, depth: u32) -> Vec<Rect> {
    let mut rects = Vec::new();

    fn recurse(r: Rect, vertical: bool, depth: u32, rects: &mut Vec<Rect>) {
        if r.is_empty() {
            return;
        }
        if depth == 0 {
            rects.push(r);
            return;
        }

        if vertical {
            let mid = r.min_x + r.width() / 2;
            let left = Rect { max_x: mid, ..r };
            let right = Rect { min_x: mid, ..r };
            recurse(left, !vertical, depth - 1, rects);
            recurse(right, !vertical, depth - 1, rects);
        } else {
            let mid = r.min_y + r.height() / 2;
            let top = Rect { max_y: mid, ..r };
            let bottom = Rect { min_y: mid, ..r };
            recurse(top, !vertical, depth - 1, rects);
            recurse(bottom, !vertical, depth - 1, rects);
        }
    }

    recurse(Rect::full(width, height), true, depth, &mut rects);
    rects
}
