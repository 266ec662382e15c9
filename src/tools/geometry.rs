pub struct Geometry;

impl Geometry {
    /// Integer Bresenham walk from `(x0, y0)` to `(x1, y1)`, both ends included.
    pub fn bresenham_line<F>(mut x0: i32, mut y0: i32, x1: i32, y1: i32, mut callback: F)
    where
        F: FnMut(i32, i32),
    {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            callback(x0, y0);
            if x0 == x1 && y0 == y1 { break; }
            let e2 = 2 * err;
            if e2 > -dy { err -= dy; x0 += sx; }
            if e2 < dx { err += dx; y0 += sy; }
        }
    }

    /// Border of the box spanned by the two corners; corners are emitted twice.
    pub fn rectangle_outline<F>(x0: i32, y0: i32, x1: i32, y1: i32, mut callback: F)
    where
        F: FnMut(i32, i32),
    {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));

        for x in min_x..=max_x {
            callback(x, min_y);
            callback(x, max_y);
        }
        for y in min_y..=max_y {
            callback(min_x, y);
            callback(max_x, y);
        }
    }

    /// Midpoint circle outline around `(cx, cy)`, eight octant points per step.
    pub fn midpoint_circle<F>(cx: i32, cy: i32, radius: i32, mut callback: F)
    where
        F: FnMut(i32, i32),
    {
        let mut x = 0;
        let mut y = radius;
        let mut d = 3 - 2 * radius;

        while x <= y {
            for (px, py) in [(x, y), (y, x), (-x, y), (-y, x), (x, -y), (y, -x), (-x, -y), (-y, -x)] {
                callback(cx + px, cy + py);
            }
            if d < 0 {
                d += 4 * x + 6;
            } else {
                d += 4 * (x - y) + 10;
                y -= 1;
            }
            x += 1;
        }
    }

    /// `floor(sqrt(dx² + dy²))` computed without float rounding drift.
    pub fn floor_distance(dx: i32, dy: i32) -> i32 {
        let d2 = (dx as i64).pow(2) + (dy as i64).pow(2);
        let mut r = (d2 as f64).sqrt() as i64;
        while r * r > d2 { r -= 1; }
        while (r + 1) * (r + 1) <= d2 { r += 1; }
        r as i32
    }
}
