//! Two-threshold hysteresis edge detection on a single 8-bit plane.
//!
//! Gradients come from the 3x3 Sobel operators with replicated borders; the
//! L1 magnitude `|gx| + |gy|` is compared against the two thresholds.
//! Pixels at or above the high threshold seed the edge map, pixels between
//! the thresholds survive only while 8-connected to a seed. Integer
//! arithmetic throughout, so the map is bit-identical across runs and
//! platforms.

/// Magnitudes below this never become edges.
pub(crate) const LOW_THRESHOLD: i32 = 100;
/// Magnitudes at or above this always become edges.
pub(crate) const HIGH_THRESHOLD: i32 = 200;

/// Compute the binary edge map of a `width * height` intensity plane.
///
/// The returned vector has one entry per pixel in row-major order.
pub(crate) fn detect_edges(plane: &[u8], width: u32, height: u32) -> Vec<bool> {
    debug_assert_eq!(plane.len(), (width as usize) * (height as usize));

    let w = width as usize;
    let h = height as usize;
    let mut edges = vec![false; w * h];
    if w == 0 || h == 0 {
        return edges;
    }

    let magnitude = gradient_magnitude(plane, w, h);

    // Seed from strong pixels, then grow into weak neighbours.
    let mut stack: Vec<usize> = Vec::new();
    for (idx, &mag) in magnitude.iter().enumerate() {
        if mag >= HIGH_THRESHOLD {
            edges[idx] = true;
            stack.push(idx);
        }
    }

    while let Some(idx) = stack.pop() {
        let x = (idx % w) as isize;
        let y = (idx / w) as isize;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                    continue;
                }
                let n = ny as usize * w + nx as usize;
                if !edges[n] && magnitude[n] >= LOW_THRESHOLD {
                    edges[n] = true;
                    stack.push(n);
                }
            }
        }
    }

    edges
}

/// L1 Sobel gradient magnitude per pixel, borders replicated.
fn gradient_magnitude(plane: &[u8], w: usize, h: usize) -> Vec<i32> {
    let sample = |x: isize, y: isize| -> i32 {
        let cx = x.clamp(0, w as isize - 1) as usize;
        let cy = y.clamp(0, h as isize - 1) as usize;
        plane[cy * w + cx] as i32
    };

    let mut magnitude = vec![0i32; w * h];
    for y in 0..h as isize {
        for x in 0..w as isize {
            let gx = -sample(x - 1, y - 1) + sample(x + 1, y - 1)
                - 2 * sample(x - 1, y)
                + 2 * sample(x + 1, y)
                - sample(x - 1, y + 1)
                + sample(x + 1, y + 1);
            let gy = -sample(x - 1, y - 1) - 2 * sample(x, y - 1) - sample(x + 1, y - 1)
                + sample(x - 1, y + 1)
                + 2 * sample(x, y + 1)
                + sample(x + 1, y + 1);
            magnitude[y as usize * w + x as usize] = gx.abs() + gy.abs();
        }
    }

    magnitude
}
