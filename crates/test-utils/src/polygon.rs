//! Polygon checks on plain `(x, y)` rings.
//!
//! Rings are implicitly closed: the last point connects back to the first.

/// Absolute shoelace area of a ring.
pub fn ring_area(ring: &[(f64, f64)]) -> f64 {
    if ring.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..ring.len() {
        let (x0, y0) = ring[i];
        let (x1, y1) = ring[(i + 1) % ring.len()];
        twice += x0 * y1 - x1 * y0;
    }
    (twice * 0.5).abs()
}

fn orientation(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}

fn on_segment(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> bool {
    p.0 >= a.0.min(b.0) && p.0 <= a.0.max(b.0) && p.1 >= a.1.min(b.1) && p.1 <= a.1.max(b.1)
}

/// Whether the closed segments `a0-a1` and `b0-b1` share any point.
pub fn segments_intersect(a0: (f64, f64), a1: (f64, f64), b0: (f64, f64), b1: (f64, f64)) -> bool {
    let d1 = orientation(b0, b1, a0);
    let d2 = orientation(b0, b1, a1);
    let d3 = orientation(a0, a1, b0);
    let d4 = orientation(a0, a1, b1);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(b0, b1, a0))
        || (d2 == 0.0 && on_segment(b0, b1, a1))
        || (d3 == 0.0 && on_segment(a0, a1, b0))
        || (d4 == 0.0 && on_segment(a0, a1, b1))
}

/// Whether a ring is a simple polygon: at least three distinct vertices
/// and no two non-adjacent edges touching.
pub fn is_simple_ring(ring: &[(f64, f64)]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if ring[i] == ring[j] {
                return false;
            }
        }
    }
    for i in 0..n {
        let a0 = ring[i];
        let a1 = ring[(i + 1) % n];
        for j in (i + 1)..n {
            // Adjacent edges share a vertex by construction
            if j == i + 1 || (i == 0 && j == n - 1) {
                continue;
            }
            let b0 = ring[j];
            let b1 = ring[(j + 1) % n];
            if segments_intersect(a0, a1, b0, b1) {
                return false;
            }
        }
    }
    true
}

/// Whether two rings have any vertex in common.
pub fn rings_share_point(a: &[(f64, f64)], b: &[(f64, f64)]) -> bool {
    a.iter().any(|p| b.contains(p))
}

/// Whether `ring` equals `other` up to the choice of starting vertex.
pub fn same_cycle(ring: &[(f64, f64)], other: &[(f64, f64)]) -> bool {
    if ring.len() != other.len() {
        return false;
    }
    if ring.is_empty() {
        return true;
    }
    (0..other.len()).any(|shift| {
        ring.iter()
            .enumerate()
            .all(|(i, p)| *p == other[(i + shift) % other.len()])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &[(f64, f64)] = &[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)];

    #[test]
    fn test_ring_area() {
        assert_eq!(ring_area(SQUARE), 4.0);
        assert_eq!(ring_area(&[(0.0, 0.0), (1.0, 1.0)]), 0.0);
    }

    #[test]
    fn test_segments_intersect() {
        assert!(segments_intersect((0.0, 0.0), (2.0, 2.0), (0.0, 2.0), (2.0, 0.0)));
        assert!(!segments_intersect((0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)));
        // Touching at an endpoint counts
        assert!(segments_intersect((0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (1.0, 1.0)));
    }

    #[test]
    fn test_is_simple_ring() {
        assert!(is_simple_ring(SQUARE));
        let bowtie = [(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)];
        assert!(!is_simple_ring(&bowtie));
        let repeated = [(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (0.0, 1.0)];
        assert!(!is_simple_ring(&repeated));
        assert!(!is_simple_ring(&[(0.0, 0.0), (1.0, 0.0)]));
    }

    #[test]
    fn test_same_cycle() {
        let rotated = [(2.0, 2.0), (0.0, 2.0), (0.0, 0.0), (2.0, 0.0)];
        assert!(same_cycle(SQUARE, &rotated));
        let reversed: Vec<_> = SQUARE.iter().rev().copied().collect();
        assert!(!same_cycle(SQUARE, &reversed));
    }

    #[test]
    fn test_rings_share_point() {
        let other = [(2.0, 2.0), (5.0, 5.0), (2.0, 5.0)];
        assert!(rings_share_point(SQUARE, &other));
        assert!(!rings_share_point(SQUARE, &[(9.0, 9.0)]));
    }
}
