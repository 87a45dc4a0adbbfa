//! Fixed pool of rings sharing one segment count.

use super::buffer::Ring;
use crate::modulation::AmplitudeModulation;
use crate::palette::HuePalette;

/// All rings of a scene. Created once; never grows or shrinks.
#[derive(Debug, Clone)]
pub struct RingPool {
    rings: Vec<Ring>,
    segment_count: usize,
}

impl RingPool {
    /// Wrap prebuilt rings. Every ring must have `segment_count` vertices.
    pub fn new(rings: Vec<Ring>, segment_count: usize) -> Self {
        debug_assert!(rings.iter().all(|r| r.segment_count() == segment_count));
        Self {
            rings,
            segment_count,
        }
    }

    /// Recompute every ring for time `t`.
    pub fn update(&mut self, t: f32, modulation: &AmplitudeModulation, palette: Option<&HuePalette>) {
        for ring in &mut self.rings {
            ring.update(t, modulation, palette);
        }
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Total vertices rewritten per update.
    pub fn vertex_count(&self) -> usize {
        self.rings.len() * self.segment_count
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ring> {
        self.rings.iter()
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }
}

impl<'a> IntoIterator for &'a RingPool {
    type Item = &'a Ring;
    type IntoIter = std::slice::Iter<'a, Ring>;

    fn into_iter(self) -> Self::IntoIter {
        self.rings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring::RingParams;

    fn pool(n: usize, segments: usize) -> RingPool {
        let rings = (0..n)
            .map(|i| {
                let p = RingParams::new(1.0 + i as f32, 0.1, 3.0, 0.0).unwrap();
                Ring::new(p, segments).unwrap()
            })
            .collect();
        RingPool::new(rings, segments)
    }

    #[test]
    fn pool_counts() {
        let p = pool(5, 32);
        assert_eq!(p.len(), 5);
        assert!(!p.is_empty());
        assert_eq!(p.segment_count(), 32);
        assert_eq!(p.vertex_count(), 160);
    }

    #[test]
    fn pool_update_touches_every_ring() {
        let mut p = pool(3, 16);
        let before: Vec<_> = p.iter().map(|r| r.positions()[1]).collect();
        p.update(0.5, &AmplitudeModulation::Static, None);
        let after: Vec<_> = p.iter().map(|r| r.positions()[1]).collect();
        for (b, a) in before.iter().zip(&after) {
            assert_ne!(b, a);
        }
    }
}
