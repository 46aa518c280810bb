use std::collections::VecDeque;

/// Fixed-capacity FIFO ring of metric samples.
///
/// Once full it stays full: each push drops the oldest sample, so the
/// length never exceeds (and, once reached, never falls below) capacity.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    samples: VecDeque<f32>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest if the ring is full.
    pub fn push(&mut self, sample: f32) {
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest-to-newest iteration.
    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.samples.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_up_to_capacity() {
        let mut h = HistoryBuffer::new(3);
        assert!(h.is_empty());
        h.push(1.0);
        h.push(2.0);
        assert_eq!(h.len(), 2);
        h.push(3.0);
        assert_eq!(h.len(), 3);
    }

    #[test]
    fn push_beyond_capacity_evicts_oldest() {
        let mut h = HistoryBuffer::new(3);
        for v in [1.0, 2.0, 3.0, 4.0] {
            h.push(v);
        }
        assert_eq!(h.len(), 3);
        let held: Vec<f32> = h.iter().collect();
        assert_eq!(held, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn length_invariant_over_many_pushes() {
        let mut h = HistoryBuffer::new(60);
        for i in 0..1000 {
            h.push(i as f32);
            assert!(h.len() <= 60);
        }
        assert_eq!(h.len(), 60);
        // Oldest-to-newest order is preserved.
        let held: Vec<f32> = h.iter().collect();
        assert_eq!(held[0], 940.0);
        assert_eq!(held[59], 999.0);
    }

}
