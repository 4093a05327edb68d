//! Seeded uniform scatter around the layout center.

use selkie::{Layout, LayoutOptions, Position, PositionMap, WidgetGraph};

#[derive(Debug, Clone, Copy)]
pub struct RandomLayout {
    /// Seed for deterministic placement; the same seed over the same node
    /// insertion order reproduces the same scatter.
    pub seed: u64,
}

impl Default for RandomLayout {
    fn default() -> Self {
        Self { seed: 0 }
    }
}

impl Layout for RandomLayout {
    fn name(&self) -> &str {
        "random"
    }

    fn run(&self, graph: &mut WidgetGraph, options: &LayoutOptions) -> Option<PositionMap> {
        let mut rng = XorShift64Star::new(self.seed);
        let positions: PositionMap = graph
            .node_keys()
            .into_iter()
            .map(|key| {
                let position = Position::new(
                    options.center.x + options.scale * rng.next_f64_signed(),
                    options.center.y + options.scale * rng.next_f64_signed(),
                );
                (key, position)
            })
            .collect();
        Some(positions)
    }
}

#[derive(Debug, Clone)]
struct XorShift64Star {
    state: u64,
}

impl XorShift64Star {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D_u64)
    }

    fn next_f64_signed(&mut self) -> f64 {
        // Map to [-1, 1] (exclusive) with 53 bits of precision.
        let u = self.next_u64() >> 11;
        let v = (u as f64) / ((1u64 << 53) as f64);
        (v * 2.0) - 1.0
    }
}
