//! Nodes on a near-square grid, in graph insertion order.

use selkie::{Layout, LayoutOptions, Position, PositionMap, WidgetGraph};

#[derive(Debug, Clone, Copy, Default)]
pub struct GridLayout;

impl Layout for GridLayout {
    fn name(&self) -> &str {
        "grid"
    }

    fn run(&self, graph: &mut WidgetGraph, options: &LayoutOptions) -> Option<PositionMap> {
        let count = graph.node_count();
        if count == 0 {
            return Some(PositionMap::default());
        }

        let columns = (count as f64).sqrt().ceil() as usize;
        let rows = count.div_ceil(columns);
        // Center the grid on the requested center, one `scale` per cell.
        let origin_x = options.center.x - options.scale * (columns - 1) as f64 / 2.0;
        let origin_y = options.center.y - options.scale * (rows - 1) as f64 / 2.0;

        let positions: PositionMap = graph
            .node_keys()
            .into_iter()
            .enumerate()
            .map(|(i, key)| {
                let row = i / columns;
                let column = i % columns;
                let position = Position::new(
                    origin_x + options.scale * column as f64,
                    origin_y + options.scale * row as f64,
                );
                (key, position)
            })
            .collect();
        Some(positions)
    }
}
