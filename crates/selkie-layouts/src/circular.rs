//! Nodes evenly spaced on a circle, in graph insertion order.

use selkie::{Layout, LayoutOptions, Position, PositionMap, WidgetGraph};

#[derive(Debug, Clone, Copy, Default)]
pub struct CircularLayout;

impl Layout for CircularLayout {
    fn name(&self) -> &str {
        "circular"
    }

    fn run(&self, graph: &mut WidgetGraph, options: &LayoutOptions) -> Option<PositionMap> {
        let count = graph.node_count();
        if count == 0 {
            return Some(PositionMap::default());
        }

        let step = std::f64::consts::TAU / count as f64;
        let positions: PositionMap = graph
            .node_keys()
            .into_iter()
            .enumerate()
            .map(|(i, key)| {
                let angle = step * i as f64;
                let position = Position::new(
                    options.center.x + options.scale * angle.cos(),
                    options.center.y + options.scale * angle.sin(),
                );
                (key, position)
            })
            .collect();
        Some(positions)
    }
}

#[cfg(test)]
mod tests {
    use selkie::NodePatch;

    use super::*;

    #[test]
    fn nodes_land_on_the_circle() {
        let mut graph = WidgetGraph::new();
        for key in ["a", "b", "c", "d"] {
            graph.merge_node(key.to_string(), NodePatch::default());
        }

        let options = LayoutOptions {
            scale: 10.0,
            center: Position::new(5.0, -5.0),
        };
        let positions = CircularLayout.run(&mut graph, &options).unwrap();

        assert_eq!(positions.len(), 4);
        for position in positions.values() {
            let dx = position.x - 5.0;
            let dy = position.y + 5.0;
            assert!(((dx * dx + dy * dy).sqrt() - 10.0).abs() < 1e-9);
        }
        // Insertion order fixes the angles: "a" sits at angle zero.
        assert_eq!(positions["a"], Position::new(15.0, -5.0));
    }

    #[test]
    fn empty_graph_yields_an_empty_mapping() {
        let mut graph = WidgetGraph::new();
        let positions = CircularLayout
            .run(&mut graph, &LayoutOptions::default())
            .unwrap();
        assert!(positions.is_empty());
    }
}
