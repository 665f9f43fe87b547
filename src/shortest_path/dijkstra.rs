use crate::network::{Network, NetworkState};
use crate::shortest_path::path::Path;
use crate::shortest_path::status::Status;
use num_traits::NumAssign;

/// Per-node state for a single run. `distance: None` is the infinite
/// tentative distance; `predecessor: None` means no path found yet.
#[derive(Clone)]
struct NodeRecord<Flow> {
    visited: bool,
    distance: Option<Flow>,
    predecessor: Option<usize>,
}

/// Single-source shortest paths over a dense network, non-negative
/// weights only. The node table is rebuilt on every run.
#[derive(Default)]
pub struct Dijkstra<Flow> {
    node_table: Vec<NodeRecord<Flow>>,
    path: Option<Path<Flow>>,
    status: Status,
}

impl<Flow> Dijkstra<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// Refuses a network already consumed by a flow run; call
    /// `Network::mark_fresh` first to query it anyway.
    pub fn solve(&mut self, source: usize, destination: usize, network: &Network<Flow>) -> Status {
        if network.state() == NetworkState::Residual {
            self.path = None;
            self.status = Status::SpentNetwork;
            return self.status;
        }
        self.run(source, destination, network)
    }

    pub(crate) fn run(&mut self, source: usize, destination: usize, network: &Network<Flow>) -> Status {
        self.path = None;
        self.status = Status::NotSolved;

        let num_nodes = network.num_nodes();
        if source >= num_nodes || destination >= num_nodes {
            self.status = Status::BadInput;
            return self.status;
        }

        self.node_table.clear();
        self.node_table.resize(num_nodes, NodeRecord { visited: false, distance: None, predecessor: None });
        self.node_table[source].distance = Some(Flow::zero());

        let mut current = source;
        while current != destination {
            self.node_table[current].visited = true;
            let from_source = self.node_table[current].distance.unwrap();

            for v in network.neighbors(current) {
                if self.node_table[v].visited {
                    continue;
                }

                let tentative = from_source + network.edge_cost(current, v);
                let record = &mut self.node_table[v];
                // on an exact tie, the lower-id predecessor wins, so the
                // reported path is deterministic
                let improved = match record.distance {
                    None => true,
                    Some(distance) => {
                        tentative < distance || (tentative == distance && record.predecessor.map_or(false, |p| current < p))
                    }
                };
                if improved {
                    record.distance = Some(tentative);
                    record.predecessor = Some(current);
                }
            }

            current = match self.next_node() {
                Some(u) => u,
                None => {
                    self.status = Status::NoPath;
                    return self.status;
                }
            };
        }

        // walk predecessors back from the destination
        let cost = self.node_table[destination].distance.unwrap();
        let mut nodes = vec![destination];
        let mut u = destination;
        while u != source {
            u = self.node_table[u].predecessor.unwrap();
            nodes.push(u);
        }
        nodes.reverse();

        self.path = Some(Path { nodes, cost });
        self.status = Status::Optimal;
        self.status
    }

    // unvisited node with the smallest finite distance; strict less keeps
    // the lowest id on ties
    fn next_node(&self) -> Option<usize> {
        let mut next: Option<(usize, Flow)> = None;
        for (u, record) in self.node_table.iter().enumerate() {
            if record.visited {
                continue;
            }
            if let Some(distance) = record.distance {
                if next.map_or(true, |(_, best)| distance < best) {
                    next = Some((u, distance));
                }
            }
        }
        next.map(|(u, _)| u)
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// `None` until a run reaches its destination.
    #[inline]
    pub fn path(&self) -> Option<&Path<Flow>> {
        self.path.as_ref()
    }
}
