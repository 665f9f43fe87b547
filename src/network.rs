use crate::errors::MalformedGraph;
use num_traits::NumAssign;

/// Whether the cost matrix still describes the original network or has been
/// consumed by a maximum-flow run (residual capacities left in place).
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum NetworkState {
    #[default]
    Fresh,
    Residual,
}

/// Directed network stored as a dense N x N cost matrix.
/// `cost[i][j] == 0` means there is no edge i -> j; in flow mode the cost
/// doubles as the edge capacity.
#[derive(Default, PartialEq, Debug, Clone)]
pub struct Network<Flow> {
    num_nodes: usize,
    cost: Vec<Vec<Flow>>,
    state: NetworkState,
}

impl<Flow> Network<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    /// Validates squareness and non-negativity; no instance exists on failure.
    pub fn from_matrix(cost: Vec<Vec<Flow>>) -> Result<Self, MalformedGraph> {
        let num_nodes = cost.len();
        for (row, entries) in cost.iter().enumerate() {
            if entries.len() != num_nodes {
                return Err(MalformedGraph::NotSquare { row, width: entries.len(), height: num_nodes });
            }
            for (column, &c) in entries.iter().enumerate() {
                if c < Flow::zero() {
                    return Err(MalformedGraph::NegativeCost { row, column });
                }
            }
        }

        Ok(Self { num_nodes, cost, state: NetworkState::Fresh })
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn state(&self) -> NetworkState {
        self.state
    }

    #[inline]
    pub fn edge_cost(&self, from: usize, to: usize) -> Flow {
        self.cost[from][to]
    }

    /// Nodes reachable from `u` in one hop, in ascending id order.
    #[inline]
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.cost[u].iter().enumerate().filter(|(_, &c)| c != Flow::zero()).map(|(v, _)| v)
    }

    /// Residual update: forward capacity drops by `amount`, reverse capacity
    /// grows by the same amount, so `cost[from][to] + cost[to][from]` is
    /// conserved. Tags the network as spent.
    pub fn reduce_edge(&mut self, from: usize, to: usize, amount: Flow) {
        self.cost[from][to] -= amount;
        self.cost[to][from] += amount;
        self.state = NetworkState::Residual;
    }

    /// Explicit acknowledgment that the current costs are the intended
    /// network, re-enabling shortest-path queries after a flow run.
    pub fn mark_fresh(&mut self) {
        self.state = NetworkState::Fresh;
    }
}
