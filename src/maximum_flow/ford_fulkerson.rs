use crate::maximum_flow::augmentation::Augmentation;
use crate::maximum_flow::status::Status;
use crate::network::{Network, NetworkState};
use crate::shortest_path::dijkstra::Dijkstra;
use crate::shortest_path::path::Path;
use crate::shortest_path::status::Status as PathStatus;
use log::debug;
use num_traits::NumAssign;
use std::fmt::Debug;

/// Ford-Fulkerson with Dijkstra-selected augmenting paths. Composes the
/// shortest-path engine; the engine knows nothing about flows.
#[derive(Default)]
pub struct FordFulkerson<Flow> {
    dijkstra: Dijkstra<Flow>,
    augmentations: Vec<Augmentation<Flow>>,
    total_flow: Option<Flow>,
    status: Status,
}

impl<Flow> FordFulkerson<Flow>
where
    Flow: NumAssign + Ord + Copy + Debug,
{
    /// Pushes flow along shortest augmenting paths until none remains.
    /// The network is consumed destructively: its costs become residual
    /// capacities and it is tagged `Residual`.
    pub fn solve(&mut self, source: usize, sink: usize, network: &mut Network<Flow>) -> Status {
        self.augmentations.clear();
        self.total_flow = None;
        self.status = Status::NotSolved;

        if source >= network.num_nodes() || sink >= network.num_nodes() || source == sink {
            self.status = Status::BadInput;
            return self.status;
        }
        if network.state() == NetworkState::Residual {
            self.status = Status::SpentNetwork;
            return self.status;
        }

        let mut total = Flow::zero();
        while self.dijkstra.run(source, sink, network) == PathStatus::Optimal {
            let path = self.dijkstra.path().unwrap().clone();

            // every edge on the path has nonzero cost, so the bottleneck
            // is positive and each iteration makes progress
            let bottleneck = path.edges().map(|(u, v)| network.edge_cost(u, v)).min().unwrap();
            for (u, v) in path.edges() {
                network.reduce_edge(u, v, bottleneck);
            }
            total += bottleneck;

            debug!("augmenting path {:?} with bottleneck {:?}", path.nodes, bottleneck);
            self.augmentations.push(Augmentation { path, bottleneck });
        }

        self.total_flow = Some(total);
        self.status = Status::Optimal;
        self.status
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// `None` until a flow computation completes; `Some(zero)` is the
    /// legitimate result for an unreachable sink.
    #[inline]
    pub fn total_flow(&self) -> Option<Flow> {
        self.total_flow
    }

    /// The (path, bottleneck) pairs used, in order.
    #[inline]
    pub fn augmentations(&self) -> &[Augmentation<Flow>] {
        &self.augmentations
    }

    #[inline]
    pub fn last_path(&self) -> Option<&Path<Flow>> {
        self.augmentations.last().map(|a| &a.path)
    }

    #[inline]
    pub fn last_bottleneck(&self) -> Option<Flow> {
        self.augmentations.last().map(|a| a.bottleneck)
    }
}
