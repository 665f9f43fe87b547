/// Ordered node ids from source to destination, inclusive, plus total cost.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Path<Flow> {
    pub nodes: Vec<usize>,
    pub cost: Flow,
}

impl<Flow> Path<Flow> {
    /// Consecutive (from, to) pairs along the path. Empty for a
    /// single-node path.
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}
