use crate::shortest_path::path::Path;

/// One augmenting step: the path chosen by the shortest-path engine and
/// the bottleneck flow pushed along it.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Augmentation<Flow> {
    pub path: Path<Flow>,
    pub bottleneck: Flow,
}
