/// Adjacency view consumed by the traversal algorithms.
///
/// Vertices are addressed by dense indices in `0..vertex_count()`.
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn neighbor_indices(&self, index: usize) -> &[usize];
    fn vertex_name(&self, index: usize) -> &str;
}
