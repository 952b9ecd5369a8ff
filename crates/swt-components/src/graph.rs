//! Stroke-width adjacency graph and connected components.
//!
//! Nodes are flattened pixel indices (`y * width + x`) with a positive width.
//! Two nodes are joined when their widths pass the ratio test. Components are
//! extracted with union-find over the sparse adjacency.

use indexmap::IndexMap;
use rayon::prelude::*;
use smallvec::{smallvec, SmallVec};
use swt_core::{Ray, StrokeWidthRaster};
use tracing::{debug, instrument};

const NO_ROW: u32 = u32::MAX;

/// True when both widths are positive and differ by at most `threshold`×.
#[inline]
pub fn ratio_test(a: f32, b: f32, threshold: f32) -> bool {
    if a <= 0.0 || b <= 0.0 {
        return false;
    }
    a.max(b) / a.min(b) <= threshold
}

/// Row lookup for flattened indices, filled for every node of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct RowIndex {
    width: u32,
    rows: Vec<u32>,
}

impl RowIndex {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            rows: vec![NO_ROW; width as usize * height as usize],
        }
    }

    fn record(&mut self, index: u32, row: u32) {
        self.rows[index as usize] = row;
    }

    /// Row of a node, or `None` if the index is not a graph node.
    pub fn row(&self, index: u32) -> Option<u32> {
        match self.rows.get(index as usize) {
            Some(&row) if row != NO_ROW => Some(row),
            _ => None,
        }
    }

    /// `(row, col)` of a node.
    pub fn coords(&self, index: u32) -> Option<(u32, u32)> {
        self.row(index).map(|row| (row, index - row * self.width))
    }
}

/// One maximal connected set of pixel indices, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    members: Vec<u32>,
}

impl Component {
    /// Build a component; members are sorted and deduplicated.
    pub fn new(mut members: Vec<u32>) -> Self {
        members.sort_unstable();
        members.dedup();
        Self { members }
    }

    pub fn members(&self) -> &[u32] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, index: u32) -> bool {
        self.members.binary_search(&index).is_ok()
    }
}

/// Undirected graph over flattened pixel indices.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: IndexMap<u32, SmallVec<[u32; 8]>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected edge. Self-loops and repeats are ignored.
    pub fn add_edge(&mut self, a: u32, b: u32) {
        if a == b {
            return;
        }
        let neighbours = self.adjacency.entry(a).or_default();
        if neighbours.contains(&b) {
            return;
        }
        neighbours.push(b);
        self.adjacency.entry(b).or_default().push(a);
        self.edge_count += 1;
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains_node(&self, index: u32) -> bool {
        self.adjacency.contains_key(&index)
    }

    pub fn neighbours(&self, index: u32) -> &[u32] {
        self.adjacency.get(&index).map(|n| n.as_slice()).unwrap_or(&[])
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = u32> + '_ {
        self.adjacency.keys().copied()
    }

    /// Every edge once, as `(smaller, larger)`.
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.adjacency.iter().flat_map(|(&a, neighbours)| {
            neighbours
                .iter()
                .filter(move |&&b| a < b)
                .map(move |&b| (a, b))
        })
    }

    /// Connected components, each sorted, listed by smallest member.
    pub fn components(&self) -> Vec<Component> {
        let mut sets = DisjointSet::new(self.adjacency.len());

        for (pos, neighbours) in self.adjacency.values().enumerate() {
            for b in neighbours {
                if let Some(other) = self.adjacency.get_index_of(b) {
                    sets.union(pos, other);
                }
            }
        }

        let mut groups: IndexMap<usize, Vec<u32>> = IndexMap::new();
        for (pos, &node) in self.adjacency.keys().enumerate() {
            groups.entry(sets.find(pos)).or_default().push(node);
        }

        let mut components: Vec<Component> = groups.into_values().map(Component::new).collect();
        components.sort_by_key(|c| c.members.first().copied());
        components
    }
}

/// Union-find with path halving and union by rank.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}

/// Join raster neighbours that pass the ratio test.
///
/// Each pixel from row 1 and column 1 on is tested against its left,
/// up-left, up, and up-right neighbours, which covers every 8-neighbour pair
/// reachable from that scan.
#[instrument(skip_all, fields(width = raster.width(), height = raster.height()))]
pub fn build_pixel_graph(raster: &StrokeWidthRaster, ratio_threshold: f32) -> (AdjacencyGraph, RowIndex) {
    let width = raster.width();
    let height = raster.height();

    let row_edges: Vec<Vec<(u32, u32)>> = (1..height)
        .into_par_iter()
        .map(|y| {
            let mut edges = Vec::new();
            for x in 1..width {
                let current = raster.get(x, y);
                if current <= 0.0 {
                    continue;
                }
                let here = y * width + x;
                let up = y - 1;

                let mut neighbours: SmallVec<[(u32, u32); 4]> =
                    smallvec![(x - 1, y), (x - 1, up), (x, up)];
                if x + 1 < width {
                    neighbours.push((x + 1, up));
                }

                for (nx, ny) in neighbours {
                    if ratio_test(current, raster.get(nx, ny), ratio_threshold) {
                        edges.push((here, ny * width + nx));
                    }
                }
            }
            edges
        })
        .collect();

    let mut graph = AdjacencyGraph::new();
    let mut rows = RowIndex::new(width, height);
    for (a, b) in row_edges.into_iter().flatten() {
        graph.add_edge(a, b);
        rows.record(a, a / width);
        rows.record(b, b / width);
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "pixel graph built"
    );
    (graph, rows)
}

/// Join consecutive points along each ray that pass the ratio test.
#[instrument(skip_all, fields(rays = rays.len()))]
pub fn build_ray_graph(
    raster: &StrokeWidthRaster,
    rays: &[Ray],
    ratio_threshold: f32,
) -> (AdjacencyGraph, RowIndex) {
    let width = raster.width();

    let ray_edges: Vec<Vec<(u32, u32)>> = rays
        .par_iter()
        .map(|ray| {
            ray.points
                .windows(2)
                .filter(|pair| {
                    ratio_test(
                        raster.get(pair[0].x, pair[0].y),
                        raster.get(pair[1].x, pair[1].y),
                        ratio_threshold,
                    )
                })
                .map(|pair| (pair[0].y * width + pair[0].x, pair[1].y * width + pair[1].x))
                .collect()
        })
        .collect();

    let mut graph = AdjacencyGraph::new();
    let mut rows = RowIndex::new(width, raster.height());
    for (a, b) in ray_edges.into_iter().flatten() {
        graph.add_edge(a, b);
        rows.record(a, a / width);
        rows.record(b, b / width);
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "ray graph built"
    );
    (graph, rows)
}
