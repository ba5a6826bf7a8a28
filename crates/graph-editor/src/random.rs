//! Random demo graphs.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};
use crate::session::GraphSession;

/// Rectangle random vertices are placed in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_x: 75.0,
            max_x: 800.0,
            min_y: 75.0,
            max_y: 600.0,
        }
    }
}

/// Parameters for [`GraphSession::generate_random`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomGraphSpec {
    pub min_vertices: usize,
    pub max_vertices: usize,
    pub bounds: Bounds,
}

impl Default for RandomGraphSpec {
    fn default() -> Self {
        Self {
            min_vertices: 3,
            max_vertices: 10,
            bounds: Bounds::default(),
        }
    }
}

impl RandomGraphSpec {
    /// Largest vertex count a random graph may have.
    pub const MAX_VERTICES: usize = 1000;

    pub fn validate(&self) -> GraphResult<()> {
        if self.min_vertices == 0 {
            return Err(GraphError::InvalidRandomSpec(
                "min_vertices must be at least 1".to_string(),
            ));
        }
        if self.min_vertices > self.max_vertices {
            return Err(GraphError::InvalidRandomSpec(format!(
                "min_vertices {} exceeds max_vertices {}",
                self.min_vertices, self.max_vertices
            )));
        }
        if self.max_vertices > Self::MAX_VERTICES {
            return Err(GraphError::InvalidRandomSpec(format!(
                "max_vertices {} exceeds the limit of {}",
                self.max_vertices,
                Self::MAX_VERTICES
            )));
        }
        let b = &self.bounds;
        // The spans must be finite too, or uniform sampling overflows.
        let finite = [
            b.min_x,
            b.max_x,
            b.min_y,
            b.max_y,
            b.max_x - b.min_x,
            b.max_y - b.min_y,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite || b.min_x > b.max_x || b.min_y > b.max_y {
            return Err(GraphError::InvalidRandomSpec(format!(
                "bounds x {}..{} y {}..{} are not a valid rectangle",
                b.min_x, b.max_x, b.min_y, b.max_y
            )));
        }
        Ok(())
    }
}

/// What [`GraphSession::generate_random`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RandomSummary {
    pub vertices: usize,
    pub edges: usize,
}

impl GraphSession {
    /// Replace the graph with a random one.
    ///
    /// `N` vertices labeled `"1"..="N"` are placed uniformly inside the
    /// bounds. Then up to `N(N-1)/2 - N` random pairs are drawn; a draw that
    /// is a self loop or an existing edge is skipped rather than retried, so
    /// the edge count may fall short of the number of draws.
    pub fn generate_random<R: Rng + ?Sized>(
        &mut self,
        spec: &RandomGraphSpec,
        rng: &mut R,
    ) -> GraphResult<RandomSummary> {
        spec.validate()?;
        self.clear();

        let count = rng.gen_range(spec.min_vertices..=spec.max_vertices);
        let b = spec.bounds;
        for i in 1..=count {
            let x = rng.gen_range(b.min_x..=b.max_x);
            let y = rng.gen_range(b.min_y..=b.max_y);
            self.add_vertex(&i.to_string(), x, y)?;
        }

        let max_edges = count.saturating_mul(count - 1) / 2;
        let draws = max_edges.saturating_sub(count);
        let attempts = if draws == 0 { 0 } else { rng.gen_range(0..draws) };

        let mut edges = 0;
        for _ in 0..attempts {
            let a = rng.gen_range(1..=count).to_string();
            let b = rng.gen_range(1..=count).to_string();
            if a == b || self.find_edge(&a, &b).is_some() {
                continue;
            }
            self.add_edge(&a, &b)?;
            edges += 1;
        }

        log::debug!("Generated random graph with {count} vertices and {edges} edge(s)");

        Ok(RandomSummary {
            vertices: count,
            edges,
        })
    }
}
