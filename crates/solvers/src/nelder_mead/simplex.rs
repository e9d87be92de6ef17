use descent_core::{Bounds, ContinuousSolution, Problem};

/// The `n + 1` vertices of a Nelder-Mead simplex.
///
/// Vertices are kept sorted by ascending cost after every change, so the
/// best vertex is first and the worst is last.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Simplex {
    vertices: Vec<ContinuousSolution>,
}

impl Simplex {
    /// Builds the simplex `x0 + step e_i` for each axis `i`, plus `x0` shifted
    /// by `-step` along the first axis.
    pub(super) fn around<P: Problem>(problem: &P, bounds: &Bounds, x0: &[f64], step: f64) -> Self {
        let n = x0.len();
        let vertices = (0..=n)
            .map(|i| {
                let mut x = x0.to_vec();
                if i < n {
                    x[i] += step;
                } else {
                    x[0] -= step;
                }
                let cost = problem.evaluate(&x, bounds);
                ContinuousSolution::new(x, cost)
            })
            .collect();

        let mut simplex = Self { vertices };
        simplex.sort();
        simplex
    }

    fn sort(&mut self) {
        self.vertices.sort_by(|a, b| a.cost().total_cmp(&b.cost()));
    }

    pub(super) fn best(&self) -> &ContinuousSolution {
        &self.vertices[0]
    }

    pub(super) fn worst(&self) -> &ContinuousSolution {
        &self.vertices[self.vertices.len() - 1]
    }

    pub(super) fn second_worst(&self) -> &ContinuousSolution {
        &self.vertices[self.vertices.len() - 2]
    }

    /// Mean of every vertex except the worst.
    pub(super) fn centroid(&self) -> Vec<f64> {
        let kept = &self.vertices[..self.vertices.len() - 1];
        let count = kept.len() as f64;

        let mut centroid = vec![0.0; self.worst().len()];
        for vertex in kept {
            for (c, v) in centroid.iter_mut().zip(vertex.values()) {
                *c += v;
            }
        }
        centroid.iter_mut().for_each(|c| *c /= count);
        centroid
    }

    /// Returns `centroid + coefficient * (centroid - worst)`.
    pub(super) fn point_from_centroid(&self, centroid: &[f64], coefficient: f64) -> Vec<f64> {
        centroid
            .iter()
            .zip(self.worst().values())
            .map(|(c, w)| c + coefficient * (c - w))
            .collect()
    }

    pub(super) fn replace_worst(&mut self, vertex: ContinuousSolution) {
        let last = self.vertices.len() - 1;
        self.vertices[last] = vertex;
        self.sort();
    }

    /// Shrinks every vertex toward the best by `sigma` and re-evaluates all
    /// but the best.
    pub(super) fn reduce<P: Problem>(&mut self, problem: &P, bounds: &Bounds, sigma: f64) {
        let (best, rest) = self.vertices.split_at_mut(1);
        let best = best[0].values();

        for vertex in rest {
            let x: Vec<f64> = best
                .iter()
                .zip(vertex.values())
                .map(|(b, v)| b + sigma * (v - b))
                .collect();
            let cost = problem.evaluate(&x, bounds);
            *vertex = ContinuousSolution::new(x, cost);
        }

        self.sort();
    }

    /// Largest distance between any two vertices.
    pub(super) fn diameter(&self) -> f64 {
        let mut largest: f64 = 0.0;
        for (i, a) in self.vertices.iter().enumerate() {
            for b in &self.vertices[i + 1..] {
                if let Ok(distance_sq) = a.distance_sq(b) {
                    largest = largest.max(distance_sq);
                }
            }
        }
        largest.sqrt()
    }
}
