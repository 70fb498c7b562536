/// Implements a piecewise-linear function defined by sorted (x, y) knots
///
/// Used to describe quantities that vary with geological age, e.g., the solid
/// thickness of a finite element as deposition and erosion add and remove
/// mineral content. Evaluation clamps at both ends: queries before the first
/// knot return the first value and queries after the last knot return the
/// last value.
#[derive(Clone, Debug)]
pub struct PiecewiseLinear {
    /// Knots sorted by ascending x
    points: Vec<(f64, f64)>,
}

impl PiecewiseLinear {
    /// Allocates a new instance with no knots
    pub fn new() -> Self {
        PiecewiseLinear { points: Vec::new() }
    }

    /// Adds a knot, keeping the knots sorted by ascending x
    ///
    /// Adding a knot with an existing x replaces the previous y value.
    pub fn add_point(&mut self, x: f64, y: f64) -> &mut Self {
        match self.points.binary_search_by(|p| p.0.partial_cmp(&x).unwrap()) {
            Ok(index) => self.points[index] = (x, y),
            Err(index) => self.points.insert(index, (x, y)),
        }
        self
    }

    /// Returns the number of knots
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no knots have been added
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Evaluates the function at x
    ///
    /// Returns 0.0 if no knots have been added.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.points.len();
        if n == 0 {
            return 0.0;
        }
        if x <= self.points[0].0 {
            return self.points[0].1;
        }
        if x >= self.points[n - 1].0 {
            return self.points[n - 1].1;
        }
        // index of the first knot strictly to the right of x
        let index = self.points.partition_point(|p| p.0 <= x);
        let (x0, y0) = self.points[index - 1];
        let (x1, y1) = self.points[index];
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
