use crate::math::Point3;

// Reference canvas the profile is projected onto, in pixels.
pub const PLOT_WIDTH: f64 = 800.0;
pub const PLOT_HEIGHT: f64 = 400.0;

// Axis-aligned bounding box over the X and Y components of a point set.
// Z is retained in the data but takes no part in plot placement.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
  pub x_min: f64,
  pub x_max: f64,
  pub y_min: f64,
  pub y_max: f64,
}

impl Bounds {
  pub fn of(points: &[Point3]) -> Bounds {
    let mut bounds = Bounds {
      x_min: f64::INFINITY,
      x_max: f64::NEG_INFINITY,
      y_min: f64::INFINITY,
      y_max: f64::NEG_INFINITY,
    };
    for p in points {
      bounds.x_min = bounds.x_min.min(p.x);
      bounds.x_max = bounds.x_max.max(p.x);
      bounds.y_min = bounds.y_min.min(p.y);
      bounds.y_max = bounds.y_max.max(p.y);
    }
    bounds
  }

  // Uniform scale factor fitting the bounds into a canvas while preserving
  // the aspect ratio: the wider of the two extents (relative to the canvas
  // shape) decides.
  pub fn fit_scale(&self, width: f64, height: f64) -> f64 {
    let x_delta = self.x_max - self.x_min;
    let y_delta = self.y_max - self.y_min;
    if x_delta / y_delta > width / height {
      width / x_delta
    } else {
      height / y_delta
    }
  }
}

// Map each point to pixel coordinates on the reference canvas: scaled
// uniformly, centered, with Y flipped to screen orientation. The vertical
// exaggeration multiplier stretches each point's Y offset away from the
// canvas midline, which exaggerates relief without touching X.
pub fn project(points: &[Point3], exaggeration: f64) -> Vec<[f64; 2]> {
  let bounds = Bounds::of(points);
  let scale = bounds.fit_scale(PLOT_WIDTH, PLOT_HEIGHT);
  let x_offset = (PLOT_WIDTH - (bounds.x_max - bounds.x_min) * scale) / 2.0;
  let y_offset = (PLOT_HEIGHT - (bounds.y_max - bounds.y_min) * scale) / 2.0;

  points
    .iter()
    .map(|p| {
      let px = (p.x - bounds.x_min) * scale + x_offset;
      let flat_py = PLOT_HEIGHT - (p.y - bounds.y_min) * scale - y_offset;
      let py = (flat_py - PLOT_HEIGHT / 2.0) * exaggeration + PLOT_HEIGHT / 2.0;
      [px, py]
    })
    .collect()
}

// Index of the plotted point nearest to the cursor, by Euclidean distance in
// pixel space. Linear scan with a strict comparison: the first-encountered
// point wins ties. Both the plotted set and the cursor are explicit
// parameters, so the query is testable in isolation.
pub fn nearest_point(plotted: &[[f64; 2]], cursor: [f64; 2]) -> Option<usize> {
  let mut nearest = None;
  let mut nearest_dist = f64::INFINITY;
  for (index, p) in plotted.iter().enumerate() {
    let dist = ((p[0] - cursor[0]).powi(2) + (p[1] - cursor[1]).powi(2)).sqrt();
    if dist < nearest_dist {
      nearest = Some(index);
      nearest_dist = dist;
    }
  }
  nearest
}
