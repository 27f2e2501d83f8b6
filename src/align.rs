use anyhow::{bail, Result};

use crate::math::{self, point3, Point3};

// The two most distant points of a set, in scan order, with their separation.
// The assignment of `a` and `b` fixes the sign of the principal axis: the
// cloud is rotated so that `b` ends up on the positive X side of `a`.
#[derive(Debug, Clone, Copy)]
pub struct FurthestPair {
  pub a: Point3,
  pub b: Point3,
  pub distance: f64,
}

// Scan all unordered pairs (i, j), i < j, and keep the pair with the maximum
// Euclidean distance. Strict comparison, so among equally distant pairs the
// first one encountered wins. Exhaustive O(n²); survey profiles are small
// enough that no spatial index is warranted.
pub fn furthest_pair(points: &[Point3]) -> Result<FurthestPair> {
  if points.len() < 2 {
    bail!("insufficient points: a furthest pair requires at least 2 points, got {}", points.len());
  }

  let mut best = (points[0], points[1]);
  let mut max_distance = math::distance(points[0], points[1]);
  for i in 0..points.len() {
    for j in (i + 1)..points.len() {
      let dist = math::distance(points[i], points[j]);
      if dist > max_distance {
        best = (points[i], points[j]);
        max_distance = dist;
      }
    }
  }

  Ok(FurthestPair { a: best.0, b: best.1, distance: max_distance })
}

// Rotate the whole set so the unit reference direction `dir` lands on (1, 0, 0).
// Two plane rotations in a fixed, non-commutative order. The second angle is
// computed from the direction as updated by the first rotation, which is what
// makes the composition zero both off-axis components.
pub fn align_with_x(dir: Point3, points: &[Point3]) -> Vec<Point3> {
  // Rotation about Z, within the X-Y plane: zeroes the Y component of `dir`.
  let (cos, sin) = math::plane_rotation(dir.x, dir.y);
  let dir = point3(dir.x * cos + dir.y * sin, dir.y * cos - dir.x * sin, dir.z);
  let rotated: Vec<Point3> = points
    .iter()
    .map(|p| point3(p.x * cos + p.y * sin, p.y * cos - p.x * sin, p.z))
    .collect();

  // Rotation about Y, within the X-Z plane, from the updated direction:
  // zeroes the Z component, leaving `dir` as (length, 0, 0).
  let (cos, sin) = math::plane_rotation(dir.x, dir.z);
  rotated
    .iter()
    .map(|p| point3(p.x * cos + p.z * sin, p.y, p.z * cos - p.x * sin))
    .collect()
}

// Component-wise arithmetic mean of the set.
pub fn centroid(points: &[Point3]) -> Point3 {
  let mut sum = point3(0.0, 0.0, 0.0);
  for p in points {
    sum = math::plus(sum, *p);
  }
  math::scale(sum, 1.0 / points.len() as f64)
}

// Rotate the set about the X axis so the centroid's Y-Z component points to
// pure +Y. Without this step the tilt of the cloud around the principal axis
// would be an accident of the input orientation. The cos-from-Y, sin-from-Z
// convention decides which way "up" points; changing it would silently flip
// existing profiles, so it stays.
pub fn level_centroid(points: &[Point3]) -> Vec<Point3> {
  let c = centroid(points);
  let (cos, sin) = math::plane_rotation(c.y, c.z);
  points
    .iter()
    .map(|p| point3(p.x, p.y * cos + p.z * sin, p.z * cos - p.y * sin))
    .collect()
}

// Translate the set so the point with the minimum X coordinate sits at the
// origin. Left fold with a strict comparison, so the first minimum in
// sequence order is the anchor. Pure translation; pairwise distances and the
// orientation established by the rotations are unaffected.
pub fn start_at_origin(points: &[Point3]) -> Vec<Point3> {
  let origin = match points.iter().copied().reduce(|a, b| if a.x > b.x { b } else { a }) {
    Some(p) => p,
    None => return Vec::new(),
  };
  points.iter().map(|p| math::minus(*p, origin)).collect()
}

// Full canonicalization pipeline: furthest pair -> axis alignment ->
// centroid leveling -> origin normalization. A rigid transform end to end,
// so all pairwise distances survive; output length and order match the
// input exactly. Re-running on its own output reproduces it (canonical form
// is a fixed point).
pub fn canonicalize(points: &[Point3]) -> Result<Vec<Point3>> {
  let pair = furthest_pair(points)?;
  if pair.distance == 0.0 {
    bail!("degenerate point cloud: all points coincide, no principal axis exists");
  }
  let dir = math::normalize(math::minus(pair.b, pair.a));

  let aligned = align_with_x(dir, points);
  let leveled = level_centroid(&aligned);
  Ok(start_at_origin(&leveled))
}
