// A single survey sample in 3D space. Compared only by coordinates, never by identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

// Helper function to create a Point3 instance
pub fn point3(x: f64, y: f64, z: f64) -> Point3 {
  Point3 { x, y, z }
}

// Component-wise difference a - b
pub fn minus(a: Point3, b: Point3) -> Point3 {
  point3(a.x - b.x, a.y - b.y, a.z - b.z)
}

// Component-wise sum a + b
pub fn plus(a: Point3, b: Point3) -> Point3 {
  point3(a.x + b.x, a.y + b.y, a.z + b.z)
}

// Scale all components by a scalar value
pub fn scale(v: Point3, s: f64) -> Point3 {
  point3(v.x * s, v.y * s, v.z * s)
}

// Euclidean length of the vector from the origin
pub fn length(v: Point3) -> f64 {
  (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
}

// Euclidean distance between two points
pub fn distance(a: Point3, b: Point3) -> f64 {
  length(minus(a, b))
}

// Scale the vector to unit length. Undefined for a zero vector; callers guard.
pub fn normalize(v: Point3) -> Point3 {
  scale(v, 1.0 / length(v))
}

// Compute the (cos, sin) pair rotating the in-plane direction (u, v) onto the u axis.
// A zero-length projection has no defined angle; the identity rotation is
// substituted so degenerate inputs pass through the stage unchanged.
pub fn plane_rotation(u: f64, v: f64) -> (f64, f64) {
  let len = (u * u + v * v).sqrt();
  if len == 0.0 {
    return (1.0, 0.0);
  }
  (u / len, v / len)
}
