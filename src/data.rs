use anyhow::{bail, Context, Result};

use crate::math::{point3, Point3};

// Parse a comma-separated point table: one `x, y, z` row per point. Input is
// case-folded and whitespace around fields is ignored; blank lines are
// skipped. Row order is preserved so output points can be correlated back to
// source rows. Rows with a wrong field count or non-numeric values are
// reported with their 1-based row number; the alignment pipeline itself only
// ever sees well-formed points.
pub fn parse_points(text: &str) -> Result<Vec<Point3>> {
  let mut points = Vec::new();
  for (index, line) in text.to_lowercase().trim().lines().enumerate() {
    let line = line.trim();
    if line.is_empty() {
      continue;
    }
    let fields: Vec<&str> = line.split(',').map(|field| field.trim()).collect();
    if fields.len() != 3 {
      bail!("row {}: expected 3 comma-separated values, found {}", index + 1, fields.len());
    }
    let mut coords = [0.0_f64; 3];
    for (field, coord) in fields.iter().zip(coords.iter_mut()) {
      *coord = field
        .parse::<f64>()
        .with_context(|| format!("row {}: '{}' is not a number", index + 1, field))?;
    }
    points.push(point3(coords[0], coords[1], coords[2]));
  }
  Ok(points)
}

// Serialize points back to the same comma-separated format. The default f64
// formatting prints the shortest representation that round-trips exactly, so
// an exported table can be re-edited and re-aligned without precision loss.
pub fn format_points(points: &[Point3]) -> String {
  let mut out = String::new();
  for p in points {
    out.push_str(&format!("{}, {}, {}\n", p.x, p.y, p.z));
  }
  out
}
