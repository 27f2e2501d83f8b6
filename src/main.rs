use clap::{Arg, Command};
use std::error::Error;
use std::fs;
use std::path::Path;
use std::time::Instant;

use profile_aligner::{align, chart, data, plot, text};

// Parse a "x,y" cursor position given in plot pixel space
fn parse_cursor(value: &str) -> Option<[f64; 2]> {
  let parts: Vec<&str> = value.split(',').map(|part| part.trim()).collect();
  if parts.len() != 2 {
    return None;
  }
  let x = parts[0].parse::<f64>().ok()?;
  let y = parts[1].parse::<f64>().ok()?;
  Some([x, y])
}

fn main() -> Result<(), Box<dyn Error>> {
  let start_time = Instant::now();

  // Define the command line arguments
  let app = Command::new("Survey Profile Aligner")
    .version(env!("CARGO_PKG_VERSION"))
    .arg(
      Arg::new("input_file")
        .short('i')
        .long("input-file")
        .required(true)
        .help("Specify the input point table path (comma-separated x, y, z rows)"),
    )
    .arg(
      Arg::new("output_file")
        .short('o')
        .long("output-file")
        .help("Specify the output path for the aligned point table"),
    )
    .arg(
      Arg::new("plot_file")
        .short('p')
        .long("plot-file")
        .help("Specify the output path for an HTML profile chart"),
    )
    .arg(
      Arg::new("exaggeration")
        .short('e')
        .long("exaggeration")
        .default_value("1.0")
        .help("Specify the vertical exaggeration factor for the plot"),
    )
    .arg(
      Arg::new("probe")
        .long("probe")
        .value_name("x,y")
        .help("Report the plotted point nearest to the given pixel position"),
    );

  let line = "-".repeat(72);
  let dline = "=".repeat(72);

  println!("\n\
  {}\n\
  {}\n\
  Tool for aligning a 3D survey point cloud into a reproducible 2D profile.\n\
  {}\n",
  text::highlight(format!("{} {}", text::bold("Survey Profile Aligner"), app.get_version().unwrap())),
  line,
  dline);

  // Parse the command line arguments
  let matches = app.get_matches();

  let input_file = matches.get_one::<String>("input_file").unwrap();
  let output_file = matches.get_one::<String>("output_file");
  let plot_file = matches.get_one::<String>("plot_file");

  // Parsing and validating 'exaggeration'
  let exaggeration = match matches.get_one::<String>("exaggeration").unwrap().parse::<f64>() {
    Ok(value) if value > 0.0 => {
      if value > 100.0 {
        println!(
          "{}: 'exaggeration' value is unusually high ({}). The profile may degenerate to a vertical band.\n",
          text::warning("Warning"),
          value
        );
      }
      value
    }
    Ok(_) => {
      panic!("'exaggeration' must be greater than 0.");
    }
    Err(_) => {
      panic!("'exaggeration' must be a valid positive number.");
    }
  };

  // Parsing and validating 'probe'
  let probe = match matches.get_one::<String>("probe") {
    Some(value) => match parse_cursor(value) {
      Some(cursor) => Some(cursor),
      None => {
        panic!("'probe' must be two comma-separated numbers, e.g. 400,200.");
      }
    },
    None => None,
  };

  // Summarize initial settings to the user
  println!("Alignment starts with settings:");
  println!("{}", line);
  println!("Input point table: {}", input_file);
  if exaggeration != 1.0 {
    println!("Vertical exaggeration: {}", exaggeration);
  } else {
    println!("Vertical exaggeration: none");
  }
  if let Some(output_file) = output_file {
    println!("Aligned table {} {}", text::ARROW, output_file);
  }
  if let Some(plot_file) = plot_file {
    println!("Profile chart {} {}", text::ARROW, plot_file);
  }
  println!("{}\n", dline);

  let mut part_time = Instant::now();

  // Read and parse the input point table
  let raw = fs::read_to_string(input_file)
  .unwrap_or_else(|_| {
    let output = format!("{}: Failed to open input file: {}", text::error("Error"), input_file);
    eprintln!("{}\n", text::bold(output));
    std::process::exit(1);
  });

  let points = data::parse_points(&raw)
  .unwrap_or_else(|err| {
    let output = format!("{}: Failed to parse input file: {}", text::error("Error"), err);
    eprintln!("{}\n", text::bold(output));
    std::process::exit(1);
  });

  let elapsed_time1 = part_time.elapsed();
  println!("{} Input table ({} points) read in {:.2} s.", text::success(text::CHECK), points.len(), elapsed_time1.as_secs_f64());
  part_time = Instant::now();

  // Align the point cloud to its canonical orientation
  let canonical = align::canonicalize(&points)
  .unwrap_or_else(|err| {
    let output = format!("{}: Failed to align point cloud: {}", text::error("Error"), err);
    eprintln!("{}\n", text::bold(output));
    std::process::exit(1);
  });

  let extent = align::furthest_pair(&canonical)?;

  let elapsed_time2 = part_time.elapsed();
  println!("{} Point cloud aligned in {:.2} s (profile length {:.2}).", text::success(text::CHECK), elapsed_time2.as_secs_f64(), extent.distance);
  part_time = Instant::now();

  // Write the aligned table; the full-precision format round-trips through re-editing
  if let Some(output_file) = output_file {
    fs::write(output_file, data::format_points(&canonical))?;
    println!("{} Aligned point table written to {}.", text::success(text::CHECK), output_file);
  }

  // Project to pixel space for the chart and the probe readout
  if plot_file.is_some() || probe.is_some() {
    let plotted = plot::project(&canonical, exaggeration);

    if let Some(plot_file) = plot_file {
      chart::save_profile_chart(Path::new(plot_file), "Survey profile", &plotted)?;
      println!("{} Profile chart written to {}.", text::success(text::CHECK), plot_file);
    }

    if let Some(cursor) = probe {
      if let Some(index) = plot::nearest_point(&plotted, cursor) {
        let p = canonical[index];
        println!(
          "Nearest point to pixel ({}, {}): row {} {} {:.2}, {:.2}, {:.2}",
          cursor[0], cursor[1], index + 1,
          text::light(text::ARROW),
          p.x, p.y, p.z
        );
      }
    }
  }

  if output_file.is_some() || plot_file.is_some() {
    let elapsed_time3 = part_time.elapsed();
    println!("{} Output files written in {:.2} s.", text::success(text::CHECK), elapsed_time3.as_secs_f64());
  }

  let elapsed_time = start_time.elapsed();
  println!("{}", line);
  println!("{}", text::success("Alignment completed successfully."));
  println!("Total elapsed time: {:.2} seconds.", elapsed_time.as_secs_f64());
  println!("");

  Ok(())
}
