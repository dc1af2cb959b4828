use std::io::{self, Write};

use super::recorder::Sample;

/// Write recorded samples to CSV.
///
/// Columns: tick, satellites, then body{i}_x, body{i}_y per massive body.
pub fn write_samples<W: Write>(writer: &mut W, samples: &[Sample]) -> io::Result<()> {
    let n_bodies = samples.first().map_or(0, |s| s.bodies.len());

    write!(writer, "tick,satellites")?;
    for i in 0..n_bodies {
        write!(writer, ",body{i}_x,body{i}_y")?;
    }
    writeln!(writer)?;

    for s in samples {
        write!(writer, "{},{}", s.tick, s.satellites)?;
        for [x, y] in &s.bodies {
            write!(writer, ",{:.4},{:.4}", x, y)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Write samples to a CSV file at the given path.
pub fn write_samples_file(path: &str, samples: &[Sample]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_samples(&mut file, samples)
}
