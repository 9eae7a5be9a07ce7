//! Write two plausible sample CSVs so the viewer can be tried without real
//! FAO exports.  The files land in the working directory under the same
//! names the viewer looks for by default.

use std::fs::File;
use std::io::{BufWriter, Write};

/// Minimal deterministic PRNG (64-bit LCG), enough for sample noise.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [-1, 1).
    fn jitter(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }
}

fn write_dataset(
    path: &str,
    country: &str,
    base_area: f64,
    growth: f64,
    years: std::ops::RangeInclusive<i64>,
    rng: &mut SimpleRng,
) {
    let file = File::create(path).expect("Failed to create output file");
    let mut w = BufWriter::new(file);

    writeln!(w, "Country,Item,Year,Area Harvested,Yield").expect("write header");
    for (i, year) in years.enumerate() {
        let area = base_area + growth * i as f64 + base_area * 0.05 * rng.jitter();
        let yield_ = 0.4 + 0.1 * rng.jitter();
        // leave the occasional hole so the cleaner has something to drop
        if i % 7 == 5 {
            writeln!(w, "{country},Cocoa beans,{year},,{yield_:.3}").expect("write row");
        } else {
            writeln!(w, "{country},Cocoa beans,{year},{area:.1},{yield_:.3}")
                .expect("write row");
        }
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    write_dataset(
        "data_de_Ghana.csv",
        "Ghana",
        1500.0,
        18.0,
        1990..=2020,
        &mut rng,
    );
    write_dataset(
        "data_de_Coast.csv",
        "Ivory Coast",
        2400.0,
        35.0,
        1992..=2022,
        &mut rng,
    );

    println!("Wrote data_de_Ghana.csv and data_de_Coast.csv");
}
