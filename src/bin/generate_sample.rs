//! Writes a demo folder tree for trying the viewer without a real test run:
//!
//! ```text
//! <out>/demo_robin_{1..3}.csv
//! <out>/demo_full_{1..2}.csv
//! <out>/demo_oneshot.csv
//! <out>/golds/demo_gold.csv
//! ```
//!
//! Usage: `generate_sample [out_dir]` (default `sample_data`).

use std::path::Path;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Write one polled-metrics CSV: ~30 s of samples at 4 Hz.
///
/// `base_fps` shifts the whole trace so runs are visually distinct;
/// `noise` controls per-sample jitter (the gold run uses very little).
fn write_run_csv(
    path: &Path,
    rng: &mut SimpleRng,
    base_fps: f64,
    noise: f64,
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["poll_time_s", "fps_avg", "frame_time_ms", "gpu_busy_pct"])?;

    for i in 0..120 {
        let t = i as f64 * 0.25;
        // Slow load wave on top of the base frame rate.
        let fps = base_fps + 8.0 * (t / 6.0).sin() + rng.gauss(0.0, noise);
        let frame_time = 1000.0 / fps.max(1.0);
        let gpu_busy = (45.0 + 30.0 * (t / 9.0).cos() + rng.gauss(0.0, noise)).clamp(0.0, 100.0);

        writer.write_record([
            format!("{t:.2}"),
            format!("{fps:.3}"),
            format!("{frame_time:.3}"),
            format!("{gpu_busy:.3}"),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn main() {
    let out_dir = std::env::args().nth(1).unwrap_or_else(|| "sample_data".to_string());
    let out = Path::new(&out_dir);
    let golds = out.join("golds");
    std::fs::create_dir_all(&golds).expect("Failed to create output folders");

    let mut rng = SimpleRng::new(42);
    let mut written = 0usize;

    for i in 1..=3 {
        let path = out.join(format!("demo_robin_{i}.csv"));
        write_run_csv(&path, &mut rng, 118.0 + i as f64 * 3.0, 2.5)
            .expect("Failed to write robin CSV");
        written += 1;
    }
    for i in 1..=2 {
        let path = out.join(format!("demo_full_{i}.csv"));
        write_run_csv(&path, &mut rng, 112.0 + i as f64 * 5.0, 2.0)
            .expect("Failed to write full CSV");
        written += 1;
    }
    write_run_csv(&out.join("demo_oneshot.csv"), &mut rng, 125.0, 1.5)
        .expect("Failed to write oneshot CSV");
    write_run_csv(&golds.join("demo_gold.csv"), &mut rng, 120.0, 0.3)
        .expect("Failed to write gold CSV");
    written += 2;

    println!("Wrote {written} CSV files under {}", out.display());
    println!("Try:  runplot --folder {out_dir} --golds {out_dir}/golds --name demo --run-mode full-run");
}
