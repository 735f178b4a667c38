//! Write a synthetic Cobaya chain set (`test.1.txt` .. `test.8.txt`).
//!
//! Usage: `generate_chains [OUT_DIR]` (defaults to `sample_chains`).

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chains_viewer::data::loader::chain_file_path;

const BASENAME: &str = "test";
const CHAINS: usize = 8;
const SAMPLES: usize = 2000;

/// Cobaya prefixes the header with `#`, which has no data column.
const HEADER: &str = "#    weight  minuslogpost          H0       ombh2       omch2        chi2";

/// (start, proposal width) per sampled parameter.
const PARAMS: [(f64, f64); 3] = [(67.0, 0.6), (0.0224, 0.0002), (0.120, 0.0015)];

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

/// Toy Gaussian likelihood around a fiducial cosmology.
fn chi2(p: &[f64; 3]) -> f64 {
    const FIDUCIAL: [f64; 3] = [67.4, 0.02237, 0.1200];
    const SIGMA: [f64; 3] = [0.5, 0.00015, 0.0012];
    p.iter()
        .zip(FIDUCIAL.iter().zip(SIGMA.iter()))
        .map(|(&v, (&mu, &s))| ((v - mu) / s).powi(2))
        .sum()
}

/// Metropolis random walk; repeated states increase the weight column.
fn chain_text(rng: &mut SimpleRng, chain: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADER}");

    // Spread the starting points so the burn-in is visible.
    let offset = (chain as f64 - CHAINS as f64 / 2.0) * 0.8;
    let mut current = [
        PARAMS[0].0 + offset * 2.0,
        PARAMS[1].0 + offset * 0.0004,
        PARAMS[2].0 + offset * 0.002,
    ];
    let mut current_chi2 = chi2(&current);
    let mut weight = 1u32;
    let mut written = 0;

    while written < SAMPLES {
        let proposal = [
            rng.gauss(current[0], PARAMS[0].1),
            rng.gauss(current[1], PARAMS[1].1),
            rng.gauss(current[2], PARAMS[2].1),
        ];
        let proposal_chi2 = chi2(&proposal);
        let accept = rng.next_f64().ln() < 0.5 * (current_chi2 - proposal_chi2);

        if accept {
            let _ = writeln!(
                out,
                "{weight:>12} {:>13.6} {:>11.5} {:>11.7} {:>11.6} {:>11.5}",
                0.5 * current_chi2,
                current[0],
                current[1],
                current[2],
                current_chi2
            );
            written += 1;
            current = proposal;
            current_chi2 = proposal_chi2;
            weight = 1;

            if written == SAMPLES / 2 {
                let _ = writeln!(out, "# checkpoint: {written} samples written");
            }
        } else {
            weight += 1;
        }
    }
    out
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_chains"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);
    for chain in 1..=CHAINS {
        let path = chain_file_path(&out_dir, BASENAME, chain);
        std::fs::write(&path, chain_text(&mut rng, chain))
            .with_context(|| format!("writing {}", path.display()))?;
    }

    println!(
        "Wrote {CHAINS} chains ({SAMPLES} samples each) as {BASENAME}.N.txt to {}",
        out_dir.display()
    );
    Ok(())
}
