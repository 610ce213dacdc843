//! CSV reporting and cross-trial aggregation.
//!
//! The CSV layout is one header line followed by one row per generation:
//!
//! ```text
//! MinFitness,MaxFitness,AvgFitness,MinObjective,MaxObjective,AvgObjective
//! 1.234567,98.765432,40.000000,612.500000,1245.500000,900.123456
//! ```
//!
//! Values are written with six fixed decimals. Where files go is up to
//! the caller; everything here writes to any [`std::io::Write`].

use crate::error::Result;
use crate::ga::{GenerationStats, TrialStats};
use std::io::Write;

/// Header row of the statistics CSV.
pub const CSV_HEADER: &str = "MinFitness,MaxFitness,AvgFitness,MinObjective,MaxObjective,AvgObjective";

/// Writes one row per generation snapshot, preceded by [`CSV_HEADER`].
pub fn write_generations_csv<W: Write>(generations: &[GenerationStats], mut out: W) -> Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for g in generations {
        writeln!(
            out,
            "{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
            g.min_fitness,
            g.max_fitness,
            g.avg_fitness,
            g.min_objective,
            g.max_objective,
            g.avg_objective
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Writes a trial's statistics as CSV.
pub fn write_csv<W: Write>(trial: &TrialStats, out: W) -> Result<()> {
    write_generations_csv(&trial.generations, out)
}

/// Averages each statistic across trials, generation by generation.
///
/// The result has as many entries as the shortest trial. Best-individual
/// records are not averaged and are left empty.
pub fn average_trials(trials: &[TrialStats]) -> Vec<GenerationStats> {
    let Some(len) = trials.iter().map(|t| t.generations.len()).min() else {
        return Vec::new();
    };
    let n = trials.len() as f64;

    (0..len)
        .map(|gen| {
            let mut avg = GenerationStats {
                generation: gen,
                min_fitness: 0.0,
                max_fitness: 0.0,
                avg_fitness: 0.0,
                min_objective: 0.0,
                max_objective: 0.0,
                avg_objective: 0.0,
                best: None,
            };
            for trial in trials {
                let g = &trial.generations[gen];
                avg.min_fitness += g.min_fitness;
                avg.max_fitness += g.max_fitness;
                avg.avg_fitness += g.avg_fitness;
                avg.min_objective += g.min_objective;
                avg.max_objective += g.max_objective;
                avg.avg_objective += g.avg_objective;
            }
            avg.min_fitness /= n;
            avg.max_fitness /= n;
            avg.avg_fitness /= n;
            avg.min_objective /= n;
            avg.max_objective /= n;
            avg.avg_objective /= n;
            avg
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(generation: usize, base: f64) -> GenerationStats {
        GenerationStats {
            generation,
            min_fitness: base,
            max_fitness: base + 1.0,
            avg_fitness: base + 0.5,
            min_objective: base * 10.0,
            max_objective: base * 20.0,
            avg_objective: base * 15.0,
            best: None,
        }
    }

    #[test]
    fn test_csv_layout() {
        let trial = TrialStats {
            seed: 1,
            generations: vec![snapshot(0, 1.0), snapshot(1, 2.0)],
        };
        let mut buf = Vec::new();
        write_csv(&trial, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            "1.000000,2.000000,1.500000,10.000000,20.000000,15.000000"
        );
    }

    #[test]
    fn test_average_trials() {
        let a = TrialStats {
            seed: 1,
            generations: vec![snapshot(0, 1.0), snapshot(1, 3.0)],
        };
        let b = TrialStats {
            seed: 2,
            generations: vec![snapshot(0, 3.0), snapshot(1, 5.0)],
        };
        let avg = average_trials(&[a, b]);
        assert_eq!(avg.len(), 2);
        assert_eq!(avg[0].min_fitness, 2.0);
        assert_eq!(avg[1].avg_objective, 60.0);
        assert_eq!(avg[1].generation, 1);
    }

    #[test]
    fn test_average_truncates_to_shortest() {
        let a = TrialStats {
            seed: 1,
            generations: vec![snapshot(0, 1.0), snapshot(1, 1.0)],
        };
        let b = TrialStats {
            seed: 2,
            generations: vec![snapshot(0, 1.0)],
        };
        assert_eq!(average_trials(&[a, b]).len(), 1);
        assert!(average_trials(&[]).is_empty());
    }
}
