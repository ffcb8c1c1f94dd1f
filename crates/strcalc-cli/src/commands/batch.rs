//! Batch command implementation
//!
//! Evaluates one expression per JSONL line and writes one result per line.
//! A bad line becomes an error record; the batch keeps going.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use strcalc::{CalcParams, Pipeline};

use crate::cli::BatchArgs;
use crate::jsonl::{Job, JobResult};

pub fn run(args: &BatchArgs) -> Result<()> {
    let reader: Box<dyn BufRead> = if let Some(ref input_path) = args.input {
        let file = File::open(input_path)
            .with_context(|| format!("Failed to open {}", input_path.display()))?;
        Box::new(BufReader::new(file))
    } else {
        Box::new(BufReader::new(io::stdin()))
    };

    let pipeline = strcalc::pipeline_with(CalcParams::with_upper_bound(args.options.max))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = process_lines(&pipeline, reader, &mut out)?;
    log::info!(
        "Processed {} jobs: {} ok, {} failed",
        summary.jobs,
        summary.succeeded,
        summary.jobs - summary.succeeded
    );

    Ok(())
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    jobs: usize,
    succeeded: usize,
}

fn process_lines<R: BufRead, W: Write>(
    pipeline: &Pipeline,
    reader: R,
    out: &mut W,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read batch input")?;
        if line.trim().is_empty() {
            continue;
        }
        summary.jobs += 1;

        let result = match serde_json::from_str::<Job>(&line) {
            Ok(job) => match pipeline.process(&job.expression) {
                Ok(total) => {
                    summary.succeeded += 1;
                    JobResult::success(job.id, total)
                },
                Err(e) => {
                    log::debug!("Job {} failed: {e}", job.id);
                    JobResult::failure(job.id, &e)
                },
            },
            Err(e) => {
                log::warn!("Skipping malformed line {}: {e}", index + 1);
                JobResult::malformed(index + 1, e)
            },
        };

        serde_json::to_writer(&mut *out, &result).context("Failed to write result")?;
        writeln!(out).context("Failed to write result")?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_batch(input: &str) -> (Summary, Vec<JobResult>) {
        let pipeline = strcalc::default_pipeline()
            .unwrap_or_else(|e| unreachable!("pipeline build failed: {e}"));
        let mut out = Vec::new();
        let summary = process_lines(&pipeline, input.as_bytes(), &mut out)
            .unwrap_or_else(|e| unreachable!("batch failed: {e}"));
        let results = String::from_utf8_lossy(&out)
            .lines()
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| unreachable!("bad output {l}: {e}"))
            })
            .collect();
        (summary, results)
    }

    #[test]
    fn test_batch_mixed_results() {
        let input = concat!(
            r#"{"id": "ok", "expression": "//;\n1;2"}"#,
            "\n\n",
            r#"{"id": "neg", "expression": "1,-2,-3"}"#,
            "\n",
            "not json\n",
        );

        let (summary, results) = run_batch(input);
        assert_eq!(
            summary,
            Summary {
                jobs: 3,
                succeeded: 1
            }
        );
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], JobResult::success("ok", 3));
        assert_eq!(results[1].negatives, vec![-2, -3]);
        assert_eq!(results[2].id, "line-4");
    }

    #[test]
    fn test_empty_batch() {
        let (summary, results) = run_batch("");
        assert_eq!(summary, Summary::default());
        assert!(results.is_empty());
    }
}
