// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use changeover_model::prelude::{Problem, ProblemLoader, SequenceValidator};
use changeover_solver::prelude::{compute_score, evaluate_sequence, OptimalCache, SolverSelector};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

fn find_instances_dir() -> Option<PathBuf> {
    let mut cur: Option<&Path> = Some(Path::new(env!("CARGO_MANIFEST_DIR")));
    while let Some(p) = cur {
        let cand = p.join("instances");
        if cand.is_dir() {
            return Some(cand);
        }
        cur = p.parent();
    }
    None
}

fn instances() -> impl Iterator<Item = (Problem<i64>, String)> {
    let inst_dir = find_instances_dir()
        .expect("Could not find an `instances/` directory in any ancestor of CARGO_MANIFEST_DIR");
    let mut files: Vec<PathBuf> = std::fs::read_dir(&inst_dir)
        .expect("read_dir(instances) failed")
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().map(|ft| ft.is_file()).unwrap_or(false)
                && e.path().extension().map(|x| x == "txt").unwrap_or(false)
        })
        .map(|e| e.path())
        .collect();

    files.sort();
    files.into_iter().filter_map(|f| {
        let loader = ProblemLoader::default();
        match loader.from_path(&f) {
            Ok(problem) => {
                let name = f
                    .file_name()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| f.to_string_lossy().into_owned());
                Some((problem, name))
            }
            Err(e) => {
                tracing::warn!("Skipping {}: {}", f.display(), e);
                None
            }
        }
    })
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT | FmtSpan::CLOSE)
        .init();
}

#[derive(Serialize)]
struct RunRecord {
    iteration: usize,
    filename: String,
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_ms: u128,
    equipment: usize,
    optimal_sequence: Vec<String>,
    optimal_minutes: Option<i64>,
    baseline_minutes: Option<i64>,
    baseline_score: Option<f64>,
    baseline_rank: Option<String>,
}

fn main() {
    enable_tracing();

    let mut results: Vec<RunRecord> = Vec::new();

    for (iter, (problem, file)) in instances().enumerate() {
        let iteration = iter + 1;

        tracing::info!(
            "Solving [{}] {} with {} equipment",
            iteration,
            file,
            problem.equipment_len()
        );

        let start_ts = Utc::now();
        let t0 = Instant::now();

        let cache = OptimalCache::new();
        let outcome = SolverSelector::new().find_optimal(&problem, &cache);

        let runtime = t0.elapsed();
        let end_ts = Utc::now();

        let mut record = RunRecord {
            iteration,
            filename: file.clone(),
            start_ts,
            end_ts,
            runtime_ms: runtime.as_millis(),
            equipment: problem.equipment_len(),
            optimal_sequence: Vec::new(),
            optimal_minutes: None,
            baseline_minutes: None,
            baseline_score: None,
            baseline_rank: None,
        };

        match outcome {
            Ok(optimal) => {
                tracing::info!(
                    "Finished [{}] {}: optimal={} minutes, runtime={:?}",
                    iteration,
                    file,
                    optimal.total_time().value(),
                    runtime
                );
                record.optimal_sequence = optimal
                    .sequence()
                    .iter()
                    .map(|c| c.as_str().to_string())
                    .collect();
                record.optimal_minutes = Some(optimal.total_time().value());

                // Score the naive code-order walk as a baseline.
                let baseline: Vec<_> = problem.equipment_codes().cloned().collect();
                if let Err(e) = SequenceValidator::validate_permutation(&problem, &baseline) {
                    tracing::warn!("Baseline [{}] {} invalid: {}", iteration, file, e);
                    results.push(record);
                    continue;
                }
                match evaluate_sequence(&baseline, problem.matrix()) {
                    Ok(total) => {
                        let report = compute_score(total, optimal.total_time(), 0);
                        tracing::info!(
                            "Baseline [{}] {}: {} minutes, score={:.2} rank={}",
                            iteration,
                            file,
                            total.value(),
                            report.score,
                            report.rank
                        );
                        record.baseline_minutes = Some(total.value());
                        record.baseline_score = Some(report.score);
                        record.baseline_rank = Some(report.rank.to_string());
                    }
                    Err(e) => {
                        tracing::warn!("Baseline [{}] {} not scorable: {}", iteration, file, e);
                    }
                }
            }
            Err(e) => {
                tracing::error!("Failed [{}] {}: {}", iteration, file, e);
            }
        }

        results.push(record);
    }

    // Persist results
    let out_path = PathBuf::from("changeover_results.json");
    match File::create(&out_path).and_then(|mut f| {
        let json = serde_json::to_string_pretty(&results).expect("serialize results");
        f.write_all(json.as_bytes())
    }) {
        Ok(()) => {
            tracing::info!(
                "Wrote {} run record(s) to {}",
                results.len(),
                out_path.display()
            );
        }
        Err(e) => {
            tracing::error!("Failed to write results to {}: {}", out_path.display(), e);
        }
    }
}
