//! Runs `glpsol` on a written model and scrapes the `#OUTPUT` block of its report.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use log::debug;
use crate::cust_error::SolverError;

const OUTPUT_START: &str = "#OUTPUT";
const OUTPUT_END: &str = "#OUTPUT END";

/// What is left of a solver run after scraping its standard output.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SolverReport {
    /// Lines from the first `#OUTPUT` line up to and including `#OUTPUT END`.
    pub output: Vec<String>,
    /// The `Time used` line reported by the solver, if any.
    pub time_used: Option<String>,
    pub elapsed: Duration,
}

impl SolverReport {

    /// Scrapes the standard output `stdout` of a run that took `elapsed`.
    pub fn scrape(stdout: &str, elapsed: Duration) -> Self {
        let mut output = Vec::new();
        let mut time_used = None;
        let mut inside = false;
        for line in stdout.lines() {
            if line.contains("Time used") {
                time_used = Some(line.trim().to_owned());
            } else if inside || line.contains(OUTPUT_START) {
                inside = true;
                output.push(line.to_owned());
                if line.contains(OUTPUT_END) {
                    break
                }
            }
        }
        SolverReport { output, time_used, elapsed }
    }

    /// Returns the `#OUTPUT: <value>` line, or `None` if the run printed no report.
    pub fn headline(&self) -> Option<&str> {
        self.output.first().map(String::as_str)
    }

    /// Returns the objective value printed in the headline.
    pub fn objective(&self) -> Option<i64> {
        self.headline()?
            .split_once(':')
            .and_then(|(_, value)| value.trim().parse().ok())
    }

    /// Formats the measured wall time as `<minutes>:<seconds>.<millis>`.
    pub fn elapsed_str(&self) -> String {
        let secs = self.elapsed.as_secs();
        format!("{}:{}.{}", secs / 60, secs % 60, self.elapsed.subsec_millis())
    }
}

/// Runs `<glpsol> -m <model>` and returns the scraped report.
pub fn run_glpsol(glpsol: &str, model: &Path) -> Result<SolverReport, SolverError> {
    debug!("Running {} -m {}", glpsol, model.display());
    let now = Instant::now();
    let out = Command::new(glpsol)
        .arg("-m")
        .arg(model)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| SolverError::SpawnError(glpsol.to_owned(), e))?;
    let elapsed = now.elapsed();
    if !out.status.success() {
        return Err(SolverError::Failed(out.status.code()));
    }
    let stdout = String::from_utf8(out.stdout).map_err(|_| SolverError::OutputNotUtf8)?;
    Ok(SolverReport::scrape(&stdout, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const GLPSOL_OUT: &str = "GLPSOL: GLPK LP/MIP Solver, v4.65\n\
                              Parameter(s) specified in the command line:\n -m lp.txt\n\
                              Reading model section from lp.txt...\n\
                              INTEGER OPTIMAL SOLUTION FOUND\n\
                              Time used:   0.0 secs\n\
                              Memory used: 0.1 Mb (114537 bytes)\n\
                              #OUTPUT: 2\n\
                              v_0 : 0\n\
                              v_3 : 0\n\
                              v_1 : 3\n\
                              #OUTPUT END\n\
                              Model has been successfully processed\n";

    #[test]
    fn scrape_test() {
        let report = SolverReport::scrape(GLPSOL_OUT, Duration::from_millis(61_250));
        assert_eq!(report.output.len(), 5);
        assert_eq!(report.headline(), Some("#OUTPUT: 2"));
        assert_eq!(report.output.last().map(String::as_str), Some("#OUTPUT END"));
        assert_eq!(report.objective(), Some(2));
        assert_eq!(report.time_used.as_deref(), Some("Time used:   0.0 secs"));
        assert_eq!(report.elapsed_str(), "1:1.250");
    }

    #[test]
    fn scrape_without_report_test() {
        let report = SolverReport::scrape("PROBLEM HAS NO INTEGER FEASIBLE SOLUTION\n", Duration::ZERO);
        assert!(report.output.is_empty());
        assert_eq!(report.objective(), None);
        assert_eq!(report.time_used, None);
    }

    #[test]
    fn missing_solver_test() {
        let res = run_glpsol("./no-such-glpsol-binary", Path::new("lp.txt"));
        assert!(matches!(res, Err(SolverError::SpawnError(_, _))));
    }
}
