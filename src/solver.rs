//! Drives simplex iterations to optimality and assembles the solve report
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::configuration::SolverSettings;
use crate::error::SolverError;
use crate::pivot::{apply_pivot, choose_pivot, PivotChoice};
use crate::problem::{ObjectiveSense, Problem};
use crate::standardize::{standardize, StandardProblem};
use crate::tableau::{Basis, IterationSnapshot, Tableau};

/// Optimal objective value and original-variable assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Objective value in the caller's original sense
    pub z: f64,
    /// Values keyed "x1".."xn" in variable order; variables outside the
    /// final basis are 0
    pub values: IndexMap<String, f64>,
}

/// Full outcome of one solve call: the per-iteration trace plus the solution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveReport {
    /// Append-only trace, one snapshot per iteration
    pub iterations: Vec<IterationSnapshot>,
    /// The optimal solution
    pub result: Solution,
}

/// Solve `problem` with default settings.
///
/// # Examples
/// ```rust
/// use simplex_core::problem::{Constraint, ConstraintSign, Problem};
/// use simplex_core::solver::solve;
///
/// let problem = Problem::maximize(
///     vec![3.0, 5.0],
///     vec![
///         Constraint::new(vec![1.0, 0.0], ConstraintSign::LessEq, 4.0),
///         Constraint::new(vec![0.0, 2.0], ConstraintSign::LessEq, 12.0),
///         Constraint::new(vec![3.0, 2.0], ConstraintSign::LessEq, 18.0),
///     ],
/// )
/// .unwrap();
/// let report = solve(&problem).unwrap();
/// assert!((report.result.z - 36.0).abs() < 1e-9);
/// ```
pub fn solve(problem: &Problem) -> Result<SolveReport, SolverError> {
    solve_with_settings(problem, SolverSettings::default())
}

/// Solve `problem`, driving pivots until optimality or unboundedness.
///
/// The tableau and basis are owned here for the duration of the call; no
/// state survives between calls. Each performed pivot appends a post-pivot
/// snapshot tagged with the entering and leaving variable labels; the
/// terminal iteration appends one untagged snapshot of the optimal tableau.
///
/// # Errors
/// Standardization errors are passed through; [`SolverError::Unbounded`]
/// surfaces from pivot selection; [`SolverError::IterationLimit`] fires only
/// when `settings.max_iterations` is set.
pub fn solve_with_settings(
    problem: &Problem,
    settings: SolverSettings,
) -> Result<SolveReport, SolverError> {
    let standard = standardize(problem)?;
    let (mut tableau, mut basis) = Tableau::build_initial(&standard);

    let mut iterations = Vec::new();
    let mut iteration: u64 = 0;
    loop {
        iteration += 1;
        if let Some(limit) = settings.max_iterations {
            if iteration > limit {
                return Err(SolverError::IterationLimit(limit));
            }
        }

        match choose_pivot(&tableau, settings.tolerance)? {
            PivotChoice::Optimal => {
                iterations.push(IterationSnapshot {
                    iteration,
                    table: tableau.to_grid(),
                    entering: None,
                    leaving: None,
                });
                let result = extract_solution(&tableau, &basis, &standard, problem.sense());
                return Ok(SolveReport { iterations, result });
            }
            PivotChoice::Pivot { row, column } => {
                let leaving_column = basis.column_of_row(row);
                apply_pivot(&mut tableau, row, column, settings.tolerance);
                basis.replace(row, column);
                iterations.push(IterationSnapshot {
                    iteration,
                    table: tableau.to_grid(),
                    entering: Some(variable_label(column)),
                    leaving: Some(variable_label(leaving_column)),
                });
            }
        }
    }
}

/// Label for the variable occupying `column`; slack columns get labels past
/// the original variables ("x5" for the first slack of a 4-variable problem)
fn variable_label(column: usize) -> String {
    format!("x{}", column + 1)
}

/// Read the optimum out of the final tableau.
///
/// Basic rows holding original variables contribute their right-hand side;
/// every other original variable is 0. The bottom-right cell holds the
/// negated internal maximum, so it is negated once to recover the maximum
/// and once more when the caller asked for a minimization.
fn extract_solution(
    tableau: &Tableau,
    basis: &Basis,
    standard: &StandardProblem,
    sense: ObjectiveSense,
) -> Solution {
    let mut x = vec![0.0; standard.num_variables];
    for row in 0..tableau.constraint_rows() {
        let column = basis.column_of_row(row);
        if column < standard.num_variables {
            x[column] = tableau.rhs(row);
        }
    }

    let mut z = -tableau.objective_cell();
    if sense == ObjectiveSense::Minimize {
        z = -z;
    }

    let values = x
        .iter()
        .enumerate()
        .map(|(i, &value)| (variable_label(i), value))
        .collect::<IndexMap<_, _>>();

    Solution { z, values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{Constraint, ConstraintSign};
    use approx::assert_relative_eq;

    fn wyndor_example() -> Problem {
        Problem::maximize(
            vec![3.0, 5.0],
            vec![
                Constraint::new(vec![1.0, 0.0], ConstraintSign::LessEq, 4.0),
                Constraint::new(vec![0.0, 2.0], ConstraintSign::LessEq, 12.0),
                Constraint::new(vec![3.0, 2.0], ConstraintSign::LessEq, 18.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn maximization_example_reaches_the_known_optimum() {
        let report = solve(&wyndor_example()).unwrap();

        assert_relative_eq!(report.result.z, 36.0);
        assert_relative_eq!(report.result.values["x1"], 2.0);
        assert_relative_eq!(report.result.values["x2"], 6.0);
    }

    #[test]
    fn minimization_restores_the_objective_sign() {
        let problem = Problem::minimize(
            vec![-1.0, -1.0],
            vec![
                Constraint::new(vec![1.0, 0.0], ConstraintSign::LessEq, 4.0),
                Constraint::new(vec![0.0, 1.0], ConstraintSign::LessEq, 6.0),
            ],
        )
        .unwrap();
        let report = solve(&problem).unwrap();

        assert_relative_eq!(report.result.z, -10.0);
        assert_relative_eq!(report.result.values["x1"], 4.0);
        assert_relative_eq!(report.result.values["x2"], 6.0);
    }

    #[test]
    fn trace_tags_pivots_and_leaves_the_terminal_snapshot_untagged() {
        let report = solve(&wyndor_example()).unwrap();
        let iterations = &report.iterations;

        assert_eq!(iterations.len(), 3);
        assert_eq!(
            iterations.iter().map(|s| s.iteration).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );

        // x2 enters first (largest reduced cost), displacing the second slack.
        assert_eq!(iterations[0].entering.as_deref(), Some("x2"));
        assert_eq!(iterations[0].leaving.as_deref(), Some("x4"));
        assert_eq!(iterations[1].entering.as_deref(), Some("x1"));
        assert_eq!(iterations[1].leaving.as_deref(), Some("x5"));
        assert!(iterations[2].entering.is_none());
        assert!(iterations[2].leaving.is_none());

        // Every snapshot carries the full (m + 1) x (n_total + 1) grid.
        for snapshot in iterations {
            assert_eq!(snapshot.table.len(), 4);
            assert!(snapshot.table.iter().all(|row| row.len() == 6));
        }
    }

    #[test]
    fn nonbasic_variables_report_zero() {
        // x2 never enters the basis: its objective coefficient is negative.
        let problem = Problem::maximize(
            vec![1.0, -1.0],
            vec![Constraint::new(
                vec![1.0, 1.0],
                ConstraintSign::LessEq,
                3.0,
            )],
        )
        .unwrap();
        let report = solve(&problem).unwrap();

        assert_relative_eq!(report.result.z, 3.0);
        assert_relative_eq!(report.result.values["x1"], 3.0);
        assert_relative_eq!(report.result.values["x2"], 0.0);
    }

    #[test]
    fn unboundedness_propagates() {
        let problem = Problem::maximize(
            vec![1.0],
            vec![Constraint::new(vec![-1.0], ConstraintSign::LessEq, 1.0)],
        )
        .unwrap();

        if let Err(SolverError::Unbounded) = solve(&problem) {
            // Intentionally blank
        } else {
            panic!("Unbounded problem returned a finite solution")
        }
    }

    #[test]
    fn iteration_cap_is_enforced_when_configured() {
        let settings = SolverSettings {
            max_iterations: Some(1),
            ..SolverSettings::default()
        };

        if let Err(SolverError::IterationLimit(limit)) =
            solve_with_settings(&wyndor_example(), settings)
        {
            assert_eq!(limit, 1);
        } else {
            panic!("Iteration cap not enforced")
        }
    }

    #[test]
    fn a_problem_solved_within_the_cap_succeeds() {
        let settings = SolverSettings {
            max_iterations: Some(10),
            ..SolverSettings::default()
        };
        let report = solve_with_settings(&wyndor_example(), settings).unwrap();
        assert_relative_eq!(report.result.z, 36.0);
    }
}
