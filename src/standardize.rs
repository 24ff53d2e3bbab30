//! Conversion of a raw problem into standard maximization form
use crate::error::SolverError;
use crate::problem::{ConstraintSign, ObjectiveSense, Problem};

/// A problem in standard form: maximization, all constraints "<=" with
/// non-negative right-hand sides, and one slack variable appended per
/// constraint
#[derive(Debug, Clone, PartialEq)]
pub struct StandardProblem {
    /// Objective coefficients in maximize form, zeros for the slack columns
    pub objective: Vec<f64>,
    /// Constraint matrix augmented with the m x m slack identity block
    pub rows: Vec<Vec<f64>>,
    /// Right-hand sides, all non-negative
    pub rhs: Vec<f64>,
    /// Number of original decision variables
    pub num_variables: usize,
    /// Number of slack variables (one per constraint)
    pub num_slacks: usize,
}

/// Normalize `problem` into a [`StandardProblem`].
///
/// Minimization objectives are negated so the engine always maximizes; rows
/// with a negative right-hand side are multiplied through by -1 with their
/// sign flipped; any sign other than "<=" after that normalization is
/// rejected. Pure transformation: the input is untouched and nothing is
/// returned unless every constraint passes.
///
/// # Errors
/// - [`SolverError::DimensionMismatch`] when a constraint row's length
///   differs from the objective's length
/// - [`SolverError::UnsupportedConstraint`] when a normalized sign is not
///   "<=" (two-phase handling for ">=" and "=" is a planned extension)
pub fn standardize(problem: &Problem) -> Result<StandardProblem, SolverError> {
    let num_variables = problem.num_variables();

    for constraint in problem.constraints() {
        if constraint.coefficients.len() != num_variables {
            return Err(SolverError::DimensionMismatch {
                expected: num_variables,
                found: constraint.coefficients.len(),
            });
        }
    }

    let mut objective: Vec<f64> = match problem.sense() {
        ObjectiveSense::Maximize => problem.objective().to_vec(),
        ObjectiveSense::Minimize => problem.objective().iter().map(|c| -c).collect(),
    };

    let num_slacks = problem.constraints().len();
    let mut rows = Vec::with_capacity(num_slacks);
    let mut rhs = Vec::with_capacity(num_slacks);

    for constraint in problem.constraints() {
        let mut row = constraint.coefficients.clone();
        let mut b = constraint.rhs;
        let mut sign = constraint.sign;

        // Slacks can only seed the basis when every right-hand side is
        // non-negative, so negative rows are multiplied through by -1
        // before the sign is checked.
        if b < 0.0 {
            b = -b;
            for value in row.iter_mut() {
                *value = -*value;
            }
            sign = sign.flipped();
        }

        if sign != ConstraintSign::LessEq {
            return Err(SolverError::UnsupportedConstraint(sign));
        }

        rows.push(row);
        rhs.push(b);
    }

    // Augment with the slack identity block and zero slack costs.
    for (i, row) in rows.iter_mut().enumerate() {
        for j in 0..num_slacks {
            row.push(if i == j { 1.0 } else { 0.0 });
        }
    }
    objective.extend(std::iter::repeat(0.0).take(num_slacks));

    Ok(StandardProblem {
        objective,
        rows,
        rhs,
        num_variables,
        num_slacks,
    })
}
