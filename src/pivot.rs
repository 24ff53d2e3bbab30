//! Pivot selection and application for the simplex tableau
use crate::error::SolverError;
use crate::tableau::Tableau;

/// Outcome of pivot selection.
///
/// Optimality is an expected terminal state, so it is kept off the error
/// channel as its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotChoice {
    /// Every reduced cost is at or below tolerance; the current basic
    /// solution is optimal
    Optimal,
    /// Pivot on `row`, `column`
    Pivot { row: usize, column: usize },
}

/// Select the next pivot position, or report optimality.
///
/// The entering column is the one with the largest positive Cj - Zj
/// (Dantzig's rule); the scan keeps the first column seen unless a later
/// one beats the running maximum by more than `tolerance`. The leaving row
/// is chosen by the minimum-ratio test over rows with a positive
/// coefficient in the entering column, the earliest such row winning ties.
///
/// # Errors
/// [`SolverError::Unbounded`] when an improving column has no positive
/// coefficient in any constraint row.
pub fn choose_pivot(tableau: &Tableau, tolerance: f64) -> Result<PivotChoice, SolverError> {
    let num_rows = tableau.constraint_rows();
    let num_columns = tableau.variable_columns();

    let mut best_value = 0.0;
    let mut pivot_column = None;
    for column in 0..num_columns {
        let value = tableau.reduced_cost(column);
        if value > best_value + tolerance {
            best_value = value;
            pivot_column = Some(column);
        }
    }
    let column = match pivot_column {
        Some(column) => column,
        None => return Ok(PivotChoice::Optimal),
    };

    let mut min_ratio = f64::INFINITY;
    let mut pivot_row = None;
    for row in 0..num_rows {
        let coefficient = tableau.value(row, column);
        if coefficient > tolerance {
            let ratio = tableau.rhs(row) / coefficient;
            if ratio < min_ratio - tolerance {
                min_ratio = ratio;
                pivot_row = Some(row);
            }
        }
    }

    match pivot_row {
        Some(row) => Ok(PivotChoice::Pivot { row, column }),
        None => Err(SolverError::Unbounded),
    }
}

/// Perform the Gauss-Jordan pivot in place: scale the pivot row so the pivot
/// element becomes 1, then zero the pivot column in every other row, the
/// Cj - Zj row included.
pub fn apply_pivot(tableau: &mut Tableau, pivot_row: usize, pivot_column: usize, tolerance: f64) {
    let pivot_element = tableau.value(pivot_row, pivot_column);
    for value in tableau.row_mut(pivot_row).iter_mut() {
        *value /= pivot_element;
    }

    let normalized = tableau.row(pivot_row).to_vec();
    for row in 0..tableau.row_count() {
        if row == pivot_row {
            continue;
        }
        let factor = tableau.value(row, pivot_column);
        if factor.abs() <= tolerance {
            continue;
        }
        for (value, pivot_value) in tableau.row_mut(row).iter_mut().zip(&normalized) {
            *value -= factor * pivot_value;
        }
    }
}
