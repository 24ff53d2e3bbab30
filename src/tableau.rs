//! The simplex working tableau, its companion basis, and iteration snapshots
use serde::{Deserialize, Serialize};

use crate::standardize::StandardProblem;

/// The working matrix of the simplex method: one row per constraint, a final
/// Cj - Zj row, and a trailing right-hand-side column. Mutated in place by
/// pivots, never rebuilt.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    rows: Vec<Vec<f64>>,
}

impl Tableau {
    /// Assemble the initial tableau and basis from a standardized problem.
    ///
    /// Constraint rows carry their right-hand side in the last column. The
    /// final row starts as Cj - Zj with Zj = 0, since no cost-bearing
    /// variable is basic yet. The initial basis is the slack columns, which
    /// occupy the last m positions of the coefficient space.
    pub fn build_initial(standard: &StandardProblem) -> (Tableau, Basis) {
        let num_rows = standard.rows.len();
        let num_columns = standard.objective.len();

        let mut rows = Vec::with_capacity(num_rows + 1);
        for (row, &b) in standard.rows.iter().zip(&standard.rhs) {
            let mut tableau_row = row.clone();
            tableau_row.push(b);
            rows.push(tableau_row);
        }

        let mut objective_row = standard.objective.clone();
        objective_row.push(0.0);
        rows.push(objective_row);

        let basis = Basis::initial(num_columns, num_rows);

        (Tableau { rows }, basis)
    }

    /// Number of constraint rows, the objective row excluded
    pub fn constraint_rows(&self) -> usize {
        self.rows.len() - 1
    }

    /// Number of variable columns, the right-hand-side column excluded
    pub fn variable_columns(&self) -> usize {
        self.rows[0].len() - 1
    }

    /// Coefficient at `row`, `column`
    pub fn value(&self, row: usize, column: usize) -> f64 {
        self.rows[row][column]
    }

    /// Right-hand side of a constraint row
    pub fn rhs(&self, row: usize) -> f64 {
        *self.rows[row].last().unwrap()
    }

    /// Current Cj - Zj entry for `column`
    pub fn reduced_cost(&self, column: usize) -> f64 {
        self.rows[self.rows.len() - 1][column]
    }

    /// Bottom-right cell of the tableau. Row operations accumulate the
    /// negated current objective value here.
    pub fn objective_cell(&self) -> f64 {
        *self.rows[self.rows.len() - 1].last().unwrap()
    }

    /// Deep copy of the grid, for iteration snapshots
    pub fn to_grid(&self) -> Vec<Vec<f64>> {
        self.rows.clone()
    }

    pub(crate) fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn row(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut Vec<f64> {
        &mut self.rows[row]
    }
}

/// Maps each constraint row to the column of the variable currently basic
/// in that row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Basis {
    columns: Vec<usize>,
}

impl Basis {
    /// Initial basis: the slack column for constraint i occupies row i
    pub fn initial(num_columns: usize, num_rows: usize) -> Basis {
        let columns = (0..num_rows).map(|i| num_columns - num_rows + i).collect();
        Basis { columns }
    }

    /// Column of the variable currently basic in `row`
    pub fn column_of_row(&self, row: usize) -> usize {
        self.columns[row]
    }

    /// Swap the entering column into `row`'s slot
    pub fn replace(&mut self, row: usize, column: usize) {
        self.columns[row] = column;
    }

    /// Basic column indices, in row order
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }
}

/// State of the tableau recorded once per iteration.
///
/// Snapshots are independent copies with no link back to the live tableau,
/// appended to the trace and never mutated afterwards. Field names match the
/// wire format of the surrounding service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationSnapshot {
    /// 1-based iteration number
    pub iteration: u64,
    /// Full tableau grid at the time of the snapshot
    pub table: Vec<Vec<f64>>,
    /// Entering variable label (for example "x2"), `None` on the terminal
    /// iteration
    pub entering: Option<String>,
    /// Leaving variable label, `None` on the terminal iteration
    pub leaving: Option<String>,
}
