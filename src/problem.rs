//! Provides the raw problem description consumed by the solver
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::SolverError;

/// Maximum number of decision variables accepted by this solver version
pub const MAX_VARIABLES: usize = 4;

/// Direction in which the objective is optimized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveSense {
    /// The objective should be maximized
    Maximize,
    /// The objective should be minimized
    Minimize,
}

impl ObjectiveSense {
    /// Parse a direction string, case-insensitively and ignoring
    /// surrounding whitespace
    pub fn parse(direction: &str) -> Result<Self, SolverError> {
        match direction.trim().to_lowercase().as_str() {
            "maximize" => Ok(ObjectiveSense::Maximize),
            "minimize" => Ok(ObjectiveSense::Minimize),
            _ => Err(SolverError::InvalidDirection(direction.to_string())),
        }
    }
}

impl Display for ObjectiveSense {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectiveSense::Maximize => write!(f, "maximize"),
            ObjectiveSense::Minimize => write!(f, "minimize"),
        }
    }
}

/// Relational sign of a constraint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintSign {
    #[serde(rename = "<=")]
    LessEq,
    #[serde(rename = ">=")]
    GreaterEq,
    #[serde(rename = "=")]
    Eq,
}

impl ConstraintSign {
    /// Sign after both sides of the constraint are multiplied by -1;
    /// equality is unaffected
    pub fn flipped(self) -> Self {
        match self {
            ConstraintSign::LessEq => ConstraintSign::GreaterEq,
            ConstraintSign::GreaterEq => ConstraintSign::LessEq,
            ConstraintSign::Eq => ConstraintSign::Eq,
        }
    }
}

impl Display for ConstraintSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConstraintSign::LessEq => write!(f, "<="),
            ConstraintSign::GreaterEq => write!(f, ">="),
            ConstraintSign::Eq => write!(f, "="),
        }
    }
}

/// A single linear constraint: a coefficient row, a relational sign, and a
/// right-hand-side scalar
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Coefficients for the decision variables, in variable order
    pub coefficients: Vec<f64>,
    /// Relational sign between the row and the right-hand side
    pub sign: ConstraintSign,
    /// Right-hand-side scalar
    pub rhs: f64,
}

impl Constraint {
    /// Create a new constraint
    pub fn new(coefficients: Vec<f64>, sign: ConstraintSign, rhs: f64) -> Self {
        Constraint {
            coefficients,
            sign,
            rhs,
        }
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let terms = self
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}*x{}", c, i + 1))
            .collect::<Vec<_>>()
            .join(" + ");
        write!(f, "{} {} {}", terms, self.sign, self.rhs)
    }
}

/// A linear program as posed by the caller
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    sense: ObjectiveSense,
    objective: Vec<f64>,
    constraints: Vec<Constraint>,
}

impl Problem {
    // region Creation Functions
    /// Create a new problem with the given objective sense.
    ///
    /// # Errors
    /// [`SolverError::TooManyVariables`] if the objective has more than
    /// [`MAX_VARIABLES`] entries. This is checked here so that no
    /// standardization work can start on an oversized problem.
    pub fn new(
        sense: ObjectiveSense,
        objective: Vec<f64>,
        constraints: Vec<Constraint>,
    ) -> Result<Self, SolverError> {
        if objective.len() > MAX_VARIABLES {
            return Err(SolverError::TooManyVariables(objective.len()));
        }
        Ok(Problem {
            sense,
            objective,
            constraints,
        })
    }

    /// Create a new maximization problem
    pub fn maximize(objective: Vec<f64>, constraints: Vec<Constraint>) -> Result<Self, SolverError> {
        Self::new(ObjectiveSense::Maximize, objective, constraints)
    }

    /// Create a new minimization problem
    pub fn minimize(objective: Vec<f64>, constraints: Vec<Constraint>) -> Result<Self, SolverError> {
        Self::new(ObjectiveSense::Minimize, objective, constraints)
    }
    // endregion Creation Functions

    /// Direction of the objective
    pub fn sense(&self) -> ObjectiveSense {
        self.sense
    }

    /// Objective coefficients, in variable order
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    /// Constraints of the problem
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Number of decision variables
    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }
}
