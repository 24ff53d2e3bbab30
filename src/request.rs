//! JSON boundary mirroring the wire shapes of the surrounding service
use serde::Deserialize;

use crate::error::SolverError;
use crate::problem::{Constraint, ConstraintSign, ObjectiveSense, Problem, MAX_VARIABLES};
use crate::solver::{solve, SolveReport};

/// Wire shape of a solve request.
///
/// Every field is optional at the serde level so that an absent field is
/// reported by name rather than as a generic parse failure.
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    direction: Option<String>,
    objective: Option<Vec<f64>>,
    constraints: Option<ConstraintBlock>,
}

#[derive(Debug, Deserialize)]
struct ConstraintBlock {
    coefficients: Option<Vec<Vec<f64>>>,
    rhs: Option<Vec<f64>>,
    signs: Option<Vec<ConstraintSign>>,
}

impl SolveRequest {
    /// Validate the request and convert it into a typed [`Problem`].
    ///
    /// # Errors
    /// [`SolverError::MissingField`] names the first absent field. The
    /// remaining checks run in precedence order, all before any
    /// standardization work starts: [`SolverError::TooManyVariables`],
    /// then [`SolverError::InvalidDirection`], then
    /// [`SolverError::DimensionMismatch`] for `rhs`/`signs` rows that do
    /// not line up with the coefficient matrix.
    pub fn into_problem(self) -> Result<Problem, SolverError> {
        let direction = self
            .direction
            .ok_or(SolverError::MissingField("direction"))?;
        let objective = self.objective.ok_or(SolverError::MissingField("objective"))?;
        let block = self
            .constraints
            .ok_or(SolverError::MissingField("constraints"))?;
        let coefficients = block
            .coefficients
            .ok_or(SolverError::MissingField("constraints.coefficients"))?;
        let rhs = block
            .rhs
            .ok_or(SolverError::MissingField("constraints.rhs"))?;
        let signs = block
            .signs
            .ok_or(SolverError::MissingField("constraints.signs"))?;

        // The variable cap takes precedence over direction validation.
        if objective.len() > MAX_VARIABLES {
            return Err(SolverError::TooManyVariables(objective.len()));
        }
        let sense = ObjectiveSense::parse(&direction)?;

        if rhs.len() != coefficients.len() {
            return Err(SolverError::DimensionMismatch {
                expected: coefficients.len(),
                found: rhs.len(),
            });
        }
        if signs.len() != coefficients.len() {
            return Err(SolverError::DimensionMismatch {
                expected: coefficients.len(),
                found: signs.len(),
            });
        }

        let constraints = coefficients
            .into_iter()
            .zip(rhs)
            .zip(signs)
            .map(|((row, b), sign)| Constraint::new(row, sign, b))
            .collect();

        Problem::new(sense, objective, constraints)
    }
}

/// Parse a JSON request body into a typed [`Problem`]
pub fn problem_from_json(body: &str) -> Result<Problem, SolverError> {
    let request: SolveRequest =
        serde_json::from_str(body).map_err(|e| SolverError::MalformedRequest(e.to_string()))?;
    request.into_problem()
}

/// Solve a JSON request and serialize the report back to JSON, so a
/// transport layer stays a thin shim around this one call
pub fn solve_json(body: &str) -> Result<String, SolverError> {
    let problem = problem_from_json(body)?;
    let report: SolveReport = solve(&problem)?;
    serde_json::to_string(&report).map_err(|e| SolverError::MalformedRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const WYNDOR_BODY: &str = r#"{
        "direction": "maximize",
        "objective": [3, 5],
        "constraints": {
            "coefficients": [[1, 0], [0, 2], [3, 2]],
            "rhs": [4, 12, 18],
            "signs": ["<=", "<=", "<="]
        }
    }"#;

    #[test]
    fn full_request_solves_end_to_end() {
        let body = solve_json(WYNDOR_BODY).unwrap();
        let response: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(response["result"]["z"], 36.0);
        assert_eq!(response["result"]["values"]["x1"], 2.0);
        assert_eq!(response["result"]["values"]["x2"], 6.0);

        let iterations = response["iterations"].as_array().unwrap();
        assert_eq!(iterations.len(), 3);
        assert_eq!(iterations[0]["iteration"], 1);
        assert_eq!(iterations[0]["entering"], "x2");
        assert_eq!(iterations[0]["leaving"], "x4");
        assert!(iterations[2]["entering"].is_null());
        assert!(iterations[2]["leaving"].is_null());
    }

    #[test]
    fn missing_top_level_field_is_named() {
        let body = r#"{"direction": "maximize", "constraints": {
            "coefficients": [[1.0]], "rhs": [1.0], "signs": ["<="]
        }}"#;
        let res = problem_from_json(body);
        if let Err(SolverError::MissingField(field)) = res {
            assert_eq!(field, "objective");
        } else {
            panic!("Missing objective not caught")
        }
    }

    #[test]
    fn missing_nested_field_is_named() {
        let body = r#"{"direction": "maximize", "objective": [1.0], "constraints": {
            "coefficients": [[1.0]], "signs": ["<="]
        }}"#;
        let res = problem_from_json(body);
        if let Err(SolverError::MissingField(field)) = res {
            assert_eq!(field, "constraints.rhs");
        } else {
            panic!("Missing rhs not caught")
        }
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let body = r#"{"direction": "best", "objective": [1.0], "constraints": {
            "coefficients": [[1.0]], "rhs": [1.0], "signs": ["<="]
        }}"#;
        let res = problem_from_json(body);
        if let Err(SolverError::InvalidDirection(value)) = res {
            assert_eq!(value, "best");
        } else {
            panic!("Invalid direction not caught")
        }
    }

    #[test]
    fn five_variables_are_rejected_before_solving() {
        let body = r#"{"direction": "maximize", "objective": [1, 2, 3, 4, 5], "constraints": {
            "coefficients": [[1, 1, 1, 1, 1]], "rhs": [10.0], "signs": ["<="]
        }}"#;
        let res = problem_from_json(body);
        if let Err(SolverError::TooManyVariables(count)) = res {
            assert_eq!(count, 5);
        } else {
            panic!("Oversized objective not caught")
        }
    }

    #[test]
    fn variable_cap_takes_precedence_over_direction_validation() {
        // Both violations at once: the count gate must win.
        let body = r#"{"direction": "best", "objective": [1, 2, 3, 4, 5], "constraints": {
            "coefficients": [[1, 1, 1, 1, 1]], "rhs": [10.0], "signs": ["<="]
        }}"#;
        let res = problem_from_json(body);
        if let Err(SolverError::TooManyVariables(count)) = res {
            assert_eq!(count, 5);
        } else {
            panic!("Oversized objective not reported first")
        }
    }

    #[test]
    fn misaligned_signs_are_a_dimension_mismatch() {
        let body = r#"{"direction": "maximize", "objective": [1.0], "constraints": {
            "coefficients": [[1.0], [2.0]], "rhs": [1.0, 2.0], "signs": ["<="]
        }}"#;
        let res = problem_from_json(body);
        if let Err(SolverError::DimensionMismatch { expected, found }) = res {
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        } else {
            panic!("Sign count mismatch not caught")
        }
    }

    #[test]
    fn non_json_body_is_malformed() {
        let res = problem_from_json("not a request");
        if let Err(SolverError::MalformedRequest(_)) = res {
            // Intentionally blank
        } else {
            panic!("Malformed body not caught")
        }
    }
}
