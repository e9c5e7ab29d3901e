//! Problem generation - multiplication and division with exact answers
//!
//! Division problems are built backwards from divisor and quotient so the
//! dividend always divides exactly.

use crate::core::rng::GameRng;
use crate::types::{DISTINCT_ATTEMPT_LIMIT, DIVISOR_MAX, OPERAND_MAX};

/// One arithmetic problem: the expression shown on a calc tile and the
/// number shown on its answer tile. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub label: String,
    pub answer: u32,
}

/// Generate a single problem, multiplication or division with equal odds.
pub fn generate_problem(rng: &mut GameRng) -> Problem {
    if rng.coin_flip() {
        let a = rng.range_inclusive(1, OPERAND_MAX);
        let b = rng.range_inclusive(1, OPERAND_MAX);
        Problem {
            label: format!("{a} × {b}"),
            answer: a * b,
        }
    } else {
        let b = rng.range_inclusive(1, DIVISOR_MAX);
        let answer = rng.range_inclusive(1, OPERAND_MAX);
        let a = b * answer;
        Problem {
            label: format!("{a} ÷ {b}"),
            answer,
        }
    }
}

/// Generate a batch of problems with best-effort distinct answers.
///
/// Each slot retries up to `DISTINCT_ATTEMPT_LIMIT` generations before a
/// duplicate answer is accepted; never an error.
pub fn generate_distinct(rng: &mut GameRng, count: usize) -> Vec<Problem> {
    let mut problems: Vec<Problem> = Vec::with_capacity(count);
    for _ in 0..count {
        let mut attempts = 1;
        let mut problem = generate_problem(rng);
        while attempts < DISTINCT_ATTEMPT_LIMIT
            && problems.iter().any(|p| p.answer == problem.answer)
        {
            problem = generate_problem(rng);
            attempts += 1;
        }
        problems.push(problem);
    }
    problems
}
