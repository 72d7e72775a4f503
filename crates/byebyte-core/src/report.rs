use crate::engine::Plan;
use crate::policy::Traversal;
use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Report {
    pub file_len: usize,
    pub start: usize,
    pub stop: usize,
    pub traversal: Traversal,
    pub times: usize,
    pub written: usize,
    /// Iterations whose cursor fell outside the buffer.
    pub skipped: usize,
    /// Distinct offsets written at least once.
    pub distinct: usize,
}

impl Report {
    pub fn new(plan: &Plan) -> Self {
        Self {
            file_len: plan.file_len,
            start: plan.range.start,
            stop: plan.range.stop,
            traversal: plan.traversal,
            times: plan.times,
            written: 0,
            skipped: 0,
            distinct: 0,
        }
    }
}
