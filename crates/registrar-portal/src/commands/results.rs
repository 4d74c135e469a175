//! Exam result registry.

use registrar_shared::registry::{list_for_student, remove_by_id, ResultDraft};
use registrar_shared::ExamResult;
use tracing::info;

use crate::error::Result;
use crate::state::Portal;

impl Portal {
    pub fn results(&self) -> Result<Vec<ExamResult>> {
        Ok(self.database().get_results()?)
    }

    /// Record a result dated today, graded on raw marks.
    pub fn record_result(&self, draft: ResultDraft) -> Result<ExamResult> {
        let result = draft.record(Self::today())?;

        let mut all = self.database().get_results()?;
        all.push(result.clone());
        self.database().save_results(&all)?;

        info!(
            student_id = %result.student_id,
            subject = %result.subject,
            grade = %result.grade,
            "Result recorded"
        );
        Ok(result)
    }

    pub fn results_for_student(&self, student_id: &str) -> Result<Vec<ExamResult>> {
        let all = self.database().get_results()?;
        Ok(list_for_student(&all, student_id)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn delete_result(&self, id: &str) -> Result<bool> {
        let mut all = self.database().get_results()?;
        if !remove_by_id(&mut all, id) {
            return Ok(false);
        }
        self.database().save_results(&all)?;
        info!(result_id = %id, "Result deleted");
        Ok(true)
    }
}
