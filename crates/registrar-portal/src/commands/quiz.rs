use registrar_shared::content::QuestionDraft;
use registrar_shared::quiz::QuizAttempt;
use registrar_shared::registry::remove_by_id;
use registrar_shared::QuizQuestion;
use tracing::info;

use crate::error::Result;
use crate::state::Portal;

impl Portal {
    pub fn quiz_questions(&self) -> Result<Vec<QuizQuestion>> {
        Ok(self.database().get_quiz()?)
    }

    pub fn add_quiz_question(&self, draft: QuestionDraft) -> Result<QuizQuestion> {
        let question = draft.build()?;
        let mut all = self.database().get_quiz()?;
        all.push(question.clone());
        self.database().save_quiz(&all)?;
        info!(question_id = %question.id, "Quiz question added");
        Ok(question)
    }

    pub fn delete_quiz_question(&self, id: &str) -> Result<bool> {
        let mut all = self.database().get_quiz()?;
        if !remove_by_id(&mut all, id) {
            return Ok(false);
        }
        self.database().save_quiz(&all)?;
        Ok(true)
    }

    /// Start a fresh attempt over the current question bank.
    pub fn start_quiz(&self) -> Result<QuizAttempt> {
        Ok(QuizAttempt::new(self.database().get_quiz()?))
    }
}
