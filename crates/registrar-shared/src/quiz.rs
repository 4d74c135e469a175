use crate::records::QuizQuestion;

/// What happened after [`QuizAttempt::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizProgress {
    /// No option was selected; nothing changed.
    NoSelection,
    /// Moved on to the question at this index.
    Next(usize),
    /// The last question was answered.
    Finished { score: usize, total: usize },
}

/// One student's walk through the question bank.
#[derive(Debug, Clone)]
pub struct QuizAttempt {
    questions: Vec<QuizQuestion>,
    current: usize,
    score: usize,
    selected: Option<usize>,
    finished: bool,
}

impl QuizAttempt {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            current: 0,
            score: 0,
            selected: None,
            finished: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Pick an option on the current question. Out-of-range picks are ignored.
    pub fn select(&mut self, option: usize) -> bool {
        match self.current_question() {
            Some(q) if option < q.options.len() => {
                self.selected = Some(option);
                true
            }
            _ => false,
        }
    }

    /// Score the selection and move to the next question.
    pub fn advance(&mut self) -> QuizProgress {
        let (Some(question), Some(choice)) = (self.current_question(), self.selected) else {
            if self.finished {
                return self.finished_progress();
            }
            return QuizProgress::NoSelection;
        };

        if question.is_correct(choice) {
            self.score += 1;
        }
        self.selected = None;

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            QuizProgress::Next(self.current)
        } else {
            self.finished = true;
            self.finished_progress()
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.score = 0;
        self.selected = None;
        self.finished = false;
    }

    fn finished_progress(&self) -> QuizProgress {
        QuizProgress::Finished {
            score: self.score,
            total: self.questions.len(),
        }
    }
}
