use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    True,
    False,
}

impl Answer {
    pub fn as_str(self) -> &'static str {
        match self {
            Answer::True => "True",
            Answer::False => "False",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown answer {0:?}, expected \"True\" or \"False\"")]
pub struct ParseAnswerError(String);

impl FromStr for Answer {
    type Err = ParseAnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(Answer::True)
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(Answer::False)
        } else {
            Err(ParseAnswerError(trimmed.to_string()))
        }
    }
}

#[derive(Debug, Clone)]
pub struct Question {
    pub text: String,
    pub answer: Answer,
}

impl Question {
    pub fn new(text: impl Into<String>, answer: Answer) -> Self {
        Self {
            text: text.into(),
            answer,
        }
    }
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("the question bank is empty")]
    EmptyQuestionBank,
}

/// Question sequencing and scoring, as seen by the presentation shell.
///
/// Questions are consumed in order and never revisited. `score` and
/// `question_number` always reflect the most recent `next_question`,
/// `check_answer` or `reset` call.
pub trait QuizSession {
    fn has_more_questions(&self) -> bool;

    /// Advances to the next question and returns its display text, or
    /// `None` without advancing once every question has been presented.
    fn next_question(&mut self) -> Option<String>;

    /// Scores the user's choice against the current question. Only the
    /// first call per presented question counts.
    fn check_answer(&mut self, choice: Answer) -> bool;

    fn reset(&mut self);

    fn score(&self) -> usize;
    fn question_number(&self) -> usize;
    fn total(&self) -> usize;
}

#[derive(Debug)]
pub struct QuizBrain {
    questions: Vec<Question>,
    question_number: usize,
    score: usize,
    answered: bool,
}

impl QuizBrain {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyQuestionBank);
        }
        log::debug!("Quiz created with {} questions", questions.len());
        Ok(Self {
            questions,
            question_number: 0,
            score: 0,
            answered: false,
        })
    }

    /// Shuffles once up front; `reset` replays this same order.
    pub fn shuffled<R: Rng + ?Sized>(
        mut questions: Vec<Question>,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        questions.shuffle(rng);
        Self::new(questions)
    }

    fn current(&self) -> Option<&Question> {
        self.question_number
            .checked_sub(1)
            .and_then(|i| self.questions.get(i))
    }
}

impl QuizSession for QuizBrain {
    fn has_more_questions(&self) -> bool {
        self.question_number < self.questions.len()
    }

    fn next_question(&mut self) -> Option<String> {
        let question = self.questions.get(self.question_number)?;
        let text = format!("Q.{}: {}", self.question_number + 1, question.text);
        self.question_number += 1;
        self.answered = false;
        Some(text)
    }

    fn check_answer(&mut self, choice: Answer) -> bool {
        if self.answered {
            log::debug!("Ignoring repeated answer for question {}", self.question_number);
            return false;
        }
        let Some(question) = self.current() else {
            return false;
        };
        let correct = question.answer == choice;
        self.answered = true;
        if correct {
            self.score += 1;
        }
        log::debug!(
            "Question {} answered {} ({})",
            self.question_number,
            choice,
            if correct { "correct" } else { "wrong" }
        );
        correct
    }

    fn reset(&mut self) {
        self.question_number = 0;
        self.score = 0;
        self.answered = false;
    }

    fn score(&self) -> usize {
        self.score
    }

    fn question_number(&self) -> usize {
        self.question_number
    }

    fn total(&self) -> usize {
        self.questions.len()
    }
}
