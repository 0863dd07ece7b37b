//! Toolkit-independent presentation state.
//!
//! The shell drives a [`QuizSession`] through the ask → answer → feedback →
//! advance loop. Time is passed in explicitly so the feedback delay can be
//! polled from the UI frame loop instead of blocking it.

use std::time::{Duration, Instant};

use crate::quiz::{Answer, QuizSession};

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Asking,
    Feedback { correct: bool, until: Instant },
    Finished,
}

pub struct Shell<S: QuizSession> {
    session: S,
    phase: Phase,
    question_text: String,
    feedback_delay: Duration,
}

impl<S: QuizSession> Shell<S> {
    pub fn start(session: S, feedback_delay: Duration) -> Self {
        let mut shell = Self {
            session,
            phase: Phase::Finished,
            question_text: String::new(),
            feedback_delay,
        };
        shell.advance();
        shell
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn accepts_answers(&self) -> bool {
        self.phase == Phase::Asking
    }

    /// Forwards the user's choice. Input outside `Asking` is ignored and
    /// returns `false`.
    pub fn answer(&mut self, choice: Answer, now: Instant) -> bool {
        if !self.accepts_answers() {
            log::debug!("Ignoring {} while {:?}", choice, self.phase);
            return false;
        }
        let correct = self.session.check_answer(choice);
        self.phase = Phase::Feedback {
            correct,
            until: now + self.feedback_delay,
        };
        true
    }

    /// Moves on once the feedback delay has elapsed. Returns how long is
    /// left when feedback is still showing.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        match self.phase {
            Phase::Feedback { until, .. } if now < until => Some(until - now),
            Phase::Feedback { .. } => {
                self.advance();
                None
            }
            _ => None,
        }
    }

    pub fn restart(&mut self) {
        if self.phase != Phase::Finished {
            return;
        }
        log::info!("Restarting quiz");
        self.session.reset();
        self.advance();
    }

    pub fn score_text(&self) -> String {
        format!(
            "Score: {}/{}",
            self.session.score(),
            self.session.question_number()
        )
    }

    pub fn final_score_text(&self) -> String {
        format!(
            "Your final score:\n{}/{}",
            self.session.score(),
            self.session.question_number()
        )
    }

    fn advance(&mut self) {
        let next = if self.session.has_more_questions() {
            self.session.next_question()
        } else {
            None
        };
        match next {
            Some(text) => {
                self.question_text = text;
                self.phase = Phase::Asking;
            }
            None => {
                log::info!(
                    "Quiz complete: {}/{}",
                    self.session.score(),
                    self.session.question_number()
                );
                self.phase = Phase::Finished;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every protocol call so tests can check the shell's usage.
    struct FakeSession {
        answers: Vec<Answer>,
        position: usize,
        score: usize,
        checks: Vec<usize>,
    }

    impl FakeSession {
        fn new(answers: &[Answer]) -> Self {
            Self {
                answers: answers.to_vec(),
                position: 0,
                score: 0,
                checks: Vec::new(),
            }
        }
    }

    impl QuizSession for FakeSession {
        fn has_more_questions(&self) -> bool {
            self.position < self.answers.len()
        }

        fn next_question(&mut self) -> Option<String> {
            assert!(self.has_more_questions(), "advanced past the end");
            self.position += 1;
            Some(format!("question {}", self.position))
        }

        fn check_answer(&mut self, choice: Answer) -> bool {
            self.checks.push(self.position);
            let correct = self.answers[self.position - 1] == choice;
            if correct {
                self.score += 1;
            }
            correct
        }

        fn reset(&mut self) {
            self.position = 0;
            self.score = 0;
        }

        fn score(&self) -> usize {
            self.score
        }

        fn question_number(&self) -> usize {
            self.position
        }

        fn total(&self) -> usize {
            self.answers.len()
        }
    }

    const DELAY: Duration = Duration::from_millis(1000);

    fn shell() -> Shell<FakeSession> {
        Shell::start(FakeSession::new(&[Answer::True, Answer::False]), DELAY)
    }

    fn play(shell: &mut Shell<FakeSession>, choices: &[Answer]) {
        let mut now = Instant::now();
        for &choice in choices {
            assert!(shell.answer(choice, now));
            now += DELAY;
            shell.tick(now);
        }
    }

    #[test]
    fn starts_on_first_question() {
        let shell = shell();
        assert_eq!(shell.phase(), &Phase::Asking);
        assert_eq!(shell.question_text(), "question 1");
        assert_eq!(shell.score_text(), "Score: 0/1");
    }

    #[test]
    fn all_correct_reaches_summary() {
        let mut shell = shell();
        play(&mut shell, &[Answer::True, Answer::False]);
        assert_eq!(shell.phase(), &Phase::Finished);
        assert_eq!(shell.score_text(), "Score: 2/2");
        assert_eq!(shell.final_score_text(), "Your final score:\n2/2");
        assert!(!shell.session.has_more_questions());
    }

    #[test]
    fn one_wrong_answer() {
        let mut shell = shell();
        play(&mut shell, &[Answer::False, Answer::False]);
        assert_eq!(shell.phase(), &Phase::Finished);
        assert_eq!(shell.score_text(), "Score: 1/2");
    }

    #[test]
    fn feedback_waits_for_delay() {
        let mut shell = shell();
        let now = Instant::now();
        shell.answer(Answer::False, now);
        assert_eq!(
            shell.phase(),
            &Phase::Feedback {
                correct: false,
                until: now + DELAY
            }
        );

        let half = Duration::from_millis(500);
        assert_eq!(shell.tick(now + half), Some(DELAY - half));
        assert_eq!(shell.question_text(), "question 1");

        assert_eq!(shell.tick(now + DELAY), None);
        assert_eq!(shell.phase(), &Phase::Asking);
        assert_eq!(shell.question_text(), "question 2");
    }

    #[test]
    fn double_click_during_feedback_is_ignored() {
        let mut shell = shell();
        let now = Instant::now();
        assert!(shell.answer(Answer::True, now));
        assert!(!shell.answer(Answer::True, now + Duration::from_millis(10)));
        assert_eq!(shell.session.checks, vec![1]);
        assert_eq!(shell.session.score(), 1);
    }

    #[test]
    fn answers_after_finish_are_ignored() {
        let mut shell = shell();
        play(&mut shell, &[Answer::True, Answer::True]);
        assert!(!shell.answer(Answer::False, Instant::now()));
        assert_eq!(shell.session.checks, vec![1, 2]);
        assert_eq!(shell.tick(Instant::now()), None);
        assert_eq!(shell.phase(), &Phase::Finished);
    }

    #[test]
    fn restart_replays_from_first_question() {
        let mut shell = shell();
        let first = shell.question_text().to_string();
        play(&mut shell, &[Answer::True, Answer::False]);

        shell.restart();
        assert_eq!(shell.phase(), &Phase::Asking);
        assert_eq!(shell.question_text(), first);
        assert_eq!(shell.score_text(), "Score: 0/1");
    }

    #[test]
    fn restart_only_from_summary() {
        let mut shell = shell();
        play(&mut shell, &[Answer::True]);
        shell.restart();
        assert_eq!(shell.question_text(), "question 2");
        assert_eq!(shell.session.score(), 1);
    }

    #[test]
    fn works_with_quiz_brain() {
        use crate::quiz::{QuizBrain, Question};

        let brain = QuizBrain::new(vec![
            Question::new("one", Answer::True),
            Question::new("two", Answer::False),
        ])
        .unwrap();
        let mut shell = Shell::start(brain, Duration::ZERO);
        assert_eq!(shell.question_text(), "Q.1: one");

        let now = Instant::now();
        shell.answer(Answer::True, now);
        shell.tick(now);
        shell.answer(Answer::False, now);
        shell.tick(now);
        assert_eq!(shell.phase(), &Phase::Finished);
        assert_eq!(shell.score_text(), "Score: 2/2");

        shell.restart();
        assert_eq!(shell.question_text(), "Q.1: one");
    }
}
