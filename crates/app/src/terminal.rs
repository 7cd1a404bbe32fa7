use std::io::{self, BufRead, Write};

use log::{error, warn};
use quiz_core::model::Question;
use services::{
    GradingResult, OptionFeedback, Progress, QuizPresenter, QuizResults, ValidationError,
};

/// Plain-text presenter reading picks from `input` and writing to `output`.
///
/// Options are numbered from 1 on screen and mapped back to 0-based indices.
/// A failed read ends the attempt and is kept for [`Self::take_failure`].
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    failure: Option<io::Error>,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            failure: None,
        }
    }

    /// The read error that cut the attempt short, if any.
    pub fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take()
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// `None` on end of input or a read error.
    fn read_line(&mut self) -> Option<String> {
        loop {
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => return Some(line.trim().to_string()),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                // The offending line is consumed, so asking again is safe.
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    warn!("discarding unreadable input: {err}");
                    self.say("Input was not valid text, try again.");
                }
                Err(err) => {
                    error!("reading input failed: {err}");
                    self.failure = Some(err);
                    return None;
                }
            }
        }
    }

    fn emit(&mut self, text: &str, newline: bool) {
        let written = if newline {
            writeln!(self.output, "{text}")
        } else {
            write!(self.output, "{text}")
        };
        if let Err(err) = written.and_then(|()| self.output.flush()) {
            warn!("writing to terminal failed: {err}");
        }
    }

    fn say(&mut self, text: &str) {
        self.emit(text, true);
    }

    fn prompt(&mut self, text: &str) {
        self.emit(text, false);
    }
}

impl<R: BufRead, W: Write> QuizPresenter for TerminalPresenter<R, W> {
    fn render_progress(&mut self, progress: &Progress) {
        self.say(&format!("\n== {progress} =="));
    }

    fn render_question(&mut self, number: usize, question: &Question) {
        self.say(&format!("Q{number}. {}", question.text()));
        for (i, option) in question.options().iter().enumerate() {
            self.say(&format!("  {}) {}", i + 1, option.text()));
        }
    }

    fn choose_option(&mut self, question: &Question) -> Option<usize> {
        loop {
            let len = question.options().len();
            self.prompt(&format!("Your answer [1-{len}, q to quit]: "));
            let line = self.read_line()?;
            if line.eq_ignore_ascii_case("q") {
                return None;
            }
            match line.parse::<usize>() {
                Ok(0) | Err(_) => self.say("Please enter an option number."),
                Ok(n) => return Some(n - 1),
            }
        }
    }

    fn render_rejection(&mut self, error: &ValidationError) {
        match error {
            ValidationError::OptionOutOfRange { len, .. } => {
                self.say(&format!("There are only {len} options."));
            }
            other => self.say(&other.to_string()),
        }
    }

    fn render_feedback(&mut self, question: &Question, grading: &GradingResult) {
        for (i, option) in question.options().iter().enumerate() {
            let mark = match grading.feedback_for(i) {
                OptionFeedback::Correct => "[correct]",
                OptionFeedback::Incorrect => "[your answer]",
                OptionFeedback::Neutral => "",
            };
            self.say(format!("  {}) {} {mark}", i + 1, option.text()).trim_end());
        }
        let verdict = if grading.is_correct {
            "Correct!"
        } else {
            "Incorrect."
        };
        self.say(verdict);
        self.say(&format!("Explanation: {}", grading.rationale));
    }

    fn confirm_advance(&mut self) -> bool {
        self.prompt("Press Enter for the next question...");
        self.read_line().is_some()
    }

    fn render_results(&mut self, results: &QuizResults) {
        self.say(&results.to_string());
        self.say(&format!("Time taken: {}s", results.duration().num_seconds()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::AnswerOption;
    use quiz_core::time::fixed_now;
    use std::io::{BufReader, Read};

    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    fn question() -> Question {
        Question::new(
            "Which trait backs {}?",
            vec![
                AnswerOption::new("Debug", false, "Debug backs {:?}."),
                AnswerOption::new("Display", true, "{} uses Display."),
            ],
        )
    }

    fn presenter(input: &str) -> TerminalPresenter<&[u8], Vec<u8>> {
        TerminalPresenter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn picks_are_one_based_on_screen() {
        let mut p = presenter("0\nabc\n2\n");
        assert_eq!(p.choose_option(&question()), Some(1));
        let text = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(text.matches("Please enter an option number.").count(), 2);
    }

    #[test]
    fn quit_and_end_of_input_abandon() {
        assert_eq!(presenter("q\n").choose_option(&question()), None);
        assert_eq!(presenter("").choose_option(&question()), None);
        assert!(!presenter("").confirm_advance());
        assert!(presenter("\n").confirm_advance());
    }

    #[test]
    fn feedback_marks_pick_key_and_rationale() {
        let mut p = presenter("");
        let grading = GradingResult {
            selected_index: 0,
            correct_index: Some(1),
            is_correct: false,
            rationale: "{} uses Display.".into(),
        };
        p.render_feedback(&question(), &grading);
        let text = String::from_utf8(p.into_output()).unwrap();
        assert!(text.contains("1) Debug [your answer]"));
        assert!(text.contains("2) Display [correct]"));
        assert!(text.contains("Incorrect."));
        assert!(text.contains("Explanation: {} uses Display."));
    }

    #[test]
    fn invalid_text_is_skipped_not_treated_as_quit() {
        let mut p = TerminalPresenter::new(&b"\xff\xfe\n2\n"[..], Vec::new());
        assert_eq!(p.choose_option(&question()), Some(1));
        assert!(p.take_failure().is_none());
        let text = String::from_utf8(p.into_output()).unwrap();
        assert!(text.contains("Input was not valid text, try again."));
    }

    #[test]
    fn read_errors_end_the_attempt_and_are_kept() {
        let mut p = TerminalPresenter::new(BufReader::new(BrokenInput), Vec::new());
        assert_eq!(p.choose_option(&question()), None);
        let err = p.take_failure().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(p.take_failure().is_none());
    }

    #[test]
    fn results_show_score_and_time_taken() {
        let mut p = presenter("");
        let started = fixed_now();
        let results = QuizResults::new(4, 5, started, started + chrono::Duration::seconds(75));
        p.render_results(&results);
        let text = String::from_utf8(p.into_output()).unwrap();
        assert!(text.contains("You answered 4 of 5 questions correctly (80%)"));
        assert!(text.contains("Time taken: 75s"));
    }
}
