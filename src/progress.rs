use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::generator::GenerationOutcome;
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.red} {msg}";

pub struct ProgressReporter {
    term: Term,
    current_spinner: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            current_spinner: None,
        }
    }

    /// Reporter for an interactive stderr, `None` otherwise
    pub fn for_terminal() -> Option<Self> {
        if Term::stderr().is_term() {
            Some(Self::new())
        } else {
            None
        }
    }

    fn create_spinner(&self, message: String) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .expect("Spinner template should be valid")
                .tick_strings(SPINNER_FRAMES),
        );
        pb.set_message(message);
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_draw(&mut self, participants: usize, exclusions: usize) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Drawing a gift ring for {} {} with {} {}...",
            style("🎲").cyan(),
            style(participants).yellow().bold(),
            pluralize("participant", participants),
            style(exclusions).yellow().bold(),
            pluralize("exclusion", exclusions)
        );
        self.current_spinner = Some(self.create_spinner("Shuffling participants...".to_string()));
    }

    pub fn finish_draw(&mut self, outcome: &GenerationOutcome) {
        if let Some(pb) = self.current_spinner.take() {
            pb.finish_and_clear();
        }
        match outcome {
            GenerationOutcome::Arranged { attempts, .. } => eprintln!(
                "{} Found a valid ring after {} {}",
                style("✓").green().bold(),
                style(attempts).yellow(),
                pluralize("attempt", *attempts)
            ),
            GenerationOutcome::Exhausted { attempts } => eprintln!(
                "{} Gave up after {} {}",
                style("✗").red().bold(),
                style(attempts).red(),
                pluralize("attempt", *attempts)
            ),
        }
    }

    pub fn abandon_draw(&mut self) {
        if let Some(pb) = self.current_spinner.take() {
            pb.finish_and_clear();
        }
    }
}
