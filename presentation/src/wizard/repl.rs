//! Interactive wizard loop
//!
//! Drives the [`WizardState`] machine over stdin: choose a template, fill
//! in the details form, watch generation progress, review the document.

use super::state::{WizardState, WizardStep, SUGGESTED_COMPANY, SUGGESTED_GOAL, TONES};
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::SectionProgressReporter;
use colored::Colorize;
use openprop_application::{
    AssembleProposalInput, AssembleProposalUseCase, GenerationMode, NoProgress,
};
use openprop_domain::TemplateCatalog;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Errors that can end the wizard
#[derive(Error, Debug)]
pub enum WizardError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Interactive proposal wizard
pub struct ProposalWizard {
    use_case: AssembleProposalUseCase,
    mode: GenerationMode,
    show_progress: bool,
}

impl ProposalWizard {
    pub fn new(use_case: AssembleProposalUseCase, mode: GenerationMode) -> Self {
        Self {
            use_case,
            mode,
            show_progress: true,
        }
    }

    /// Set whether to show the progress bar during generation
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the wizard until the user quits
    pub async fn run(&self) -> Result<(), WizardError> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        let mut state = WizardState::new();

        self.print_welcome();

        loop {
            state = match state.step() {
                WizardStep::ChooseTemplate => {
                    match self.choose_template(&mut lines)? {
                        Some(template) => state.select_template(template),
                        None => break,
                    }
                }
                WizardStep::EnterDetails => {
                    let company = prompt(&mut lines, "Company Name", SUGGESTED_COMPANY)?;
                    let goal = prompt(&mut lines, "Goal", SUGGESTED_GOAL)?;
                    let tone = self.choose_tone(&mut lines)?;

                    match state.submit_details(&company, &goal, &tone) {
                        Ok(next) => next,
                        Err((unchanged, e)) => {
                            println!("{}", e.to_string().red());
                            unchanged
                        }
                    }
                }
                WizardStep::Generating => {
                    let template = match state.template().cloned() {
                        Some(template) => template,
                        None => {
                            // Template lost somehow; start over
                            state = state.reset();
                            continue;
                        }
                    };

                    println!();
                    let input =
                        AssembleProposalInput::new(template, state.context().clone());
                    let result = if self.show_progress {
                        let progress = SectionProgressReporter::new();
                        self.use_case.execute(input, &progress).await
                    } else {
                        self.use_case.execute(input, &NoProgress).await
                    };

                    state.record_result(
                        ConsoleFormatter::format(&result),
                        result.run_id().to_string(),
                    )
                }
                WizardStep::Review => {
                    if let Some(document) = state.document() {
                        println!("\n{}", document);
                    }

                    match self.review_choice(&mut lines)? {
                        ReviewAction::Save => {
                            self.save_document(&state)?;
                            state
                        }
                        ReviewAction::Restart => state.reset(),
                        ReviewAction::Quit => break,
                    }
                }
            };
        }

        println!("Bye!");
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "OpenProp - Business Proposal Generator".bold());
        println!("Mode: {}", self.mode);
        println!();
    }

    fn choose_template(
        &self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
    ) -> Result<Option<openprop_domain::ProposalTemplate>, WizardError> {
        let templates = TemplateCatalog::templates();

        println!("{}", "Choose a template:".bold());
        for (i, tmpl) in templates.iter().enumerate() {
            println!(
                "  {}. [{}] {} ({} sections)",
                i + 1,
                tmpl.icon,
                tmpl.title,
                tmpl.section_count()
            );
        }

        loop {
            let Some(line) = read_line(lines, "Template (number or id, q to quit): ")? else {
                return Ok(None);
            };

            if line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }

            let choice = line
                .parse::<usize>()
                .ok()
                .and_then(|n| templates.get(n.wrapping_sub(1)).cloned())
                .or_else(|| TemplateCatalog::find(&line));

            match choice {
                Some(template) => return Ok(Some(template)),
                None => println!("{}", "Unknown template, try again.".yellow()),
            }
        }
    }

    fn choose_tone(
        &self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
    ) -> Result<String, WizardError> {
        let options = TONES.join("/");
        let answer = prompt(lines, &format!("Tone ({})", options), TONES[0])?;

        // Accept a number, an exact name, or fall back to the default
        let tone = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| TONES.get(n.wrapping_sub(1)))
            .copied()
            .or_else(|| {
                TONES
                    .iter()
                    .find(|t| t.eq_ignore_ascii_case(&answer))
                    .copied()
            })
            .unwrap_or(TONES[0]);

        Ok(tone.to_string())
    }

    fn review_choice(
        &self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
    ) -> Result<ReviewAction, WizardError> {
        loop {
            let Some(line) = read_line(lines, "[s]ave, [r]estart, [q]uit: ")? else {
                return Ok(ReviewAction::Quit);
            };

            match line.to_lowercase().as_str() {
                "s" | "save" => return Ok(ReviewAction::Save),
                "r" | "restart" => return Ok(ReviewAction::Restart),
                "q" | "quit" | "" => return Ok(ReviewAction::Quit),
                _ => println!("{}", "Please answer s, r, or q.".yellow()),
            }
        }
    }

    fn save_document(&self, state: &WizardState) -> Result<(), WizardError> {
        if let Some(document) = state.document() {
            let path = "proposal.md";
            std::fs::write(path, document)?;
            println!("Saved to {}", path.green());
        }
        Ok(())
    }
}

enum ReviewAction {
    Save,
    Restart,
    Quit,
}

/// Print a prompt and read one trimmed line; `None` on EOF
fn read_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt_text: &str,
) -> Result<Option<String>, WizardError> {
    print!("{}", prompt_text);
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Prompt with a suggested default, used when the answer is blank
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
    default: &str,
) -> Result<String, WizardError> {
    let answer = read_line(lines, &format!("{} [{}]: ", label, default))?;
    match answer {
        Some(line) if !line.is_empty() => Ok(line),
        _ => Ok(default.to_string()),
    }
}
