//! Progress reporting for proposal assembly

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use openprop_application::{progress_fraction, ProgressNotifier};
use std::sync::Mutex;

/// Reports assembly progress with a section-by-section progress bar
pub struct SectionProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl SectionProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for SectionProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for SectionProgressReporter {
    fn on_assembly_start(&self, template_title: &str, total_sections: usize) {
        let pb = ProgressBar::new(total_sections as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix(template_title.to_string());
        pb.set_message("Starting...");
        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_section_start(&self, section: &str, _index: usize, _total: usize) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            pb.set_message(format!("{}...", section));
        }
    }

    fn on_section_complete(&self, section: &str, completed: usize, _total: usize, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), section)
            } else {
                format!("{} {}", "x".red(), section)
            };
            pb.set_message(status);
            pb.set_position(completed as u64);
        }
    }

    fn on_assembly_complete(&self) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_with_message(format!("{}", "complete!".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_assembly_start(&self, template_title: &str, total_sections: usize) {
        println!(
            "{} {} ({} sections)",
            "->".cyan(),
            template_title.bold(),
            total_sections
        );
    }

    fn on_section_start(&self, _section: &str, _index: usize, _total: usize) {}

    fn on_section_complete(&self, section: &str, completed: usize, total: usize, success: bool) {
        let percent = (progress_fraction(completed, total) * 100.0).round() as u32;
        if success {
            println!("  {} {} ({}%)", "v".green(), section, percent);
        } else {
            println!("  {} {} (failed, {}%)", "x".red(), section, percent);
        }
    }

    fn on_assembly_complete(&self) {
        println!();
    }
}
