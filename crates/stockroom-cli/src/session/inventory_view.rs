//! The "view inventory as table" sub-menu: report creation and sorting.

use std::io::{BufRead, Write};

use stockroom::{Field, Result, StockroomError};

use super::console::is_exit;
use super::files::choose_report_path;
use super::menu::{REPORT_MENU, ReportChoice};
use super::{Session, SessionState};

impl<R: BufRead, W: Write> Session<R, W> {
    pub(super) fn view_inventory(&mut self) -> Result<()> {
        loop {
            self.transition(SessionState::AwaitingField);
            self.console.say(REPORT_MENU)?;
            let answer = self.console.ask("Select a number or x to exit: ")?;

            let outcome = match answer.parse::<ReportChoice>() {
                Ok(ReportChoice::Create) => self.create_report(),
                Ok(ReportChoice::Sort) => self.sort_report(),
                Ok(ReportChoice::Back) => return Ok(()),
                Err(()) => self.console.error("Must select a valid number."),
            };
            match outcome {
                Err(StockroomError::InputClosed) => return Err(StockroomError::InputClosed),
                Err(e) => self.console.error(e)?,
                Ok(()) => {}
            }
        }
    }

    /// Write the unsorted grid, asking before replacing an existing file.
    fn create_report(&mut self) -> Result<()> {
        let text = self.reporter.render(&self.table, None);
        let path = choose_report_path(&mut self.console, self.store.path())?;

        self.reporter.write_report(&path, &text)?;
        self.console.success(format!("Table saved to file {}", path.display()))?;
        self.report_path = Some(path);
        Ok(())
    }

    /// Pick sort columns one at a time, then rewrite the report sorted.
    fn sort_report(&mut self) -> Result<()> {
        let Some(path) = self.report_path.clone() else {
            return self
                .console
                .error("Must create table or reset existing before sorting.");
        };

        let mut keys: Vec<Field> = Vec::new();
        loop {
            self.console.say(sort_prompt(&keys))?;
            let answer = self
                .console
                .ask("Enter a column number to sort by, or x when done: ")?;
            if is_exit(&answer) {
                break;
            }
            match answer.trim().parse::<usize>().ok().and_then(Field::from_number) {
                Some(field) if !keys.contains(&field) => keys.push(field),
                _ => self.console.error("Invalid option or already selected")?,
            }
        }

        if keys.is_empty() {
            return self.console.say("Exiting sorting...");
        }

        let text = self.reporter.render(&self.table, Some(&keys));
        self.reporter.write_report(&path, &text)?;
        self.console
            .success(format!("Sorted table saved to file {}", path.display()))
    }
}

/// Numbered column list followed by what has been picked so far.
fn sort_prompt(selected: &[Field]) -> String {
    let mut text = String::from("\nColumns:\n");
    for (i, field) in Field::ALL.iter().enumerate() {
        text.push_str(&format!("  {:>2}. {}\n", i + 1, field));
    }
    let names: Vec<&str> = selected.iter().map(|f| f.name()).collect();
    text.push_str(&format!("Selected Columns: [{}]", names.join(", ")));
    text
}
