//! Add, edit, remove, and view operations.

use std::io::{BufRead, Write};

use stockroom::{Field, ItemBuilder, Result, ValidationError, render_item, schema};
use tracing::debug;

use super::console::is_exit;
use super::{Session, SessionState};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Prompt for every input field, then optionally append the new item.
    pub(super) fn add_item(&mut self) -> Result<()> {
        self.console.say("Adding new item...")?;
        self.transition(SessionState::AwaitingField);

        let mut builder = ItemBuilder::new(&self.table);
        for field in schema::input_fields() {
            loop {
                let raw = self.console.ask(format!("{}: ", field))?;
                match builder.set(field, &raw) {
                    Ok(()) => break,
                    Err(e) => self.console.error(e)?,
                }
            }
        }
        let item = match builder.build() {
            Ok(item) => item,
            Err(e) => return self.console.error(e),
        };

        if let Err(e) = self.table.insert(item.clone()) {
            return self.console.error(e);
        }
        self.dirty = true;
        self.console.say(format!("\n{}\n", render_item(&item)))?;

        self.transition(SessionState::AwaitingConfirmation);
        if self.console.confirm("Would you like to save changes? (y/n) ")? {
            self.store.append(&item)?;
            self.snapshot = self.table.clone();
            self.dirty = false;
            self.refresh_fingerprint();
            self.console.success("Changes saved.")?;
        } else {
            self.console.say("Changes discarded.")?;
        }
        Ok(())
    }

    /// Pick an item, edit fields by name until `x`, then offer a full save.
    pub(super) fn edit_item(&mut self) -> Result<()> {
        self.console.say("Editing item...")?;
        self.transition(SessionState::AwaitingField);

        let Some(index) = self.prompt_for_item()? else {
            return Ok(());
        };

        loop {
            self.transition(SessionState::AwaitingField);
            let listing = render_item(&self.table.all()[index]);
            self.console.say(format!("\n{}\n", listing))?;

            let name = self
                .console
                .ask("Enter the name of the column to edit or x to exit: ")?;
            if is_exit(&name) {
                break;
            }

            let field = match name.trim().parse::<Field>() {
                Ok(field) if field.is_editable() => field,
                Ok(field) => {
                    self.console.error(ValidationError::ReadOnlyField(field))?;
                    continue;
                }
                Err(e) => {
                    self.console.error(e)?;
                    continue;
                }
            };

            loop {
                let raw = self.console.ask(format!("{}: ", field))?;
                let id = self.table.all()[index].id().to_string();
                match self.table.update_field(&id, field, &raw) {
                    Ok(()) => {
                        debug!(id = %id, field = %field, "field updated");
                        self.dirty = true;
                        break;
                    }
                    Err(e) => self.console.error(e)?,
                }
            }
        }

        self.offer_save()
    }

    /// Remove items one confirmed ID at a time; offer a full save on `x`.
    pub(super) fn remove_item(&mut self) -> Result<()> {
        self.console.say("Removing item...")?;

        loop {
            self.transition(SessionState::AwaitingField);
            let raw = self.console.ask("Enter the item ID or x to exit: ")?;
            if is_exit(&raw) {
                return self.offer_save();
            }

            let item = match self.table.lookup(&raw) {
                Ok(index) => &self.table.all()[index],
                Err(e) => {
                    self.console.error(e)?;
                    continue;
                }
            };
            let id = item.id().to_string();
            let listing = render_item(item);
            self.console.say(format!("\n{}\n", listing))?;

            self.transition(SessionState::AwaitingConfirmation);
            if self
                .console
                .confirm_strict(format!("Confirm removal of item {}? (y/n) ", id))?
            {
                match self.table.remove(&id) {
                    Ok(_) => {
                        self.dirty = true;
                        self.console.say(format!("Item {} successfully removed.\n", id))?;
                    }
                    Err(e) => self.console.error(e)?,
                }
            } else {
                self.console.say("Removal cancelled.\n")?;
            }
        }
    }

    /// Look items up and display them until `x`. Read-only.
    pub(super) fn view_item(&mut self) -> Result<()> {
        self.console.say("Viewing item...")?;
        self.transition(SessionState::AwaitingField);

        loop {
            let raw = self.console.ask("Enter the item ID or x to exit: ")?;
            if is_exit(&raw) {
                return Ok(());
            }
            match self.table.lookup(&raw) {
                Ok(index) => {
                    let listing = render_item(&self.table.all()[index]);
                    self.console.say(format!("\n{}\n", listing))?;
                }
                Err(e) => self.console.error(e)?,
            }
        }
    }

    /// Prompt until an existing Item_ID is entered. `None` on `x`.
    fn prompt_for_item(&mut self) -> Result<Option<usize>> {
        loop {
            let raw = self.console.ask("Enter the item ID or x to exit: ")?;
            if is_exit(&raw) {
                return Ok(None);
            }
            match self.table.lookup(&raw) {
                Ok(index) => return Ok(Some(index)),
                Err(e) => self.console.error(e)?,
            }
        }
    }
}
