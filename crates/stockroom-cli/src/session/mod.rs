//! The interactive editor session.
//!
//! A session owns one working [`Table`] plus the last clean snapshot read from
//! (or written to) the store. Every pass through the main menu reloads, so
//! changes an operation did not save are gone by the next operation.
//!
//! ```text
//!            ┌──────── reload ◄──────────┐
//!            ▼                           │
//!   Idle ──menu──► operation sub-loop ───┘
//!                   │  AwaitingField
//!                   │  AwaitingConfirmation
//!            x ─────┴──────────────────────► Exited
//! ```

mod console;
pub mod files;
mod inventory_view;
mod menu;
mod operations;

pub use console::Console;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use stockroom::{ReportConfig, Reporter, Result, Store, StoreConfig, StockroomError, StoreMetadata, Table};
use tracing::{debug, warn};

use menu::{MAIN_MENU, MenuChoice};

/// Session configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub store: StoreConfig,
    pub report: ReportConfig,
}

/// Where the session is in its prompt cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// At the main menu with a freshly loaded table.
    Idle,
    /// Inside an operation, waiting for an ID, field name, or value.
    AwaitingField,
    /// Waiting for a yes/no answer before a save or removal.
    AwaitingConfirmation,
    /// The operator chose to exit.
    Exited,
}

pub struct Session<R, W> {
    store: Box<dyn Store>,
    reporter: Box<dyn Reporter>,
    console: Console<R, W>,
    /// Working copy for the current operation.
    table: Table,
    /// What the store held at the last successful load or write.
    snapshot: Table,
    metadata: Option<StoreMetadata>,
    dirty: bool,
    state: SessionState,
    /// Report file written this session; sorting requires one.
    report_path: Option<PathBuf>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Load the store and start a session.
    ///
    /// A store that cannot be loaded here is fatal: no session begins.
    pub fn open(store: Box<dyn Store>, reporter: Box<dyn Reporter>, console: Console<R, W>) -> Result<Self> {
        let mut session = Self {
            store,
            reporter,
            console,
            table: Table::new(),
            snapshot: Table::new(),
            metadata: None,
            dirty: false,
            state: SessionState::Idle,
            report_path: None,
        };
        session.reload()?;
        Ok(session)
    }

    #[cfg(test)]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[cfg(test)]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the working table has changes not yet written.
    #[cfg(test)]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn console(&mut self) -> &mut Console<R, W> {
        &mut self.console
    }

    #[cfg(test)]
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Replace the working table with the store's contents, dropping any
    /// unsaved changes.
    pub fn reload(&mut self) -> Result<()> {
        let (table, metadata) = self.store.load()?;
        if self.dirty {
            debug!("discarding unsaved changes");
        }
        self.snapshot = table.clone();
        self.table = table;
        self.metadata = Some(metadata);
        self.dirty = false;
        self.transition(SessionState::Idle);
        Ok(())
    }

    /// Overwrite the store with the working table.
    ///
    /// If the file changed on disk since it was loaded, a warning is logged
    /// and the write goes ahead anyway.
    pub fn persist(&mut self) -> Result<()> {
        if let Some(metadata) = &self.metadata {
            match self.store.fingerprint() {
                Ok(hash) if !metadata.is_current(&hash) => warn!(
                    path = %self.store.path().display(),
                    loaded_at = %metadata.loaded_at,
                    "store changed on disk since it was loaded; overwriting"
                ),
                Err(e) => warn!(error = %e, "could not fingerprint store before saving"),
                Ok(_) => {}
            }
        }

        self.store.save(&self.table)?;
        self.snapshot = self.table.clone();
        self.dirty = false;
        self.refresh_fingerprint();
        Ok(())
    }

    /// Run the menu loop until the operator exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        match self.menu_loop() {
            Err(StockroomError::InputClosed) => {
                self.transition(SessionState::Exited);
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            self.refresh()?;
            self.console.say(MAIN_MENU)?;
            let answer = self.console.ask("Select a number: ")?;

            let outcome = match answer.parse::<MenuChoice>() {
                Ok(MenuChoice::AddItem) => self.add_item(),
                Ok(MenuChoice::EditItem) => self.edit_item(),
                Ok(MenuChoice::RemoveItem) => self.remove_item(),
                Ok(MenuChoice::ViewItem) => self.view_item(),
                Ok(MenuChoice::ViewInventory) => self.view_inventory(),
                Ok(MenuChoice::Exit) => {
                    self.transition(SessionState::Exited);
                    return self.console.say("Exiting program...");
                }
                Err(()) => self.console.error("Must select a valid number."),
            };
            self.recover(outcome)?;
        }
    }

    /// Start-of-iteration reload. After startup a failed reload is reported
    /// and the last clean snapshot stands in for the store.
    fn refresh(&mut self) -> Result<()> {
        if let Err(e) = self.reload() {
            warn!(error = %e, "reload failed; using last loaded snapshot");
            self.table = self.snapshot.clone();
            self.dirty = false;
            self.transition(SessionState::Idle);
            self.console.error(format!("Could not reload inventory: {}", e))?;
        }
        Ok(())
    }

    /// Report a non-fatal error and carry on. End of input still propagates.
    fn recover(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(StockroomError::InputClosed) => Err(StockroomError::InputClosed),
            Err(e) => self.console.error(e),
        }
    }

    fn refresh_fingerprint(&mut self) {
        if let (Some(metadata), Ok(hash)) = (self.metadata.as_mut(), self.store.fingerprint()) {
            metadata.hash = hash;
        }
    }

    fn transition(&mut self, next: SessionState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "session state");
            self.state = next;
        }
    }

    /// Ask once whether to write the whole working table.
    fn offer_save(&mut self) -> Result<()> {
        self.transition(SessionState::AwaitingConfirmation);
        if self.console.confirm("Would you like to save changes? (y/n) ")? {
            self.persist()?;
            self.console.success("Changes saved.")?;
        } else if self.dirty {
            self.console.say("Changes discarded.")?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    const A1: &str = "A1,TEE,SHIRTS,COTTON,RED,M,ACME,4.00,10.00,3,30.00";

    #[test]
    fn test_open_fails_on_schema_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(
            &path,
            "Item_ID,Item_Name,Category,Material,Color,Sizes,Purchase_Price,Sales_Price,Quantity,Total_Value\n",
        )
        .unwrap();

        let console = Console::new(std::io::Cursor::new(Vec::new()), Vec::new());
        let result = Session::open(
            Box::new(stockroom::CsvStore::open(&path)),
            Box::new(stockroom::GridReporter::new()),
            console,
        );
        assert!(matches!(result, Err(StockroomError::SchemaMismatch { .. })));
    }

    #[test]
    fn test_open_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let console = Console::new(std::io::Cursor::new(Vec::new()), Vec::new());
        let result = Session::open(
            Box::new(stockroom::CsvStore::open(dir.path().join("none.csv"))),
            Box::new(stockroom::GridReporter::new()),
            console,
        );
        assert!(matches!(result, Err(StockroomError::Io { .. })));
    }

    #[test]
    fn test_exit_and_invalid_choice() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_store(dir.path(), &[A1]);
        let out = run(&path, "9\nx\n");
        assert!(out.contains("Must select a valid number."));
        assert!(out.contains("Exiting program..."));
    }

    #[test]
    fn test_end_of_input_exits_gracefully() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_store(dir.path(), &[A1]);
        let mut s = session(&path, "2\n");
        assert!(s.run().is_ok());
        assert_eq!(s.state(), SessionState::Exited);
    }

    #[test]
    fn test_reload_discards_unsaved_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_store(dir.path(), &[A1]);
        let mut s = session(&path, "");
        s.table.update_field("A1", stockroom::Field::Quantity, "9").unwrap();
        s.dirty = true;

        s.reload().unwrap();
        assert!(!s.is_dirty());
        assert_eq!(s.table().get("A1").unwrap().quantity(), 3);
    }

    #[test]
    fn test_persist_writes_working_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_store(dir.path(), &[A1]);
        let mut s = session(&path, "");
        s.table.update_field("A1", stockroom::Field::Quantity, "5").unwrap();
        s.dirty = true;

        s.persist().unwrap();
        assert!(!s.is_dirty());
        assert_eq!(stored(&path).get("A1").unwrap().quantity(), 5);
    }

    #[test]
    fn test_persist_overwrites_external_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_store(dir.path(), &[A1]);
        let mut s = session(&path, "");

        write_store(dir.path(), &[A1, "B2,CAP,HATS,WOOL,BLUE,L,ACME,1.00,2.00,1,2.00"]);
        s.persist().unwrap();

        assert_eq!(stored(&path).len(), 1);
    }

    #[test]
    fn test_failed_reload_falls_back_to_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_store(dir.path(), &[A1]);
        let mut s = session(&path, "x\n");
        std::fs::remove_file(&path).unwrap();

        s.run().unwrap();
        assert_eq!(s.table().len(), 1);
        let out = String::from_utf8(s.into_console().into_output()).unwrap();
        assert!(out.contains("Could not reload inventory"));
    }
}
