//! Interactive menu session.
//!
//! # Responsibility
//! - Load the store on start and run the menu until save-and-exit.
//! - Route each menu choice to roster, assignment or persistence services.
//!
//! # Invariants
//! - A failed save keeps the session running with the store intact.
//! - Closed input ends the session without saving.

use crate::console::Console;
use crate::menu::{parse_selection, MenuChoice, MENU_LINES};
use chorewheel_core::{
    ChoreService, ListKind, LoadStatus, RosterError, RosterService, Store, StoreRepository,
};
use log::{info, warn};
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// How a session finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// Store was written to this path.
    Saved(PathBuf),
    /// Input closed before save-and-exit was chosen.
    InputClosed,
}

/// One interactive run over a loaded store.
pub struct Session<R: StoreRepository, G: Rng> {
    service: ChoreService<R>,
    store: Store,
    stop_word: String,
    rng: G,
}

impl<R: StoreRepository, G: Rng> Session<R, G> {
    /// Creates a session; the store is loaded when `run` starts.
    pub fn new(service: ChoreService<R>, stop_word: impl Into<String>, rng: G) -> Self {
        Self {
            service,
            store: Store::new(),
            stop_word: stop_word.into().to_lowercase(),
            rng,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Runs the menu loop until save-and-exit or closed input.
    ///
    /// # Errors
    /// Only console I/O failures are returned; every domain failure is
    /// reported on the console and the loop continues.
    pub fn run<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> io::Result<SessionEnd> {
        self.load(console)?;

        loop {
            console.say("")?;
            console.say("Choose an option:")?;
            for line in MENU_LINES {
                console.say(line)?;
            }
            let Some(input) = console.ask("Enter your choice #: ")? else {
                info!("event=session_end module=cli status=ok reason=input_closed");
                return Ok(SessionEnd::InputClosed);
            };

            let Some(choice) = MenuChoice::parse(&input) else {
                console.say("Invalid choice. Please try again.")?;
                continue;
            };

            match choice {
                MenuChoice::AddChores => self.add_items(console, ListKind::Chores)?,
                MenuChoice::AddMembers => self.add_items(console, ListKind::FamilyMembers)?,
                MenuChoice::View => self.view(console)?,
                MenuChoice::Edit(kind) => self.edit(console, kind)?,
                MenuChoice::Delete(kind) => self.delete(console, kind)?,
                MenuChoice::Assign => {
                    let report = self.service.assign_chores(&mut self.store, &mut self.rng);
                    console.say(report)?;
                }
                MenuChoice::SaveAndExit => {
                    if let Some(path) = self.save(console)? {
                        return Ok(SessionEnd::Saved(path));
                    }
                }
            }
        }
    }

    fn load<I: BufRead, O: Write>(&mut self, console: &mut Console<I, O>) -> io::Result<()> {
        let (store, status) = self.service.load_store();
        self.store = store;
        match status {
            LoadStatus::Loaded(path) => console.say(format!("Data loaded from {}.", path.display())),
            LoadStatus::Missing => console.say("No saved data found. Starting with empty lists."),
            LoadStatus::Failed(err) => console.say(format!("Error loading data: {err}")),
        }
    }

    fn save<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
    ) -> io::Result<Option<PathBuf>> {
        match self.service.save_store(&self.store) {
            Ok(path) => {
                console.say(format!("Data saved to {}.", path.display()))?;
                console.say("Goodbye!")?;
                info!("event=session_end module=cli status=ok reason=saved");
                Ok(Some(path))
            }
            Err(err) => {
                warn!(
                    "event=session_save module=cli status=error action=continue error={}",
                    err
                );
                console.say(format!("Error saving data: {err}"))?;
                Ok(None)
            }
        }
    }

    fn add_items<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
        kind: ListKind,
    ) -> io::Result<()> {
        let (intro, prompt) = match kind {
            ListKind::Chores => ("Enter your chores one at a time.", "Add a chore: "),
            ListKind::FamilyMembers => (
                "Enter family member names one at a time.",
                "Add a name: ",
            ),
        };
        console.say(format!(
            "{intro} Type '{}' when finished:",
            self.stop_word
        ))?;

        let mut roster = RosterService::new(&mut self.store);
        while let Some(item) = console.ask(prompt)? {
            if item.to_lowercase() == self.stop_word {
                break;
            }
            let added = match kind {
                ListKind::Chores => roster.add_chore(&item),
                ListKind::FamilyMembers => roster.add_member(&item),
            };
            if added {
                console.say(format!("Added {}: {item}", kind.singular()))?;
            }
        }
        Ok(())
    }

    fn view<I: BufRead, O: Write>(&self, console: &mut Console<I, O>) -> io::Result<()> {
        let chores: Vec<_> = self.store.chores.iter().map(|c| c.as_str()).collect();
        let members: Vec<_> = self.store.members.iter().map(|m| m.as_str()).collect();
        console.say(format!("Chores: {}", join_or_none(&chores)))?;
        console.say(format!("Family Members: {}", join_or_none(&members)))?;
        console.say(format!(
            "Assignments recorded: {}",
            self.store.history.len()
        ))
    }

    fn edit<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
        kind: ListKind,
    ) -> io::Result<()> {
        let Some((index, label)) = self.select(console, kind, "edit")? else {
            return Ok(());
        };
        let Some(new_label) = console.ask(&format!("Enter the new value for {label}: "))? else {
            return Ok(());
        };

        match RosterService::new(&mut self.store).edit(kind, index, &new_label) {
            Ok(_) => console.say(format!("{} updated successfully.", capitalize(kind.singular()))),
            Err(RosterError::EmptyValue) => Ok(()),
            Err(err) => console.say(format!("Could not update {}: {err}", kind.singular())),
        }
    }

    fn delete<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
        kind: ListKind,
    ) -> io::Result<()> {
        let Some((index, _)) = self.select(console, kind, "delete")? else {
            return Ok(());
        };

        match RosterService::new(&mut self.store).delete(kind, index) {
            Ok(removed) => console.say(format!("{removed} removed from {}.", kind.plural())),
            Err(err) => console.say(format!("Could not delete {}: {err}", kind.singular())),
        }
    }

    /// Lists `kind` and asks for a 1-based selection.
    ///
    /// Returns the zero-based index and its label, or `None` after reporting
    /// why nothing was selected.
    fn select<I: BufRead, O: Write>(
        &mut self,
        console: &mut Console<I, O>,
        kind: ListKind,
        action: &str,
    ) -> io::Result<Option<(usize, String)>> {
        let labels = RosterService::new(&mut self.store).labels(kind);
        if labels.is_empty() {
            console.say(format!("No {} to {action}.", kind.plural()))?;
            return Ok(None);
        }

        console.say(format!("Current {}:", kind.plural()))?;
        for (position, label) in labels.iter().enumerate() {
            console.say(format!("{}. {label}", position + 1))?;
        }

        let prompt = format!(
            "Select a {} to {action} (1-{}): ",
            kind.singular(),
            labels.len()
        );
        let Some(input) = console.ask(&prompt)? else {
            return Ok(None);
        };
        match parse_selection(&input, labels.len()) {
            Ok(index) => Ok(Some((index, labels[index].clone()))),
            Err(err) => {
                console.say(err)?;
                Ok(None)
            }
        }
    }
}

fn join_or_none(labels: &[&str]) -> String {
    if labels.is_empty() {
        "(none)".to_string()
    } else {
        labels.join(", ")
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::{capitalize, join_or_none};

    #[test]
    fn capitalize_only_touches_first_letter() {
        assert_eq!(capitalize("family member"), "Family member");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn join_marks_empty_lists() {
        assert_eq!(join_or_none(&[]), "(none)");
        assert_eq!(join_or_none(&["dishes", "trash"]), "dishes, trash");
    }
}
