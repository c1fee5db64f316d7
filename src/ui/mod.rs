//! Text menu over the contact store.
//!
//! [`UserInterface`] is the seam between the menu logic in [`run_session`]
//! and the terminal. [`ConsoleInterface`] implements it over any reader and
//! writer, so the binary passes stdin/stdout and tests pass in-memory buffers.

use crate::domain::{Birthday, PhoneNumber, ValidationError};
use crate::error::SessionError;
use crate::models::{Contact, Record};
use crate::store::AddressBook;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, error, info, warn};

pub const MSG_INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const MSG_CONTACT_SAVED: &str = "Contact added and saved.";
pub const MSG_NO_RESULTS: &str = "No results found.";
pub const MSG_GOODBYE: &str = "Goodbye.";

/// Operations the menu loop needs from a front end.
pub trait UserInterface {
    fn display_menu(&mut self) -> io::Result<()>;

    /// Read the user's menu selection. `None` at end of input.
    fn get_choice(&mut self) -> io::Result<Option<String>>;

    fn display_results(&mut self, results: &[&Contact]) -> io::Result<()>;

    /// Ask for one line of input. `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>>;

    fn message(&mut self, message: &str) -> io::Result<()>;
}

/// Line-oriented console front end.
pub struct ConsoleInterface<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> UserInterface for ConsoleInterface<R, W> {
    fn display_menu(&mut self) -> io::Result<()> {
        writeln!(self.writer, "1. Add contact")?;
        writeln!(self.writer, "2. Search contacts")?;
        writeln!(self.writer, "3. Exit")
    }

    fn get_choice(&mut self) -> io::Result<Option<String>> {
        self.prompt("Choose an action: ")
    }

    fn display_results(&mut self, results: &[&Contact]) -> io::Result<()> {
        if results.is_empty() {
            return writeln!(self.writer, "{}", MSG_NO_RESULTS);
        }

        writeln!(self.writer, "Search results:")?;
        for contact in results {
            contact.display(&mut self.writer)?;
        }
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", message)?;
        self.writer.flush()?;
        self.read_line()
    }

    fn message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }
}

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Search,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Search),
            "3" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Load the contacts file at `path` and run the menu over it.
///
/// A missing file starts an empty book. Any other load failure is returned
/// before the menu is shown, so the file is never overwritten by a book that
/// did not come from it.
pub fn run<U: UserInterface>(path: &Path, ui: &mut U) -> Result<(), SessionError> {
    let mut book = AddressBook::new();
    book.load_from_file(path)?;
    info!(path = %path.display(), contacts = book.len(), "Contacts loaded");

    run_session(&mut book, ui, path)?;
    Ok(())
}

/// Run the menu until the user quits or input ends.
///
/// Each added contact is saved to `path` straight away.
pub fn run_session<U: UserInterface>(
    book: &mut AddressBook,
    ui: &mut U,
    path: &Path,
) -> io::Result<()> {
    loop {
        ui.display_menu()?;
        let Some(input) = ui.get_choice()? else {
            debug!("Input closed");
            break;
        };

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Add) => add_contact(book, ui, path)?,
            Some(MenuChoice::Search) => search_contacts(book, ui)?,
            Some(MenuChoice::Quit) => break,
            None => ui.message(MSG_INVALID_CHOICE)?,
        }
    }

    ui.message(MSG_GOODBYE)
}

/// Build a contact from raw prompt answers.
pub fn parse_contact(name: &str, phone: &str, birthday: &str) -> Result<Contact, ValidationError> {
    let phone = PhoneNumber::new(phone)?;
    let birthday = Birthday::parse(birthday)?;
    Ok(Contact::with_details(name, phone, birthday))
}

fn add_contact<U: UserInterface>(
    book: &mut AddressBook,
    ui: &mut U,
    path: &Path,
) -> io::Result<()> {
    let Some(name) = ui.prompt("Enter name: ")? else {
        return Ok(());
    };
    let Some(phone) = ui.prompt("Enter phone number: ")? else {
        return Ok(());
    };
    let Some(birthday) = ui.prompt("Enter birthday (YYYY-MM-DD): ")? else {
        return Ok(());
    };

    let contact = match parse_contact(&name, &phone, &birthday) {
        Ok(contact) => contact,
        Err(err) => {
            warn!(error = %err, "Contact input rejected");
            return ui.message(&format!("Error: {}", err));
        }
    };

    debug!(name = %contact.name(), "Adding contact");
    book.add_record(contact);

    match book.save_to_file(path) {
        Ok(()) => ui.message(MSG_CONTACT_SAVED),
        Err(err) => {
            error!(path = %path.display(), error = %err, "Failed to save contacts");
            ui.message(&format!("Contact added but not saved: {}", err))
        }
    }
}

fn search_contacts<U: UserInterface>(book: &AddressBook, ui: &mut U) -> io::Result<()> {
    let Some(query) = ui.prompt("Enter search query: ")? else {
        return Ok(());
    };

    let results = book.search(&query);
    debug!(query = %query, matches = results.len(), "Search");
    ui.display_results(&results)
}
