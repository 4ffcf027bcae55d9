//! Command argument wrappers and their handlers.
//!
//! Each `*Args` struct carries clap-specific parsing and converts into the
//! core record type. Handlers then validate through the same record adapters
//! used when loading the data file, so bad input on the command line is
//! reported with the same messages as a bad entry on disk.

use anyhow::{bail, Context, Result};
use circle_core::{
    AddressBook, AddressBookRecord, CreateResult, JsonStorage, OperationStatus, PersonRecord,
    Persons, PlanRecord, Plans,
};
use clap::{Args, Subcommand};
use log::info;

use crate::renderer::TerminalRenderer;

/// Add a new contact
#[derive(Args)]
pub struct AddPersonArgs {
    /// Full name of the contact (letters, digits and spaces)
    pub name: String,
    #[arg(short, long, help = "Phone number, digits only")]
    pub phone: String,
    #[arg(short, long, help = "Email address")]
    pub email: String,
}

impl From<AddPersonArgs> for PersonRecord {
    fn from(val: AddPersonArgs) -> Self {
        PersonRecord {
            name: Some(val.name),
            phone: Some(val.phone),
            email: Some(val.email),
        }
    }
}

#[derive(Subcommand)]
pub enum PersonCommands {
    /// Add a new contact
    #[command(alias = "a")]
    Add(AddPersonArgs),
    /// List all contacts
    #[command(aliases = ["l", "ls"])]
    List,
}

/// Schedule a plan with an existing contact
#[derive(Args)]
pub struct AddPlanArgs {
    /// Name of the plan
    pub name: String,
    #[arg(long, help = "When the plan takes place, as YYYY-MM-DD HH:MM")]
    pub at: String,
    #[arg(short, long, help = "Name of the contact the plan is with")]
    pub friend: String,
}

impl From<AddPlanArgs> for PlanRecord {
    fn from(val: AddPlanArgs) -> Self {
        PlanRecord {
            plan_name: Some(val.name),
            plan_date_time: Some(val.at),
            friend_name: Some(val.friend),
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Schedule a plan with an existing contact
    #[command(alias = "a")]
    Add(AddPlanArgs),
    /// List all plans in chronological order
    #[command(aliases = ["l", "ls"])]
    List,
}

/// Runs commands against the address book file.
pub struct Cli {
    storage: JsonStorage,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(storage: JsonStorage, renderer: TerminalRenderer) -> Self {
        Self { storage, renderer }
    }

    pub fn handle_person_command(&self, command: PersonCommands) -> Result<()> {
        match command {
            PersonCommands::Add(args) => self.add_person(args),
            PersonCommands::List => self.list_persons(),
        }
    }

    pub fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Add(args) => self.add_plan(args),
            PlanCommands::List => self.list_plans(),
        }
    }

    fn add_person(&self, args: AddPersonArgs) -> Result<()> {
        let mut book = self.load()?;
        let person = PersonRecord::from(args).to_entity()?;
        book.add_person(person.clone())?;
        self.save(&book)?;

        info!("Added person {}", person.name);
        self.renderer
            .render(&CreateResult::new(person).to_string())
    }

    fn list_persons(&self) -> Result<()> {
        let book = self.load()?;
        let persons = Persons(book.persons());
        let output = format!("{}\n\n{}", persons.heading(), persons);
        self.renderer.render(&output)
    }

    fn add_plan(&self, args: AddPlanArgs) -> Result<()> {
        let mut book = self.load()?;
        let plan = PlanRecord::from(args).to_entity(&book)?;
        book.add_plan(plan.clone())?;
        self.save(&book)?;

        info!("Added plan {} with {}", plan.name, plan.friend.name);
        self.renderer.render(&CreateResult::new(plan).to_string())
    }

    pub fn list_plans(&self) -> Result<()> {
        let book = self.load()?;
        let plans = Plans(book.plans());
        let output = format!("{}\n\n{}", plans.heading(), plans);
        self.renderer.render(&output)
    }

    /// Loads the address book and reports whether it is valid.
    pub fn check(&self) -> Result<()> {
        match self.storage.read_address_book() {
            Ok(book) => {
                let book = book.unwrap_or_default();
                let status = OperationStatus::success(format!(
                    "Address book is valid ({} persons, {} plans)",
                    book.persons().len(),
                    book.plans().len()
                ));
                self.renderer.render(&status.to_string())
            }
            Err(e) => {
                self.renderer
                    .render(&OperationStatus::failure(e.to_string()).to_string())?;
                bail!("Address book at {} is invalid", self.storage.path().display())
            }
        }
    }

    /// Prints the JSON schema of the address book file.
    pub fn print_schema() -> Result<()> {
        let schema = schemars::schema_for!(AddressBookRecord);
        let json = serde_json::to_string_pretty(&schema).context("Failed to serialize schema")?;
        println!("{json}");
        Ok(())
    }

    fn load(&self) -> Result<AddressBook> {
        let book = self.storage.read_address_book().with_context(|| {
            format!(
                "Failed to load address book from {}",
                self.storage.path().display()
            )
        })?;
        Ok(book.unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        self.storage.save_address_book(book).with_context(|| {
            format!(
                "Failed to save address book to {}",
                self.storage.path().display()
            )
        })
    }
}
