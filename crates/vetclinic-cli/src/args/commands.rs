use super::common::FieldArgs;
use clap::Subcommand;
use vetclinic_types::{OwnerId, PetId};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List, show and add pets")]
    Pets {
        #[command(subcommand)]
        command: PetsCommand,
    },

    #[command(about = "List, show and add owners")]
    Owners {
        #[command(subcommand)]
        command: OwnersCommand,
    },

    #[command(about = "Add health visit records")]
    Records {
        #[command(subcommand)]
        command: RecordsCommand,
    },

    #[command(about = "Check that the API server and its database are reachable")]
    Status,

    #[command(about = "Show or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(about = "Interactive shell (default)")]
    Shell,
}

#[derive(Subcommand)]
pub enum PetsCommand {
    #[command(about = "List all pets")]
    List,

    #[command(about = "Show a pet with its visit history and trend chart")]
    Show { id: PetId },

    #[command(about = "Show the add-pet form and its owner choices")]
    New,

    #[command(about = "Add a pet: name=.. species=.. owner_id=.. [breed=..] [date_of_birth=..] [color=..] [microchip_id=..]")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[derive(Subcommand)]
pub enum OwnersCommand {
    #[command(about = "List all owners")]
    List,

    #[command(about = "Show an owner with their pets")]
    Show { id: OwnerId },

    #[command(about = "Show the add-owner form")]
    New,

    #[command(about = "Add an owner: first_name=.. last_name=.. email=.. [phone=..] [address=..]")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[derive(Subcommand)]
pub enum RecordsCommand {
    #[command(about = "Show the add-record form and its pet choices")]
    New,

    #[command(about = "Add a visit: pet_id=.. visit_date=.. [weight=..] [temperature=..] [heart_rate=..] ...")]
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a config file with the defaults")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}
