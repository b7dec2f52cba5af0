// NOTE: vetclinic Architecture
//
// Why one controller (App) behind both the subcommands and the shell?
// - A subcommand is a single shell line run to completion
// - Navigation, form submission and refresh rules live in one place
// - Surface, Notifier and ChartRenderer are traits so tests drive App without a terminal
//
// Why does every list visit refetch?
// - The server is the only store; nothing is cached between interactions
// - A record added elsewhere shows up on the next visit
//
// Why presenters own all display text?
// - Age, dates and the "not specified" fallbacks are computed once
// - Views stay dumb formatting over view models, JSON output stays in step

pub mod app;
mod args;
pub mod chart;
mod commands;
pub mod config;
pub mod context;
mod handlers;
mod logging;
pub mod presentation;

pub use app::{
    Action, App, Container, Destination, FormCommand, FormKind, Navigator, Outcome, Section,
};
pub use args::{Cli, Commands, ConfigCommand, OwnersCommand, PetsCommand, RecordsCommand};
pub use chart::{ChartConfig, ChartRenderer, TerminalChart, build_trend_chart};
pub use commands::run;
