use super::args::{Cli, Commands, ConfigCommand, OwnersCommand, PetsCommand, RecordsCommand};
use super::handlers;
use crate::app::FormKind;
use crate::context::ExecutionContext;
use crate::logging;
use crate::presentation::presenters::SubmitFrom;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);
    let ctx = ExecutionContext::new(&cli)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(dispatch(cli.command, &ctx))
}

async fn dispatch(command: Option<Commands>, ctx: &ExecutionContext) -> Result<()> {
    let Some(command) = command else {
        return handlers::shell::handle(ctx).await;
    };

    match command {
        Commands::Pets { command } => {
            let mut app = ctx.app(SubmitFrom::CommandLine)?;
            match command {
                PetsCommand::List => handlers::records::list_pets(&mut app).await,
                PetsCommand::Show { id } => handlers::records::show_pet(&mut app, id).await,
                PetsCommand::New => handlers::records::new_form(&mut app, FormKind::AddPet).await,
                PetsCommand::Add { fields } => {
                    handlers::records::add(&mut app, FormKind::AddPet, &fields.resolve()).await
                }
            }
        }

        Commands::Owners { command } => {
            let mut app = ctx.app(SubmitFrom::CommandLine)?;
            match command {
                OwnersCommand::List => handlers::records::list_owners(&mut app).await,
                OwnersCommand::Show { id } => handlers::records::show_owner(&mut app, id).await,
                OwnersCommand::New => {
                    handlers::records::new_form(&mut app, FormKind::AddOwner).await
                }
                OwnersCommand::Add { fields } => {
                    handlers::records::add(&mut app, FormKind::AddOwner, &fields.resolve()).await
                }
            }
        }

        Commands::Records { command } => {
            let mut app = ctx.app(SubmitFrom::CommandLine)?;
            match command {
                RecordsCommand::New => {
                    handlers::records::new_form(&mut app, FormKind::AddRecord).await
                }
                RecordsCommand::Add { fields } => {
                    handlers::records::add(&mut app, FormKind::AddRecord, &fields.resolve()).await
                }
            }
        }

        Commands::Status => {
            let api = ctx.api()?;
            handlers::status::handle(api.as_ref(), ctx.api_base(), ctx.json_mode()).await
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(ctx),
            ConfigCommand::Init { force } => handlers::config::init(ctx, force),
        },

        Commands::Shell => handlers::shell::handle(ctx).await,
    }
}
