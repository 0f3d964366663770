mod api;
mod cli;
mod commands;
mod config;
mod output;


use anyhow::Result;
use api::{ApiError, YandexClient};
use cli::{Args, Command};
use commands::Target;
use log::error;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = cli::parse();
    let result = run(args).await;

    if let Err(e) = &result {
        if let Some(body) = e.downcast_ref::<ApiError>().and_then(ApiError::body) {
            error!("Response body: {}", body);
        }
    }
    result
}

async fn run(args: Args) -> Result<()> {
    let config_path = args.config.clone().unwrap_or_else(config::default_path);
    let settings = config::load(&config_path)?;

    let output = match &args.command {
        Command::List(list) => {
            let target = Target::resolve(&list.connection, &settings)?;
            let client = YandexClient::new(target.admin_token);
            commands::list(&client, &target.domain, list, &settings).await?
        }
        Command::Add(add) => {
            let target = Target::resolve(&add.connection, &settings)?;
            let client = YandexClient::new(target.admin_token);
            commands::add(&client, &target.domain, add).await?
        }
        Command::Edit(edit) => {
            let target = Target::resolve(&edit.connection, &settings)?;
            let client = YandexClient::new(target.admin_token);
            commands::edit(&client, &target.domain, edit).await?
        }
        Command::Delete(delete) => {
            let target = Target::resolve(&delete.connection, &settings)?;
            let client = YandexClient::new(target.admin_token);
            commands::delete(&client, &target.domain, delete).await?
        }
        Command::Settings(update) => commands::settings(&config_path, settings.clone(), update)?,
    };

    print!("{}", output);
    Ok(())
}
