//! InterRoute CLI - route plans and freight quotes from the command line.
//!
//! Runs the engine in-process by default, or talks to `interroute-server`
//! when `--server` is given.

pub mod args;
pub mod client;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use interroute_core::{Country, RouteCatalog, RoutePlanner};

pub use args::{CargoArgs, Cli, Command};
pub use client::ApiClient;

/// Execute a parsed command and return its JSON result.
pub fn run(cli: &Cli) -> Result<Value> {
    match &cli.server {
        Some(url) => run_remote(&ApiClient::new(url.as_str()), &cli.command),
        None => run_local(&local_planner(cli)?, &cli.command),
    }
}

fn local_planner(cli: &Cli) -> Result<RoutePlanner> {
    let catalog = match &cli.catalog {
        Some(path) => RouteCatalog::from_json_file(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => RouteCatalog::builtin()?,
    };
    Ok(RoutePlanner::new(catalog))
}

fn countries() -> Value {
    Value::Array(
        Country::ALL
            .into_iter()
            .map(|country| {
                let partners: Vec<&str> =
                    country.partners().into_iter().map(Country::code).collect();
                json!({
                    "code": country.code(),
                    "name": country.name(),
                    "partners": partners,
                })
            })
            .collect(),
    )
}

pub fn run_local(planner: &RoutePlanner, command: &Command) -> Result<Value> {
    let value = match command {
        Command::Countries => countries(),
        Command::Options {
            origin,
            destination,
        } => serde_json::to_value(planner.transport_options(*origin, *destination)?)?,
        Command::Plan {
            origin,
            destination,
            mode,
        } => serde_json::to_value(planner.plan(*origin, *destination, *mode)?)?,
        Command::Quote {
            origin,
            destination,
            mode,
            cargo,
        } => {
            let cargo = cargo.to_cargo()?;
            serde_json::to_value(planner.quote(*origin, *destination, *mode, cargo)?)?
        }
    };
    Ok(value)
}

fn run_remote(client: &ApiClient, command: &Command) -> Result<Value> {
    match command {
        Command::Countries => client.countries(),
        Command::Options {
            origin,
            destination,
        } => client.options(*origin, *destination),
        Command::Plan {
            origin,
            destination,
            mode,
        } => client.plan(*origin, *destination, *mode),
        Command::Quote {
            origin,
            destination,
            mode,
            cargo,
        } => client.quote(*origin, *destination, *mode, &cargo.to_cargo()?),
    }
}
