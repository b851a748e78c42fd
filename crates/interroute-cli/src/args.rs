//! Command line arguments.

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use interroute_core::{CargoDeclaration, ContainerSize, ContainerType, Country, TransportMode};

/// Plan international freight routes and price shipments
#[derive(Parser, Debug)]
#[command(name = "interroute", author, version, about)]
pub struct Cli {
    /// Query a running InterRoute server instead of the local engine
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// JSON route table replacing the built-in catalog (local mode only)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List countries and the partners each can ship with
    Countries,
    /// Transport modes available between two countries
    Options {
        origin: Country,
        destination: Country,
    },
    /// Reference path, display path and impact of one route
    Plan {
        origin: Country,
        destination: Country,
        mode: TransportMode,
    },
    /// Price a shipment on a route
    Quote {
        origin: Country,
        destination: Country,
        mode: TransportMode,
        #[command(flatten)]
        cargo: CargoArgs,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Loose,
    Container,
    Pallet,
}

#[derive(Args, Debug)]
pub struct CargoArgs {
    /// Cargo type
    #[arg(long, value_enum)]
    pub kind: KindArg,

    /// Net weight in kg (loose)
    #[arg(long)]
    pub net_kg: Option<f64>,

    /// Gross weight in kg (loose)
    #[arg(long)]
    pub gross_kg: Option<f64>,

    /// Volume in m³ (loose; required by sea)
    #[arg(long)]
    pub volume_m3: Option<f64>,

    /// dryvan, highcube or reefer (container)
    #[arg(long)]
    pub container_type: Option<ContainerType>,

    /// 20 or 40 (container)
    #[arg(long)]
    pub size_ft: Option<u32>,

    /// Number of containers or pallets
    #[arg(long)]
    pub quantity: Option<u32>,

    /// Weight per pallet in kg (pallet)
    #[arg(long)]
    pub unit_kg: Option<f64>,
}

fn required<T>(value: Option<T>, flag: &str, kind: &str) -> Result<T> {
    value.ok_or_else(|| anyhow!("--{flag} is required for {kind} cargo"))
}

impl CargoArgs {
    pub fn to_cargo(&self) -> Result<CargoDeclaration> {
        let cargo = match self.kind {
            KindArg::Loose => CargoDeclaration::Loose {
                net_weight_kg: required(self.net_kg, "net-kg", "loose")?,
                gross_weight_kg: required(self.gross_kg, "gross-kg", "loose")?,
                volume_m3: self.volume_m3,
            },
            KindArg::Container => CargoDeclaration::Container {
                container_type: required(self.container_type, "container-type", "container")?,
                size_ft: ContainerSize::try_from(required(self.size_ft, "size-ft", "container")?)?,
                quantity: required(self.quantity, "quantity", "container")?,
            },
            KindArg::Pallet => CargoDeclaration::Pallet {
                quantity: required(self.quantity, "quantity", "pallet")?,
                unit_weight_kg: required(self.unit_kg, "unit-kg", "pallet")?,
            },
        };
        Ok(cargo)
    }
}
