//! Cargo declarations and transport cost estimation.
//!
//! Every mode has a flat base cost scaled by a cargo multiplier, except loose
//! cargo by sea, which is priced as ocean freight: the larger of weight and
//! volume billing plus CAF/BAF surcharges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;
use crate::models::TransportMode;

/// USD per ton or per m³ of ocean freight.
pub const SEA_FREIGHT_RATE_USD: f64 = 80.0;
/// Currency adjustment factor, as a share of base freight.
pub const CAF_RATE: f64 = 0.20;
/// Bunker adjustment factor, USD per billed ton or m³.
pub const BAF_PER_UNIT_USD: f64 = 10.0;
/// Estimated gross weight of one loaded TEU.
pub const KG_PER_TEU: f64 = 12_000.0;
const LOOSE_TON_FACTOR: f64 = 0.8;
const PALLET_TON_FACTOR: f64 = 0.6;
const BASE_ETA_DAYS: f64 = 10.0;
/// Share of capacity above which a booking is flagged as high.
const CAPACITY_WARNING_RATIO: f64 = 0.8;

/// Parsed through `FromStr`, so JSON accepts the same labels as the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ContainerType {
    Dryvan,
    Highcube,
    Reefer,
}

impl ContainerType {
    pub const ALL: [ContainerType; 3] = [
        ContainerType::Dryvan,
        ContainerType::Highcube,
        ContainerType::Reefer,
    ];

    /// ISO-style short label (DC/GP, HQ, RF).
    pub fn short_label(self) -> &'static str {
        match self {
            ContainerType::Dryvan => "DC/GP",
            ContainerType::Highcube => "HQ",
            ContainerType::Reefer => "RF",
        }
    }

    pub fn cost_factor(self) -> f64 {
        match self {
            ContainerType::Dryvan => 1.0,
            ContainerType::Highcube => 1.4,
            ContainerType::Reefer => 2.2,
        }
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContainerType::Dryvan => "dryvan",
            ContainerType::Highcube => "highcube",
            ContainerType::Reefer => "reefer",
        })
    }
}

impl FromStr for ContainerType {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "dryvan" | "dc" | "gp" | "dcgp" | "dc/gp" => Ok(ContainerType::Dryvan),
            "highcube" | "hq" | "hc" => Ok(ContainerType::Highcube),
            "reefer" | "rf" => Ok(ContainerType::Reefer),
            _ => Err(RouteError::unrecognized("container type", s)),
        }
    }
}

impl TryFrom<String> for ContainerType {
    type Error = RouteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ContainerType> for String {
    fn from(container_type: ContainerType) -> Self {
        container_type.to_string()
    }
}

/// Container length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ContainerSize {
    Twenty,
    Forty,
}

impl ContainerSize {
    pub fn feet(self) -> u32 {
        match self {
            ContainerSize::Twenty => 20,
            ContainerSize::Forty => 40,
        }
    }

    pub fn teu(self) -> u32 {
        match self {
            ContainerSize::Twenty => 1,
            ContainerSize::Forty => 2,
        }
    }

    pub fn cost_factor(self) -> f64 {
        match self {
            ContainerSize::Twenty => 1.0,
            ContainerSize::Forty => 1.8,
        }
    }
}

impl fmt::Display for ContainerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ft", self.feet())
    }
}

impl TryFrom<u32> for ContainerSize {
    type Error = RouteError;

    fn try_from(feet: u32) -> Result<Self, Self::Error> {
        match feet {
            20 => Ok(ContainerSize::Twenty),
            40 => Ok(ContainerSize::Forty),
            other => Err(RouteError::unrecognized("container size", other.to_string())),
        }
    }
}

impl From<ContainerSize> for u32 {
    fn from(size: ContainerSize) -> Self {
        size.feet()
    }
}

/// Containers of one type and size a vessel can take.
pub fn container_capacity(container_type: ContainerType, size: ContainerSize) -> u32 {
    match (container_type, size) {
        (ContainerType::Dryvan | ContainerType::Highcube, ContainerSize::Twenty) => 10_000,
        (ContainerType::Dryvan | ContainerType::Highcube, ContainerSize::Forty) => 5_000,
        (ContainerType::Reefer, ContainerSize::Twenty) => 1_000,
        (ContainerType::Reefer, ContainerSize::Forty) => 500,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityStatus {
    Available,
    High,
    Exceeded,
}

/// Booking level of a container request against vessel capacity.
pub fn capacity_status(
    container_type: ContainerType,
    size: ContainerSize,
    quantity: u32,
) -> CapacityStatus {
    let capacity = container_capacity(container_type, size);
    if quantity > capacity {
        CapacityStatus::Exceeded
    } else if f64::from(quantity) > f64::from(capacity) * CAPACITY_WARNING_RATIO {
        CapacityStatus::High
    } else {
        CapacityStatus::Available
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CargoKind {
    Loose,
    Container,
    Pallet,
}

impl CargoKind {
    /// Cargo kinds a booking form offers for each mode.
    pub fn offered_for(mode: TransportMode) -> &'static [CargoKind] {
        match mode {
            TransportMode::Road => &[CargoKind::Loose, CargoKind::Pallet],
            TransportMode::Sea => &[CargoKind::Loose, CargoKind::Container],
            TransportMode::Air => &[CargoKind::Pallet],
        }
    }
}

/// What is being shipped. Weights in kg, volume in m³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CargoDeclaration {
    Loose {
        net_weight_kg: f64,
        gross_weight_kg: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        volume_m3: Option<f64>,
    },
    Container {
        container_type: ContainerType,
        size_ft: ContainerSize,
        quantity: u32,
    },
    Pallet {
        quantity: u32,
        unit_weight_kg: f64,
    },
}

impl CargoDeclaration {
    pub fn kind(&self) -> CargoKind {
        match self {
            CargoDeclaration::Loose { .. } => CargoKind::Loose,
            CargoDeclaration::Container { .. } => CargoKind::Container,
            CargoDeclaration::Pallet { .. } => CargoKind::Pallet,
        }
    }

    /// Weight used for impact purposes; containers are estimated per TEU.
    pub fn weight_equivalent_kg(&self) -> f64 {
        match self {
            CargoDeclaration::Loose {
                gross_weight_kg, ..
            } => *gross_weight_kg,
            CargoDeclaration::Container {
                size_ft, quantity, ..
            } => f64::from(*quantity) * f64::from(size_ft.teu()) * KG_PER_TEU,
            CargoDeclaration::Pallet {
                quantity,
                unit_weight_kg,
            } => f64::from(*quantity) * unit_weight_kg,
        }
    }

    /// Check field ranges and container capacity.
    pub fn validate(&self) -> Result<(), RouteError> {
        match self {
            CargoDeclaration::Loose {
                net_weight_kg,
                gross_weight_kg,
                volume_m3,
            } => {
                positive("net_weight_kg", *net_weight_kg)?;
                positive("gross_weight_kg", *gross_weight_kg)?;
                if net_weight_kg > gross_weight_kg {
                    return Err(RouteError::invalid(
                        "net_weight_kg",
                        format!(
                            "net weight {net_weight_kg} kg exceeds gross weight \
                             {gross_weight_kg} kg"
                        ),
                    ));
                }
                if let Some(volume) = volume_m3 {
                    positive("volume_m3", *volume)?;
                }
                Ok(())
            }
            CargoDeclaration::Container {
                container_type,
                size_ft,
                quantity,
            } => {
                at_least_one("quantity", *quantity)?;
                let capacity = container_capacity(*container_type, *size_ft);
                if *quantity > capacity {
                    return Err(RouteError::CapacityExceeded {
                        container_type: *container_type,
                        size: *size_ft,
                        requested: *quantity,
                        capacity,
                    });
                }
                Ok(())
            }
            CargoDeclaration::Pallet {
                quantity,
                unit_weight_kg,
            } => {
                at_least_one("quantity", *quantity)?;
                positive("unit_weight_kg", *unit_weight_kg)
            }
        }
    }
}

impl fmt::Display for CargoDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CargoDeclaration::Loose {
                net_weight_kg,
                gross_weight_kg,
                volume_m3,
            } => {
                write!(f, "net {net_weight_kg} kg, gross {gross_weight_kg} kg")?;
                if let Some(volume) = volume_m3 {
                    write!(f, ", volume {volume} m³")?;
                }
                Ok(())
            }
            CargoDeclaration::Container {
                container_type,
                size_ft,
                quantity,
            } => write!(
                f,
                "{}x{}' {} ({} TEU)",
                quantity,
                size_ft.feet(),
                container_type.short_label(),
                u64::from(*quantity) * u64::from(size_ft.teu())
            ),
            CargoDeclaration::Pallet {
                quantity,
                unit_weight_kg,
            } => write!(
                f,
                "{} pallets, {} kg each (total {} kg)",
                quantity,
                unit_weight_kg,
                f64::from(*quantity) * unit_weight_kg
            ),
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), RouteError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RouteError::invalid(field, format!("must be greater than 0, got {value}")))
    }
}

fn at_least_one(field: &'static str, value: u32) -> Result<(), RouteError> {
    if value == 0 {
        Err(RouteError::invalid(field, "must be at least 1"))
    } else {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount_usd: f64,
}

impl LineItem {
    fn new(label: impl Into<String>, amount_usd: f64) -> Self {
        Self {
            label: label.into(),
            amount_usd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingBasis {
    Weight,
    Volume,
}

/// Ocean freight for loose cargo, priced on the stowage factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaritimeFreight {
    pub weight_tons: f64,
    pub volume_m3: f64,
    /// m³ per ton.
    pub stowage_factor: f64,
    pub cost_by_weight: f64,
    pub cost_by_volume: f64,
    pub base_cost: f64,
    pub caf: f64,
    pub baf: f64,
    pub billing_basis: BillingBasis,
    pub total_usd: f64,
}

/// Price loose ocean freight from gross weight (kg) and volume (m³).
pub fn maritime_freight(gross_weight_kg: f64, volume_m3: f64) -> MaritimeFreight {
    let weight_tons = gross_weight_kg / 1000.0;
    let stowage_factor = volume_m3 / weight_tons;
    let cost_by_weight = weight_tons * SEA_FREIGHT_RATE_USD;
    let cost_by_volume = volume_m3 * SEA_FREIGHT_RATE_USD;
    let base_cost = cost_by_weight.max(cost_by_volume);
    let caf = base_cost * CAF_RATE;
    let billing_basis = if stowage_factor > 1.0 {
        BillingBasis::Volume
    } else {
        BillingBasis::Weight
    };
    let billed_units = match billing_basis {
        BillingBasis::Volume => volume_m3,
        BillingBasis::Weight => weight_tons,
    };
    let baf = billed_units * BAF_PER_UNIT_USD;
    MaritimeFreight {
        weight_tons,
        volume_m3,
        stowage_factor,
        cost_by_weight,
        cost_by_volume,
        base_cost,
        caf,
        baf,
        billing_basis,
        total_usd: (base_cost + caf + baf).round(),
    }
}

/// Price, transit time and breakdown of a shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub amount_usd: f64,
    pub eta_days: u32,
    /// Line items summing to `amount_usd`.
    pub breakdown: Vec<LineItem>,
    pub cost_multiplier: f64,
    pub cargo_weight_kg: f64,
    pub cargo_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maritime: Option<MaritimeFreight>,
}

/// Transit days, independent of cargo.
pub fn eta_days(mode: TransportMode) -> u32 {
    (BASE_ETA_DAYS * mode.time_multiplier()).round() as u32
}

/// Estimate the cost of moving `cargo` by `mode`.
pub fn estimate(mode: TransportMode, cargo: &CargoDeclaration) -> Result<CostEstimate, RouteError> {
    cargo.validate()?;

    let multiplier = match cargo {
        CargoDeclaration::Loose {
            gross_weight_kg,
            volume_m3,
            ..
        } if mode == TransportMode::Sea => {
            let volume = volume_m3.ok_or(RouteError::MissingField("volume_m3"))?;
            return Ok(maritime_estimate(cargo, *gross_weight_kg, volume));
        }
        CargoDeclaration::Loose {
            gross_weight_kg, ..
        } => (gross_weight_kg / 1000.0 * LOOSE_TON_FACTOR).max(1.0),
        CargoDeclaration::Container {
            container_type,
            size_ft,
            quantity,
        } => size_ft.cost_factor() * f64::from(*quantity) * container_type.cost_factor(),
        CargoDeclaration::Pallet {
            quantity,
            unit_weight_kg,
        } => (f64::from(*quantity) * unit_weight_kg / 1000.0 * PALLET_TON_FACTOR).max(1.0),
    };

    let base = mode.base_cost_usd();
    let amount = (base * multiplier).round();
    tracing::debug!(%mode, kind = ?cargo.kind(), multiplier, amount, "priced shipment");

    Ok(CostEstimate {
        amount_usd: amount,
        eta_days: eta_days(mode),
        breakdown: vec![
            LineItem::new(format!("Base rate ({mode})"), base),
            LineItem::new(format!("Cargo adjustment (x{multiplier:.2})"), amount - base),
        ],
        cost_multiplier: multiplier,
        cargo_weight_kg: cargo.weight_equivalent_kg(),
        cargo_summary: cargo.to_string(),
        maritime: None,
    })
}

fn maritime_estimate(
    cargo: &CargoDeclaration,
    gross_weight_kg: f64,
    volume_m3: f64,
) -> CostEstimate {
    let freight = maritime_freight(gross_weight_kg, volume_m3);
    let base_label = match freight.billing_basis {
        BillingBasis::Volume => format!(
            "Base freight by volume ({:.2} m³ x ${})",
            freight.volume_m3, SEA_FREIGHT_RATE_USD
        ),
        BillingBasis::Weight => format!(
            "Base freight by weight ({:.2} t x ${})",
            freight.weight_tons, SEA_FREIGHT_RATE_USD
        ),
    };
    let mut breakdown = vec![
        LineItem::new(base_label, freight.base_cost),
        LineItem::new("CAF (20%)", freight.caf),
        LineItem::new("BAF", freight.baf),
    ];
    let rounding = freight.total_usd - (freight.base_cost + freight.caf + freight.baf);
    if rounding != 0.0 {
        breakdown.push(LineItem::new("Rounding", rounding));
    }
    tracing::debug!(
        stowage_factor = freight.stowage_factor,
        total = freight.total_usd,
        "priced ocean freight"
    );

    CostEstimate {
        amount_usd: freight.total_usd,
        eta_days: eta_days(TransportMode::Sea),
        breakdown,
        cost_multiplier: 1.0,
        cargo_weight_kg: cargo.weight_equivalent_kg(),
        cargo_summary: cargo.to_string(),
        maritime: Some(freight),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loose(net: f64, gross: f64, volume: Option<f64>) -> CargoDeclaration {
        CargoDeclaration::Loose {
            net_weight_kg: net,
            gross_weight_kg: gross,
            volume_m3: volume,
        }
    }

    #[test]
    fn sea_loose_cargo_uses_stowage_factor() {
        let estimate = estimate(TransportMode::Sea, &loose(4000.0, 5000.0, Some(10.0))).unwrap();
        let freight = estimate.maritime.unwrap();
        assert_eq!(freight.stowage_factor, 2.0);
        assert_eq!(freight.cost_by_weight, 400.0);
        assert_eq!(freight.cost_by_volume, 800.0);
        assert_eq!(freight.base_cost, 800.0);
        assert_eq!(freight.caf, 160.0);
        assert_eq!(freight.baf, 100.0);
        assert_eq!(freight.billing_basis, BillingBasis::Volume);
        assert_eq!(estimate.amount_usd, 1060.0);
        assert_eq!(estimate.eta_days, 15);
        assert_eq!(estimate.breakdown.len(), 3);
        assert_eq!(estimate.breakdown[1].label, "CAF (20%)");
    }

    #[test]
    fn maritime_breakdown_includes_rounding() {
        // 1.234 t in 0.5 m³: 98.72 + 19.744 + 12.34 = 130.804, billed 131
        let estimate = estimate(TransportMode::Sea, &loose(1000.0, 1234.0, Some(0.5))).unwrap();
        assert_eq!(estimate.amount_usd, 131.0);
        assert_eq!(estimate.breakdown.len(), 4);
        assert_eq!(estimate.breakdown[3].label, "Rounding");
        let sum: f64 = estimate.breakdown.iter().map(|item| item.amount_usd).sum();
        assert!((sum - estimate.amount_usd).abs() < 1e-9);
    }

    #[test]
    fn dense_sea_cargo_is_billed_by_weight() {
        // 20 t in 8 m³: FE 0.4
        let freight = maritime_freight(20_000.0, 8.0);
        assert_eq!(freight.billing_basis, BillingBasis::Weight);
        assert_eq!(freight.base_cost, 1600.0);
        assert_eq!(freight.baf, 200.0);
        assert_eq!(freight.total_usd, 1600.0 + 320.0 + 200.0);
    }

    #[test]
    fn sea_loose_cargo_requires_volume() {
        let err = estimate(TransportMode::Sea, &loose(900.0, 1000.0, None)).unwrap_err();
        assert_eq!(err, RouteError::MissingField("volume_m3"));
        // Volume is not needed off the water.
        assert!(estimate(TransportMode::Road, &loose(900.0, 1000.0, None)).is_ok());
    }

    #[test]
    fn loose_cargo_multiplier_has_floor() {
        let light = estimate(TransportMode::Road, &loose(500.0, 1000.0, None)).unwrap();
        assert_eq!(light.cost_multiplier, 1.0);
        assert_eq!(light.amount_usd, 2000.0);

        let heavy = estimate(TransportMode::Air, &loose(4000.0, 5000.0, None)).unwrap();
        assert_eq!(heavy.cost_multiplier, 4.0);
        assert_eq!(heavy.amount_usd, 48_000.0);
        assert_eq!(heavy.eta_days, 3);
        let sum: f64 = heavy.breakdown.iter().map(|item| item.amount_usd).sum();
        assert_eq!(sum, heavy.amount_usd);
    }

    #[test]
    fn net_above_gross_is_invalid() {
        let err = estimate(TransportMode::Road, &loose(1200.0, 1000.0, None)).unwrap_err();
        assert!(matches!(err, RouteError::InvalidRange { field: "net_weight_kg", .. }));
    }

    #[test]
    fn non_positive_fields_are_invalid() {
        assert!(matches!(
            estimate(TransportMode::Road, &loose(0.0, 1000.0, None)),
            Err(RouteError::InvalidRange { field: "net_weight_kg", .. })
        ));
        assert!(matches!(
            estimate(TransportMode::Sea, &loose(10.0, 1000.0, Some(-1.0))),
            Err(RouteError::InvalidRange { field: "volume_m3", .. })
        ));
        let pallets = CargoDeclaration::Pallet {
            quantity: 0,
            unit_weight_kg: 100.0,
        };
        assert!(matches!(
            estimate(TransportMode::Air, &pallets),
            Err(RouteError::InvalidRange { field: "quantity", .. })
        ));
    }

    #[test]
    fn container_over_capacity_fails() {
        let cargo = CargoDeclaration::Container {
            container_type: ContainerType::Dryvan,
            size_ft: ContainerSize::Twenty,
            quantity: 10_001,
        };
        assert_eq!(
            estimate(TransportMode::Sea, &cargo).unwrap_err(),
            RouteError::CapacityExceeded {
                container_type: ContainerType::Dryvan,
                size: ContainerSize::Twenty,
                requested: 10_001,
                capacity: 10_000,
            }
        );

        let reefers = CargoDeclaration::Container {
            container_type: ContainerType::Reefer,
            size_ft: ContainerSize::Forty,
            quantity: 501,
        };
        assert!(matches!(
            estimate(TransportMode::Sea, &reefers),
            Err(RouteError::CapacityExceeded { capacity: 500, .. })
        ));
    }

    #[test]
    fn container_cost_and_teu() {
        let cargo = CargoDeclaration::Container {
            container_type: ContainerType::Highcube,
            size_ft: ContainerSize::Forty,
            quantity: 10,
        };
        let estimate = estimate(TransportMode::Sea, &cargo).unwrap();
        assert!((estimate.cost_multiplier - 1.8 * 10.0 * 1.4).abs() < 1e-9);
        assert_eq!(estimate.amount_usd, (8000.0 * 1.8 * 10.0 * 1.4_f64).round());
        assert_eq!(estimate.cargo_weight_kg, 20.0 * 12_000.0);
        assert_eq!(estimate.cargo_summary, "10x40' HQ (20 TEU)");
    }

    #[test]
    fn unvalidated_container_counts_do_not_overflow() {
        let cargo = CargoDeclaration::Container {
            container_type: ContainerType::Dryvan,
            size_ft: ContainerSize::Forty,
            quantity: 3_000_000_000,
        };
        assert_eq!(cargo.weight_equivalent_kg(), 6_000_000_000.0 * 12_000.0);
        assert_eq!(cargo.to_string(), "3000000000x40' DC/GP (6000000000 TEU)");
        assert!(matches!(
            cargo.validate(),
            Err(RouteError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn pallet_cost_scales_with_total_weight() {
        let cargo = CargoDeclaration::Pallet {
            quantity: 20,
            unit_weight_kg: 500.0,
        };
        let estimate = estimate(TransportMode::Air, &cargo).unwrap();
        assert_eq!(estimate.cargo_weight_kg, 10_000.0);
        assert!((estimate.cost_multiplier - 6.0).abs() < 1e-9);
        assert_eq!(estimate.amount_usd, 72_000.0);
    }

    #[test]
    fn eta_is_mode_based() {
        assert_eq!(eta_days(TransportMode::Road), 10);
        assert_eq!(eta_days(TransportMode::Sea), 15);
        assert_eq!(eta_days(TransportMode::Air), 3);
    }

    #[test]
    fn capacity_status_levels() {
        let reefer_20 =
            |quantity| capacity_status(ContainerType::Reefer, ContainerSize::Twenty, quantity);
        assert_eq!(reefer_20(800), CapacityStatus::Available);
        assert_eq!(reefer_20(801), CapacityStatus::High);
        assert_eq!(reefer_20(1001), CapacityStatus::Exceeded);
        assert_eq!(container_capacity(ContainerType::Highcube, ContainerSize::Forty), 5_000);
    }

    #[test]
    fn cargo_json_is_tagged_by_kind() {
        let cargo: CargoDeclaration = serde_json::from_str(
            r#"{"kind": "container", "container_type": "reefer", "size_ft": 40, "quantity": 3}"#,
        )
        .unwrap();
        assert_eq!(
            cargo,
            CargoDeclaration::Container {
                container_type: ContainerType::Reefer,
                size_ft: ContainerSize::Forty,
                quantity: 3,
            }
        );
        assert!(serde_json::from_str::<CargoDeclaration>(
            r#"{"kind": "container", "container_type": "reefer", "size_ft": 30, "quantity": 3}"#
        )
        .is_err());
    }

    #[test]
    fn container_type_json_accepts_short_labels() {
        for (label, expected) in [
            ("hq", ContainerType::Highcube),
            ("dc", ContainerType::Dryvan),
            ("dry_van", ContainerType::Dryvan),
            ("RF", ContainerType::Reefer),
        ] {
            let parsed: ContainerType = serde_json::from_value(serde_json::json!(label)).unwrap();
            assert_eq!(parsed, expected, "{label}");
            assert_eq!(label.parse::<ContainerType>().unwrap(), expected);
        }
        assert_eq!(
            serde_json::to_value(ContainerType::Highcube).unwrap(),
            serde_json::json!("highcube")
        );
        assert!(serde_json::from_value::<ContainerType>(serde_json::json!("tank")).is_err());
    }

    #[test]
    fn offered_cargo_kinds_per_mode() {
        assert_eq!(CargoKind::offered_for(TransportMode::Air), &[CargoKind::Pallet]);
        assert!(CargoKind::offered_for(TransportMode::Sea).contains(&CargoKind::Container));
        assert!(!CargoKind::offered_for(TransportMode::Road).contains(&CargoKind::Container));
    }
}
