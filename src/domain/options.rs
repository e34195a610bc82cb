//! Closed option catalogs offered by the intake form.
//!
//! The display layer only ever presents these fixed labels, so each catalog
//! is a real enum rather than a free string. Labels are reproduced verbatim
//! because downstream consumers bind to them.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// A label that does not belong to the catalog it was offered to.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {catalog} label: {label}")]
pub struct UnknownLabel {
    pub catalog: &'static str,
    pub label: String,
}

/// Macro to generate a catalog enum with verbatim labels, strict parsing,
/// and serde via the label string.
macro_rules! option_catalog {
    ($name:ident, $catalog:expr, $doc:expr, { $($variant:ident => $label:expr),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every catalog entry in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// The verbatim label shown to and accepted from the display layer.
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(UnknownLabel {
                        catalog: $catalog,
                        label: s.to_string(),
                    }),
                }
            }
        }

        impl TryFrom<&str> for $name {
            type Error = UnknownLabel;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                label.parse().map_err(de::Error::custom)
            }
        }
    };
}

option_catalog!(
    OrganizationType,
    "organization type",
    "Category of the requesting organization.",
    {
        OilMarketingCompany => "Oil Marketing Company (OMC)",
        OilAndGasIndustry => "Oil & Gas Industry",
        IndustrialClient => "Industrial Client",
        InfrastructureEpc => "Infrastructure / EPC",
        PetrolPumpRetailOutlet => "Petrol Pump / Retail Outlet",
        PsuGovernment => "PSU / Government",
        PrivateEnterprise => "Private Enterprise",
        Other => "Other",
    }
);

option_catalog!(
    ServiceOption,
    "service",
    "Service line a client can request in the project scope section.",
    {
        TankCleaning => "HSD / MS / Oil Tank Cleaning (UG / AG)",
        MechanicalWorks => "Mechanical Works",
        ElectricalWorks => "Electrical Works",
        PipelineInstallation => "Pipeline Installation (Hydrant / HSD / Gas)",
        GantryCraneCalibration => "Gantry Crane Calibration",
        UndergroundTankEvacuation => "Underground Tank Evacuation",
        PetrolStationOm => "O&M for Petrol Stations",
        GantryDistributionMaintenance => "Gantry & Distribution Unit Maintenance",
        PlantInstallation => "RO / STP / HSD Plant Installation",
        TenderEpcExecution => "Tender / EPC Execution",
        Other => "Other",
    }
);

option_catalog!(
    OperationalState,
    "operational state",
    "State or region where the requested work will be carried out.",
    {
        AndhraPradesh => "Andhra Pradesh",
        ArunachalPradesh => "Arunachal Pradesh",
        Assam => "Assam",
        Bihar => "Bihar",
        Chhattisgarh => "Chhattisgarh",
        Goa => "Goa",
        Gujarat => "Gujarat",
        Haryana => "Haryana",
        HimachalPradesh => "Himachal Pradesh",
        Jharkhand => "Jharkhand",
        Karnataka => "Karnataka",
        Kerala => "Kerala",
        MadhyaPradesh => "Madhya Pradesh",
        Maharashtra => "Maharashtra",
        Manipur => "Manipur",
        Meghalaya => "Meghalaya",
        Mizoram => "Mizoram",
        Nagaland => "Nagaland",
        Odisha => "Odisha",
        Punjab => "Punjab",
        Rajasthan => "Rajasthan",
        Sikkim => "Sikkim",
        TamilNadu => "Tamil Nadu",
        Telangana => "Telangana",
        Tripura => "Tripura",
        UttarPradesh => "Uttar Pradesh",
        Uttarakhand => "Uttarakhand",
        WestBengal => "West Bengal",
        DelhiNcr => "Delhi/NCR",
        JammuKashmir => "Jammu & Kashmir",
        Ladakh => "Ladakh",
        Puducherry => "Puducherry",
    }
);

option_catalog!(
    HsseTraining,
    "HSSE training choice",
    "Whether HSSE site training is required for the project.",
    {
        Yes => "Yes",
        No => "No",
    }
);
