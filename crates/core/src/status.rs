//! Closed enumerations for record status and category fields.
//!
//! Every enum is declared through [`define_str_enum!`] so the wire value,
//! the display label, and the parse/format helpers stay in one place.
//! Parsing rejects unmapped values; callers that need a fallback (color
//! mapping, list filters) handle the `Err` branch themselves.

use crate::error::CoreError;

macro_rules! define_str_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($entity:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => ($value:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $value)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The string value used in seed data and on the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $value ),+
                }
            }

            /// Capitalised label for display.
            pub fn label(self) -> &'static str {
                match self {
                    $( $name::$variant => $label ),+
                }
            }

            /// Convert from a string value.
            pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
                match s {
                    $( $value => Ok($name::$variant), )+
                    _ => Err(CoreError::Validation(format!(
                        "Invalid {} '{s}'. Must be one of: {}",
                        $entity,
                        [$( $value ),+].join(", ")
                    ))),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_str_value(s)
            }
        }
    };
}

define_str_enum! {
    /// Project lifecycle status.
    ProjectStatus ("project status") {
        Planning => ("planning", "Planning"),
        Active => ("active", "Active"),
        Completed => ("completed", "Completed"),
        Delayed => ("delayed", "Delayed"),
    }
}

define_str_enum! {
    /// Milestone status.
    MilestoneStatus ("milestone status") {
        Pending => ("pending", "Pending"),
        Completed => ("completed", "Completed"),
        Delayed => ("delayed", "Delayed"),
    }
}

define_str_enum! {
    /// What an alert is about.
    AlertType ("alert type") {
        Delay => ("delay", "Delay"),
        Budget => ("budget", "Budget"),
        General => ("general", "General"),
    }
}

define_str_enum! {
    /// Alert severity.
    AlertSeverity ("alert severity") {
        Low => ("low", "Low"),
        Medium => ("medium", "Medium"),
        High => ("high", "High"),
    }
}

define_str_enum! {
    /// Tender lifecycle status. `Published` tenders are open for bidding.
    TenderStatus ("tender status") {
        Draft => ("draft", "Draft"),
        Published => ("published", "Open"),
        Closed => ("closed", "Closed"),
        Awarded => ("awarded", "Awarded"),
    }
}

define_str_enum! {
    /// Review status of a submitted bid.
    BidStatus ("bid status") {
        Submitted => ("submitted", "Submitted"),
        UnderReview => ("under-review", "Under Review"),
        Accepted => ("accepted", "Accepted"),
        Rejected => ("rejected", "Rejected"),
    }
}

impl TenderStatus {
    /// Longer label used on the tender detail view.
    pub fn detail_label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Published => "Open for Bidding",
            Self::Closed => "Closed",
            Self::Awarded => "Awarded",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
