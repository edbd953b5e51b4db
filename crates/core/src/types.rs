/// Record identifiers are opaque strings (`proj-001`, `tender-005`, ...).
pub type EntityId = String;

/// Monetary amounts. All records share one currency unit.
pub type Amount = f64;

/// Alert timestamps carry no zone and are compared as written.
pub type Timestamp = chrono::NaiveDateTime;
