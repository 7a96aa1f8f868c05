//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name                        | Description                                 | Key Methods |
// |-----------------------------|---------------------------------------------|-------------|
// | UuidOrderIdGenerator        | Random UUID v4 identifiers                  | next_id     |
// | SequentialOrderIdGenerator  | Monotonic ORD-00000001 style identifiers    | next_id     |
//--------------------------------------------------------------------------------------------------

use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::types::OrderId;

/// Source of identifiers for accepted orders.
///
/// Every call must return a value never returned before by the same generator.
pub trait OrderIdGenerator: Send + Sync {
    fn next_id(&self) -> OrderId;
}

/// Generates random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidOrderIdGenerator;

impl OrderIdGenerator for UuidOrderIdGenerator {
    fn next_id(&self) -> OrderId {
        OrderId::new(Uuid::new_v4().to_string())
    }
}

/// Generates `ORD-<n>` identifiers from an in-memory counter starting at 1.
///
/// The counter is not persisted, so identifiers are only unique per process.
#[derive(Debug)]
pub struct SequentialOrderIdGenerator {
    next: AtomicU64,
}

impl SequentialOrderIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialOrderIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderIdGenerator for SequentialOrderIdGenerator {
    fn next_id(&self) -> OrderId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        OrderId::new(format!("ORD-{:08}", n))
    }
}

/// Which generator the service is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Sequential,
}

impl IdStrategy {
    pub fn build(self) -> Box<dyn OrderIdGenerator> {
        match self {
            Self::Uuid => Box::new(UuidOrderIdGenerator),
            Self::Sequential => Box::new(SequentialOrderIdGenerator::new()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uuid" => Ok(Self::Uuid),
            "sequential" => Ok(Self::Sequential),
            other => Err(format!(
                "unknown order id strategy '{}', expected 'uuid' or 'sequential'",
                other
            )),
        }
    }
}
