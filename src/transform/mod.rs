// src/transform/mod.rs
pub mod campaign;
pub mod client;
pub mod economics;
pub mod rules;

pub use campaign::{transform_campaigns, CampaignRecord};
pub use client::{transform_clients, ClientRecord};
pub use economics::{transform_economics, EconomicsRecord};

use crate::error::SchemaError;
use crate::table::UnifiedTable;

/// The three output views of one unified table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTables {
    pub clients: Vec<ClientRecord>,
    pub campaigns: Vec<CampaignRecord>,
    pub economics: Vec<EconomicsRecord>,
}

/// Run all three transformers over `table`. They only read the table, so they are
/// fanned out on the rayon pool. Errors are reported client, campaign, economics.
pub fn split(table: &UnifiedTable) -> Result<SplitTables, SchemaError> {
    let (clients, (campaigns, economics)) = rayon::join(
        || transform_clients(table),
        || {
            rayon::join(
                || transform_campaigns(table),
                || transform_economics(table),
            )
        },
    );

    Ok(SplitTables {
        clients: clients?,
        campaigns: campaigns?,
        economics: economics?,
    })
}
