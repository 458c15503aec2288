use serde::Serialize;

use super::rules::{binary_flag, contact_date};
use crate::error::SchemaError;
use crate::table::{Cell, UnifiedTable};
use crate::write::OutputRecord;

/// Campaign interaction facts. `month` and `day` only feed `last_contact_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignRecord {
    pub client_id: Cell,
    pub number_contacts: Cell,
    pub contact_duration: Cell,
    pub previous_campaign_contacts: Cell,
    pub previous_outcome: u8,
    pub campaign_outcome: u8,
    pub last_contact_date: String,
}

impl OutputRecord for CampaignRecord {
    const TABLE: &'static str = "campaign";
    const HEADERS: &'static [&'static str] = &[
        "client_id",
        "number_contacts",
        "contact_duration",
        "previous_campaign_contacts",
        "previous_outcome",
        "campaign_outcome",
        "last_contact_date",
    ];
}

pub fn transform_campaigns(table: &UnifiedTable) -> Result<Vec<CampaignRecord>, SchemaError> {
    let [client_id, number_contacts, contact_duration, previous_contacts, previous_outcome, campaign_outcome, month, day] =
        table.require(
            CampaignRecord::TABLE,
            [
                "client_id",
                "number_contacts",
                "contact_duration",
                "previous_campaign_contacts",
                "previous_outcome",
                "campaign_outcome",
                "month",
                "day",
            ],
        )?;

    Ok(table
        .rows
        .iter()
        .map(|row| CampaignRecord {
            client_id: row[client_id].clone(),
            number_contacts: row[number_contacts].clone(),
            contact_duration: row[contact_duration].clone(),
            previous_campaign_contacts: row[previous_contacts].clone(),
            previous_outcome: binary_flag(row[previous_outcome].as_deref(), "success"),
            campaign_outcome: binary_flag(row[campaign_outcome].as_deref(), "yes"),
            last_contact_date: contact_date(row[month].as_deref(), row[day].as_deref()),
        })
        .collect())
}
