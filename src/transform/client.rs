use serde::Serialize;

use super::rules::{binary_flag, normalize_education, normalize_job};
use crate::error::SchemaError;
use crate::table::{Cell, UnifiedTable};
use crate::write::OutputRecord;

/// Client demographics, one per contact event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRecord {
    pub client_id: Cell,
    pub age: Cell,
    pub job: Cell,
    pub marital: Cell,
    pub education: Cell,
    pub credit_default: u8,
    pub mortgage: u8,
}

impl OutputRecord for ClientRecord {
    const TABLE: &'static str = "client";
    const HEADERS: &'static [&'static str] = &[
        "client_id",
        "age",
        "job",
        "marital",
        "education",
        "credit_default",
        "mortgage",
    ];
}

pub fn transform_clients(table: &UnifiedTable) -> Result<Vec<ClientRecord>, SchemaError> {
    let [client_id, age, job, marital, education, credit_default, mortgage] = table.require(
        ClientRecord::TABLE,
        [
            "client_id",
            "age",
            "job",
            "marital",
            "education",
            "credit_default",
            "mortgage",
        ],
    )?;

    Ok(table
        .rows
        .iter()
        .map(|row| ClientRecord {
            client_id: row[client_id].clone(),
            age: row[age].clone(),
            job: row[job].as_deref().map(normalize_job),
            marital: row[marital].clone(),
            education: row[education].as_deref().and_then(normalize_education),
            credit_default: binary_flag(row[credit_default].as_deref(), "yes"),
            mortgage: binary_flag(row[mortgage].as_deref(), "yes"),
        })
        .collect())
}
