use serde::Serialize;

use crate::error::SchemaError;
use crate::table::{Cell, UnifiedTable};
use crate::write::OutputRecord;

/// Macroeconomic indicators at contact time, copied verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EconomicsRecord {
    pub client_id: Cell,
    pub cons_price_idx: Cell,
    pub euribor_three_months: Cell,
}

impl OutputRecord for EconomicsRecord {
    const TABLE: &'static str = "economics";
    const HEADERS: &'static [&'static str] =
        &["client_id", "cons_price_idx", "euribor_three_months"];
}

pub fn transform_economics(table: &UnifiedTable) -> Result<Vec<EconomicsRecord>, SchemaError> {
    let [client_id, cons_price_idx, euribor] = table.require(
        EconomicsRecord::TABLE,
        ["client_id", "cons_price_idx", "euribor_three_months"],
    )?;

    Ok(table
        .rows
        .iter()
        .map(|row| EconomicsRecord {
            client_id: row[client_id].clone(),
            cons_price_idx: row[cons_price_idx].clone(),
            euribor_three_months: row[euribor].clone(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_values_verbatim() {
        let table = UnifiedTable {
            headers: vec![
                "euribor_three_months".into(),
                "age".into(),
                "cons_price_idx".into(),
                "client_id".into(),
            ],
            rows: vec![
                vec![Some("4.857".into()), Some("56".into()), Some("93.994".into()), Some("0".into())],
                vec![Some("1.0".into()), Some("41".into()), Some("94.46500".into()), Some("1".into())],
                vec![None, Some("33".into()), Some("92.2".into()), Some("2".into())],
            ],
        };

        let out = transform_economics(&table).unwrap();

        assert_eq!(out.len(), 3);
        assert_eq!(out[0].cons_price_idx.as_deref(), Some("93.994"));
        assert_eq!(out[0].euribor_three_months.as_deref(), Some("4.857"));
        assert_eq!(out[1].cons_price_idx.as_deref(), Some("94.46500"));
        assert_eq!(out[1].euribor_three_months.as_deref(), Some("1.0"));
        assert_eq!(out[2].euribor_three_months, None);
        assert_eq!(out[2].client_id.as_deref(), Some("2"));
    }

    #[test]
    fn columnless_table_fails_on_client_id() {
        let err = transform_economics(&UnifiedTable::default()).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingColumn {
                table: "economics",
                column: "client_id".into()
            }
        );
    }
}
