//! Per-column repair rules, period filtering, and canonical projection.
//!
//! Rules run in a fixed order and every rule is a no-op when its target
//! column is absent; a vendor file missing a column never fails mid-repair.

use chrono::Datelike;
use tracing::{debug, info, warn};

use sellout_ingest::{format_report_date, parse_report_date_strict};
use sellout_model::{
    Batch, CANONICAL_COLUMNS, MissingColumnPolicy, Period, Result, SelloutError, columns,
};

use crate::coerce::{coerce_code, coerce_count};

/// Retailer label corrections, applied as substring replacements.
///
/// Substring on purpose: "Rede SAMS" must still become "Rede Sams Club".
const RETAILER_REWRITES: [(&str, &str); 3] = [
    ("Amigao", "Amigão"),
    ("Apoio Entrega", "Apoio Mineiro"),
    ("SAMS", "Sams Club"),
];

/// Applies the full repair-filter-project sequence for one period.
///
/// # Errors
///
/// Fails with [`SelloutError::MissingColumns`] when canonical columns are
/// absent and the policy is [`MissingColumnPolicy::Reject`].
pub fn normalize(mut batch: Batch, period: Period, policy: MissingColumnPolicy) -> Result<Batch> {
    canonicalize_retailers(&mut batch);
    coerce_product_codes(&mut batch)?;
    coerce_counts(&mut batch)?;
    coerce_store_codes(&mut batch)?;
    apply_renames(&mut batch);
    resolve_missing_columns(&mut batch, policy)?;
    filter_to_period(&mut batch, period);
    batch.select(&CANONICAL_COLUMNS)
}

/// Rewrites known retailer label variants in `Varejista`.
pub fn canonicalize_retailers(batch: &mut Batch) {
    batch.map_column(columns::VAREJISTA, |value| {
        let mut fixed = value.to_string();
        for (from, to) in RETAILER_REWRITES {
            fixed = fixed.replace(from, to);
        }
        fixed
    });
}

/// Coerces `EAN` to integer text; `#N/D`, blanks, and garbage become `0`.
pub fn coerce_product_codes(batch: &mut Batch) -> Result<()> {
    let Some(values) = batch.column_values(columns::EAN) else {
        return Ok(());
    };
    let coerced = values.iter().map(|v| coerce_code(v).to_string()).collect();
    batch.set_column(columns::EAN, coerced)
}

/// Coerces `Quantidade` and `Pedidos` from locale decimals to integers.
pub fn coerce_counts(batch: &mut Batch) -> Result<()> {
    for name in [columns::QUANTIDADE, columns::PEDIDOS] {
        let Some(values) = batch.column_values(name) else {
            continue;
        };
        let coerced = values.iter().map(|v| coerce_count(v).to_string()).collect();
        batch.set_column(name, coerced)?;
    }
    Ok(())
}

/// Coerces `Cod_loja` to integer text, blanks becoming `0`.
pub fn coerce_store_codes(batch: &mut Batch) -> Result<()> {
    let Some(values) = batch.column_values(columns::COD_LOJA) else {
        return Ok(());
    };
    let coerced = values.iter().map(|v| coerce_code(v).to_string()).collect();
    batch.set_column(columns::COD_LOJA, coerced)
}

/// ASCII-safe identifier renames for downstream consumers.
pub fn apply_renames(batch: &mut Batch) {
    batch.rename_column(columns::CANAL_DE_VENDA_RAW, columns::CANAL_DE_VENDA);
    batch.rename_column(columns::DESCRICAO_RAW, columns::DESCRICAO);
}

/// Warns about absent canonical columns and resolves them per the policy.
fn resolve_missing_columns(batch: &mut Batch, policy: MissingColumnPolicy) -> Result<()> {
    let missing: Vec<String> = CANONICAL_COLUMNS
        .iter()
        .filter(|name| !batch.has_column(name))
        .map(|name| (*name).to_string())
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    for name in &missing {
        warn!(column = %name, "canonical column missing from input");
    }
    match policy {
        MissingColumnPolicy::Reject => Err(SelloutError::MissingColumns { columns: missing }),
        MissingColumnPolicy::FillEmpty => {
            for name in &missing {
                batch.add_empty_column(name);
            }
            Ok(())
        }
    }
}

/// Keeps only rows whose `Data` falls in the period, rewriting survivors
/// in the reporting format.
///
/// Policy: invalid dates are excluded from the period filter. Rows whose
/// `Data` does not parse are dropped, counted, and never treated as errors.
pub fn filter_to_period(batch: &mut Batch, period: Period) {
    let Some(idx) = batch.column_index(columns::DATA) else {
        return;
    };
    let before = batch.height();
    let mut invalid = 0usize;
    batch.retain_rows(|row| match parse_report_date_strict(&row[idx]) {
        Some(date) => date.month() == period.month() && date.year() == period.year(),
        None => {
            invalid += 1;
            false
        }
    });
    batch.map_column(columns::DATA, |value| {
        parse_report_date_strict(value)
            .map(format_report_date)
            .unwrap_or_else(|| value.to_string())
    });
    info!(
        period = %period,
        rows_in = before,
        rows_kept = batch.height(),
        invalid_dates = invalid,
        "period filter applied"
    );
    if invalid > 0 {
        debug!(invalid_dates = invalid, "rows with unparseable dates excluded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::coerce::NA_TOKEN;

    fn batch(columns: &[&str], rows: &[&[&str]]) -> Batch {
        let mut b = Batch::new(columns.iter().map(|c| (*c).to_string()).collect());
        for row in rows {
            b.push_row(row.iter().map(|v| (*v).to_string()).collect());
        }
        b
    }

    fn full_batch(rows: &[&[&str]]) -> Batch {
        batch(
            &[
                "Data",
                "Varejista",
                "Canal_de_Venda",
                "EAN",
                "Descricao",
                "Receita",
                "Quantidade",
                "Pedidos",
                "UF",
                "Cidade",
                "Cod_loja",
                "Loja",
            ],
            rows,
        )
    }

    fn period() -> Period {
        Period::new(10, 2024).unwrap()
    }

    #[test]
    fn retailer_rewrites_are_substring_replacements() {
        let mut b = batch(
            &["Varejista"],
            &[
                &["Amigao Supermercados"],
                &["Rede SAMS"],
                &["Apoio Entrega"],
                &["Carrefour"],
            ],
        );
        canonicalize_retailers(&mut b);
        assert_eq!(
            b.column_values("Varejista").unwrap(),
            vec![
                "Amigão Supermercados",
                "Rede Sams Club",
                "Apoio Mineiro",
                "Carrefour"
            ]
        );
    }

    #[test]
    fn ean_error_token_becomes_zero() {
        let mut b = batch(&["EAN"], &[&[NA_TOKEN], &[""], &["789"], &["junk"]]);
        coerce_product_codes(&mut b).unwrap();
        assert_eq!(
            b.column_values("EAN").unwrap(),
            vec!["0", "0", "789", "0"]
        );
    }

    #[test]
    fn counts_truncate_locale_decimals() {
        let mut b = batch(
            &["Quantidade", "Pedidos"],
            &[&["12,5", "3"], &["junk", "1,9"]],
        );
        coerce_counts(&mut b).unwrap();
        assert_eq!(b.column_values("Quantidade").unwrap(), vec!["12", "0"]);
        assert_eq!(b.column_values("Pedidos").unwrap(), vec!["3", "1"]);
    }

    #[test]
    fn store_codes_default_to_zero() {
        let mut b = batch(&["Cod_loja"], &[&[""], &["42"]]);
        coerce_store_codes(&mut b).unwrap();
        assert_eq!(b.column_values("Cod_loja").unwrap(), vec!["0", "42"]);
    }

    #[test]
    fn rules_are_noops_for_absent_columns() {
        let mut b = batch(&["Receita"], &[&["10"]]);
        let before = b.clone();
        canonicalize_retailers(&mut b);
        coerce_product_codes(&mut b).unwrap();
        coerce_counts(&mut b).unwrap();
        coerce_store_codes(&mut b).unwrap();
        apply_renames(&mut b);
        assert_eq!(b, before);
    }

    #[test]
    fn period_filter_drops_other_months_and_invalid_dates() {
        let mut b = batch(
            &["Data"],
            &[
                &["05/10/2024"],
                &["05/09/2024"],
                &["05/10/2023"],
                &["bogus"],
                &[""],
            ],
        );
        filter_to_period(&mut b, period());
        assert_eq!(b.column_values("Data").unwrap(), vec!["05/10/2024"]);
    }

    #[test]
    fn normalize_projects_onto_canonical_schema_in_order() {
        let rows = full_batch(&[&[
            "05/10/2024",
            "Amigao",
            "App",
            "#N/D",
            "Detergente",
            "10,5",
            "2,0",
            "1",
            "MG",
            "BH",
            "",
            "Loja 1",
        ]]);
        let out = normalize(rows, period(), MissingColumnPolicy::FillEmpty).unwrap();
        assert_eq!(out.columns(), &CANONICAL_COLUMNS);
        assert_eq!(
            out.rows()[0],
            vec![
                "05/10/2024",
                "Amigão",
                "App",
                "0",
                "Detergente",
                "10,5",
                "2",
                "1",
                "MG",
                "BH",
                "0",
                "Loja 1"
            ]
        );
    }

    #[test]
    fn rename_rule_populates_canonical_channel_column() {
        let b = batch(
            &["Data", "Canal de Venda", "Descrição"],
            &[&["05/10/2024", "Site", "Sabao"]],
        );
        let out = normalize(b, period(), MissingColumnPolicy::FillEmpty).unwrap();
        assert_eq!(
            out.column_values("Canal_de_Venda").unwrap(),
            vec!["Site"]
        );
        assert_eq!(out.column_values("Descricao").unwrap(), vec!["Sabao"]);
    }

    #[test]
    fn fill_empty_synthesizes_missing_canonical_columns() {
        let b = batch(&["Data", "EAN"], &[&["05/10/2024", "789"]]);
        let out = normalize(b, period(), MissingColumnPolicy::FillEmpty).unwrap();
        assert_eq!(out.columns(), &CANONICAL_COLUMNS);
        assert_eq!(out.column_values("Varejista").unwrap(), vec![""]);
        assert_eq!(out.column_values("EAN").unwrap(), vec!["789"]);
    }

    #[test]
    fn reject_policy_names_every_missing_column() {
        let b = batch(&["Data", "EAN"], &[&["05/10/2024", "789"]]);
        let err = normalize(b, period(), MissingColumnPolicy::Reject).unwrap_err();
        match err {
            SelloutError::MissingColumns { columns } => {
                assert_eq!(columns.len(), 10);
                assert!(columns.contains(&"Varejista".to_string()));
                assert!(!columns.contains(&"Data".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
