//! The canonical output contract and column name constants.

/// Column names as they appear in source files and in the compiled output.
pub mod columns {
    /// Raw date column some vendors ship (parsed into [`DATA`]).
    pub const DATA_RAW: &str = "DATA";
    /// Normalized sale date, `DD/MM/YYYY`.
    pub const DATA: &str = "Data";
    /// Retailer name.
    pub const VAREJISTA: &str = "Varejista";
    /// Sales channel, post-rename.
    pub const CANAL_DE_VENDA: &str = "Canal_de_Venda";
    /// Sales channel as some vendors ship it.
    pub const CANAL_DE_VENDA_RAW: &str = "Canal de Venda";
    /// Product barcode.
    pub const EAN: &str = "EAN";
    /// Product description, post-rename.
    pub const DESCRICAO: &str = "Descricao";
    /// Product description as some vendors ship it.
    pub const DESCRICAO_RAW: &str = "Descrição";
    /// Revenue.
    pub const RECEITA: &str = "Receita";
    /// Units sold.
    pub const QUANTIDADE: &str = "Quantidade";
    /// Order count.
    pub const PEDIDOS: &str = "Pedidos";
    /// State code.
    pub const UF: &str = "UF";
    /// City.
    pub const CIDADE: &str = "Cidade";
    /// Store code.
    pub const COD_LOJA: &str = "Cod_loja";
    /// Store name.
    pub const LOJA: &str = "Loja";
}

/// The fixed, ordered 12-column output contract.
///
/// Every published batch has exactly these columns, in this order,
/// regardless of what any individual input file carried.
pub const CANONICAL_COLUMNS: [&str; 12] = [
    columns::DATA,
    columns::VAREJISTA,
    columns::CANAL_DE_VENDA,
    columns::EAN,
    columns::DESCRICAO,
    columns::RECEITA,
    columns::QUANTIDADE,
    columns::PEDIDOS,
    columns::UF,
    columns::CIDADE,
    columns::COD_LOJA,
    columns::LOJA,
];

/// What to do when a canonical column is absent at projection time.
///
/// The source system logged the absence as advisory and then failed on the
/// projection lookup anyway; here the behavior is an explicit choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingColumnPolicy {
    /// Fail the run, naming every absent canonical column.
    Reject,
    /// Synthesize the absent column filled with empty cells.
    #[default]
    FillEmpty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_schema_has_twelve_ordered_columns() {
        assert_eq!(CANONICAL_COLUMNS.len(), 12);
        assert_eq!(CANONICAL_COLUMNS[0], "Data");
        assert_eq!(CANONICAL_COLUMNS[11], "Loja");
    }
}
