//! Validated table descriptor and the DDL text derived from it.

use serde::{Deserialize, Serialize};

/// Column type used for every field; no type inference is attempted.
pub const COLUMN_TYPE: &str = "STRING";

/// Field delimiter of the published text files.
const FIELD_DELIMITER: char = ',';

/// A table ready to be created in the warehouse.
///
/// Only produced by the mapper, so every name is a legal identifier and the
/// field list is duplicate-free.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDescriptor {
    pub database_name: String,
    pub table_name: String,
    pub fields: Vec<String>,
    pub location: String,
}

impl TableDescriptor {
    /// `` `database`.`table` ``
    pub fn qualified_name(&self) -> String {
        format!(
            "{}.{}",
            quote_identifier(&self.database_name),
            quote_identifier(&self.table_name)
        )
    }

    pub fn create_database_statement(&self) -> String {
        format!(
            "CREATE DATABASE IF NOT EXISTS {}",
            quote_identifier(&self.database_name)
        )
    }

    /// External text table over the upload directory, header line skipped.
    pub fn create_table_statement(&self) -> String {
        let columns = self
            .fields
            .iter()
            .map(|f| format!("{} {COLUMN_TYPE}", quote_identifier(f)))
            .collect::<Vec<_>>()
            .join(", ");

        [
            format!(
                "CREATE EXTERNAL TABLE IF NOT EXISTS {} ({columns})",
                self.qualified_name()
            ),
            format!("ROW FORMAT DELIMITED FIELDS TERMINATED BY '{FIELD_DELIMITER}'"),
            "STORED AS TEXTFILE".to_owned(),
            format!("LOCATION {}", quote_literal(&self.location)),
            "TBLPROPERTIES ('skip.header.line.count'='1')".to_owned(),
        ]
        .join("\n")
    }

    pub fn drop_table_statement(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", self.qualified_name())
    }
}

/// Backtick-quote an identifier, doubling embedded backticks.
fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// Single-quote a string literal.
fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}
