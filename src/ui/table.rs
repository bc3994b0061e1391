use crate::record::NameRecord;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct StatRow<'a> {
    #[tabled(rename = "Metric")]
    metric: &'a str,
    #[tabled(rename = "Value")]
    value: &'a str,
}

#[derive(Tabled)]
struct NameRow<'a> {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    name: &'a str,
}

fn rounded<T: Tabled>(rows: Vec<T>) -> String {
    if rows.is_empty() {
        return String::new();
    }
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Two-column `Metric | Value` table
pub fn stats_table(stats: &[(&str, &str)]) -> String {
    rounded(
        stats
            .iter()
            .map(|&(metric, value)| StatRow { metric, value })
            .collect(),
    )
}

/// `Id | Name` table, empty string when there are no records
pub fn names_table(records: &[NameRecord]) -> String {
    rounded(
        records
            .iter()
            .map(|r| NameRow { id: r.id, name: &r.name })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tables_render_nothing() {
        assert!(stats_table(&[]).is_empty());
        assert!(names_table(&[]).is_empty());
    }

    #[test]
    fn test_names_table_contains_rows() {
        let table = names_table(&[NameRecord::new(1, "Khushi"), NameRecord::new(2, "Alice")]);
        assert!(table.contains("Id"));
        assert!(table.contains("Khushi"));
        assert!(table.contains("Alice"));
    }

    #[test]
    fn test_stats_table() {
        let table = stats_table(&[("Names", "2")]);
        assert!(table.contains("Metric"));
        assert!(table.contains("Names"));
    }
}
