use crate::confirmations::ConfirmationRow;

/// Free-text filter over the confirmations table.
///
/// Both queries are case-insensitive substring matches combined with AND; an
/// empty (or whitespace-only) query imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    pub nombre: String,
    pub email: String,
}

impl RowFilter {
    /// True when neither query constrains the result.
    pub fn is_empty(&self) -> bool {
        self.nombre.trim().is_empty() && self.email.trim().is_empty()
    }

    fn matches(&self, row: &ConfirmationRow) -> bool {
        contains_query(&row.nombre, &self.nombre) && contains_query(&row.email, &self.email)
    }
}

/// Filters rows by the given name/email queries, preserving order.
pub fn filter_rows<'a>(rows: &'a [ConfirmationRow], filter: &RowFilter) -> Vec<&'a ConfirmationRow> {
    if filter.is_empty() {
        return rows.iter().collect();
    }
    rows.iter().filter(|row| filter.matches(row)).collect()
}

fn contains_query(haystack: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<ConfirmationRow> {
        vec![
            ConfirmationRow {
                nombre: "Ana".to_string(),
                email: "a@x.com".to_string(),
                ..Default::default()
            },
            ConfirmationRow {
                nombre: "Beto".to_string(),
                email: "b@x.com".to_string(),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_empty_filter_returns_all_rows() {
        let rows = sample_rows();
        let filtered = filter_rows(&rows, &RowFilter::default());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_name_substring_is_case_insensitive() {
        let rows = sample_rows();
        let filter = RowFilter {
            nombre: "an".to_string(),
            ..Default::default()
        };

        let filtered = filter_rows(&rows, &filter);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].nombre, "Ana");
    }

    #[test]
    fn test_email_substring_matches_both_rows() {
        let rows = sample_rows();
        let filter = RowFilter {
            email: "x.com".to_string(),
            ..Default::default()
        };

        assert_eq!(filter_rows(&rows, &filter).len(), 2);
    }

    #[test]
    fn test_queries_combine_with_and() {
        let rows = sample_rows();
        let filter = RowFilter {
            nombre: "zzz".to_string(),
            email: "x.com".to_string(),
        };

        assert!(filter_rows(&rows, &filter).is_empty());
    }

    #[test]
    fn test_whitespace_only_query_imposes_no_constraint() {
        let rows = sample_rows();
        let filter = RowFilter {
            nombre: "   ".to_string(),
            email: String::new(),
        };

        assert_eq!(filter_rows(&rows, &filter).len(), 2);
        assert!(filter.is_empty());
    }
}
