use ui_shared::{save_blob, ApiError, Query};

use super::client;
use crate::models::{Aggregated, AnalyticsRow};
use crate::store::DateRange;

/// Download name for the analytics export
pub const ANALYTICS_CSV_NAME: &str = "aggregated_data.csv";

fn range_query(range: &DateRange) -> Query {
    Query::new()
        .push_opt("from", range.from_opt())
        .push_opt("to", range.to_opt())
}

/// Aggregate for the range, `None` when no items fall inside it
pub async fn get_analytics(range: &DateRange) -> Result<Option<Aggregated>, ApiError> {
    let rows: Option<Vec<AnalyticsRow>> = client().get_json(&range_query(range).apply("/analytics")).await?;
    Ok(first_aggregate(rows.unwrap_or_default()))
}

pub async fn export_analytics_csv(range: &DateRange) -> Result<(), ApiError> {
    let blob = client().get_blob(&range_query(range).apply("/analytics/csv")).await?;
    save_blob(&blob, ANALYTICS_CSV_NAME)
}

fn first_aggregate(rows: Vec<AnalyticsRow>) -> Option<Aggregated> {
    rows.into_iter().next().map(|row| row.aggregated_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_query() {
        let range = DateRange { from: "2024-01-01".into(), to: "2024-01-31".into() };
        assert_eq!(range_query(&range).apply("/analytics"), "/analytics?from=2024-01-01&to=2024-01-31");
        assert_eq!(range_query(&DateRange::default()).apply("/analytics/csv"), "/analytics/csv");
    }

    #[test]
    fn test_first_aggregate() {
        let rows: Vec<AnalyticsRow> = serde_json::from_str(
            r#"[{"aggregated_data":{"sum":10,"count":1}},{"aggregated_data":{"sum":10,"count":1}}]"#,
        )
        .unwrap();
        assert_eq!(first_aggregate(rows).map(|a| a.sum), Some(10));
        assert_eq!(first_aggregate(Vec::new()), None);
    }
}
