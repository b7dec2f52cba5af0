use std::collections::BTreeMap;
use vetclinic_types::HealthRecord;

use super::{AxisPosition, ChartConfig, Dataset, Scale};
use crate::presentation::formatters::{DateLocale, format_date, parse_date};

pub const WEIGHT_LABEL: &str = "Weight (kg)";
pub const TEMPERATURE_LABEL: &str = "Temperature (°C)";

/// Weight and temperature over time, oldest visit first.
///
/// The sort is stable, so visits on the same day keep the order they came
/// in. Visits whose date does not parse sort before all others.
pub fn build_trend_chart(records: &[HealthRecord], locale: DateLocale) -> ChartConfig {
    let mut visits: Vec<&HealthRecord> = records.iter().collect();
    visits.sort_by_key(|r| parse_date(&r.visit_date));

    let labels = visits
        .iter()
        .map(|r| format_date(Some(&r.visit_date), locale))
        .collect();

    let weight = Dataset {
        label: WEIGHT_LABEL,
        data: visits.iter().map(|r| r.weight).collect(),
        border_color: "#3498db",
        background_color: "rgba(52, 152, 219, 0.1)",
        y_axis_id: "y",
    };
    let temperature = Dataset {
        label: TEMPERATURE_LABEL,
        data: visits.iter().map(|r| r.temperature).collect(),
        border_color: "#e74c3c",
        background_color: "rgba(231, 76, 60, 0.1)",
        y_axis_id: "y1",
    };

    let mut scales = BTreeMap::new();
    scales.insert("y", Scale::linear(AxisPosition::Left, WEIGHT_LABEL));
    scales.insert(
        "y1",
        Scale::linear(AxisPosition::Right, TEMPERATURE_LABEL).without_chart_grid(),
    );

    ChartConfig::line(labels, vec![weight, temperature], scales)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vetclinic_types::{HealthRecordId, PetId};

    fn visit(id: i64, date: &str, weight: Option<f64>, temperature: Option<f64>) -> HealthRecord {
        HealthRecord {
            id: HealthRecordId::new(id),
            pet_id: PetId::new(3),
            visit_date: date.to_string(),
            weight,
            temperature,
            heart_rate: None,
            respiratory_rate: None,
            diagnosis: None,
            treatment: None,
            notes: None,
            next_visit_date: None,
            created_at: None,
        }
    }

    #[test]
    fn test_labels_ascend() {
        let records = vec![
            visit(1, "2024-03-01", Some(31.2), Some(38.6)),
            visit(2, "2023-09-12", Some(29.8), Some(38.9)),
        ];
        let chart = build_trend_chart(&records, DateLocale::Iso);
        assert_eq!(chart.data.labels, vec!["2023-09-12", "2024-03-01"]);
        assert_eq!(chart.data.datasets[0].data, vec![Some(29.8), Some(31.2)]);
    }

    #[test]
    fn test_missing_measurement_keeps_alignment() {
        let records = vec![
            visit(1, "2024-03-01", Some(31.2), Some(38.6)),
            visit(2, "2024-01-15", None, Some(39.4)),
            visit(3, "2023-09-12", Some(29.8), None),
        ];
        let chart = build_trend_chart(&records, DateLocale::RuRu);
        assert_eq!(
            chart.data.labels,
            vec!["12.09.2023", "15.01.2024", "01.03.2024"]
        );
        assert_eq!(
            chart.data.datasets[0].data,
            vec![Some(29.8), None, Some(31.2)]
        );
        assert_eq!(
            chart.data.datasets[1].data,
            vec![None, Some(39.4), Some(38.6)]
        );
        let weights: Vec<(usize, f64)> = chart.data.datasets[0].points().collect();
        assert_eq!(weights, vec![(0, 29.8), (2, 31.2)]);
    }

    #[test]
    fn test_same_day_visits_keep_input_order() {
        let records = vec![
            visit(1, "2024-01-15", Some(30.0), None),
            visit(2, "2024-01-15", Some(30.5), None),
            visit(3, "2023-01-01", Some(25.0), None),
        ];
        let chart = build_trend_chart(&records, DateLocale::Iso);
        assert_eq!(
            chart.data.datasets[0].data,
            vec![Some(25.0), Some(30.0), Some(30.5)]
        );
    }

    #[test]
    fn test_no_records_gives_empty_chart() {
        let chart = build_trend_chart(&[], DateLocale::Iso);
        assert!(chart.is_empty());
        assert_eq!(chart.data.datasets.len(), 2);
    }

    #[test]
    fn test_dual_axis_configuration() {
        let chart = build_trend_chart(&[visit(1, "2024-03-01", Some(31.2), Some(38.6))], DateLocale::Iso);
        let value = serde_json::to_value(&chart).unwrap();

        assert_eq!(value["type"], "line");
        assert_eq!(value["options"]["interaction"], json!({"mode": "index", "intersect": false}));
        assert_eq!(value["options"]["scales"]["y"]["position"], "left");
        assert_eq!(value["options"]["scales"]["y1"]["position"], "right");
        assert_eq!(
            value["options"]["scales"]["y1"]["grid"],
            json!({"drawOnChartArea": false})
        );
        assert!(value["options"]["scales"]["y"].get("grid").is_none());
        assert_eq!(value["data"]["datasets"][1]["yAxisID"], "y1");
        assert_eq!(value["data"]["datasets"][0]["borderColor"], "#3498db");
    }
}
