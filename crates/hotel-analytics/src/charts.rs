//! Chart-ready series built from computed analytics.
//!
//! Drawing is left to a [`ChartRenderer`]; this module only decides what is
//! plotted, with which labels, and skips charts whose data is empty.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::booking::WeekdayMetric;
use crate::occupancy::DailyMetric;
use crate::revenue::MonthlyRevenue;

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One labelled value on the x axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: Decimal,
}

/// One plotted panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

/// A figure made of one or more panels, saved under `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    pub name: String,
    pub panels: Vec<ChartSeries>,
}

/// Draws or otherwise persists a chart.
pub trait ChartRenderer {
    type Error: std::error::Error;

    fn render(&self, chart: &Chart) -> Result<(), Self::Error>;
}

/// Occupancy rate per day as a line.
pub fn occupancy_trend(rows: &[DailyMetric]) -> Option<Chart> {
    if rows.is_empty() {
        return None;
    }
    Some(Chart {
        name: "occupancy_trend".into(),
        panels: vec![ChartSeries {
            title: "Hotel Occupancy Rate Trend".into(),
            kind: ChartKind::Line,
            x_label: "Date".into(),
            y_label: "Occupancy Rate (%)".into(),
            points: rows
                .iter()
                .map(|r| ChartPoint {
                    label: r.date.to_string(),
                    value: r.occupancy_rate_percent,
                })
                .collect(),
        }],
    })
}

/// Revenue per month of `year` as bars.
pub fn monthly_revenue(year: i32, rows: &[MonthlyRevenue]) -> Option<Chart> {
    if rows.is_empty() {
        return None;
    }
    Some(Chart {
        name: "monthly_revenue".into(),
        panels: vec![ChartSeries {
            title: format!("Monthly Revenue for {year}"),
            kind: ChartKind::Bar,
            x_label: "Month".into(),
            y_label: "Revenue (₹)".into(),
            points: rows
                .iter()
                .map(|r| ChartPoint {
                    label: r.month_name.clone(),
                    value: r.total_revenue,
                })
                .collect(),
        }],
    })
}

/// Booking count and average booking value per weekday, side by side.
pub fn booking_patterns(rows: &[WeekdayMetric]) -> Option<Chart> {
    if rows.is_empty() {
        return None;
    }
    let panel = |title: &str, y_label: &str, value: fn(&WeekdayMetric) -> Decimal| ChartSeries {
        title: title.into(),
        kind: ChartKind::Bar,
        x_label: "Day".into(),
        y_label: y_label.into(),
        points: rows
            .iter()
            .map(|r| ChartPoint {
                label: r.day_of_week.clone(),
                value: value(r),
            })
            .collect(),
    };

    Some(Chart {
        name: "booking_patterns".into(),
        panels: vec![
            panel("Bookings by Day of Week", "Number of Bookings", |r| {
                Decimal::from(r.booking_count)
            }),
            panel("Average Booking Value by Day", "Average Value (₹)", |r| {
                r.avg_booking_value
            }),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::date;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_data_yields_no_chart() {
        assert!(occupancy_trend(&[]).is_none());
        assert!(monthly_revenue(2024, &[]).is_none());
        assert!(booking_patterns(&[]).is_none());
    }

    #[test]
    fn test_occupancy_trend_points() {
        let chart = occupancy_trend(&[DailyMetric {
            date: date(2024, 1, 1),
            occupied_room_count: 2,
            total_room_count: 10,
            occupancy_rate_percent: dec!(20.00),
        }])
        .unwrap();

        assert_eq!(chart.name, "occupancy_trend");
        assert_eq!(chart.panels[0].kind, ChartKind::Line);
        assert_eq!(chart.panels[0].points[0].label, "2024-01-01");
        assert_eq!(chart.panels[0].points[0].value, dec!(20.00));
    }

    #[test]
    fn test_monthly_revenue_title_names_year() {
        let chart = monthly_revenue(
            2024,
            &[MonthlyRevenue {
                month_number: 3,
                month_name: "March".into(),
                total_revenue: dec!(500),
                transaction_count: 1,
            }],
        )
        .unwrap();
        assert_eq!(chart.panels[0].title, "Monthly Revenue for 2024");
        assert_eq!(chart.panels[0].points[0].label, "March");
    }

    #[test]
    fn test_booking_patterns_has_two_panels() {
        let chart = booking_patterns(&[WeekdayMetric {
            day_index: 2,
            day_of_week: "Monday".into(),
            booking_count: 2,
            avg_booking_value: dec!(150.00),
        }])
        .unwrap();

        assert_eq!(chart.panels.len(), 2);
        assert_eq!(chart.panels[0].points[0].value, dec!(2));
        assert_eq!(chart.panels[1].points[0].value, dec!(150.00));
    }
}
