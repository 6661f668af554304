//! Report assembly and text rendering for analytics data.

use std::fmt::Write as _;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::booking::{CustomerSummary, StatusDistribution, WeekdayMetric};
use crate::error::Result;
use crate::numeric::round2;
use crate::occupancy::{DailyMetric, RoomTypeOccupancy};
use crate::revenue::{MonthlyRevenue, RevenueAnalyzer, RoomTypeRevenue};
use hotel_domain::DateRange;

/// Yearly revenue report: monthly rows, room type rows and the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueReport {
    pub year: i32,
    pub monthly: Vec<MonthlyRevenue>,
    pub by_room_type: Vec<RoomTypeRevenue>,
    pub total_annual_revenue: Decimal,
}

impl RevenueReport {
    /// Assemble a report; the grand total is the sum of the monthly rows.
    pub fn new(year: i32, monthly: Vec<MonthlyRevenue>, by_room_type: Vec<RoomTypeRevenue>) -> Self {
        let total_annual_revenue = monthly.iter().map(|m| m.total_revenue).sum();
        Self {
            year,
            monthly,
            by_room_type,
            total_annual_revenue,
        }
    }

    /// Render as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let _ = writeln!(md, "## Revenue Report - {}\n", self.year);

        if self.monthly.is_empty() {
            md.push_str("No revenue data available\n\n");
        } else {
            md.push_str("### Monthly Revenue Summary\n\n");
            md.push_str("| Month | Name | Total Revenue | Transactions |\n");
            md.push_str("|-------|------|---------------|--------------|\n");
            for row in &self.monthly {
                let _ = writeln!(
                    md,
                    "| {} | {} | {} | {} |",
                    row.month_number,
                    row.month_name,
                    format_currency(row.total_revenue),
                    row.transaction_count
                );
            }
            let _ = writeln!(
                md,
                "\n**Total Annual Revenue:** {}\n",
                format_currency(self.total_annual_revenue)
            );
        }

        if !self.by_room_type.is_empty() {
            md.push_str("### Revenue by Room Type\n\n");
            md.push_str("| Room Type | Bookings | Total Revenue | Avg per Booking |\n");
            md.push_str("|-----------|----------|---------------|-----------------|\n");
            for row in &self.by_room_type {
                let _ = writeln!(
                    md,
                    "| {} | {} | {} | {} |",
                    row.type_name,
                    row.booking_count,
                    format_currency(row.total_revenue),
                    format_currency(row.avg_revenue_per_booking)
                );
            }
            md.push('\n');
        }

        md
    }
}

impl RevenueAnalyzer {
    /// Monthly revenue for `year` plus revenue by room type, with the total.
    pub async fn revenue_report(&self, year: i32) -> Result<RevenueReport> {
        let monthly = self.monthly_revenue(year).await?;
        let by_room_type = self.revenue_by_room_type().await?;
        Ok(RevenueReport::new(year, monthly, by_room_type))
    }
}

/// Everything the dashboard shows, computed from one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub occupancy_range: DateRange,
    pub occupancy: Vec<DailyMetric>,
    pub room_type_occupancy: Vec<RoomTypeOccupancy>,
    pub revenue: RevenueReport,
    pub weekday_patterns: Vec<WeekdayMetric>,
    pub customer_summary: CustomerSummary,
    pub status_distribution: Vec<StatusDistribution>,
}

impl DashboardReport {
    /// Render as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str("# Hotel Reservation System - Analytics Dashboard\n\n");

        let _ = writeln!(
            md,
            "## Occupancy Rate ({} to {})\n",
            self.occupancy_range.start(),
            self.occupancy_range.end()
        );
        if self.occupancy.is_empty() {
            md.push_str("No data available for the given date range\n\n");
        } else {
            md.push_str("| Date | Occupied Rooms | Total Rooms | Occupancy Rate |\n");
            md.push_str("|------|----------------|-------------|----------------|\n");
            for row in &self.occupancy {
                let _ = writeln!(
                    md,
                    "| {} | {} | {} | {}% |",
                    row.date, row.occupied_room_count, row.total_room_count, row.occupancy_rate_percent
                );
            }
            md.push('\n');
        }

        if !self.room_type_occupancy.is_empty() {
            md.push_str("## Room Type Occupancy\n\n");
            md.push_str("| Room Type | Bookings | Avg Stay (days) |\n");
            md.push_str("|-----------|----------|-----------------|\n");
            for row in &self.room_type_occupancy {
                let _ = writeln!(
                    md,
                    "| {} | {} | {} |",
                    row.type_name, row.total_bookings, row.avg_stay_duration_days
                );
            }
            md.push('\n');
        }

        md.push_str(&self.revenue.to_markdown());

        md.push_str("## Booking Patterns\n\n");
        if self.weekday_patterns.is_empty() {
            md.push_str("No booking data available\n\n");
        } else {
            md.push_str("| Day | Bookings | Avg Booking Value |\n");
            md.push_str("|-----|----------|-------------------|\n");
            for row in &self.weekday_patterns {
                let _ = writeln!(
                    md,
                    "| {} | {} | {} |",
                    row.day_of_week,
                    row.booking_count,
                    format_currency(row.avg_booking_value)
                );
            }
            md.push('\n');
        }

        let summary = &self.customer_summary;
        md.push_str("## Customer Statistics\n\n");
        md.push_str("| Metric | Value |\n");
        md.push_str("|--------|-------|\n");
        let _ = writeln!(md, "| Total Customers | {} |", summary.total_customers);
        let _ = writeln!(md, "| Total Reservations | {} |", summary.total_reservations);
        let _ = writeln!(
            md,
            "| Avg Bookings per Customer | {} |",
            summary
                .avg_bookings_per_customer
                .map_or_else(|| "N/A".to_string(), |v| v.to_string())
        );
        let _ = writeln!(
            md,
            "| Avg Booking Value | {} |",
            summary
                .avg_booking_value
                .map_or_else(|| "N/A".to_string(), format_currency)
        );
        md.push('\n');

        if !self.status_distribution.is_empty() {
            md.push_str("## Reservation Status Distribution\n\n");
            md.push_str("| Status | Count | Percentage |\n");
            md.push_str("|--------|-------|------------|\n");
            for row in &self.status_distribution {
                let _ = writeln!(
                    md,
                    "| {} | {} | {}% |",
                    row.status.as_str(),
                    row.count,
                    row.percentage_of_total
                );
            }
            md.push('\n');
        }

        md
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Formats computed reports for display.
pub trait ReportPrinter {
    fn print(&self, report: &DashboardReport) -> Result<String>;
}

/// Markdown tables, one section per analytic.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownPrinter;

impl ReportPrinter for MarkdownPrinter {
    fn print(&self, report: &DashboardReport) -> Result<String> {
        Ok(report.to_markdown())
    }
}

/// The report structure as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPrinter;

impl ReportPrinter for JsonPrinter {
    fn print(&self, report: &DashboardReport) -> Result<String> {
        report.to_json()
    }
}

/// `₹` amount with thousands separators and two decimals, e.g. `₹1,500.00`.
pub fn format_currency(amount: Decimal) -> String {
    let fixed = round2(amount.abs()).to_string();
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{sign}₹{grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{at, date, payment, shared};
    use hotel_domain::PaymentStatus;
    use hotel_store::Snapshot;
    use rust_decimal_macros::dec;

    fn month(number: u32, name: &str, total: Decimal, count: u64) -> MonthlyRevenue {
        MonthlyRevenue {
            month_number: number,
            month_name: name.into(),
            total_revenue: total,
            transaction_count: count,
        }
    }

    fn empty_dashboard() -> DashboardReport {
        DashboardReport {
            occupancy_range: DateRange::new(date(2024, 1, 1), date(2024, 1, 31)).unwrap(),
            occupancy: vec![],
            room_type_occupancy: vec![],
            revenue: RevenueReport::new(2024, vec![], vec![]),
            weekday_patterns: vec![],
            customer_summary: CustomerSummary {
                total_customers: 0,
                total_reservations: 0,
                avg_bookings_per_customer: None,
                avg_booking_value: None,
            },
            status_distribution: vec![],
        }
    }

    #[test]
    fn test_report_total_is_sum_of_months() {
        let report = RevenueReport::new(
            2024,
            vec![
                month(1, "January", dec!(1000), 1),
                month(3, "March", dec!(500), 1),
            ],
            vec![],
        );
        assert_eq!(report.total_annual_revenue, dec!(1500.00));
    }

    #[test]
    fn test_empty_report_total_is_zero() {
        let report = RevenueReport::new(2024, vec![], vec![]);
        assert_eq!(report.total_annual_revenue, Decimal::ZERO);
        assert!(report.to_markdown().contains("No revenue data available"));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(1500)), "₹1,500.00");
        assert_eq!(format_currency(dec!(1234567.891)), "₹1,234,567.89");
        assert_eq!(format_currency(dec!(999.995)), "₹1,000.00");
        assert_eq!(format_currency(dec!(0)), "₹0.00");
        assert_eq!(format_currency(dec!(-42.5)), "-₹42.50");
    }

    #[test]
    fn test_revenue_markdown() {
        let report = RevenueReport::new(
            2024,
            vec![month(1, "January", dec!(1000), 1), month(3, "March", dec!(500), 1)],
            vec![RoomTypeRevenue {
                type_name: "Suite".into(),
                booking_count: 2,
                total_revenue: dec!(1500),
                avg_revenue_per_booking: dec!(750.00),
            }],
        );
        let md = report.to_markdown();
        assert!(md.contains("## Revenue Report - 2024"));
        assert!(md.contains("| 3 | March | ₹500.00 | 1 |"));
        assert!(md.contains("**Total Annual Revenue:** ₹1,500.00"));
        assert!(md.contains("| Suite | 2 | ₹1,500.00 | ₹750.00 |"));
    }

    #[test]
    fn test_empty_dashboard_markdown() {
        let md = MarkdownPrinter.print(&empty_dashboard()).unwrap();
        assert!(md.contains("# Hotel Reservation System - Analytics Dashboard"));
        assert!(md.contains("No data available for the given date range"));
        assert!(md.contains("| Avg Bookings per Customer | N/A |"));
    }

    #[test]
    fn test_json_printer_uses_null_sentinel() {
        let json = JsonPrinter.print(&empty_dashboard()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["customer_summary"]["avg_bookings_per_customer"].is_null());
        assert_eq!(value["revenue"]["year"], 2024);
    }

    #[tokio::test]
    async fn test_revenue_report_from_store() {
        let analyzer = RevenueAnalyzer::new(shared(Snapshot {
            payments: vec![
                payment(1, 1, dec!(1000), PaymentStatus::Completed, at(2024, 1, 10)),
                payment(2, 2, dec!(500), PaymentStatus::Completed, at(2024, 3, 10)),
            ],
            ..Snapshot::default()
        }));

        let report = analyzer.revenue_report(2024).await.unwrap();
        let months: Vec<u32> = report.monthly.iter().map(|m| m.month_number).collect();
        assert_eq!(months, [1, 3]);
        assert_eq!(report.total_annual_revenue, dec!(1500));
        assert!(report.by_room_type.is_empty());

        assert_eq!(analyzer.revenue_report(2024).await.unwrap(), report);
    }
}
