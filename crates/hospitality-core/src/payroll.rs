//! Payroll computation.
//!
//! Hours are accumulated in whole minutes and split at each member's
//! overtime threshold. Pay amounts are left unrounded; round only for
//! display.

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::{PayrollRecord, Shift, TeamMember};

/// Flat share of gross pay withheld from every payslip.
pub const DEDUCTION_RATE: f64 = 0.15;

/// Share of gross pay paid out.
pub const NET_PAY_RATE: f64 = 0.85;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PayPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Worked minutes for a shift. An end before the start wraps past midnight;
/// equal times count as zero, so no shift exceeds 24 hours.
pub fn shift_minutes(shift: &Shift) -> i64 {
    let start = i64::from(shift.start_time.num_seconds_from_midnight() / 60);
    let end = i64::from(shift.end_time.num_seconds_from_midnight() / 60);
    (end - start).rem_euclid(MINUTES_PER_DAY)
}

pub fn shift_hours(shift: &Shift) -> f64 {
    shift_minutes(shift) as f64 / 60.0
}

/// Pay summary for one member over the given shifts. Shifts belonging to
/// other members, or outside `period`, are ignored.
pub fn compute_member_payroll(
    member: &TeamMember,
    shifts: &[Shift],
    period: Option<&PayPeriod>,
) -> PayrollRecord {
    let worked: Vec<&Shift> = shifts
        .iter()
        .filter(|s| s.member_id == member.id)
        .filter(|s| period.map_or(true, |p| p.contains(s.date)))
        .collect();

    let total_minutes: i64 = worked.iter().map(|s| shift_minutes(s)).sum();
    let threshold_minutes = (member.overtime_threshold.max(0.0) * 60.0).round() as i64;
    let standard_minutes = total_minutes.min(threshold_minutes);
    let overtime_minutes = total_minutes - standard_minutes;

    let total_hours = total_minutes as f64 / 60.0;
    let standard_hours = standard_minutes as f64 / 60.0;
    let overtime_hours = overtime_minutes as f64 / 60.0;

    let rate = member.base_hourly_rate;
    let standard_pay = standard_hours * rate;
    let overtime_pay = overtime_hours * rate * member.overtime_multiplier;
    let gross_pay = standard_pay + overtime_pay;

    PayrollRecord {
        member_id: member.id.clone(),
        member_name: member.name.clone(),
        context: member.context.clone(),
        shift_count: worked.len(),
        total_hours,
        standard_hours,
        overtime_hours,
        standard_pay,
        overtime_pay,
        gross_pay,
        deductions: gross_pay * DEDUCTION_RATE,
        net_pay: gross_pay * NET_PAY_RATE,
    }
}

/// One record per member, sorted by name.
pub fn compute_payroll(
    members: &[TeamMember],
    shifts: &[Shift],
    period: Option<&PayPeriod>,
) -> Vec<PayrollRecord> {
    let mut records: Vec<PayrollRecord> = members
        .iter()
        .map(|m| compute_member_payroll(m, shifts, period))
        .collect();
    records.sort_by(|a, b| a.member_name.cmp(&b.member_name));
    records
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollTotals {
    pub hours: f64,
    pub overtime_hours: f64,
    pub gross_pay: f64,
    pub deductions: f64,
    pub net_pay: f64,
}

pub fn payroll_totals(records: &[PayrollRecord]) -> PayrollTotals {
    records.iter().fold(PayrollTotals::default(), |acc, r| PayrollTotals {
        hours: acc.hours + r.total_hours,
        overtime_hours: acc.overtime_hours + r.overtime_hours,
        gross_pay: acc.gross_pay + r.gross_pay,
        deductions: acc.deductions + r.deductions,
        net_pay: acc.net_pay + r.net_pay,
    })
}
