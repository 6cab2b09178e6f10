use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InvoiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Paid,
    Pending,
    Overdue,
    Draft,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceStatus::Paid => write!(f, "PAID"),
            InvoiceStatus::Pending => write!(f, "PENDING"),
            InvoiceStatus::Overdue => write!(f, "OVERDUE"),
            InvoiceStatus::Draft => write!(f, "DRAFT"),
        }
    }
}

impl FromStr for InvoiceStatus {
    type Err = InvoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "paid" => Ok(InvoiceStatus::Paid),
            "pending" => Ok(InvoiceStatus::Pending),
            "overdue" => Ok(InvoiceStatus::Overdue),
            "draft" => Ok(InvoiceStatus::Draft),
            _ => Err(InvoiceError::UnknownStatus(s.to_string())),
        }
    }
}

/// An invoice already issued, as listed on the dashboard
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct IssuedInvoice {
    /// Table key in invoices.toml
    #[serde(skip)]
    pub id: String,
    pub client: String,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
}

/// Invoices whose client or id contains `term` (ignoring case), optionally
/// restricted to one status.
pub fn search_invoices<'a>(
    invoices: &'a [IssuedInvoice],
    term: &str,
    status: Option<InvoiceStatus>,
) -> Vec<&'a IssuedInvoice> {
    let term = term.to_lowercase();
    invoices
        .iter()
        .filter(|inv| {
            inv.client.to_lowercase().contains(&term) || inv.id.to_lowercase().contains(&term)
        })
        .filter(|inv| status.map_or(true, |s| inv.status == s))
        .collect()
}

/// Headline figures for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub count: usize,
    /// Sum of paid invoice amounts
    pub revenue: f64,
    /// Sum of pending and overdue amounts
    pub outstanding: f64,
    pub paid: usize,
    pub pending: usize,
    pub overdue: usize,
    pub draft: usize,
}

pub fn summarize(invoices: &[IssuedInvoice]) -> Summary {
    invoices.iter().fold(Summary::default(), |mut s, inv| {
        s.count += 1;
        match inv.status {
            InvoiceStatus::Paid => {
                s.paid += 1;
                s.revenue += inv.amount;
            }
            InvoiceStatus::Pending => {
                s.pending += 1;
                s.outstanding += inv.amount;
            }
            InvoiceStatus::Overdue => {
                s.overdue += 1;
                s.outstanding += inv.amount;
            }
            InvoiceStatus::Draft => s.draft += 1,
        }
        s
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inv(id: &str, client: &str, amount: f64, status: InvoiceStatus) -> IssuedInvoice {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        IssuedInvoice {
            id: id.into(),
            client: client.into(),
            amount,
            status,
            date,
            due_date: date,
        }
    }

    fn sample() -> Vec<IssuedInvoice> {
        vec![
            inv("INV-001", "Acme Corporation", 2500.0, InvoiceStatus::Paid),
            inv("INV-002", "Tech Solutions Inc", 1800.0, InvoiceStatus::Pending),
            inv("INV-003", "Creative Design Studio", 3200.0, InvoiceStatus::Paid),
            inv("INV-004", "Marketing Solutions Co", 950.0, InvoiceStatus::Overdue),
            inv("INV-005", "Digital Agency", 4200.0, InvoiceStatus::Draft),
        ]
    }

    #[test]
    fn search_by_client_or_id() {
        let list = sample();
        assert_eq!(search_invoices(&list, "solutions", None).len(), 2);
        assert_eq!(search_invoices(&list, "inv-005", None)[0].client, "Digital Agency");
        assert_eq!(search_invoices(&list, "", None).len(), 5);
    }

    #[test]
    fn search_with_status() {
        let list = sample();
        let paid = search_invoices(&list, "", Some(InvoiceStatus::Paid));
        assert_eq!(paid.len(), 2);
        assert!(search_invoices(&list, "acme", Some(InvoiceStatus::Overdue)).is_empty());
    }

    #[test]
    fn summary_counts_and_sums() {
        let s = summarize(&sample());
        assert_eq!(s.count, 5);
        assert_eq!((s.paid, s.pending, s.overdue, s.draft), (2, 1, 1, 1));
        assert!((s.revenue - 5700.0).abs() < 1e-9);
        assert!((s.outstanding - 2750.0).abs() < 1e-9);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Overdue".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Overdue);
        assert!("late".parse::<InvoiceStatus>().is_err());
    }
}
