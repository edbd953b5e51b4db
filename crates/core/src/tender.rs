//! Tenders (requests for bids) and the bids submitted against them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::{BidStatus, TenderStatus};
use crate::types::{Amount, EntityId};

/// A contractor's proposal submitted against a tender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: EntityId,
    pub tender_id: EntityId,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub bid_amount: Amount,
    pub proposal_description: String,
    /// Attached filenames. Order carries no meaning.
    pub documents: Vec<String>,
    pub submission_date: NaiveDate,
    pub status: BidStatus,
}

/// A published request for bids on project work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    pub id: EntityId,
    pub project_id: EntityId,
    pub title: String,
    pub description: String,
    pub budget: Amount,
    pub requirements_summary: String,
    pub deadline: NaiveDate,
    pub status: TenderStatus,
    pub created_at: NaiveDate,
    /// Bids in submission order, first submitted first.
    #[serde(default)]
    pub bids: Vec<Bid>,
}

impl Tender {
    /// Only published tenders accept bids.
    pub fn is_open(&self) -> bool {
        self.status == TenderStatus::Published
    }
}

/// `"1 bid"`, `"3 bids"`.
pub fn bid_count_label(count: usize) -> String {
    if count == 1 {
        "1 bid".to_string()
    } else {
        format!("{count} bids")
    }
}
