//! Bid submission validation.
//!
//! A submission is checked against its tender and turned into a [`Bid`]
//! draft. Nothing is stored: the dataset stays immutable and persisting the
//! draft is left to whoever owns storage.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::status::BidStatus;
use crate::tender::{Bid, Tender};
use crate::types::Amount;

/// Fields a contractor fills in when bidding on an open tender.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BidSubmission {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "Contact name is required"))]
    pub contact_name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[validate(range(exclusive_min = 0.0, message = "Bid amount must be greater than zero"))]
    pub bid_amount: Amount,
    #[serde(default)]
    pub proposal_description: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

/// Validate `submission` against `tender` and build the resulting draft.
///
/// Fails with [`CoreError::Validation`] when the tender is not open for
/// bidding or a required field is missing or malformed.
pub fn validate_bid_submission(
    tender: &Tender,
    submission: &BidSubmission,
    submitted_on: NaiveDate,
) -> Result<Bid, CoreError> {
    if !tender.is_open() {
        return Err(CoreError::Validation(format!(
            "Tender {} is {} and not accepting bids",
            tender.id, tender.status
        )));
    }
    submission
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    Ok(Bid {
        id: format!("{}-bid-{:03}", tender.id, tender.bids.len() + 1),
        tender_id: tender.id.clone(),
        company_name: submission.company_name.clone(),
        contact_name: submission.contact_name.clone(),
        email: submission.email.clone(),
        phone: submission.phone.clone(),
        bid_amount: submission.bid_amount,
        proposal_description: submission.proposal_description.clone(),
        documents: submission.documents.clone(),
        submission_date: submitted_on,
        status: BidStatus::Submitted,
    })
}
