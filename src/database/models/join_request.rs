use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    pub id: i64,
    pub team_id: i64,
    pub user_id: i64,
    pub status: JoinRequestStatus,
    pub requested_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JoinRequestDetails {
    #[sqlx(flatten)]
    pub request: JoinRequest,
    pub team_name: String,
    pub hackathon_id: i64,
    pub hackathon_title: String,
    pub user_name: String,
    pub user_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestInput {
    pub team_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestStatusInput {
    pub status: JoinRequestStatus,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum JoinRequestStatus {
        #[default]
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
    }
}

impl JoinRequestStatus {
    /// Only a pending request can be decided, and only once.
    pub fn can_transition_to(self, next: JoinRequestStatus) -> bool {
        matches!(
            (self, next),
            (JoinRequestStatus::Pending, JoinRequestStatus::Approved)
                | (JoinRequestStatus::Pending, JoinRequestStatus::Rejected)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_requests_can_be_decided() {
        assert!(JoinRequestStatus::Pending.can_transition_to(JoinRequestStatus::Approved));
        assert!(JoinRequestStatus::Pending.can_transition_to(JoinRequestStatus::Rejected));
        assert!(!JoinRequestStatus::Pending.can_transition_to(JoinRequestStatus::Pending));
    }

    #[test]
    fn decided_requests_are_terminal() {
        for from in [JoinRequestStatus::Approved, JoinRequestStatus::Rejected] {
            for to in JoinRequestStatus::ALL {
                assert!(!from.can_transition_to(*to), "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn new_requests_start_pending() {
        assert_eq!(JoinRequestStatus::default(), JoinRequestStatus::Pending);
    }

    #[test]
    fn status_round_trips_through_its_name() {
        assert_eq!("approved".parse(), Ok(JoinRequestStatus::Approved));
        assert_eq!(JoinRequestStatus::Rejected.to_string(), "REJECTED");
    }
}
