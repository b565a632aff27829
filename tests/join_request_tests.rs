use buildtogether::AppError;
use buildtogether::database::models::{JoinRequestInput, JoinRequestStatus, TeamMemberKey};
use pretty_assertions::assert_eq;

mod common;

use common::TestContext;

struct Fixture {
    ctx: TestContext,
    team_id: i64,
    captain_id: i64,
    applicant_id: i64,
}

async fn fixture() -> Fixture {
    let ctx = TestContext::new().await.unwrap();
    let captain = ctx.user().await;
    let applicant = ctx.user().await;
    let hackathon = ctx.hackathon(captain.id, 4).await;
    let team = ctx.team(hackathon.id, captain.id).await;

    Fixture {
        team_id: team.id,
        captain_id: captain.id,
        applicant_id: applicant.id,
        ctx,
    }
}

#[tokio::test]
async fn test_new_request_is_pending() {
    let f = fixture().await;

    let request = f
        .ctx
        .state
        .join_requests
        .create(JoinRequestInput {
            team_id: f.team_id,
            user_id: f.applicant_id,
        })
        .await
        .unwrap();

    assert_eq!(request.status, JoinRequestStatus::Pending);
    assert_eq!(request.team_id, f.team_id);
    assert_eq!(request.user_id, f.applicant_id);
    assert!(
        f.ctx
            .state
            .join_requests
            .has_pending(f.applicant_id, f.team_id)
            .await
            .unwrap()
    );
    assert_eq!(
        f.ctx
            .state
            .join_requests
            .pending_count_for_team(f.team_id)
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn test_second_pending_request_is_rejected() {
    let f = fixture().await;
    let input = JoinRequestInput {
        team_id: f.team_id,
        user_id: f.applicant_id,
    };

    f.ctx.state.join_requests.create(input.clone()).await.unwrap();
    let again = f.ctx.state.join_requests.create(input).await;

    assert!(matches!(again, Err(AppError::Conflict(_))));
    assert_eq!(f.ctx.record_count("join_requests").await, 1);
}

#[tokio::test]
async fn test_decided_request_allows_a_new_one() {
    let f = fixture().await;
    let input = JoinRequestInput {
        team_id: f.team_id,
        user_id: f.applicant_id,
    };

    let first = f.ctx.state.join_requests.create(input.clone()).await.unwrap();
    f.ctx.state.join_requests.reject(first.id).await.unwrap();
    let second = f.ctx.state.join_requests.create(input).await.unwrap();

    let history = f
        .ctx
        .state
        .join_requests
        .list_by_team_and_user(f.team_id, f.applicant_id)
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, second.id);
    assert_eq!(history[1].status, JoinRequestStatus::Rejected);
}

#[tokio::test]
async fn test_approval_is_final_and_does_not_add_member() {
    let f = fixture().await;
    let request = f
        .ctx
        .state
        .join_requests
        .create(JoinRequestInput {
            team_id: f.team_id,
            user_id: f.applicant_id,
        })
        .await
        .unwrap();

    let approved = f.ctx.state.join_requests.approve(request.id).await.unwrap();
    assert_eq!(approved.status, JoinRequestStatus::Approved);

    let twice = f.ctx.state.join_requests.approve(request.id).await;
    assert!(
        matches!(twice, Err(AppError::Conflict(ref m)) if m == "Join request is already APPROVED")
    );

    let flipped = f.ctx.state.join_requests.reject(request.id).await;
    assert!(matches!(flipped, Err(AppError::Conflict(_))));

    let back_to_pending = f
        .ctx
        .state
        .join_requests
        .update_status(request.id, JoinRequestStatus::Pending)
        .await;
    assert!(matches!(back_to_pending, Err(AppError::Conflict(_))));

    assert!(
        !f.ctx
            .state
            .team_members
            .is_member(TeamMemberKey::new(f.team_id, f.applicant_id))
            .await
            .unwrap()
    );
    assert_eq!(f.ctx.record_count("team_members").await, 0);
}

#[tokio::test]
async fn test_missing_references() {
    let f = fixture().await;

    let no_team = f
        .ctx
        .state
        .join_requests
        .create(JoinRequestInput {
            team_id: 999,
            user_id: f.applicant_id,
        })
        .await;
    assert!(matches!(no_team, Err(AppError::NotFound(_))));

    let no_user = f
        .ctx
        .state
        .join_requests
        .create(JoinRequestInput {
            team_id: f.team_id,
            user_id: 999,
        })
        .await;
    assert!(matches!(no_user, Err(AppError::NotFound(_))));

    assert!(matches!(
        f.ctx.state.join_requests.approve(999).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_listing_by_status_team_and_user() {
    let f = fixture().await;
    let third = f.ctx.user().await;

    let from_applicant = f
        .ctx
        .state
        .join_requests
        .create(JoinRequestInput {
            team_id: f.team_id,
            user_id: f.applicant_id,
        })
        .await
        .unwrap();
    f.ctx
        .state
        .join_requests
        .create(JoinRequestInput {
            team_id: f.team_id,
            user_id: third.id,
        })
        .await
        .unwrap();
    f.ctx.state.join_requests.approve(from_applicant.id).await.unwrap();

    let pending = f
        .ctx
        .state
        .join_requests
        .list_pending_for_team(f.team_id)
        .await
        .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].user_id, third.id);

    let approved = f
        .ctx
        .state
        .join_requests
        .list_by_status(JoinRequestStatus::Approved)
        .await
        .unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].id, from_applicant.id);

    assert_eq!(f.ctx.state.join_requests.list_by_team(f.team_id).await.unwrap().len(), 2);
    assert_eq!(
        f.ctx.state.join_requests.list_by_user(f.applicant_id).await.unwrap().len(),
        1
    );
    assert!(
        f.ctx
            .state
            .join_requests
            .list_by_user(f.captain_id)
            .await
            .unwrap()
            .is_empty()
    );

    assert_eq!(
        f.ctx.state.join_requests.remove_all_for_user(third.id).await.unwrap(),
        1
    );
    f.ctx.state.join_requests.delete(from_applicant.id).await.unwrap();
    assert!(f.ctx.state.join_requests.list().await.unwrap().is_empty());

    f.ctx
        .state
        .join_requests
        .create(JoinRequestInput {
            team_id: f.team_id,
            user_id: third.id,
        })
        .await
        .unwrap();
    assert_eq!(
        f.ctx.state.join_requests.remove_all_for_team(f.team_id).await.unwrap(),
        1
    );
}
