use buildtogether::AppError;
use buildtogether::database::models::{ScoreInput, SubmissionStatus, UpdateSubmissionInput};
use buildtogether::database::repositories::SubmissionRepository;
use pretty_assertions::assert_eq;

mod common;

use common::{MockData, TestContext};

async fn team_in_hackathon(ctx: &TestContext) -> (i64, i64) {
    let captain = ctx.user().await;
    let hackathon = ctx.hackathon(captain.id, 4).await;
    let team = ctx.team(hackathon.id, captain.id).await;
    (team.id, hackathon.id)
}

fn score(value: f64) -> ScoreInput {
    ScoreInput {
        score: value,
        judge_comments: None,
    }
}

#[tokio::test]
async fn test_submit_starts_unscored() {
    let ctx = TestContext::new().await.unwrap();
    let (team_id, hackathon_id) = team_in_hackathon(&ctx).await;

    let submission = ctx
        .state
        .submissions
        .submit(MockData::submission(team_id, hackathon_id))
        .await
        .unwrap();

    assert_eq!(submission.status, SubmissionStatus::Submitted);
    assert_eq!(submission.score, 0.0);
    assert_eq!(submission.judge_comments, None);
    assert_eq!(submission.project_title, "Launchpad");
    assert!(
        ctx.state
            .submissions
            .has_submitted(team_id, hackathon_id)
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_one_submission_per_team_and_hackathon() {
    let ctx = TestContext::new().await.unwrap();
    let (team_id, hackathon_id) = team_in_hackathon(&ctx).await;

    ctx.state
        .submissions
        .submit(MockData::submission(team_id, hackathon_id))
        .await
        .unwrap();
    let again = ctx
        .state
        .submissions
        .submit(MockData::submission(team_id, hackathon_id))
        .await;

    assert!(matches!(again, Err(AppError::Conflict(_))));
    assert_eq!(ctx.record_count("submissions").await, 1);
}

#[tokio::test]
async fn test_submit_validation() {
    let ctx = TestContext::new().await.unwrap();
    let (team_id, hackathon_id) = team_in_hackathon(&ctx).await;

    let mut untitled = MockData::submission(team_id, hackathon_id);
    untitled.project_title = "  ".to_string();
    assert!(matches!(
        ctx.state.submissions.submit(untitled).await,
        Err(AppError::ValidationFailed(_))
    ));

    assert!(matches!(
        ctx.state
            .submissions
            .submit(MockData::submission(999, hackathon_id))
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        ctx.state
            .submissions
            .submit(MockData::submission(team_id, 999))
            .await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_score_bounds() {
    let ctx = TestContext::new().await.unwrap();
    let (team_id, hackathon_id) = team_in_hackathon(&ctx).await;
    let submission = ctx
        .state
        .submissions
        .submit(MockData::submission(team_id, hackathon_id))
        .await
        .unwrap();

    for bad in [-1.0, 101.0, f64::NAN] {
        let result = ctx.state.submissions.update_score(submission.id, score(bad)).await;
        assert!(matches!(result, Err(AppError::ValidationFailed(_))));
    }

    let low = ctx
        .state
        .submissions
        .update_score(submission.id, score(0.0))
        .await
        .unwrap();
    assert_eq!(low.score, 0.0);

    let high = ctx
        .state
        .submissions
        .update_score(
            submission.id,
            ScoreInput {
                score: 100.0,
                judge_comments: Some("Flawless demo".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(high.score, 100.0);
    assert_eq!(high.judge_comments.as_deref(), Some("Flawless demo"));

    // Rescoring without comments keeps the previous ones
    let rescored = ctx
        .state
        .submissions
        .update_score(submission.id, score(88.5))
        .await
        .unwrap();
    assert_eq!(rescored.score, 88.5);
    assert_eq!(rescored.judge_comments.as_deref(), Some("Flawless demo"));

    assert!(matches!(
        ctx.state.submissions.update_score(999, score(50.0)).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_edits_only_while_submitted() {
    let ctx = TestContext::new().await.unwrap();
    let (team_id, hackathon_id) = team_in_hackathon(&ctx).await;
    let submission = ctx
        .state
        .submissions
        .submit(MockData::submission(team_id, hackathon_id))
        .await
        .unwrap();

    let edited = ctx
        .state
        .submissions
        .update(
            submission.id,
            UpdateSubmissionInput {
                project_title: Some("Launchpad 2".to_string()),
                demo_link: Some("https://demo.example.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.project_title, "Launchpad 2");
    assert_eq!(edited.demo_link.as_deref(), Some("https://demo.example.com"));
    assert_eq!(edited.project_description, submission.project_description);
    assert_eq!(edited.github_link, submission.github_link);

    ctx.state
        .submissions
        .update_status(submission.id, SubmissionStatus::UnderReview)
        .await
        .unwrap();

    let locked = ctx
        .state
        .submissions
        .update(
            submission.id,
            UpdateSubmissionInput {
                project_title: Some("Too late".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(locked, Err(AppError::Conflict(_))));

    let undeletable = ctx.state.submissions.delete(submission.id).await;
    assert!(matches!(undeletable, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_status_changes_are_unconstrained() {
    let ctx = TestContext::new().await.unwrap();
    let (team_id, hackathon_id) = team_in_hackathon(&ctx).await;
    let submission = ctx
        .state
        .submissions
        .submit(MockData::submission(team_id, hackathon_id))
        .await
        .unwrap();

    for status in [
        SubmissionStatus::Approved,
        SubmissionStatus::Rejected,
        SubmissionStatus::Submitted,
        SubmissionStatus::UnderReview,
    ] {
        let updated = ctx
            .state
            .submissions
            .update_status(submission.id, status)
            .await
            .unwrap();
        assert_eq!(updated.status, status);
    }

    let under_review = ctx
        .state
        .submissions
        .list_by_status(SubmissionStatus::UnderReview)
        .await
        .unwrap();
    assert_eq!(under_review.len(), 1);
}

#[tokio::test]
async fn test_queries_and_ranking() {
    let ctx = TestContext::new().await.unwrap();
    let captain = ctx.user().await;
    let hackathon = ctx.hackathon(captain.id, 4).await;
    let rockets = ctx.team(hackathon.id, captain.id).await;
    let comets = ctx.team(hackathon.id, captain.id).await;

    let first = ctx
        .state
        .submissions
        .submit(MockData::submission(rockets.id, hackathon.id))
        .await
        .unwrap();
    let mut other = MockData::submission(comets.id, hackathon.id);
    other.project_title = "Orbit Planner".to_string();
    other.technologies = Some("Python, Flask".to_string());
    let second = ctx.state.submissions.submit(other).await.unwrap();

    ctx.state
        .submissions
        .update_score(first.id, score(72.0))
        .await
        .unwrap();
    ctx.state
        .submissions
        .update_score(second.id, score(91.0))
        .await
        .unwrap();

    let top: Vec<i64> = ctx
        .state
        .submissions
        .top(10)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(top, vec![second.id, first.id]);
    assert_eq!(ctx.state.submissions.top(1).await.unwrap().len(), 1);
    assert!(matches!(
        ctx.state.submissions.top(0).await,
        Err(AppError::ValidationFailed(_))
    ));

    let rust = ctx.state.submissions.list_by_technology("rust").await.unwrap();
    assert_eq!(rust.len(), 1);
    assert_eq!(rust[0].id, first.id);

    let orbit = ctx.state.submissions.search_by_title("ORBIT").await.unwrap();
    assert_eq!(orbit.len(), 1);
    assert_eq!(orbit[0].team_name, comets.team_name);

    let band = ctx
        .state
        .submissions
        .list_by_score_range(70.0, 80.0)
        .await
        .unwrap();
    assert_eq!(band.len(), 1);
    assert_eq!(band[0].id, first.id);

    assert_eq!(
        ctx.state
            .submissions
            .list_by_hackathon(hackathon.id)
            .await
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        ctx.state.submissions.list_by_team(rockets.id).await.unwrap().len(),
        1
    );
    assert_eq!(
        ctx.state
            .submissions
            .list_by_team_and_hackathon(comets.id, hackathon.id)
            .await
            .unwrap()[0]
            .id,
        second.id
    );

    ctx.state.submissions.delete(first.id).await.unwrap();
    assert_eq!(ctx.state.submissions.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_reports_missing_rows() {
    let ctx = TestContext::new().await.unwrap();
    let (team_id, hackathon_id) = team_in_hackathon(&ctx).await;
    let submission = ctx
        .state
        .submissions
        .submit(MockData::submission(team_id, hackathon_id))
        .await
        .unwrap();

    let repository = SubmissionRepository::new(ctx.pool.clone());
    let mut tx = ctx.pool.begin().await.unwrap();
    assert!(repository.delete(&mut tx, submission.id).await.unwrap());
    assert!(!repository.delete(&mut tx, submission.id).await.unwrap());
    tx.rollback().await.unwrap();

    ctx.state.submissions.delete(submission.id).await.unwrap();
    assert!(matches!(
        ctx.state.submissions.delete(submission.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(ctx.record_count("submissions").await, 0);
}
