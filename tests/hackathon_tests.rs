use buildtogether::AppError;
use buildtogether::database::models::{
    HackathonInput, HackathonPhase, TeamMemberInput, TeamRole, UpdateHackathonInput,
    UpdateTeamInput,
};
use chrono::Duration;
use pretty_assertions::assert_eq;

mod common;

use common::{Dates, MockData, TestContext};

fn hackathon_with_dates(
    created_by: i64,
    title: &str,
    (start_date, end_date): (chrono::NaiveDate, chrono::NaiveDate),
) -> HackathonInput {
    HackathonInput {
        title: title.to_string(),
        start_date,
        end_date,
        ..MockData::hackathon(created_by, None)
    }
}

#[tokio::test]
async fn test_create_hackathon_uses_default_team_size() {
    let ctx = TestContext::new().await.unwrap();
    let organizer = ctx.user().await;

    let hackathon = ctx
        .state
        .hackathons
        .create(MockData::hackathon(organizer.id, None))
        .await
        .unwrap();

    assert_eq!(hackathon.max_team_size, 5);
    assert_eq!(hackathon.created_by, organizer.id);
    assert_eq!(hackathon.phase, HackathonPhase::Active);
}

#[tokio::test]
async fn test_create_hackathon_validation() {
    let ctx = TestContext::new().await.unwrap();
    let organizer = ctx.user().await;
    let today = Dates::today();

    let reversed = hackathon_with_dates(
        organizer.id,
        "Backwards Hack",
        (today + Duration::days(2), today),
    );
    let short_title = hackathon_with_dates(organizer.id, "Hi", Dates::running());
    let no_description = HackathonInput {
        description: "   ".to_string(),
        ..MockData::hackathon(organizer.id, None)
    };
    let too_big = MockData::hackathon(organizer.id, Some(21));
    let too_small = MockData::hackathon(organizer.id, Some(0));

    for input in [reversed, short_title, no_description, too_big, too_small] {
        let result = ctx.state.hackathons.create(input).await;
        assert!(matches!(result, Err(AppError::ValidationFailed(_))));
    }

    let single_day = hackathon_with_dates(organizer.id, "One Day Hack", (today, today));
    let result = ctx.state.hackathons.create(single_day).await.unwrap();
    assert_eq!(result.phase, HackathonPhase::Active);

    let unknown_creator = ctx
        .state
        .hackathons
        .create(MockData::hackathon(999, None))
        .await;
    assert!(matches!(unknown_creator, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_hackathon_titles_are_unique() {
    let ctx = TestContext::new().await.unwrap();
    let organizer = ctx.user().await;

    ctx.state
        .hackathons
        .create(hackathon_with_dates(organizer.id, "Spring Hack", Dates::running()))
        .await
        .unwrap();
    let other = ctx
        .state
        .hackathons
        .create(hackathon_with_dates(organizer.id, "Autumn Hack", Dates::running()))
        .await
        .unwrap();

    let duplicate = ctx
        .state
        .hackathons
        .create(hackathon_with_dates(organizer.id, "Spring Hack", Dates::upcoming()))
        .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let (start_date, end_date) = Dates::upcoming();
    let rename_onto_taken = ctx
        .state
        .hackathons
        .update(
            other.id,
            UpdateHackathonInput {
                title: "Spring Hack".to_string(),
                description: other.description.clone(),
                start_date,
                end_date,
                max_team_size: None,
            },
        )
        .await;
    assert!(matches!(rename_onto_taken, Err(AppError::Conflict(_))));

    let moved = ctx
        .state
        .hackathons
        .update(
            other.id,
            UpdateHackathonInput {
                title: "Autumn Hack".to_string(),
                description: "Rescheduled".to_string(),
                start_date,
                end_date,
                max_team_size: Some(3),
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.phase, HackathonPhase::Upcoming);
    assert_eq!(moved.max_team_size, 3);
    assert_eq!(moved.description, "Rescheduled");
}

#[tokio::test]
async fn test_hackathon_phases_and_lookups() {
    let ctx = TestContext::new().await.unwrap();
    let organizer = ctx.user().await;

    let past = ctx
        .state
        .hackathons
        .create(hackathon_with_dates(organizer.id, "Past Hack", Dates::finished()))
        .await
        .unwrap();
    let running = ctx
        .state
        .hackathons
        .create(hackathon_with_dates(organizer.id, "Live Hack", Dates::running()))
        .await
        .unwrap();
    let future = ctx
        .state
        .hackathons
        .create(hackathon_with_dates(organizer.id, "Future Hack", Dates::upcoming()))
        .await
        .unwrap();

    let ids = |list: Vec<buildtogether::dto::HackathonDto>| -> Vec<i64> {
        list.into_iter().map(|h| h.id).collect()
    };

    assert_eq!(ids(ctx.state.hackathons.completed().await.unwrap()), vec![past.id]);
    assert_eq!(ids(ctx.state.hackathons.active().await.unwrap()), vec![running.id]);
    assert_eq!(ids(ctx.state.hackathons.upcoming().await.unwrap()), vec![future.id]);

    assert_eq!(
        ctx.state.hackathons.phase(past.id).await.unwrap(),
        HackathonPhase::Completed
    );
    assert_eq!(
        ctx.state.hackathons.get_by_title("Future Hack").await.unwrap().id,
        future.id
    );
    assert_eq!(ctx.state.hackathons.search("hack").await.unwrap().len(), 3);
    assert_eq!(ctx.state.hackathons.list().await.unwrap().len(), 3);

    let today = Dates::today();
    let window = ctx
        .state
        .hackathons
        .in_date_range(today - Duration::days(2), today + Duration::days(20))
        .await
        .unwrap();
    assert_eq!(ids(window), vec![running.id, future.id]);

    ctx.state.hackathons.delete(past.id).await.unwrap();
    assert!(matches!(
        ctx.state.hackathons.get(past.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_team_names_are_unique() {
    let ctx = TestContext::new().await.unwrap();
    let alice = ctx.user().await;
    let hackathon = ctx.hackathon(alice.id, 4).await;

    let mut input = MockData::team(hackathon.id, alice.id);
    input.team_name = "Rocketeers".to_string();
    let team = ctx.state.teams.create(input.clone()).await.unwrap();

    assert_eq!(team.team_name, "Rocketeers");
    assert_eq!(team.hackathon_title, hackathon.title);
    assert_eq!(team.created_by_name, alice.name);
    assert_eq!(team.member_count, 0);

    let duplicate = ctx.state.teams.create(input).await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let missing_hackathon = ctx.state.teams.create(MockData::team(999, alice.id)).await;
    assert!(matches!(missing_hackathon, Err(AppError::NotFound(_))));

    let renamed = ctx
        .state
        .teams
        .update(
            team.id,
            UpdateTeamInput {
                team_name: "Stargazers".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.team_name, "Stargazers");
    assert_eq!(ctx.state.teams.get_by_name("Stargazers").await.unwrap().id, team.id);
    assert_eq!(ctx.state.teams.search("gaze").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_team_validation() {
    let ctx = TestContext::new().await.unwrap();
    let alice = ctx.user().await;
    let hackathon = ctx.hackathon(alice.id, 4).await;

    let named = |name: &str| {
        let mut input = MockData::team(hackathon.id, alice.id);
        input.team_name = name.to_string();
        input
    };
    let long_name = "t".repeat(101);

    let cases = [
        named(""),
        named("   "),
        named("A"),
        named(&long_name),
        MockData::team(0, alice.id),
        MockData::team(-3, alice.id),
        MockData::team(hackathon.id, 0),
        MockData::team(hackathon.id, -1),
    ];

    for input in cases {
        let name = input.team_name.clone();
        let result = ctx.state.teams.create(input).await;
        assert!(
            matches!(result, Err(AppError::ValidationFailed(_))),
            "{name:?} was accepted"
        );
    }
    assert_eq!(ctx.record_count("teams").await, 0);

    let shortest = ctx.state.teams.create(named("AB")).await.unwrap();
    assert_eq!(shortest.team_name, "AB");
}

#[tokio::test]
async fn test_team_capacity_tracking() {
    let ctx = TestContext::new().await.unwrap();
    let alice = ctx.user().await;
    let bob = ctx.user().await;
    let hackathon = ctx.hackathon(alice.id, 2).await;
    let team = ctx.team(hackathon.id, alice.id).await;
    let other_team = ctx.team(hackathon.id, bob.id).await;

    assert_eq!(ctx.state.teams.available_spots(team.id).await.unwrap(), 2);

    for (user_id, role) in [(alice.id, TeamRole::TeamLead), (bob.id, TeamRole::Developer)] {
        ctx.state
            .team_members
            .add(TeamMemberInput {
                team_id: team.id,
                user_id,
                role_in_team: role,
            })
            .await
            .unwrap();
    }

    assert_eq!(ctx.state.teams.member_count(team.id).await.unwrap(), 2);
    assert_eq!(ctx.state.teams.available_spots(team.id).await.unwrap(), 0);
    assert!(ctx.state.teams.is_full(team.id).await.unwrap());
    assert_eq!(ctx.state.teams.get(team.id).await.unwrap().member_count, 2);

    let open: Vec<i64> = ctx
        .state
        .teams
        .with_available_spots()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(open, vec![other_team.id]);

    assert_eq!(ctx.state.teams.list_by_member(bob.id).await.unwrap().len(), 1);
    assert_eq!(ctx.state.teams.list_by_creator(bob.id).await.unwrap()[0].id, other_team.id);
    assert_eq!(ctx.state.teams.list_by_hackathon(hackathon.id).await.unwrap().len(), 2);

    assert!(matches!(
        ctx.state.teams.member_count(999).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_deleting_team_removes_memberships() {
    let ctx = TestContext::new().await.unwrap();
    let alice = ctx.user().await;
    let hackathon = ctx.hackathon(alice.id, 3).await;
    let team = ctx.team(hackathon.id, alice.id).await;

    ctx.state
        .team_members
        .add(TeamMemberInput {
            team_id: team.id,
            user_id: alice.id,
            role_in_team: TeamRole::TeamLead,
        })
        .await
        .unwrap();

    ctx.state.teams.delete(team.id).await.unwrap();

    assert_eq!(ctx.record_count("team_members").await, 0);
    assert!(matches!(
        ctx.state.teams.delete(team.id).await,
        Err(AppError::NotFound(_))
    ));
}
