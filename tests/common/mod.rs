#![allow(dead_code)]

use std::env;

use actix_web::{
    App,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web,
};
use anyhow::Result;
use chrono::{Duration, NaiveDate, Utc};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use serde::de::DeserializeOwned;
use sqlx::SqlitePool;
use tempfile::TempDir;

use buildtogether::database::init_database;
use buildtogether::database::models::*;
use buildtogether::dto::{HackathonDto, TeamDto, UserDto};
use buildtogether::handlers::shared::ApiResponse;
use buildtogether::{AppState, Config, routes};

pub const PASSWORD: &str = "password123";

/// Application wired the same way `main` wires it, minus the network layers.
pub fn build_app(
    state: AppState,
    config: Config,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(config))
        .configure(routes::configure)
}

pub struct TestContext {
    pub pool: SqlitePool,
    pub config: Config,
    pub state: AppState,
    _temp_dir: TempDir,
}

impl TestContext {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());

        let config = Config {
            database_url: database_url.clone(),
            jwt_secret: "test-jwt-secret-key".to_string(),
            jwt_expiration_days: 1,
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            cors_origin: "http://localhost:3000".to_string(),
            default_max_team_size: 5,
            password_hash_cost: 4,
        };

        let pool = init_database(&database_url).await?;
        let state = AppState::new(pool.clone(), &config);

        Ok(TestContext {
            pool,
            config,
            state,
            _temp_dir: temp_dir,
        })
    }

    pub async fn user(&self) -> UserDto {
        self.state
            .users
            .register(MockData::user())
            .await
            .expect("Failed to register test user")
    }

    pub async fn skill(&self, name: &str) -> Skill {
        self.state
            .skills
            .create(SkillInput {
                skill_name: name.to_string(),
            })
            .await
            .expect("Failed to create test skill")
    }

    pub async fn hackathon(&self, created_by: i64, max_team_size: i64) -> HackathonDto {
        self.state
            .hackathons
            .create(MockData::hackathon(created_by, Some(max_team_size)))
            .await
            .expect("Failed to create test hackathon")
    }

    pub async fn team(&self, hackathon_id: i64, created_by: i64) -> TeamDto {
        self.state
            .teams
            .create(MockData::team(hackathon_id, created_by))
            .await
            .expect("Failed to create test team")
    }

    pub async fn record_count(&self, table: &str) -> i64 {
        let query = format!("SELECT COUNT(*) FROM {}", table);
        sqlx::query_scalar::<_, i64>(&query)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count records")
    }
}

// Mock data generators using the fake crate
pub struct MockData;

impl MockData {
    pub fn user() -> CreateUserInput {
        let email: String = SafeEmail().fake();
        CreateUserInput {
            name: Name().fake(),
            email: format!("{}.{}", uuid::Uuid::new_v4().simple(), email),
            password: PASSWORD.to_string(),
            phone: None,
            role: Some(UserRole::Developer),
            github_link: None,
            linkedin_link: None,
        }
    }

    pub fn named_user(name: &str, email: &str) -> CreateUserInput {
        CreateUserInput {
            name: name.to_string(),
            email: email.to_string(),
            ..Self::user()
        }
    }

    pub fn hackathon(created_by: i64, max_team_size: Option<i64>) -> HackathonInput {
        let (start_date, end_date) = Dates::running();
        HackathonInput {
            title: format!("Hack {}", uuid::Uuid::new_v4().simple()),
            description: "Build something in a weekend".to_string(),
            start_date,
            end_date,
            max_team_size,
            created_by,
        }
    }

    pub fn team(hackathon_id: i64, created_by: i64) -> TeamInput {
        TeamInput {
            hackathon_id,
            created_by,
            team_name: format!("{} Team", Name().fake::<String>()),
        }
    }

    pub fn submission(team_id: i64, hackathon_id: i64) -> SubmissionInput {
        SubmissionInput {
            team_id,
            hackathon_id,
            project_title: "Launchpad".to_string(),
            project_description: "Rocket telemetry dashboard".to_string(),
            github_link: Some("https://github.com/example/launchpad".to_string()),
            demo_link: None,
            presentation_link: None,
            technologies: Some("Rust, Actix, SQLite".to_string()),
            features: None,
        }
    }
}

/// Date windows relative to today.
pub struct Dates;

impl Dates {
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    pub fn running() -> (NaiveDate, NaiveDate) {
        let today = Self::today();
        (today - Duration::days(1), today + Duration::days(1))
    }

    pub fn upcoming() -> (NaiveDate, NaiveDate) {
        let today = Self::today();
        (today + Duration::days(10), today + Duration::days(12))
    }

    pub fn finished() -> (NaiveDate, NaiveDate) {
        let today = Self::today();
        (today - Duration::days(12), today - Duration::days(10))
    }
}

pub fn assert_success_response<T>(body: &[u8]) -> T
where
    T: DeserializeOwned,
{
    let response: ApiResponse<T> =
        serde_json::from_slice(body).expect("Failed to parse JSON response");

    assert!(
        response.success,
        "Expected successful response but got error: {:?}",
        response.message
    );
    response.data.expect("Expected data in successful response")
}

pub fn assert_error_response(body: &[u8]) -> String {
    let response: ApiResponse<serde_json::Value> =
        serde_json::from_slice(body).expect("Failed to parse JSON response");

    assert!(!response.success, "Expected an error envelope");
    response.message.expect("Expected a message in error response")
}

pub fn auth_header(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub fn setup_test_env() {
    unsafe {
        env::set_var("RUST_LOG", "debug");
    }
    let _ = env_logger::builder().is_test(true).try_init();
}
