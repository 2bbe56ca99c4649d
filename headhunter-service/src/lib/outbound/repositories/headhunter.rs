use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::headhunter::models::AreaId;
use crate::domain::headhunter::models::EmailAddress;
use crate::domain::headhunter::models::Headhunter;
use crate::domain::headhunter::models::HeadhunterId;
use crate::domain::headhunter::models::Name;
use crate::domain::headhunter::models::NewHeadhunter;
use crate::domain::headhunter::models::Phone;
use crate::domain::headhunter::models::Role;
use crate::domain::headhunter::ports::HeadhunterDirectory;
use crate::headhunter::errors::DirectoryError;

const EMAIL_UNIQUE_CONSTRAINT: &str = "headhunters_email_key";

pub struct PostgresHeadhunterDirectory {
    pool: PgPool,
}

impl PostgresHeadhunterDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HeadhunterRow {
    headhunter_id: Option<i64>,
    name: String,
    phone: String,
    email: String,
    hashed_password: String,
    role: String,
    area_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<HeadhunterRow> for Headhunter {
    type Error = DirectoryError;

    fn try_from(row: HeadhunterRow) -> Result<Self, Self::Error> {
        let corrupt = |e: String| DirectoryError::CorruptRecord(e);

        Ok(Headhunter {
            id: row.headhunter_id.map(HeadhunterId),
            name: Name::new(row.name).map_err(|e| corrupt(e.to_string()))?,
            phone: Phone::new(row.phone).map_err(|e| corrupt(e.to_string()))?,
            email: EmailAddress::new(row.email).map_err(|e| corrupt(e.to_string()))?,
            password_hash: row.hashed_password,
            role: Role::new(row.role).map_err(|e| corrupt(e.to_string()))?,
            area_id: AreaId::new(row.area_id).map_err(|e| corrupt(e.to_string()))?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl HeadhunterDirectory for PostgresHeadhunterDirectory {
    async fn create(&self, headhunter: NewHeadhunter) -> Result<Headhunter, DirectoryError> {
        let row = sqlx::query_as::<_, HeadhunterRow>(
            r#"
            INSERT INTO headhunters (name, phone, email, hashed_password, role, area_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING headhunter_id, name, phone, email, hashed_password, role, area_id,
                      created_at, updated_at
            "#,
        )
        .bind(headhunter.name.as_str())
        .bind(headhunter.phone.as_str())
        .bind(headhunter.email.as_str())
        .bind(&headhunter.password_hash)
        .bind(headhunter.role.as_str())
        .bind(headhunter.area_id.value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT)
                {
                    return DirectoryError::Conflict(headhunter.email.as_str().to_string());
                }
            }
            DirectoryError::DatabaseError(e.to_string())
        })?;

        row.try_into()
    }

    async fn find_by_id(&self, id: HeadhunterId) -> Result<Option<Headhunter>, DirectoryError> {
        let row = sqlx::query_as::<_, HeadhunterRow>(
            r#"
            SELECT headhunter_id, name, phone, email, hashed_password, role, area_id,
                   created_at, updated_at
            FROM headhunters
            WHERE headhunter_id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DirectoryError::DatabaseError(e.to_string()))?;

        row.map(Headhunter::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Headhunter>, DirectoryError> {
        let row = sqlx::query_as::<_, HeadhunterRow>(
            r#"
            SELECT headhunter_id, name, phone, email, hashed_password, role, area_id,
                   created_at, updated_at
            FROM headhunters
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DirectoryError::DatabaseError(e.to_string()))?;

        row.map(Headhunter::try_from).transpose()
    }
}
