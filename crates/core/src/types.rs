/// All database primary keys are PostgreSQL `uuid` columns.
pub type DbId = uuid::Uuid;

/// Invoice issue dates carry no time-of-day component.
pub type CalendarDate = chrono::NaiveDate;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
