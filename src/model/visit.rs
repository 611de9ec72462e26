//! Visit domain models and parameters.
//!
//! Visits carry their date and time as typed `chrono` values internally; the wire
//! format uses fixed `YYYY-MM-DD` and `HH:MM:SS` strings, parsed and validated in
//! `from_dto` so malformed input is rejected before any database call.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// A user's dining visit at a restaurant.
///
/// `user_id` is the ownership key: only the matching user may update or delete
/// the visit.
#[derive(Debug, Clone, PartialEq)]
pub struct Visit {
    pub id: i32,
    pub user_id: i32,
    pub restaurant_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl Visit {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::visit::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            restaurant_id: entity.restaurant_id,
            date: entity.date,
            time: entity.time,
        }
    }

    pub fn into_dto(self) -> VisitDto {
        VisitDto {
            id: self.id,
            user_id: self.user_id,
            restaurant_id: self.restaurant_id,
            date: self.date.format(DATE_FORMAT).to_string(),
            time: self.time.format(TIME_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VisitDto {
    pub id: i32,
    pub user_id: i32,
    pub restaurant_id: i32,
    /// Visit date in `YYYY-MM-DD` format.
    pub date: String,
    /// Visit time in `HH:MM:SS` format.
    pub time: String,
}

/// Request body for creating a visit.
///
/// Fields are optional at the serde level so a missing field maps to a 400 with a
/// named error instead of a deserialization rejection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateVisitDto {
    pub user_id: Option<i32>,
    pub restaurant_id: Option<i32>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Request body for updating a visit.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateVisitDto {
    pub restaurant_id: Option<i32>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Validated parameters for creating a visit.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateVisitParams {
    pub user_id: i32,
    pub restaurant_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl CreateVisitParams {
    /// Validates a create request body into typed parameters.
    ///
    /// # Returns
    /// - `Ok(CreateVisitParams)` - All fields present and well-formed
    /// - `Err(AppError::BadRequest)` - Missing field or malformed date/time
    pub fn from_dto(dto: CreateVisitDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id: require(dto.user_id, "user_id")?,
            restaurant_id: require(dto.restaurant_id, "restaurant_id")?,
            date: parse_date(&require(dto.date, "date")?)?,
            time: parse_time(&require(dto.time, "time")?)?,
        })
    }
}

/// Validated parameters for updating a visit.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateVisitParams {
    pub id: i32,
    pub restaurant_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl UpdateVisitParams {
    /// Validates an update request body into typed parameters.
    ///
    /// # Arguments
    /// - `id` - Visit ID from the request path
    /// - `dto` - Update request body
    ///
    /// # Returns
    /// - `Ok(UpdateVisitParams)` - All fields present and well-formed
    /// - `Err(AppError::BadRequest)` - Missing field or malformed date/time
    pub fn from_dto(id: i32, dto: UpdateVisitDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            restaurant_id: require(dto.restaurant_id, "restaurant_id")?,
            date: parse_date(&require(dto.date, "date")?)?,
            time: parse_time(&require(dto.time, "time")?)?,
        })
    }
}

fn require<T>(value: Option<T>, name: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::BadRequest(format!("{} is required", name)))
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", value)))
}

fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| AppError::BadRequest(format!("Invalid time '{}', expected HH:MM:SS", value)))
}
