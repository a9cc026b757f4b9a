//! JSON DTOs for the backend API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend response models field-for-field so serde
//! can decode payloads without lossy adaptation. Fields the client never
//! renders are still carried where cheap, so debugging a live payload stays
//! one `Debug` print away.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Account role controlling which pages and operations are permitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular learner; the default for self-service registration.
    #[default]
    Student,
    /// Can author courses; also granted everything a student can do.
    Instructor,
    /// Full platform administration, implies instructor privileges.
    Admin,
}

/// An authenticated user as returned by `/auth/me` and the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Login email address.
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Account role.
    pub role: Role,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// Profile image URL, if set.
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Credentials payload for `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

/// Successful authentication response: a bearer token plus the profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer credential for subsequent requests.
    pub access_token: String,
    /// Always `"bearer"`.
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Profile of the user the token belongs to.
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// A course in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier (UUID string).
    pub id: String,
    /// Course title.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// Program kind: `"diploma"`, `"bachelor"` or `"certification"`.
    pub course_type: String,
    /// Thumbnail image URL, if any.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Price in USD.
    pub price: f64,
    /// Accredited credit hours.
    pub credit_hours: u32,
    /// Nominal program length in months.
    pub duration_months: u32,
    /// Authoring instructor (UUID string), if assigned.
    #[serde(default)]
    pub instructor_id: Option<String>,
    /// Whether the course is visible in the public catalog.
    pub is_published: bool,
    /// Module outlines; open-ended per-module structure.
    #[serde(default)]
    pub modules: Vec<serde_json::Value>,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// Number of enrolled students.
    #[serde(default)]
    pub enrolled_count: u32,
}

/// A student's enrollment in one course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Unique enrollment identifier (UUID string).
    pub id: String,
    /// Enrolled user (UUID string).
    pub user_id: String,
    /// Course enrolled in (UUID string).
    pub course_id: String,
    /// `"active"` or `"completed"`.
    pub status: String,
    /// Completion percentage, 0.0 to 100.0.
    #[serde(default)]
    pub progress: f64,
    /// Module ids the student has finished.
    #[serde(default)]
    pub completed_modules: Vec<String>,
    /// ISO 8601 enrollment timestamp.
    pub enrolled_at: String,
    /// ISO 8601 completion timestamp, once completed.
    #[serde(default)]
    pub completed_at: Option<String>,
}

/// Payload for `POST /payments/checkout`.
#[derive(Clone, Debug, Serialize)]
pub struct CheckoutRequest {
    /// Course being purchased (UUID string).
    pub course_id: String,
    /// Browser origin, used by the backend to build redirect URLs.
    pub origin_url: String,
}

/// Response from `POST /payments/checkout`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Hosted payment page to redirect the browser to.
    pub checkout_url: String,
    /// Checkout session identifier used for status polling.
    pub session_id: String,
}

/// Response from `GET /payments/status/:session_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentStatus {
    /// Checkout session state, e.g. `"open"`, `"complete"`, `"expired"`.
    pub status: String,
    /// Payment state, `"paid"` once settled.
    pub payment_status: String,
    /// Total charged, in the currency's minor unit.
    #[serde(default)]
    pub amount_total: Option<f64>,
    /// ISO currency code.
    #[serde(default)]
    pub currency: Option<String>,
}

/// An issued course certificate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    /// Unique certificate identifier (UUID string).
    pub id: String,
    /// Holder (UUID string).
    pub user_id: String,
    /// Completed course (UUID string).
    pub course_id: String,
    /// Course title at issuance time.
    pub course_title: String,
    /// Holder's display name at issuance time.
    pub user_name: String,
    /// Credit hours awarded.
    pub credit_hours: u32,
    /// ISO 8601 issuance timestamp.
    pub issued_at: String,
    /// Public verification number.
    pub certificate_number: String,
}

/// Response from `GET /certificates/verify/:number`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CertificateVerification {
    /// Whether the number matches an issued certificate.
    pub valid: bool,
    /// Human-readable failure reason when invalid.
    #[serde(default)]
    pub message: Option<String>,
    /// The matched certificate when valid.
    #[serde(default)]
    pub certificate: Option<Certificate>,
}

/// Payload for `POST /ai/chat`.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    /// The student's message.
    pub content: String,
    /// Lesson text the tutor should ground its answer in, if any.
    pub lesson_context: Option<String>,
    /// Course the conversation is scoped to, if any.
    pub course_id: Option<String>,
}

/// Response from `POST /ai/chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    /// The tutor's answer, markdown formatted.
    pub response: String,
    /// Server-side conversation identifier.
    pub session_id: String,
}

/// Payload for `PUT /users/:id/role`.
#[derive(Clone, Debug, Serialize)]
pub struct RoleUpdateRequest {
    pub new_role: Role,
}

/// Response from `GET /analytics/overview` (admin only).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsOverview {
    pub total_users: u64,
    pub total_courses: u64,
    pub total_enrollments: u64,
    pub total_certificates: u64,
    /// Lifetime revenue from settled payments, USD.
    pub total_revenue: f64,
    /// User counts keyed by role name.
    #[serde(default)]
    pub users_by_role: HashMap<String, u64>,
}

impl Role {
    /// Stable lowercase name as used in API payloads and URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Instructor => "instructor",
            Role::Admin => "admin",
        }
    }
}
