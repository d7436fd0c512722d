// src/web/types.rs

use rocket::form::FromForm;
use rocket::fs::TempFile;
use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder};
use rocket::serde::{Deserialize, Serialize};
use rocket::{Request, Response};

/// One form submission. Scalars are optional (missing fields are absent
/// values, never errors); list sections arrive as parallel repeated fields
/// zipped by position during assembly.
#[derive(FromForm)]
pub struct ResumeForm<'f> {
    pub name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub portfolio_url: Option<String>,
    pub photo_url: Option<String>,
    pub photo_file: Option<TempFile<'f>>,
    pub summary: Option<String>,
    pub publications: Option<String>,

    pub job_url: Option<String>,
    pub output_format: Option<String>,
    pub template_style: Option<String>,
    pub lang: Option<String>,

    pub exp_company: Vec<String>,
    pub exp_role: Vec<String>,
    pub exp_period: Vec<String>,
    pub exp_description: Vec<String>,
    pub exp_location: Vec<String>,
    pub exp_achievements: Vec<String>,
    pub exp_technologies: Vec<String>,

    pub edu_course: Vec<String>,
    pub edu_institution: Vec<String>,
    pub edu_city: Vec<String>,
    pub edu_year: Vec<String>,
    pub edu_status: Vec<String>,

    pub skills_technical: Option<String>,
    pub skills_behavioral: Option<String>,
    pub skills_other: Option<String>,

    pub cert_name: Vec<String>,
    pub cert_institution: Vec<String>,
    pub cert_year: Vec<String>,
    pub cert_code: Vec<String>,

    pub proj_name: Vec<String>,
    pub proj_technologies: Vec<String>,
    pub proj_description: Vec<String>,
    pub proj_link: Vec<String>,

    pub lang_name: Vec<String>,
    pub lang_level: Vec<String>,

    pub course_name: Vec<String>,
    pub course_workload: Vec<String>,
    pub course_institution: Vec<String>,
    pub course_year: Vec<String>,

    pub award_title: Vec<String>,
    pub award_institution: Vec<String>,
    pub award_year: Vec<String>,
    pub award_description: Vec<String>,

    pub vol_organization: Vec<String>,
    pub vol_role: Vec<String>,
    pub vol_period: Vec<String>,
    pub vol_description: Vec<String>,
}

/// Rendered document bytes plus the headers that make the browser download
/// them under the right name.
pub struct DocumentResponse {
    pub data: Vec<u8>,
    pub content_type: &'static str,
    pub filename: String,
}

impl DocumentResponse {
    pub fn new(data: Vec<u8>, content_type: &'static str, filename: String) -> Self {
        Self {
            data,
            content_type,
            filename,
        }
    }
}

impl<'r> Responder<'r, 'static> for DocumentResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let content_type =
            ContentType::parse_flexible(self.content_type).unwrap_or(ContentType::Binary);

        Response::build()
            .header(content_type)
            .raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", self.filename),
            )
            .sized_body(self.data.len(), std::io::Cursor::new(self.data))
            .ok()
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct TextResponse {
    pub success: bool,
    pub message: String,
}

impl TextResponse {
    pub fn success(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn success(message: String, data: T) -> Self {
        Self {
            success: true,
            message,
            data,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct StyleInfo {
    pub name: String,
    pub description: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
    pub suggestions: Vec<String>,
}

impl ErrorResponse {
    pub fn new(error: String, error_code: String, suggestions: Vec<String>) -> Self {
        Self {
            success: false,
            error,
            error_code,
            suggestions,
        }
    }
}

/// Error body plus the HTTP status it travels with.
pub struct ApiError {
    pub status: Status,
    pub body: ErrorResponse,
}

impl ApiError {
    pub fn internal(error: String, error_code: &str, suggestions: Vec<String>) -> Self {
        Self {
            status: Status::InternalServerError,
            body: ErrorResponse::new(error, error_code.to_string(), suggestions),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let payload = serde_json::to_vec(&self.body).map_err(|_| Status::InternalServerError)?;

        Response::build()
            .status(self.status)
            .header(ContentType::JSON)
            .sized_body(payload.len(), std::io::Cursor::new(payload))
            .ok()
    }
}
