// src/web/handlers.rs
//! Request handlers: one form submission in, one rendered document out.

use crate::relevance::{reorder_by_relevance, KeywordExtractor};
use crate::render::{
    docx::render_docx, json::render_json, Language, OutputFormat, PdfEngine, RenderOptions,
    TemplateStyle,
};
use crate::resume::{
    AwardEntry, CertificationEntry, CourseEntry, EducationEntry, ExperienceEntry, LanguageEntry,
    ProjectEntry, ResumeRecord, VolunteerEntry,
};
use crate::utils::{
    clip, normalize_period, normalize_text, parse_skill_list, sanitize_filename, MAX_FIELD_LEN,
    MAX_SUMMARY_LEN,
};
use crate::web::types::{
    ApiError, DataResponse, DocumentResponse, ResumeForm, StyleInfo, TextResponse,
};
use anyhow::{Context, Result};
use base64::Engine as _;
use rocket::form::Form;
use rocket::fs::TempFile;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{info, info_span, warn};
use uuid::Uuid;

pub async fn generate_resume_handler(
    form: Form<ResumeForm<'_>>,
    extractor: &State<KeywordExtractor>,
    engine: &State<PdfEngine>,
) -> Result<DocumentResponse, ApiError> {
    let mut form = form.into_inner();

    let format = OutputFormat::parse(form.output_format.as_deref());
    let options = RenderOptions {
        style: TemplateStyle::parse(form.template_style.as_deref()),
        language: Language::parse(form.lang.as_deref()),
    };
    let job_url = form
        .job_url
        .as_deref()
        .unwrap_or_default()
        .trim()
        .to_string();

    let span = info_span!("resume_generation",
        output = ?format,
        style = %options.style.id(),
        with_job_url = %(!job_url.is_empty())
    );
    let _enter = span.enter();

    let photo_url = resolve_photo_field(&mut form).await;
    let mut record = assemble_record(&form, photo_url);

    info!(
        "Record assembled: {} experiences, {} education entries, {} skills",
        record.experiences.len(),
        record.education.len(),
        record.technical_skills.len()
            + record.behavioral_skills.len()
            + record.other_skills.len()
    );

    if !job_url.is_empty() {
        let keywords = extractor.fetch_keywords(&job_url).await;
        reorder_by_relevance(&mut record, &keywords);
    }

    let filename = format!(
        "curriculo_{}.{}",
        sanitize_filename(&record.name),
        format.extension()
    );

    let data = match format {
        OutputFormat::Json => render_json(&record).map_err(|e| {
            ApiError::internal(
                format!("JSON serialization failed: {}", e),
                "SERIALIZATION_ERROR",
                vec!["Try again in a few moments".to_string()],
            )
        })?,
        OutputFormat::Word => render_docx(&record, options.language).map_err(|e| {
            ApiError::internal(
                format!("Word document generation failed: {}", e),
                "DOCX_ERROR",
                vec!["Try again in a few moments".to_string()],
            )
        })?,
        OutputFormat::Pdf => engine.render(&record, &options).await.map_err(|e| {
            ApiError::internal(
                format!("PDF generation failed: {:#}", e),
                "PDF_ENGINE_ERROR",
                vec![
                    "Check that the typst binary is installed on the server".to_string(),
                    "Retry with output_format=word or output_format=json".to_string(),
                ],
            )
        })?,
    };

    info!(
        "Generated {} ({} bytes) as {}",
        filename,
        data.len(),
        format.extension()
    );

    Ok(DocumentResponse::new(data, format.content_type(), filename))
}

pub async fn health_handler() -> Json<TextResponse> {
    Json(TextResponse::success("Résumé builder API is up".to_string()))
}

pub async fn get_styles_handler() -> Json<DataResponse<Vec<StyleInfo>>> {
    let styles = TemplateStyle::catalog()
        .iter()
        .map(|style| StyleInfo {
            name: style.id().to_string(),
            description: style.description().to_string(),
        })
        .collect();

    Json(DataResponse::success(
        "Available PDF template styles".to_string(),
        styles,
    ))
}

// ===== Form extraction =====

/// An uploaded photo wins over the photo URL field; it is inlined as a data
/// URL so the record stays self-contained. Upload read failures are soft
/// and fall back to the URL field.
async fn resolve_photo_field(form: &mut ResumeForm<'_>) -> String {
    if let Some(file) = form.photo_file.as_mut() {
        if file.len() > 0 {
            match photo_data_url(file).await {
                Ok(data_url) => return data_url,
                Err(e) => warn!("Uploaded photo could not be read, ignoring it: {:#}", e),
            }
        }
    }
    clip(form.photo_url.as_deref().unwrap_or_default(), MAX_FIELD_LEN)
}

async fn photo_data_url(file: &mut TempFile<'_>) -> Result<String> {
    let temp_path = std::env::temp_dir().join(format!("photo_upload_{}", Uuid::new_v4()));
    file.persist_to(&temp_path)
        .await
        .context("Failed to persist uploaded photo")?;

    let bytes = tokio::fs::read(&temp_path)
        .await
        .context("Failed to read uploaded photo")?;
    let _ = tokio::fs::remove_file(&temp_path).await;

    let mime = file
        .content_type()
        .map(|ct| ct.to_string())
        .unwrap_or_else(|| "image/jpeg".to_string());
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);
    Ok(format!("data:{};base64,{}", mime, encoded))
}

fn scalar(value: &Option<String>) -> String {
    clip(value.as_deref().unwrap_or_default(), MAX_FIELD_LEN)
}

fn rows(values: &[String]) -> Vec<String> {
    values.iter().map(|v| clip(v, MAX_FIELD_LEN)).collect()
}

/// Zip the parallel form fields into one immutable record.
fn assemble_record(form: &ResumeForm<'_>, photo_url: String) -> ResumeRecord {
    let periods: Vec<String> = rows(&form.exp_period)
        .iter()
        .map(|p| normalize_period(p))
        .collect();

    ResumeRecord {
        name: normalize_text(&scalar(&form.name)),
        title: normalize_text(&scalar(&form.title)),
        email: scalar(&form.email),
        phone: scalar(&form.phone),
        address: normalize_text(&scalar(&form.address)),
        portfolio: scalar(&form.portfolio_url),
        photo_url,
        summary: clip(&normalize_text(&scalar(&form.summary)), MAX_SUMMARY_LEN),
        experiences: ExperienceEntry::zip_rows(
            &rows(&form.exp_company),
            &rows(&form.exp_role),
            &periods,
            &rows(&form.exp_description),
            &rows(&form.exp_location),
            &rows(&form.exp_achievements),
            &rows(&form.exp_technologies),
        ),
        education: EducationEntry::zip_rows(
            &rows(&form.edu_course),
            &rows(&form.edu_institution),
            &rows(&form.edu_city),
            &rows(&form.edu_year),
            &rows(&form.edu_status),
        ),
        technical_skills: parse_skill_list(&scalar(&form.skills_technical)),
        behavioral_skills: parse_skill_list(&scalar(&form.skills_behavioral)),
        other_skills: parse_skill_list(&scalar(&form.skills_other)),
        certifications: CertificationEntry::zip_rows(
            &rows(&form.cert_name),
            &rows(&form.cert_institution),
            &rows(&form.cert_year),
            &rows(&form.cert_code),
        ),
        projects: ProjectEntry::zip_rows(
            &rows(&form.proj_name),
            &rows(&form.proj_technologies),
            &rows(&form.proj_description),
            &rows(&form.proj_link),
        ),
        languages: LanguageEntry::zip_rows(&rows(&form.lang_name), &rows(&form.lang_level)),
        extra_courses: CourseEntry::zip_rows(
            &rows(&form.course_name),
            &rows(&form.course_workload),
            &rows(&form.course_institution),
            &rows(&form.course_year),
        ),
        awards: AwardEntry::zip_rows(
            &rows(&form.award_title),
            &rows(&form.award_institution),
            &rows(&form.award_year),
            &rows(&form.award_description),
        ),
        volunteer_work: VolunteerEntry::zip_rows(
            &rows(&form.vol_organization),
            &rows(&form.vol_role),
            &rows(&form.vol_period),
            &rows(&form.vol_description),
        ),
        publications: scalar(&form.publications),
    }
}
