// src/render/mod.rs
//! Output serialization: JSON, Word, and Typst-compiled PDF.

pub mod docx;
pub mod json;
pub mod pdf;
pub mod typst;

pub use pdf::PdfEngine;

/// Requested download format. Unknown values fall back to PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Word,
    Json,
}

impl OutputFormat {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("json") => Self::Json,
            Some("word") => Self::Word,
            _ => Self::Pdf,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Word => "docx",
            Self::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Word => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Json => "application/json; charset=utf-8",
        }
    }
}

/// PDF layout selector. Wire values match the form options; unknown values
/// fall back to the corporate layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateStyle {
    Corporate,
    Minimal,
    Ats,
}

impl TemplateStyle {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("minimalista") => Self::Minimal,
            Some("ats") => Self::Ats,
            _ => Self::Corporate,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Corporate => "corporativo",
            Self::Minimal => "minimalista",
            Self::Ats => "ats",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Corporate => "Two-tone layout with colored section rules",
            Self::Minimal => "Sparse single-column layout with generous margins",
            Self::Ats => "Plain single-column layout for automated screening",
        }
    }

    pub fn catalog() -> [Self; 3] {
        [Self::Corporate, Self::Minimal, Self::Ats]
    }
}

/// Language of section headings in rendered documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Pt,
    En,
}

impl Language {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("en") | Some("english") | Some("inglês") | Some("ingles") => Self::En,
            _ => Self::Pt,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    pub fn labels(&self) -> &'static SectionLabels {
        match self {
            Self::Pt => &PT_LABELS,
            Self::En => &EN_LABELS,
        }
    }
}

/// Per-request rendering choices; the record itself stays format-agnostic.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub style: TemplateStyle,
    pub language: Language,
}

pub struct SectionLabels {
    pub document_title: &'static str,
    pub summary: &'static str,
    pub experience: &'static str,
    pub education: &'static str,
    pub skills: &'static str,
    pub technical_skills: &'static str,
    pub behavioral_skills: &'static str,
    pub other_skills: &'static str,
    pub certifications: &'static str,
    pub projects: &'static str,
    pub languages: &'static str,
    pub extra_courses: &'static str,
    pub awards: &'static str,
    pub volunteer: &'static str,
    pub publications: &'static str,
    pub technologies: &'static str,
    pub workload: &'static str,
}

static PT_LABELS: SectionLabels = SectionLabels {
    document_title: "Currículo",
    summary: "Resumo profissional",
    experience: "Experiência profissional",
    education: "Formação",
    skills: "Habilidades",
    technical_skills: "Técnicas",
    behavioral_skills: "Comportamentais",
    other_skills: "Outras",
    certifications: "Certificações",
    projects: "Projetos",
    languages: "Idiomas",
    extra_courses: "Cursos e workshops",
    awards: "Prêmios e reconhecimentos",
    volunteer: "Voluntariado",
    publications: "Publicações",
    technologies: "Tecnologias",
    workload: "Carga horária",
};

static EN_LABELS: SectionLabels = SectionLabels {
    document_title: "Résumé",
    summary: "Professional summary",
    experience: "Professional experience",
    education: "Education",
    skills: "Skills",
    technical_skills: "Technical",
    behavioral_skills: "Behavioral",
    other_skills: "Other",
    certifications: "Certifications",
    projects: "Projects",
    languages: "Languages",
    extra_courses: "Courses and workshops",
    awards: "Awards and recognition",
    volunteer: "Volunteer work",
    publications: "Publications",
    technologies: "Technologies",
    workload: "Workload",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse_defaults_to_pdf() {
        assert_eq!(OutputFormat::parse(None), OutputFormat::Pdf);
        assert_eq!(OutputFormat::parse(Some("JSON")), OutputFormat::Json);
        assert_eq!(OutputFormat::parse(Some("word")), OutputFormat::Word);
        assert_eq!(OutputFormat::parse(Some("spreadsheet")), OutputFormat::Pdf);
    }

    #[test]
    fn test_template_style_parse() {
        assert_eq!(TemplateStyle::parse(None), TemplateStyle::Corporate);
        assert_eq!(TemplateStyle::parse(Some("ATS")), TemplateStyle::Ats);
        assert_eq!(
            TemplateStyle::parse(Some("minimalista")),
            TemplateStyle::Minimal
        );
        assert_eq!(
            TemplateStyle::parse(Some("anything")),
            TemplateStyle::Corporate
        );
    }

    #[test]
    fn test_language_parse_defaults_to_pt() {
        assert_eq!(Language::parse(None), Language::Pt);
        assert_eq!(Language::parse(Some("EN")), Language::En);
        assert_eq!(Language::parse(Some("klingon")), Language::Pt);
    }
}
