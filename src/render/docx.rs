// src/render/docx.rs
//! Word-document renderer built on docx-rs.

use super::Language;
use crate::resume::ResumeRecord;
use anyhow::{Context, Result};
use docx_rs::{
    AbstractNumbering, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat, Numbering,
    NumberingId, Paragraph, Run, Start,
};

const BULLET_NUMBERING: usize = 1;

// Run sizes are half-points.
const NAME_SIZE: usize = 48;
const TITLE_SIZE: usize = 26;
const HEADING_SIZE: usize = 28;

fn name_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).size(NAME_SIZE).bold())
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).size(HEADING_SIZE).bold())
}

fn body(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn bullet(text: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(text))
        .numbering(
            NumberingId::new(BULLET_NUMBERING),
            IndentLevel::new(0),
        )
}

/// Non-empty parts joined with " | ".
fn joined(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Build the Word document and return its bytes.
pub fn render_docx(record: &ResumeRecord, language: Language) -> Result<Vec<u8>> {
    let labels = language.labels();

    let mut doc = Docx::new()
        .add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING).add_level(Level::new(
            0,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new("•"),
            LevelJc::new("left"),
        )))
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING));

    let display_name = if record.name.is_empty() {
        labels.document_title
    } else {
        record.name.as_str()
    };
    doc = doc.add_paragraph(name_paragraph(display_name));

    if !record.title.is_empty() {
        doc = doc.add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(record.title.as_str()).size(TITLE_SIZE)),
        );
    }

    let contact = record.contact_line();
    if !contact.is_empty() {
        doc = doc.add_paragraph(body(&contact));
    }

    if !record.summary.is_empty() {
        doc = doc.add_paragraph(heading(labels.summary));
        doc = doc.add_paragraph(body(&record.summary));
    }

    if !record.experiences.is_empty() {
        doc = doc.add_paragraph(heading(labels.experience));
        for exp in &record.experiences {
            let headline = joined(&[&exp.role, &exp.company, &exp.period, &exp.location]);
            if !headline.is_empty() {
                doc = doc.add_paragraph(bullet(&headline));
            }
            if !exp.description.is_empty() {
                doc = doc.add_paragraph(body(&exp.description));
            }
            if !exp.achievements.is_empty() {
                doc = doc.add_paragraph(body(&exp.achievements));
            }
            if !exp.technologies.is_empty() {
                doc = doc.add_paragraph(body(&format!(
                    "{}: {}",
                    labels.technologies, exp.technologies
                )));
            }
        }
    }

    if !record.education.is_empty() {
        doc = doc.add_paragraph(heading(labels.education));
        for edu in &record.education {
            let line = joined(&[
                &edu.course,
                &edu.institution,
                &edu.city,
                &edu.year,
                &edu.status,
            ]);
            if !line.is_empty() {
                doc = doc.add_paragraph(bullet(&line));
            }
        }
    }

    if record.has_skills() {
        doc = doc.add_paragraph(heading(labels.skills));
        for (label, skills) in [
            (labels.technical_skills, &record.technical_skills),
            (labels.behavioral_skills, &record.behavioral_skills),
            (labels.other_skills, &record.other_skills),
        ] {
            if !skills.is_empty() {
                doc = doc.add_paragraph(body(&format!("{}: {}", label, skills.join(", "))));
            }
        }
    }

    if !record.certifications.is_empty() {
        doc = doc.add_paragraph(heading(labels.certifications));
        for cert in &record.certifications {
            let line = joined(&[
                &cert.name,
                &cert.institution,
                &cert.year,
                &cert.credential_code,
            ]);
            if !line.is_empty() {
                doc = doc.add_paragraph(bullet(&line));
            }
        }
    }

    if !record.projects.is_empty() {
        doc = doc.add_paragraph(heading(labels.projects));
        for project in &record.projects {
            let line = joined(&[&project.name, &project.technologies, &project.link]);
            if !line.is_empty() {
                doc = doc.add_paragraph(bullet(&line));
            }
            if !project.description.is_empty() {
                doc = doc.add_paragraph(body(&project.description));
            }
        }
    }

    if !record.languages.is_empty() {
        doc = doc.add_paragraph(heading(labels.languages));
        for lang in &record.languages {
            let line = joined(&[&lang.name, &lang.level]);
            if !line.is_empty() {
                doc = doc.add_paragraph(bullet(&line));
            }
        }
    }

    if !record.extra_courses.is_empty() {
        doc = doc.add_paragraph(heading(labels.extra_courses));
        for course in &record.extra_courses {
            let line = joined(&[
                &course.name,
                &course.workload,
                &course.institution,
                &course.year,
            ]);
            if !line.is_empty() {
                doc = doc.add_paragraph(bullet(&line));
            }
        }
    }

    if !record.awards.is_empty() {
        doc = doc.add_paragraph(heading(labels.awards));
        for award in &record.awards {
            let line = joined(&[&award.title, &award.institution, &award.year]);
            if !line.is_empty() {
                doc = doc.add_paragraph(bullet(&line));
            }
            if !award.description.is_empty() {
                doc = doc.add_paragraph(body(&award.description));
            }
        }
    }

    if !record.volunteer_work.is_empty() {
        doc = doc.add_paragraph(heading(labels.volunteer));
        for vol in &record.volunteer_work {
            let line = joined(&[&vol.organization, &vol.role, &vol.period]);
            if !line.is_empty() {
                doc = doc.add_paragraph(bullet(&line));
            }
            if !vol.description.is_empty() {
                doc = doc.add_paragraph(body(&vol.description));
            }
        }
    }

    if !record.publications.is_empty() {
        doc = doc.add_paragraph(heading(labels.publications));
        doc = doc.add_paragraph(body(&record.publications));
    }

    let mut buffer = std::io::Cursor::new(Vec::new());
    doc.build()
        .pack(&mut buffer)
        .context("Failed to assemble Word document")?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::ExperienceEntry;

    #[test]
    fn test_render_docx_produces_zip_container() {
        let record = ResumeRecord {
            name: "Maria".into(),
            summary: "Engenheira.".into(),
            experiences: vec![ExperienceEntry {
                company: "Acme".into(),
                role: "Dev".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let bytes = render_docx(&record, Language::Pt).unwrap();
        // OOXML containers are ZIP archives.
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_render_docx_accepts_empty_record() {
        let bytes = render_docx(&ResumeRecord::default(), Language::En).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_joined_skips_empty_parts() {
        assert_eq!(joined(&["a", "", "b"]), "a | b");
        assert_eq!(joined(&["", ""]), "");
    }
}
