// src/render/typst.rs
//! Generates the Typst source document compiled into the PDF.
//!
//! User content is always emitted as escaped Typst string literals inside
//! code-mode calls, never as raw markup.

use super::{Language, RenderOptions, TemplateStyle};
use crate::resume::ResumeRecord;
use std::fmt::Write;

/// Escape text into a Typst string literal, quotes included.
fn lit(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out.push('"');
    out
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

fn preamble(style: TemplateStyle, language: Language) -> String {
    let lang = language.code();
    match style {
        TemplateStyle::Corporate => format!(
            "#set page(paper: \"a4\", margin: (x: 1.8cm, y: 1.6cm))\n\
             #set text(font: \"Liberation Sans\", size: 10pt, lang: \"{lang}\")\n\
             #set par(justify: true)\n\
             #show heading.where(level: 2): it => block(above: 14pt, below: 8pt)[\n\
             \x20 #text(fill: rgb(\"#1f4e79\"), weight: \"bold\", size: 12pt, upper(it.body))\n\
             \x20 #v(-4pt)\n\
             \x20 #line(length: 100%, stroke: 0.8pt + rgb(\"#1f4e79\"))\n\
             ]\n"
        ),
        TemplateStyle::Minimal => format!(
            "#set page(paper: \"a4\", margin: (x: 2.4cm, y: 2.2cm))\n\
             #set text(font: \"Liberation Sans\", size: 10pt, lang: \"{lang}\")\n\
             #show heading.where(level: 2): it => block(above: 16pt, below: 8pt)[\n\
             \x20 #text(weight: \"semibold\", size: 11pt, it.body)\n\
             ]\n"
        ),
        TemplateStyle::Ats => format!(
            "#set page(paper: \"a4\", margin: 2cm)\n\
             #set text(font: \"Liberation Sans\", size: 11pt, lang: \"{lang}\")\n\
             #show heading.where(level: 2): it => block(above: 12pt, below: 6pt)[\n\
             \x20 #text(weight: \"bold\", size: 11pt, upper(it.body))\n\
             ]\n"
        ),
    }
}

fn push_section(doc: &mut String, label: &str) {
    let _ = writeln!(doc, "#heading(level: 2, {})", lit(label));
}

fn push_entry_line(doc: &mut String, headline: &str) {
    let _ = writeln!(
        doc,
        "#block(above: 8pt, below: 2pt, text(weight: \"bold\", {}))",
        lit(headline)
    );
}

fn push_paragraph(doc: &mut String, text: &str) {
    let _ = writeln!(doc, "#par(text({}))", lit(text));
}

fn push_detail(doc: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        doc,
        "#par(text(size: 9pt, {}))",
        lit(&format!("{}: {}", label, value))
    );
}

/// Build the complete Typst source for one record.
pub fn render_source(
    record: &ResumeRecord,
    options: &RenderOptions,
    photo_file: Option<&str>,
) -> String {
    let labels = options.language.labels();
    let mut doc = preamble(options.style, options.language);

    if let Some(file) = photo_file {
        let _ = writeln!(
            doc,
            "#place(top + right, image({}, width: 3cm))",
            lit(file)
        );
    }

    let display_name = if record.name.is_empty() {
        labels.document_title
    } else {
        record.name.as_str()
    };
    let _ = writeln!(
        doc,
        "#text(size: 21pt, weight: \"bold\", {})",
        lit(display_name)
    );

    if !record.title.is_empty() {
        let _ = writeln!(
            doc,
            "#block(above: 2pt, text(size: 12pt, {}))",
            lit(&record.title)
        );
    }

    let contact = record.contact_line();
    if !contact.is_empty() {
        let _ = writeln!(
            doc,
            "#block(above: 4pt, text(size: 9pt, {}))",
            lit(&contact)
        );
    }

    if !record.summary.is_empty() {
        push_section(&mut doc, labels.summary);
        push_paragraph(&mut doc, &record.summary);
    }

    if !record.experiences.is_empty() {
        push_section(&mut doc, labels.experience);
        for exp in &record.experiences {
            let headline = joined(&[&exp.role, &exp.company, &exp.period, &exp.location]);
            if !headline.is_empty() {
                push_entry_line(&mut doc, &headline);
            }
            if !exp.description.is_empty() {
                push_paragraph(&mut doc, &exp.description);
            }
            if !exp.achievements.is_empty() {
                push_paragraph(&mut doc, &exp.achievements);
            }
            if !exp.technologies.is_empty() {
                push_detail(&mut doc, labels.technologies, &exp.technologies);
            }
        }
    }

    if !record.education.is_empty() {
        push_section(&mut doc, labels.education);
        for edu in &record.education {
            let line = joined(&[
                &edu.course,
                &edu.institution,
                &edu.city,
                &edu.year,
                &edu.status,
            ]);
            if !line.is_empty() {
                push_entry_line(&mut doc, &line);
            }
        }
    }

    if record.has_skills() {
        push_section(&mut doc, labels.skills);
        for (label, skills) in [
            (labels.technical_skills, &record.technical_skills),
            (labels.behavioral_skills, &record.behavioral_skills),
            (labels.other_skills, &record.other_skills),
        ] {
            if !skills.is_empty() {
                push_detail(&mut doc, label, &skills.join(", "));
            }
        }
    }

    if !record.certifications.is_empty() {
        push_section(&mut doc, labels.certifications);
        for cert in &record.certifications {
            let line = joined(&[
                &cert.name,
                &cert.institution,
                &cert.year,
                &cert.credential_code,
            ]);
            if !line.is_empty() {
                push_entry_line(&mut doc, &line);
            }
        }
    }

    if !record.projects.is_empty() {
        push_section(&mut doc, labels.projects);
        for project in &record.projects {
            let line = joined(&[&project.name, &project.technologies, &project.link]);
            if !line.is_empty() {
                push_entry_line(&mut doc, &line);
            }
            if !project.description.is_empty() {
                push_paragraph(&mut doc, &project.description);
            }
        }
    }

    if !record.languages.is_empty() {
        push_section(&mut doc, labels.languages);
        for lang in &record.languages {
            let line = joined(&[&lang.name, &lang.level]);
            if !line.is_empty() {
                push_paragraph(&mut doc, &line);
            }
        }
    }

    if !record.extra_courses.is_empty() {
        push_section(&mut doc, labels.extra_courses);
        for course in &record.extra_courses {
            let line = joined(&[&course.name, &course.institution, &course.year]);
            if !line.is_empty() {
                push_entry_line(&mut doc, &line);
            }
            if !course.workload.is_empty() {
                push_detail(&mut doc, labels.workload, &course.workload);
            }
        }
    }

    if !record.awards.is_empty() {
        push_section(&mut doc, labels.awards);
        for award in &record.awards {
            let line = joined(&[&award.title, &award.institution, &award.year]);
            if !line.is_empty() {
                push_entry_line(&mut doc, &line);
            }
            if !award.description.is_empty() {
                push_paragraph(&mut doc, &award.description);
            }
        }
    }

    if !record.volunteer_work.is_empty() {
        push_section(&mut doc, labels.volunteer);
        for vol in &record.volunteer_work {
            let line = joined(&[&vol.organization, &vol.role, &vol.period]);
            if !line.is_empty() {
                push_entry_line(&mut doc, &line);
            }
            if !vol.description.is_empty() {
                push_paragraph(&mut doc, &vol.description);
            }
        }
    }

    if !record.publications.is_empty() {
        push_section(&mut doc, labels.publications);
        push_paragraph(&mut doc, &record.publications);
    }

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::ExperienceEntry;

    fn options() -> RenderOptions {
        RenderOptions {
            style: TemplateStyle::Corporate,
            language: Language::Pt,
        }
    }

    #[test]
    fn test_lit_escapes_special_characters() {
        assert_eq!(lit(r#"a "quoted" \path"#), r#""a \"quoted\" \\path""#);
        assert_eq!(lit("line\nbreak"), "\"line\\nbreak\"");
    }

    #[test]
    fn test_render_source_contains_name_and_sections() {
        let record = ResumeRecord {
            name: "João".into(),
            summary: "Dez anos de backend.".into(),
            experiences: vec![ExperienceEntry {
                role: "Dev".into(),
                company: "Acme".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let source = render_source(&record, &options(), None);
        assert!(source.contains("\"João\""));
        assert!(source.contains("\"Resumo profissional\""));
        assert!(source.contains("\"Dev | Acme\""));
    }

    #[test]
    fn test_render_source_skips_empty_sections() {
        let source = render_source(&ResumeRecord::default(), &options(), None);
        assert!(!source.contains("Experiência"));
        assert!(!source.contains("Habilidades"));
        // Header falls back to the generic document title.
        assert!(source.contains("\"Currículo\""));
    }

    #[test]
    fn test_render_source_embeds_photo_when_present() {
        let source = render_source(&ResumeRecord::default(), &options(), Some("profile.png"));
        assert!(source.contains("image(\"profile.png\""));
    }

    #[test]
    fn test_styles_produce_distinct_preambles() {
        let corporate = preamble(TemplateStyle::Corporate, Language::Pt);
        let minimal = preamble(TemplateStyle::Minimal, Language::Pt);
        let ats = preamble(TemplateStyle::Ats, Language::En);
        assert!(corporate.contains("#1f4e79"));
        assert!(!minimal.contains("#1f4e79"));
        assert!(ats.contains("lang: \"en\""));
    }

    #[test]
    fn test_english_labels() {
        let record = ResumeRecord {
            summary: "Ten years of backend work.".into(),
            ..Default::default()
        };
        let opts = RenderOptions {
            style: TemplateStyle::Ats,
            language: Language::En,
        };
        let source = render_source(&record, &opts, None);
        assert!(source.contains("\"Professional summary\""));
    }
}
