// src/resume.rs
//! Résumé record structures assembled from one form submission.
//!
//! Entries are value objects: built once per request, never mutated after
//! assembly. List-like sections arrive as parallel repeated form fields and
//! are zipped by position into fixed-shape entry structs; a row whose fields
//! are all blank after trimming is dropped.

use serde::{Deserialize, Serialize};

// ===== Record =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub portfolio: String,
    pub photo_url: String,
    pub summary: String,
    pub experiences: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub technical_skills: Vec<String>,
    pub behavioral_skills: Vec<String>,
    pub other_skills: Vec<String>,
    pub certifications: Vec<CertificationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub languages: Vec<LanguageEntry>,
    pub extra_courses: Vec<CourseEntry>,
    pub awards: Vec<AwardEntry>,
    pub volunteer_work: Vec<VolunteerEntry>,
    pub publications: String,
}

// ===== Entries =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    pub location: String,
    pub achievements: String,
    pub technologies: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub course: String,
    pub institution: String,
    pub city: String,
    pub year: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationEntry {
    pub name: String,
    pub institution: String,
    pub year: String,
    pub credential_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub technologies: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageEntry {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourseEntry {
    pub name: String,
    pub workload: String,
    pub institution: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwardEntry {
    pub title: String,
    pub institution: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolunteerEntry {
    pub organization: String,
    pub role: String,
    pub period: String,
    pub description: String,
}

// ===== Assembly =====

/// Shortest length among the parallel columns of one section. Rows past the
/// shortest column are ignored, matching positional zip semantics.
fn row_count(columns: &[&[String]]) -> usize {
    columns.iter().map(|c| c.len()).min().unwrap_or(0)
}

fn all_blank(fields: &[&str]) -> bool {
    fields.iter().all(|f| f.trim().is_empty())
}

impl ExperienceEntry {
    pub fn zip_rows(
        companies: &[String],
        roles: &[String],
        periods: &[String],
        descriptions: &[String],
        locations: &[String],
        achievements: &[String],
        technologies: &[String],
    ) -> Vec<Self> {
        let n = row_count(&[
            companies,
            roles,
            periods,
            descriptions,
            locations,
            achievements,
            technologies,
        ]);
        (0..n)
            .filter(|&i| {
                !all_blank(&[
                    &companies[i],
                    &roles[i],
                    &periods[i],
                    &descriptions[i],
                    &locations[i],
                    &achievements[i],
                    &technologies[i],
                ])
            })
            .map(|i| Self {
                company: companies[i].clone(),
                role: roles[i].clone(),
                period: periods[i].clone(),
                description: descriptions[i].clone(),
                location: locations[i].clone(),
                achievements: achievements[i].clone(),
                technologies: technologies[i].clone(),
            })
            .collect()
    }

    /// Text scored against the job-posting keywords when reordering
    /// experience entries.
    pub fn searchable_text(&self) -> String {
        [
            self.role.as_str(),
            self.company.as_str(),
            self.description.as_str(),
            self.achievements.as_str(),
            self.technologies.as_str(),
        ]
        .join(" ")
    }
}

impl EducationEntry {
    pub fn zip_rows(
        courses: &[String],
        institutions: &[String],
        cities: &[String],
        years: &[String],
        statuses: &[String],
    ) -> Vec<Self> {
        let n = row_count(&[courses, institutions, cities, years, statuses]);
        (0..n)
            .filter(|&i| {
                !all_blank(&[
                    &courses[i],
                    &institutions[i],
                    &cities[i],
                    &years[i],
                    &statuses[i],
                ])
            })
            .map(|i| Self {
                course: courses[i].clone(),
                institution: institutions[i].clone(),
                city: cities[i].clone(),
                year: years[i].clone(),
                status: statuses[i].clone(),
            })
            .collect()
    }
}

impl CertificationEntry {
    pub fn zip_rows(
        names: &[String],
        institutions: &[String],
        years: &[String],
        codes: &[String],
    ) -> Vec<Self> {
        let n = row_count(&[names, institutions, years, codes]);
        (0..n)
            .filter(|&i| !all_blank(&[&names[i], &institutions[i], &years[i], &codes[i]]))
            .map(|i| Self {
                name: names[i].clone(),
                institution: institutions[i].clone(),
                year: years[i].clone(),
                credential_code: codes[i].clone(),
            })
            .collect()
    }
}

impl ProjectEntry {
    pub fn zip_rows(
        names: &[String],
        technologies: &[String],
        descriptions: &[String],
        links: &[String],
    ) -> Vec<Self> {
        let n = row_count(&[names, technologies, descriptions, links]);
        (0..n)
            .filter(|&i| !all_blank(&[&names[i], &technologies[i], &descriptions[i], &links[i]]))
            .map(|i| Self {
                name: names[i].clone(),
                technologies: technologies[i].clone(),
                description: descriptions[i].clone(),
                link: links[i].clone(),
            })
            .collect()
    }
}

impl LanguageEntry {
    pub fn zip_rows(names: &[String], levels: &[String]) -> Vec<Self> {
        let n = row_count(&[names, levels]);
        (0..n)
            .filter(|&i| !all_blank(&[&names[i], &levels[i]]))
            .map(|i| Self {
                name: names[i].clone(),
                level: levels[i].clone(),
            })
            .collect()
    }
}

impl CourseEntry {
    pub fn zip_rows(
        names: &[String],
        workloads: &[String],
        institutions: &[String],
        years: &[String],
    ) -> Vec<Self> {
        let n = row_count(&[names, workloads, institutions, years]);
        (0..n)
            .filter(|&i| !all_blank(&[&names[i], &workloads[i], &institutions[i], &years[i]]))
            .map(|i| Self {
                name: names[i].clone(),
                workload: workloads[i].clone(),
                institution: institutions[i].clone(),
                year: years[i].clone(),
            })
            .collect()
    }
}

impl AwardEntry {
    pub fn zip_rows(
        titles: &[String],
        institutions: &[String],
        years: &[String],
        descriptions: &[String],
    ) -> Vec<Self> {
        let n = row_count(&[titles, institutions, years, descriptions]);
        (0..n)
            .filter(|&i| !all_blank(&[&titles[i], &institutions[i], &years[i], &descriptions[i]]))
            .map(|i| Self {
                title: titles[i].clone(),
                institution: institutions[i].clone(),
                year: years[i].clone(),
                description: descriptions[i].clone(),
            })
            .collect()
    }
}

impl VolunteerEntry {
    pub fn zip_rows(
        organizations: &[String],
        roles: &[String],
        periods: &[String],
        descriptions: &[String],
    ) -> Vec<Self> {
        let n = row_count(&[organizations, roles, periods, descriptions]);
        (0..n)
            .filter(|&i| !all_blank(&[&organizations[i], &roles[i], &periods[i], &descriptions[i]]))
            .map(|i| Self {
                organization: organizations[i].clone(),
                role: roles[i].clone(),
                period: periods[i].clone(),
                description: descriptions[i].clone(),
            })
            .collect()
    }
}

impl ResumeRecord {
    /// Contact fields joined for the one-line contact header, skipping blanks.
    pub fn contact_line(&self) -> String {
        [
            self.email.as_str(),
            self.phone.as_str(),
            self.address.as_str(),
            self.portfolio.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" | ")
    }

    pub fn has_skills(&self) -> bool {
        !self.technical_skills.is_empty()
            || !self.behavioral_skills.is_empty()
            || !self.other_skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_zip_rows_drops_blank_entries() {
        let entries = EducationEntry::zip_rows(
            &rows(&["Computer Science", "  ", "Design"]),
            &rows(&["UFMG", "   ", ""]),
            &rows(&["", "", ""]),
            &rows(&["2019", "", "2021"]),
            &rows(&["completed", " ", ""]),
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].course, "Computer Science");
        assert_eq!(entries[1].course, "Design");
    }

    #[test]
    fn test_zip_rows_truncates_to_shortest_column() {
        let entries = LanguageEntry::zip_rows(
            &rows(&["Portuguese", "English", "Spanish"]),
            &rows(&["native", "fluent"]),
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].name, "English");
    }

    #[test]
    fn test_zip_rows_keeps_partial_entries() {
        let entries = ExperienceEntry::zip_rows(
            &rows(&[""]),
            &rows(&["Engineer"]),
            &rows(&[""]),
            &rows(&[""]),
            &rows(&[""]),
            &rows(&[""]),
            &rows(&[""]),
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].role, "Engineer");
        assert!(entries[0].company.is_empty());
    }

    #[test]
    fn test_searchable_text_field_order() {
        let entry = ExperienceEntry {
            company: "Acme".into(),
            role: "Dev".into(),
            period: "2020".into(),
            description: "built things".into(),
            location: "Lisbon".into(),
            achievements: "shipped".into(),
            technologies: "rust".into(),
        };
        assert_eq!(entry.searchable_text(), "Dev Acme built things shipped rust");
    }

    #[test]
    fn test_contact_line_skips_blanks() {
        let record = ResumeRecord {
            email: "a@b.c".into(),
            portfolio: "example.com".into(),
            ..Default::default()
        };
        assert_eq!(record.contact_line(), "a@b.c | example.com");
    }

    #[test]
    fn test_json_round_trip() {
        let record = ResumeRecord {
            name: "João da Silva".into(),
            title: "Engenheiro de Software".into(),
            email: "joao@example.com".into(),
            summary: "Dez anos de experiência.".into(),
            experiences: vec![ExperienceEntry {
                company: "Acme".into(),
                role: "Dev".into(),
                ..Default::default()
            }],
            technical_skills: vec!["Rust".into(), "Python".into()],
            languages: vec![LanguageEntry {
                name: "Português".into(),
                level: "nativo".into(),
            }],
            publications: "Artigo X (2021)".into(),
            ..Default::default()
        };
        let json = serde_json::to_string_pretty(&record).unwrap();
        let parsed: ResumeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let parsed: ResumeRecord = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(parsed.name, "Ana");
        assert!(parsed.experiences.is_empty());
        assert!(parsed.summary.is_empty());
    }
}
