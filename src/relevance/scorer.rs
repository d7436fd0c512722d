// src/relevance/scorer.rs
//! Relevance scoring and the reordering policy.
//!
//! The score is a pure function: number of distinct tokens a text shares
//! with the keyword set. Sorting is stable and descending, so entries with
//! equal scores keep their submitted order.

use super::tokenizer::tokens;
use super::KeywordSet;
use crate::resume::ResumeRecord;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Count of distinct tokens shared between `text` and `keywords`.
pub fn score_text(text: &str, keywords: &KeywordSet) -> usize {
    if text.is_empty() || keywords.is_empty() {
        return 0;
    }
    let words: HashSet<String> = tokens(text).collect();
    words.iter().filter(|word| keywords.contains(*word)).count()
}

/// Reorder the three skill lists and the experience list by descending
/// relevance. Every other section keeps its submitted order. A no-op when
/// the keyword set is empty.
pub fn reorder_by_relevance(record: &mut ResumeRecord, keywords: &KeywordSet) {
    if keywords.is_empty() {
        return;
    }

    for skills in [
        &mut record.technical_skills,
        &mut record.behavioral_skills,
        &mut record.other_skills,
    ] {
        skills.sort_by_key(|skill| Reverse(score_text(skill, keywords)));
    }

    record
        .experiences
        .sort_by_key(|entry| Reverse(score_text(&entry.searchable_text(), keywords)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::ExperienceEntry;

    fn keyword_set(words: &[&str]) -> KeywordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_score_empty_inputs() {
        assert_eq!(score_text("anything at all", &KeywordSet::new()), 0);
        assert_eq!(score_text("", &keyword_set(&["rust"])), 0);
    }

    #[test]
    fn test_score_counts_distinct_shared_tokens() {
        let keywords = keyword_set(&["python", "docker"]);
        assert_eq!(score_text("Python and Docker and python again", &keywords), 2);
        assert_eq!(score_text("Excel macros", &keywords), 0);
    }

    #[test]
    fn test_score_requires_min_token_length() {
        // "sql" never tokenizes, so it can never match.
        assert_eq!(score_text("sql sql sql", &keyword_set(&["sql"])), 0);
    }

    #[test]
    fn test_reorder_skills_matching_entries_first() {
        let mut record = ResumeRecord {
            technical_skills: vec!["Python".into(), "Excel".into(), "Docker".into()],
            ..Default::default()
        };
        reorder_by_relevance(&mut record, &keyword_set(&["python", "docker"]));
        assert_eq!(record.technical_skills, vec!["Python", "Docker", "Excel"]);
    }

    #[test]
    fn test_reorder_is_stable_for_equal_scores() {
        let mut record = ResumeRecord {
            other_skills: vec![
                "Comunicação".into(),
                "Liderança".into(),
                "Negociação".into(),
            ],
            ..Default::default()
        };
        reorder_by_relevance(&mut record, &keyword_set(&["docker"]));
        assert_eq!(
            record.other_skills,
            vec!["Comunicação", "Liderança", "Negociação"]
        );
    }

    #[test]
    fn test_reorder_noop_without_keywords() {
        let mut record = ResumeRecord {
            technical_skills: vec!["Zig".into(), "Ada".into()],
            experiences: vec![
                ExperienceEntry {
                    company: "Beta".into(),
                    ..Default::default()
                },
                ExperienceEntry {
                    company: "Alpha".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let before = record.clone();
        reorder_by_relevance(&mut record, &KeywordSet::new());
        assert_eq!(record, before);
    }

    #[test]
    fn test_reorder_experiences_by_concatenated_fields() {
        let mut record = ResumeRecord {
            experiences: vec![
                ExperienceEntry {
                    role: "Analista".into(),
                    company: "Planilhas SA".into(),
                    description: "relatórios mensais".into(),
                    ..Default::default()
                },
                ExperienceEntry {
                    role: "Backend Engineer".into(),
                    company: "Cloud Co".into(),
                    technologies: "Python Docker Kubernetes".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        reorder_by_relevance(&mut record, &keyword_set(&["python", "docker"]));
        assert_eq!(record.experiences[0].company, "Cloud Co");
        assert_eq!(record.experiences[1].company, "Planilhas SA");
    }

    #[test]
    fn test_reorder_leaves_fixed_sections_alone() {
        let mut record = ResumeRecord {
            technical_skills: vec!["Docker".into()],
            education: vec![
                crate::resume::EducationEntry {
                    course: "Letras".into(),
                    ..Default::default()
                },
                crate::resume::EducationEntry {
                    course: "Docker Engineering".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        reorder_by_relevance(&mut record, &keyword_set(&["docker"]));
        assert_eq!(record.education[0].course, "Letras");
    }
}
