// src/render/json.rs

use crate::resume::ResumeRecord;
use anyhow::{Context, Result};

/// Pretty-printed UTF-8 JSON document for the record.
pub fn render_json(record: &ResumeRecord) -> Result<Vec<u8>> {
    serde_json::to_vec_pretty(record).context("Failed to serialize résumé record to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_json_round_trips() {
        let record = ResumeRecord {
            name: "Ana".into(),
            technical_skills: vec!["Rust".into()],
            ..Default::default()
        };
        let bytes = render_json(&record).unwrap();
        let parsed: ResumeRecord = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_render_json_keeps_unicode() {
        let record = ResumeRecord {
            name: "João".into(),
            ..Default::default()
        };
        let text = String::from_utf8(render_json(&record).unwrap()).unwrap();
        assert!(text.contains("João"));
    }
}
