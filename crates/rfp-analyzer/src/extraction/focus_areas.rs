//! Thematic focus area detection

/// Climate and sustainability vocabulary, in output order
pub const FOCUS_AREA_VOCABULARY: [&str; 20] = [
    "climate change",
    "carbon",
    "renewable energy",
    "sustainability",
    "biodiversity",
    "conservation",
    "reforestation",
    "afforestation",
    "clean energy",
    "emissions",
    "adaptation",
    "mitigation",
    "resilience",
    "environmental",
    "green finance",
    "carbon credits",
    "carbon markets",
    "REDD+",
    "natural capital",
    "ecosystem",
];

/// Vocabulary terms that occur in the text, case-insensitively
///
/// Plain substring containment: "carbon" also matches inside "carbon credits".
pub fn extract_focus_areas(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    FOCUS_AREA_VOCABULARY
        .iter()
        .filter(|term| text_lower.contains(&term.to_lowercase()))
        .map(|term| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_order() {
        let text = "Ecosystem services and Climate Change ADAPTATION.";
        assert_eq!(
            extract_focus_areas(text),
            vec!["climate change", "adaptation", "ecosystem"]
        );
    }

    #[test]
    fn test_overlapping_terms() {
        let areas = extract_focus_areas("Projects generating carbon credits");
        assert_eq!(areas, vec!["carbon", "carbon credits"]);
    }

    #[test]
    fn test_redd_plus_any_case() {
        assert_eq!(extract_focus_areas("REDD+ readiness"), vec!["REDD+"]);
        assert_eq!(extract_focus_areas("redd+ readiness"), vec!["REDD+"]);
        assert!(extract_focus_areas("REDD program").is_empty());
    }

    #[test]
    fn test_each_term_once() {
        let areas = extract_focus_areas("resilience resilience RESILIENCE");
        assert_eq!(areas, vec!["resilience"]);
    }

    #[test]
    fn test_no_match() {
        assert!(extract_focus_areas("").is_empty());
        assert!(extract_focus_areas("Road maintenance tender").is_empty());
    }
}
