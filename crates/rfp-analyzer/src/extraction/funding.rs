//! Funding amount extraction

use once_cell::sync::Lazy;
use regex::Regex;

use super::MAX_MATCHES;

/// Pattern families in priority order
static FUNDING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // $1,000,000 / $2.50 / $5 million / $10K
        r"(?i)\$[\d,]+(?:\.\d{2})?(?:\s*(?:million|billion|M|B|k|K))?",
        // USD 250,000
        r"(?i)USD\s*[\d,]+(?:\.\d{2})?",
        // up to $500,000 / maximum of 20,000
        r"(?i)(?:up to|maximum of|total of)\s*\$?[\d,]+",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid funding regex"))
    .collect()
});

/// Extract funding amounts
///
/// Matches of every family are concatenated in family order without
/// deduplication and cut to the first five, so earlier families win.
pub fn extract_funding_amounts(text: &str) -> Vec<String> {
    FUNDING_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
        .take(MAX_MATCHES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_families() {
        let text = "Awards of $2 million each. Budget: USD 250,000. \
                    Requests up to $75,000 and a total of 1,000,000 overall.";
        assert_eq!(
            extract_funding_amounts(text),
            vec![
                "$2 million",
                "$75,000",
                "USD 250,000",
                "up to $75,000",
                "total of 1,000,000",
            ]
        );
    }

    #[test]
    fn test_scale_suffixes() {
        let amounts = extract_funding_amounts("$10K seed, $3B fund, $1,200.00 fee, $40 billion");
        assert_eq!(amounts, vec!["$10K", "$3B", "$1,200.00", "$40 billion"]);
    }

    #[test]
    fn test_case_insensitive_phrases() {
        assert_eq!(extract_funding_amounts("Maximum Of 20,000"), vec!["Maximum Of 20,000"]);
        assert_eq!(extract_funding_amounts("usd 5"), vec!["usd 5"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let amounts = extract_funding_amounts("$100 and $100");
        assert_eq!(amounts, vec!["$100", "$100"]);
    }

    #[test]
    fn test_earlier_family_wins_truncation() {
        let text = "$1 $2 $3 $4 $5 $6 USD 7 up to 8";
        assert_eq!(extract_funding_amounts(text), vec!["$1", "$2", "$3", "$4", "$5"]);
    }

    #[test]
    fn test_no_match() {
        assert!(extract_funding_amounts("").is_empty());
        assert!(extract_funding_amounts("No money mentioned here.").is_empty());
    }
}
