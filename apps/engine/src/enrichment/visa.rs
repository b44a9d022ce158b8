use serde::{Deserialize, Serialize};
use tracing::debug;

/// Visa sponsorship signal detected in a posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisaSignal {
    pub visa_friendly: bool,
    /// Keywords that fired; negative hits are prefixed with "NOT: ".
    pub keywords: Vec<String>,
    pub confidence: f64,
}

/// Positive sponsorship keywords with confidence weights.
const VISA_KEYWORDS: &[(&str, f64)] = &[
    ("h-1b sponsorship", 1.0),
    ("h1b sponsorship", 1.0),
    ("h-1b", 1.0),
    ("h1b", 1.0),
    ("visa sponsorship", 1.0),
    ("sponsor visa", 1.0),
    ("sponsors visas", 1.0),
    ("will sponsor", 1.0),
    ("can sponsor", 1.0),
    ("eligible for sponsorship", 1.0),
    ("stem opt", 1.0),
    ("immigration sponsorship", 1.0),
    ("tn visa", 0.9),
    ("sponsorship available", 0.9),
    ("sponsorship provided", 0.9),
    ("student visa", 0.8),
    ("work authorization", 0.7),
    ("employment authorization", 0.7),
    ("international candidates", 0.6),
    ("global talent", 0.5),
    ("worldwide remote", 0.4),
];

/// Negative keywords that indicate no sponsorship.
const NEGATIVE_KEYWORDS: &[(&str, f64)] = &[
    ("no sponsorship", -1.0),
    ("no visa sponsorship", -1.0),
    ("no h-1b", -1.0),
    ("no h1b", -1.0),
    ("us citizens only", -1.0),
    ("citizenship required", -1.0),
    ("must be authorized", -0.8),
    ("authorized to work", -0.8),
    ("work authorization required", -0.7),
    ("eligible to work in us", -0.5),
];

/// Summed keyword score above this counts as visa-friendly.
const FRIENDLY_THRESHOLD: f64 = 0.3;

pub fn detect_visa_sponsorship(text: &str) -> VisaSignal {
    if text.trim().is_empty() {
        return VisaSignal::default();
    }

    let lowered = text.to_lowercase();
    let mut keywords = Vec::new();
    let mut total = 0.0_f64;

    for (keyword, score) in VISA_KEYWORDS {
        if lowered.contains(keyword) {
            keywords.push((*keyword).to_string());
            total += score;
        }
    }
    for (keyword, score) in NEGATIVE_KEYWORDS {
        if lowered.contains(keyword) {
            keywords.push(format!("NOT: {keyword}"));
            total += score;
        }
    }

    let confidence = total.abs().min(1.0);
    let visa_friendly = total > FRIENDLY_THRESHOLD;

    if !keywords.is_empty() {
        debug!(
            "Visa detection: friendly={visa_friendly}, confidence={confidence:.2}, keywords={keywords:?}"
        );
    }

    VisaSignal {
        visa_friendly,
        keywords,
        confidence,
    }
}
