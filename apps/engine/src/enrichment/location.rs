use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteType {
    Full,
    Hybrid,
    Occasional,
}

/// Structured location information parsed from a posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub country: Option<String>,
    pub state_province: Option<String>,
    pub city: Option<String>,
    pub is_remote: bool,
    pub remote_type: Option<RemoteType>,
}

const US_STATES: &[(&str, &str)] = &[
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
    ("district of columbia", "DC"),
];

const COUNTRY_PATTERNS: &[(&str, &[&str])] = &[
    ("US", &["united states", "usa", "america"]),
    ("CA", &["canada", "canadian"]),
    ("GB", &["united kingdom", "britain", "england", "scotland", "wales"]),
    ("AU", &["australia", "australian"]),
    ("DE", &["germany", "german"]),
    ("FR", &["france", "french"]),
    ("NL", &["netherlands", "dutch"]),
    ("SE", &["sweden", "swedish"]),
    ("NO", &["norway", "norwegian"]),
    ("DK", &["denmark", "danish"]),
];

const REMOTE_PATTERNS: &[(RemoteType, &[&str])] = &[
    (
        RemoteType::Full,
        &[
            "fully remote",
            "completely remote",
            "100% remote",
            "remote only",
            "remote-first",
            "remote work",
            "work from home",
            "wfh",
            "distributed team",
            "anywhere in the world",
            "location independent",
        ],
    ),
    (
        RemoteType::Hybrid,
        &[
            "hybrid",
            "flexible remote",
            "part remote",
            "partial remote",
            "some remote",
            "remote friendly",
        ],
    ),
    (
        RemoteType::Occasional,
        &[
            "remote optional",
            "remote when needed",
            "occasional remote",
            "remote as needed",
            "flexible location",
        ],
    ),
];

/// Parses the posting's location field, with the description as extra context
/// for remote and country signals.
pub fn parse_location(location_text: &str, description: &str) -> LocationInfo {
    if location_text.trim().is_empty() && description.trim().is_empty() {
        return LocationInfo::default();
    }

    let combined = format!("{location_text} {description}").to_lowercase();
    let remote_type = detect_remote_type(&combined);

    let mut country = None;
    let mut state_province = None;
    let mut city = None;

    let parts: Vec<&str> = location_text
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    match parts.as_slice() {
        [] => {}
        [single] => {
            // A lone part may be a city, a state, or a country.
            if let Some(code) = us_state_code(single) {
                state_province = Some(code.to_string());
                country = Some("US".to_string());
            } else {
                city = Some((*single).to_string());
            }
        }
        [first, second, ..] => {
            city = Some((*first).to_string());
            if let Some(code) = us_state_code(second) {
                state_province = Some(code.to_string());
                country = Some("US".to_string());
            } else {
                state_province = Some((*second).to_string());
            }
        }
    }

    if country.is_none() {
        country = detect_country(&combined);
    }

    LocationInfo {
        country,
        state_province,
        city,
        is_remote: remote_type.is_some(),
        remote_type,
    }
}

fn us_state_code(candidate: &str) -> Option<&'static str> {
    let lowered = candidate.to_lowercase();
    US_STATES
        .iter()
        .find(|(name, code)| *name == lowered || code.to_lowercase() == lowered)
        .map(|(_, code)| *code)
}

fn detect_remote_type(text: &str) -> Option<RemoteType> {
    for (remote_type, patterns) in REMOTE_PATTERNS {
        if patterns.iter().any(|p| text.contains(p)) {
            return Some(*remote_type);
        }
    }
    None
}

fn detect_country(text: &str) -> Option<String> {
    for (code, patterns) in COUNTRY_PATTERNS {
        if patterns.iter().any(|p| text.contains(p)) {
            return Some((*code).to_string());
        }
    }
    None
}
