//! Question catalog and dependent-option resolution.

use serde::{Deserialize, Serialize};

/// Answer-store keys for every question in the catalog.
///
/// The ids double as wire field names on submission, so they stay in the
/// platform's camelCase where the original form used it.
pub mod ids {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const ROLE: &str = "role";
    pub const BUSINESS_NAME: &str = "businessName";
    pub const INDUSTRY: &str = "industry";
    pub const SPECIFIC: &str = "specific";
    pub const COUNTRY: &str = "country";
    pub const CITY: &str = "city";
    pub const STREET_ADDRESS: &str = "streetAddress";
    pub const IMAGE: &str = "image";
    pub const CLUB: &str = "club";
    pub const PROFESSION: &str = "profession";
    pub const PHONE: &str = "phone";
    pub const PASSWORD: &str = "password";

    /// Full catalog in presentation order: base, then seller, then final.
    pub const ALL: &[&str] = &[
        NAME,
        EMAIL,
        ROLE,
        BUSINESS_NAME,
        INDUSTRY,
        SPECIFIC,
        COUNTRY,
        CITY,
        STREET_ADDRESS,
        IMAGE,
        CLUB,
        PROFESSION,
        PHONE,
        PASSWORD,
    ];

    /// Questions asked only of sellers.
    pub const SELLER: &[&str] = &[
        BUSINESS_NAME,
        INDUSTRY,
        SPECIFIC,
        COUNTRY,
        CITY,
        STREET_ADDRESS,
        IMAGE,
    ];
}

/// Input kind of a question. Also selects its validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    ShortText,
    Email,
    SingleSelect,
    Password,
    File,
    Telephone,
}

/// Declared intent of the registering user.
///
/// Gates the seller question block: buyers skip it entirely, it is not
/// merely hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Buy,
    Sell,
}

impl Role {
    /// Wire value, exactly as stored in the answer store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
        }
    }

    /// Parse a stored answer string. Anything but the exact wire values
    /// (including the unanswered empty string) is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Buy" => Some(Self::Buy),
            "Sell" => Some(Self::Sell),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single question presented by the wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDefinition {
    /// Unique key, shared with the answer store.
    pub id: &'static str,
    /// Prompt shown to the user.
    pub text: &'static str,
    pub kind: QuestionKind,
    /// Hint text shown alongside the input.
    pub placeholder: &'static str,
    /// Choices for `SingleSelect`; empty for every other kind.
    pub options: Vec<String>,
}

impl QuestionDefinition {
    fn new(id: &'static str, text: &'static str, kind: QuestionKind, placeholder: &'static str) -> Self {
        Self {
            id,
            text,
            kind,
            placeholder,
            options: Vec::new(),
        }
    }

    fn select(id: &'static str, text: &'static str, placeholder: &'static str, options: Vec<String>) -> Self {
        Self {
            id,
            text,
            kind: QuestionKind::SingleSelect,
            placeholder,
            options,
        }
    }
}

/// A record fetched from the platform directory (professions, clubs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    pub id: String,
    pub name: String,
}

/// Club roster used when the directory returns no club data.
const DEFAULT_CLUBS: &[&str] = &[
    "Simba SC",
    "Young Africans SC",
    "Azam FC",
    "Coastal Union",
    "Mtibwa Sugar",
    "KMC FC",
    "Singida Big Stars",
    "Dodoma Jiji FC",
];

/// Immutable option data the catalog depends on.
///
/// Built once at startup from fetched directory records plus the static
/// industry table, then passed explicitly wherever options are resolved.
/// All resolvers are pure and deterministic, safe to call on every
/// sequence recomputation.
#[derive(Debug, Clone)]
pub struct OptionSources {
    industry_specifications: Vec<(String, Vec<String>)>,
    professions: Vec<DirectoryRecord>,
    clubs: Vec<DirectoryRecord>,
}

impl OptionSources {
    pub fn new(professions: Vec<DirectoryRecord>, clubs: Vec<DirectoryRecord>) -> Self {
        Self {
            industry_specifications: default_industry_table(),
            professions,
            clubs,
        }
    }

    /// Replace the built-in industry table.
    pub fn with_industry_table(mut self, table: Vec<(String, Vec<String>)>) -> Self {
        self.industry_specifications = table;
        self
    }

    /// Specializations offered for an industry. Unknown industries resolve
    /// to an empty list, not an error.
    pub fn specification_options(&self, industry: &str) -> &[String] {
        self.industry_specifications
            .iter()
            .find(|(name, _)| name == industry)
            .map(|(_, specs)| specs.as_slice())
            .unwrap_or(&[])
    }

    /// Industry names in table order.
    pub fn industry_options(&self) -> Vec<String> {
        self.industry_specifications
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Profession display names, preserving fetch order.
    pub fn profession_options(&self) -> Vec<String> {
        self.professions.iter().map(|r| r.name.clone()).collect()
    }

    /// Resolve a profession display name back to its record id. The UI
    /// works with display names; the wire carries the id.
    pub fn profession_id_for(&self, name: &str) -> Option<&str> {
        self.professions
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.id.as_str())
    }

    /// Club names: the fetched list when present, otherwise the built-in
    /// roster. One deliberate source with a documented fallback.
    pub fn club_options(&self) -> Vec<String> {
        if self.clubs.is_empty() {
            DEFAULT_CLUBS.iter().map(|s| s.to_string()).collect()
        } else {
            self.clubs.iter().map(|r| r.name.clone()).collect()
        }
    }
}

/// Industry → specializations table shipped with the platform.
fn default_industry_table() -> Vec<(String, Vec<String>)> {
    let table: &[(&str, &[&str])] = &[
        ("Retail", &["Wholesale", "Boutique"]),
        ("Agriculture", &["Crop Farming", "Livestock", "Agro-processing"]),
        ("Manufacturing", &["Food & Beverage", "Textiles", "Furniture"]),
        ("Hospitality", &["Hotel", "Restaurant", "Catering"]),
        ("Technology", &["Software", "IT Services", "Electronics Repair"]),
        ("Construction", &["Residential", "Commercial", "Materials Supply"]),
        ("Transport", &["Passenger", "Freight", "Logistics"]),
    ];
    table
        .iter()
        .map(|(industry, specs)| {
            (
                industry.to_string(),
                specs.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
}

/// Questions every registrant answers first.
pub fn base_questions() -> Vec<QuestionDefinition> {
    vec![
        QuestionDefinition::new(ids::NAME, "What is your full name?", QuestionKind::ShortText, "Full name"),
        QuestionDefinition::new(ids::EMAIL, "What is your email address?", QuestionKind::Email, "name@example.com"),
        QuestionDefinition::select(
            ids::ROLE,
            "Are you here to buy or to sell?",
            "Select one",
            vec!["Buy".to_string(), "Sell".to_string()],
        ),
    ]
}

/// Questions asked only of sellers. The specialization options depend on
/// the industry answered two steps earlier.
pub fn seller_questions(sources: &OptionSources, industry: &str) -> Vec<QuestionDefinition> {
    vec![
        QuestionDefinition::new(
            ids::BUSINESS_NAME,
            "What is your business called?",
            QuestionKind::ShortText,
            "Business name",
        ),
        QuestionDefinition::select(
            ids::INDUSTRY,
            "Which industry are you in?",
            "Select an industry",
            sources.industry_options(),
        ),
        QuestionDefinition::select(
            ids::SPECIFIC,
            "What do you specialize in?",
            "Select a specialization",
            sources.specification_options(industry).to_vec(),
        ),
        QuestionDefinition::new(
            ids::COUNTRY,
            "Which country do you operate in?",
            QuestionKind::ShortText,
            "Country",
        ),
        QuestionDefinition::new(ids::CITY, "Which city?", QuestionKind::ShortText, "City"),
        QuestionDefinition::new(
            ids::STREET_ADDRESS,
            "What is your street address?",
            QuestionKind::ShortText,
            "Street address",
        ),
        QuestionDefinition::new(
            ids::IMAGE,
            "Upload a photo of your business.",
            QuestionKind::File,
            "Path to an image file",
        ),
    ]
}

/// Questions every registrant answers last.
pub fn final_questions(sources: &OptionSources) -> Vec<QuestionDefinition> {
    vec![
        QuestionDefinition::select(
            ids::CLUB,
            "Which club do you support?",
            "Select a club",
            sources.club_options(),
        ),
        QuestionDefinition::select(
            ids::PROFESSION,
            "What is your profession?",
            "Select a profession",
            sources.profession_options(),
        ),
        QuestionDefinition::new(
            ids::PHONE,
            "What is your phone number?",
            QuestionKind::Telephone,
            "e.g. 0712 345 678",
        ),
        QuestionDefinition::new(
            ids::PASSWORD,
            "Choose a password.",
            QuestionKind::Password,
            "At least 6 characters",
        ),
    ]
}
