//! Template context assembly.
//!
//! Every reader is defensive: a field may be absent, `null`, or of an
//! unexpected type. Missing values fall back to a placeholder, and a section
//! with nothing to show is left empty so the template omits it.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_TAGLINE: &str = "Professional Profile";
pub const NOT_AVAILABLE: &str = "N/A";

// ────────────────────────────────────────────────────────────────────────────
// Context types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PortfolioContext<'a> {
    pub name: Cow<'a, str>,
    pub tagline: Cow<'a, str>,
    pub contact: ContactLinks<'a>,
    pub summary: Option<Cow<'a, str>>,
    pub experience: Vec<ExperienceCard<'a>>,
    pub education: Vec<EducationCard<'a>>,
    pub projects: Vec<ProjectCard<'a>>,
    pub certifications: Vec<CertificationCard<'a>>,
    pub skills: Vec<Cow<'a, str>>,
    pub year: i32,
}

#[derive(Debug, Default, Serialize)]
pub struct ContactLinks<'a> {
    pub email: Option<Cow<'a, str>>,
    pub phone: Option<Cow<'a, str>>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExperienceCard<'a> {
    pub job_title: Cow<'a, str>,
    pub company: Cow<'a, str>,
    pub location: Cow<'a, str>,
    pub dates: Cow<'a, str>,
    pub bullets: Vec<Cow<'a, str>>,
}

#[derive(Debug, Serialize)]
pub struct EducationCard<'a> {
    pub institution: Cow<'a, str>,
    pub degree: Cow<'a, str>,
    pub dates: Cow<'a, str>,
}

#[derive(Debug, Serialize)]
pub struct ProjectCard<'a> {
    pub name: Cow<'a, str>,
    pub technologies: String,
    pub bullets: Vec<Cow<'a, str>>,
}

#[derive(Debug, Serialize)]
pub struct CertificationCard<'a> {
    pub name: Cow<'a, str>,
    pub issuer: Cow<'a, str>,
    pub date: Cow<'a, str>,
    pub description: Cow<'a, str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Value readers
// ────────────────────────────────────────────────────────────────────────────

/// Scalar text of `value[key]`. Strings are borrowed, numbers and booleans are
/// stringified, anything else counts as absent.
pub fn field_text<'a>(value: &'a Value, key: &str) -> Option<Cow<'a, str>> {
    scalar_text(value.get(key)?)
}

fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

fn text_or<'a>(value: &'a Value, key: &str, fallback: &'static str) -> Cow<'a, str> {
    field_text(value, key).unwrap_or(Cow::Borrowed(fallback))
}

fn non_empty_text<'a>(value: &'a Value, key: &str) -> Option<Cow<'a, str>> {
    field_text(value, key).filter(|v| !v.is_empty())
}

/// List items of `value[key]`. A bare scalar is read as a one-item list; any
/// other non-list value yields nothing.
fn list_items<'a>(value: &'a Value, key: &str) -> Vec<&'a Value> {
    match value.get(key) {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(v) if v.is_string() || v.is_number() => vec![v],
        _ => Vec::new(),
    }
}

fn text_list<'a>(value: &'a Value, key: &str) -> Vec<Cow<'a, str>> {
    list_items(value, key)
        .into_iter()
        .filter_map(scalar_text)
        .collect()
}

/// Truthiness of a scalar field.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(map)) => !map.is_empty(),
    }
}

/// Link target for a profile URL. `http(s)` URLs are kept, scheme-less values
/// such as `github.com/ada` get `https://`, and any other scheme is dropped.
pub fn web_href(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let lower = raw.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Some(raw.to_string())
    } else if !raw.is_empty() && !raw.contains(':') {
        Some(format!("https://{raw}"))
    } else {
        None
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────────────────────────────────

impl<'a> PortfolioContext<'a> {
    pub fn from_mapping(data: &'a Value, year: i32) -> Self {
        Self {
            name: text_or(data, "name", DEFAULT_NAME),
            tagline: tagline(data),
            contact: data
                .get("contact_information")
                .map(ContactLinks::from_value)
                .unwrap_or_default(),
            summary: summary(data),
            experience: cards(data, "experience", ExperienceCard::from_value),
            education: cards(data, "education", EducationCard::from_value),
            projects: cards(data, "projects", ProjectCard::from_value),
            certifications: cards(data, "certifications", CertificationCard::from_value),
            skills: text_list(data, "skills"),
            year,
        }
    }
}

fn cards<'a, T>(data: &'a Value, key: &str, build: fn(&'a Value) -> T) -> Vec<T> {
    list_items(data, key).into_iter().map(build).collect()
}

/// First job title, or the default tagline.
fn tagline(data: &Value) -> Cow<'_, str> {
    match data
        .get("experience")
        .and_then(Value::as_array)
        .and_then(|jobs| jobs.first())
    {
        Some(first) => text_or(first, "job_title", DEFAULT_TAGLINE),
        None => Cow::Borrowed(DEFAULT_TAGLINE),
    }
}

fn summary(data: &Value) -> Option<Cow<'_, str>> {
    let summary = data.get("summary");
    if !is_present(summary) {
        return None;
    }
    summary.and_then(scalar_text).filter(|s| !s.is_empty())
}

impl<'a> ContactLinks<'a> {
    fn from_value(contact: &'a Value) -> Self {
        Self {
            email: non_empty_text(contact, "email"),
            phone: non_empty_text(contact, "phone"),
            linkedin: non_empty_text(contact, "linkedin").and_then(|v| web_href(&v)),
            github: non_empty_text(contact, "github").and_then(|v| web_href(&v)),
        }
    }
}

impl<'a> ExperienceCard<'a> {
    fn from_value(item: &'a Value) -> Self {
        Self {
            job_title: text_or(item, "job_title", NOT_AVAILABLE),
            company: text_or(item, "company", NOT_AVAILABLE),
            location: text_or(item, "location", ""),
            dates: text_or(item, "dates", NOT_AVAILABLE),
            bullets: text_list(item, "description"),
        }
    }
}

impl<'a> EducationCard<'a> {
    fn from_value(item: &'a Value) -> Self {
        Self {
            institution: text_or(item, "institution", NOT_AVAILABLE),
            degree: text_or(item, "degree", NOT_AVAILABLE),
            dates: text_or(item, "dates", NOT_AVAILABLE),
        }
    }
}

impl<'a> ProjectCard<'a> {
    fn from_value(item: &'a Value) -> Self {
        Self {
            name: text_or(item, "name", NOT_AVAILABLE),
            technologies: text_list(item, "technologies").join(", "),
            bullets: text_list(item, "description"),
        }
    }
}

impl<'a> CertificationCard<'a> {
    fn from_value(item: &'a Value) -> Self {
        Self {
            name: text_or(item, "name", NOT_AVAILABLE),
            issuer: text_or(item, "issuer", NOT_AVAILABLE),
            date: text_or(item, "date", NOT_AVAILABLE),
            description: text_or(item, "description", ""),
        }
    }
}
