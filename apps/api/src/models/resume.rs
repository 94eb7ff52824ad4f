use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Structured resume as returned by the model.
///
/// Field set and optionality mirror `schema::RESUME_SCHEMA`. Lists are lenient:
/// absent or `null` coerces to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub name: Option<String>,
    pub contact_information: Option<Map<String, Value>>,
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub education: Vec<Map<String, Value>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub certifications: Vec<Certification>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub job_title: String,
    pub company: String,
    pub location: Option<String>,
    pub dates: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub technologies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl Resume {
    /// Converts the typed resume into the plain mapping consumed by the renderer.
    pub fn into_mapping(self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{
        ObjectSchema, CERTIFICATION_SCHEMA, EXPERIENCE_SCHEMA, PROJECT_SCHEMA, RESUME_SCHEMA,
    };
    use serde_json::json;

    fn keys_of(value: Value) -> Vec<String> {
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    fn schema_keys(schema: &ObjectSchema) -> Vec<String> {
        let mut keys: Vec<String> = schema.fields.iter().map(|f| f.name.to_string()).collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_models_agree_with_declared_schema() {
        assert_eq!(
            keys_of(serde_json::to_value(Resume::default()).unwrap()),
            schema_keys(&RESUME_SCHEMA)
        );
        assert_eq!(
            keys_of(serde_json::to_value(Experience::default()).unwrap()),
            schema_keys(&EXPERIENCE_SCHEMA)
        );
        assert_eq!(
            keys_of(serde_json::to_value(Project::default()).unwrap()),
            schema_keys(&PROJECT_SCHEMA)
        );
        assert_eq!(
            keys_of(serde_json::to_value(Certification::default()).unwrap()),
            schema_keys(&CERTIFICATION_SCHEMA)
        );
    }

    #[test]
    fn test_full_resume_deserializes() {
        let json = r#"{
            "name": "Grace Hopper",
            "contact_information": {"email": "grace@navy.mil", "github": "https://github.com/grace"},
            "summary": "Compiler pioneer.",
            "experience": [{
                "job_title": "Rear Admiral",
                "company": "US Navy",
                "location": null,
                "dates": "1943 - 1986",
                "description": ["Led COBOL standardisation", "Found the first bug"]
            }],
            "education": [{"institution": "Yale", "degree": "PhD Mathematics", "dates": "1934"}],
            "projects": [{"name": "A-0", "technologies": ["UNIVAC I"], "description": ["First compiler"]}],
            "certifications": [{"name": "Cert", "issuer": "Org", "date": "1950", "description": null}],
            "skills": ["COBOL", "Mathematics"]
        }"#;

        let resume: Resume = serde_json::from_str(json).unwrap();
        assert_eq!(resume.name.as_deref(), Some("Grace Hopper"));
        assert_eq!(resume.experience.len(), 1);
        assert_eq!(resume.experience[0].location, None);
        assert_eq!(resume.experience[0].description.len(), 2);
        assert_eq!(resume.education[0]["institution"], json!("Yale"));
        assert_eq!(resume.projects[0].technologies, vec!["UNIVAC I"]);
        assert_eq!(resume.certifications[0].date.as_deref(), Some("1950"));
        assert_eq!(resume.skills, vec!["COBOL", "Mathematics"]);
    }

    #[test]
    fn test_missing_and_null_lists_coerce_to_empty() {
        let resume: Resume =
            serde_json::from_str(r#"{"name": "Ada", "skills": null}"#).unwrap();
        assert_eq!(resume.name.as_deref(), Some("Ada"));
        assert!(resume.skills.is_empty());
        assert!(resume.experience.is_empty());
        assert!(resume.contact_information.is_none());
    }

    #[test]
    fn test_missing_required_nested_field_fails() {
        let json = r#"{"experience": [{"company": "Acme", "dates": "2020", "description": []}]}"#;
        assert!(serde_json::from_str::<Resume>(json).is_err());
    }

    #[test]
    fn test_wrong_type_fails() {
        assert!(serde_json::from_str::<Resume>(r#"{"skills": "Rust, Go"}"#).is_err());
        assert!(serde_json::from_str::<Resume>(r#"[]"#).is_err());
    }

    #[test]
    fn test_into_mapping_keeps_nulls_and_nesting() {
        let resume = Resume {
            name: Some("Ada".to_string()),
            projects: vec![Project {
                name: "Engine".to_string(),
                technologies: vec!["Brass".to_string()],
                description: vec![],
            }],
            ..Default::default()
        };
        let mapping = resume.into_mapping().unwrap();
        assert_eq!(mapping["name"], json!("Ada"));
        assert_eq!(mapping["summary"], Value::Null);
        assert_eq!(mapping["projects"][0]["technologies"], json!(["Brass"]));
        assert_eq!(mapping["skills"], json!([]));
    }
}
