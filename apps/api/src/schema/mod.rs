//! Declared resume shape.
//!
//! The schema is plain data: a list of fields with a kind, an optional flag and a
//! description. The same declaration drives two things:
//! - the JSON Schema and format instructions embedded in the structuring prompt
//! - the field set the serde models in `models::resume` must agree with (see tests)
//!
//! Coercion itself is done by serde; nothing here validates values.

use serde_json::{json, Map, Value};

/// Shape constraint of a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    TextList,
    /// Free-form string-keyed mapping.
    Mapping,
    MappingList,
    ObjectList(&'static ObjectSchema),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub optional: bool,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectSchema {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

const fn field(
    name: &'static str,
    kind: FieldKind,
    optional: bool,
    description: &'static str,
) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        optional,
        description,
    }
}

pub const PROJECT_SCHEMA: ObjectSchema = ObjectSchema {
    title: "Project",
    fields: &[
        field("name", FieldKind::Text, false, "The name of the project."),
        field(
            "technologies",
            FieldKind::TextList,
            false,
            "A list of technologies used in the project.",
        ),
        field(
            "description",
            FieldKind::TextList,
            false,
            "A list of bullet points describing the project.",
        ),
    ],
};

pub const EXPERIENCE_SCHEMA: ObjectSchema = ObjectSchema {
    title: "Experience",
    fields: &[
        field("job_title", FieldKind::Text, false, "The job title."),
        field("company", FieldKind::Text, false, "The company name."),
        field(
            "location",
            FieldKind::Text,
            true,
            "The location of the company.",
        ),
        field("dates", FieldKind::Text, false, "The dates of employment."),
        field(
            "description",
            FieldKind::TextList,
            false,
            "A list of responsibilities and achievements.",
        ),
    ],
};

pub const CERTIFICATION_SCHEMA: ObjectSchema = ObjectSchema {
    title: "Certification",
    fields: &[
        field("name", FieldKind::Text, false, "The name of the certification."),
        field("issuer", FieldKind::Text, false, "The issuing organization."),
        field(
            "date",
            FieldKind::Text,
            true,
            "The date the certification was awarded.",
        ),
        field(
            "description",
            FieldKind::Text,
            true,
            "A brief description of the certification.",
        ),
    ],
};

pub const RESUME_SCHEMA: ObjectSchema = ObjectSchema {
    title: "Resume",
    fields: &[
        field("name", FieldKind::Text, true, "The full name of the person."),
        field(
            "contact_information",
            FieldKind::Mapping,
            true,
            "Contact information, including email, phone, and address. \
             Use the keys email, phone, linkedin and github where available.",
        ),
        field(
            "summary",
            FieldKind::Text,
            true,
            "A summary of the person's skills and experience.",
        ),
        field(
            "experience",
            FieldKind::ObjectList(&EXPERIENCE_SCHEMA),
            false,
            "A list of work experiences.",
        ),
        field(
            "education",
            FieldKind::MappingList,
            false,
            "A list of educational qualifications, including degree, institution, and dates.",
        ),
        field(
            "projects",
            FieldKind::ObjectList(&PROJECT_SCHEMA),
            false,
            "A list of projects.",
        ),
        field(
            "certifications",
            FieldKind::ObjectList(&CERTIFICATION_SCHEMA),
            false,
            "A list of certifications.",
        ),
        field("skills", FieldKind::TextList, false, "A list of skills."),
    ],
};

impl FieldKind {
    /// Short human-readable label used in `ObjectSchema::describe`.
    pub fn label(&self) -> String {
        match self {
            FieldKind::Text => "text".to_string(),
            FieldKind::TextList => "list of text".to_string(),
            FieldKind::Mapping => "mapping of text keys to text values".to_string(),
            FieldKind::MappingList => "list of mappings".to_string(),
            FieldKind::ObjectList(schema) => format!("list of {} objects", schema.title),
        }
    }

    fn json_type(&self) -> Value {
        match self {
            FieldKind::Text => json!({ "type": "string" }),
            FieldKind::TextList => json!({ "type": "array", "items": { "type": "string" } }),
            FieldKind::Mapping => json!({ "type": "object" }),
            FieldKind::MappingList => json!({ "type": "array", "items": { "type": "object" } }),
            FieldKind::ObjectList(schema) => json!({
                "type": "array",
                "items": schema.to_json_schema(),
            }),
        }
    }
}

impl ObjectSchema {
    /// Renders the declaration as a JSON Schema object.
    ///
    /// Optional fields accept `null` and are left out of `required`.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for spec in self.fields {
            let mut property = spec.kind.json_type();
            if let Value::Object(obj) = &mut property {
                if spec.optional {
                    if let Some(ty) = obj.get("type").cloned() {
                        obj.insert("type".to_string(), json!([ty, "null"]));
                    }
                }
                obj.insert("description".to_string(), json!(spec.description));
            }
            properties.insert(spec.name.to_string(), property);
            if !spec.optional {
                required.push(spec.name);
            }
        }

        json!({
            "title": self.title,
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// One line per field: name, kind, optionality and description. Nested
    /// object schemas are described after the top-level list.
    pub fn describe(&self) -> String {
        let mut out = format!("{}:\n", self.title);
        let mut nested: Vec<&'static ObjectSchema> = Vec::new();

        for spec in self.fields {
            let optional = if spec.optional { ", optional" } else { "" };
            out.push_str(&format!(
                "- {} ({}{}): {}\n",
                spec.name,
                spec.kind.label(),
                optional,
                spec.description
            ));
            if let FieldKind::ObjectList(schema) = spec.kind {
                if !nested.contains(&schema) {
                    nested.push(schema);
                }
            }
        }

        for schema in nested {
            out.push('\n');
            out.push_str(&schema.describe());
        }
        out
    }

    /// Instructions embedded in the structuring prompt telling the model which
    /// JSON shape to produce.
    pub fn format_instructions(&self) -> String {
        let schema = serde_json::to_string(&self.to_json_schema()).unwrap_or_default();
        format!(
            "Return a single JSON object that conforms to the JSON schema below. \
             Use null for optional values that are not present in the text and [] for empty lists. \
             Do not wrap the object in a \"properties\" key and do not add fields that are not declared.\n\n\
             Field reference:\n{}\nJSON schema:\n```\n{}\n```",
            self.describe(),
            schema
        )
    }
}
