// Structuring prompt templates.

pub const RESUME_PARSE_SYSTEM: &str = "\
You are a precise resume data extractor. \
You MUST respond with valid JSON only. \
Do NOT include any text outside the JSON object. \
Do NOT use markdown code fences. \
Never invent details that are not present in the resume text.";

/// Replace `{format_instructions}` and `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = "\
Parse the following resume text and extract the information into a structured JSON format.
{format_instructions}
{resume_text}";

pub fn build_resume_prompt(format_instructions: &str, resume_text: &str) -> String {
    // Resume text is inserted verbatim; placeholders inside it are never expanded.
    let (head, tail) = RESUME_PARSE_PROMPT_TEMPLATE
        .split_once("{resume_text}")
        .unwrap_or((RESUME_PARSE_PROMPT_TEMPLATE, ""));
    format!(
        "{}{}{}",
        head.replace("{format_instructions}", format_instructions),
        resume_text,
        tail
    )
}
