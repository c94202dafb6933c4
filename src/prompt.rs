//! Instruction template sent to the completion service.
//!
//! The reply format requested here is exactly the grammar understood by
//! [`crate::checklist::parse_response`]: `-- ` opens a category and `- `
//! starts a task line with the priority level inline.

/// Priority levels the model is asked to choose from
pub const PRIORITY_LEVELS: [&str; 3] = ["High", "Medium", "Low"];

const TEMPLATE: &str = "\
You are a productivity assistant. Categorize and prioritize the following tasks.

Instructions:
1. Group each task under a relevant category like: Work, Personal, Health, Learning, Finance, etc.
2. For each task, assign exactly one priority level: {levels}.
3. Do not use the word priority in the output. Just show the priority level.

Output format:
-- Category Name
- High: Task description

Tasks:
{tasks}
";

/// Embed raw task text into the instruction template.
///
/// Callers must reject blank input first; the text is trimmed here but
/// otherwise passed through untouched.
pub fn build_prompt(tasks: &str) -> String {
    TEMPLATE
        .replace("{levels}", &level_list())
        .replace("{tasks}", tasks.trim())
}

/// `High, Medium, or Low`
fn level_list() -> String {
    match PRIORITY_LEVELS.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
        Some((last, _)) => last.to_string(),
        None => String::new(),
    }
}
