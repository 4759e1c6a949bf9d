// Content safety gate: picks what the user gets to see

pub const GENERIC_ANSWER_OUTPUT: &str = "LLM OUTPUT is deemed inappropriate and will be recorded. Please retry. Please contact your administrator for further assistance.";
pub const GENERIC_ANSWER_INPUT: &str = "Your Input is deemed inappropriate and will be recorded. Please correct your language. Administrator will reach out for further assistance.";

const REJECT: &str = "Reject";
const ACCEPT: &str = "Accept";

/// A rejected input always wins; otherwise the answer passes only when the
/// output check explicitly accepted it.
pub fn format_output(
    safety_result_input: Option<&str>,
    safety_result_output: Option<&str>,
    llm_answer: Option<&str>,
) -> String {
    if safety_result_input == Some(REJECT) {
        GENERIC_ANSWER_INPUT.to_string()
    } else if safety_result_output == Some(ACCEPT) {
        llm_answer.unwrap_or_default().to_string()
    } else {
        GENERIC_ANSWER_OUTPUT.to_string()
    }
}
