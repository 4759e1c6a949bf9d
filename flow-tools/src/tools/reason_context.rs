// Reduces web search records to what the reasoning prompt consumes

use serde_json::Value;

use crate::models::ReasonContext;

pub fn filter_and_transform_data(data: &[Value]) -> Vec<ReasonContext> {
    data.iter()
        .map(|item| ReasonContext {
            content: item.get("content").cloned().unwrap_or(Value::Null),
            question: item.get("question").cloned().unwrap_or(Value::Null),
        })
        .collect()
}
