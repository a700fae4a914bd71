use logdeck_types::{EventKind, EventRecord, TimelineItem};
use std::collections::HashMap;

/// Name given to a tool item synthesized from a result whose
/// `tool_use` was never seen (log truncation, partial writes).
const UNKNOWN_TOOL: &str = "unknown";

/// Build the ordered timeline for a detail view.
///
/// Single pass over the records, with a side map from `tool_use_id` to
/// the index of its in-progress tool item. A later `tool_result`
/// backfills that item in place - output arrives where the `tool_use`
/// was emitted, never reordering the sequence. A result with no
/// matching use becomes a synthetic tool item at its own position.
pub fn build_timeline(records: impl IntoIterator<Item = EventRecord>) -> Vec<TimelineItem> {
    let mut items: Vec<TimelineItem> = Vec::new();
    let mut open_tools: HashMap<String, usize> = HashMap::new();

    for record in records {
        match record.event_type {
            EventKind::Message => {
                let data = record.message_data();
                let (text, thinking) = match data.content {
                    Some(content) => (content.plain_text(), content.thinking_text()),
                    None => (String::new(), Vec::new()),
                };
                items.push(TimelineItem::Message {
                    role: data.role,
                    text,
                    thinking,
                });
            }
            EventKind::ToolUse => {
                let data = record.tool_use_data();
                let id = (!data.tool_use_id.is_empty()).then(|| data.tool_use_id.clone());
                items.push(TimelineItem::Tool {
                    tool_use_id: id.clone(),
                    tool_name: data.tool_name,
                    input: (!data.input.is_null()).then_some(data.input),
                    output: None,
                    is_error: false,
                });
                if let Some(id) = id {
                    open_tools.insert(id, items.len() - 1);
                }
            }
            EventKind::ToolResult => {
                let data = record.tool_result_data();
                let result_output =
                    (!data.content.is_null()).then(|| data.content.clone());

                match open_tools.get(&data.tool_use_id) {
                    Some(&index) => {
                        if let TimelineItem::Tool {
                            output, is_error, ..
                        } = &mut items[index]
                        {
                            *output = result_output;
                            *is_error = data.is_error;
                        }
                    }
                    None => {
                        items.push(TimelineItem::Tool {
                            tool_use_id: (!data.tool_use_id.is_empty())
                                .then(|| data.tool_use_id.clone()),
                            tool_name: UNKNOWN_TOOL.to_string(),
                            input: None,
                            output: result_output,
                            is_error: data.is_error,
                        });
                    }
                }
            }
            EventKind::SessionStart | EventKind::SessionEnd | EventKind::Other => {}
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> EventRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_result_backfills_use_in_place() {
        let items = build_timeline([
            record(json!({"session_id":"s1","event_type":"tool_use",
                "data":{"tool_use_id":"t1","tool_name":"search","input":{"q":"rust"}}})),
            record(json!({"session_id":"s1","event_type":"message",
                "data":{"role":"assistant","content":"looking..."}})),
            record(json!({"session_id":"s1","event_type":"tool_result",
                "data":{"tool_use_id":"t1","content":"ok"}})),
        ]);

        assert_eq!(items.len(), 2);
        let TimelineItem::Tool {
            tool_name,
            input,
            output,
            is_error,
            ..
        } = &items[0]
        else {
            panic!("expected tool item first");
        };
        assert_eq!(tool_name, "search");
        assert_eq!(input.as_ref().unwrap(), &json!({"q":"rust"}));
        assert_eq!(output.as_ref().unwrap(), &json!("ok"));
        assert!(!is_error);
        assert!(matches!(items[1], TimelineItem::Message { .. }));
    }

    #[test]
    fn test_orphan_result_becomes_synthetic_item() {
        let items = build_timeline([record(json!({
            "session_id":"s1","event_type":"tool_result",
            "data":{"tool_use_id":"missing","content":"late","is_error":true}
        }))]);

        assert_eq!(items.len(), 1);
        let TimelineItem::Tool {
            tool_use_id,
            tool_name,
            input,
            output,
            is_error,
        } = &items[0]
        else {
            panic!("expected tool item");
        };
        assert_eq!(tool_use_id.as_deref(), Some("missing"));
        assert_eq!(tool_name, UNKNOWN_TOOL);
        assert!(input.is_none());
        assert_eq!(output.as_ref().unwrap(), &json!("late"));
        assert!(is_error);
    }

    #[test]
    fn test_thinking_routed_out_of_main_text() {
        let items = build_timeline([record(json!({
            "session_id":"s1","event_type":"message",
            "data":{"role":"assistant","content":[
                {"type":"thinking","text":"let me check"},
                {"type":"text","text":"done"}
            ]}
        }))]);

        let TimelineItem::Message { text, thinking, .. } = &items[0] else {
            panic!("expected message item");
        };
        assert_eq!(text, "done");
        assert_eq!(thinking, &vec!["let me check".to_string()]);
    }

    #[test]
    fn test_order_preserved_with_interleaved_tools() {
        let items = build_timeline([
            record(json!({"session_id":"s1","event_type":"tool_use",
                "data":{"tool_use_id":"t1","tool_name":"read"}})),
            record(json!({"session_id":"s1","event_type":"tool_use",
                "data":{"tool_use_id":"t2","tool_name":"write"}})),
            record(json!({"session_id":"s1","event_type":"tool_result",
                "data":{"tool_use_id":"t2","content":"w-ok"}})),
            record(json!({"session_id":"s1","event_type":"tool_result",
                "data":{"tool_use_id":"t1","content":"r-ok"}})),
        ]);

        // Results landed out of order; item positions did not move.
        assert_eq!(items.len(), 2);
        let names: Vec<&str> = items
            .iter()
            .map(|item| match item {
                TimelineItem::Tool { tool_name, .. } => tool_name.as_str(),
                _ => panic!("expected tool items"),
            })
            .collect();
        assert_eq!(names, vec!["read", "write"]);
    }

    #[test]
    fn test_lifecycle_records_emit_no_items() {
        let items = build_timeline([
            record(json!({"session_id":"s1","event_type":"session_start","data":{"cwd":"/a"}})),
            record(json!({"session_id":"s1","event_type":"session_end","data":{}})),
            record(json!({"session_id":"s1","event_type":"other"})),
        ]);
        assert!(items.is_empty());
    }
}
