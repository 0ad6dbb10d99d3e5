#![allow(dead_code)]

use alertdesk::rmcp::model::{CallToolResult, RawContent};
use alertdesk::{AlertDesk, ServerConfig};

/// Server whose providers both point at `base_url`.
pub fn server_for(base_url: &str) -> AlertDesk {
    let config = ServerConfig::default()
        .with_weather_base_url(base_url)
        .with_notification_base_url(base_url);
    AlertDesk::new(&config).unwrap()
}

/// The single text block of a tool reply.
pub fn text_of(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "expected exactly one content block");
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        other => panic!("Expected text content, got {:?}", other),
    }
}
