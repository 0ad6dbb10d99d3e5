use alertdesk::api::notification::{
    Condition, LatestTokenPriceResponse, UserNotification, UserNotificationsResponse,
};
use alertdesk::api::weather::{
    AlertFeature, AlertProperties, AlertsResponse, ForecastPeriod, ForecastResponse,
};
use alertdesk::client::ClientError;
use alertdesk::format::*;
use serde_json::json;

fn notification(token: &str, target: &str, condition: Condition) -> UserNotification {
    UserNotification {
        id: json!(1),
        session_id: Some("abc".to_string()),
        token: Some(token.to_string()),
        target_price: Some(target.to_string()),
        condition: Some(condition),
    }
}

#[test]
fn test_alert_with_all_fields_absent_uses_placeholders() {
    let text = format_alert(&AlertProperties::default());

    assert_eq!(
        text,
        "Event: Unknown\nArea: Unknown\nSeverity: Unknown\nStatus: Unknown\nHeadline: No headline\n---"
    );
}

#[test]
fn test_alerts_are_joined_under_state_header() {
    let alerts = AlertsResponse {
        features: vec![
            AlertFeature {
                properties: AlertProperties {
                    event: Some("Flood Warning".to_string()),
                    area_desc: Some("Marin".to_string()),
                    severity: Some("Severe".to_string()),
                    status: Some("Actual".to_string()),
                    headline: Some("Flooding expected".to_string()),
                },
            },
            AlertFeature::default(),
        ],
    };

    let text = format_alerts("CA", Some(&alerts));

    assert!(text.starts_with("Active alerts for CA:\n\nEvent: Flood Warning\nArea: Marin\n"));
    assert!(text.ends_with("Headline: Flooding expected\n---\nEvent: Unknown\nArea: Unknown\nSeverity: Unknown\nStatus: Unknown\nHeadline: No headline\n---"));
}

#[test]
fn test_alerts_empty_and_missing() {
    assert_eq!(
        format_alerts("TX", Some(&AlertsResponse::default())),
        "No active alerts for TX"
    );
    assert_eq!(format_alerts("TX", None), "Failed to retrieve alerts data");
}

#[test]
fn test_period_without_wind_direction_keeps_trailing_space() {
    let period = ForecastPeriod {
        name: Some("Tonight".to_string()),
        temperature: Some(40.0),
        temperature_unit: Some("F".to_string()),
        wind_speed: Some("5 mph".to_string()),
        wind_direction: None,
        short_forecast: Some("Clear".to_string()),
    };

    let text = format_period(&period);

    assert_eq!(
        text,
        "Tonight:\nTemperature: 40°F\nWind: 5 mph \nClear\n---"
    );
    assert!(!text.contains("Wind: 5 mph Unknown"));
}

#[test]
fn test_period_with_all_fields_absent() {
    assert_eq!(
        format_period(&ForecastPeriod::default()),
        "Unknown:\nTemperature: Unknown°F\nWind: Unknown \nNo forecast available\n---"
    );
}

#[test]
fn test_period_treats_empty_strings_as_absent() {
    let period = ForecastPeriod {
        name: Some(String::new()),
        temperature_unit: Some(String::new()),
        ..Default::default()
    };

    assert!(format_period(&period).starts_with("Unknown:\nTemperature: Unknown°F\n"));
}

#[test]
fn test_malformed_period_fields_decode_as_absent() {
    let forecast: ForecastResponse = serde_json::from_value(json!({
        "properties": {
            "periods": [{
                "name": "Today",
                "temperature": "warm",
                "windSpeed": 10,
                "windDirection": "NW",
                "shortForecast": "Sunny"
            }]
        }
    }))
    .unwrap();

    let text = format_period(&forecast.properties.periods[0]);
    assert_eq!(text, "Today:\nTemperature: Unknown°F\nWind: Unknown NW\nSunny\n---");
}

#[test]
fn test_forecast_header_and_empty_periods() {
    let periods = vec![ForecastPeriod {
        name: Some("Today".to_string()),
        temperature: Some(72.0),
        ..Default::default()
    }];

    let text = format_forecast(39.7456, -97.0892, &periods);
    assert!(text.starts_with("Forecast for 39.7456, -97.0892:\n\nToday:\nTemperature: 72°F\n"));

    assert_eq!(format_forecast(1.0, 2.0, &[]), "No forecast periods available");
}

#[test]
fn test_grid_point_message_names_coordinates() {
    let text = grid_point_unavailable(51.5, -0.1);
    assert!(text.starts_with("Failed to retrieve grid point data for coordinates: 51.5, -0.1."));
    assert!(text.contains("only US locations are supported"));
}

#[test]
fn test_empty_notification_list_is_single_line() {
    let empty = Ok(UserNotificationsResponse {
        user_notifications: Some(Vec::new()),
        message: None,
    });
    let absent = Ok(UserNotificationsResponse::default());

    for result in [empty, absent] {
        let text = format_user_notifications("abc", &result);
        assert_eq!(text, "No notifications found for session abc");
        assert!(!text.contains('\n'));
        assert!(!text.contains('#'));
    }
}

#[test]
fn test_notification_list_is_enumerated_from_one() {
    let result = Ok(UserNotificationsResponse {
        user_notifications: Some(vec![
            notification("BTC", "50000", Condition::Above),
            notification("ETH", "1500", Condition::Below),
        ]),
        message: Some("ok".to_string()),
    });

    let text = format_user_notifications("abc", &result);

    assert_eq!(
        text,
        "Notifications for session abc:\n\
         #1 - Token: BTC, Target: 50000, Condition: above\n\
         #2 - Token: ETH, Target: 1500, Condition: below"
    );
}

#[test]
fn test_notification_with_missing_fields_uses_placeholders() {
    let partial = UserNotification {
        token: Some("BTC".to_string()),
        target_price: Some(String::new()),
        ..UserNotification::default()
    };

    assert_eq!(
        format_notification(0, &partial),
        "#1 - Token: BTC, Target: Unknown, Condition: Unknown"
    );
}

#[test]
fn test_notification_errors_embed_detail() {
    let result: Result<UserNotificationsResponse, ClientError> = Err(ClientError::Status(503));
    assert_eq!(
        format_user_notifications("abc", &result),
        "Failed to retrieve notifications: HTTP error! status: 503"
    );

    let result: Result<String, ClientError> = Err(ClientError::Status(500));
    assert_eq!(
        format_registration(&result),
        "Failed to register notification: HTTP error! status: 500"
    );
}

#[test]
fn test_registration_embeds_body() {
    let result = Ok(r#"{"error":"duplicate"}"#.to_string());
    assert_eq!(
        format_registration(&result),
        r#"Notification registered successfully: {"error":"duplicate"}"#
    );
}

#[test]
fn test_token_prices_are_pretty_printed() {
    let result = Ok(LatestTokenPriceResponse {
        latest_token_prices: json!({ "BTC": 64000.5 }),
    });

    assert_eq!(
        format_token_prices(&result),
        "Latest token prices:\n{\n  \"BTC\": 64000.5\n}"
    );
}

#[test]
fn test_text_result_has_exactly_one_block() {
    let result = text_result("hello");
    assert_eq!(result.content.len(), 1);
    assert_eq!(result.is_error, Some(false));
}
