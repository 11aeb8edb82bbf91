//! Integration tests: drive a `Light` against a scripted fake bulb.
//!
//! The fake records every datagram it is sent and answers from a queue, so
//! the tests can check both what went over the wire and how the cached
//! configuration reacted.

use std::collections::VecDeque;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use wizard_rs::{
    Brightness, ColorSpec, Error, Kelvin, Light, Payload, ProtocolError, Request, Response, Speed,
    Transport, TransportError,
};

const IP: Ipv4Addr = Ipv4Addr::new(192, 168, 1, 50);

const RED_AT_80: &str =
    r#"{"method":"getPilot","result":{"state":true,"r":255,"g":0,"b":0,"dimming":80}}"#;

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<Result<Vec<u8>, TransportError>>,
    sent: Vec<Value>,
}

/// Fake bulb shared between the test and the `Light` that owns it.
#[derive(Debug, Clone, Default)]
struct FakeBulb(Arc<Mutex<Script>>);

impl FakeBulb {
    fn new() -> Self {
        Self::default()
    }

    fn reply(&self, json: &str) -> &Self {
        self.0
            .lock()
            .unwrap()
            .replies
            .push_back(Ok(json.as_bytes().to_vec()));
        self
    }

    fn echo(&self, params: Value) -> &Self {
        self.reply(&json!({"method": "setPilot", "params": params}).to_string())
    }

    fn silence(&self) -> &Self {
        self.0
            .lock()
            .unwrap()
            .replies
            .push_back(Err(TransportError::Timeout));
        self
    }

    fn sent(&self) -> Vec<Value> {
        self.0.lock().unwrap().sent.clone()
    }
}

impl Transport for FakeBulb {
    async fn round_trip(&self, payload: &[u8]) -> Result<Vec<u8>, TransportError> {
        let mut script = self.0.lock().unwrap();
        script.sent.push(serde_json::from_slice(payload).unwrap());
        script
            .replies
            .pop_front()
            .unwrap_or(Err(TransportError::Timeout))
    }
}

async fn light_with(bulb: &FakeBulb) -> Light<FakeBulb> {
    Light::with_transport(IP, bulb.clone()).await.unwrap()
}

#[tokio::test]
async fn status_reports_absent_fields_as_none() {
    let bulb = FakeBulb::new();
    bulb.reply(RED_AT_80).reply(RED_AT_80);
    let mut light = light_with(&bulb).await;

    let config = light.get_status().await.unwrap().clone();
    assert_eq!(config.power(), Some(true));
    assert_eq!(config.red(), Some(255));
    assert_eq!(config.green(), Some(0));
    assert_eq!(config.blue(), Some(0));
    assert_eq!(config.brightness(), Some(80));
    assert_eq!(config.scene_id(), None);
    assert_eq!(config.speed(), None);
    assert_eq!(config.temp(), None);

    assert_eq!(bulb.sent(), vec![json!({"method": "getPilot"}); 2]);
}

#[test]
fn status_query_omits_params_key() {
    let bytes = Request::get_status().encode().unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), r#"{"method":"getPilot"}"#);
}

#[test]
fn empty_set_command_omits_params_key() {
    let request = Request::set_status(Payload::new());
    assert!(request.params().is_none());
    let bytes = request.encode().unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), r#"{"method":"setPilot"}"#);
}

#[tokio::test]
async fn constructor_fails_without_baseline() {
    let bulb = FakeBulb::new();
    bulb.silence();
    let err = Light::with_transport(IP, bulb.clone()).await.unwrap_err();
    assert!(matches!(err.transport(), Some(TransportError::Timeout)));
    assert!(err.to_string().contains("192.168.1.50"));
}

#[tokio::test]
async fn timeout_leaves_cache_unchanged() {
    let bulb = FakeBulb::new();
    bulb.reply(RED_AT_80).silence();
    let mut light = light_with(&bulb).await;
    let before = light.config().clone();

    let err = light
        .set_brightness(Brightness::create(10).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err.transport(), Some(TransportError::Timeout)));
    assert_eq!(light.config(), &before);
}

#[tokio::test]
async fn toggle_queries_then_negates_power() {
    for (state, expected) in [(true, false), (false, true)] {
        let bulb = FakeBulb::new();
        bulb.reply(RED_AT_80)
            .reply(&json!({"method": "getPilot", "result": {"state": state}}).to_string())
            .echo(json!({"state": expected}));
        let mut light = light_with(&bulb).await;

        light.toggle().await.unwrap();

        let sent = bulb.sent();
        assert_eq!(sent.len(), 3, "baseline + query + switch");
        assert_eq!(sent[1], json!({"method": "getPilot"}));
        assert_eq!(
            sent[2],
            json!({"method": "setPilot", "params": {"state": expected}})
        );
        assert_eq!(light.config().power(), Some(expected));
    }
}

#[tokio::test]
async fn toggle_uses_fresh_state_not_cache() {
    let bulb = FakeBulb::new();
    // Cached as on, but someone switched it off in the meantime.
    bulb.reply(RED_AT_80)
        .reply(r#"{"method":"getPilot","result":{"state":false}}"#)
        .echo(json!({"state": true}));
    let mut light = light_with(&bulb).await;

    light.toggle().await.unwrap();
    assert_eq!(bulb.sent()[2]["params"], json!({"state": true}));
}

#[tokio::test]
async fn hex_color_sends_component_bytes() {
    let bulb = FakeBulb::new();
    bulb.reply(RED_AT_80)
        .echo(json!({"r": 255, "g": 128, "b": 0}));
    let mut light = light_with(&bulb).await;

    light
        .set_color(&ColorSpec::Hex("FF8000".into()))
        .await
        .unwrap();

    assert_eq!(
        bulb.sent()[1],
        json!({"method": "setPilot", "params": {"r": 255, "g": 128, "b": 0}})
    );
    let config = light.config();
    assert_eq!((config.red(), config.green(), config.blue()), (Some(255), Some(128), Some(0)));
    assert_eq!(config.brightness(), Some(80));
}

#[tokio::test]
async fn partial_rgb_only_sends_given_channels() {
    let bulb = FakeBulb::new();
    bulb.reply(RED_AT_80).echo(json!({"b": 200}));
    let mut light = light_with(&bulb).await;

    light
        .set_color(&ColorSpec::Rgb {
            red: None,
            green: None,
            blue: Some(200),
        })
        .await
        .unwrap();

    assert_eq!(bulb.sent()[1]["params"], json!({"b": 200}));
    let config = light.config();
    assert_eq!((config.red(), config.green(), config.blue()), (Some(255), Some(0), Some(200)));
}

#[tokio::test]
async fn invalid_color_is_never_sent() {
    let bulb = FakeBulb::new();
    bulb.reply(RED_AT_80);
    let mut light = light_with(&bulb).await;

    let err = light
        .set_color(&ColorSpec::Named("infrared".into()))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownColor(_)));

    let err = light
        .set_color(&ColorSpec::Hex("12345".into()))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidHexColor(_)));

    assert_eq!(bulb.sent().len(), 1);
}

#[tokio::test]
async fn scene_names_resolve_through_catalog() {
    let bulb = FakeBulb::new();
    bulb.reply(RED_AT_80)
        .echo(json!({"sceneId": 1}))
        .echo(json!({"sceneId": 1000}))
        .echo(json!({"sceneId": 5}));
    let mut light = light_with(&bulb).await;

    light.set_scene_by_name("Ocean").await.unwrap();
    light.set_scene_by_name("Rhythm").await.unwrap();
    light.set_scene(Some(5), Some("Not A Scene")).await.unwrap();

    let ids: Vec<Value> = bulb.sent()[1..]
        .iter()
        .map(|m| m["params"]["sceneId"].clone())
        .collect();
    assert_eq!(ids, vec![json!(1), json!(1000), json!(5)]);
    assert_eq!(light.config().scene_id(), Some(5));
}

#[tokio::test]
async fn scene_listing_needs_no_round_trip() {
    let bulb = FakeBulb::new();
    bulb.reply(RED_AT_80);
    let light = light_with(&bulb).await;

    let scenes: Vec<(String, u16)> = light.list_scenes().collect();
    assert_eq!(scenes.len(), 33);
    assert_eq!(scenes.first(), Some(&("Ocean".to_string(), 1)));
    assert!(scenes.contains(&("Rhythm".to_string(), 1000)));
    assert_eq!(bulb.sent().len(), 1);
}

#[tokio::test]
async fn unresolved_scene_without_id_fails_locally() {
    let bulb = FakeBulb::new();
    bulb.reply(RED_AT_80);
    let mut light = light_with(&bulb).await;

    let err = light.set_scene_by_name("Disco").await.unwrap_err();
    assert!(matches!(err, Error::UnknownScene(name) if name == "Disco"));
    assert_eq!(bulb.sent().len(), 1);
}

#[tokio::test]
async fn success_ack_merges_what_was_sent() {
    let bulb = FakeBulb::new();
    bulb.reply(RED_AT_80)
        .reply(r#"{"method":"setPilot","env":"pro","result":{"success":true}}"#)
        .reply(r#"{"method":"setPilot","env":"pro","result":{"success":true}}"#);
    let mut light = light_with(&bulb).await;

    light.set_temperature(Kelvin::NEUTRAL).await.unwrap();
    light.set_speed(Speed::create(150).unwrap()).await.unwrap();

    assert_eq!(light.config().temp(), Some(4000));
    assert_eq!(light.config().speed(), Some(150));
    assert_eq!(light.config().power(), Some(true));
}

#[tokio::test]
async fn firmware_error_is_not_retryable() {
    let bulb = FakeBulb::new();
    bulb.reply(RED_AT_80).reply(
        r#"{"method":"setPilot","error":{"code":-32602,"message":"Invalid params"}}"#,
    );
    let mut light = light_with(&bulb).await;
    let before = light.config().clone();

    let err = light.turn_off().await.unwrap_err();
    assert!(matches!(
        err.protocol(),
        Some(ProtocolError::Rejected { code: -32602, .. })
    ));
    assert!(!err.is_retryable());
    assert_eq!(light.config(), &before);
}

#[tokio::test]
async fn garbage_reply_is_a_protocol_error() {
    let bulb = FakeBulb::new();
    bulb.reply(RED_AT_80).reply("{\"method\":\"setPilot\",");
    let mut light = light_with(&bulb).await;

    let err = light.turn_on().await.unwrap_err();
    assert!(matches!(err.protocol(), Some(ProtocolError::MalformedJson(_))));
    assert!(err.to_string().starts_with("turnOn on 192.168.1.50 failed"));
}

#[tokio::test]
async fn empty_payload_is_refused() {
    let bulb = FakeBulb::new();
    bulb.reply(RED_AT_80);
    let mut light = light_with(&bulb).await;

    let err = light.set_payload(&Payload::new()).await.unwrap_err();
    assert!(matches!(err, Error::NoAttribute));
    assert_eq!(bulb.sent().len(), 1);
}

#[test]
fn encoded_values_survive_decoding() {
    for value in [0u8, 1, 99, 100, 128, 254, 255] {
        let mut params = Payload::new();
        params.color(&wizard_rs::Color::rgb(value, value, value));
        if let Some(brightness) = Brightness::create(value) {
            params.brightness(&brightness);
        }

        let sent: Value = serde_json::from_slice(&Request::set_status(params.clone()).encode().unwrap())
            .unwrap();
        let reply = json!({"method": "setPilot", "params": sent["params"]}).to_string();
        let accepted = Response::decode(reply.as_bytes())
            .unwrap()
            .accepted(&Payload::new())
            .unwrap();
        assert_eq!(accepted, params, "value {value}");
    }
}
