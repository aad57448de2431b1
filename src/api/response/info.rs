use super::Payload;
use serde::Deserialize;
use serde_json::Value;

/* Passed through as received; only absent keys are rejected */
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub etotal: Value,
    pub emonth: Value,
    pub etoday: Value,
    pub eyear: Value,
    pub sn: Value,
    pub alias: Value,
    pub gsn: Value,
    pub status: Value,
    pub run_status: Value,
    pub r#type: Value,
    pub thumb_url: Value,
    pub opened: Value,
    pub version: Value,
    pub plant: Value,
    pub user: Value,
}

impl Payload for Info {
    const FIELDS: &'static [&'static str] = &[
        "etotal",
        "emonth",
        "etoday",
        "eyear",
        "sn",
        "alias",
        "gsn",
        "status",
        "runStatus",
        "type",
        "thumbUrl",
        "opened",
        "version",
        "plant",
        "user",
    ];
}
