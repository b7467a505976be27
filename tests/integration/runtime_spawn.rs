use std::process::{Command as StdCommand, Stdio};

use anyhow::Result;

use crate::common::{fixture, Session, BINARY_PATH};

#[tokio::test]
async fn inspector_style_spawn_lists_tools() -> Result<()> {
    let session = Session::start().await?;

    let info = session
        .client
        .peer_info()
        .cloned()
        .expect("server info is exchanged during initialize");
    assert_eq!(info.server_info.name, "utility-server-test");
    assert!(info.capabilities.prompts.is_some());
    assert!(info.capabilities.resources.is_some());

    let list = session.client.list_tools(None).await?;
    let names: Vec<&str> = list.tools.iter().map(|tool| tool.name.as_ref()).collect();
    assert!(
        names.contains(&"get_weather") && names.contains(&"convert_units"),
        "list_tools should include both tools: {names:?}"
    );

    session.shutdown().await
}

#[test]
fn invalid_config_exits_with_failure() {
    let status = StdCommand::new(BINARY_PATH)
        .arg("--transport")
        .arg("stdio")
        .arg("--config")
        .arg(fixture("tests/fixtures/config_invalid_port.toml"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .status()
        .expect("process should start");
    assert_eq!(status.code(), Some(1), "invalid port must abort startup");
}

#[test]
fn privileged_port_override_exits_with_failure() {
    let status = StdCommand::new(BINARY_PATH)
        .arg("--transport")
        .arg("stdio")
        .arg("--config")
        .arg(fixture("tests/fixtures/config_valid.toml"))
        .arg("--port")
        .arg("80")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .status()
        .expect("process should start");
    assert_eq!(status.code(), Some(1), "port override below 1024 must abort");
}
