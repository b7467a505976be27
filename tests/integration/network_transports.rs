use anyhow::Result;
use rmcp::{model::ClientInfo, serve_client, transport::StreamableHttpClientTransport};
use serde_json::json;
use tokio::net::TcpStream;

use crate::common::{call_tool, free_port, spawn_network_server, wait_for_listener};

#[tokio::test]
async fn tcp_listener_survives_dropped_client() -> Result<()> {
    let port = free_port()?;
    let mut child = spawn_network_server("tcp", port)?;
    wait_for_listener(port).await?;

    let dropped = TcpStream::connect(("127.0.0.1", port)).await?;
    drop(dropped);
    let idle = TcpStream::connect(("127.0.0.1", port)).await?;

    let stream = TcpStream::connect(("127.0.0.1", port)).await?;
    let client = serve_client(ClientInfo::default(), stream).await?;
    let converted = call_tool(
        &client,
        "convert_units",
        json!({ "value": 10, "from_unit": "miles", "to_unit": "km" }),
    )
    .await?;
    assert_eq!(converted["output"], json!("16.09 km"));
    client.cancel().await?;

    assert!(
        child.try_wait()?.is_none(),
        "server must keep listening after clients disconnect"
    );
    drop(idle);
    child.kill().await?;
    Ok(())
}

#[tokio::test]
async fn streamable_http_serves_convert_units() -> Result<()> {
    let port = free_port()?;
    let mut child = spawn_network_server("http", port)?;
    wait_for_listener(port).await?;

    let transport = StreamableHttpClientTransport::from_uri(format!("http://127.0.0.1:{port}/mcp"));
    let client = serve_client(ClientInfo::default(), transport).await?;

    let tools = client.list_tools(None).await?;
    assert!(
        tools.tools.iter().any(|tool| tool.name.as_ref() == "convert_units"),
        "list_tools over HTTP should include convert_units: {:?}",
        tools.tools
    );

    let converted = call_tool(
        &client,
        "convert_units",
        json!({ "value": 0, "from_unit": "c", "to_unit": "f" }),
    )
    .await?;
    assert_eq!(converted, json!({ "input": "0.0 c", "output": "32.00 f" }));

    let unsupported = call_tool(
        &client,
        "convert_units",
        json!({ "value": 5, "from_unit": "miles", "to_unit": "lbs" }),
    )
    .await?;
    assert_eq!(
        unsupported,
        json!({ "error": "Conversion miles->lbs not supported" })
    );

    client.cancel().await?;
    child.kill().await?;
    Ok(())
}
