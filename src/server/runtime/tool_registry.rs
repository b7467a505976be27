use std::sync::Arc;

use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler},
    model::{
        ErrorData, GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        ListResourcesResult, PaginatedRequestParam, ReadResourceRequestParam, ReadResourceResult,
        ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, Json, RoleServer,
};

use crate::{
    prompts, resources,
    server::config::ServerConfig,
    tools::{
        self, ConvertUnitsRequest, ConvertUnitsResponse, ServerToolRouter, WeatherReport,
        WeatherRequest,
    },
};

/// MCP handler exposing the utility tools, the sample resource, and prompts.
#[derive(Clone)]
pub struct UtilityServer {
    config: Arc<ServerConfig>,
    instructions: Arc<String>,
    tool_router: ServerToolRouter<Self>,
}

impl UtilityServer {
    pub fn new(config: ServerConfig, instructions: String) -> Self {
        let router = tools::build_router(Self::tool_router);
        Self {
            config: Arc::new(config),
            instructions: Arc::new(instructions),
            tool_router: router,
        }
    }
}

#[tool_router(router = tool_router)]
impl UtilityServer {
    #[tool(name = "get_weather", description = "Fetch current weather for a city.")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<WeatherRequest>,
    ) -> Result<Json<WeatherReport>, ErrorData> {
        tracing::info!(
            target: "utility_mcp::tools",
            tool = tools::WEATHER_TOOL_ID,
            city = %request.city,
            "Handling weather lookup"
        );
        Ok(Json(tools::get_weather(&request.city)))
    }

    #[tool(
        name = "convert_units",
        description = "Convert between common units (miles<->km, c<->f, kg<->lbs)."
    )]
    async fn convert_units(
        &self,
        Parameters(request): Parameters<ConvertUnitsRequest>,
    ) -> Result<Json<ConvertUnitsResponse>, ErrorData> {
        let response = request.run();
        match &response.error {
            Some(reason) => tracing::warn!(
                target: "utility_mcp::tools",
                tool = tools::CONVERT_TOOL_ID,
                from_unit = %request.from_unit,
                to_unit = %request.to_unit,
                reason = %reason,
                "Unsupported conversion requested"
            ),
            None => tracing::info!(
                target: "utility_mcp::tools",
                tool = tools::CONVERT_TOOL_ID,
                from_unit = %request.from_unit,
                to_unit = %request.to_unit,
                "Converted value"
            ),
        }
        Ok(Json(response))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for UtilityServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_prompts()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult::with_all_items(resources::list()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        tracing::debug!(target: "utility_mcp::tools", uri = %request.uri, "Reading resource");
        let contents = resources::read(&request.uri)?;
        Ok(ReadResourceResult { contents })
    }

    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, ErrorData> {
        Ok(ListPromptsResult::with_all_items(prompts::list()))
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, ErrorData> {
        tracing::debug!(target: "utility_mcp::tools", prompt = %request.name, "Rendering prompt");
        prompts::get(&request.name)
    }
}
