//! MCP ServerHandler implementation for AUTO.RIA vehicle search.
//!
//! Exposes the search API as five tools:
//! - `set_api_key`: store the developers.ria.com API key for the session
//! - `search_cars`: search listings with the full filter set
//! - `get_car_info`: full detail record for one listing
//! - `get_average_price`: market average price for brand/model/year
//! - `get_search_help`: static parameter reference, no network access
//!
//! Every network-backed tool resolves the API key first and returns a
//! `success:false` payload without touching the network when none is
//! set. Tool calls are independent; multiple may be in flight at once,
//! suspending only at the HTTP boundary.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use tokio::sync::RwLock;

use ria_client::{AveragePriceQuery, CredentialStore, RiaClient, SearchFilter};

use crate::tools::*;

/// AUTO.RIA MCP server handler.
///
/// The credential store is shared across in-flight tool calls behind a
/// `RwLock`; a `set_api_key` racing an in-flight `search_cars` means the
/// search observes whichever key was current when it started. Accepted
/// behavior, documented on [`CredentialStore`].
#[derive(Debug, Clone)]
pub struct RiaMcpServer {
    tool_router: ToolRouter<Self>,
    client: Arc<RiaClient>,
    credentials: Arc<RwLock<CredentialStore>>,
}

impl RiaMcpServer {
    /// Create a server around a client and a (possibly pre-seeded)
    /// credential store.
    pub fn new(client: RiaClient, credentials: CredentialStore) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client: Arc::new(client),
            credentials: Arc::new(RwLock::new(credentials)),
        }
    }

    /// Resolve the session API key, or a ready-to-return failure payload.
    async fn require_api_key(&self) -> Result<String, String> {
        let credentials = self.credentials.read().await;
        match credentials.require() {
            Ok(key) => Ok(key.to_string()),
            Err(e) => Err(client_error_json(&e)),
        }
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for RiaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "ria-mcp".to_string(),
                title: Some("AUTO.RIA Search MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing the AUTO.RIA vehicle marketplace: listing search, \
                     per-listing details, and average price lookups"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "AUTO.RIA is a vehicle marketplace. Call set_api_key once per session \
                 (or export RIA_API_KEY before starting the server), then use search_cars \
                 to find listings, get_car_info for details on a specific auto_id, and \
                 get_average_price for market pricing. get_search_help lists all filter \
                 parameters and their id vocabularies. Every response carries a `success` \
                 boolean; on failure the `error` field explains what went wrong."
                    .to_string(),
            ),
        }
    }
}

#[tool_router(router = tool_router)]
impl RiaMcpServer {
    /// Store the API key for subsequent calls.
    #[tool(
        name = "set_api_key",
        description = "Store the AUTO.RIA developers API key for this session. Obtain a key at developers.ria.com. Overwrites any previously stored key; always succeeds."
    )]
    pub async fn set_api_key(&self, Parameters(params): Parameters<SetApiKeyParams>) -> String {
        self.credentials.write().await.set(params.key);
        "API key stored for this session.".to_string()
    }

    /// Search vehicle listings with the full optional filter set.
    #[tool(
        name = "search_cars",
        description = "Search AUTO.RIA vehicle listings. All filters are optional; list-valued filters (marka_id, city_id, gear_id, ...) accept multiple ids. s_yers/po_yers are paired from/to year lists and must match in length. Returns {success, total_count, cars, page, countpage, request_url}. See get_search_help for id vocabularies."
    )]
    pub async fn search_cars(&self, Parameters(params): Parameters<SearchCarsParams>) -> String {
        let api_key = match self.require_api_key().await {
            Ok(k) => k,
            Err(e) => return e,
        };

        let filter: SearchFilter = params.into();
        match self.client.search(&api_key, &filter).await {
            Ok(page) => serde_json::to_string_pretty(&SearchCarsResponse::from(page))
                .unwrap_or_else(|e| error_json(&format!("serialization failed: {e}"))),
            Err(e) => client_error_json(&e),
        }
    }

    /// Full detail record for a single listing.
    #[tool(
        name = "get_car_info",
        description = "Get the full detail record for one listing by its auto_id (from search_cars results). Returns {success, car_info}."
    )]
    pub async fn get_car_info(&self, Parameters(params): Parameters<CarInfoParams>) -> String {
        let api_key = match self.require_api_key().await {
            Ok(k) => k,
            Err(e) => return e,
        };

        match self.client.car_info(&api_key, params.auto_id).await {
            Ok(car_info) => serde_json::to_string_pretty(&CarInfoResponse {
                success: true,
                car_info,
            })
            .unwrap_or_else(|e| error_json(&format!("serialization failed: {e}"))),
            Err(e) => client_error_json(&e),
        }
    }

    /// Market average price for a brand/model/year combination.
    #[tool(
        name = "get_average_price",
        description = "Get the market average price for a brand/model/year combination, optionally refined by gearbox (gear_id), mileage bucket (race_id), and fuel type (fuel_id). Returns {success, average_price_info}."
    )]
    pub async fn get_average_price(
        &self,
        Parameters(params): Parameters<AveragePriceParams>,
    ) -> String {
        let api_key = match self.require_api_key().await {
            Ok(k) => k,
            Err(e) => return e,
        };

        let query = AveragePriceQuery {
            marka_id: params.marka_id,
            model_id: params.model_id,
            yers: params.yers,
            gear_id: params.gear_id,
            race_id: params.race_id,
            fuel_id: params.fuel_id,
        };

        match self.client.average_price(&api_key, &query).await {
            Ok(average_price_info) => serde_json::to_string_pretty(&AveragePriceResponse {
                success: true,
                average_price_info,
            })
            .unwrap_or_else(|e| error_json(&format!("serialization failed: {e}"))),
            Err(e) => client_error_json(&e),
        }
    }

    /// Static parameter reference.
    #[tool(
        name = "get_search_help",
        description = "Reference text for all search parameters and their id vocabularies (gearboxes, drivetrains, currencies, categories). No network access."
    )]
    pub async fn get_search_help(
        &self,
        Parameters(_params): Parameters<SearchHelpParams>,
    ) -> String {
        SEARCH_HELP.to_string()
    }
}
