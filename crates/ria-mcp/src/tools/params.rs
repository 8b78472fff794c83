//! Parameter and response structs for all MCP tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use ria_client::{SearchFilter, SearchPage};

// ── set_api_key ──

/// Parameters for the `set_api_key` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetApiKeyParams {
    /// API key obtained from developers.ria.com.
    #[schemars(description = "API key obtained from developers.ria.com")]
    pub key: String,
}

// ── search_cars ──

/// Parameters for the `search_cars` tool.
///
/// Mirrors [`SearchFilter`] field for field; wire-format names
/// (`auctionPossible`, `engineVolume_ot`, ...) are preserved via serde
/// renames so agents see the same parameter names the upstream API uses.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct SearchCarsParams {
    /// Vehicle category id.
    #[schemars(
        description = "Category id: 1 passenger cars (default), 2 motorcycles, 3 trucks, 4 buses, 5 trailers, 6 agricultural, 7 special machinery, 8 watercraft, 9 aircraft"
    )]
    pub category_id: Option<u32>,
    /// Production year lower bounds.
    #[schemars(description = "Production year lower bounds, paired index-wise with po_yers (e.g., [2010, 2015])")]
    pub s_yers: Option<Vec<u32>>,
    /// Production year upper bounds.
    #[schemars(description = "Production year upper bounds, paired index-wise with s_yers (e.g., [2014, 2020]); must match s_yers in length")]
    pub po_yers: Option<Vec<u32>>,
    #[schemars(description = "Minimum price")]
    pub price_ot: Option<u64>,
    #[schemars(description = "Maximum price")]
    pub price_do: Option<u64>,
    #[schemars(description = "Currency: 1 USD (default), 2 EUR, 3 UAH")]
    pub currency: Option<u32>,
    #[schemars(description = "Auction possible: 0 no, 1 yes")]
    #[serde(rename = "auctionPossible")]
    pub auction_possible: Option<u8>,
    #[schemars(description = "Exchange possible: 0 no, 1 yes")]
    #[serde(rename = "exchangePossible")]
    pub exchange_possible: Option<u8>,
    #[schemars(description = "Exchange kind: 1 car, 2 real estate, 3 commercial")]
    pub with_exchange_type: Option<u32>,
    #[schemars(description = "Credit possible: 0 no, 1 yes")]
    pub credit_possible: Option<u8>,
    #[schemars(description = "Currently under credit: 0 no, 1 yes")]
    pub under_credit: Option<u8>,
    #[schemars(description = "Confiscated vehicle: 0 no, 1 yes")]
    pub confiscated_car: Option<u8>,
    #[schemars(description = "Customs cleared: 0 no, 1 yes")]
    pub custom_cleared: Option<u8>,
    #[schemars(description = "Page index, zero-based (default 0)")]
    pub page: Option<u32>,
    #[schemars(description = "Listings per page (default 20, max 100; larger values are clamped)")]
    pub countpage: Option<u32>,
    #[schemars(description = "Restrict to a single listing id")]
    pub auto_id: Option<u64>,
    #[schemars(description = "Brand ids (e.g., [79] for BMW)")]
    pub marka_id: Option<Vec<u32>>,
    #[schemars(description = "Model ids")]
    pub model_id: Option<Vec<u32>>,
    #[schemars(description = "City ids (e.g., [5] for Kyiv)")]
    pub city_id: Option<Vec<u32>>,
    #[schemars(description = "Region ids")]
    pub state_id: Option<Vec<u32>>,
    #[schemars(description = "Gearbox ids: 1 manual, 2 automatic, 3 tiptronic, 4 adaptive, 5 CVT")]
    pub gear_id: Option<Vec<u32>>,
    #[schemars(description = "Drivetrain ids: 1 front, 2 rear, 3 all-wheel")]
    pub drive_id: Option<Vec<u32>>,
    #[schemars(description = "Fuel type ids")]
    pub fuel_id: Option<Vec<u32>>,
    #[schemars(description = "Minimum engine displacement in litres")]
    #[serde(rename = "engineVolume_ot")]
    pub engine_volume_ot: Option<f64>,
    #[schemars(description = "Maximum engine displacement in litres")]
    #[serde(rename = "engineVolume_do")]
    pub engine_volume_do: Option<f64>,
    #[schemars(description = "Minimum power in hp")]
    pub power_ot: Option<u32>,
    #[schemars(description = "Maximum power in hp")]
    pub power_do: Option<u32>,
    #[schemars(description = "Minimum mileage in thousands of km")]
    #[serde(rename = "raceInt_ot")]
    pub race_int_ot: Option<u32>,
    #[schemars(description = "Maximum mileage in thousands of km")]
    #[serde(rename = "raceInt_do")]
    pub race_int_do: Option<u32>,
    #[schemars(description = "Body style ids")]
    pub bodystyle_id: Option<Vec<u32>>,
    #[schemars(description = "Color ids")]
    pub color_id: Option<Vec<u32>>,
    #[schemars(description = "Verified listings only: 1 yes")]
    pub verified: Option<u8>,
}

impl From<SearchCarsParams> for SearchFilter {
    fn from(p: SearchCarsParams) -> Self {
        let defaults = SearchFilter::default();
        SearchFilter {
            category_id: p.category_id.unwrap_or(defaults.category_id),
            s_yers: p.s_yers,
            po_yers: p.po_yers,
            price_ot: p.price_ot,
            price_do: p.price_do,
            currency: p.currency.unwrap_or(defaults.currency),
            auction_possible: p.auction_possible,
            exchange_possible: p.exchange_possible,
            with_exchange_type: p.with_exchange_type,
            credit_possible: p.credit_possible,
            under_credit: p.under_credit,
            confiscated_car: p.confiscated_car,
            custom_cleared: p.custom_cleared,
            page: p.page.unwrap_or(defaults.page),
            countpage: p.countpage.unwrap_or(defaults.countpage),
            auto_id: p.auto_id,
            marka_id: p.marka_id,
            model_id: p.model_id,
            city_id: p.city_id,
            state_id: p.state_id,
            gear_id: p.gear_id,
            drive_id: p.drive_id,
            fuel_id: p.fuel_id,
            engine_volume_ot: p.engine_volume_ot,
            engine_volume_do: p.engine_volume_do,
            power_ot: p.power_ot,
            power_do: p.power_do,
            race_int_ot: p.race_int_ot,
            race_int_do: p.race_int_do,
            bodystyle_id: p.bodystyle_id,
            color_id: p.color_id,
            verified: p.verified,
        }
    }
}

/// Success response for the `search_cars` tool.
#[derive(Debug, Serialize)]
pub struct SearchCarsResponse {
    pub success: bool,
    pub total_count: u64,
    pub page: u32,
    pub countpage: u32,
    pub cars: Vec<serde_json::Value>,
    pub request_url: String,
}

impl From<SearchPage> for SearchCarsResponse {
    fn from(page: SearchPage) -> Self {
        Self {
            success: true,
            total_count: page.total_count,
            page: page.page,
            countpage: page.countpage,
            cars: page.cars,
            request_url: page.request_url,
        }
    }
}

// ── get_car_info ──

/// Parameters for the `get_car_info` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CarInfoParams {
    /// Listing id from search results.
    #[schemars(description = "Listing id (auto_id from search results)")]
    pub auto_id: u64,
}

/// Success response for the `get_car_info` tool.
#[derive(Debug, Serialize)]
pub struct CarInfoResponse {
    pub success: bool,
    pub car_info: serde_json::Value,
}

// ── get_average_price ──

/// Parameters for the `get_average_price` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct AveragePriceParams {
    /// Brand id.
    #[schemars(description = "Brand id (e.g., 79 for BMW)")]
    pub marka_id: u32,
    /// Model id.
    #[schemars(description = "Model id")]
    pub model_id: u32,
    /// Production year.
    #[schemars(description = "Production year")]
    pub yers: u32,
    /// Optional gearbox id.
    #[schemars(description = "Gearbox id (optional)")]
    pub gear_id: Option<u32>,
    /// Optional mileage bucket id.
    #[schemars(description = "Mileage bucket id (optional)")]
    pub race_id: Option<u32>,
    /// Optional fuel type id.
    #[schemars(description = "Fuel type id (optional)")]
    pub fuel_id: Option<u32>,
}

/// Success response for the `get_average_price` tool.
#[derive(Debug, Serialize)]
pub struct AveragePriceResponse {
    pub success: bool,
    pub average_price_info: serde_json::Value,
}

// ── get_search_help ──

/// Parameters for the `get_search_help` tool (none).
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct SearchHelpParams {}
