//! Shared helper functions for MCP tool implementations.

use ria_client::ClientError;

/// Build a structured failure JSON string that LLMs can parse.
///
/// Every tool returns an object with at least a `success` boolean;
/// callers branch on it rather than on exceptions.
pub fn error_json(message: &str) -> String {
    serde_json::json!({
        "success": false,
        "error": message,
    })
    .to_string()
}

/// Serialize a client error as a failure payload, attaching the
/// upstream status code when the error carries one (transport failures
/// do not).
pub fn client_error_json(err: &ClientError) -> String {
    let mut payload = serde_json::json!({
        "success": false,
        "error": err.to_string(),
    });
    if let Some(status) = err.status_code() {
        payload["status_code"] = status.into();
    }
    payload.to_string()
}

/// Static reference text for the `get_search_help` tool. No network
/// access, no validation.
pub const SEARCH_HELP: &str = "\
AUTO.RIA search tools: parameter reference

Tools:
  1. set_api_key(key)          - store the API key for this session
  2. search_cars(...)          - search listings by filter
  3. get_car_info(auto_id)     - full details for one listing
  4. get_average_price(...)    - market average price for brand/model/year
  5. get_search_help()         - this text

Production year:
  - s_yers / po_yers: paired from/to year lists, e.g. s_yers=[2010], po_yers=[2015]
  - both lists must have the same length

Price:
  - price_ot / price_do: minimum / maximum price
  - currency: 1 USD (default), 2 EUR, 3 UAH

Brand and model:
  - marka_id: brand id list, e.g. [79] for BMW, [84] for Mercedes
  - model_id: model id list

Location:
  - city_id: e.g. [5] for Kyiv, [4] for Kharkiv
  - state_id: region id list

Technical:
  - gear_id: 1 manual, 2 automatic, 3 tiptronic, 4 adaptive, 5 CVT
  - drive_id: 1 front, 2 rear, 3 all-wheel
  - fuel_id: fuel type id list
  - engineVolume_ot/do: engine displacement from/to (litres)
  - power_ot/do: power from/to (hp)
  - raceInt_ot/do: mileage from/to (thousands of km)

Appearance:
  - bodystyle_id: body style id list
  - color_id: color id list

Extras:
  - verified: 1 for verified listings only
  - custom_cleared: 1 for customs-cleared vehicles
  - exchangePossible / auctionPossible / credit_possible: 1 to require

Pagination:
  - page: zero-based page index
  - countpage: listings per page (max 100, silently clamped)

Example:
  search_cars(marka_id=[79], price_ot=10000, price_do=50000, city_id=[5, 4])
";
