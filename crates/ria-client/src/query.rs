//! Query parameter encoding for the AUTO.RIA API.
//!
//! The upstream API expects list-valued filters as indexed keys
//! (`marka_id[0]`, `marka_id[1]`, ...) rather than repeated or
//! comma-joined parameters. That quirk is isolated here: this module is
//! the single place the wire format is produced, and encoding is a pure
//! function over the filter so it stays deterministic and testable.

use crate::filter::{
    AveragePriceQuery, SearchFilter, DEFAULT_CURRENCY, MAX_COUNT_PER_PAGE,
};

/// One query key/value pair. Order within the encoded set is not
/// significant to the API but is kept deterministic.
pub type QueryParam = (String, String);

/// Encode a search filter into the exact parameter list the `/search`
/// endpoint expects.
///
/// `api_key`, `category_id`, `page`, and `countpage` are always present;
/// `countpage` is clamped to [`MAX_COUNT_PER_PAGE`]. Optional scalars are
/// emitted only when set (`currency` only when non-default), and each
/// list field expands to indexed keys in input order.
pub fn encode(filter: &SearchFilter, api_key: &str) -> Vec<QueryParam> {
    let mut params: Vec<QueryParam> = vec![
        ("api_key".to_string(), api_key.to_string()),
        ("category_id".to_string(), filter.category_id.to_string()),
        ("page".to_string(), filter.page.to_string()),
        (
            "countpage".to_string(),
            filter.countpage.min(MAX_COUNT_PER_PAGE).to_string(),
        ),
    ];

    push_scalar(&mut params, "price_ot", filter.price_ot);
    push_scalar(&mut params, "price_do", filter.price_do);
    if filter.currency != DEFAULT_CURRENCY {
        params.push(("currency".to_string(), filter.currency.to_string()));
    }
    push_scalar(&mut params, "auctionPossible", filter.auction_possible);
    push_scalar(&mut params, "exchangePossible", filter.exchange_possible);
    push_scalar(&mut params, "with_exchange_type", filter.with_exchange_type);
    push_scalar(&mut params, "credit_possible", filter.credit_possible);
    push_scalar(&mut params, "under_credit", filter.under_credit);
    push_scalar(&mut params, "confiscated_car", filter.confiscated_car);
    push_scalar(&mut params, "custom_cleared", filter.custom_cleared);
    push_scalar(&mut params, "auto_id", filter.auto_id);
    push_scalar(&mut params, "engineVolume_ot", filter.engine_volume_ot);
    push_scalar(&mut params, "engineVolume_do", filter.engine_volume_do);
    push_scalar(&mut params, "power_ot", filter.power_ot);
    push_scalar(&mut params, "power_do", filter.power_do);
    push_scalar(&mut params, "raceInt_ot", filter.race_int_ot);
    push_scalar(&mut params, "raceInt_do", filter.race_int_do);
    push_scalar(&mut params, "verified", filter.verified);

    push_indexed(&mut params, "s_yers", filter.s_yers.as_deref());
    push_indexed(&mut params, "po_yers", filter.po_yers.as_deref());
    push_indexed(&mut params, "marka_id", filter.marka_id.as_deref());
    push_indexed(&mut params, "model_id", filter.model_id.as_deref());
    push_indexed(&mut params, "city_id", filter.city_id.as_deref());
    push_indexed(&mut params, "state_id", filter.state_id.as_deref());
    push_indexed(&mut params, "gear_id", filter.gear_id.as_deref());
    push_indexed(&mut params, "drive_id", filter.drive_id.as_deref());
    push_indexed(&mut params, "fuel_id", filter.fuel_id.as_deref());
    push_indexed(&mut params, "bodystyle_id", filter.bodystyle_id.as_deref());
    push_indexed(&mut params, "color_id", filter.color_id.as_deref());

    params
}

/// Encode an average-price lookup for the `/average_price` endpoint.
pub fn encode_average_price(query: &AveragePriceQuery, api_key: &str) -> Vec<QueryParam> {
    let mut params: Vec<QueryParam> = vec![
        ("api_key".to_string(), api_key.to_string()),
        ("marka_id".to_string(), query.marka_id.to_string()),
        ("model_id".to_string(), query.model_id.to_string()),
        ("yers".to_string(), query.yers.to_string()),
    ];

    push_scalar(&mut params, "gear_id", query.gear_id);
    push_scalar(&mut params, "race_id", query.race_id);
    push_scalar(&mut params, "fuel_id", query.fuel_id);

    params
}

fn push_scalar<T: ToString>(params: &mut Vec<QueryParam>, name: &str, value: Option<T>) {
    if let Some(value) = value {
        params.push((name.to_string(), value.to_string()));
    }
}

fn push_indexed(params: &mut Vec<QueryParam>, name: &str, values: Option<&[u32]>) {
    if let Some(values) = values {
        for (idx, value) in values.iter().enumerate() {
            params.push((format!("{name}[{idx}]"), value.to_string()));
        }
    }
}
