//! Search filter value object and cross-field validation.
//!
//! Field names mirror the upstream AUTO.RIA query parameters (`marka_id`,
//! `s_yers`, `raceInt_ot`, ...) so the mapping to the wire format in
//! [`crate::query`] stays mechanical. All non-default fields are optional;
//! absent fields are simply not emitted.

use crate::error::{ClientError, ClientResult};

/// Default vehicle category: passenger cars.
pub const DEFAULT_CATEGORY: u32 = 1;
/// Default currency: USD (2 = EUR, 3 = UAH). Omitted from requests.
pub const DEFAULT_CURRENCY: u32 = 1;
/// Default page size.
pub const DEFAULT_COUNT_PER_PAGE: u32 = 20;
/// Upstream hard limit on page size; larger requests are silently clamped.
pub const MAX_COUNT_PER_PAGE: u32 = 100;

/// Caller-supplied constraints for a vehicle listing search.
///
/// `s_yers`/`po_yers` are paired year-range sequences with
/// `from[i]`/`to[i]` semantics; when both are present they must have equal
/// length. An oversized `countpage` is not an error; the encoder clamps
/// it to [`MAX_COUNT_PER_PAGE`] on the wire while the result still echoes
/// the requested value.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchFilter {
    /// Vehicle category (1 cars, 2 motorcycles, 3 trucks, 4 buses, ...).
    pub category_id: u32,
    /// Production year lower bounds, paired with `po_yers`.
    pub s_yers: Option<Vec<u32>>,
    /// Production year upper bounds, paired with `s_yers`.
    pub po_yers: Option<Vec<u32>>,
    pub price_ot: Option<u64>,
    pub price_do: Option<u64>,
    pub currency: u32,
    /// 0/1 flag, wire name `auctionPossible`.
    pub auction_possible: Option<u8>,
    /// 0/1 flag, wire name `exchangePossible`.
    pub exchange_possible: Option<u8>,
    /// Exchange kind (1 car, 2 real estate, 3 commercial).
    pub with_exchange_type: Option<u32>,
    pub credit_possible: Option<u8>,
    pub under_credit: Option<u8>,
    pub confiscated_car: Option<u8>,
    pub custom_cleared: Option<u8>,
    /// Page index, zero-based.
    pub page: u32,
    /// Requested page size; clamped to [`MAX_COUNT_PER_PAGE`] when sent.
    pub countpage: u32,
    /// Restrict the search to a single listing.
    pub auto_id: Option<u64>,
    pub marka_id: Option<Vec<u32>>,
    pub model_id: Option<Vec<u32>>,
    pub city_id: Option<Vec<u32>>,
    pub state_id: Option<Vec<u32>>,
    pub gear_id: Option<Vec<u32>>,
    pub drive_id: Option<Vec<u32>>,
    pub fuel_id: Option<Vec<u32>>,
    /// Engine displacement in litres, wire name `engineVolume_ot`.
    pub engine_volume_ot: Option<f64>,
    /// Engine displacement in litres, wire name `engineVolume_do`.
    pub engine_volume_do: Option<f64>,
    pub power_ot: Option<u32>,
    pub power_do: Option<u32>,
    /// Mileage in thousands of km, wire name `raceInt_ot`.
    pub race_int_ot: Option<u32>,
    /// Mileage in thousands of km, wire name `raceInt_do`.
    pub race_int_do: Option<u32>,
    pub bodystyle_id: Option<Vec<u32>>,
    pub color_id: Option<Vec<u32>>,
    pub verified: Option<u8>,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            category_id: DEFAULT_CATEGORY,
            s_yers: None,
            po_yers: None,
            price_ot: None,
            price_do: None,
            currency: DEFAULT_CURRENCY,
            auction_possible: None,
            exchange_possible: None,
            with_exchange_type: None,
            credit_possible: None,
            under_credit: None,
            confiscated_car: None,
            custom_cleared: None,
            page: 0,
            countpage: DEFAULT_COUNT_PER_PAGE,
            auto_id: None,
            marka_id: None,
            model_id: None,
            city_id: None,
            state_id: None,
            gear_id: None,
            drive_id: None,
            fuel_id: None,
            engine_volume_ot: None,
            engine_volume_do: None,
            power_ot: None,
            power_do: None,
            race_int_ot: None,
            race_int_do: None,
            bodystyle_id: None,
            color_id: None,
            verified: None,
        }
    }
}

impl SearchFilter {
    /// Check cross-field consistency before any network call.
    ///
    /// The only constrained combination is the paired year-range
    /// sequences; out-of-range numeric values pass through to the
    /// upstream API uninterpreted.
    pub fn validate(&self) -> ClientResult<()> {
        if let (Some(s_yers), Some(po_yers)) = (&self.s_yers, &self.po_yers) {
            if !s_yers.is_empty() && !po_yers.is_empty() && s_yers.len() != po_yers.len() {
                return Err(ClientError::validation(format!(
                    "s_yers and po_yers must have the same length (got {} and {})",
                    s_yers.len(),
                    po_yers.len()
                )));
            }
        }
        Ok(())
    }
}

/// Lookup key for the average-price endpoint: brand + model + year,
/// with optional gearbox, mileage bucket, and fuel refinements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AveragePriceQuery {
    pub marka_id: u32,
    pub model_id: u32,
    pub yers: u32,
    pub gear_id: Option<u32>,
    pub race_id: Option<u32>,
    pub fuel_id: Option<u32>,
}
