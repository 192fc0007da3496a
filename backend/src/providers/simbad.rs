//! Star details from the SIMBAD TAP service.
//!
//! One synchronous ADQL query per lookup, answered as JSON. Every column may
//! be null; a null becomes an absent field rather than an error.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use super::StarDetailsProvider;
use crate::error::{AstroError, AstroResult};
use crate::models::{HipId, StarDetails};

pub const SIMBAD_TAP_URL: &str = "https://simbad.cds.unistra.fr/simbad/sim-tap/sync";

/// TAP JSON answer: column metadata plus row arrays.
#[derive(Debug, Deserialize)]
struct TapResponse {
    metadata: Vec<TapColumn>,
    data: Vec<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct TapColumn {
    name: String,
}

/// Details provider backed by SIMBAD.
#[derive(Debug, Clone)]
pub struct SimbadDetails {
    client: reqwest::Client,
    endpoint: String,
}

impl SimbadDetails {
    pub fn new(endpoint: &str, timeout: Duration) -> AstroResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("astrocomp/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AstroError::DetailsUnavailable(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }
}

#[async_trait]
impl StarDetailsProvider for SimbadDetails {
    async fn details(&self, id: HipId) -> AstroResult<Option<StarDetails>> {
        let query = details_query(id);
        debug!("SIMBAD query for {}", id.designation());

        let response = self
            .client
            .post(&self.endpoint)
            .form(&[
                ("REQUEST", "doQuery"),
                ("LANG", "ADQL"),
                ("FORMAT", "json"),
                ("QUERY", query.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AstroError::DetailsUnavailable(format!("SIMBAD request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AstroError::DetailsUnavailable(format!(
                "SIMBAD returned status {}",
                response.status()
            )));
        }

        let body = response.text().await.map_err(|e| {
            AstroError::DetailsUnavailable(format!("Failed to read SIMBAD response: {}", e))
        })?;
        parse_details(id, &body)
    }
}

/// ADQL selecting the detail columns for one Hipparcos identifier.
pub fn details_query(id: HipId) -> String {
    format!(
        "SELECT TOP 1 b.sp_type, b.plx_value, b.pmra, b.pmdec, b.rvz_radvel, \
         fv.flux AS flux_v, fb.flux AS flux_b, r.vsini, t.otypes, i.ids \
         FROM ident AS n \
         JOIN basic AS b ON b.oid = n.oidref \
         LEFT JOIN flux AS fv ON fv.oidref = b.oid AND fv.filter = 'V' \
         LEFT JOIN flux AS fb ON fb.oidref = b.oid AND fb.filter = 'B' \
         LEFT JOIN mesRot AS r ON r.oidref = b.oid \
         LEFT JOIN alltypes AS t ON t.oidref = b.oid \
         LEFT JOIN ids AS i ON i.oidref = b.oid \
         WHERE n.id = '{}'",
        id.designation()
    )
}

/// Turn a TAP JSON body into a details record. No rows means unknown star.
pub fn parse_details(id: HipId, body: &str) -> AstroResult<Option<StarDetails>> {
    let response: TapResponse = serde_json::from_str(body).map_err(|e| {
        AstroError::DetailsUnavailable(format!("Malformed SIMBAD response: {}", e))
    })?;

    let Some(row) = response.data.first() else {
        return Ok(None);
    };

    let column = |name: &str| -> Option<&Value> {
        response
            .metadata
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
            .and_then(|index| row.get(index))
            .filter(|value| !value.is_null())
    };
    let number = |name: &str| column(name).and_then(Value::as_f64);
    let text = |name: &str| {
        column(name)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.split('|').collect::<Vec<_>>().join(", "))
    };

    let parallax = number("plx_value");
    let flux_v = number("flux_v");

    Ok(Some(StarDetails {
        id,
        spectral_type: text("sp_type"),
        distance_pc: StarDetails::distance_from_parallax(parallax),
        v_magnitude: flux_v,
        color_index_bv: StarDetails::color_index(number("flux_b"), flux_v),
        pm_ra_mas_yr: number("pmra"),
        pm_dec_mas_yr: number("pmdec"),
        parallax_mas: parallax,
        radial_velocity_km_s: number("rvz_radvel"),
        rotation_km_s: number("vsini"),
        object_types: text("otypes"),
        other_ids: text("ids"),
    }))
}
