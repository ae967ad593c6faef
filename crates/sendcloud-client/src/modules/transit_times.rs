/*
[INPUT]:  Carrier / shipping method codes, country and date filters
[OUTPUT]: Average transit times
[POS]:    Endpoint layer - transit time insights
[UPDATE]: When insight endpoints or their required fields change
*/

use crate::http::{HttpMethod, Payload, Result, SendcloudClient, SendcloudResponse};

use super::require_array;

#[derive(Debug, Clone, Copy)]
pub struct TransitTimes<'a> {
    client: &'a SendcloudClient,
}

impl<'a> TransitTimes<'a> {
    pub fn new(client: &'a SendcloudClient) -> Self {
        Self { client }
    }

    /// Average transit time per carrier
    ///
    /// GET /api/v2/insights/carriers/transit-times
    pub fn get_carriers(&self, query: Payload) -> Result<SendcloudResponse> {
        self.client
            .request(HttpMethod::Get, "/api/v2/insights/carriers/transit-times", query)
    }

    /// Average transit time per shipping method
    ///
    /// GET /api/v2/insights/shipping-methods/transit-times
    /// Requires: `shipping_method_code` array in the query
    pub fn get_shipping_method(&self, query: Payload) -> Result<SendcloudResponse> {
        require_array(
            &query,
            "shipping_method_code",
            "Please provide shipping_method_code array.",
        )?;
        self.client.request(
            HttpMethod::Get,
            "/api/v2/insights/shipping-methods/transit-times",
            query,
        )
    }
}
