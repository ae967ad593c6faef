/*
[INPUT]:  Shipping method ids and query parameters
[OUTPUT]: Shipping methods available to the account
[POS]:    Endpoint layer - shipping methods
[UPDATE]: When shipping method endpoints change
*/

use crate::http::{HttpMethod, Payload, Result, SendcloudClient, SendcloudResponse};

#[derive(Debug, Clone, Copy)]
pub struct ShippingMethods<'a> {
    client: &'a SendcloudClient,
}

impl<'a> ShippingMethods<'a> {
    pub fn new(client: &'a SendcloudClient) -> Self {
        Self { client }
    }

    /// List shipping methods for the enabled carriers and sender address
    ///
    /// GET /api/v2/shipping_methods
    pub fn list(&self, query: Payload) -> Result<SendcloudResponse> {
        self.client
            .request(HttpMethod::Get, "/api/v2/shipping_methods", query)
    }

    /// GET /api/v2/shipping_methods/{method_id}
    pub fn get(&self, method_id: &str, query: Payload) -> Result<SendcloudResponse> {
        let endpoint = format!("/api/v2/shipping_methods/{method_id}");
        self.client.request(HttpMethod::Get, &endpoint, query)
    }
}
