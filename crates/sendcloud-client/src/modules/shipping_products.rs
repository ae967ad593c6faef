/*
[INPUT]:  Filter query parameters (countries, weight, functionalities)
[OUTPUT]: Shipping products matching the filters
[POS]:    Endpoint layer - shipping products
[UPDATE]: When shipping product endpoints change
*/

use crate::http::{HttpMethod, Payload, Result, SendcloudClient, SendcloudResponse};

#[derive(Debug, Clone, Copy)]
pub struct ShippingProducts<'a> {
    client: &'a SendcloudClient,
}

impl<'a> ShippingProducts<'a> {
    pub fn new(client: &'a SendcloudClient) -> Self {
        Self { client }
    }

    /// GET /api/v2/shipping-products
    pub fn list(&self, query: Payload) -> Result<SendcloudResponse> {
        self.client
            .request(HttpMethod::Get, "/api/v2/shipping-products", query)
    }
}
