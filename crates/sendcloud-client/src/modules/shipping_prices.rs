/*
[INPUT]:  Shipping method id, sender/receiver country query parameters
[OUTPUT]: Shipping rates per receiver country
[POS]:    Endpoint layer - shipping prices
[UPDATE]: When shipping price endpoints change
*/

use crate::http::{HttpMethod, Payload, Result, SendcloudClient, SendcloudResponse};

#[derive(Debug, Clone, Copy)]
pub struct ShippingPrices<'a> {
    client: &'a SendcloudClient,
}

impl<'a> ShippingPrices<'a> {
    pub fn new(client: &'a SendcloudClient) -> Self {
        Self { client }
    }

    /// Retrieve shipping prices for a `shipping_method_id` and `from_country`
    ///
    /// GET /api/v2/shipping-price
    ///
    /// The payload is an array of prices; decode it with
    /// `response.decode::<Vec<ShippingPrice>>()`.
    pub fn get(&self, query: Payload) -> Result<SendcloudResponse> {
        self.client
            .request(HttpMethod::Get, "/api/v2/shipping-price", query)
    }
}
