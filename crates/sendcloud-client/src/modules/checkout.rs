/*
[INPUT]:  Checkout configuration id and query parameters
[OUTPUT]: Delivery options for a dynamic checkout configuration
[POS]:    Endpoint layer - dynamic checkout
[UPDATE]: When checkout endpoints change
*/

use crate::http::{HttpMethod, Payload, Result, SendcloudClient, SendcloudResponse};

#[derive(Debug, Clone, Copy)]
pub struct Checkout<'a> {
    client: &'a SendcloudClient,
}

impl<'a> Checkout<'a> {
    pub fn new(client: &'a SendcloudClient) -> Self {
        Self { client }
    }

    /// Retrieve a list of delivery options
    ///
    /// GET /api/v2/checkout/configurations/{configuration_id}/delivery-options
    pub fn get(&self, configuration_id: &str, query: Payload) -> Result<SendcloudResponse> {
        let endpoint = format!("/api/v2/checkout/configurations/{configuration_id}/delivery-options");
        self.client.request(HttpMethod::Get, &endpoint, query)
    }
}
