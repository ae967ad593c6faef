/*
[INPUT]:  Tracking number and query parameters
[OUTPUT]: Tracking details including status history
[POS]:    Endpoint layer - tracking
[UPDATE]: When tracking endpoints change
*/

use crate::http::{HttpMethod, Payload, Result, SendcloudClient, SendcloudResponse};

#[derive(Debug, Clone, Copy)]
pub struct Tracking<'a> {
    client: &'a SendcloudClient,
}

impl<'a> Tracking<'a> {
    pub fn new(client: &'a SendcloudClient) -> Self {
        Self { client }
    }

    /// GET /api/v2/tracking/{tracking_number}
    pub fn get(&self, tracking_number: &str, query: Payload) -> Result<SendcloudResponse> {
        let endpoint = format!("/api/v2/tracking/{tracking_number}");
        self.client.request(HttpMethod::Get, &endpoint, query)
    }
}
