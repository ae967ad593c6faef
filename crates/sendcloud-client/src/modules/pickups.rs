/*
[INPUT]:  Pickup ids, pickup bodies and query parameters
[OUTPUT]: Scheduled carrier pickups
[POS]:    Endpoint layer - pickups
[UPDATE]: When pickup endpoints change
*/

use crate::http::{HttpMethod, Payload, Result, SendcloudClient, SendcloudResponse};

const PICKUPS_ENDPOINT: &str = "/api/v2/pickups";

#[derive(Debug, Clone, Copy)]
pub struct Pickups<'a> {
    client: &'a SendcloudClient,
}

impl<'a> Pickups<'a> {
    pub fn new(client: &'a SendcloudClient) -> Self {
        Self { client }
    }

    /// Retrieve a pickup
    ///
    /// GET /api/v2/pickups/{pickup_id}
    pub fn get(&self, pickup_id: &str, query: Payload) -> Result<SendcloudResponse> {
        let endpoint = format!("{PICKUPS_ENDPOINT}/{pickup_id}");
        self.client.request(HttpMethod::Get, &endpoint, query)
    }

    /// Schedule a pickup with a supporting carrier
    ///
    /// POST /api/v2/pickups
    pub fn create(&self, payload: Payload) -> Result<SendcloudResponse> {
        self.client.request(HttpMethod::Post, PICKUPS_ENDPOINT, payload)
    }

    /// GET /api/v2/pickups
    pub fn list(&self, query: Payload) -> Result<SendcloudResponse> {
        self.client.request(HttpMethod::Get, PICKUPS_ENDPOINT, query)
    }
}
