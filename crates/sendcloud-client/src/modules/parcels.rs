/*
[INPUT]:  Parcel ids, parcel bodies and query parameters
[OUTPUT]: Parcel details, lists, creations, updates and cancellations
[POS]:    Endpoint layer - parcels
[UPDATE]: When parcel endpoints or their required fields change
*/

use crate::http::{HttpMethod, Payload, Result, SendcloudClient, SendcloudResponse};

use super::require_field;

const PARCELS_ENDPOINT: &str = "/api/v2/parcels";

#[derive(Debug, Clone, Copy)]
pub struct Parcels<'a> {
    client: &'a SendcloudClient,
}

impl<'a> Parcels<'a> {
    pub fn new(client: &'a SendcloudClient) -> Self {
        Self { client }
    }

    /// Retrieve a parcel's details
    ///
    /// GET /api/v2/parcels/{parcel_id}
    pub fn get(&self, parcel_id: &str, query: Payload) -> Result<SendcloudResponse> {
        let endpoint = format!("{PARCELS_ENDPOINT}/{parcel_id}");
        self.client.request(HttpMethod::Get, &endpoint, query)
    }

    /// Retrieve a list of parcels
    ///
    /// GET /api/v2/parcels
    pub fn list(&self, query: Payload) -> Result<SendcloudResponse> {
        self.client.request(HttpMethod::Get, PARCELS_ENDPOINT, query)
    }

    /// Create a parcel
    ///
    /// POST /api/v2/parcels
    pub fn create(&self, payload: Payload) -> Result<SendcloudResponse> {
        self.client.request(HttpMethod::Post, PARCELS_ENDPOINT, payload)
    }

    /// Update a parcel
    ///
    /// PUT /api/v2/parcels
    /// Requires: `id` in the body
    pub fn update(&self, payload: Payload) -> Result<SendcloudResponse> {
        require_field(&payload, "id", "Please provide parcel id with the request payload.")?;
        self.client.request(HttpMethod::Put, PARCELS_ENDPOINT, payload)
    }

    /// Cancel a parcel
    ///
    /// POST /api/v2/parcels/{parcel_id}/cancel
    pub fn delete(&self, parcel_id: &str) -> Result<SendcloudResponse> {
        let endpoint = format!("{PARCELS_ENDPOINT}/{parcel_id}/cancel");
        self.client.request(HttpMethod::Post, &endpoint, Payload::new())
    }

    /// Retrieve a parcel's return portal URL
    ///
    /// GET /api/v2/parcels/{parcel_id}/return_portal_url
    pub fn get_return_portal_url(&self, parcel_id: &str, query: Payload) -> Result<SendcloudResponse> {
        let endpoint = format!("{PARCELS_ENDPOINT}/{parcel_id}/return_portal_url");
        self.client.request(HttpMethod::Get, &endpoint, query)
    }
}
