/*
[INPUT]:  Query parameters
[OUTPUT]: All possible parcel statuses
[POS]:    Endpoint layer - parcel statuses
[UPDATE]: When parcel status endpoints change
*/

use crate::http::{HttpMethod, Payload, Result, SendcloudClient, SendcloudResponse};

#[derive(Debug, Clone, Copy)]
pub struct ParcelStatuses<'a> {
    client: &'a SendcloudClient,
}

impl<'a> ParcelStatuses<'a> {
    pub fn new(client: &'a SendcloudClient) -> Self {
        Self { client }
    }

    /// GET /api/v2/parcels/statuses
    pub fn get(&self, query: Payload) -> Result<SendcloudResponse> {
        self.client
            .request(HttpMethod::Get, "/api/v2/parcels/statuses", query)
    }
}
