/*
[INPUT]:  Parcel ids and query parameters
[OUTPUT]: Customs declaration documents for normal printers
[POS]:    Endpoint layer - customs documents
[UPDATE]: When customs declaration endpoints change
*/

use crate::http::{HttpMethod, Payload, Result, SendcloudClient, SendcloudResponse};

use super::require_field;

#[derive(Debug, Clone, Copy)]
pub struct CustomsDeclarations<'a> {
    client: &'a SendcloudClient,
}

impl<'a> CustomsDeclarations<'a> {
    pub fn new(client: &'a SendcloudClient) -> Self {
        Self { client }
    }

    /// Retrieve the customs declaration of one parcel
    ///
    /// GET /api/v2/customs_declaration/normal_printer/{parcel_id}
    pub fn get(&self, parcel_id: &str, query: Payload) -> Result<SendcloudResponse> {
        let endpoint = format!("/api/v2/customs_declaration/normal_printer/{parcel_id}");
        self.client.request(HttpMethod::Get, &endpoint, query)
    }

    /// Retrieve customs declarations for several parcels at once
    ///
    /// GET /api/v2/customs_declaration/normal_printer?ids=...
    /// Requires: `ids` in the query
    pub fn get_multiple_pdf(&self, query: Payload) -> Result<SendcloudResponse> {
        require_field(&query, "ids", "Please provide parcel ids array.")?;
        self.client
            .request(HttpMethod::Get, "/api/v2/customs_declaration/normal_printer", query)
    }
}
