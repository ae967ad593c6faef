/*
[INPUT]:  Parcel id, document type and query parameters
[OUTPUT]: Parcel documents (labels, customs forms, invoices)
[POS]:    Endpoint layer - parcel documents
[UPDATE]: When parcel document endpoints change
*/

use crate::http::{HttpMethod, Payload, Result, SendcloudClient, SendcloudResponse};

#[derive(Debug, Clone, Copy)]
pub struct ParcelDocuments<'a> {
    client: &'a SendcloudClient,
}

impl<'a> ParcelDocuments<'a> {
    pub fn new(client: &'a SendcloudClient) -> Self {
        Self { client }
    }

    /// Retrieve one document of a parcel
    ///
    /// GET /api/v2/parcels/{parcel_id}/documents/{document_type}
    ///
    /// Document types: `air-waybill`, `cn23`, `cn23-default`,
    /// `commercial-invoice`, `cp71`, `label`, `qr`.
    pub fn get(&self, parcel_id: &str, document_type: &str, query: Payload) -> Result<SendcloudResponse> {
        let endpoint = format!("/api/v2/parcels/{parcel_id}/documents/{document_type}");
        self.client.request(HttpMethod::Get, &endpoint, query)
    }
}
