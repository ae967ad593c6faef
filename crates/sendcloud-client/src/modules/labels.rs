/*
[INPUT]:  Parcel ids, label request bodies and query parameters
[OUTPUT]: Shipping labels for normal and label printers
[POS]:    Endpoint layer - labels
[UPDATE]: When label endpoints or their required fields change
*/

use crate::http::{HttpMethod, Payload, Result, SendcloudClient, SendcloudResponse};

use super::require_field;

const IDS_MESSAGE: &str = "Please provide parcel ids array.";

#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    client: &'a SendcloudClient,
}

impl<'a> Labels<'a> {
    pub fn new(client: &'a SendcloudClient) -> Self {
        Self { client }
    }

    /// Retrieve the label of one parcel
    ///
    /// GET /api/v2/labels/{parcel_id}
    pub fn get(&self, parcel_id: &str, query: Payload) -> Result<SendcloudResponse> {
        let endpoint = format!("/api/v2/labels/{parcel_id}");
        self.client.request(HttpMethod::Get, &endpoint, query)
    }

    /// Request labels for several parcels at once
    ///
    /// POST /api/v2/labels
    /// Requires: `label` in the body
    pub fn get_multiple(&self, payload: Payload) -> Result<SendcloudResponse> {
        require_field(&payload, "label", "Please provide label array.")?;
        self.client.request(HttpMethod::Post, "/api/v2/labels", payload)
    }

    /// Retrieve a normal-printer label
    ///
    /// GET /api/v2/labels/normal_printer/{parcel_id}
    pub fn get_pdf(&self, parcel_id: &str, query: Payload) -> Result<SendcloudResponse> {
        let endpoint = format!("/api/v2/labels/normal_printer/{parcel_id}");
        self.client.request(HttpMethod::Get, &endpoint, query)
    }

    /// Retrieve normal-printer labels for several parcels
    ///
    /// GET /api/v2/labels/normal_printer?ids=...
    /// Requires: `ids` in the query
    pub fn get_multiple_pdf(&self, query: Payload) -> Result<SendcloudResponse> {
        require_field(&query, "ids", IDS_MESSAGE)?;
        self.client
            .request(HttpMethod::Get, "/api/v2/labels/normal_printer", query)
    }

    /// Retrieve a label-printer label
    ///
    /// GET /api/v2/labels/label_printer/{parcel_id}
    pub fn get_pdf_specific(&self, parcel_id: &str, query: Payload) -> Result<SendcloudResponse> {
        let endpoint = format!("/api/v2/labels/label_printer/{parcel_id}");
        self.client.request(HttpMethod::Get, &endpoint, query)
    }

    /// Retrieve label-printer labels for several parcels
    ///
    /// GET /api/v2/labels/label_printer?ids=...
    /// Requires: `ids` in the query
    pub fn get_multiple_pdf_specific(&self, query: Payload) -> Result<SendcloudResponse> {
        require_field(&query, "ids", IDS_MESSAGE)?;
        self.client
            .request(HttpMethod::Get, "/api/v2/labels/label_printer", query)
    }
}
