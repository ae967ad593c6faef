/*
[INPUT]:  Absolute resource URLs (labels, documents) and query parameters
[OUTPUT]: Undecoded file responses
[POS]:    Endpoint layer - file downloads
[UPDATE]: When download handling changes
*/

use crate::http::{HttpMethod, Payload, Result, SendcloudClient, TransportResponse};

#[derive(Debug, Clone, Copy)]
pub struct Downloads<'a> {
    client: &'a SendcloudClient,
}

impl<'a> Downloads<'a> {
    pub fn new(client: &'a SendcloudClient) -> Self {
        Self { client }
    }

    /// Download a resource, e.g. a label URL taken from a parcel response
    ///
    /// GET {url} with `Accept: application/pdf`; the body is returned as bytes.
    pub fn get(&self, url: &str, query: Payload) -> Result<TransportResponse> {
        self.client.request_file(HttpMethod::Get, url, query)
    }
}
