/*
[INPUT]:  Decoded Sendcloud response payloads
[OUTPUT]: Parcel, price, error and webhook types
[POS]:    Data layer - typed views over documented response fields
[UPDATE]: When API schema changes or new types added
*/

pub mod models;

pub use models::*;
