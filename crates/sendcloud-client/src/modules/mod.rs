/*
[INPUT]:  Client reference, resource identifiers, query/body payloads
[OUTPUT]: Per-resource endpoint handles and a name-keyed module registry
[POS]:    Endpoint layer - thin path + verb wrappers over the dispatcher
[UPDATE]: When adding new resources or endpoint validation rules
*/

pub mod checkout;
pub mod customs_declarations;
pub mod downloads;
pub mod labels;
pub mod parcel_documents;
pub mod parcel_statuses;
pub mod parcels;
pub mod pickups;
pub mod shipping_methods;
pub mod shipping_prices;
pub mod shipping_products;
pub mod tracking;
pub mod transit_times;

pub use checkout::Checkout;
pub use customs_declarations::CustomsDeclarations;
pub use downloads::Downloads;
pub use labels::Labels;
pub use parcel_documents::ParcelDocuments;
pub use parcel_statuses::ParcelStatuses;
pub use parcels::Parcels;
pub use pickups::Pickups;
pub use shipping_methods::ShippingMethods;
pub use shipping_prices::ShippingPrices;
pub use shipping_products::ShippingProducts;
pub use tracking::Tracking;
pub use transit_times::TransitTimes;

use crate::http::{Payload, Result, SendcloudClient, SendcloudError};

/// Any module handle, as returned by [`SendcloudClient::module`]
#[derive(Debug, Clone, Copy)]
pub enum Module<'a> {
    Checkout(Checkout<'a>),
    CustomsDeclarations(CustomsDeclarations<'a>),
    Downloads(Downloads<'a>),
    Labels(Labels<'a>),
    ParcelDocuments(ParcelDocuments<'a>),
    ParcelStatuses(ParcelStatuses<'a>),
    Parcels(Parcels<'a>),
    Pickups(Pickups<'a>),
    ShippingMethods(ShippingMethods<'a>),
    ShippingPrices(ShippingPrices<'a>),
    ShippingProducts(ShippingProducts<'a>),
    Tracking(Tracking<'a>),
    TransitTimes(TransitTimes<'a>),
}

impl Module<'_> {
    /// Registry name of the module
    pub fn name(&self) -> &'static str {
        match self {
            Module::Checkout(_) => "checkout",
            Module::CustomsDeclarations(_) => "customs_declarations",
            Module::Downloads(_) => "downloads",
            Module::Labels(_) => "labels",
            Module::ParcelDocuments(_) => "parcel_documents",
            Module::ParcelStatuses(_) => "parcel_statuses",
            Module::Parcels(_) => "parcels",
            Module::Pickups(_) => "pickups",
            Module::ShippingMethods(_) => "shipping_methods",
            Module::ShippingPrices(_) => "shipping_prices",
            Module::ShippingProducts(_) => "shipping_products",
            Module::Tracking(_) => "tracking",
            Module::TransitTimes(_) => "transit_times",
        }
    }
}

type ModuleFactory = for<'a> fn(&'a SendcloudClient) -> Module<'a>;

macro_rules! factory {
    ($variant:ident) => {{
        fn make(client: &SendcloudClient) -> Module<'_> {
            Module::$variant($variant::new(client))
        }
        make as ModuleFactory
    }};
}

/// Module names (normalised: lower case, no separators) and their factories
static REGISTRY: &[(&str, ModuleFactory)] = &[
    ("checkout", factory!(Checkout)),
    ("customsdeclarations", factory!(CustomsDeclarations)),
    ("downloads", factory!(Downloads)),
    ("labels", factory!(Labels)),
    ("parceldocuments", factory!(ParcelDocuments)),
    ("parcelstatuses", factory!(ParcelStatuses)),
    ("parcels", factory!(Parcels)),
    ("pickups", factory!(Pickups)),
    ("shippingmethods", factory!(ShippingMethods)),
    ("shippingprices", factory!(ShippingPrices)),
    ("shippingproducts", factory!(ShippingProducts)),
    ("tracking", factory!(Tracking)),
    ("transittimes", factory!(TransitTimes)),
];

/// Names accepted by [`SendcloudClient::module`]
pub fn module_names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}

fn normalise(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl SendcloudClient {
    /// Look up a module by name (`labels`, `parcel_documents`, `parcelDocuments`, ...)
    pub fn module(&self, name: &str) -> Option<Module<'_>> {
        let key = normalise(name);
        REGISTRY
            .iter()
            .find(|(registered, _)| *registered == key)
            .map(|(_, factory)| factory(self))
    }

    pub fn checkout(&self) -> Checkout<'_> {
        Checkout::new(self)
    }

    pub fn customs_declarations(&self) -> CustomsDeclarations<'_> {
        CustomsDeclarations::new(self)
    }

    pub fn downloads(&self) -> Downloads<'_> {
        Downloads::new(self)
    }

    pub fn labels(&self) -> Labels<'_> {
        Labels::new(self)
    }

    pub fn parcel_documents(&self) -> ParcelDocuments<'_> {
        ParcelDocuments::new(self)
    }

    pub fn parcel_statuses(&self) -> ParcelStatuses<'_> {
        ParcelStatuses::new(self)
    }

    pub fn parcels(&self) -> Parcels<'_> {
        Parcels::new(self)
    }

    pub fn pickups(&self) -> Pickups<'_> {
        Pickups::new(self)
    }

    pub fn shipping_methods(&self) -> ShippingMethods<'_> {
        ShippingMethods::new(self)
    }

    pub fn shipping_prices(&self) -> ShippingPrices<'_> {
        ShippingPrices::new(self)
    }

    pub fn shipping_products(&self) -> ShippingProducts<'_> {
        ShippingProducts::new(self)
    }

    pub fn tracking(&self) -> Tracking<'_> {
        Tracking::new(self)
    }

    pub fn transit_times(&self) -> TransitTimes<'_> {
        TransitTimes::new(self)
    }
}

/// Fail unless `field` is present and non-null
pub(crate) fn require_field(payload: &Payload, field: &'static str, message: &str) -> Result<()> {
    match payload.get(field) {
        Some(value) if !value.is_null() => Ok(()),
        _ => Err(SendcloudError::missing_field(field, message)),
    }
}

/// Fail unless `field` is present and a JSON array
pub(crate) fn require_array(payload: &Payload, field: &'static str, message: &str) -> Result<()> {
    match payload.get(field) {
        Some(value) if value.is_array() => Ok(()),
        _ => Err(SendcloudError::missing_field(field, message)),
    }
}
