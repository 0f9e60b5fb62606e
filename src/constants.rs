/// Column name constants and lookup tables shared across the pipeline stages.
/// These define the mapping between raw extract column names and the
/// canonical schema consumed by the storage and search collaborators.

/// Prefix used by the upstream extract format for unlabeled index columns.
/// Columns with this prefix are dropped when every value is null.
pub const UNNAMED_COLUMN_PREFIX: &str = "Unnamed";

/// Default column holding the presenter's phone number.
pub const DEFAULT_PHONE_COLUMN: &str = "presented_by_mobile";

/// Raw extract column names mapped to their canonical names.
/// Canonical names are never keys here, so applying the rename twice is a no-op.
pub const COLUMN_RENAMES: &[(&str, &str)] = &[
    ("propertyStatus", "property_status"),
    ("numberOfBeds", "bedrooms"),
    ("numberOfBaths", "bathrooms"),
    ("sqft", "square_feet"),
    ("addr1", "address_line_1"),
    ("addr2", "address_line_2"),
    ("streetNumber", "street_number"),
    ("streetName", "street_name"),
    ("streetType", "street_type"),
    ("preDirection", "pre_direction"),
    ("unitType", "unit_type"),
    ("unitNumber", "unit_number"),
    ("zipcode", "zip_code"),
    ("propertyType", "property_type"),
    ("yearBuilt", "year_built"),
    ("presentedBy", "presented_by"),
    ("brokeredBy", "brokered_by"),
    ("realtorMobile", "presented_by_mobile"),
    ("sourcePropertyId", "mls"),
    ("openHouse", "open_house"),
    ("compassPropertyId", "compass_property_id"),
    ("pageLink", "page_link"),
];

/// Source-specific status labels mapped to canonical ones.
/// Values not listed here pass through unchanged.
pub const STATUS_MAPPING: &[(&str, &str)] = &[
    ("Active Under Contract", "Pending"),
    ("New", "Active"),
    ("Closed", "Sold"),
];

/// Address columns, in the fixed order used for both `full_address`
/// composition and transaction id generation.
pub const ADDRESS_COLUMNS: &[&str] = &[
    "address_line_1",
    "address_line_2",
    "city",
    "state",
    "zip_code",
];

/// Columns forced to numeric type before handoff to the storage collaborator.
pub const NUMERIC_COLUMNS: &[&str] = &[
    "price",
    "bedrooms",
    "bathrooms",
    "zip_code",
    "latitude",
    "longitude",
];

/// Look up the canonical name for a raw extract column, if one is defined.
pub fn canonical_column_name(raw: &str) -> Option<&'static str> {
    COLUMN_RENAMES
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
}

/// Look up the canonical status label for a source status value, if mapped.
pub fn canonical_status(raw: &str) -> Option<&'static str> {
    STATUS_MAPPING
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
}
