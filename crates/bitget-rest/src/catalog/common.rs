//! Product-independent endpoints (`/api/v2/public/...`)

use crate::endpoint::{Category, EndpointSpec, ProductType};

/// Public endpoints shared by all products
pub static PUBLIC: &[EndpointSpec] = &[
    EndpointSpec::get("common_server_time", ProductType::Common, Category::Public, "time"),
];
