//! Error macros for roadnet

/// Return early with an `InvalidCondition` error
#[macro_export]
macro_rules! bail_condition {
    ($condition:expr, $reason:expr) => {
        return Err($crate::error::RoadnetError::invalid_condition(
            $condition, $reason,
        ))
    };
}

/// Return early with a `NodeNotFound` error unless the city is in the network
#[macro_export]
macro_rules! ensure_city {
    ($network:expr, $city:expr) => {
        if !$network.contains($city) {
            return Err($crate::error::RoadnetError::node_not_found($city));
        }
    };
}
