use thiserror::Error;

/// Errors returned by [`RouteService`](crate::RouteService)
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteError {
	/// The Point of Interest with this id does not exist
	#[error("point of interest not found: {0}")]
	PoiNotFound(String),
}

#[test]
fn test_display() {
	let err = RouteError::PoiNotFound("poi-42".to_owned());
	assert_eq!(err.to_string(), "point of interest not found: poi-42");
}
