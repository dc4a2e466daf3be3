use crate::{
	config::RouteConfig,
	error::RouteError,
	storage::{Poi, PoiLookup, RouteData, RouteResult, RouteStore},
	synthesizer::RouteSynthesizer,
	utils::route_log,
};

use hashbrown::HashMap;

/// Calculates and saves Routes between Points of Interest.
///
/// The service owns a storage backend `S` that is used both to look up Points of Interest and to
/// save the calculated Routes. Each Floor Plan can have its own corridor layout (see
/// [`set_floor_plan_config`](RouteService::set_floor_plan_config)), all others use the default.
///
/// ## Examples
/// ```
/// use floorplan_routing::{RouteService, RouteError, geometry::Point, storage::MemStorage};
///
/// let service = RouteService::new(MemStorage::with_sample_mall());
///
/// // Main Entrance -> Restrooms
/// let route = service.calculate_route("poi-1", "poi-5").unwrap();
///
/// assert_eq!(route.floor_plan_id, "sample-mall");
/// assert_eq!(route.path.first(), Some(&Point::new(0.1, 0.5)));
/// assert_eq!(route.path.last(), Some(&Point::new(0.8, 0.3)));
/// assert_eq!(route.directions.len(), route.path.len());
/// assert_eq!(route.directions[0].instruction, "Start at Main Entrance");
///
/// assert_eq!(
/// 	service.calculate_route("poi-1", "nowhere"),
/// 	Err(RouteError::PoiNotFound("nowhere".to_owned())),
/// );
/// ```
#[derive(Debug)]
pub struct RouteService<S> {
	storage: S,
	default_synthesizer: RouteSynthesizer,
	floor_plans: HashMap<String, RouteSynthesizer>,
}

impl<S: PoiLookup + RouteStore> RouteService<S> {
	/// Creates a RouteService using the default [`RouteConfig`] for every Floor Plan
	pub fn new(storage: S) -> RouteService<S> {
		RouteService::with_config(storage, RouteConfig::default())
	}

	/// Creates a RouteService using `config` for every Floor Plan without its own config
	pub fn with_config(storage: S, config: RouteConfig) -> RouteService<S> {
		RouteService {
			storage,
			default_synthesizer: RouteSynthesizer::new(config),
			floor_plans: HashMap::new(),
		}
	}

	/// The storage backend
	pub fn storage(&self) -> &S {
		&self.storage
	}

	/// Uses `config` for all Routes starting on the given Floor Plan.
	///
	/// Returns the config that was previously set for that Floor Plan.
	pub fn set_floor_plan_config(
		&mut self,
		floor_plan_id: impl Into<String>,
		config: RouteConfig,
	) -> Option<RouteConfig> {
		self.floor_plans
			.insert(floor_plan_id.into(), RouteSynthesizer::new(config))
			.map(|old| old.config().clone())
	}

	/// Drops the config of the given Floor Plan, falling back to the default.
	pub fn remove_floor_plan_config(&mut self, floor_plan_id: &str) -> Option<RouteConfig> {
		self.floor_plans
			.remove(floor_plan_id)
			.map(|old| old.config().clone())
	}

	/// The RouteSynthesizer used for Routes on the given Floor Plan
	pub fn synthesizer(&self, floor_plan_id: &str) -> &RouteSynthesizer {
		self.floor_plans
			.get(floor_plan_id)
			.unwrap_or(&self.default_synthesizer)
	}

	/// Calculates the Route from one Point of Interest to another and saves it.
	///
	/// Every call calculates and saves a new Route, even for a pair of Points of Interest that was
	/// requested before. The corridor layout is taken from the Floor Plan of the first Poi.
	///
	/// ## Errors
	/// [`RouteError::PoiNotFound`] if either id does not exist. Nothing is saved in that case.
	pub fn calculate_route(&self, from_poi_id: &str, to_poi_id: &str) -> Result<RouteResult, RouteError> {
		let (from_poi, to_poi) = self.lookup_pair(from_poi_id, to_poi_id);
		let from_poi = from_poi.ok_or_else(|| RouteError::PoiNotFound(from_poi_id.to_owned()))?;
		let to_poi = to_poi.ok_or_else(|| RouteError::PoiNotFound(to_poi_id.to_owned()))?;

		let synthesizer = self.synthesizer(&from_poi.floor_plan_id);

		let path = synthesizer.synthesize(from_poi.position(), to_poi.position());
		let distance = synthesizer.total_distance_meters(&path);
		let estimated_time = synthesizer.estimated_time_secs(&path);
		let directions = synthesizer.directions(&path, &from_poi.name, &to_poi.name);

		route_log!(
			debug,
			"route {} -> {}: {} ({:.0}m, {}s)",
			from_poi.id,
			to_poi.id,
			path,
			distance,
			estimated_time
		);

		let saved = self.storage.create_route(RouteData {
			from_poi_id: from_poi.id,
			to_poi_id: to_poi.id,
			floor_plan_id: from_poi.floor_plan_id,
			path: path.to_vec(),
			distance: distance.round(),
			estimated_time,
			directions,
		});
		route_log!(debug, "saved route {}", saved.id);

		Ok(saved)
	}

	#[cfg(feature = "parallel")]
	fn lookup_pair(&self, from_poi_id: &str, to_poi_id: &str) -> (Option<Poi>, Option<Poi>) {
		rayon::join(
			|| self.storage.get_poi(from_poi_id),
			|| self.storage.get_poi(to_poi_id),
		)
	}

	#[cfg(not(feature = "parallel"))]
	fn lookup_pair(&self, from_poi_id: &str, to_poi_id: &str) -> (Option<Poi>, Option<Poi>) {
		(
			self.storage.get_poi(from_poi_id),
			self.storage.get_poi(to_poi_id),
		)
	}
}
