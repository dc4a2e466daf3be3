//! Floor Plans, Points of Interest and saved Routes, and the traits the
//! [`RouteService`](crate::RouteService) uses to read and write them.
//!
//! The engine itself never owns this data. Anything that can look up a [`Poi`] by id and save a
//! [`RouteData`] can back a `RouteService`. [`MemStorage`] is a thread-safe in-memory
//! implementation, useful for tests and small deployments.

use crate::{
	directions::DirectionStep,
	geometry::Point,
	utils::route_log,
};

use hashbrown::HashMap;
use parking_lot::RwLock;
use slab::Slab;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A Floor Plan that Points of Interest are placed on
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FloorPlan {
	/// unique id
	pub id: String,
	/// display name, e.g. `"Ground Floor"`
	pub name: String,
	/// width of the plan image in pixels
	pub width: u32,
	/// height of the plan image in pixels
	pub height: u32,
	/// where the plan image can be loaded from
	pub image_url: Option<String>,
	/// whether this plan is shown by default
	pub is_active: bool,
}

impl FloorPlan {
	/// Creates an inactive Floor Plan without an image
	pub fn new(id: impl Into<String>, name: impl Into<String>, width: u32, height: u32) -> FloorPlan {
		FloorPlan {
			id: id.into(),
			name: name.into(),
			width,
			height,
			image_url: None,
			is_active: false,
		}
	}
}

/// The outline of a Point of Interest
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum PoiShape {
	/// a single pin at the position of the Poi
	#[default]
	Point,
	/// an axis-aligned rectangle anchored at the position of the Poi, size in normalized units
	Rectangle {
		/// normalized width
		width: f64,
		/// normalized height
		height: f64,
	},
}

/// A named, categorized location on a Floor Plan.
///
/// Routing only reads `id`, `floor_plan_id`, `name`, `x` and `y`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Poi {
	/// unique id
	pub id: String,
	/// the Floor Plan this Poi is placed on
	pub floor_plan_id: String,
	/// display name, used in Directions
	pub name: String,
	/// e.g. `"dining"`
	pub category: String,
	/// e.g. `"restaurant"`
	pub subcategory: Option<String>,
	/// free text shown to visitors
	pub description: Option<String>,
	/// normalized horizontal position
	pub x: f64,
	/// normalized vertical position
	pub y: f64,
	/// marker color as a CSS color, defaults to `#10b981`
	pub color: String,
	/// marker icon class, defaults to `fas fa-map-pin`
	pub icon: String,
	/// point or rectangle
	#[cfg_attr(feature = "serde", serde(flatten))]
	pub shape: PoiShape,
}

impl Poi {
	/// Creates a point-shaped Poi with the default color and icon
	pub fn new(
		id: impl Into<String>,
		floor_plan_id: impl Into<String>,
		name: impl Into<String>,
		category: impl Into<String>,
		position: Point,
	) -> Poi {
		Poi {
			id: id.into(),
			floor_plan_id: floor_plan_id.into(),
			name: name.into(),
			category: category.into(),
			subcategory: None,
			description: None,
			x: position.x,
			y: position.y,
			color: "#10b981".to_owned(),
			icon: "fas fa-map-pin".to_owned(),
			shape: PoiShape::Point,
		}
	}

	/// The position of this Poi on its Floor Plan
	pub fn position(&self) -> Point {
		Point::new(self.x, self.y)
	}

	fn matches(&self, query: &str) -> bool {
		self.name.to_lowercase().contains(query)
			|| self.category.to_lowercase().contains(query)
			|| self
				.subcategory
				.as_ref()
				.map_or(false, |sub| sub.to_lowercase().contains(query))
	}
}

/// Everything about a calculated Route except its id
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RouteData {
	/// where the Route starts
	pub from_poi_id: String,
	/// where the Route ends
	pub to_poi_id: String,
	/// the Floor Plan of the starting Poi
	pub floor_plan_id: String,
	/// the Points to walk along, from the first Poi to the second
	pub path: Vec<Point>,
	/// total length in whole meters
	pub distance: f64,
	/// total walking time in seconds
	pub estimated_time: u32,
	/// one step per Point of `path`
	pub directions: Vec<DirectionStep>,
}

impl RouteData {
	/// Attaches an id, turning this into a saved Route
	pub fn with_id(self, id: impl Into<String>) -> RouteResult {
		RouteResult {
			id: id.into(),
			route: self,
		}
	}
}

/// A saved Route. Never changed after it was created.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
	/// unique id generated by the [`RouteStore`]
	pub id: String,
	/// the calculated Route
	#[cfg_attr(feature = "serde", serde(flatten))]
	pub route: RouteData,
}

impl std::ops::Deref for RouteResult {
	type Target = RouteData;
	fn deref(&self) -> &RouteData {
		&self.route
	}
}

/// Looks up Points of Interest by id
pub trait PoiLookup: Send + Sync {
	/// Returns the Poi with the given id, or `None` if it does not exist
	fn get_poi(&self, id: &str) -> Option<Poi>;
}

/// Persists calculated Routes
pub trait RouteStore: Send + Sync {
	/// Saves `route` under a newly generated, unique id
	fn create_route(&self, route: RouteData) -> RouteResult;
}

/// A thread-safe in-memory store for Floor Plans, Points of Interest and Routes.
///
/// ```
/// use floorplan_routing::storage::{MemStorage, PoiLookup};
///
/// let storage = MemStorage::with_sample_mall();
/// let entrance = storage.get_poi("poi-1").unwrap();
///
/// assert_eq!(entrance.name, "Main Entrance");
/// assert_eq!(storage.pois_by_floor_plan("sample-mall").len(), 5);
/// ```
#[derive(Debug, Default)]
pub struct MemStorage {
	floor_plans: RwLock<HashMap<String, FloorPlan>>,
	pois: RwLock<HashMap<String, Poi>>,
	routes: RwLock<Slab<RouteResult>>,
	next_id: AtomicUsize,
}

impl MemStorage {
	/// Creates an empty store
	pub fn new() -> MemStorage {
		MemStorage::default()
	}

	/// Creates a store holding the sample mall Floor Plan `sample-mall` and its five Points of
	/// Interest `poi-1` to `poi-5`
	pub fn with_sample_mall() -> MemStorage {
		let storage = MemStorage::new();

		let mut plan = FloorPlan::new("sample-mall", "Sample Shopping Mall - Ground Floor", 2400, 1800);
		plan.is_active = true;
		storage.insert_floor_plan(plan);

		let samples = [
			("poi-1", "Main Entrance", "entrance", None, (0.1, 0.5), "#3b82f6", "fas fa-door-open", "Main entrance to the mall"),
			("poi-2", "Apple Store", "electronics", Some("technology"), (0.3, 0.25), "#10b981", "fas fa-store", "Premium electronics and accessories"),
			("poi-3", "Food Court", "dining", Some("restaurant"), (0.6, 0.4), "#f59e0b", "fas fa-utensils", "Various dining options"),
			("poi-4", "H&M", "clothing", Some("apparel"), (0.7, 0.6), "#8b5cf6", "fas fa-tshirt", "Fashion and clothing store"),
			("poi-5", "Restrooms", "amenities", Some("facilities"), (0.8, 0.3), "#ef4444", "fas fa-restroom", "Public restrooms"),
		];
		for (id, name, category, subcategory, position, color, icon, description) in samples {
			let mut poi = Poi::new(id, "sample-mall", name, category, position.into());
			poi.subcategory = subcategory.map(str::to_owned);
			poi.description = Some(description.to_owned());
			poi.color = color.to_owned();
			poi.icon = icon.to_owned();
			storage.insert_poi(poi);
		}

		storage
	}

	fn generate_id(&self, prefix: &str) -> String {
		let n = self.next_id.fetch_add(1, Ordering::Relaxed);
		format!("{}-{}", prefix, n)
	}

	// Floor Plans

	/// All Floor Plans, ordered by id
	pub fn floor_plans(&self) -> Vec<FloorPlan> {
		let mut plans: Vec<_> = self.floor_plans.read().values().cloned().collect();
		plans.sort_by(|a, b| a.id.cmp(&b.id));
		plans
	}

	/// The Floor Plan with the given id
	pub fn floor_plan(&self, id: &str) -> Option<FloorPlan> {
		self.floor_plans.read().get(id).cloned()
	}

	/// Stores `plan` under its own id, returning the Floor Plan it replaced
	pub fn insert_floor_plan(&self, plan: FloorPlan) -> Option<FloorPlan> {
		route_log!(trace, "storing floor plan {}", plan.id);
		self.floor_plans.write().insert(plan.id.clone(), plan)
	}

	/// Stores `plan` under a newly generated id and returns it
	pub fn create_floor_plan(&self, mut plan: FloorPlan) -> FloorPlan {
		plan.id = self.generate_id("plan");
		self.insert_floor_plan(plan.clone());
		plan
	}

	/// Applies `update` to the Floor Plan with the given id and returns the result.
	///
	/// The id itself cannot be changed.
	pub fn update_floor_plan(&self, id: &str, update: impl FnOnce(&mut FloorPlan)) -> Option<FloorPlan> {
		let mut plans = self.floor_plans.write();
		let plan = plans.get_mut(id)?;
		update(plan);
		plan.id = id.to_owned();
		Some(plan.clone())
	}

	/// Removes the Floor Plan with the given id. Returns `false` if it did not exist.
	pub fn delete_floor_plan(&self, id: &str) -> bool {
		self.floor_plans.write().remove(id).is_some()
	}

	// Points of Interest

	/// All Points of Interest on the given Floor Plan, ordered by id
	pub fn pois_by_floor_plan(&self, floor_plan_id: &str) -> Vec<Poi> {
		let mut pois: Vec<_> = self
			.pois
			.read()
			.values()
			.filter(|poi| poi.floor_plan_id == floor_plan_id)
			.cloned()
			.collect();
		pois.sort_by(|a, b| a.id.cmp(&b.id));
		pois
	}

	/// Stores `poi` under its own id, returning the Poi it replaced
	pub fn insert_poi(&self, poi: Poi) -> Option<Poi> {
		route_log!(trace, "storing poi {} ({})", poi.id, poi.name);
		self.pois.write().insert(poi.id.clone(), poi)
	}

	/// Stores `poi` under a newly generated id and returns it
	pub fn create_poi(&self, mut poi: Poi) -> Poi {
		poi.id = self.generate_id("poi");
		self.insert_poi(poi.clone());
		poi
	}

	/// Applies `update` to the Poi with the given id and returns the result.
	///
	/// The id itself cannot be changed.
	pub fn update_poi(&self, id: &str, update: impl FnOnce(&mut Poi)) -> Option<Poi> {
		let mut pois = self.pois.write();
		let poi = pois.get_mut(id)?;
		update(poi);
		poi.id = id.to_owned();
		Some(poi.clone())
	}

	/// Removes the Poi with the given id. Returns `false` if it did not exist.
	pub fn delete_poi(&self, id: &str) -> bool {
		self.pois.write().remove(id).is_some()
	}

	/// Points of Interest whose name, category or subcategory contains `query`, ignoring case.
	///
	/// An empty `query` matches everything. If `floor_plan_id` is given, only Points of Interest
	/// on that Floor Plan are considered. Results are ordered by id.
	pub fn search_pois(&self, query: &str, floor_plan_id: Option<&str>) -> Vec<Poi> {
		let query = query.to_lowercase();
		let mut pois: Vec<_> = self
			.pois
			.read()
			.values()
			.filter(|poi| floor_plan_id.map_or(true, |id| poi.floor_plan_id == id))
			.filter(|poi| query.is_empty() || poi.matches(&query))
			.cloned()
			.collect();
		pois.sort_by(|a, b| a.id.cmp(&b.id));
		pois
	}

	// Routes

	/// The first saved Route from one Poi to another
	pub fn get_route(&self, from_poi_id: &str, to_poi_id: &str) -> Option<RouteResult> {
		self.routes
			.read()
			.iter()
			.map(|(_, route)| route)
			.find(|route| route.from_poi_id == from_poi_id && route.to_poi_id == to_poi_id)
			.cloned()
	}

	/// All saved Routes on the given Floor Plan, oldest first
	pub fn routes_by_floor_plan(&self, floor_plan_id: &str) -> Vec<RouteResult> {
		self.routes
			.read()
			.iter()
			.map(|(_, route)| route)
			.filter(|route| route.floor_plan_id == floor_plan_id)
			.cloned()
			.collect()
	}

	/// The number of saved Routes
	pub fn route_count(&self) -> usize {
		self.routes.read().len()
	}
}

impl PoiLookup for MemStorage {
	fn get_poi(&self, id: &str) -> Option<Poi> {
		self.pois.read().get(id).cloned()
	}
}

impl RouteStore for MemStorage {
	fn create_route(&self, route: RouteData) -> RouteResult {
		let mut routes = self.routes.write();
		let entry = routes.vacant_entry();
		let saved = route.with_id(format!("route-{}", entry.key()));
		route_log!(trace, "storing route {}", saved.id);
		entry.insert(saved).clone()
	}
}

impl<T: PoiLookup + ?Sized> PoiLookup for std::sync::Arc<T> {
	fn get_poi(&self, id: &str) -> Option<Poi> {
		(**self).get_poi(id)
	}
}

impl<T: RouteStore + ?Sized> RouteStore for std::sync::Arc<T> {
	fn create_route(&self, route: RouteData) -> RouteResult {
		(**self).create_route(route)
	}
}
