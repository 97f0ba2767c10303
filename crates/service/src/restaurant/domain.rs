use serde::{Deserialize, Serialize};

/// Restaurant as exposed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub addr: String,
}

impl From<models::restaurant::Model> for Restaurant {
    fn from(m: models::restaurant::Model) -> Self {
        Self { id: m.id, name: m.name, addr: m.addr }
    }
}

/// Creation input. A missing `name` binds as empty and is then rejected as
/// blank; `addr` must be present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRestaurant {
    #[serde(default)]
    pub name: String,
    pub addr: String,
}

/// Sparse update. `None` leaves the column untouched, `Some("")` writes an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addr: Option<String>,
}

impl RestaurantPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.addr.is_none()
    }
}

/// List filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantFilter {
    #[serde(default)]
    pub city_id: Option<i32>,
}

impl RestaurantFilter {
    pub fn by_city(city_id: i32) -> Self {
        Self { city_id: Some(city_id) }
    }

    /// City to restrict to; zero and negative ids mean "no filter".
    pub fn city(&self) -> Option<i32> {
        self.city_id.filter(|c| *c > 0)
    }
}
