use std::collections::HashMap;

pub const PLACE_ID_PARAM: &str = "placeId";

/// Parameters of the current navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_place(place_id: impl Into<String>) -> Self {
        Self::new().with(PLACE_ID_PARAM, place_id)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn place_id(&self) -> Option<&str> {
        self.get(PLACE_ID_PARAM)
    }
}

impl From<Option<String>> for RouteParams {
    fn from(place_id: Option<String>) -> Self {
        match place_id {
            Some(id) => RouteParams::for_place(id),
            None => RouteParams::new(),
        }
    }
}
