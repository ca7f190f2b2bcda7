// Home module: landing page controller

use serde_json::json;

use crate::dispatch::{Controller, HandlerResult, Operations, ParameterBag};

#[derive(Debug, Default)]
pub struct HomeController;

impl HomeController {
    /// Landing page, reached through the one-entry callback `["home"]`
    fn home(&mut self, params: &ParameterBag) -> HandlerResult {
        Ok(json!({
            "view": "home",
            "data": {
                "title": "Home",
                "lang": params.get_str("lang").unwrap_or("en"),
            }
        }))
    }

    fn index(&mut self, _params: &ParameterBag) -> HandlerResult {
        Ok(json!("Welcome"))
    }
}

impl Controller for HomeController {
    fn operations() -> Operations<Self> {
        Operations::new()
            .with("home", Self::home)
            .with("index", Self::index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{BoundController, Handler};

    #[test]
    fn test_home_view() {
        let mut home = BoundController::new(HomeController);
        let params: ParameterBag = serde_json::from_value(json!({"lang": "fr"})).unwrap();
        let result = home.call("home", &params).unwrap().unwrap();
        assert_eq!(result["view"], "home");
        assert_eq!(result["data"]["lang"], "fr");
    }

    #[test]
    fn test_index_is_plain_message() {
        let mut home = BoundController::new(HomeController);
        let result = home.call("index", &ParameterBag::default()).unwrap();
        assert_eq!(result, Ok(json!("Welcome")));
    }
}
