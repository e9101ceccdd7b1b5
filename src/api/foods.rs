//! Food Endpoints
//!
//! `FoodApi` over the REST backend.

use async_trait::async_trait;
use log::debug;

use super::{ApiResult, FoodApi, HttpClient};
use crate::models::{Food, NewFood};

const FOODS_PATH: &str = "/foods";

#[derive(Clone, Debug)]
pub struct RestFoodApi {
    http: HttpClient,
}

impl RestFoodApi {
    pub fn new(base_url: &str) -> Self {
        let http = HttpClient::new(base_url);
        debug!("food api at {}", http.base_url());
        Self { http }
    }
}

fn food_path(id: u32) -> String {
    format!("{}/{}", FOODS_PATH, id)
}

#[async_trait(?Send)]
impl FoodApi for RestFoodApi {
    async fn list_foods(&self) -> ApiResult<Vec<Food>> {
        self.http.get(FOODS_PATH).await
    }

    async fn create_food(&self, food: &NewFood) -> ApiResult<Food> {
        self.http.post(FOODS_PATH, food).await
    }

    async fn update_food(&self, id: u32, food: &Food) -> ApiResult<Food> {
        self.http.put(&food_path(id), food).await
    }

    async fn delete_food(&self, id: u32) -> ApiResult<()> {
        self.http.delete(&food_path(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_path() {
        assert_eq!(food_path(3), "/foods/3");
    }
}
