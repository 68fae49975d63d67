//! Entity to JSON conversion with optional field selection.

use crate::error::AppError;
use serde::Serialize;
use serde_json::{Map, Value};

pub const RESTAURANT_LIST_FIELDS: &[&str] = &["id", "name", "address"];
pub const PIZZA_LIST_FIELDS: &[&str] = &["id", "ingredients", "name"];

/// Full representation, including whatever the type nests.
pub fn to_dict<T: Serialize>(entity: &T) -> Result<Value, AppError> {
    Ok(serde_json::to_value(entity)?)
}

/// Keep only `fields` of an object representation. Non-objects pass through unchanged.
pub fn only<T: Serialize>(entity: &T, fields: &[&str]) -> Result<Value, AppError> {
    Ok(select_fields(to_dict(entity)?, fields))
}

pub fn only_many<T: Serialize>(entities: &[T], fields: &[&str]) -> Result<Vec<Value>, AppError> {
    entities.iter().map(|e| only(e, fields)).collect()
}

fn select_fields(value: Value, fields: &[&str]) -> Value {
    match value {
        Value::Object(map) => {
            let kept: Map<String, Value> = map
                .into_iter()
                .filter(|(k, _)| fields.contains(&k.as_str()))
                .collect();
            Value::Object(kept)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Pizza, Restaurant, RestaurantDetail, RestaurantPizza, RestaurantPizzaEntry};
    use serde_json::json;

    fn detail() -> RestaurantDetail {
        RestaurantDetail {
            restaurant: Restaurant {
                id: 1,
                name: "Karen's Pizza Shack".into(),
                address: "address1".into(),
            },
            restaurant_pizzas: vec![RestaurantPizzaEntry {
                row: RestaurantPizza {
                    id: 7,
                    price: 12,
                    pizza_id: 2,
                    restaurant_id: 1,
                },
                pizza: Pizza {
                    id: 2,
                    name: "Emma".into(),
                    ingredients: "Dough, Tomato Sauce, Cheese".into(),
                },
            }],
        }
    }

    #[test]
    fn full_representation_nests_join_rows_and_pizzas() {
        let v = to_dict(&detail()).unwrap();
        assert_eq!(
            v,
            json!({
                "id": 1,
                "name": "Karen's Pizza Shack",
                "address": "address1",
                "restaurant_pizzas": [{
                    "id": 7,
                    "price": 12,
                    "pizza_id": 2,
                    "restaurant_id": 1,
                    "pizza": { "id": 2, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese" }
                }]
            })
        );
    }

    #[test]
    fn only_drops_nested_relations() {
        let v = only(&detail(), RESTAURANT_LIST_FIELDS).unwrap();
        assert_eq!(v, json!({ "id": 1, "name": "Karen's Pizza Shack", "address": "address1" }));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let v = only(&detail(), &["id", "price"]).unwrap();
        assert_eq!(v, json!({ "id": 1 }));
    }

    #[test]
    fn non_objects_pass_through() {
        assert_eq!(only(&5, &["id"]).unwrap(), json!(5));
    }
}
