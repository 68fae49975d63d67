//! Request validation: field presence per type, and the price range for join rows.

use crate::error::AppError;
use crate::models::{NewPizza, NewRestaurant, NewRestaurantPizza};
use serde_json::{Map, Value};
use std::ops::RangeInclusive;

pub const PRICE_RANGE: RangeInclusive<i64> = 1..=30;

/// Largest integer an f64 holds exactly.
const MAX_EXACT_F64: f64 = 9_007_199_254_740_992.0;

pub struct RequestValidator;

impl RequestValidator {
    /// `name` and `address` must be strings. Any miss is `InvalidData`.
    pub fn restaurant(body: Option<&Map<String, Value>>) -> Result<NewRestaurant, AppError> {
        let body = body.ok_or(AppError::InvalidData)?;
        Ok(NewRestaurant {
            name: required_text(body, "name")?,
            address: required_text(body, "address")?,
        })
    }

    pub fn pizza(body: Option<&Map<String, Value>>) -> Result<NewPizza, AppError> {
        let body = body.ok_or(AppError::InvalidData)?;
        Ok(NewPizza {
            name: required_text(body, "name")?,
            ingredients: required_text(body, "ingredients")?,
        })
    }

    /// Presence of all three fields, then the price range. Existence of the referenced
    /// rows is checked by the service inside the insert transaction.
    pub fn restaurant_pizza(body: Option<&Map<String, Value>>) -> Result<NewRestaurantPizza, AppError> {
        let body = body.ok_or_else(|| AppError::Validation("body is not a JSON object".into()))?;
        let price = present_number(body, "price");
        let pizza_id = present_number(body, "pizza_id");
        let restaurant_id = present_number(body, "restaurant_id");
        let (price, pizza_id, restaurant_id) = match (price, pizza_id, restaurant_id) {
            (Some(p), Some(pz), Some(r)) => (p, pz, r),
            _ => {
                return Err(AppError::Validation(
                    "missing required fields: price, pizza_id, restaurant_id".into(),
                ))
            }
        };
        if !PRICE_RANGE.contains(&price) {
            return Err(AppError::Validation(format!(
                "price must be between {} and {}, got {}",
                PRICE_RANGE.start(),
                PRICE_RANGE.end(),
                price
            )));
        }
        Ok(NewRestaurantPizza {
            price,
            pizza_id,
            restaurant_id,
        })
    }
}

fn required_text(body: &Map<String, Value>, key: &str) -> Result<String, AppError> {
    body.get(key)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or(AppError::InvalidData)
}

/// A whole, non-zero number. Null, zero, strings and fractional values count as absent.
fn present_number(body: &Map<String, Value>, key: &str) -> Option<i64> {
    body.get(key).and_then(whole_number).filter(|n| *n != 0)
}

fn whole_number(v: &Value) -> Option<i64> {
    if let Some(n) = v.as_i64() {
        return Some(n);
    }
    v.as_f64()
        .filter(|f| f.fract() == 0.0 && f.abs() < MAX_EXACT_F64)
        .map(|f| f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn restaurant_requires_both_fields() {
        let ok = RequestValidator::restaurant(Some(&obj(json!({"name": "Sottocasa", "address": "298 Atlantic Ave"})))).unwrap();
        assert_eq!(ok.name, "Sottocasa");

        for body in [json!({"name": "x"}), json!({"address": "y"}), json!({"name": null, "address": "y"}), json!({"name": 3, "address": "y"})] {
            let err = RequestValidator::restaurant(Some(&obj(body))).unwrap_err();
            assert!(matches!(err, AppError::InvalidData));
        }
        assert!(matches!(RequestValidator::restaurant(None), Err(AppError::InvalidData)));
    }

    #[test]
    fn pizza_allows_empty_strings() {
        let ok = RequestValidator::pizza(Some(&obj(json!({"name": "", "ingredients": ""})))).unwrap();
        assert_eq!(ok, NewPizza { name: String::new(), ingredients: String::new() });
        assert!(matches!(
            RequestValidator::pizza(Some(&obj(json!({"name": "Geri"})))),
            Err(AppError::InvalidData)
        ));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        for price in [1, 15, 30] {
            let rp = RequestValidator::restaurant_pizza(Some(&obj(json!({"price": price, "pizza_id": 1, "restaurant_id": 2})))).unwrap();
            assert_eq!(rp, NewRestaurantPizza { price, pizza_id: 1, restaurant_id: 2 });
        }
        for price in [-4, 31, 35] {
            let err = RequestValidator::restaurant_pizza(Some(&obj(json!({"price": price, "pizza_id": 1, "restaurant_id": 2})))).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }
    }

    #[test]
    fn zero_empty_and_null_count_as_missing() {
        for body in [
            json!({"price": 0, "pizza_id": 1, "restaurant_id": 1}),
            json!({"price": 5, "pizza_id": 0, "restaurant_id": 1}),
            json!({"price": 5, "pizza_id": 1, "restaurant_id": null}),
            json!({"price": "", "pizza_id": 1, "restaurant_id": 1}),
            json!({"price": "5", "pizza_id": 1, "restaurant_id": 1}),
            json!({"pizza_id": 1, "restaurant_id": 1}),
        ] {
            let err = RequestValidator::restaurant_pizza(Some(&obj(body))).unwrap_err();
            assert!(matches!(err, AppError::Validation(ref r) if r.starts_with("missing")));
        }
    }

    #[test]
    fn whole_floats_are_accepted_fractions_are_not() {
        let rp = RequestValidator::restaurant_pizza(Some(&obj(json!({"price": 5.0, "pizza_id": 1, "restaurant_id": 1})))).unwrap();
        assert_eq!(rp.price, 5);
        assert!(RequestValidator::restaurant_pizza(Some(&obj(json!({"price": 5.5, "pizza_id": 1, "restaurant_id": 1})))).is_err());
    }
}
