//! Shared helpers for this crate's tests

use std::io::Cursor;
use std::time::Duration;

use image::{ImageFormat, Rgb, RgbImage};
use serde_json::{json, Value};

/// List endpoint body for `(id, name, thumbnail)` triples
pub(crate) fn meal_list(entries: &[(&str, &str, &str)]) -> Value {
    let meals: Vec<Value> = entries
        .iter()
        .map(|(id, name, thumb)| json!({ "idMeal": id, "strMeal": name, "strMealThumb": thumb }))
        .collect();
    json!({ "meals": meals })
}

/// A small PNG with the given dimensions
pub(crate) fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([90, 160, 30]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).unwrap();
    buf.into_inner()
}

/// Poll `condition` until it holds, failing the test after five seconds
pub(crate) async fn wait_for<F>(condition: F)
where
    F: Fn() -> bool,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("condition not met in time");
}
