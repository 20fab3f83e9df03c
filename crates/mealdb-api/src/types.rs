//! Data types for MealDB responses and the records built from them

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::warn;

use crate::normalize::{probe_numbered_fields, FieldSource, INGREDIENT_PREFIX, MEASURE_PREFIX};

/// Envelope shared by every MealDB endpoint: `{"meals": [...]}`.
///
/// MealDB answers `{"meals": null}` when nothing matches, which decodes as an
/// empty list. A body without the `meals` key is rejected.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct MealsResponse<T> {
    #[serde(deserialize_with = "nullable_list")]
    meals: Vec<T>,
}

impl<T> MealsResponse<T> {
    /// Entries in server order
    pub fn into_entries(self) -> Vec<T> {
        self.meals
    }
}

fn nullable_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Entry of the list endpoint as sent by the server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawMealEntry {
    #[serde(rename = "idMeal")]
    pub id_meal: Option<String>,
    #[serde(rename = "strMeal")]
    pub str_meal: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub str_meal_thumb: Option<String>,
}

/// Lightweight list-view representation of a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SummaryRecord {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
}

impl SummaryRecord {
    /// Build a record from a raw entry, or `None` if it fails the completeness filter
    pub fn from_entry(entry: RawMealEntry) -> Option<Self> {
        Some(Self {
            id: non_empty(entry.id_meal)?,
            name: non_empty(entry.str_meal)?,
            thumbnail_url: non_empty(entry.str_meal_thumb)?,
        })
    }
}

impl From<SummaryRecord> for RawMealEntry {
    fn from(record: SummaryRecord) -> Self {
        Self {
            id_meal: Some(record.id),
            str_meal: Some(record.name),
            str_meal_thumb: Some(record.thumbnail_url),
        }
    }
}

/// Drop every entry whose id, name or thumbnail is missing or blank.
///
/// Kept values are trimmed. Server order is preserved.
pub fn complete_entries<I>(entries: I) -> Vec<SummaryRecord>
where
    I: IntoIterator<Item = RawMealEntry>,
{
    entries
        .into_iter()
        .filter_map(SummaryRecord::from_entry)
        .collect()
}

/// Full representation of a catalog item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub thumbnail_url: String,
    pub tags: Option<String>,
    /// Ingredient names, positionally paired with `measures`
    pub ingredients: Vec<String>,
    pub measures: Vec<String>,
}

impl DetailRecord {
    /// Build a detail record from a raw detail entry.
    ///
    /// Returns `None` when the completeness filter fails or when one of the
    /// required text fields is absent. Ingredient and measure lists of
    /// different lengths are truncated to the shorter one.
    pub fn from_fields<S>(fields: &S, max_numbered_fields: usize) -> Option<Self>
    where
        S: FieldSource + ?Sized,
    {
        let id = non_empty_str(fields.field("idMeal"))?;
        let name = non_empty_str(fields.field("strMeal"))?;
        let thumbnail_url = non_empty_str(fields.field("strMealThumb"))?;

        let category = fields.field("strCategory")?.to_string();
        let area = fields.field("strArea")?.to_string();
        let instructions = fields.field("strInstructions")?.to_string();
        let tags = non_empty_str(fields.field("strTags"));

        let mut ingredients = probe_numbered_fields(fields, INGREDIENT_PREFIX, max_numbered_fields);
        let mut measures = probe_numbered_fields(fields, MEASURE_PREFIX, max_numbered_fields);

        if ingredients.len() != measures.len() {
            warn!(
                id = %id,
                ingredients = ingredients.len(),
                measures = measures.len(),
                "Ingredient and measure counts differ, truncating to shorter list"
            );
            let len = ingredients.len().min(measures.len());
            ingredients.truncate(len);
            measures.truncate(len);
        }

        Some(Self {
            id,
            name,
            category,
            area,
            instructions,
            thumbnail_url,
            tags,
            ingredients,
            measures,
        })
    }

    /// Iterate `(ingredient, measure)` pairs in recipe order
    pub fn ingredient_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.ingredients
            .iter()
            .map(String::as_str)
            .zip(self.measures.iter().map(String::as_str))
    }

    /// Split the comma-separated tag string into individual tags
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Raw detail entries are kept as JSON objects so numbered fields can be probed
pub type RawDetailEntry = Map<String, Value>;

fn non_empty(value: Option<String>) -> Option<String> {
    non_empty_str(value.as_deref())
}

/// Trimmed value, or `None` when absent or blank
fn non_empty_str(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
