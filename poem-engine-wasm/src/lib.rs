//! WASM bindings for poem-engine — local poems for the phone page.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use poem_engine::core::fallback::fallback_text;
use poem_engine::core::generator::PoemGenerator;
use poem_engine::core::pools::PhrasePools;
use poem_engine::schema::menu::{find_food, find_mood, FOODS, MOODS};
use poem_engine::schema::request::GenerationRequest;

// ---------------------------------------------------------------------------
// PoemWriter — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct PoemWriter {
    generator: PoemGenerator,
    rng: StdRng,
}

#[wasm_bindgen]
impl PoemWriter {
    /// Create a writer over the built-in pools. Without a seed the
    /// browser's crypto RNG is used.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<u64>) -> Result<PoemWriter, JsError> {
        let pools = PhrasePools::builtin()
            .map_err(|e| JsError::new(&format!("Pool parse error: {e}")))?;

        Ok(PoemWriter {
            generator: PoemGenerator::new(pools)
                .map_err(|e| JsError::new(&format!("Pool error: {e}")))?,
            rng: rng_for(seed),
        })
    }

    /// Generate a text from the same JSON body the endpoint accepts.
    ///
    /// ```json
    /// { "moodLabel": "Tired", "foodLabel": "Sushi", "style": "poem" }
    /// ```
    pub fn write(&mut self, request_json: &str) -> Result<String, JsError> {
        let input = GenerationRequest::from_body(request_json.as_bytes())
            .map_err(|_| JsError::new("Invalid JSON"))?;
        let request = input.to_poem_request();
        Ok(self.generator.generate(&request, &mut self.rng))
    }

    /// The offline message for two built-in card labels.
    pub fn fallback(mood_label: &str, food_label: &str) -> Result<String, JsError> {
        let mood = find_mood(mood_label)
            .ok_or_else(|| JsError::new(&format!("Unknown mood: {mood_label}")))?;
        let food = find_food(food_label)
            .ok_or_else(|| JsError::new(&format!("Unknown food: {food_label}")))?;
        Ok(fallback_text(mood, food))
    }

    /// Reseed the RNG.
    pub fn reset(&mut self, seed: Option<u64>) {
        self.rng = rng_for(seed);
    }

    /// Return JSON array of mood cards.
    pub fn moods() -> String {
        serde_json::to_string(&MOODS).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of food cards.
    pub fn foods() -> String {
        serde_json::to_string(&FOODS).unwrap_or_else(|_| "[]".to_string())
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
