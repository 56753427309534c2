// src/main.rs
//
// Calculatrice Glow : deux entrées pour la même AppCalc.
// - natif : journal (RUST_LOG) + config.toml, puis eframe::run_native
// - wasm32 : WebRunner sur <canvas id="the_canvas_id"> d’index.html

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppCalc;

const TITRE_APP: &str = "Calculatrice Glow";

/* ------------------------ natif ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use calculatrice_glow::reglages::Reglages;
    use tracing_subscriber::EnvFilter;

    // RUST_LOG=calculatrice_glow=debug pour voir la forme canonique de chaque évaluation
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let reglages = Reglages::charger();
    tracing::info!(mode = ?reglages.mode_angle, historique = reglages.historique_max, "démarrage");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([420.0, 680.0])
            .with_min_inner_size([360.0, 560.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::depuis_reglages(&reglages)))),
    )
}

/* ------------------------ wasm32 ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use calculatrice_glow::reglages::Reglages;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    const CANVAS_ID: &str = "the_canvas_id";

    /// Démarrage au chargement de la page (pas de config.toml côté web : défauts).
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), JsValue> {
        let canvas = canvas_calculatrice()?;
        let reglages = Reglages::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |_cc| Ok(Box::new(AppCalc::depuis_reglages(&reglages)))),
            )
            .await
    }

    /// Retrouve le <canvas> d’index.html et renomme l’onglet au passage.
    fn canvas_calculatrice() -> Result<HtmlCanvasElement, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("document indisponible"))?;
        document.set_title(TITRE_APP);

        document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str(&format!("aucun élément #{CANVAS_ID}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{CANVAS_ID} n’est pas un <canvas>")))
    }
}
