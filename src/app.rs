// src/app.rs
//
// Boucle eframe de la calculatrice : thème, raccourci Échap, puis la vue.
// L’état vit dans etat.rs, le dessin dans vue.rs (Enter y est lu, champ focalisé).

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

/// Visuels egui selon le thème choisi dans l’en-tête.
fn visuels(theme_sombre: bool) -> egui::Visuals {
    if theme_sombre {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(visuels(self.theme_sombre));

        // Échap = AC, où que soit le focus
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| self.ui(ui));
    }
}
