// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : saisie directe dans le champ, Enter évalue
// - Tactile : pavé complet (chiffres, opérateurs, fonctions), focus redonné après clic
// - Historique cliquable (rappelle l’expression)

use eframe::egui;

use calculatrice_glow::noyau;

use super::etat::AppCalc;

/// Fonctions du pavé : le bouton ajoute "nom(".
const FONCTIONS: [&str; 13] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "sqrt", "ln", "log", "exp", "abs", "floor",
    "ceil",
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui);
                ui.add_space(6.0);

                self.ui_entree(ui);
                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Calculatrice Glow");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme = if self.theme_sombre { "☀ Clair" } else { "🌙 Sombre" };
                if ui.button(theme).clicked() {
                    self.basculer_theme();
                }

                let mode = ui
                    .button(self.mode.libelle())
                    .on_hover_text("Bascule degrés / radians");
                if mode.clicked() {
                    self.basculer_mode();
                }
            });
        });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: sin(30)+2^10, 50%*8, 5!")
                .id_salt("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton (pavé / DEL / AC / etc.), on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Saisie clavier : l’ancien résultat n’est plus à jour
        if resp.changed() {
            self.affichage.clear();
        }

        // --- Clavier : Enter évalue (le champ perd le focus sur Enter) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.lost_focus() && enter {
            self.eval_via_noyau();
        }
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::Frame::group(ui.style())
                .fill(ui.visuals().extreme_bg_color)
                .show(ui, |ui| {
                    ui.set_min_width((ui.available_width() - 80.0).max(0.0));
                    let texte = egui::RichText::new(&self.affichage).monospace().size(22.0);
                    if self.affichage == super::etat::TEXTE_ERREUR {
                        ui.colored_label(ui.visuals().error_fg_color, texte);
                    } else {
                        ui.label(texte);
                    }
                });

            let copier = ui.add_enabled(!self.dernier.is_empty(), egui::Button::new("Copier"));
            if copier.clicked() {
                ui.ctx().copy_text(self.dernier.clone());
            }
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_glow")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_insert(ui, "÷", "÷");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "×", "×");
                self.bouton_action(ui, "AC", "Efface l’entrée", Action::ClearEntree);
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, "–", "–");
                self.bouton_action(ui, "Ans", "Dernière réponse", Action::Ans);
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, ".", ".");
                self.bouton_insert(ui, "%", "%");
                self.bouton_insert(ui, "+", "+");
                self.bouton_action(ui, "=", "Évaluer", Action::Evaluer);
                ui.end_row();

                self.bouton_insert(ui, "(", "(");
                self.bouton_insert(ui, ")", ")");
                self.bouton_insert(ui, "xʸ", "^");
                self.bouton_insert(ui, "n!", "!");
                self.bouton_insert(ui, "π", "π");
                ui.end_row();
            });

        ui.add_space(6.0);

        ui.horizontal_wrapped(|ui| {
            for f in FONCTIONS {
                let label = if f == "sqrt" { "√" } else { f };
                self.bouton_insert(ui, label, &format!("{f}("));
            }
            self.bouton_insert(ui, "e", "e");
        });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.weak("(vide)");
                    return;
                }

                let mut rappel = None;
                for (i, h) in self.historique.iter().enumerate() {
                    let ligne = ui
                        .selectable_label(false, format!("{} = {}", h.expression, h.resultat))
                        .on_hover_text("Cliquer pour reprendre l’expression");
                    if ligne.clicked() {
                        rappel = Some(i);
                    }
                }
                if let Some(i) = rappel {
                    self.rappeler(i);
                }
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 34.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::Backspace => self.backspace_entree(),
                Action::Ans => self.inserer_dernier(),
                Action::Evaluer => self.eval_via_noyau(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([56.0, 34.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer(to_insert);
        }
    }

    /// Évalue l’entrée via le noyau, puis dépose l’issue dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match noyau::evaluate(&self.entree, self.mode) {
            Ok(Some(v)) => self.set_resultat(noyau::format(v)),
            Ok(None) => self.set_vide(),
            Err(_) => self.set_erreur(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    Backspace,
    Ans,
    Evaluer,
}
