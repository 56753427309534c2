//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, affichage, dernière réponse,
//! historique, mode d’angle, thème) et offrir des opérations simples
//! (AC/DEL/Ans/bascules) sans logique d’affichage.
//!
//! Contrats (version UI) :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Un échec n’écrit ni dernière réponse ni historique.

use std::collections::VecDeque;

use calculatrice_glow::noyau::AngleMode;
use calculatrice_glow::reglages::Reglages;

/// Texte affiché pour tout échec (syntaxe, domaine, dépassement).
pub const TEXTE_ERREUR: &str = "Error";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub affichage: String, // résultat formaté, "Error", ou vide
    pub dernier: String,   // Ans (vide après un échec)

    // plus récente en tête
    pub historique: VecDeque<EntreeHistorique>,
    pub historique_max: usize,

    // --- paramètres ---
    pub mode: AngleMode,
    pub theme_sombre: bool,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::depuis_reglages(&Reglages::default())
    }
}

impl AppCalc {
    pub fn depuis_reglages(r: &Reglages) -> Self {
        Self {
            entree: String::new(),
            affichage: String::new(),
            dernier: String::new(),
            historique: VecDeque::with_capacity(r.historique_max),
            historique_max: r.historique_max,
            mode: r.mode_angle,
            theme_sombre: r.theme_sombre,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// Ajoute du texte en fin d’entrée ; l’affichage précédent n’est plus à jour.
    pub fn inserer(&mut self, texte: &str) {
        self.entree.push_str(texte);
        self.affichage.clear();
        self.focus_entree = true;
    }

    /// AC : efface l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.affichage.clear();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère.
    pub fn backspace_entree(&mut self) {
        self.entree.pop();
        self.affichage.clear();
        self.focus_entree = true;
    }

    /// Ans : ajoute la dernière réponse (rien si aucune).
    pub fn inserer_dernier(&mut self) {
        if self.dernier.is_empty() {
            return;
        }
        let ans = self.dernier.clone();
        self.inserer(&ans);
    }

    pub fn basculer_mode(&mut self) {
        self.mode = self.mode.bascule();
        self.focus_entree = true;
    }

    pub fn basculer_theme(&mut self) {
        self.theme_sombre = !self.theme_sombre;
    }

    /// Remet une expression de l’historique dans l’entrée.
    pub fn rappeler(&mut self, index: usize) {
        if let Some(h) = self.historique.get(index) {
            self.entree = h.expression.clone();
            self.affichage.clear();
            self.focus_entree = true;
        }
    }

    /* ------------------------ Dépôt des issues d’évaluation ------------------------ */

    /// Succès : affichage + Ans + historique (borné).
    pub fn set_resultat(&mut self, resultat: impl Into<String>) {
        let resultat = resultat.into();
        self.affichage = resultat.clone();
        self.dernier = resultat.clone();

        self.historique.push_front(EntreeHistorique {
            expression: self.entree.clone(),
            resultat,
        });
        self.historique.truncate(self.historique_max);

        self.focus_entree = true;
    }

    /// Échec : "Error", Ans effacée, pas d’historique.
    pub fn set_erreur(&mut self) {
        self.affichage = TEXTE_ERREUR.to_string();
        self.dernier.clear();
        self.focus_entree = true;
    }

    /// Entrée vide : rien à afficher, rien d’autre ne change.
    pub fn set_vide(&mut self) {
        self.affichage.clear();
        self.focus_entree = true;
    }
}
